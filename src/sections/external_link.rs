use leptos::prelude::*;

/// Off-site anchor content. Passed through verbatim, nothing is validated.
pub(crate) struct Anchor {
    pub href: &'static str,
    pub label: &'static str,
}

pub(crate) const DEVELOPER_DAO: Anchor = Anchor {
    href: "https://twitter.com/developer_dao",
    label: "Developer DAO",
};

pub(crate) const MOONSHOT_COLLECTIVE: Anchor = Anchor {
    href: "https://twitter.com/moonshotcollect",
    label: "
            the Moonshot Collective",
};

pub(crate) const GITHUB: Anchor = Anchor {
    href: "https:/github.com/dhaiwat10",
    label: "Github",
};

pub(crate) const TWITTER: Anchor = Anchor {
    href: "https://twitter.com/dhaiwat10",
    label: "Twitter",
};

const TARGET: &str = "_blank";
const REL: &str = "noopener noreferrer";

/// Anchor opened in a new tab; `rel` blocks `window.opener` access and
/// referrer leakage from the opened page.
#[component]
pub fn ExternalLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a href=href target=TARGET rel=REL>{label}</a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every off-site anchor on the page, in render order.
    const EXTERNAL_LINKS: [Anchor; 4] = [DEVELOPER_DAO, MOONSHOT_COLLECTIVE, GITHUB, TWITTER];

    #[test]
    fn four_external_links_in_render_order() {
        assert_eq!(EXTERNAL_LINKS.len(), 4);
        let hrefs: Vec<_> = EXTERNAL_LINKS.iter().map(|a| a.href).collect();
        assert_eq!(
            hrefs,
            [
                "https://twitter.com/developer_dao",
                "https://twitter.com/moonshotcollect",
                "https:/github.com/dhaiwat10",
                "https://twitter.com/dhaiwat10",
            ]
        );
    }

    #[test]
    fn moonshot_label_keeps_original_whitespace() {
        assert!(MOONSHOT_COLLECTIVE.label.starts_with('\n'));
        assert_eq!(
            MOONSHOT_COLLECTIVE.label.trim(),
            "the Moonshot Collective"
        );
    }

    #[test]
    fn new_tab_attributes_block_opener_and_referrer() {
        assert_eq!(TARGET, "_blank");
        assert_eq!(REL, "noopener noreferrer");
    }
}
