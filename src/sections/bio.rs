use super::external_link::{DEVELOPER_DAO, ExternalLink, GITHUB, MOONSHOT_COLLECTIVE, TWITTER};
use leptos::prelude::*;

#[component]
pub fn Bio() -> impl IntoView {
    view! {
        <img class="avi" src="avi.jpeg"/>
        <h2>"Dhaiwat Pandya"</h2>
        <p>"Software engineer."</p>
        <p>
            "Building open source software with "
            <ExternalLink href=DEVELOPER_DAO.href label=DEVELOPER_DAO.label/>
            " and "
            <ExternalLink href=MOONSHOT_COLLECTIVE.href label=MOONSHOT_COLLECTIVE.label/>
            "."
        </p>
        <ExternalLink href=GITHUB.href label=GITHUB.label/>
        " | "
        <ExternalLink href=TWITTER.href label=TWITTER.label/>
    }
}
