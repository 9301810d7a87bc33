// Document head: title, description, social-preview tags, favicon

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

/// Static head record serialized into the document `<head>`.
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub og_image: &'static str,
    pub charset: &'static str,
    pub twitter_card: &'static str,
    pub twitter_site: &'static str,
    pub twitter_creator: &'static str,
    pub twitter_title: &'static str,
    pub twitter_description: &'static str,
    pub twitter_image: &'static str,
}

pub fn page_meta() -> PageMeta {
    PageMeta {
        title: "Dhaiwat Pandya - Software Engineer",
        description: "I am Dhaiwat, a 21-year-old software engineer from Surat, India.",
        og_image: "https://staging.dhaiwat.com/thumb.png",
        charset: "utf-8",
        twitter_card: "summary_large_image",
        twitter_site: "@dhaiwat10",
        twitter_creator: "@dhaiwat10",
        twitter_title: "Dhaiwat Pandya - Software Engineer",
        twitter_description: "I am Dhaiwat, a 21-year-old software engineer from Surat, India.",
        twitter_image: "https://staging.dhaiwat.com/thumb.png",
    }
}

/// Declarative `<link>` tag record.
pub struct LinkTag {
    pub rel: &'static str,
    pub href: &'static str,
}

pub fn page_links() -> Vec<LinkTag> {
    vec![LinkTag {
        rel: "icon",
        href: "/favicon-16x16.png",
    }]
}

#[component]
pub fn Head() -> impl IntoView {
    let meta = page_meta();
    view! {
        <Title text=meta.title/>
        <Meta charset=meta.charset/>
        <Meta name="description" content=meta.description/>
        <Meta property="og:image" content=meta.og_image/>
        <Meta name="twitter:card" content=meta.twitter_card/>
        <Meta name="twitter:site" content=meta.twitter_site/>
        <Meta name="twitter:creator" content=meta.twitter_creator/>
        <Meta name="twitter:title" content=meta.twitter_title/>
        <Meta name="twitter:description" content=meta.twitter_description/>
        <Meta name="twitter:image" content=meta.twitter_image/>
        {page_links()
            .into_iter()
            .map(|link| view! { <Link rel=link.rel href=link.href/> })
            .collect::<Vec<_>>()}
    }
}
