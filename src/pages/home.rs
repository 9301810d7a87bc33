// Home page - bio + blog post links
use crate::sections::{Bio, Posts};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container">
            <main class="home__main">
                <Bio/>
                <Posts/>
            </main>
        </div>
    }
}
