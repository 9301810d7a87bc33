// dhaiwat.com personal homepage - Leptos 0.8 Edition

mod head;
mod pages;
mod sections;

use head::Head;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::HomePage;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    view! {
        <Head/>
        <Router>
            <Routes fallback=|| ()>
                <Route path=path!("/") view=HomePage/>
            </Routes>
        </Router>
    }
}
