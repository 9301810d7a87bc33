use leptos::prelude::*;
use leptos_router::components::A;

/// Blog post link metadata
struct BlogPost {
    to: &'static str,
    title: &'static str,
}

const POSTS: &[BlogPost] = &[
    BlogPost {
        to: "/posts/develop-test-react-component-isolation",
        title: "Developing and testing React components in isolation",
    },
    BlogPost {
        to: "/posts/become-better-writer",
        title: "Becoming a better writer as a developer",
    },
];

#[component]
pub fn Posts() -> impl IntoView {
    view! {
        <hr/>
        <h2>"Blog posts"</h2>
        <ul>
            {POSTS
                .iter()
                .map(|post| {
                    view! {
                        <li>
                            <A href=post.to>{post.title}</A>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
