//! Fixed top navigation bar

use crate::app::AppState;
use leptos::prelude::*;

/// Anchor targets, in page order.
const NAV_ITEMS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Projects", "#projects"),
    ("Shorts", "#shorts"),
    ("Services", "#services"),
    ("Contact", "#contact"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <nav class="nav-bar">
            <a href="#" class="nav-bar__brand">{state.content.profile.brand.clone()}</a>
            <ul class="nav-bar__links">
                {NAV_ITEMS.into_iter().map(|(label, href)| {
                    view! {
                        <li>
                            <a href=href class="nav-bar__link">{label}</a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
