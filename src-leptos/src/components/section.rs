//! Page section wrapper with anchor id and heading

use leptos::prelude::*;

#[component]
pub fn Section(
    /// Anchor id targeted by the nav bar
    #[prop(into)]
    id: String,
    #[prop(into)] title: String,
    /// Background tone: "dark" or "darker"
    #[prop(optional, into)]
    tone: String,
    children: Children,
) -> impl IntoView {
    let tone = if tone.is_empty() { "dark".to_string() } else { tone };

    view! {
        <section id=id class=format!("section section--{}", tone)>
            <h2 class="section__title">{title}</h2>
            {children()}
        </section>
    }
}
