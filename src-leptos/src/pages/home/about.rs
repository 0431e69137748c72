use crate::app::AppState;
use crate::components::Section;
use leptos::prelude::*;

#[component]
pub(crate) fn AboutSection() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <Section id="about" title="About Me" tone="dark">
            <p class="about__text">{state.content.about.clone()}</p>
        </Section>
    }
}
