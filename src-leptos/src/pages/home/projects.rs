//! Project gallery grid

use crate::app::AppState;
use crate::components::{ImageCard, Section};
use leptos::prelude::*;

#[component]
pub(crate) fn ProjectsSection() -> impl IntoView {
    let state = expect_context::<AppState>();
    let projects = state.content.projects.clone();

    view! {
        <Section id="projects" title="Projects" tone="darker">
            <div class="grid grid--3">
                {projects.into_iter().map(|project| {
                    view! { <ImageCard image=project.image title=project.title /> }
                }).collect_view()}
            </div>
        </Section>
    }
}
