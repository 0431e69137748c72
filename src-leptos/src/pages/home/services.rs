//! Services grid with hover animation

use crate::app::AppState;
use crate::components::{Section, TextCard};
use leptos::prelude::*;

#[component]
pub(crate) fn ServicesSection() -> impl IntoView {
    let state = expect_context::<AppState>();
    let services = state.content.services.clone();

    view! {
        <Section id="services" title="Other Services" tone="darker">
            <div class="grid grid--4">
                {services.into_iter().map(|service| {
                    view! { <TextCard title=service.title description=service.description /> }
                }).collect_view()}
            </div>
        </Section>
    }
}
