//! Hero: portrait with sweep, pulsing greeting, call to action

use crate::app::AppState;
use leptos::prelude::*;

#[component]
pub(crate) fn HeroSection() -> impl IntoView {
    let state = expect_context::<AppState>();
    let profile = state.content.profile.clone();

    view! {
        <section class="hero">
            <div class="hero__portrait fade-in">
                <img
                    src=profile.portrait
                    alt=profile.name.clone()
                    width="500"
                    height="500"
                    class="hero__img"
                />
                <div class="sweep sweep--loop"></div>
            </div>

            <div class="hero__text">
                <h2 class="hero__headline pulse">{profile.headline}</h2>
                <p class="hero__summary">
                    {format!("{} at ", profile.role)}
                    <span class="hero__company">{profile.company}</span>
                    ". "
                    {profile.summary}
                </p>
                <a href="#projects" class="cta">"View My Work"</a>
            </div>
        </section>
    }
}
