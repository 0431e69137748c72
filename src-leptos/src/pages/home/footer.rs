use crate::app::AppState;
use crate::formatters::copyright_line;
use chrono::{Datelike, Local};
use leptos::prelude::*;

const VERSION: &str = env!("GIT_VERSION");

#[component]
pub(crate) fn Footer() -> impl IntoView {
    let state = expect_context::<AppState>();
    let line = copyright_line(Local::now().year(), &state.content.profile.brand);

    view! {
        <footer class="footer">
            <span>{line}</span>
            <span class="footer__version">{format!("v{}", VERSION)}</span>
        </footer>
    }
}
