//! Main App component

use crate::components::NavBar;
use crate::pages::Home;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use portfolio_types::{ContentError, PortfolioContent};
use std::sync::Arc;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<PortfolioContent>,
}

impl AppState {
    pub fn new(content: PortfolioContent) -> Self {
        Self { content: Arc::new(content) }
    }
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match crate::content::load() {
        Ok(content) => {
            log::info!(
                "Content loaded: {} projects, {} shorts, {} services",
                content.projects.len(),
                content.shorts.len(),
                content.services.len()
            );
            let state = AppState::new(content);
            let title = format!("{} | {}", state.content.profile.brand, state.content.profile.role);
            let description = state.content.profile.summary.clone();
            provide_context(state);

            view! {
                <Title text=title />
                <Meta name="description" content=description />
                <main class="page">
                    <NavBar />
                    <Home />
                </main>
            }
            .into_any()
        },
        Err(err) => {
            log::error!("Failed to load page content: {err}");
            view! { <ContentErrorNotice err=err /> }.into_any()
        },
    }
}

/// Shown instead of the page when the bundled content is broken.
#[component]
fn ContentErrorNotice(err: ContentError) -> impl IntoView {
    view! {
        <main class="page page--error">
            <div class="content-error">
                <h1>"This page could not be rendered"</h1>
                <p class="content-error__detail">{err.to_string()}</p>
            </div>
        </main>
    }
}
