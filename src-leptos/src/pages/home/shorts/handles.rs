//! DOM-backed handles for the carousel

use leptos::html;
use leptos::prelude::*;
use portfolio_types::{MediaHandle, ScrollSurface};
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Handle to one rendered `<video>`.
#[derive(Clone, Copy)]
pub(crate) struct VideoRef(NodeRef<html::Video>);

impl VideoRef {
    pub(crate) fn new() -> Self {
        Self(NodeRef::new())
    }

    pub(crate) fn node_ref(&self) -> NodeRef<html::Video> {
        self.0
    }
}

impl MediaHandle for VideoRef {
    fn muted(&self) -> Option<bool> {
        self.0.get_untracked().map(|video| video.muted())
    }

    fn set_muted(&self, muted: bool) {
        if let Some(video) = self.0.get_untracked() {
            video.set_muted(muted);
        }
    }
}

/// Handle to the snap-scroll container.
#[derive(Clone, Copy)]
pub(crate) struct ScrollContainer(NodeRef<html::Div>);

impl ScrollContainer {
    pub(crate) fn new() -> Self {
        Self(NodeRef::new())
    }

    pub(crate) fn node_ref(&self) -> NodeRef<html::Div> {
        self.0
    }

    /// Current vertical offset, 0 while unmounted.
    pub(crate) fn scroll_top(&self) -> f64 {
        self.0.get_untracked().map_or(0.0, |el| f64::from(el.scroll_top()))
    }
}

impl ScrollSurface for ScrollContainer {
    fn scroll_by(&self, delta_px: f64) {
        let Some(el) = self.0.get_untracked() else {
            log::debug!("Scroll ignored: container not mounted");
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(delta_px);
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_by_with_scroll_to_options(&options);
    }
}
