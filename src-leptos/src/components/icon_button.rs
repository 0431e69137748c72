//! Round icon-only button with variants

use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum IconButtonVariant {
    /// Small translucent pill laid over media
    #[default]
    Overlay,
    /// Large round carousel arrow
    Arrow,
}

impl IconButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            IconButtonVariant::Overlay => "icon-btn--overlay",
            IconButtonVariant::Arrow => "icon-btn--arrow",
        }
    }
}

#[component]
pub fn IconButton(
    /// Glyph shown on the button
    #[prop(into)]
    icon: Signal<String>,
    /// Accessible label
    #[prop(into)]
    label: String,
    #[prop(optional)]
    variant: IconButtonVariant,
    /// Dimmed look without disabling the click
    #[prop(optional, into)]
    idle: Signal<bool>,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    let variant_class = variant.class();

    view! {
        <button
            type="button"
            class=move || {
                let idle_class = if idle.get() { "icon-btn--idle" } else { "" };
                format!("icon-btn {} {}", variant_class, idle_class)
            }
            aria-label=label
            on:click=move |_| on_click()
        >
            {move || icon.get()}
        </button>
    }
}
