//! Gallery and service cards

use leptos::prelude::*;

/// Image on a black stage with a caption below.
#[component]
pub fn ImageCard(
    #[prop(into)] image: String,
    #[prop(into)] title: String,
) -> impl IntoView {
    view! {
        <div class="image-card">
            <div class="image-card__stage">
                <img
                    src=image
                    alt=title.clone()
                    width="300"
                    height="600"
                    loading="lazy"
                    class="image-card__img"
                />
            </div>
            <div class="image-card__title">{title}</div>
        </div>
    }
}

/// Title and text with hover scale and a light sweep.
#[component]
pub fn TextCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="text-card">
            <div class="sweep sweep--hover"></div>
            <h3 class="text-card__title">{title}</h3>
            <p class="text-card__desc">{description}</p>
        </div>
    }
}
