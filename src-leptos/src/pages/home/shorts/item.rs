//! One carousel slot: looping video plus mute toggle

use crate::components::{IconButton, IconButtonVariant};
use leptos::html;
use leptos::prelude::*;
use portfolio_types::{MuteState, VideoId, VideoItem};

#[component]
pub(crate) fn ShortItem(
    item: VideoItem,
    video_ref: NodeRef<html::Video>,
    /// Read-only view of this video's entry in the carousel's mute map
    #[prop(into)]
    mute_state: Signal<MuteState>,
    /// Reports a toggle request up to the carousel
    on_toggle: Callback<VideoId>,
    height_px: f64,
) -> impl IntoView {
    let VideoItem { id, source } = item;
    let icon = Signal::derive(move || mute_state.get().icon().to_string());
    let label = format!("Toggle sound for {id}");

    view! {
        <div class="short" style=format!("height: {height_px}px")>
            // Starts muted so autoplay is allowed; the map reads Muted too.
            <video
                node_ref=video_ref
                src=source
                autoplay=true
                muted=true
                prop:muted=true
                loop=true
                playsinline=true
                class="short__video"
            />
            <div class="short__mute">
                <IconButton
                    icon=icon
                    label=label
                    variant=IconButtonVariant::Overlay
                    on_click=move || on_toggle.run(id.clone())
                />
            </div>
        </div>
    }
}
