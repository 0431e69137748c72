//! Shorts carousel.
//!
//! One snap-scroll container, one viewport-height slot per video. The
//! section owns the mute map and a handle for every slot; slots only see
//! their own entry and report toggles back up.

mod handles;
mod item;

use handles::{ScrollContainer, VideoRef};
use item::ShortItem;

use crate::app::AppState;
use crate::components::{IconButton, IconButtonVariant, Section};
use crate::formatters::position_label;
use leptos::prelude::*;
use portfolio_types::{MuteStateMap, ScrollDirection, ShortsReel, VideoId, Viewport};

#[component]
pub(crate) fn ShortsSection() -> impl IntoView {
    let state = expect_context::<AppState>();
    let config = state.content.carousel;

    let reel = ShortsReel::new(state.content.videos(), config.item_height_px, |_| VideoRef::new());
    let total = reel.len();
    let container = ScrollContainer::new();
    let mute_states = RwSignal::new(MuteStateMap::new());
    let active_index = RwSignal::new(0usize);

    let slots = reel
        .slots()
        .iter()
        .map(|slot| (slot.item.clone(), slot.handle.node_ref()))
        .collect::<Vec<_>>();
    let reel = StoredValue::new(reel);

    let on_toggle = Callback::new(move |id: VideoId| {
        mute_states.maybe_update(|states| {
            reel.with_value(|reel| match reel.toggle_mute(states, &id) {
                Ok(now) => {
                    log::debug!("{id} is now {now}");
                    true
                },
                Err(err) => {
                    log::debug!("Mute toggle ignored: {err}");
                    false
                },
            })
        });
    });

    let step = move |direction: ScrollDirection| {
        reel.with_value(|reel| reel.scroll(&container, direction));
    };

    let on_scroll = move |_| {
        let index = Viewport::index_at(container.scroll_top(), config.item_height_px, total);
        if active_index.get_untracked() != index {
            active_index.set(index);
        }
    };

    view! {
        <Section id="shorts" title="Shorts 🎬" tone="dark">
            <div class="carousel">
                <div
                    node_ref=container.node_ref()
                    class="carousel__viewport no-scrollbar"
                    style=format!(
                        "width: {}px; height: {}px",
                        config.width_px,
                        config.item_height_px,
                    )
                    on:scroll=on_scroll
                >
                    {slots.into_iter().map(|(item, video_ref)| {
                        let id = item.id.clone();
                        let mute_state = Signal::derive(move || mute_states.with(|m| m.state(&id)));
                        view! {
                            <ShortItem
                                item=item
                                video_ref=video_ref
                                mute_state=mute_state
                                on_toggle=on_toggle
                                height_px=config.item_height_px
                            />
                        }
                    }).collect_view()}
                </div>

                <div class="carousel__arrows">
                    <IconButton
                        icon="⬆".to_string()
                        label="Previous short"
                        variant=IconButtonVariant::Arrow
                        idle=Signal::derive(move || active_index.get() == 0)
                        on_click=move || step(ScrollDirection::Up)
                    />
                    <span class="carousel__position">
                        {move || position_label(active_index.get(), total)}
                    </span>
                    <IconButton
                        icon="⬇".to_string()
                        label="Next short"
                        variant=IconButtonVariant::Arrow
                        idle=Signal::derive(move || active_index.get() + 1 >= total)
                        on_click=move || step(ScrollDirection::Down)
                    />
                </div>
            </div>
        </Section>
    }
}
