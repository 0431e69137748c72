//! Rendered shorts and the handles that drive them.

use super::mute::{MuteState, MuteStateMap};
use super::scroll::{ScrollDirection, ScrollSurface};
use crate::error::CarouselError;
use crate::models::{VideoId, VideoItem};

/// A playable video element the carousel owns a handle to.
pub trait MediaHandle {
    /// The element's current mute flag, `None` while it is not mounted.
    fn muted(&self) -> Option<bool>;

    fn set_muted(&self, muted: bool);
}

/// One rendered short paired with its element handle.
#[derive(Debug, Clone)]
pub struct VideoSlot<H> {
    pub item: VideoItem,
    pub handle: H,
}

/// The ordered set of rendered shorts.
///
/// Built once at render time. Items are never added, removed or reordered
/// afterwards.
#[derive(Debug, Clone)]
pub struct ShortsReel<H> {
    slots: Vec<VideoSlot<H>>,
    item_height: f64,
}

impl<H> ShortsReel<H> {
    /// Pair every item with a handle produced by `attach`.
    pub fn new(
        items: Vec<VideoItem>,
        item_height: f64,
        mut attach: impl FnMut(&VideoItem) -> H,
    ) -> Self {
        let slots = items
            .into_iter()
            .map(|item| {
                let handle = attach(&item);
                VideoSlot { item, handle }
            })
            .collect();
        Self { slots, item_height }
    }

    pub fn slots(&self) -> &[VideoSlot<H>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn handle(&self, id: &VideoId) -> Option<&H> {
        self.slots.iter().find(|slot| &slot.item.id == id).map(|slot| &slot.handle)
    }

    /// Move `surface` exactly one item-height in `direction`.
    pub fn scroll<S: ScrollSurface + ?Sized>(&self, surface: &S, direction: ScrollDirection) {
        surface.scroll_by(direction.delta(self.item_height));
    }
}

impl<H: MediaHandle> ShortsReel<H> {
    /// Flip the element's mute flag and record the new flag in `states`.
    ///
    /// Only the entry for `id` is written. On error nothing changes.
    pub fn toggle_mute(
        &self,
        states: &mut MuteStateMap,
        id: &VideoId,
    ) -> Result<MuteState, CarouselError> {
        let handle =
            self.handle(id).ok_or_else(|| CarouselError::UnknownVideo { id: id.to_string() })?;
        let muted = handle.muted().ok_or_else(|| CarouselError::NotMounted { id: id.to_string() })?;

        let next = !muted;
        handle.set_muted(next);
        states.record(id.clone(), next);
        Ok(MuteState::from_muted(next))
    }
}
