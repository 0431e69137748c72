//! Shorts carousel state.
//!
//! The carousel owns one handle per rendered video and one handle for its
//! scroll container. Mute toggles and scroll steps go through those handles,
//! so the logic runs the same against DOM node refs and in-memory fakes.
//!
//! Per video the state machine is `Muted ⇄ Unmuted`, starting `Muted`.
//! [`MuteStateMap`] only stores videos that were toggled at least once;
//! a missing entry reads as muted.

mod mute;
mod reel;
mod scroll;

pub use mute::{MuteState, MuteStateMap};
pub use reel::{MediaHandle, ShortsReel, VideoSlot};
pub use scroll::{ScrollDirection, ScrollSurface, Viewport};
