//! # Portfolio Types
//!
//! Content model, shorts carousel state and error definitions for the
//! portfolio page.
//!
//! - **`error`** - Typed error hierarchy for content loading and the carousel
//! - **`models`** - Page content (profile, projects, shorts, services, contact)
//! - **`carousel`** - Mute state map, media/scroll handles and the shorts reel
//!
//! ## Architecture Role
//!
//! ```text
//!     portfolio-types (this crate)
//!              │
//!              ▼
//!     portfolio-leptos (WASM frontend)
//! ```
//!
//! Nothing here touches the DOM. The frontend implements [`MediaHandle`] and
//! [`ScrollSurface`] over Leptos node refs; tests implement them in memory.

pub mod carousel;
pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{CarouselError, ContentError, Result, TypedError};

// Re-export core model types
pub use models::{
    CarouselConfig, ContactInfo, PortfolioContent, Profile, Project, Service, VideoId, VideoItem,
};

pub use carousel::{
    MediaHandle, MuteState, MuteStateMap, ScrollDirection, ScrollSurface, ShortsReel, Viewport,
};
