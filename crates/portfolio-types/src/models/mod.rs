//! Page content models.

mod content;
mod video;

pub use content::{CarouselConfig, ContactInfo, PortfolioContent, Profile, Project, Service};
pub use video::{VideoId, VideoItem};
