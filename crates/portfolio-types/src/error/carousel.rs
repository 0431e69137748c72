//! Shorts carousel errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from carousel operations. Never user-visible.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CarouselError {
    /// The identifier does not belong to any rendered video
    #[error("Unknown video: {id}")]
    UnknownVideo {
        /// Identifier that was requested
        id: String,
    },

    /// The video exists but its element is not mounted
    #[error("Video element not mounted: {id}")]
    NotMounted {
        /// Identifier of the unmounted video
        id: String,
    },
}
