//! Typed error definitions for the portfolio.
//!
//! All errors are serializable, displayable and matchable. None of them is
//! ever shown to a visitor; the frontend logs them.

mod carousel;
mod content;

pub use carousel::CarouselError;
pub use content::ContentError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a content loading error
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Wraps a carousel operation error
    #[error("Carousel error: {0}")]
    Carousel(#[from] CarouselError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Carousel(CarouselError::NotMounted { id: "short-video-2".to_string() });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Carousel"));
        assert!(json.contains("short-video-2"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = ContentError::ValidationError {
            field: "contact.email".to_string(),
            message: "not an email".to_string(),
        };

        let msg = TypedError::from(err).to_string();
        assert!(msg.starts_with("Content error"));
        assert!(msg.contains("contact.email"));
    }
}
