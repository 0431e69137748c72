//! Embedded page content.

use portfolio_types::{ContentError, PortfolioContent};

const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");

/// Parse and validate the content document bundled into the binary.
pub fn load() -> Result<PortfolioContent, ContentError> {
    PortfolioContent::from_json(PORTFOLIO_JSON)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_is_valid() {
        let content = load().unwrap();

        assert_eq!(content.profile.brand, "Tonny.dev");
        assert_eq!(content.shorts, ["/shorts.mp4", "/short2.mp4", "/short3.mp4"]);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.contact.phones.len(), 2);
    }

    #[test]
    fn test_bundled_videos_have_positional_ids() {
        let videos = load().unwrap().videos();
        assert_eq!(videos[2].id.as_str(), "short-video-2");
    }
}
