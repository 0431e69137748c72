//! Page content document.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::video::VideoItem;
use crate::error::ContentError;

/// Everything the page renders, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PortfolioContent {
    #[validate(nested)]
    pub profile: Profile,
    /// About section paragraph
    #[validate(length(min = 1))]
    pub about: String,
    #[validate(nested)]
    pub projects: Vec<Project>,
    /// Ordered short video locators
    pub shorts: Vec<String>,
    #[validate(nested)]
    pub services: Vec<Service>,
    #[validate(nested)]
    pub contact: ContactInfo,
    #[serde(default)]
    #[validate(nested)]
    pub carousel: CarouselConfig,
}

/// Hero and navigation identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Profile {
    /// Brand shown in the nav bar, e.g. `Tonny.dev`
    #[validate(length(min = 1))]
    pub brand: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(custom(function = "validate_locator"))]
    pub portrait: String,
    #[validate(length(min = 1))]
    pub headline: String,
    pub role: String,
    pub company: String,
    pub summary: String,
}

/// One project gallery card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Project {
    #[validate(custom(function = "validate_locator"))]
    pub image: String,
    #[validate(length(min = 1))]
    pub title: String,
}

/// One services grid card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Service {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactInfo {
    pub tagline: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phones: Vec<String>,
}

/// Carousel geometry in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct CarouselConfig {
    /// Height of one slot; every scroll step moves exactly this far
    #[validate(range(exclusive_min = 0.0))]
    pub item_height_px: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub width_px: f64,
}

impl CarouselConfig {
    pub const DEFAULT_ITEM_HEIGHT_PX: f64 = 540.0;
    pub const DEFAULT_WIDTH_PX: f64 = 300.0;
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { item_height_px: Self::DEFAULT_ITEM_HEIGHT_PX, width_px: Self::DEFAULT_WIDTH_PX }
    }
}

impl PortfolioContent {
    /// Parse and validate a content document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Self =
            serde_json::from_str(json).map_err(|e| ContentError::from_json_error(&e))?;
        content.check()?;
        Ok(content)
    }

    /// Field validation plus the list rules the derive cannot express.
    pub fn check(&self) -> Result<(), ContentError> {
        self.validate().map_err(|e| ContentError::from_validation_errors(&e))?;

        if self.shorts.is_empty() {
            return Err(ContentError::Empty { field: "shorts".to_string() });
        }
        for (index, source) in self.shorts.iter().enumerate() {
            if validate_locator(source).is_err() {
                return Err(ContentError::ValidationError {
                    field: format!("shorts[{index}]"),
                    message: format!("not an asset locator: {source:?}"),
                });
            }
        }
        Ok(())
    }

    /// Shorts as carousel items, ids in list order.
    pub fn videos(&self) -> Vec<VideoItem> {
        VideoItem::from_sources(&self.shorts)
    }
}

/// Root-relative path or absolute http(s) URL.
fn validate_locator(value: &str) -> Result<(), ValidationError> {
    let ok = value.starts_with('/')
        || value.starts_with("https://")
        || value.starts_with("http://");
    if ok && !value.chars().any(char::is_whitespace) {
        Ok(())
    } else {
        Err(ValidationError::new("locator"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> PortfolioContent {
        PortfolioContent {
            profile: Profile {
                brand: "Tonny.dev".to_string(),
                name: "Tonny".to_string(),
                portrait: "/me.jpeg".to_string(),
                headline: "Hello, I am Tonny".to_string(),
                role: "Creative Director".to_string(),
                company: "Apien Communication Technology".to_string(),
                summary: "Fullstack developer".to_string(),
            },
            about: "About me".to_string(),
            projects: vec![Project {
                image: "/web.png".to_string(),
                title: "Web Development Project".to_string(),
            }],
            shorts: vec!["/shorts.mp4".to_string(), "/short2.mp4".to_string()],
            services: vec![Service {
                title: "Animation".to_string(),
                description: "2D/3D animation".to_string(),
            }],
            contact: ContactInfo {
                tagline: "Let's build".to_string(),
                email: "anthonykimataofficial@gmail.com".to_string(),
                phones: vec!["+254 745198904".to_string()],
            },
            carousel: CarouselConfig::default(),
        }
    }

    #[test]
    fn test_sample_is_valid() {
        assert_eq!(sample().check(), Ok(()));
    }

    #[test]
    fn test_from_json_defaults_carousel() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value.as_object_mut().unwrap().remove("carousel");

        let content = PortfolioContent::from_json(&value.to_string()).unwrap();
        assert_eq!(content.carousel.item_height_px, 540.0);
        assert_eq!(content.carousel.width_px, 300.0);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = PortfolioContent::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::ParseError { .. }));
    }

    #[test]
    fn test_bad_email_reports_nested_field() {
        let mut content = sample();
        content.contact.email = "nobody".to_string();

        match content.check() {
            Err(ContentError::ValidationError { field, .. }) => assert_eq!(field, "contact.email"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_bad_project_image_reports_list_index() {
        let mut content = sample();
        content.projects.push(Project { image: "web.png".to_string(), title: "X".to_string() });

        match content.check() {
            Err(ContentError::ValidationError { field, .. }) => {
                assert_eq!(field, "projects[1].image")
            },
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_empty_shorts_rejected() {
        let mut content = sample();
        content.shorts.clear();
        assert_eq!(content.check(), Err(ContentError::Empty { field: "shorts".to_string() }));
    }

    #[test]
    fn test_short_locator_checked() {
        let mut content = sample();
        content.shorts.push("short 3.mp4".to_string());

        match content.check() {
            Err(ContentError::ValidationError { field, .. }) => assert_eq!(field, "shorts[2]"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_zero_item_height_rejected() {
        let mut content = sample();
        content.carousel.item_height_px = 0.0;
        assert!(matches!(content.check(), Err(ContentError::ValidationError { .. })));
    }
}
