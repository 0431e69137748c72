//! Short video items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one rendered short, `short-video-{index}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    const PREFIX: &'static str = "short-video-";

    /// Identifier for the item at `index` in the shorts list.
    pub fn for_index(index: usize) -> Self {
        Self(format!("{}{index}", Self::PREFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VideoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One short in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoItem {
    /// Unique per rendered instance
    pub id: VideoId,
    /// Asset locator, e.g. `/shorts.mp4`
    pub source: String,
}

impl VideoItem {
    /// Build items from an ordered list of sources, ids following list order.
    pub fn from_sources<S: AsRef<str>>(sources: &[S]) -> Vec<Self> {
        sources
            .iter()
            .enumerate()
            .map(|(index, source)| Self {
                id: VideoId::for_index(index),
                source: source.as_ref().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_list_order() {
        let items = VideoItem::from_sources(&["/shorts.mp4", "/short2.mp4", "/short3.mp4"]);

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["short-video-0", "short-video-1", "short-video-2"]);
        assert_eq!(items[1].source, "/short2.mp4");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&VideoId::for_index(4)).ok();
        assert_eq!(json.as_deref(), Some("\"short-video-4\""));
    }
}
