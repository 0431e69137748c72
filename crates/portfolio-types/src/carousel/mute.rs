//! Per-video mute state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::VideoId;

/// Playback mute state of one short.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MuteState {
    /// Autoplay default
    #[default]
    Muted,
    Unmuted,
}

impl MuteState {
    pub fn from_muted(muted: bool) -> Self {
        if muted {
            Self::Muted
        } else {
            Self::Unmuted
        }
    }

    pub fn is_muted(self) -> bool {
        self == Self::Muted
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Muted => Self::Unmuted,
            Self::Unmuted => Self::Muted,
        }
    }

    /// Icon shown on the toggle button for this state.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Muted => "🔇",
            Self::Unmuted => "🔊",
        }
    }
}

impl fmt::Display for MuteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Muted => write!(f, "muted"),
            Self::Unmuted => write!(f, "unmuted"),
        }
    }
}

/// Video id → "is muted", owned by the carousel.
///
/// Only toggled videos have entries. Lookups for anything else return
/// [`MuteState::Muted`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MuteStateMap {
    entries: BTreeMap<VideoId, bool>,
}

impl MuteStateMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: &VideoId) -> MuteState {
        self.entries.get(id).map_or(MuteState::Muted, |&muted| MuteState::from_muted(muted))
    }

    /// Raw entry, `None` when the video was never toggled.
    pub fn get(&self, id: &VideoId) -> Option<bool> {
        self.entries.get(id).copied()
    }

    /// Store the element's mute flag after a toggle.
    pub(crate) fn record(&mut self, id: VideoId, muted: bool) {
        self.entries.insert(id, muted);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VideoId, bool)> {
        self.entries.iter().map(|(id, &muted)| (id, muted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_reads_muted() {
        let map = MuteStateMap::new();
        assert_eq!(map.state(&VideoId::for_index(0)), MuteState::Muted);
        assert_eq!(map.get(&VideoId::for_index(0)), None);
    }

    #[test]
    fn test_toggled_is_an_involution() {
        for state in [MuteState::Muted, MuteState::Unmuted] {
            assert_ne!(state.toggled(), state);
            assert_eq!(state.toggled().toggled(), state);
        }
    }

    #[test]
    fn test_icon_matches_state() {
        assert_eq!(MuteState::default().icon(), "🔇");
        assert_eq!(MuteState::from_muted(false).icon(), "🔊");
    }

    #[test]
    fn test_map_serializes_as_object() {
        let mut map = MuteStateMap::new();
        map.record(VideoId::for_index(1), false);

        let json = serde_json::to_string(&map).ok();
        assert_eq!(json.as_deref(), Some(r#"{"short-video-1":false}"#));
    }
}
