use serde::{Deserialize, Serialize};

use super::AnimeMedia;

/// A user's relationship to one title on their list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListStatus {
    Current,
    Completed,
    Paused,
    Dropped,
    Planning,
    Repeating,
}

impl ListStatus {
    pub const ALL: &[ListStatus] = &[
        Self::Current,
        Self::Completed,
        Self::Paused,
        Self::Dropped,
        Self::Planning,
        Self::Repeating,
    ];

    /// The service's wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "CURRENT",
            Self::Completed => "COMPLETED",
            Self::Paused => "PAUSED",
            Self::Dropped => "DROPPED",
            Self::Planning => "PLANNING",
            Self::Repeating => "REPEATING",
        }
    }

    /// Parse the service's wire spelling (case-sensitive, exact match).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CURRENT" => Some(Self::Current),
            "COMPLETED" => Some(Self::Completed),
            "PAUSED" => Some(Self::Paused),
            "DROPPED" => Some(Self::Dropped),
            "PLANNING" => Some(Self::Planning),
            "REPEATING" => Some(Self::Repeating),
            _ => None,
        }
    }

    /// Whether `s` is one of the six known wire spellings.
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_some()
    }
}

impl std::fmt::Display for ListStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry from a user's anime list.
///
/// Created by the transformation layer and read-only from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeListEntry {
    pub media: AnimeMedia,
    pub score: Option<f64>,
    pub status: ListStatus,
    pub progress: Option<u32>,
    pub updated_at: Option<i64>,
}

/// A user's full anime list, in the order the service returned it.
pub type AnimeList = Vec<AnimeListEntry>;
