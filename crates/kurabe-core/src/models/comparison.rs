use serde::{Deserialize, Serialize};

use super::{AnimeListEntry, AnimeMedia};

/// A title present on both compared users' lists.
///
/// `anime` is user 1's snapshot of the media record; the two users' copies
/// may have drifted and are not reconciled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonAnime {
    pub anime: AnimeMedia,
    pub user1_entry: AnimeListEntry,
    pub user2_entry: AnimeListEntry,
}

/// Aggregate statistics over one user's list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_anime: usize,
    pub completed_anime: usize,
    pub average_score: f64,
    pub total_episodes: u64,
}

/// Output of comparing two users' lists. Built once per successful
/// comparison and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub user1: String,
    pub user2: String,
    pub common_anime: Vec<CommonAnime>,
    pub user1_stats: UserStats,
    pub user2_stats: UserStats,
    pub similarity_score: f64,
}
