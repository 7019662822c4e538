//! Pairwise list comparison: intersection, similarity, ordering, filtering.

use std::collections::HashMap;

use crate::models::{AnimeListEntry, CommonAnime, ComparisonResult, ListStatus, UserStats};
use crate::stats::{calculate_user_stats, round2};

/// Intersect two lists by media ID.
///
/// Builds an ID index over the second list and scans the first, so the work
/// stays linear in the combined list sizes. Result order follows the first
/// list, and each match carries the first list's media snapshot.
pub fn calculate_common_anime(
    user1_anime: &[AnimeListEntry],
    user2_anime: &[AnimeListEntry],
) -> Vec<CommonAnime> {
    let user2_by_id: HashMap<u64, &AnimeListEntry> = user2_anime
        .iter()
        .map(|entry| (entry.media.id, entry))
        .collect();

    user1_anime
        .iter()
        .filter_map(|user1_entry| {
            user2_by_id.get(&user1_entry.media.id).map(|user2_entry| CommonAnime {
                anime: user1_entry.media.clone(),
                user1_entry: user1_entry.clone(),
                user2_entry: (*user2_entry).clone(),
            })
        })
        .collect()
}

/// Shared fraction of the smaller list, as a percentage with two decimals.
///
/// The denominator is `min(total1, total2)`: the score reads "how much of
/// the more selective user's list is shared". 0 when either list is empty.
pub fn calculate_similarity_score(
    common_anime: &[CommonAnime],
    user1_stats: &UserStats,
    user2_stats: &UserStats,
) -> f64 {
    let min_total = user1_stats.total_anime.min(user2_stats.total_anime);
    if min_total == 0 {
        return 0.0;
    }
    round2(common_anime.len() as f64 / min_total as f64 * 100.0)
}

/// Compose intersection, per-user stats and similarity into one result.
pub fn create_comparison_result(
    user1: &str,
    user2: &str,
    user1_anime: &[AnimeListEntry],
    user2_anime: &[AnimeListEntry],
) -> ComparisonResult {
    let common_anime = calculate_common_anime(user1_anime, user2_anime);
    let user1_stats = calculate_user_stats(user1_anime);
    let user2_stats = calculate_user_stats(user2_anime);
    let similarity_score = calculate_similarity_score(&common_anime, &user1_stats, &user2_stats);

    ComparisonResult {
        user1: user1.to_string(),
        user2: user2.to_string(),
        common_anime,
        user1_stats,
        user2_stats,
        similarity_score,
    }
}

/// New sequence ordered by media average score, highest first.
///
/// Missing scores sort as zero; ties keep their input order.
pub fn sort_common_anime_by_score(common_anime: &[CommonAnime]) -> Vec<CommonAnime> {
    let mut sorted = common_anime.to_vec();
    sorted.sort_by(|a, b| {
        b.anime
            .average_score
            .unwrap_or(0)
            .cmp(&a.anime.average_score.unwrap_or(0))
    });
    sorted
}

/// Which list-status categories to keep when filtering the common list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFilter {
    pub include_completed: bool,
    pub include_watching: bool,
    pub include_dropped: bool,
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self {
            include_completed: true,
            include_watching: true,
            include_dropped: false,
        }
    }
}

/// Keep entries matching at least one enabled category on at least one side.
///
/// With no category enabled the result is empty.
pub fn filter_common_anime_by_status(
    common_anime: &[CommonAnime],
    filter: StatusFilter,
) -> Vec<CommonAnime> {
    common_anime
        .iter()
        .filter(|common| {
            let statuses = [common.user1_entry.status, common.user2_entry.status];
            (filter.include_completed && statuses.contains(&ListStatus::Completed))
                || (filter.include_watching && statuses.contains(&ListStatus::Current))
                || (filter.include_dropped && statuses.contains(&ListStatus::Dropped))
        })
        .cloned()
        .collect()
}
