//! Per-user aggregate statistics.

use crate::models::{AnimeListEntry, ListStatus, UserStats};

/// Aggregate one user's list.
///
/// Episode totals count the full episode count for completed entries and
/// the watch progress for everything else, treating absent values as zero.
/// The average personal score covers only entries scored above zero and is
/// rounded to two decimal places; it is 0 when no entry qualifies.
pub fn calculate_user_stats(anime_list: &[AnimeListEntry]) -> UserStats {
    let completed_anime = anime_list
        .iter()
        .filter(|entry| entry.status == ListStatus::Completed)
        .count();

    let total_episodes = anime_list
        .iter()
        .map(|entry| {
            if entry.status == ListStatus::Completed {
                u64::from(entry.media.episodes.unwrap_or(0))
            } else {
                u64::from(entry.progress.unwrap_or(0))
            }
        })
        .sum();

    let scores: Vec<f64> = anime_list
        .iter()
        .filter_map(|entry| entry.score)
        .filter(|score| *score > 0.0)
        .collect();
    let average_score = if scores.is_empty() {
        0.0
    } else {
        round2(scores.iter().sum::<f64>() / scores.len() as f64)
    };

    UserStats {
        total_anime: anime_list.len(),
        completed_anime,
        average_score,
        total_episodes,
    }
}

/// Round to two decimal places, the service's score precision.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
