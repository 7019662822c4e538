mod config;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use kurabe_api::AniListClient;
use kurabe_core::comparison::{
    filter_common_anime_by_status, sort_common_anime_by_score, StatusFilter,
};
use kurabe_core::models::{ComparisonResult, UserStats};
use kurabe_core::state::ComparisonStore;

use crate::config::AppConfig;

/// Compare two AniList users' anime lists.
#[derive(Debug, Parser)]
#[command(name = "kurabe", version, about = "Compare two AniList users' anime lists")]
struct Cli {
    /// AniList user names to compare.
    users: Vec<String>,

    /// Also show titles either user dropped.
    #[arg(long)]
    include_dropped: bool,

    /// Print the full comparison result as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kurabe=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    let client = AniListClient::with_endpoint(&config.api.endpoint);
    let mut store = ComparisonStore::new();
    store.perform_comparison(&client, &cli.users).await;

    let state = store.state();
    if let Some(error) = state.error {
        eprintln!("error: {error}");
        std::process::exit(1);
    }

    let Some(result) = state.result else {
        println!("Nothing to compare: at least one of the lists is empty.");
        return;
    };

    if cli.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_summary(&result, &config, cli.include_dropped);
}

fn print_summary(result: &ComparisonResult, config: &AppConfig, include_dropped: bool) {
    println!("{} vs {}", result.user1, result.user2);
    println!();
    print_stats(&result.user1, &result.user1_stats);
    print_stats(&result.user2, &result.user2_stats);
    println!();
    println!("Similarity: {}%", result.similarity_score);
    println!();

    let filter = StatusFilter {
        include_completed: config.display.include_completed,
        include_watching: config.display.include_watching,
        include_dropped: config.display.include_dropped || include_dropped,
    };
    let mut common = filter_common_anime_by_status(&result.common_anime, filter);
    if config.display.sort_by_score {
        common = sort_common_anime_by_score(&common);
    }

    println!(
        "Common anime ({} shared, {} shown):",
        result.common_anime.len(),
        common.len()
    );
    for item in &common {
        let score = item
            .anime
            .average_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "--".into());
        println!(
            "  {:>3}  {}  [{} / {}]",
            score,
            item.anime.display_title(),
            item.user1_entry.status,
            item.user2_entry.status
        );
    }
}

fn print_stats(user: &str, stats: &UserStats) {
    println!(
        "{user}: {} anime, {} completed, {} episodes watched, average score {}",
        stats.total_anime, stats.completed_anime, stats.total_episodes, stats.average_score
    );
}
