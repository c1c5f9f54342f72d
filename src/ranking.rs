//! Flattening and ranking of episodes across seasons.

use crate::catalog::{EpisodeSummary, SeasonSummary};

/// Number of episodes listed when no limit is configured
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// Collects the episodes of all seasons, season by season, in listing order.
pub fn flatten_episodes(seasons: &[SeasonSummary]) -> Vec<&EpisodeSummary> {
    seasons.iter().flat_map(|s| s.episodes.iter()).collect()
}

/// Returns the best rated episodes, at most `limit` of them.
///
/// Unrated episodes are dropped. Ratings are compared as text, highest first,
/// and episodes with equal ratings keep their listing order.
pub fn top_rated(seasons: &[SeasonSummary], limit: usize) -> Vec<EpisodeSummary> {
    let mut rated: Vec<&EpisodeSummary> = flatten_episodes(seasons)
        .into_iter()
        .filter(|e| e.is_rated())
        .collect();

    // sort_by is stable, ties stay in season-then-episode order
    rated.sort_by(|a, b| b.rating.cmp(&a.rating));
    rated.truncate(limit);

    rated.into_iter().cloned().collect()
}
