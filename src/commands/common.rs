//! Helpers shared by the command handlers.

use std::time::Duration;

use crate::{
    cli::types::{DraftYear, Season, SeasonRange, SeasonType},
    nba::{fetch_snapshot, CachePolicy, Snapshot, StatsClient},
    Result,
};

/// Settings that control how a command reaches the stats API.
#[derive(Debug, Clone)]
pub struct FetchParams {
    pub refresh: bool,
    pub no_cache: bool,
    pub timeout: Duration,
    pub verbose: bool,
    /// Overrides `NBA_STATS_BASE_URL`; used by tests.
    pub base_url: Option<String>,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            refresh: false,
            no_cache: false,
            timeout: crate::nba::http::DEFAULT_TIMEOUT,
            verbose: false,
            base_url: None,
        }
    }
}

impl FetchParams {
    pub fn client(&self) -> Result<StatsClient> {
        StatsClient::new(self.base_url.as_deref(), self.timeout)
    }

    pub fn cache_policy(&self) -> CachePolicy {
        if self.no_cache {
            CachePolicy::disabled()
        } else {
            CachePolicy::standard(self.refresh)
        }
    }
}

/// Seasons to scan: the explicit range, or the earliest draft's rookie
/// season through the current season.
pub fn resolve_seasons(seasons: Option<SeasonRange>, draft_years: &[DraftYear]) -> Vec<Season> {
    if let Some(range) = seasons {
        return range.seasons();
    }
    let current = Season::current();
    let first = draft_years
        .iter()
        .map(|y| y.rookie_season())
        .min()
        .unwrap_or(current)
        .min(current);
    (first.as_u16()..=current.as_u16()).map(Season::new).collect()
}

/// Fetch roster and logs, printing progress the way the other commands do.
pub async fn load_snapshot(
    draft_years: &[DraftYear],
    seasons: &[Season],
    season_type: SeasonType,
    fetch: &FetchParams,
) -> Result<Snapshot> {
    let client = fetch.client()?;
    let cache = fetch.cache_policy();

    if fetch.refresh {
        println!("Fetching fresh data from the stats API...");
    } else {
        println!("Loading data (cached if available)...");
    }
    if fetch.verbose {
        println!("Stats API: {}", client.base_url());
        if let Some(root) = &cache.root {
            println!("Cache directory: {}", root.display());
        }
        println!(
            "Seasons: {} ({} season(s), {})",
            seasons
                .iter()
                .map(|s| s.to_api_string())
                .collect::<Vec<_>>()
                .join(", "),
            seasons.len(),
            season_type
        );
    }

    let snapshot = fetch_snapshot(&client, draft_years, seasons, season_type, &cache).await?;

    println!(
        "✓ Loaded {} draft picks and {} game log rows",
        snapshot.roster.len(),
        snapshot.logs.len()
    );
    Ok(snapshot)
}
