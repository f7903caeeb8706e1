//! Sequential, cache-aware acquisition of game logs and draft rosters.
//!
//! Seasons and draft years are fetched strictly one at a time. Responses for
//! finished seasons and completed drafts are cached on disk and reused on
//! later runs unless a refresh is requested; the season in progress is always
//! fetched fresh and never written.

use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use crate::cli::types::{join_draft_years, DraftYear, Season, SeasonType};
use crate::core::{cache_root, draft_path, game_logs_path, read_json, write_json};
use crate::error::{DraftGraphError, Result};
use crate::nba::http::StatsClient;
use crate::nba::types::{DraftClassRoster, GameLogRecord};

#[cfg(test)]
mod tests;

/// Where a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Read from the cache.
    Hit,
    /// Not cached; fetched from the API.
    Miss,
    /// Cached value ignored and fetched again.
    Refreshed,
    /// Caching disabled; fetched from the API.
    Bypassed,
    /// Data still changing (season in progress); fetched and not cached.
    Live,
}

/// How acquisition uses the on-disk cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    /// Cache directory; `None` disables caching entirely.
    pub root: Option<PathBuf>,
    /// Ignore cached values and overwrite them.
    pub refresh: bool,
}

impl CachePolicy {
    /// Cache under the default directory.
    pub fn standard(refresh: bool) -> Self {
        Self {
            root: Some(cache_root()),
            refresh,
        }
    }

    pub fn disabled() -> Self {
        Self {
            root: None,
            refresh: false,
        }
    }

    fn lookup<T: DeserializeOwned>(&self, path: Option<&PathBuf>) -> (Option<T>, CacheStatus) {
        match path {
            None => (None, CacheStatus::Bypassed),
            Some(_) if self.refresh => (None, CacheStatus::Refreshed),
            Some(p) => match read_json(p) {
                Some(v) => (Some(v), CacheStatus::Hit),
                None => (None, CacheStatus::Miss),
            },
        }
    }

    fn store<T: Serialize>(&self, path: Option<&PathBuf>, value: &T) {
        if let Some(p) = path {
            write_json(p, value);
        }
    }

    /// Cache file for a value, or `None` when caching is off or the value
    /// is not settled yet.
    fn entry(
        &self,
        settled: bool,
        path: impl FnOnce(&PathBuf) -> PathBuf,
    ) -> (Option<PathBuf>, bool) {
        match &self.root {
            Some(root) if settled => (Some(path(root)), false),
            Some(_) => (None, true),
            None => (None, false),
        }
    }
}

/// A season's logs stop changing once a later season has started.
pub fn season_is_settled(season: Season) -> bool {
    season < Season::current()
}

/// A draft is complete once its rookie season has started.
pub fn draft_is_settled(year: DraftYear) -> bool {
    year.rookie_season() <= Season::current()
}

/// Immutable input to graph construction: every fetched log plus the roster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub logs: Vec<GameLogRecord>,
    pub roster: DraftClassRoster,
}

/// Fetch one season's logs, honouring the cache policy.
pub async fn fetch_season_logs(
    client: &StatsClient,
    season: Season,
    season_type: SeasonType,
    cache: &CachePolicy,
) -> Result<(Vec<GameLogRecord>, CacheStatus)> {
    let (path, live) = cache.entry(season_is_settled(season), |root| {
        game_logs_path(root, season, season_type)
    });

    let (cached, status) = cache.lookup::<Vec<GameLogRecord>>(path.as_ref());
    let status = if live { CacheStatus::Live } else { status };
    if let Some(logs) = cached {
        debug!(season = %season, rows = logs.len(), "game logs loaded from cache");
        return Ok((logs, status));
    }

    let logs = client.get_game_logs(season, season_type).await?;
    cache.store(path.as_ref(), &logs);
    Ok((logs, status))
}

/// Fetch logs for every season, oldest first, one request at a time.
pub async fn fetch_game_logs(
    client: &StatsClient,
    seasons: &[Season],
    season_type: SeasonType,
    cache: &CachePolicy,
) -> Result<Vec<GameLogRecord>> {
    let mut all = Vec::new();
    for &season in seasons {
        let (logs, status) = fetch_season_logs(client, season, season_type, cache).await?;
        info!(season = %season, rows = logs.len(), ?status, "season game logs ready");
        all.extend(logs);
    }
    Ok(all)
}

/// Fetch the roster of every listed draft, one request at a time.
///
/// Fails with `EmptyRoster` when none of the drafts returned a pick.
pub async fn fetch_draft_roster(
    client: &StatsClient,
    draft_years: &[DraftYear],
    cache: &CachePolicy,
) -> Result<DraftClassRoster> {
    let mut picks = Vec::new();
    for &year in draft_years {
        let (path, live) = cache.entry(draft_is_settled(year), |root| draft_path(root, year));
        let (cached, status) = cache.lookup(path.as_ref());
        let status = if live { CacheStatus::Live } else { status };
        let year_picks = match cached {
            Some(p) => p,
            None => {
                let fetched = client.get_draft_history(year).await?;
                cache.store(path.as_ref(), &fetched);
                fetched
            }
        };
        info!(draft_year = %year, picks = year_picks.len(), ?status, "draft roster ready");
        picks.extend(year_picks);
    }

    if picks.is_empty() {
        return Err(DraftGraphError::EmptyRoster {
            draft_years: join_draft_years(draft_years),
        });
    }
    Ok(DraftClassRoster::new(draft_years.to_vec(), picks))
}

/// Fetch everything one pipeline run needs: roster first, then every season's logs.
pub async fn fetch_snapshot(
    client: &StatsClient,
    draft_years: &[DraftYear],
    seasons: &[Season],
    season_type: SeasonType,
    cache: &CachePolicy,
) -> Result<Snapshot> {
    let roster = fetch_draft_roster(client, draft_years, cache).await?;
    let logs = fetch_game_logs(client, seasons, season_type, cache).await?;
    Ok(Snapshot { logs, roster })
}
