use std::time::Duration;

use reqwest::{header::HeaderMap, Client};
use tracing::debug;

use crate::cli::types::{DraftYear, Season, SeasonType};
use crate::core::{resolve_base_url, stats_header_map};
use crate::nba::types::{DraftPick, GameLogRecord, StatsEnvelope};
use crate::Result;


/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Thin client over the two stats API endpoints the pipeline needs.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl StatsClient {
    /// Build a client. `base_url` falls back to `NBA_STATS_BASE_URL`, then the public API.
    pub fn new(base_url: Option<&str>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: resolve_base_url(base_url),
            headers: stats_header_map()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_envelope(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<StatsEnvelope> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?params, "requesting stats endpoint");

        let res = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsEnvelope>()
            .await?;

        Ok(res)
    }

    /// Every player game log for one season.
    pub async fn get_game_logs(
        &self,
        season: Season,
        season_type: SeasonType,
    ) -> Result<Vec<GameLogRecord>> {
        let season_str = season.to_api_string();
        let params = [
            ("Counter", "0"),
            ("Direction", "ASC"),
            ("LeagueID", "00"),
            ("PlayerOrTeam", "P"),
            ("Season", season_str.as_str()),
            ("SeasonType", season_type.as_api_str()),
            ("Sorter", "DATE"),
        ];

        let envelope = self.get_envelope("leaguegamelog", &params).await?;
        let logs = GameLogRecord::from_result_set(envelope.result_set("LeagueGameLog")?, season)?;
        debug!(season = %season, rows = logs.len(), "decoded game logs");
        Ok(logs)
    }

    /// Every selection made in one draft.
    pub async fn get_draft_history(&self, year: DraftYear) -> Result<Vec<DraftPick>> {
        let year_str = year.to_string();
        let params = [("LeagueID", "00"), ("Season", year_str.as_str())];

        let envelope = self.get_envelope("drafthistory", &params).await?;
        let picks = DraftPick::from_result_set(envelope.result_set("DraftHistory")?)?;
        debug!(draft_year = %year, picks = picks.len(), "decoded draft history");
        Ok(picks)
    }
}
