//! HTTP utilities for stats API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};

/// Base path of the public NBA stats API.
pub const NBA_STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Environment variable that overrides [`NBA_STATS_BASE_URL`].
pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";

/// Resolve the API base URL, preferring an explicit value, then the env var.
pub fn resolve_base_url(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .unwrap_or_else(|| NBA_STATS_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Headers the stats API expects from a browser-like client.
///
/// Requests without a referer and the `x-nba-stats-*` pair tend to hang
/// rather than fail.
pub fn stats_header_map() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
        ),
    );
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert("origin", HeaderValue::from_static("https://www.nba.com"));
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    if let Ok(agent) = std::env::var("NBA_STATS_USER_AGENT") {
        h.insert(USER_AGENT, HeaderValue::from_str(&agent)?);
    }
    Ok(h)
}
