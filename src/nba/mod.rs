//! NBA stats provider: response types, HTTP client and acquisition.

pub mod acquire;
pub mod http;
pub mod types;

pub use acquire::{fetch_snapshot, CachePolicy, CacheStatus, Snapshot};
pub use http::StatsClient;
pub use types::{DraftClassRoster, DraftPick, GameLogRecord};
