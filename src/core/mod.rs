//! Core utilities shared across the crate
//!
//! - `cache`: file system cache for fetched provider data
//! - `http`: base URL and request headers for the stats API

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{cache_root, draft_path, game_logs_path, read_json, write_json};
pub use http::{resolve_base_url, stats_header_map, NBA_STATS_BASE_URL};
