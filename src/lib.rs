//! NBA Draft Class Teammate Graph Library
//!
//! Builds the network of who played with whom among the players selected
//! in one or more NBA drafts, from public per-game box scores.
//!
//! ## Features
//!
//! - **Data Retrieval**: Fetch league game logs and draft history from the stats API,
//!   with a per-season JSON response cache
//! - **Graph Construction**: Filter logs to the draft class, derive team-season
//!   co-membership and build a teammate graph (multi, weighted or simple edges)
//! - **Node Statistics**: Career points, games, assists, rebounds and minutes per player
//! - **Rendering**: Seeded force-directed layout drawn to a standalone SVG
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use draft_graph::{build_teammate_graph, nba, DraftYear, GraphOptions, Season};
//! use std::time::Duration;
//!
//! # async fn example() -> draft_graph::Result<()> {
//! let client = nba::StatsClient::new(None, Duration::from_secs(60))?;
//! let cache = nba::CachePolicy::standard(false);
//! let seasons: Vec<Season> = (2019..=2024).map(Season::new).collect();
//!
//! let snapshot = nba::fetch_snapshot(
//!     &client,
//!     &[DraftYear::new(2018)],
//!     &seasons,
//!     Default::default(),
//!     &cache,
//! )
//! .await?;
//!
//! let graph = build_teammate_graph(&snapshot, GraphOptions::default())?;
//! println!("{} players, {} edges", graph.node_count(), graph.edge_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_STATS_BASE_URL=https://stats.nba.com/stats
//! export DRAFT_GRAPH_CACHE_DIR=/tmp/draft-graph
//! export RUST_LOG=draft_graph=debug
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod graph;
pub mod nba;
pub mod render;

// Re-export commonly used types
pub use cli::types::{
    DraftYear, EdgeMode, GameId, MatchKey, PlayerId, Season, SeasonRange, SeasonType, TeamCode,
};
pub use error::{DraftGraphError, Result};
pub use graph::{build_teammate_graph, GraphOptions, TeammateGraph};
pub use nba::Snapshot;
