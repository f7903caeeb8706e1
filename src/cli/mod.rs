//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{DraftYear, EdgeMode, MatchKey, SeasonRange, SeasonType};

/// Arguments shared by every command that talks to the stats API.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Force refresh from the stats API, overwriting cached responses.
    #[clap(long)]
    pub refresh: bool,

    /// Do not read or write the response cache.
    #[clap(long, conflicts_with = "refresh")]
    pub no_cache: bool,

    /// Per-request timeout in seconds.
    #[clap(long, default_value_t = 60)]
    pub timeout_secs: u64,

    /// Print progress and debug diagnostics.
    #[clap(long, short)]
    pub verbose: bool,
}

/// Arguments that select the draft class and how its graph is built.
#[derive(Debug, Args)]
pub struct GraphArgs {
    /// Draft year (repeatable): `-d 2018 -d 2019`.
    #[clap(long = "draft-year", short = 'd', required = true)]
    pub draft_years: Vec<DraftYear>,

    /// Seasons to scan, by ending year: `2019-2024`, `2019` or `2018-19`.
    /// Defaults to the first draft's rookie season through the current season.
    #[clap(long, short)]
    pub seasons: Option<SeasonRange>,

    /// Regular season or playoff game logs.
    #[clap(long, value_enum, default_value_t = SeasonType::Regular)]
    pub season_type: SeasonType,

    /// How repeated pairs become edges.
    #[clap(long, value_enum, default_value_t = EdgeMode::Multi)]
    pub edge_mode: EdgeMode,

    /// Join logs to the roster by player id or by exact name.
    #[clap(long = "match-by", value_enum, default_value_t = MatchKey::Id)]
    pub match_key: MatchKey,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the teammate graph of a draft class and render it to SVG.
    Render {
        #[clap(flatten)]
        graph: GraphArgs,

        #[clap(flatten)]
        fetch: FetchArgs,

        /// Output file (default: `draft-<year>-teammates.svg`).
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Figure width in pixels.
        #[clap(long, default_value_t = 1200, value_parser = clap::value_parser!(u32).range(300..))]
        width: u32,

        /// Figure height in pixels.
        #[clap(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(300..))]
        height: u32,

        /// Layout iterations.
        #[clap(long, default_value_t = 500)]
        iterations: usize,

        /// Layout seed; the same seed reproduces the same figure.
        #[clap(long, default_value_t = 42)]
        seed: u64,
    },

    /// List the players selected in one or more drafts.
    Roster {
        /// Draft year (repeatable).
        #[clap(long = "draft-year", short = 'd', required = true)]
        draft_years: Vec<DraftYear>,

        #[clap(flatten)]
        fetch: FetchArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print the node table and edge list of a draft class's teammate graph.
    Teammates {
        #[clap(flatten)]
        graph: GraphArgs,

        #[clap(flatten)]
        fetch: FetchArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "draft-graph",
    about = "Teammate networks of NBA draft classes",
    version
)]
pub struct DraftGraph {
    #[clap(subcommand)]
    pub command: Commands,
}
