//! Type-safe wrappers and enums for NBA stats data and CLI options.

pub mod ids;
pub mod options;
pub mod time;


pub use ids::{GameId, PlayerId, TeamCode};
pub use options::{EdgeMode, MatchKey, SeasonType};
pub use time::{
    join_draft_years, DraftYear, Season, SeasonRange, FIRST_TRACKED_SEASON, LAST_SUPPORTED_SEASON,
};
