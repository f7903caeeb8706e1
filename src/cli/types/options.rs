//! Option enums that select how the teammate graph is fetched and built.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How repeated co-membership of the same pair becomes graph edges.
///
/// A pair of players who shared a roster in several team-seasons produces
/// one raw edge per team-season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// Keep every raw edge; repeated pairs become parallel edges.
    #[default]
    Multi,
    /// One edge per pair, weighted by the number of shared team-seasons.
    Weighted,
    /// One unweighted edge per pair.
    Simple,
}

impl fmt::Display for EdgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EdgeMode::Multi => "multi",
            EdgeMode::Weighted => "weighted",
            EdgeMode::Simple => "simple",
        };
        write!(f, "{}", s)
    }
}

/// Key used to match game-log rows against the draft roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchKey {
    /// Provider player id.
    #[default]
    Id,
    /// Exact display-name equality. Players whose names are spelled
    /// differently in the two sources are dropped.
    Name,
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchKey::Id => "id",
            MatchKey::Name => "name",
        };
        write!(f, "{}", s)
    }
}

/// Portion of the season to fetch game logs for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeasonType {
    #[default]
    Regular,
    Playoffs,
}

impl SeasonType {
    /// Value of the `SeasonType` query parameter.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            SeasonType::Regular => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
        }
    }

    /// Short slug used in cache file names.
    pub fn slug(&self) -> &'static str {
        match self {
            SeasonType::Regular => "regular",
            SeasonType::Playoffs => "playoffs",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_api_str())
    }
}
