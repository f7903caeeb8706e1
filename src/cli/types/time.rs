//! Season and draft-year types.

use crate::error::{DraftGraphError, Result};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First season with tracked game logs (1946-47).
pub const FIRST_TRACKED_SEASON: u16 = 1947;

/// Last season the four-digit API form can name (9998-99).
pub const LAST_SUPPORTED_SEASON: u16 = 9999;

/// Month in which a new season starts; from then on the calendar year is
/// the first half of the season.
const SEASON_START_MONTH: u32 = 10;

/// An NBA season, identified by the calendar year in which it ends.
///
/// The 2018-19 season is `Season(2019)`; the stats API spells it `"2018-19"`.
///
/// # Examples
///
/// ```rust
/// use draft_graph::Season;
///
/// let season = Season::new(2019);
/// assert_eq!(season.to_api_string(), "2018-19");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    /// Build a season, rejecting years outside the tracked range.
    pub fn validated(year: u16) -> Result<Self> {
        if !(FIRST_TRACKED_SEASON..=LAST_SUPPORTED_SEASON).contains(&year) {
            return Err(DraftGraphError::InvalidSeason {
                year,
                first: FIRST_TRACKED_SEASON,
                last: LAST_SUPPORTED_SEASON,
            });
        }
        Ok(Self(year))
    }

    /// The season in progress (or most recently finished) on a calendar date.
    pub fn containing(year: i32, month: u32) -> Self {
        let end = if month >= SEASON_START_MONTH {
            year.saturating_add(1)
        } else {
            year
        };
        Self(end.clamp(0, LAST_SUPPORTED_SEASON as i32) as u16)
    }

    /// The current season according to the system clock.
    pub fn current() -> Self {
        let today = Utc::now().date_naive();
        Self::containing(today.year(), today.month())
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Wire form used by the stats API, e.g. `"2018-19"`.
    pub fn to_api_string(&self) -> String {
        format!("{}-{:02}", self.0.saturating_sub(1), self.0 % 100)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = DraftGraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::validated(s.trim().parse()?)
    }
}

/// Inclusive range of seasons, e.g. `2019-2024`.
///
/// Also accepts a single season (`2019`) or the API form of one season (`2018-19`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRange {
    pub start: Season,
    pub end: Season,
}

impl SeasonRange {
    pub fn new(start: Season, end: Season) -> Result<Self> {
        if end < start {
            return Err(DraftGraphError::InvalidSeasonRange {
                value: format!("{}-{}", start, end),
            });
        }
        Ok(Self { start, end })
    }

    pub fn single(season: Season) -> Self {
        Self {
            start: season,
            end: season,
        }
    }

    /// All seasons in the range, oldest first.
    pub fn seasons(&self) -> Vec<Season> {
        (self.start.as_u16()..=self.end.as_u16())
            .map(Season::new)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.end.as_u16().saturating_sub(self.start.as_u16()) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for SeasonRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl FromStr for SeasonRange {
    type Err = DraftGraphError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || DraftGraphError::InvalidSeasonRange {
            value: s.to_string(),
        };

        let Some((lhs, rhs)) = s.split_once("..").or_else(|| s.split_once('-')) else {
            return Ok(Self::single(s.parse()?));
        };
        let rhs = rhs.trim_start_matches('=');

        // "2018-19" names one season in API form
        if rhs.len() == 2 {
            let first: u16 = lhs.parse().map_err(|_| invalid())?;
            let suffix: u16 = rhs.parse().map_err(|_| invalid())?;
            let end = first.checked_add(1).ok_or_else(invalid)?;
            if end % 100 != suffix {
                return Err(invalid());
            }
            return Ok(Self::single(Season::validated(end)?));
        }

        let start: Season = lhs.parse().map_err(|_| invalid())?;
        let end: Season = rhs.parse().map_err(|_| invalid())?;
        Self::new(start, end)
    }
}

/// Year of an NBA draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DraftYear(pub u16);

impl DraftYear {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The first season a player from this draft can appear in.
    pub fn rookie_season(&self) -> Season {
        Season::new(self.0.saturating_add(1))
    }
}

impl fmt::Display for DraftYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DraftYear {
    type Err = DraftGraphError;

    fn from_str(s: &str) -> Result<Self> {
        let year: u16 = s.trim().parse()?;
        // The draft precedes its rookie season, which must itself be valid.
        let last = LAST_SUPPORTED_SEASON - 1;
        if !(FIRST_TRACKED_SEASON..=last).contains(&year) {
            return Err(DraftGraphError::InvalidSeason {
                year,
                first: FIRST_TRACKED_SEASON,
                last,
            });
        }
        Ok(Self(year))
    }
}

/// Render a list of draft years as `2018, 2019`.
pub fn join_draft_years(years: &[DraftYear]) -> String {
    years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
