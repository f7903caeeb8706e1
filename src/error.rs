//! Error types for the draft-class teammate graph

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, DraftGraphError>;

#[derive(Error, Debug)]
pub enum DraftGraphError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Season {year} is outside the tracked seasons {first}..={last}")]
    InvalidSeason { year: u16, first: u16, last: u16 },

    #[error("Invalid season range: {value}")]
    InvalidSeasonRange { value: String },

    #[error("Stats response has no result set named {name}")]
    MissingResultSet { name: String },

    #[error("Result set is missing column {column}")]
    MissingColumn { column: String },

    #[error("Malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("No players found for draft year(s) {draft_years}")]
    EmptyRoster { draft_years: String },

    #[error("No teammate edges: none of the {groups} team-season groups has two or more draft-class players")]
    EmptyGraph { groups: usize },

    #[error("Invalid value {value:?}, expected {expected}")]
    InvalidOption { value: String, expected: String },
}
