use crate::cli::types::{DraftYear, GameId, PlayerId, Season, TeamCode};
use crate::error::{DraftGraphError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};


/// One tabular block of a stats API response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

/// Top-level envelope of a stats API response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsEnvelope {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

impl StatsEnvelope {
    /// Find a result set by name.
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|rs| rs.name == name)
            .ok_or_else(|| DraftGraphError::MissingResultSet {
                name: name.to_string(),
            })
    }
}

/// Column positions resolved from a result set's headers.
struct Columns<'a> {
    index: HashMap<&'a str, usize>,
}

impl<'a> Columns<'a> {
    fn new(headers: &'a [String]) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.as_str(), i))
            .collect();
        Self { index }
    }

    fn position(&self, column: &str) -> Result<usize> {
        self.index
            .get(column)
            .copied()
            .ok_or_else(|| DraftGraphError::MissingColumn {
                column: column.to_string(),
            })
    }
}

fn cell<'v>(row: &'v [Value], idx: usize, row_no: usize) -> Result<&'v Value> {
    row.get(idx).ok_or_else(|| DraftGraphError::MalformedRow {
        row: row_no,
        reason: format!("expected at least {} cells, found {}", idx + 1, row.len()),
    })
}

fn cell_u64(row: &[Value], idx: usize, row_no: usize) -> Result<u64> {
    let value = cell(row, idx, row_no)?;
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        .ok_or_else(|| DraftGraphError::MalformedRow {
            row: row_no,
            reason: format!("expected an integer, found {}", value),
        })
}

fn narrow_u16(value: u64, row_no: usize) -> Result<u16> {
    u16::try_from(value).map_err(|_| DraftGraphError::MalformedRow {
        row: row_no,
        reason: format!("{} is out of range for a year or pick number", value),
    })
}

fn cell_u16(row: &[Value], idx: usize, row_no: usize) -> Result<u16> {
    narrow_u16(cell_u64(row, idx, row_no)?, row_no)
}

/// Optional small integer; blank or non-numeric cells are `None`.
fn optional_u16(row: &[Value], idx: Option<usize>, row_no: usize) -> Result<Option<u16>> {
    match idx.map(|i| cell_u64(row, i, row_no)) {
        Some(Ok(v)) => narrow_u16(v, row_no).map(Some),
        _ => Ok(None),
    }
}

fn cell_string(row: &[Value], idx: usize, row_no: usize) -> Result<String> {
    match cell(row, idx, row_no)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(DraftGraphError::MalformedRow {
            row: row_no,
            reason: format!("expected a string, found {}", other),
        }),
    }
}

/// Numeric stat cell; null or unparseable cells are missing values.
fn cell_stat(row: &[Value], idx: usize) -> Option<f64> {
    match row.get(idx)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Minutes arrive either as a number or as `"MM:SS"`.
pub fn parse_minutes(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            match s.split_once(':') {
                Some((m, sec)) => {
                    let m: f64 = m.parse().ok()?;
                    let sec: f64 = sec.parse().ok()?;
                    Some(m + sec / 60.0)
                }
                None => s.parse().ok(),
            }
        }
        _ => None,
    }
}

/// One player's line in one game.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameLogRecord {
    pub player_id: PlayerId,
    pub player_name: String,
    pub team: TeamCode,
    pub season: Season,
    pub game_id: GameId,
    pub points: Option<f64>,
    pub assists: Option<f64>,
    pub rebounds: Option<f64>,
    pub minutes: Option<f64>,
}

impl GameLogRecord {
    /// Decode the `LeagueGameLog` result set for one season.
    pub fn from_result_set(rs: &ResultSet, season: Season) -> Result<Vec<Self>> {
        let cols = Columns::new(&rs.headers);
        let player_id = cols.position("PLAYER_ID")?;
        let player_name = cols.position("PLAYER_NAME")?;
        let team = cols.position("TEAM_ABBREVIATION")?;
        let game_id = cols.position("GAME_ID")?;
        let pts = cols.position("PTS")?;
        let ast = cols.position("AST")?;
        let reb = cols.position("REB")?;
        let min = cols.position("MIN")?;

        rs.row_set
            .iter()
            .enumerate()
            .map(|(row_no, row)| {
                Ok(GameLogRecord {
                    player_id: PlayerId::new(cell_u64(row, player_id, row_no)?),
                    player_name: cell_string(row, player_name, row_no)?,
                    team: TeamCode::new(cell_string(row, team, row_no)?),
                    season,
                    game_id: GameId::new(cell_string(row, game_id, row_no)?),
                    points: cell_stat(row, pts),
                    assists: cell_stat(row, ast),
                    rebounds: cell_stat(row, reb),
                    minutes: row.get(min).and_then(parse_minutes),
                })
            })
            .collect()
    }
}

/// One selection in a draft.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DraftPick {
    pub player_id: PlayerId,
    pub player_name: String,
    pub draft_year: DraftYear,
    pub round: Option<u16>,
    pub overall_pick: Option<u16>,
    pub team: Option<TeamCode>,
}

impl DraftPick {
    /// Decode the `DraftHistory` result set.
    pub fn from_result_set(rs: &ResultSet) -> Result<Vec<Self>> {
        let cols = Columns::new(&rs.headers);
        let person_id = cols.position("PERSON_ID")?;
        let player_name = cols.position("PLAYER_NAME")?;
        let season = cols.position("SEASON")?;
        let round = cols.position("ROUND_NUMBER").ok();
        let overall = cols.position("OVERALL_PICK").ok();
        let team = cols.position("TEAM_ABBREVIATION").ok();

        rs.row_set
            .iter()
            .enumerate()
            .map(|(row_no, row)| {
                let year = cell_u16(row, season, row_no)?;
                Ok(DraftPick {
                    player_id: PlayerId::new(cell_u64(row, person_id, row_no)?),
                    player_name: cell_string(row, player_name, row_no)?,
                    draft_year: DraftYear::new(year),
                    round: optional_u16(row, round, row_no)?,
                    overall_pick: optional_u16(row, overall, row_no)?,
                    team: team
                        .and_then(|i| cell_string(row, i, row_no).ok())
                        .filter(|t| !t.trim().is_empty())
                        .map(TeamCode::new),
                })
            })
            .collect()
    }
}

/// The players selected in one or more drafts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DraftClassRoster {
    pub draft_years: Vec<DraftYear>,
    pub picks: Vec<DraftPick>,
}

impl DraftClassRoster {
    pub fn new(draft_years: Vec<DraftYear>, picks: Vec<DraftPick>) -> Self {
        Self { draft_years, picks }
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn player_ids(&self) -> BTreeSet<PlayerId> {
        self.picks.iter().map(|p| p.player_id).collect()
    }

    pub fn player_names(&self) -> BTreeSet<&str> {
        self.picks.iter().map(|p| p.player_name.as_str()).collect()
    }
}
