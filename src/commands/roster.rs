//! Roster command implementation

use crate::{
    cli::types::DraftYear,
    nba::acquire::fetch_draft_roster,
    nba::types::{DraftClassRoster, DraftPick},
    Result,
};

use super::common::FetchParams;

/// One text line per pick: `2018  R1  #3   ATL  Luka Doncic (1629029)`.
pub fn format_pick(pick: &DraftPick) -> String {
    let round = pick
        .round
        .map(|r| format!("R{}", r))
        .unwrap_or_else(|| "R?".to_string());
    let overall = pick
        .overall_pick
        .map(|p| format!("#{}", p))
        .unwrap_or_default();
    let team = pick.team.as_ref().map(|t| t.as_str()).unwrap_or("-");
    format!(
        "{}  {:<3} {:<4} {:<4} {} ({})",
        pick.draft_year, round, overall, team, pick.player_name, pick.player_id
    )
}

/// Handle the roster command
pub async fn handle_roster(
    draft_years: Vec<DraftYear>,
    fetch: FetchParams,
    as_json: bool,
) -> Result<DraftClassRoster> {
    let client = fetch.client()?;
    let roster = fetch_draft_roster(&client, &draft_years, &fetch.cache_policy()).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&roster.picks)?);
    } else {
        for pick in &roster.picks {
            println!("{}", format_pick(pick));
        }
        println!("{} players", roster.len());
    }
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{PlayerId, TeamCode};

    #[test]
    fn test_format_pick() {
        let pick = DraftPick {
            player_id: PlayerId::new(1629029),
            player_name: "Luka Doncic".to_string(),
            draft_year: DraftYear::new(2018),
            round: Some(1),
            overall_pick: Some(3),
            team: Some(TeamCode::new("ATL")),
        };
        assert_eq!(
            format_pick(&pick),
            "2018  R1  #3   ATL  Luka Doncic (1629029)"
        );
    }

    #[test]
    fn test_format_pick_missing_fields() {
        let pick = DraftPick {
            player_id: PlayerId::new(1),
            player_name: "X".to_string(),
            draft_year: DraftYear::new(1990),
            round: None,
            overall_pick: None,
            team: None,
        };
        assert_eq!(format_pick(&pick), "1990  R?       -    X (1)");
    }
}
