//! Team-season grouping and teammate edge generation.
//!
//! Two players are teammates when they both logged a game for the same team
//! in the same season. Every team-season group of `n` draft-class players
//! contributes all `n * (n - 1) / 2` unordered pairs; a pair who shared
//! several team-seasons appears once per team-season.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::cli::types::{PlayerId, Season, TeamCode};
use crate::error::{DraftGraphError, Result};
use crate::nba::types::GameLogRecord;

/// A player's residency on a team during a season.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerTeamSeason {
    pub player: PlayerId,
    pub team: TeamCode,
    pub season: Season,
}

/// A team during one season. Orders by season first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamSeason {
    pub season: Season,
    pub team: TeamCode,
}

/// One co-membership: `a < b` shared `team_season`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RawEdge {
    pub a: PlayerId,
    pub b: PlayerId,
    pub team_season: TeamSeason,
}

impl RawEdge {
    /// The unordered pair as a sorted tuple.
    pub fn pair(&self) -> (PlayerId, PlayerId) {
        (self.a, self.b)
    }
}

/// Distinct (player, team, season) triples.
pub fn player_team_seasons<'a, I>(logs: I) -> BTreeSet<PlayerTeamSeason>
where
    I: IntoIterator<Item = &'a GameLogRecord>,
{
    logs.into_iter()
        .map(|l| PlayerTeamSeason {
            player: l.player_id,
            team: l.team.clone(),
            season: l.season,
        })
        .collect()
}

/// Players present in each team-season.
pub fn team_season_groups(
    triples: &BTreeSet<PlayerTeamSeason>,
) -> BTreeMap<TeamSeason, BTreeSet<PlayerId>> {
    let mut groups: BTreeMap<TeamSeason, BTreeSet<PlayerId>> = BTreeMap::new();
    for t in triples {
        groups
            .entry(TeamSeason {
                season: t.season,
                team: t.team.clone(),
            })
            .or_default()
            .insert(t.player);
    }
    groups
}

/// Every unordered pair of `players`, each as `(lower, higher)`.
///
/// Fewer than two players yields no pairs.
pub fn pairs_for_group(players: &BTreeSet<PlayerId>) -> Vec<(PlayerId, PlayerId)> {
    let members: Vec<PlayerId> = players.iter().copied().collect();
    let mut pairs = Vec::with_capacity(members.len() * members.len().saturating_sub(1) / 2);
    for (i, &a) in members.iter().enumerate() {
        for &b in &members[i + 1..] {
            pairs.push((a, b));
        }
    }
    pairs
}

/// Concatenate the pairs of every team-season group.
///
/// Duplicates across team-seasons are kept. Fails with `EmptyGraph` when no
/// group has two or more players.
pub fn generate_edges(groups: &BTreeMap<TeamSeason, BTreeSet<PlayerId>>) -> Result<Vec<RawEdge>> {
    let edges: Vec<RawEdge> = groups
        .iter()
        .flat_map(|(ts, players)| {
            pairs_for_group(players).into_iter().map(move |(a, b)| RawEdge {
                a,
                b,
                team_season: ts.clone(),
            })
        })
        .collect();

    if edges.is_empty() {
        return Err(DraftGraphError::EmptyGraph {
            groups: groups.len(),
        });
    }
    Ok(edges)
}
