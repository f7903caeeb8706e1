//! Per-season and per-player statistics.
//!
//! Career averages are averages of season averages: every season counts
//! once no matter how many games were played in it. Games played is the
//! true career total, the sum of distinct games per season.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::cli::types::{GameId, PlayerId, Season};
use crate::nba::types::GameLogRecord;

/// Running mean over the values that are present.
#[derive(Debug, Clone, Copy, Default)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            self.sum += v;
            self.count += 1;
        }
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// One player's averages for one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonLine {
    pub player_id: PlayerId,
    pub season: Season,
    /// Distinct games played.
    pub games: usize,
    pub points: Option<f64>,
    pub assists: Option<f64>,
    pub rebounds: Option<f64>,
    pub minutes: Option<f64>,
}

/// Career attributes attached to a graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStats {
    pub player_id: PlayerId,
    /// Mean of per-season points averages.
    pub avg_points: Option<f64>,
    /// Sum of per-season distinct game counts.
    pub total_games: usize,
    pub avg_assists: Option<f64>,
    pub avg_rebounds: Option<f64>,
    pub avg_minutes: Option<f64>,
    /// Seasons with at least one logged game.
    pub seasons: usize,
}

impl NodeStats {
    pub fn empty(player_id: PlayerId) -> Self {
        Self {
            player_id,
            avg_points: None,
            total_games: 0,
            avg_assists: None,
            avg_rebounds: None,
            avg_minutes: None,
            seasons: 0,
        }
    }
}

#[derive(Default)]
struct SeasonAccumulator<'a> {
    games: BTreeSet<&'a GameId>,
    points: Mean,
    assists: Mean,
    rebounds: Mean,
    minutes: Mean,
}

/// Season averages for every (player, season) present in `logs`.
pub fn season_lines<'a, I>(logs: I) -> BTreeMap<(PlayerId, Season), SeasonLine>
where
    I: IntoIterator<Item = &'a GameLogRecord>,
{
    let mut acc: BTreeMap<(PlayerId, Season), SeasonAccumulator<'a>> = BTreeMap::new();
    for l in logs {
        let a = acc.entry((l.player_id, l.season)).or_default();
        a.games.insert(&l.game_id);
        a.points.push(l.points);
        a.assists.push(l.assists);
        a.rebounds.push(l.rebounds);
        a.minutes.push(l.minutes);
    }

    acc.into_iter()
        .map(|((player_id, season), a)| {
            let line = SeasonLine {
                player_id,
                season,
                games: a.games.len(),
                points: a.points.value(),
                assists: a.assists.value(),
                rebounds: a.rebounds.value(),
                minutes: a.minutes.value(),
            };
            ((player_id, season), line)
        })
        .collect()
}

/// Collapse season lines into one [`NodeStats`] per player.
///
/// A season with no recorded value for a stat contributes no season mean
/// for it; a player with no season mean at all gets `None`.
pub fn aggregate_node_stats(
    lines: &BTreeMap<(PlayerId, Season), SeasonLine>,
) -> BTreeMap<PlayerId, NodeStats> {
    #[derive(Default)]
    struct Career {
        games: usize,
        seasons: usize,
        points: Mean,
        assists: Mean,
        rebounds: Mean,
        minutes: Mean,
    }

    let mut careers: BTreeMap<PlayerId, Career> = BTreeMap::new();
    for line in lines.values() {
        let c = careers.entry(line.player_id).or_default();
        c.games += line.games;
        c.seasons += 1;
        c.points.push(line.points);
        c.assists.push(line.assists);
        c.rebounds.push(line.rebounds);
        c.minutes.push(line.minutes);
    }

    careers
        .into_iter()
        .map(|(player_id, c)| {
            let stats = NodeStats {
                player_id,
                avg_points: c.points.value(),
                total_games: c.games,
                avg_assists: c.assists.value(),
                avg_rebounds: c.rebounds.value(),
                avg_minutes: c.minutes.value(),
                seasons: c.seasons,
            };
            (player_id, stats)
        })
        .collect()
}

/// Display name per player: the first name seen in the logs.
pub fn player_names<'a, I>(logs: I) -> BTreeMap<PlayerId, String>
where
    I: IntoIterator<Item = &'a GameLogRecord>,
{
    let mut names = BTreeMap::new();
    for l in logs {
        names
            .entry(l.player_id)
            .or_insert_with(|| l.player_name.clone());
    }
    names
}
