//! Restrict game logs to the players of a draft class.

use std::collections::HashMap;

use crate::cli::types::{MatchKey, PlayerId};
use crate::nba::types::{DraftClassRoster, GameLogRecord};

/// Log rows whose player belongs to `roster`, in input order.
///
/// With [`MatchKey::Name`] the comparison is exact string equality, so a
/// player whose name is spelled differently in the draft data is silently
/// dropped. [`MatchKey::Id`] avoids that by joining on the provider id.
///
/// In name mode the player is identified by the name alone: every kept row
/// carries the roster id of the first pick with that name, so namesakes in
/// the logs collapse into one player.
pub fn filter_logs(
    logs: &[GameLogRecord],
    roster: &DraftClassRoster,
    key: MatchKey,
) -> Vec<GameLogRecord> {
    match key {
        MatchKey::Id => {
            let ids = roster.player_ids();
            logs.iter()
                .filter(|l| ids.contains(&l.player_id))
                .cloned()
                .collect()
        }
        MatchKey::Name => {
            let mut ids: HashMap<&str, PlayerId> = HashMap::new();
            for pick in &roster.picks {
                ids.entry(pick.player_name.as_str()).or_insert(pick.player_id);
            }
            logs.iter()
                .filter_map(|l| {
                    ids.get(l.player_name.as_str()).map(|&player_id| GameLogRecord {
                        player_id,
                        ..l.clone()
                    })
                })
                .collect()
        }
    }
}
