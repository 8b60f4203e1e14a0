use crate::flatten::columns::MATCH_ID;
use crate::flatten::row::PlayerRow;
use crate::flatten::table::PlayerTable;
use crate::types::{Included, Match};
use serde_json::Value;
use tracing::{debug, warn};

/// Flatten every match into one table of player rows.
///
/// Rows accumulate by participant id only. When a later match reuses an id,
/// its row replaces the earlier one entirely.
pub fn matches_to_players(matches: Vec<Match>) -> PlayerTable {
    let mut all_players = PlayerTable::new();

    for game in matches {
        let match_id = game.data.id.clone();
        let players = flatten_match(game);
        for id in all_players.absorb(players) {
            warn!(player_id = %id, match_id = %match_id, "participant id seen in an earlier match; keeping the later row");
        }
    }

    all_players
}

/// Flatten a single match into player rows keyed by participant id
pub fn flatten_match(game: Match) -> PlayerTable {
    let mut attributes = game.data.attributes;
    attributes.insert(MATCH_ID.to_string(), Value::String(game.data.id.clone()));

    let mut players = PlayerTable::new();
    let mut group_count = 0;
    let mut ignored = 0;

    for record in game.included {
        match record {
            Included::Participant(participant) => {
                // consumed by the constructor for a new id, merged otherwise
                let mut stats = Some(participant.attributes.stats);
                let row = players.get_or_insert_with(&participant.id, || {
                    PlayerRow::from_stats(stats.take().unwrap_or_default())
                });
                if let Some(stats) = stats {
                    row.merge_stats(stats);
                }
                row.merge_match_attributes(&attributes);
            }
            Included::Roster(roster) => {
                group_count += 1;
                let stats = &roster.attributes.stats;
                for id in roster.participant_ids() {
                    players.entry(id).assign_group(stats.team_id.clone(), stats.rank.clone());
                }
            }
            Included::Other => ignored += 1,
        }
    }

    let player_count = players.len();
    for row in players.rows_mut() {
        row.set_match_counts(player_count, group_count);
    }

    debug!(
        match_id = %game.data.id,
        players = player_count,
        groups = group_count,
        ignored,
        "flattened match"
    );

    players
}
