use crate::flatten::columns::{GROUP_COUNT, GROUP_ID, GROUP_RANK, PLAYER_COUNT};
use serde_json::{Map, Value};

/// Group id and rank of a participant no roster has claimed
pub const NO_GROUP: i64 = -1;

/// Flattened record for one participant
///
/// Fields only change through the merge methods below. Every merge is
/// last-write-wins per field, so the call order decides precedence:
/// the transform merges stats, then match attributes, and rosters
/// assign groups whenever they are encountered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerRow {
    fields: Map<String, Value>,
}

impl PlayerRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a row from a participant's stats with no group assigned
    pub fn from_stats(stats: Map<String, Value>) -> Self {
        let mut row = PlayerRow { fields: stats };
        row.assign_group(NO_GROUP, NO_GROUP);
        row
    }

    /// Copy stats into the row, overwriting fields with the same name
    pub fn merge_stats(&mut self, stats: Map<String, Value>) {
        for (key, value) in stats {
            self.fields.insert(key, value);
        }
    }

    /// Copy match-level attributes into the row, overwriting fields with the same name
    pub fn merge_match_attributes(&mut self, attributes: &Map<String, Value>) {
        for (key, value) in attributes {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    pub fn assign_group(&mut self, group_id: impl Into<Value>, rank: impl Into<Value>) {
        self.fields.insert(GROUP_ID.to_string(), group_id.into());
        self.fields.insert(GROUP_RANK.to_string(), rank.into());
    }

    pub fn set_match_counts(&mut self, player_count: usize, group_count: usize) {
        self.fields.insert(PLAYER_COUNT.to_string(), Value::from(player_count));
        self.fields.insert(GROUP_COUNT.to_string(), Value::from(group_count));
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_from_stats_sets_sentinel_group() {
        let row = PlayerRow::from_stats(map(json!({"kills": 3, "groupId": 99})));

        assert_eq!(row.get("kills"), Some(&json!(3)));
        assert_eq!(row.get(GROUP_ID), Some(&json!(-1)));
        assert_eq!(row.get(GROUP_RANK), Some(&json!(-1)));
    }

    #[test]
    fn test_match_attributes_win_over_stats() {
        let mut row = PlayerRow::from_stats(map(json!({"name": "alice", "duration": 1})));
        row.merge_match_attributes(&map(json!({"duration": 1800, "mapName": "Erangel"})));

        assert_eq!(row.get("duration"), Some(&json!(1800)));
        assert_eq!(row.get("mapName"), Some(&json!("Erangel")));
        assert_eq!(row.get("name"), Some(&json!("alice")));
    }

    #[test]
    fn test_stats_merge_keeps_roster_group() {
        let mut row = PlayerRow::new();
        row.assign_group(5, 1);
        row.merge_stats(map(json!({"kills": 0})));

        assert_eq!(row.get(GROUP_ID), Some(&json!(5)));
        assert_eq!(row.get(GROUP_RANK), Some(&json!(1)));
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_match_counts() {
        let mut row = PlayerRow::new();
        assert!(row.is_empty());
        row.set_match_counts(96, 25);

        assert_eq!(row.get(PLAYER_COUNT), Some(&json!(96)));
        assert_eq!(row.get(GROUP_COUNT), Some(&json!(25)));
        assert!(!row.contains("matchId"));
    }
}
