//! Fixed output schema for player rows

/// First column; holds the participant id rather than a row field
pub const ID_COLUMN: &str = "id";

pub const MATCH_ID: &str = "matchId";
pub const GROUP_ID: &str = "groupId";
pub const GROUP_RANK: &str = "groupRank";
pub const PLAYER_COUNT: &str = "playerCount";
pub const GROUP_COUNT: &str = "groupCount";

/// CSV header in output order
pub const COLUMNS: [&str; 47] = [
    ID_COLUMN,
    // participant stats
    "DBNOs",
    "assists",
    "boosts",
    "damageDealt",
    "deathType",
    "headshotKills",
    "heals",
    "killPlace",
    "killPoints",
    "killPointsDelta",
    "killStreaks",
    "kills",
    "lastKillPoints",
    "lastWinPoints",
    "longestKill",
    "mostDamage",
    "name",
    "playerId",
    "rankPoints",
    "revives",
    "rideDistance",
    "roadKills",
    "swimDistance",
    "teamKills",
    "timeSurvived",
    "vehicleDestroys",
    "walkDistance",
    "weaponsAcquired",
    "winPlace",
    "winPoints",
    "winPointsDelta",
    GROUP_ID,
    // match attributes
    "stats",
    "tags",
    "mapName",
    "seasonState",
    "createdAt",
    "gameMode",
    "titleId",
    "shardId",
    "isCustomMatch",
    "duration",
    MATCH_ID,
    // per-match counts
    PLAYER_COUNT,
    GROUP_COUNT,
    GROUP_RANK,
];

/// Columns looked up in a row's fields (everything after the id)
pub fn field_columns() -> &'static [&'static str] {
    &COLUMNS[1..]
}
