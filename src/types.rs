use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Borrow;
use std::fmt;
use std::path::{Path, PathBuf};

/// Directory raw match exports are read from when only a name is given
pub const DEFAULT_RAW_DIR: &str = "data/raw";

/// Directory flattened CSV files are written to when only a name is given
pub const DEFAULT_PROCESSED_DIR: &str = "data/processed";

/// Participant id, the key of every player row
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PlayerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One recorded game session
#[derive(Debug, Clone, Deserialize)]
pub struct Match {
    pub data: MatchData,

    /// Sub-records in document order
    pub included: Vec<Included>,
}

/// Match id and match-level attributes (map, mode, duration, ...)
#[derive(Debug, Clone, Deserialize)]
pub struct MatchData {
    pub id: String,
    pub attributes: Map<String, Value>,
}

/// A sub-record of a match, tagged by its `type` field
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Included {
    Participant(Participant),
    Roster(Roster),
    /// Assets and any other record kinds; ignored by the transform
    #[serde(other)]
    Other,
}

/// Stats of one player in one match
#[derive(Debug, Clone, Deserialize)]
pub struct Participant {
    pub id: String,
    pub attributes: ParticipantAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantAttributes {
    pub stats: Map<String, Value>,
}

/// A team within one match and the participants that belong to it
#[derive(Debug, Clone, Deserialize)]
pub struct Roster {
    pub attributes: RosterAttributes,
    pub relationships: RosterRelationships,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterAttributes {
    pub stats: RosterStats,
}

/// Team id and placement, copied onto member rows as-is
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    pub team_id: Value,
    pub rank: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterRelationships {
    pub participants: Relation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Relation {
    pub data: Vec<ResourceRef>,
}

/// Reference to another record by id
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    pub id: String,
}

impl Roster {
    /// Ids of the participants on this roster
    pub fn participant_ids(&self) -> impl Iterator<Item = &str> {
        self.relationships
            .participants
            .data
            .iter()
            .map(|r| r.id.as_str())
    }
}

/// Where to read the match export and where to write the CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl FlattenConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        FlattenConfig {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Derive `<raw_dir>/<name>` and `<processed_dir>/<name>.csv`
    pub fn from_name(name: &str, raw_dir: impl AsRef<Path>, processed_dir: impl AsRef<Path>) -> Self {
        FlattenConfig {
            input: raw_dir.as_ref().join(name),
            output: processed_dir.as_ref().join(format!("{}.csv", name)),
        }
    }
}

/// Counts reported after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlattenSummary {
    pub matches: usize,
    pub players: usize,
}
