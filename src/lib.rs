//! # Matchmelt - flatten match exports into player tables
//!
//! Converts a nested JSON export of game matches into one CSV row per
//! player, ready for spreadsheets and analysis tools.
//!
//! ## Modules
//!
//! - **loader**: read a match export into typed records
//! - **flatten**: merge participant stats, match attributes and roster
//!   assignments into player rows, and write them as CSV
//!
//! ## Quick Start
//!
//! ```rust
//! use matchmelt::types::Match;
//! use matchmelt::flatten::matches_to_players;
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let game: Match = serde_json::from_value(json!({
//!     "data": {"id": "m1", "attributes": {"mapName": "Erangel_Main"}},
//!     "included": [
//!         {"type": "participant", "id": "p1", "attributes": {"stats": {"kills": 2}}},
//!         {
//!             "type": "roster",
//!             "id": "r1",
//!             "attributes": {"stats": {"teamId": 5, "rank": 1}},
//!             "relationships": {"participants": {"data": [{"id": "p1"}]}}
//!         }
//!     ]
//! }))?;
//!
//! let players = matches_to_players(vec![game]);
//! let row = players.get("p1").unwrap();
//! assert_eq!(row.get("groupId"), Some(&json!(5)));
//! assert_eq!(row.get("mapName"), Some(&json!("Erangel_Main")));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod flatten;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{FlattenError, Result};
pub use flatten::{flatten_match, matches_to_players, PlayerCsvWriter, PlayerRow, PlayerTable};
pub use loader::{load_matches, parse_matches};
pub use types::{FlattenConfig, FlattenSummary, Match, PlayerId};

use tracing::info;

/// Main entry point: load a match export, flatten it and write the CSV
pub fn flatten_file(config: &FlattenConfig) -> Result<FlattenSummary> {
    let matches = load_matches(&config.input)?;
    let match_count = matches.len();

    let players = matches_to_players(matches);

    let mut writer = PlayerCsvWriter::create(&config.output)?;
    let written = writer.write_players(&players)?;
    writer.flush()?;

    info!(matches = match_count, players = written, "flattened match export");
    Ok(FlattenSummary {
        matches: match_count,
        players: written,
    })
}
