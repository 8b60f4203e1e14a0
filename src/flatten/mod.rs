//! Match flattening - merge participant and roster records into player rows
//!
//! Each match contributes one row per participant id. A row combines the
//! participant's stats, the match attributes, the roster group assignment
//! and the per-match player/group counts. Rows are written out against a
//! fixed column schema.

pub mod cell;
pub mod columns;
pub mod row;
pub mod table;
pub mod transform;
pub mod writer;

pub use columns::{COLUMNS, ID_COLUMN};
pub use row::{PlayerRow, NO_GROUP};
pub use table::PlayerTable;
pub use transform::{flatten_match, matches_to_players};
pub use writer::PlayerCsvWriter;
