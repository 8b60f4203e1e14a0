use std::io;
use std::path::PathBuf;

/// All errors that can occur while flattening a match export.
#[derive(thiserror::Error, Debug)]
pub enum FlattenError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The input is not valid JSON or does not have the match export shape.
    #[error("failed to parse match export {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: simd_json::Error,
    },

    /// The output file (or its directory) could not be created.
    #[error("failed to create {}: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    /// A player row lacks one of the fixed output columns.
    #[error("player {player_id} is missing column `{column}`")]
    MissingField {
        player_id: String,
        column: &'static str,
    },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, FlattenError>;
