use crate::error::{FlattenError, Result};
use crate::types::Match;
use std::path::Path;
use tracing::info;

/// Read and parse a whole match export file
pub fn load_matches<P: AsRef<Path>>(path: P) -> Result<Vec<Match>> {
    let path = path.as_ref();
    let mut content = std::fs::read(path).map_err(|source| FlattenError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let matches = parse_matches(&mut content).map_err(|source| FlattenError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), matches = matches.len(), "loaded match export");
    Ok(matches)
}

/// Parse a match export held in memory.
///
/// simd-json parses in place, so the buffer is clobbered.
pub fn parse_matches(content: &mut [u8]) -> std::result::Result<Vec<Match>, simd_json::Error> {
    simd_json::serde::from_slice(content)
}
