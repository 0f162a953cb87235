//! Reading the speaker list.

use std::path::Path;

use tracing::debug;

use crate::error::{CompassError, CompassResult};
use crate::speaker::Speaker;

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT_FILE: &str = "speakers.json";

/// Load the speaker records from a JSON array on disk.
pub fn load_speakers(path: &Path) -> CompassResult<Vec<Speaker>> {
    let content = std::fs::read_to_string(path).map_err(|source| CompassError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let speakers = parse_speakers(&content).map_err(|source| CompassError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(count = speakers.len(), path = %path.display(), "loaded speakers");
    Ok(speakers)
}

pub fn parse_speakers(json: &str) -> serde_json::Result<Vec<Speaker>> {
    serde_json::from_str(json)
}
