//! Line corpus loader.
//!
//! Reads the corpus file fresh on every call so edits to the file show
//! up on the very next request; nothing is cached between requests.
//!
use std::{fs, path::Path};

use crate::error::ServeError;

/// Read the corpus into an ordered list of trailing-trimmed lines
///
/// A file that cannot be read yields `SourceUnavailable`; a readable
/// file with zero lines yields `SourceEmpty`. An empty corpus is never
/// silently turned into a zero-length success.
pub(crate) fn load_lines(path: &Path) -> Result<Vec<String>, ServeError> {
    let text = fs::read_to_string(path).map_err(|source| ServeError::SourceUnavailable {
        path: path.display().to_string(),
        source,
    })?;

    let lines: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    if lines.is_empty() {
        return Err(ServeError::SourceEmpty);
    }
    Ok(lines)
}
