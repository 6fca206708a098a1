//! Issue snapshot loading.
//!
//! A snapshot is the JSON array produced by
//! `gh issue list --json number,title,body,labels,comments,milestone`.
//! Extra fields in the export are ignored.

mod error;
mod issue;

pub use error::SnapshotError;
pub use issue::{Author, Comment, Label, Milestone, SourceIssue};

use std::path::Path;
use tracing::{debug, info};

/// Reads and parses a snapshot file.
///
/// # Errors
///
/// Returns [`SnapshotError::Io`] if the file can't be read and
/// [`SnapshotError::Parse`] if it isn't a valid issue array.
pub fn load_snapshot(path: &Path) -> Result<Vec<SourceIssue>, SnapshotError> {
    debug!(path = %path.display(), "Reading snapshot");

    let content = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let issues = parse_snapshot(&content).map_err(|e| SnapshotError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;

    info!(count = issues.len(), "Parsed issues from snapshot");
    Ok(issues)
}

/// Parses snapshot content already held in memory.
///
/// # Errors
///
/// Returns the underlying JSON error if the content isn't a valid issue array.
pub fn parse_snapshot(content: &str) -> Result<Vec<SourceIssue>, serde_json::Error> {
    serde_json::from_str(content)
}
