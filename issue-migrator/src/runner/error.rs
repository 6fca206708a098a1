//! Runner error types.

use crate::snapshot::SnapshotError;
use crate::target::TargetError;
use crate::templates::TemplateError;

/// Errors that abort a migration run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The snapshot couldn't be read or parsed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// The comment template couldn't be loaded.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// No GitHub token was provided.
    #[error("GITHUB_TOKEN environment variable not set")]
    MissingToken,

    /// A required setting was empty.
    #[error("Missing required setting: --{name}")]
    MissingSetting { name: &'static str },

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Client(#[from] octocrab::Error),

    /// Existing labels couldn't be listed.
    #[error("Failed to fetch existing labels: {0}")]
    LabelListing(#[source] TargetError),

    /// Existing milestones couldn't be listed.
    #[error("Failed to fetch existing milestones: {0}")]
    MilestoneListing(#[source] TargetError),
}
