//! Target repository error types.

use thiserror::Error;

/// Errors returned by an [`IssueTracker`](super::IssueTracker) operation.
#[derive(Debug, Error)]
pub enum TargetError {
    /// The API answered with an error document.
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request did not complete.
    #[error("GitHub API error: {0}")]
    Transport(octocrab::Error),
}

impl From<octocrab::Error> for TargetError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => Self::Rejected {
                status: source.status_code.as_u16(),
                message: source.message,
            },
            other => Self::Transport(other),
        }
    }
}
