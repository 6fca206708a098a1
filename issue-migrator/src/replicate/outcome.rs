//! Per-issue replication state.

use serde::Serialize;

/// What happened to one source issue during replication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IssueOutcome {
    /// Issue created; comment posting is reported separately.
    Created {
        /// Number assigned in the target repository.
        number: u64,
        /// Whether a consolidated comment was posted. `None` when the
        /// source issue had no comments.
        comment_posted: Option<bool>,
    },

    /// Creation failed. The issue takes no part in later phases.
    Failed {
        /// Error message.
        error: String,
    },
}

/// Outcome of replicating one source issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplicatedIssue {
    /// Number in the source repository.
    pub source_number: u64,

    pub outcome: IssueOutcome,
}
