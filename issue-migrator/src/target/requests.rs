//! Request and response payloads exchanged with the target repository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A milestone that exists in the target repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteMilestone {
    /// Milestone number in the target repository.
    pub number: u64,

    /// Milestone title.
    pub title: String,
}

/// Payload for creating a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMilestone {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<DateTime<Utc>>,
}

/// Payload for creating an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,

    /// Body exactly as it appeared in the source; references are rewritten later.
    pub body: String,

    /// Label names.
    pub labels: Vec<String>,

    /// Milestone number in the target repository.
    pub milestone: Option<u64>,
}
