//! The repository issues are migrated into.
//!
//! The migration phases only talk to the target through [`IssueTracker`],
//! so the same pipeline runs against GitHub or an in-memory stand-in.

mod error;
mod github;
mod requests;

pub use error::TargetError;
pub use github::GitHubTarget;
pub use requests::{NewIssue, NewMilestone, RemoteMilestone};

use crate::snapshot::Label;
use async_trait::async_trait;

/// Remote operations the migration depends on.
///
/// Calls are issued one at a time; implementations need not handle
/// overlapping requests.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Lists the names of all labels in the repository.
    async fn list_labels(&self) -> Result<Vec<String>, TargetError>;

    /// Creates a label with the same name, color and description.
    async fn create_label(&self, label: &Label) -> Result<(), TargetError>;

    /// Lists all milestones, open and closed.
    async fn list_milestones(&self) -> Result<Vec<RemoteMilestone>, TargetError>;

    /// Creates a milestone and returns it with its assigned number.
    async fn create_milestone(&self, milestone: &NewMilestone)
        -> Result<RemoteMilestone, TargetError>;

    /// Creates an issue and returns its number.
    async fn create_issue(&self, issue: &NewIssue) -> Result<u64, TargetError>;

    /// Posts a comment on an issue.
    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<(), TargetError>;

    /// Replaces the body of an issue.
    async fn update_issue_body(&self, issue_number: u64, body: &str) -> Result<(), TargetError>;
}
