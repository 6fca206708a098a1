#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod metadata;
pub mod replicate;
pub mod rewrite;
pub mod runner;
pub mod snapshot;
pub mod summary;
pub mod target;
pub mod templates;

pub use metadata::{
    collect_metadata, new_milestone, parse_due_on, provision_labels, provision_milestones,
    CollectedMetadata, MilestoneNumbers,
};
pub use replicate::{
    new_issue, replicate_issues, IssueNumberMap, IssueOutcome, ReplicatedIssue, Replication,
};
pub use rewrite::{rewrite_issue_bodies, rewrite_references};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use snapshot::{
    load_snapshot, parse_snapshot, Author, Comment, Label, Milestone, SnapshotError, SourceIssue,
};
pub use summary::{ItemKind, ItemResult, ItemStatus, KindCounts, RunSummary};
pub use target::{
    GitHubTarget, IssueTracker, NewIssue, NewMilestone, RemoteMilestone, TargetError,
};
pub use templates::{
    create_handlebars_registry, CommentRenderer, TemplateError, DEFAULT_COMMENT_TEMPLATE,
};
