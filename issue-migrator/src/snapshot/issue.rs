//! Source issue records as exported by `gh issue list --json`.

use serde::Deserialize;

/// An issue from the exported snapshot.
///
/// Loaded once and never modified; the body is rewritten into a new
/// string during the reference rewriting phase.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceIssue {
    /// Issue number in the source repository.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Issue body. May contain `#<number>` references to other issues.
    pub body: String,

    /// Labels attached to the issue, in source order.
    pub labels: Vec<Label>,

    /// Comments on the issue, in source order.
    pub comments: Vec<Comment>,

    /// Milestone the issue belongs to, if any.
    pub milestone: Option<Milestone>,
}

/// An issue label. Identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,

    /// Hex color without the leading `#`.
    pub color: String,

    /// Label description.
    pub description: String,
}

/// A milestone. Identified by its title.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Milestone title.
    pub title: String,

    /// Milestone description.
    pub description: String,

    /// Due date as RFC 3339 text (e.g. `2024-05-01T00:00:00Z`).
    pub due_on: Option<String>,
}

/// A comment on a source issue.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// Comment text.
    pub body: String,

    /// Comment author.
    pub author: Author,
}

/// The account that wrote a comment.
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    /// Login handle.
    pub login: String,
}
