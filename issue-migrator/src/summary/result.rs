//! Per-item outcomes.

use std::fmt;

/// Kind of unit of work performed against the target repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Label,
    Milestone,
    Issue,
    Comment,
    BodyUpdate,
}

impl ItemKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Milestone => "milestone",
            Self::Issue => "issue",
            Self::Comment => "comment",
            Self::BodyUpdate => "body update",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// Created in the target repository.
    Created,

    /// Already present in the target repository; nothing was sent.
    Existing,

    /// The request failed; the run continued without it.
    Failed {
        /// Error message.
        error: String,
    },
}

/// Result of one label, milestone, issue, comment or body update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemResult {
    pub kind: ItemKind,

    /// Label name, milestone title or issue reference.
    pub key: String,

    pub status: ItemStatus,
}

impl ItemResult {
    pub fn created(kind: ItemKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            status: ItemStatus::Created,
        }
    }

    pub fn existing(kind: ItemKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            status: ItemStatus::Existing,
        }
    }

    pub fn failed(kind: ItemKind, key: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            kind,
            key: key.into(),
            status: ItemStatus::Failed {
                error: error.to_string(),
            },
        }
    }
}
