//! Run summary types.

use super::result::{ItemKind, ItemResult, ItemStatus};

/// Counters for one [`ItemKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub created: usize,
    pub existing: usize,
    pub failed: usize,
}

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of issues read from the snapshot.
    pub issues_in_snapshot: usize,

    /// Number of distinct labels found in the snapshot.
    pub labels_collected: usize,

    /// Number of distinct milestones found in the snapshot.
    pub milestones_collected: usize,

    pub labels: KindCounts,
    pub milestones: KindCounts,
    pub issues: KindCounts,
    pub comments: KindCounts,
    pub body_updates: KindCounts,

    /// Every failed item, in the order it happened.
    pub failures: Vec<ItemResult>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with an item result.
    pub fn record(&mut self, result: ItemResult) {
        let counts = self.counts_mut(result.kind);
        match result.status {
            ItemStatus::Created => counts.created += 1,
            ItemStatus::Existing => counts.existing += 1,
            ItemStatus::Failed { .. } => {
                counts.failed += 1;
                self.failures.push(result);
            }
        }
    }

    /// Returns the counters for one kind of item.
    #[must_use]
    pub fn counts(&self, kind: ItemKind) -> KindCounts {
        match kind {
            ItemKind::Label => self.labels,
            ItemKind::Milestone => self.milestones,
            ItemKind::Issue => self.issues,
            ItemKind::Comment => self.comments,
            ItemKind::BodyUpdate => self.body_updates,
        }
    }

    fn counts_mut(&mut self, kind: ItemKind) -> &mut KindCounts {
        match kind {
            ItemKind::Label => &mut self.labels,
            ItemKind::Milestone => &mut self.milestones,
            ItemKind::Issue => &mut self.issues,
            ItemKind::Comment => &mut self.comments,
            ItemKind::BodyUpdate => &mut self.body_updates,
        }
    }

    /// Returns true if any item failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
