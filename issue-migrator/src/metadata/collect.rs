//! Deduplication of labels and milestones across the snapshot.

use crate::snapshot::{Label, Milestone, SourceIssue};
use std::collections::BTreeMap;
use tracing::info;

/// Distinct labels and milestones referenced by the snapshot.
#[derive(Debug, Clone, Default)]
pub struct CollectedMetadata {
    /// Labels keyed by name.
    pub labels: BTreeMap<String, Label>,

    /// Milestones keyed by title.
    pub milestones: BTreeMap<String, Milestone>,
}

/// Collects every label and milestone attached to `issues`.
///
/// When the same name (or title) appears more than once with different
/// fields, the last occurrence wins.
#[must_use]
pub fn collect_metadata(issues: &[SourceIssue]) -> CollectedMetadata {
    let mut collected = CollectedMetadata::default();

    for issue in issues {
        for label in &issue.labels {
            collected.labels.insert(label.name.clone(), label.clone());
        }
        if let Some(milestone) = &issue.milestone {
            collected
                .milestones
                .insert(milestone.title.clone(), milestone.clone());
        }
    }

    info!(
        labels = collected.labels.len(),
        milestones = collected.milestones.len(),
        "Found unique labels and milestones"
    );
    collected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str, color: &str) -> Label {
        Label {
            name: name.to_string(),
            color: color.to_string(),
            description: format!("{name} label"),
        }
    }

    fn issue(number: u64, labels: Vec<Label>, milestone: Option<Milestone>) -> SourceIssue {
        SourceIssue {
            number,
            title: format!("Issue {number}"),
            body: String::new(),
            labels,
            comments: Vec::new(),
            milestone,
        }
    }

    #[test]
    fn empty_snapshot_yields_empty_sets() {
        let collected = collect_metadata(&[]);
        assert!(collected.labels.is_empty());
        assert!(collected.milestones.is_empty());
    }

    #[test]
    fn deduplicates_by_name_with_last_occurrence_winning() {
        let issues = vec![
            issue(1, vec![label("bug", "ff0000"), label("docs", "0000ff")], None),
            issue(2, vec![label("bug", "00ff00")], None),
        ];

        let collected = collect_metadata(&issues);

        assert_eq!(collected.labels.len(), 2);
        assert_eq!(collected.labels["bug"].color, "00ff00");
        assert_eq!(collected.labels["docs"].color, "0000ff");
    }

    #[test]
    fn deduplicates_milestones_by_title() {
        let v1 = |description: &str| Milestone {
            title: "v1".to_string(),
            description: description.to_string(),
            due_on: None,
        };
        let issues = vec![
            issue(1, Vec::new(), Some(v1("first"))),
            issue(2, Vec::new(), None),
            issue(3, Vec::new(), Some(v1("second"))),
        ];

        let collected = collect_metadata(&issues);

        assert_eq!(collected.milestones.len(), 1);
        assert_eq!(collected.milestones["v1"].description, "second");
    }
}
