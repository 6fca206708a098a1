//! Label provisioning.

use crate::snapshot::Label;
use crate::summary::{ItemKind, ItemResult, RunSummary};
use crate::target::{IssueTracker, TargetError};
use std::collections::{BTreeMap, HashSet};
use tracing::{info, warn};

/// Creates every collected label that the target doesn't already have.
///
/// A label that fails to create is logged and skipped; issues referencing
/// it are still created.
///
/// # Errors
///
/// Returns [`TargetError`] if the existing labels can't be listed.
pub async fn provision_labels<T>(
    tracker: &T,
    labels: &BTreeMap<String, Label>,
    summary: &mut RunSummary,
) -> Result<(), TargetError>
where
    T: IssueTracker + ?Sized,
{
    let existing: HashSet<String> = tracker.list_labels().await?.into_iter().collect();

    for (name, label) in labels {
        if existing.contains(name) {
            summary.record(ItemResult::existing(ItemKind::Label, name));
            continue;
        }

        info!(label = %name, "Creating label");
        match tracker.create_label(label).await {
            Ok(()) => summary.record(ItemResult::created(ItemKind::Label, name)),
            Err(e) => {
                warn!(label = %name, error = %e, "Failed to create label");
                summary.record(ItemResult::failed(ItemKind::Label, name, e));
            }
        }
    }

    Ok(())
}
