//! Milestone provisioning.

use crate::snapshot::Milestone;
use crate::summary::{ItemKind, ItemResult, RunSummary};
use crate::target::{IssueTracker, NewMilestone, TargetError};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

/// Milestone title to milestone number in the target repository.
pub type MilestoneNumbers = HashMap<String, u64>;

/// Parses an RFC 3339 due date.
///
/// # Errors
///
/// Returns the chrono parse error for anything that isn't RFC 3339.
pub fn parse_due_on(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|due| due.with_timezone(&Utc))
}

/// Builds the creation payload for a collected milestone.
///
/// An unparseable due date is dropped with a warning.
#[must_use]
pub fn new_milestone(milestone: &Milestone) -> NewMilestone {
    let due_on = milestone
        .due_on
        .as_deref()
        .and_then(|raw| match parse_due_on(raw) {
            Ok(due) => Some(due),
            Err(e) => {
                warn!(
                    milestone = %milestone.title,
                    due_on = raw,
                    error = %e,
                    "Could not parse due date, creating without one"
                );
                None
            }
        });

    NewMilestone {
        title: milestone.title.clone(),
        description: milestone.description.clone(),
        due_on,
    }
}

/// Ensures every collected milestone exists and maps titles to numbers.
///
/// The map is seeded with every existing milestone, open or closed, so an
/// existing title is never created twice. A milestone that fails to create
/// is left out of the map.
///
/// # Errors
///
/// Returns [`TargetError`] if the existing milestones can't be listed.
pub async fn provision_milestones<T>(
    tracker: &T,
    milestones: &BTreeMap<String, Milestone>,
    summary: &mut RunSummary,
) -> Result<MilestoneNumbers, TargetError>
where
    T: IssueTracker + ?Sized,
{
    let mut numbers: MilestoneNumbers = tracker
        .list_milestones()
        .await?
        .into_iter()
        .map(|existing| (existing.title, existing.number))
        .collect();

    for (title, milestone) in milestones {
        if numbers.contains_key(title) {
            summary.record(ItemResult::existing(ItemKind::Milestone, title));
            continue;
        }

        info!(milestone = %title, "Creating milestone");
        match tracker.create_milestone(&new_milestone(milestone)).await {
            Ok(created) => {
                numbers.insert(title.clone(), created.number);
                summary.record(ItemResult::created(ItemKind::Milestone, title));
            }
            Err(e) => {
                warn!(milestone = %title, error = %e, "Failed to create milestone");
                summary.record(ItemResult::failed(ItemKind::Milestone, title, e));
            }
        }
    }

    Ok(numbers)
}
