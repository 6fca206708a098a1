//! Issue replication.
//!
//! Recreates each source issue in the target with its labels and milestone,
//! then carries its comments over as one consolidated comment.

mod numbers;
mod outcome;

pub use numbers::IssueNumberMap;
pub use outcome::{IssueOutcome, ReplicatedIssue};

use crate::metadata::MilestoneNumbers;
use crate::snapshot::SourceIssue;
use crate::summary::{ItemKind, ItemResult, RunSummary};
use crate::target::{IssueTracker, NewIssue};
use crate::templates::CommentRenderer;
use tracing::{info, info_span, warn, Instrument};

/// Result of the replication phase.
#[derive(Debug, Clone, Default)]
pub struct Replication {
    /// Numbers of every issue that was created.
    pub numbers: IssueNumberMap,

    /// One entry per source issue, in snapshot order.
    pub issues: Vec<ReplicatedIssue>,
}

/// Builds the creation request for a source issue.
///
/// The milestone is attached only if its title was provisioned.
#[must_use]
pub fn new_issue(issue: &SourceIssue, milestones: &MilestoneNumbers) -> NewIssue {
    NewIssue {
        title: issue.title.clone(),
        body: issue.body.clone(),
        labels: issue.labels.iter().map(|label| label.name.clone()).collect(),
        milestone: issue
            .milestone
            .as_ref()
            .and_then(|milestone| milestones.get(&milestone.title).copied()),
    }
}

/// Creates every source issue in the target, in snapshot order.
///
/// An issue that fails to create is logged and skipped: it gets no mapping
/// entry and no comment. A comment that fails to post leaves the issue in
/// place.
pub async fn replicate_issues<T>(
    tracker: &T,
    issues: &[SourceIssue],
    milestones: &MilestoneNumbers,
    renderer: &CommentRenderer,
    summary: &mut RunSummary,
) -> Replication
where
    T: IssueTracker + ?Sized,
{
    let mut replication = Replication::default();

    for issue in issues {
        let span = info_span!("replicate_issue", source_number = issue.number);
        let outcome = replicate_issue(tracker, issue, milestones, renderer, summary)
            .instrument(span)
            .await;

        if let IssueOutcome::Created { number, .. } = outcome {
            replication.numbers.insert(issue.number, number);
        }
        replication.issues.push(ReplicatedIssue {
            source_number: issue.number,
            outcome,
        });
    }

    info!(
        created = replication.numbers.len(),
        total = issues.len(),
        "Issue replication complete"
    );
    replication
}

async fn replicate_issue<T>(
    tracker: &T,
    issue: &SourceIssue,
    milestones: &MilestoneNumbers,
    renderer: &CommentRenderer,
    summary: &mut RunSummary,
) -> IssueOutcome
where
    T: IssueTracker + ?Sized,
{
    let key = format!("#{}", issue.number);

    info!(title = %issue.title, "Creating issue");
    let number = match tracker.create_issue(&new_issue(issue, milestones)).await {
        Ok(number) => number,
        Err(e) => {
            warn!(title = %issue.title, error = %e, "Failed to create issue");
            summary.record(ItemResult::failed(ItemKind::Issue, key, &e));
            return IssueOutcome::Failed {
                error: e.to_string(),
            };
        }
    };
    summary.record(ItemResult::created(ItemKind::Issue, &key));

    let comment_posted = post_consolidated_comment(tracker, issue, number, renderer, summary).await;
    IssueOutcome::Created {
        number,
        comment_posted,
    }
}

async fn post_consolidated_comment<T>(
    tracker: &T,
    issue: &SourceIssue,
    number: u64,
    renderer: &CommentRenderer,
    summary: &mut RunSummary,
) -> Option<bool>
where
    T: IssueTracker + ?Sized,
{
    let key = format!("#{number}");
    let body = match renderer.render(&issue.comments) {
        Ok(Some(body)) => body,
        Ok(None) => return None,
        Err(e) => {
            warn!(issue_number = number, error = %e, "Failed to render consolidated comment");
            summary.record(ItemResult::failed(ItemKind::Comment, key, e));
            return Some(false);
        }
    };

    info!(
        issue_number = number,
        comments = issue.comments.len(),
        "Posting consolidated comment"
    );
    match tracker.create_comment(number, &body).await {
        Ok(()) => {
            summary.record(ItemResult::created(ItemKind::Comment, key));
            Some(true)
        }
        Err(e) => {
            warn!(issue_number = number, error = %e, "Failed to post consolidated comment");
            summary.record(ItemResult::failed(ItemKind::Comment, key, e));
            Some(false)
        }
    }
}
