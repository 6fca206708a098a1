//! Cross-issue reference rewriting.
//!
//! Once every issue exists in the target, `#<number>` references in the
//! original bodies are renumbered to point at the new issues.

use crate::replicate::IssueNumberMap;
use crate::snapshot::SourceIssue;
use crate::summary::{ItemKind, ItemResult, RunSummary};
use crate::target::IssueTracker;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

/// `#` followed by ASCII digits.
static ISSUE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9]+)").expect("issue reference pattern is valid"));

/// Renumbers every `#<number>` reference found in `numbers`.
///
/// References to issues without an entry, including numbers too large to
/// parse, are left untouched.
#[must_use]
pub fn rewrite_references<'a>(body: &'a str, numbers: &IssueNumberMap) -> Cow<'a, str> {
    ISSUE_REFERENCE.replace_all(body, |caps: &Captures<'_>| {
        caps[1]
            .parse::<u64>()
            .ok()
            .and_then(|old| numbers.get(old))
            .map_or_else(|| caps[0].to_string(), |new| format!("#{new}"))
    })
}

/// Pushes rewritten bodies for every created issue whose references changed.
///
/// Issues that weren't created are skipped. Bodies without a rewritten
/// reference are not edited. A failed edit is logged and skipped.
pub async fn rewrite_issue_bodies<T>(
    tracker: &T,
    issues: &[SourceIssue],
    numbers: &IssueNumberMap,
    summary: &mut RunSummary,
) where
    T: IssueTracker + ?Sized,
{
    for issue in issues {
        let Some(new_number) = numbers.get(issue.number) else {
            info!(
                source_number = issue.number,
                "Skipping body update, issue was not created"
            );
            continue;
        };

        let rewritten = rewrite_references(&issue.body, numbers);
        if rewritten == issue.body.as_str() {
            debug!(issue_number = new_number, "No references to rewrite");
            continue;
        }

        let key = format!("#{new_number}");
        info!(
            issue_number = new_number,
            source_number = issue.number,
            "Updating body with new references"
        );
        match tracker.update_issue_body(new_number, &rewritten).await {
            Ok(()) => summary.record(ItemResult::created(ItemKind::BodyUpdate, key)),
            Err(e) => {
                warn!(issue_number = new_number, error = %e, "Failed to update issue body");
                summary.record(ItemResult::failed(ItemKind::BodyUpdate, key, e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers() -> IssueNumberMap {
        [(3, 30), (5, 50), (12, 7)].into_iter().collect()
    }

    #[test]
    fn rewrites_known_reference() {
        let body = rewrite_references("Blocked by #3.", &numbers());
        assert_eq!(body, "Blocked by #30.");
    }

    #[test]
    fn leaves_unknown_reference_untouched() {
        let body = rewrite_references("See #4 and #3", &numbers());
        assert_eq!(body, "See #4 and #30");
    }

    #[test]
    fn matches_whole_digit_runs() {
        let body = rewrite_references("#31 is not #3, nor is #123", &numbers());
        assert_eq!(body, "#31 is not #30, nor is #123");
    }

    #[test]
    fn only_digits_after_hash_are_altered() {
        let body = rewrite_references("Step 3 of 5: fix #5 by 2024 (#12)", &numbers());
        assert_eq!(body, "Step 3 of 5: fix #50 by 2024 (#7)");
    }

    #[test]
    fn text_without_references_is_borrowed() {
        let body = rewrite_references("No references ## here #", &numbers());
        assert!(matches!(body, Cow::Borrowed(_)));
    }

    #[test]
    fn oversized_number_is_left_alone() {
        let body = rewrite_references("#99999999999999999999999", &numbers());
        assert_eq!(body, "#99999999999999999999999");
    }

    #[test]
    fn non_ascii_digits_are_not_references() {
        let body = rewrite_references("#٣", &numbers());
        assert_eq!(body, "#٣");
    }
}
