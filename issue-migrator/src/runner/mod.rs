//! Orchestrates a migration run.
//!
//! Phases run strictly in order, each handing its result to the next:
//! collect metadata, provision labels and milestones, replicate issues,
//! rewrite references.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::metadata::{
    collect_metadata, provision_labels, provision_milestones, CollectedMetadata,
};
use crate::replicate::replicate_issues;
use crate::rewrite::rewrite_issue_bodies;
use crate::snapshot::{load_snapshot, SourceIssue};
use crate::summary::RunSummary;
use crate::target::{GitHubTarget, IssueTracker};
use crate::templates::CommentRenderer;
use octocrab::Octocrab;
use tracing::info;

/// Runs a migration against an [`IssueTracker`].
pub struct Runner<T = GitHubTarget> {
    config: RunnerConfig,
    tracker: T,
    renderer: CommentRenderer,
}

impl Runner<GitHubTarget> {
    /// Builds a runner that migrates into GitHub.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is incomplete, the comment
    /// template can't be loaded or the client can't be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        config.validate()?;

        let mut builder = Octocrab::builder().personal_token(config.token().to_string());
        if let Some(api_url) = config.api_url() {
            builder = builder.base_uri(api_url.as_str())?;
        }
        let octocrab = builder.build()?;

        let tracker = GitHubTarget::new(octocrab, config.owner(), config.repo());
        Self::with_tracker(config, tracker)
    }
}

impl<T: IssueTracker> Runner<T> {
    /// Builds a runner around an existing tracker.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured comment template can't be loaded.
    pub fn with_tracker(config: RunnerConfig, tracker: T) -> Result<Self, RunnerError> {
        let renderer = match config.comment_template_path() {
            Some(path) => CommentRenderer::from_file(path)?,
            None => CommentRenderer::new()?,
        };
        Ok(Self {
            config,
            tracker,
            renderer,
        })
    }

    /// Returns the tracker the runner migrates into.
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Loads the snapshot and runs every phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot can't be loaded or existing labels
    /// or milestones can't be listed. Per-item failures are recorded in the
    /// summary instead.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let issues = load_snapshot(self.config.snapshot_path())?;
        self.migrate(&issues).await
    }

    /// Runs every phase over already loaded issues.
    ///
    /// # Errors
    ///
    /// Returns an error if existing labels or milestones can't be listed.
    pub async fn migrate(&self, issues: &[SourceIssue]) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        summary.issues_in_snapshot = issues.len();

        info!(phase = 1, "Collecting unique labels and milestones");
        let metadata = collect_metadata(issues);
        summary.labels_collected = metadata.labels.len();
        summary.milestones_collected = metadata.milestones.len();

        if self.config.dry_run() {
            print_dry_run_preview(&self.config, issues, &metadata);
            return Ok(summary);
        }

        info!(
            phase = 2,
            owner = self.config.owner(),
            repo = self.config.repo(),
            "Creating labels and milestones in target repository"
        );
        provision_labels(&self.tracker, &metadata.labels, &mut summary)
            .await
            .map_err(RunnerError::LabelListing)?;
        let milestones = provision_milestones(&self.tracker, &metadata.milestones, &mut summary)
            .await
            .map_err(RunnerError::MilestoneListing)?;

        info!(phase = 3, "Creating issues and comments");
        let replication =
            replicate_issues(&self.tracker, issues, &milestones, &self.renderer, &mut summary)
                .await;

        info!(phase = 4, "Updating issue bodies with new references");
        rewrite_issue_bodies(&self.tracker, issues, &replication.numbers, &mut summary).await;

        info!(
            issues_created = summary.issues.created,
            failures = summary.failures.len(),
            "Migration complete"
        );
        Ok(summary)
    }
}

fn print_dry_run_preview(
    config: &RunnerConfig,
    issues: &[SourceIssue],
    metadata: &CollectedMetadata,
) {
    println!("\n[DRY RUN] Target: {}/{}", config.owner(), config.repo());

    println!("  Labels ({}):", metadata.labels.len());
    for (name, label) in &metadata.labels {
        println!("    {name} (#{})", label.color);
    }

    println!("  Milestones ({}):", metadata.milestones.len());
    for (title, milestone) in &metadata.milestones {
        match &milestone.due_on {
            Some(due_on) => println!("    {title} (due {due_on})"),
            None => println!("    {title}"),
        }
    }

    let comments: usize = issues.iter().map(|issue| issue.comments.len()).sum();
    println!(
        "  Would create {} issues carrying {} comments",
        issues.len(),
        comments
    );
    println!();
}
