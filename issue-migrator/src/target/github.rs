//! [`IssueTracker`] backed by the GitHub REST API.

use super::{IssueTracker, NewIssue, NewMilestone, RemoteMilestone, TargetError};
use crate::snapshot::Label;
use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use serde::Serialize;
use tracing::debug;

/// Results per page when listing labels and milestones.
const RESULTS_PER_PAGE: u8 = 100;

#[derive(Serialize)]
struct MilestoneQuery {
    state: &'static str,
    per_page: u8,
}

/// A single GitHub repository that issues are migrated into.
#[derive(Clone)]
pub struct GitHubTarget {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubTarget {
    /// Binds an authenticated client to `owner/repo`.
    pub fn new(octocrab: Octocrab, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            octocrab,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Returns the repository in "owner/name" format.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    fn milestones_route(&self) -> String {
        format!("/repos/{}/{}/milestones", self.owner, self.repo)
    }
}

#[async_trait]
impl IssueTracker for GitHubTarget {
    async fn list_labels(&self) -> Result<Vec<String>, TargetError> {
        let page = self
            .octocrab
            .issues(&self.owner, &self.repo)
            .list_labels_for_repo()
            .per_page(RESULTS_PER_PAGE)
            .send()
            .await?;
        let labels = self.octocrab.all_pages(page).await?;

        debug!(repo = %self.full_name(), count = labels.len(), "Fetched existing labels");
        Ok(labels.into_iter().map(|label| label.name).collect())
    }

    async fn create_label(&self, label: &Label) -> Result<(), TargetError> {
        self.octocrab
            .issues(&self.owner, &self.repo)
            .create_label(&label.name, &label.color, &label.description)
            .await?;
        Ok(())
    }

    async fn list_milestones(&self) -> Result<Vec<RemoteMilestone>, TargetError> {
        let query = MilestoneQuery {
            state: "all",
            per_page: RESULTS_PER_PAGE,
        };
        let page: Page<RemoteMilestone> = self
            .octocrab
            .get(self.milestones_route(), Some(&query))
            .await?;
        let milestones = self.octocrab.all_pages(page).await?;

        debug!(repo = %self.full_name(), count = milestones.len(), "Fetched existing milestones");
        Ok(milestones)
    }

    async fn create_milestone(
        &self,
        milestone: &NewMilestone,
    ) -> Result<RemoteMilestone, TargetError> {
        let created: RemoteMilestone = self
            .octocrab
            .post(self.milestones_route(), Some(milestone))
            .await?;
        Ok(created)
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<u64, TargetError> {
        let handler = self.octocrab.issues(&self.owner, &self.repo);
        let mut builder = handler
            .create(&issue.title)
            .body(&issue.body)
            .labels(issue.labels.clone());
        if let Some(milestone) = issue.milestone {
            builder = builder.milestone(milestone);
        }

        let created = builder.send().await?;
        Ok(created.number)
    }

    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<(), TargetError> {
        self.octocrab
            .issues(&self.owner, &self.repo)
            .create_comment(issue_number, body)
            .await?;
        Ok(())
    }

    async fn update_issue_body(&self, issue_number: u64, body: &str) -> Result<(), TargetError> {
        self.octocrab
            .issues(&self.owner, &self.repo)
            .update(issue_number)
            .body(body)
            .send()
            .await?;
        Ok(())
    }
}
