//! Runner configuration.

use super::RunnerError;
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration for a migration run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the exported issue snapshot.
    snapshot_path: PathBuf,
    /// Owner of the target repository.
    owner: String,
    /// Name of the target repository.
    repo: String,
    /// GitHub token used for API calls.
    token: String,
    /// API base URL for GitHub Enterprise hosts.
    api_url: Option<Url>,
    /// Path to a custom consolidated comment template.
    comment_template_path: Option<PathBuf>,
    /// Whether to preview the migration without touching the target.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(
        snapshot_path: PathBuf,
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            snapshot_path,
            owner: owner.into(),
            repo: repo.into(),
            token: token.into(),
            api_url: None,
            comment_template_path: None,
            dry_run: false,
        }
    }

    /// Sets a custom API base URL.
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Sets a custom consolidated comment template.
    pub fn with_comment_template_path(mut self, path: PathBuf) -> Self {
        self.comment_template_path = Some(path);
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Checks that every required setting is present.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::MissingSetting`] for an empty path, owner or
    /// repository and [`RunnerError::MissingToken`] for an empty token.
    pub fn validate(&self) -> Result<(), RunnerError> {
        if self.snapshot_path.as_os_str().is_empty() {
            return Err(RunnerError::MissingSetting { name: "file" });
        }
        if self.owner.trim().is_empty() {
            return Err(RunnerError::MissingSetting { name: "owner" });
        }
        if self.repo.trim().is_empty() {
            return Err(RunnerError::MissingSetting { name: "repo" });
        }
        if self.token.trim().is_empty() {
            return Err(RunnerError::MissingToken);
        }
        Ok(())
    }

    /// Returns the snapshot path.
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Returns the target repository owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the target repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the custom API base URL, if any.
    pub fn api_url(&self) -> Option<&Url> {
        self.api_url.as_ref()
    }

    /// Returns the custom comment template path, if any.
    pub fn comment_template_path(&self) -> Option<&Path> {
        self.comment_template_path.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
