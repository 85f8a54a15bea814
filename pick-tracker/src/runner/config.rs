//! Runner configuration.

use crate::reconcile::DEFAULT_PRIMARY_BRANCH;
use crate::report::DEFAULT_REPOSITORY_URL;
use std::path::{Path, PathBuf};

/// Configuration for one tracking run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the PR corpus (JSON export or SQLite store).
    corpus_path: PathBuf,
    /// Branch to report on.
    branch: String,
    /// Optional TOML override table.
    overrides_path: Option<PathBuf>,
    /// Branch that pick status is measured against.
    primary_branch: String,
    /// Repository URL used to build PR links.
    repository_url: String,
}

impl RunnerConfig {
    /// Creates a configuration with the default primary branch and
    /// repository, and no overrides.
    pub fn new(corpus_path: PathBuf, branch: impl Into<String>) -> Self {
        Self {
            corpus_path,
            branch: branch.into(),
            overrides_path: None,
            primary_branch: DEFAULT_PRIMARY_BRANCH.to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
        }
    }

    /// Sets the override table to apply.
    pub fn with_overrides_path(mut self, overrides_path: PathBuf) -> Self {
        self.overrides_path = Some(overrides_path);
        self
    }

    /// Sets the primary branch.
    pub fn with_primary_branch(mut self, primary_branch: impl Into<String>) -> Self {
        self.primary_branch = primary_branch.into();
        self
    }

    /// Sets the repository URL.
    pub fn with_repository_url(mut self, repository_url: impl Into<String>) -> Self {
        self.repository_url = repository_url.into();
        self
    }

    /// Returns the corpus path.
    pub fn corpus_path(&self) -> &Path {
        &self.corpus_path
    }

    /// Returns the branch to report on.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Returns the override table path, if one was configured.
    pub fn overrides_path(&self) -> Option<&Path> {
        self.overrides_path.as_deref()
    }

    /// Returns the primary branch.
    pub fn primary_branch(&self) -> &str {
        &self.primary_branch
    }

    /// Returns the repository URL.
    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }
}
