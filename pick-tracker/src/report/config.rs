//! Report configuration.

use super::ReportError;
use url::Url;

/// Repository whose pull requests are linked by default.
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/lowRISC/opentitan";

/// Settings used when turning reconciled PRs into report rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Web URL of the repository, e.g. `https://github.com/owner/repo`.
    repository_url: Url,
}

impl ReportConfig {
    /// Creates a configuration linking PRs under `repository_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidRepositoryUrl`] if the URL does not parse
    /// or cannot have path segments appended.
    pub fn new(repository_url: &str) -> Result<Self, ReportError> {
        let url = Url::parse(repository_url).map_err(|e| ReportError::InvalidRepositoryUrl {
            url: repository_url.to_string(),
            message: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ReportError::InvalidRepositoryUrl {
                url: repository_url.to_string(),
                message: "URL cannot be used as a base for PR links".to_string(),
            });
        }

        Ok(Self {
            repository_url: url,
        })
    }

    /// Returns the repository URL.
    #[must_use]
    pub fn repository_url(&self) -> &Url {
        &self.repository_url
    }

    /// Returns the web URL of pull request `number`.
    #[must_use]
    pub fn pull_url(&self, number: u64) -> String {
        let mut url = self.repository_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("pull")
                .push(&number.to_string());
        }
        url.into()
    }
}
