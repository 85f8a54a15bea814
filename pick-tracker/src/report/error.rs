//! Report error types.

use thiserror::Error;

/// Errors that can occur while configuring a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The repository URL cannot be used to build pull request links.
    #[error("Invalid repository URL '{url}': {message}")]
    InvalidRepositoryUrl { url: String, message: String },
}
