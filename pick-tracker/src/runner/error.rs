//! Runner error types.

/// Errors that can occur during a tracking run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Corpus loading errors.
    #[error(transparent)]
    Records(#[from] crate::records::RecordError),

    /// Override table errors.
    #[error(transparent)]
    Overrides(#[from] crate::overrides::OverrideError),

    /// Report configuration errors.
    #[error(transparent)]
    Report(#[from] crate::report::ReportError),

    /// Rendering errors.
    #[error(transparent)]
    Render(#[from] crate::render::RenderError),

    /// Failed to write the rendered report.
    #[error("Failed to write report to {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
