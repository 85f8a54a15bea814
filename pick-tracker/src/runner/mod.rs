//! Orchestrates a tracking run: load, infer, reconcile, assemble.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::inference::index_picks;
use crate::overrides::OverrideTable;
use crate::reconcile::reconcile;
use crate::records::load_corpus;
use crate::render::{render_report, ReportFormat};
use crate::report::{assemble, Report, ReportConfig};
use std::path::Path;
use tracing::{info, warn};

/// Runs the pipeline described by a [`RunnerConfig`].
pub struct Runner {
    config: RunnerConfig,
    report_config: ReportConfig,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Report`] if the repository URL is invalid.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let report_config = ReportConfig::new(config.repository_url())?;
        Ok(Self {
            config,
            report_config,
        })
    }

    /// Executes the full pipeline and returns the assembled report.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the corpus or override table cannot be
    /// loaded.
    pub fn run(&self) -> Result<Report, RunnerError> {
        let corpus = load_corpus(self.config.corpus_path())?;
        if corpus.is_empty() {
            warn!("Corpus is empty");
        }

        let overrides = match self.config.overrides_path() {
            Some(path) => OverrideTable::load(path)?,
            None => OverrideTable::new(),
        };

        let index = index_picks(&corpus);
        let table = reconcile(
            &corpus,
            &index,
            self.config.branch(),
            self.config.primary_branch(),
        );
        let report = assemble(&table, &overrides, &self.report_config);

        info!(
            branch = self.config.branch(),
            rows = report.rows.len(),
            picked = report.tally.picked,
            unpicked = report.tally.unpicked,
            "Report assembled"
        );
        Ok(report)
    }

    /// Executes the pipeline and renders the report in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the run or the rendering fails.
    pub fn run_and_render(&self, format: ReportFormat) -> Result<String, RunnerError> {
        let report = self.run()?;
        Ok(render_report(&report, format)?)
    }
}

/// Writes a rendered report to `path`.
///
/// # Errors
///
/// Returns [`RunnerError::Output`] if the file cannot be written.
pub fn write_report(content: &str, path: &Path) -> Result<(), RunnerError> {
    std::fs::write(path, content).map_err(|e| RunnerError::Output {
        path: path.display().to_string(),
        source: e,
    })?;
    info!(path = %path.display(), bytes = content.len(), "Wrote report");
    Ok(())
}
