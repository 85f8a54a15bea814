//! Backend-agnostic propagation report.
//!
//! Turns a reconciled branch into a table of typed cells with one status per
//! row and a two-line summary. Nothing here knows about HTML or spreadsheets.

mod cell;
mod config;
mod error;
mod row;

pub use cell::Cell;
pub use config::{ReportConfig, DEFAULT_REPOSITORY_URL};
pub use error::ReportError;
pub use row::{Row, RowStatus};

use crate::overrides::OverrideTable;
use crate::reconcile::{BranchTable, ReconciledPr, Resolution, NOT_APPLICABLE, UNKNOWN_BRANCH};
use serde::Serialize;
use tracing::debug;

/// Column labels, in order.
pub const HEADERS: [&str; 6] = ["PR", "To Master", "From", "Title", "Merged", "Author"];

/// Counters behind the summary lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Rows whose change already exists on the primary branch.
    pub picked: usize,

    /// Rows that still need a cherry-pick.
    pub unpicked: usize,

    /// All rows, including ones counted as neither.
    pub total: usize,
}

impl Tally {
    /// Renders the summary lines.
    #[must_use]
    pub fn lines(&self, primary_branch: &str) -> Vec<String> {
        vec![
            format!(
                "{} of {} already exist on {}",
                self.picked, self.total, primary_branch
            ),
            format!("{} of {} need cherry-picks", self.unpicked, self.total),
        ]
    }
}

/// The assembled report for one branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Branch the report covers.
    pub branch: String,

    /// Column labels.
    pub headers: Vec<String>,

    /// Rows in ascending PR order.
    pub rows: Vec<Row>,

    /// Summary lines.
    pub summary: Vec<String>,

    /// Counters the summary was built from.
    pub tally: Tally,
}

/// Builds the report for a reconciled branch.
///
/// Overrides are applied first, so status and counters reflect the corrected
/// values. Row status is decided in this order:
/// 1. `from` is `"N/A"`: [`RowStatus::NotApplicable`], counted as neither;
/// 2. a primary-branch PR is known, or `from` is the primary branch:
///    [`RowStatus::Resolved`], counted as picked;
/// 3. otherwise [`RowStatus::Unmarked`], counted as unpicked.
///
/// A non-empty note then turns the row into [`RowStatus::NeedsAttention`]
/// without changing how it was counted.
#[must_use]
pub fn assemble(table: &BranchTable<'_>, overrides: &OverrideTable, config: &ReportConfig) -> Report {
    let primary = table.primary_branch();
    let mut tally = Tally {
        total: table.len(),
        ..Tally::default()
    };

    let rows = table
        .iter()
        .map(|reconciled| {
            let resolution = overrides.apply(reconciled.number(), reconciled.resolution.clone());
            let status = classify(&resolution, primary, &mut tally);
            debug!(pr = reconciled.number(), status = status.as_str(), "Assembled row");
            Row {
                number: reconciled.number(),
                status,
                cells: build_cells(reconciled, &resolution, config),
            }
        })
        .collect();

    Report {
        branch: table.branch().to_string(),
        headers: HEADERS.iter().map(ToString::to_string).collect(),
        rows,
        summary: tally.lines(primary),
        tally,
    }
}

fn classify(resolution: &Resolution, primary: &str, tally: &mut Tally) -> RowStatus {
    let status = if resolution.is_from(NOT_APPLICABLE) {
        RowStatus::NotApplicable
    } else if resolution.to_master.is_some() || resolution.is_from(primary) {
        tally.picked += 1;
        RowStatus::Resolved
    } else {
        tally.unpicked += 1;
        RowStatus::Unmarked
    };

    if resolution.note().is_some() {
        RowStatus::NeedsAttention
    } else {
        status
    }
}

fn build_cells(
    reconciled: &ReconciledPr<'_>,
    resolution: &Resolution,
    config: &ReportConfig,
) -> Vec<Cell> {
    let record = reconciled.record;
    let pr_link = |number: u64, label: String| Cell::link(config.pull_url(number), label);

    let to_master = resolution
        .to_master
        .map_or_else(Cell::empty, |number| pr_link(number, number.to_string()));

    let from = resolution.pick.source().map_or_else(Cell::empty, |source| {
        let branch = resolution.from.as_deref().unwrap_or(UNKNOWN_BRANCH);
        pr_link(source, format!("{source} on {branch}"))
    });

    vec![
        pr_link(record.number, record.number.to_string()),
        to_master,
        from,
        Cell::annotated(record.title.clone(), resolution.note().map(str::to_string)),
        Cell::text(record.merged_at.clone()),
        Cell::text(record.head_label()),
    ]
}
