//! Report rows and their status.

use super::Cell;
use serde::Serialize;

/// Classification of a report row.
///
/// The report only carries the symbolic status; colors are up to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowStatus {
    /// No special highlighting: the change still needs a cherry-pick.
    #[default]
    #[serde(rename = "none")]
    Unmarked,

    /// The change already exists on the primary branch.
    Resolved,

    /// The change is intentionally not tracked.
    NotApplicable,

    /// A note needs a human to look at the row.
    NeedsAttention,
}

impl RowStatus {
    /// Returns the status tag.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unmarked => "none",
            Self::Resolved => "resolved",
            Self::NotApplicable => "not-applicable",
            Self::NeedsAttention => "needs-attention",
        }
    }
}

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// The PR the row describes.
    pub number: u64,

    /// Row status.
    pub status: RowStatus,

    /// Cells, aligned with the report headers.
    pub cells: Vec<Cell>,
}
