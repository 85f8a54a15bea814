//! Reconciled pull request types.

use crate::inference::PickSource;
use crate::records::PrRecord;

/// Branch name recorded when a pick's source PR is not in the corpus.
pub const UNKNOWN_BRANCH: &str = "unknown";

/// Override value for `from` meaning "intentionally not tracked".
pub const NOT_APPLICABLE: &str = "N/A";

/// The per-PR fields the report is built from.
///
/// Produced by reconciliation and optionally replaced, field by field, by a
/// manual override.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Where the PR was picked from.
    pub pick: PickSource,

    /// Base branch of the pick source, [`UNKNOWN_BRANCH`], or a manual value.
    pub from: Option<String>,

    /// The corresponding PR on the primary branch, if one was found.
    pub to_master: Option<u64>,

    /// Free-text note. Only manual overrides set this.
    pub notes: Option<String>,
}

impl Resolution {
    /// Returns true if `from` equals `branch`.
    #[must_use]
    pub fn is_from(&self, branch: &str) -> bool {
        self.from.as_deref() == Some(branch)
    }

    /// Returns the note, if it is non-empty.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.notes.as_deref().filter(|notes| !notes.is_empty())
    }
}

/// A PR on the target branch together with its resolution.
#[derive(Debug, Clone)]
pub struct ReconciledPr<'a> {
    /// The underlying record.
    pub record: &'a PrRecord,

    /// Reconciled fields.
    pub resolution: Resolution,
}

impl ReconciledPr<'_> {
    /// Pull request number.
    #[must_use]
    pub fn number(&self) -> u64 {
        self.record.number
    }
}
