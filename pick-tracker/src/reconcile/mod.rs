//! Branch reconciliation.
//!
//! For every PR merged into a target branch, works out which branch its pick
//! source lives on and whether an equivalent change exists on the primary
//! branch, either because the source itself came from there or because the
//! change was picked there separately.

mod lookup;
mod resolution;

pub use lookup::find_pick;
pub use resolution::{ReconciledPr, Resolution, NOT_APPLICABLE, UNKNOWN_BRANCH};

use crate::inference::{PickIndex, PickSource};
use crate::records::Corpus;
use std::collections::BTreeMap;
use tracing::{debug, info, info_span};

/// Default name of the primary development branch.
pub const DEFAULT_PRIMARY_BRANCH: &str = "master";

/// The reconciled PRs of one branch, in ascending PR order.
#[derive(Debug, Clone)]
pub struct BranchTable<'a> {
    branch: String,
    primary_branch: String,
    rows: BTreeMap<u64, ReconciledPr<'a>>,
}

impl<'a> BranchTable<'a> {
    /// The branch that was reconciled.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// The primary branch the table was reconciled against.
    #[must_use]
    pub fn primary_branch(&self) -> &str {
        &self.primary_branch
    }

    /// Looks up a reconciled PR.
    #[must_use]
    pub fn get(&self, number: u64) -> Option<&ReconciledPr<'a>> {
        self.rows.get(&number)
    }

    /// Iterates over the reconciled PRs in ascending PR order.
    pub fn iter(&self) -> impl Iterator<Item = &ReconciledPr<'a>> {
        self.rows.values()
    }

    /// Number of PRs on the branch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no PR was merged into the branch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reconciles every PR merged into `branch`.
///
/// An unknown branch is not an error; it yields an empty table.
#[must_use]
pub fn reconcile<'a>(
    corpus: &'a Corpus,
    index: &PickIndex,
    branch: &str,
    primary_branch: &str,
) -> BranchTable<'a> {
    let span = info_span!("reconcile", branch, primary = primary_branch);
    let _guard = span.enter();

    let rows: BTreeMap<u64, ReconciledPr<'a>> = corpus
        .on_branch(branch)
        .map(|record| {
            let resolution = resolve(corpus, index, record.number, primary_branch);
            debug!(
                pr = record.number,
                pick = ?resolution.pick,
                from = ?resolution.from,
                to_master = ?resolution.to_master,
                "Reconciled"
            );
            (record.number, ReconciledPr { record, resolution })
        })
        .collect();

    if rows.is_empty() {
        info!("No pull requests were merged into this branch");
    } else {
        info!(count = rows.len(), "Reconciled pull requests");
    }

    BranchTable {
        branch: branch.to_string(),
        primary_branch: primary_branch.to_string(),
        rows,
    }
}

/// Resolves `from` and `to_master` for a single PR.
fn resolve(corpus: &Corpus, index: &PickIndex, number: u64, primary: &str) -> Resolution {
    let pick = index.pick(number);

    let (from, to_master) = match pick {
        PickSource::Pr(source) => match corpus.get(source) {
            // Came straight from the primary branch; nothing else to find.
            Some(src) if src.base_ref_name == primary => (Some(src.base_ref_name.clone()), None),
            Some(src) => {
                // Either the source was picked to the primary branch on its
                // own, or this PR was.
                let to_master = find_pick(index, source, primary)
                    .or_else(|| find_pick(index, number, primary));
                (Some(src.base_ref_name.clone()), to_master)
            }
            None => {
                debug!(pr = number, source, "Pick source is not in the corpus");
                (
                    Some(UNKNOWN_BRANCH.to_string()),
                    find_pick(index, number, primary),
                )
            }
        },
        PickSource::Unknown | PickSource::NotAPick => (None, find_pick(index, number, primary)),
    };

    Resolution {
        pick,
        from,
        to_master,
        notes: None,
    }
}
