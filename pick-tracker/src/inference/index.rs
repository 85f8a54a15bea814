//! Pick classifications for a whole corpus.

use super::{infer_pick, PickSource};
use crate::records::Corpus;
use std::collections::BTreeMap;

/// The inferred [`PickSource`] of every record in a corpus.
///
/// Also indexes picks by destination: for each base branch, which pull
/// requests claim to pick a given source PR.
#[derive(Debug, Clone, Default)]
pub struct PickIndex {
    picks: BTreeMap<u64, PickSource>,
    by_destination: BTreeMap<String, BTreeMap<u64, Vec<u64>>>,
}

impl PickIndex {
    /// Classifies every record in `corpus`.
    ///
    /// This is a pure function of the corpus: building it twice yields the
    /// same index.
    #[must_use]
    pub fn build(corpus: &Corpus) -> Self {
        let mut index = Self::default();

        for record in corpus.iter() {
            let pick = infer_pick(record);
            index.picks.insert(record.number, pick);

            if let Some(source) = pick.source() {
                index
                    .by_destination
                    .entry(record.base_ref_name.clone())
                    .or_default()
                    .entry(source)
                    .or_default()
                    .push(record.number);
            }
        }

        index
    }

    /// Returns the classification of `number`.
    ///
    /// Numbers outside the corpus are reported as [`PickSource::NotAPick`].
    #[must_use]
    pub fn pick(&self, number: u64) -> PickSource {
        self.picks.get(&number).copied().unwrap_or_default()
    }

    /// Returns the PRs merged into `branch` that pick `source`, ascending.
    #[must_use]
    pub fn picks_onto(&self, source: u64, branch: &str) -> &[u64] {
        self.by_destination
            .get(branch)
            .and_then(|sources| sources.get(&source))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates over `(number, classification)` pairs in ascending PR order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, PickSource)> + '_ {
        self.picks.iter().map(|(number, pick)| (*number, *pick))
    }

    /// Number of classified records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Returns true if nothing was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}
