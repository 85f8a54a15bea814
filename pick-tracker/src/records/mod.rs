//! Pull request corpus loading.
//!
//! The corpus is the full set of merged pull requests known for a repository.
//! It is loaded once per run, validated at the boundary, and is read-only
//! afterwards.

mod error;
mod pr;
mod store;

pub use error::RecordError;
pub use pr::{PrRecord, RepositoryOwner};
pub use store::{load_corpus, load_json_corpus, load_sqlite_corpus};

use serde_json::Value;
use std::collections::BTreeMap;

/// All known pull requests, keyed by number.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: BTreeMap<u64, PrRecord>,
}

impl Corpus {
    /// Creates an empty corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a corpus from records.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::DuplicateRecord`] if two records share a number.
    pub fn from_records(
        records: impl IntoIterator<Item = PrRecord>,
    ) -> Result<Self, RecordError> {
        let mut corpus = Self::new();
        for record in records {
            corpus.insert(record)?;
        }
        Ok(corpus)
    }

    /// Adds a record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::DuplicateRecord`] if the number is already present.
    pub fn insert(&mut self, record: PrRecord) -> Result<(), RecordError> {
        if self.records.contains_key(&record.number) {
            return Err(RecordError::DuplicateRecord { pr: record.number });
        }
        self.records.insert(record.number, record);
        Ok(())
    }

    /// Looks up a record by PR number.
    #[must_use]
    pub fn get(&self, number: u64) -> Option<&PrRecord> {
        self.records.get(&number)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the corpus holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all records in ascending PR order.
    pub fn iter(&self) -> impl Iterator<Item = &PrRecord> {
        self.records.values()
    }

    /// Iterates over the records merged into `branch`, in ascending PR order.
    pub fn on_branch<'a, 'b>(
        &'a self,
        branch: &'b str,
    ) -> impl Iterator<Item = &'a PrRecord> + 'b
    where
        'a: 'b,
    {
        self.records
            .values()
            .filter(move |record| record.base_ref_name == branch)
    }
}

/// Validates one raw JSON record.
///
/// `index` is the record's position in its source and is only used to
/// identify records that lack a usable number.
pub(crate) fn parse_record(value: Value, index: usize) -> Result<PrRecord, RecordError> {
    let number = value.get("number").and_then(Value::as_u64);
    serde_json::from_value(value).map_err(|source| match number {
        Some(pr) => RecordError::InvalidRecord { pr, source },
        None => RecordError::MissingNumber { index, source },
    })
}
