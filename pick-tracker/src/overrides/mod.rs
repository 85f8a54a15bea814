//! Manual override table.
//!
//! Text-based inference cannot resolve every naming convention or gap in the
//! data. Release managers record corrections in a versioned TOML file, one
//! table per PR number:
//!
//! ```toml
//! [24834]
//! pick = 24345
//! from = "master"
//!
//! [24872]
//! to-master = 24838
//!
//! [25195]
//! notes = "Investigate"
//! ```
//!
//! The table is loaded once and passed to the report assembler explicitly.

mod entry;
mod error;

pub use entry::{Cleared, OverrideEntry, ToMasterOverride};
pub use error::OverrideError;

use crate::inference::PickSource;
use crate::reconcile::Resolution;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Curated corrections keyed by PR number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: BTreeMap<u64, OverrideEntry>,
}

impl OverrideTable {
    /// Creates an empty table, which overrides nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `number`.
    #[must_use]
    pub fn with_entry(mut self, number: u64, entry: OverrideEntry) -> Self {
        self.entries.insert(number, entry);
        self
    }

    /// Loads an override table from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`OverrideError`] if the file cannot be read or parsed, or if
    /// an entry fails validation.
    pub fn load(path: &Path) -> Result<Self, OverrideError> {
        info!(path = %path.display(), "Loading override table");

        let content = std::fs::read_to_string(path).map_err(|e| OverrideError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let table = Self::parse(&content, &path.display().to_string())?;
        info!(count = table.len(), "Loaded overrides");
        Ok(table)
    }

    /// Parses an override table from TOML text.
    ///
    /// `origin` names the source of the text in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`OverrideError`] if the text is not valid TOML, a key is not a
    /// positive PR number, or an entry sets no field.
    pub fn parse(content: &str, origin: &str) -> Result<Self, OverrideError> {
        let raw: BTreeMap<String, OverrideEntry> =
            toml::from_str(content).map_err(|e| OverrideError::Toml {
                path: origin.to_string(),
                source: e,
            })?;

        let mut entries = BTreeMap::new();
        for (key, entry) in raw {
            let number = match key.trim().parse::<u64>() {
                Ok(number) if number > 0 => number,
                _ => {
                    return Err(OverrideError::Validation {
                        path: origin.to_string(),
                        message: format!("'{key}' is not a PR number"),
                    })
                }
            };

            if entry.is_empty() {
                return Err(OverrideError::Validation {
                    path: origin.to_string(),
                    message: format!("override for PR #{number} sets no fields"),
                });
            }

            if entries.insert(number, entry).is_some() {
                return Err(OverrideError::Validation {
                    path: origin.to_string(),
                    message: format!("PR #{number} is listed more than once"),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Returns the entry for `number`, if any.
    #[must_use]
    pub fn get(&self, number: u64) -> Option<&OverrideEntry> {
        self.entries.get(&number)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies the entry for `number` to a reconciled resolution.
    ///
    /// Fields present in the entry replace the reconciled ones; the rest are
    /// returned unchanged. PRs without an entry pass through untouched.
    #[must_use]
    pub fn apply(&self, number: u64, mut resolution: Resolution) -> Resolution {
        let Some(entry) = self.entries.get(&number) else {
            return resolution;
        };

        debug!(pr = number, ?entry, "Applying manual override");

        if let Some(pick) = entry.pick {
            resolution.pick = PickSource::from_number(pick);
        }
        if let Some(from) = &entry.from {
            resolution.from = Some(from.clone());
        }
        if let Some(to_master) = entry.to_master {
            resolution.to_master = to_master.value();
        }
        if let Some(notes) = &entry.notes {
            resolution.notes = Some(notes.clone());
        }

        resolution
    }
}
