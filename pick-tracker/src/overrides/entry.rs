//! Override entry deserialization.

use serde::Deserialize;

/// Manual replacement for a reconciled `to_master` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ToMasterOverride {
    /// The PR that carries the change on the primary branch.
    Pr(u64),

    /// Explicitly no corresponding PR, written as `"none"`.
    Cleared(Cleared),
}

/// The `"none"` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cleared {
    None,
}

impl ToMasterOverride {
    /// The replacement value.
    #[must_use]
    pub fn value(self) -> Option<u64> {
        match self {
            Self::Pr(number) => Some(number),
            Self::Cleared(_) => None,
        }
    }
}

/// One curated correction, as written in the override file.
///
/// Every field is optional; only the fields present replace reconciled
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct OverrideEntry {
    /// Source PR of the pick. `0` means "a pick of unknown source".
    pub pick: Option<u64>,

    /// Branch the pick came from, or `"N/A"` for untracked changes.
    pub from: Option<String>,

    /// Corresponding PR on the primary branch.
    #[serde(alias = "to_master")]
    pub to_master: Option<ToMasterOverride>,

    /// Free-text note shown next to the title.
    pub notes: Option<String>,
}

impl OverrideEntry {
    /// Returns true if the entry changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pick.is_none() && self.from.is_none() && self.to_master.is_none() && self.notes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_fields() {
        let entry: OverrideEntry = toml::from_str(
            r#"
pick = 24345
from = "master"
to-master = 24838
notes = "Investigate"
"#,
        )
        .unwrap();

        assert_eq!(entry.pick, Some(24345));
        assert_eq!(entry.from.as_deref(), Some("master"));
        assert_eq!(entry.to_master, Some(ToMasterOverride::Pr(24838)));
        assert_eq!(entry.notes.as_deref(), Some("Investigate"));
    }

    #[test]
    fn accepts_snake_case_to_master() {
        let entry: OverrideEntry = toml::from_str("to_master = 7").unwrap();
        assert_eq!(entry.to_master.and_then(ToMasterOverride::value), Some(7));
    }

    #[test]
    fn none_clears_to_master() {
        let entry: OverrideEntry = toml::from_str(r#"to-master = "none""#).unwrap();

        assert_eq!(
            entry.to_master,
            Some(ToMasterOverride::Cleared(Cleared::None))
        );
        assert_eq!(entry.to_master.and_then(ToMasterOverride::value), None);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = toml::from_str::<OverrideEntry>("form = \"master\"");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_other_strings_for_to_master() {
        let result = toml::from_str::<OverrideEntry>(r#"to-master = "later""#);
        assert!(result.is_err());
    }
}
