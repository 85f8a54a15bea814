//! Pick classification.

/// Where a pull request was cherry-picked from, as inferred from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickSource {
    /// The pull request is not a pick.
    #[default]
    NotAPick,

    /// The pull request is a pick, but its source could not be resolved.
    Unknown,

    /// The pull request picks the given source pull request.
    Pr(u64),
}

impl PickSource {
    /// Converts a referenced PR number; `0` is the "unknown source" marker.
    #[must_use]
    pub fn from_number(number: u64) -> Self {
        if number == 0 {
            Self::Unknown
        } else {
            Self::Pr(number)
        }
    }

    /// Returns true for anything other than [`PickSource::NotAPick`].
    #[must_use]
    pub fn is_pick(&self) -> bool {
        !matches!(self, Self::NotAPick)
    }

    /// Returns the source PR number, if known.
    #[must_use]
    pub fn source(&self) -> Option<u64> {
        match self {
            Self::Pr(number) => Some(*number),
            _ => None,
        }
    }
}
