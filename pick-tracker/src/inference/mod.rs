//! Cherry-pick relationship inference.
//!
//! Pull requests don't carry structured pick metadata, so the relationship is
//! recovered from the conventions people use when writing titles and
//! descriptions ("Cherry-pick of #123", "Backport https://.../pull/123").

mod index;
mod pick;

pub use index::PickIndex;
pub use pick::PickSource;

use crate::records::{Corpus, PrRecord};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{info, warn};

/// "cherry-pick of #N", "cherry pick from https://.../pull/N", ...
static PICK_OF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)cherry[ -]?pick (?:of |from )(?:#|https.*pull/)(\d+)").unwrap()
});

/// "backport #N", "backport of https://.../pull/N", ...
static BACKPORT_OF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)backport(?: of)? (?:#|https.*pull/)(\d+)").unwrap()
});

/// Any mention of a cherry-pick, with or without a reference.
static MENTIONS_PICK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)cherry[ -]?pick").unwrap());

/// Infers where `record` was picked from.
///
/// Rules are tried in order and the first match wins:
/// 1. a "cherry-pick of/from" reference in the body;
/// 2. the same in the title;
/// 3. a "backport (of)" reference in the title;
/// 4. the same in the body;
/// 5. a bare "cherry pick" mention in the body, which yields
///    [`PickSource::Unknown`] even when the mention is incidental.
///
/// Anything else is [`PickSource::NotAPick`].
#[must_use]
pub fn infer_pick(record: &PrRecord) -> PickSource {
    let rules: [(&Regex, &str); 4] = [
        (&*PICK_OF, record.body.as_str()),
        (&*PICK_OF, record.title.as_str()),
        (&*BACKPORT_OF, record.title.as_str()),
        (&*BACKPORT_OF, record.body.as_str()),
    ];

    for (pattern, text) in rules {
        if let Some(pick) = referenced_pick(pattern, text) {
            return pick;
        }
    }

    if MENTIONS_PICK.is_match(&record.body) {
        PickSource::Unknown
    } else {
        PickSource::NotAPick
    }
}

/// Classifies every record in `corpus`.
#[must_use]
pub fn index_picks(corpus: &Corpus) -> PickIndex {
    let index = PickIndex::build(corpus);
    let picks = index.iter().filter(|(_, pick)| pick.is_pick()).count();
    info!(records = index.len(), picks, "Indexed picks");
    index
}

/// Applies one rule. A match whose number does not fit still wins, as a pick
/// of unknown source.
fn referenced_pick(pattern: &Regex, text: &str) -> Option<PickSource> {
    let number = pattern.captures(text)?.get(1)?.as_str();
    match number.parse() {
        Ok(number) => Some(PickSource::from_number(number)),
        Err(_) => {
            warn!(reference = number, "Pick reference is not a valid PR number");
            Some(PickSource::Unknown)
        }
    }
}
