//! Pull request record types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Owner of the repository that holds a pull request's head branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    /// Account login (e.g. "lowRISC").
    pub login: String,
}

/// A merged pull request, as exported by `gh pr list --json`.
///
/// Field names follow the GitHub CLI's camelCase JSON. Any extra fields
/// (author, assignees, labels, url, ...) are kept untouched in
/// [`metadata`](Self::metadata).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrRecord {
    /// Pull request number.
    pub number: u64,

    /// Pull request title.
    pub title: String,

    /// Pull request description. May be empty.
    pub body: String,

    /// Branch the pull request was merged into.
    pub base_ref_name: String,

    /// Branch the pull request was opened from.
    pub head_ref_name: String,

    /// Owner of the head repository.
    pub head_repository_owner: RepositoryOwner,

    /// Merge timestamp, as reported by the hosting service.
    pub merged_at: String,

    /// Opaque metadata passed through unmodified.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl PrRecord {
    /// Creates a record with empty text fields, merged into `base_ref_name`.
    #[must_use]
    pub fn new(number: u64, base_ref_name: impl Into<String>) -> Self {
        Self {
            number,
            title: String::new(),
            body: String::new(),
            base_ref_name: base_ref_name.into(),
            head_ref_name: String::new(),
            head_repository_owner: RepositoryOwner {
                login: String::new(),
            },
            merged_at: String::new(),
            metadata: Map::new(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the head repository owner and head branch.
    #[must_use]
    pub fn with_head(mut self, owner: impl Into<String>, head_ref_name: impl Into<String>) -> Self {
        self.head_repository_owner.login = owner.into();
        self.head_ref_name = head_ref_name.into();
        self
    }

    /// Sets the merge timestamp.
    #[must_use]
    pub fn with_merged_at(mut self, merged_at: impl Into<String>) -> Self {
        self.merged_at = merged_at.into();
        self
    }

    /// Returns `owner:head-branch`, the way the author column shows it.
    #[must_use]
    pub fn head_label(&self) -> String {
        format!("{}:{}", self.head_repository_owner.login, self.head_ref_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_gh_output() {
        let record: PrRecord = serde_json::from_value(json!({
            "number": 24834,
            "title": "[rom] Fix boot",
            "body": "Cherry-pick of #24345",
            "baseRefName": "earlgrey_1.0.0",
            "headRefName": "cherry-pick-24345",
            "headRepositoryOwner": { "id": "MDQ6", "login": "lowRISC" },
            "mergedAt": "2024-10-01T12:00:00Z",
            "author": { "login": "someone" },
            "labels": []
        }))
        .unwrap();

        assert_eq!(record.number, 24834);
        assert_eq!(record.base_ref_name, "earlgrey_1.0.0");
        assert_eq!(record.head_label(), "lowRISC:cherry-pick-24345");
        assert_eq!(record.metadata["author"]["login"], "someone");
        assert!(record.metadata.contains_key("labels"));
    }

    #[test]
    fn rejects_missing_base_branch() {
        let result = serde_json::from_value::<PrRecord>(json!({
            "number": 1,
            "title": "t",
            "body": "",
            "headRefName": "h",
            "headRepositoryOwner": { "login": "o" },
            "mergedAt": "2024-01-01T00:00:00Z"
        }));

        assert!(result.is_err());
    }
}
