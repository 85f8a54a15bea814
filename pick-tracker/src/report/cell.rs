//! Report cells.

use serde::Serialize;

/// One cell of the report.
///
/// Cells hold raw, unescaped text. Renderers decide how each kind is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    /// Plain text, optionally followed by an emphasized note.
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },

    /// A hyperlink.
    Link { url: String, label: String },
}

impl Cell {
    /// Creates a plain text cell.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            note: None,
        }
    }

    /// Creates a text cell with an optional note.
    #[must_use]
    pub fn annotated(text: impl Into<String>, note: Option<String>) -> Self {
        Self::Text {
            text: text.into(),
            note,
        }
    }

    /// Creates an empty text cell.
    #[must_use]
    pub fn empty() -> Self {
        Self::text(String::new())
    }

    /// Creates a hyperlink cell.
    #[must_use]
    pub fn link(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Link {
            url: url.into(),
            label: label.into(),
        }
    }

    /// Returns the visible text of the cell, without any note.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Text { text, .. } => text,
            Self::Link { label, .. } => label,
        }
    }

    /// Returns true for a text cell with no text and no note.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text { text, note: None } if text.is_empty())
    }
}
