//! Spreadsheet renderer.
//!
//! Produces rows ready for a spreadsheet API: cell values (links become
//! `HYPERLINK` formulas) plus an optional background color per row, with
//! color channels in the 0.0-1.0 range.

use super::{RenderError, Renderer};
use crate::report::{Cell, RowStatus};
use serde::Serialize;

/// A background color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SheetColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl SheetColor {
    /// Converts 8-bit channels.
    #[must_use]
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: f32::from(red) / 255.0,
            green: f32::from(green) / 255.0,
            blue: f32::from(blue) / 255.0,
        }
    }

    /// Background for a row status, `None` for unmarked rows.
    #[must_use]
    pub fn for_status(status: RowStatus) -> Option<Self> {
        match status {
            RowStatus::Unmarked => None,
            RowStatus::Resolved => Some(Self::from_rgb(0x93, 0xc4, 0x7d)),
            RowStatus::NotApplicable => Some(Self::from_rgb(0xc0, 0xc4, 0xc9)),
            RowStatus::NeedsAttention => Some(Self::from_rgb(0xff, 0xff, 0x00)),
        }
    }
}

/// One spreadsheet row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetRow {
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<SheetColor>,
}

/// The rendered sheet: a header row, one row per PR, then the summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sheet {
    pub rows: Vec<SheetRow>,
    pub summary: Vec<String>,
}

/// Renders the report as spreadsheet rows.
#[derive(Debug, Default)]
pub struct SheetRenderer {
    sheet: Sheet,
}

impl SheetRenderer {
    /// Creates a renderer with an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Leading characters a spreadsheet evaluates as a formula.
const FORMULA_PREFIXES: [char; 4] = ['=', '+', '-', '@'];

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

impl Renderer for SheetRenderer {
    type Cell = String;
    type Output = Sheet;

    fn render_header(&mut self, headers: &[String]) {
        self.sheet.rows.push(SheetRow {
            values: headers.to_vec(),
            background: None,
        });
    }

    fn render_cell(&self, cell: &Cell) -> String {
        match cell {
            Cell::Link { url, label } => format!("=HYPERLINK({},{})", quote(url), quote(label)),
            Cell::Text { text, note } => {
                let value = match note {
                    Some(note) => format!("{text} (NOTE: {note})"),
                    None => text.clone(),
                };
                // Keep text that looks like a formula literal.
                if value.starts_with(FORMULA_PREFIXES) {
                    format!("'{value}")
                } else {
                    value
                }
            }
        }
    }

    fn render_row(&mut self, cells: &[Cell], status: RowStatus) {
        let values = cells.iter().map(|cell| self.render_cell(cell)).collect();
        self.sheet.rows.push(SheetRow {
            values,
            background: SheetColor::for_status(status),
        });
    }

    fn render_summary(&mut self, lines: &[String]) {
        self.sheet.summary = lines.to_vec();
    }

    fn finish(self) -> Result<Sheet, RenderError> {
        Ok(self.sheet)
    }
}
