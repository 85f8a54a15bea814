//! HTML table renderer.

use super::{RenderError, Renderer};
use crate::report::{Cell, RowStatus};
use handlebars::{html_escape, Handlebars};
use serde::Serialize;

const RESOLVED_COLOR: &str = "#93c47d";
const NOT_APPLICABLE_COLOR: &str = "#c0c4c9";
const NEEDS_ATTENTION_COLOR: &str = "#ffff00";

/// Document skeleton. Cells are pre-escaped; headers and summary lines are
/// escaped by the registry.
const DOCUMENT_TEMPLATE: &str = r#"<table border="1">
<tr>
{{#each headers}}<th>{{this}}</th>
{{/each}}</tr>
{{#each rows}}<tr{{#if bgcolor}} bgcolor="{{bgcolor}}"{{/if}}>
{{#each cells}}<td>{{{this}}}</td>
{{/each}}</tr>
{{/each}}</table>
{{#each summary}}<p>{{this}}</p>
{{/each}}"#;

#[derive(Serialize)]
struct HtmlRow {
    bgcolor: &'static str,
    cells: Vec<String>,
}

#[derive(Serialize)]
struct Document<'a> {
    headers: &'a [String],
    rows: &'a [HtmlRow],
    summary: &'a [String],
}

/// Renders the report as an HTML table followed by one paragraph per
/// summary line.
pub struct HtmlRenderer {
    handlebars: Handlebars<'static>,
    headers: Vec<String>,
    rows: Vec<HtmlRow>,
    summary: Vec<String>,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    /// Creates a renderer with an empty document.
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(html_escape);
        handlebars.set_strict_mode(true);

        Self {
            handlebars,
            headers: Vec::new(),
            rows: Vec::new(),
            summary: Vec::new(),
        }
    }
}

/// Background color for a row, empty when the row is not highlighted.
fn row_color(status: RowStatus) -> &'static str {
    match status {
        RowStatus::Unmarked => "",
        RowStatus::Resolved => RESOLVED_COLOR,
        RowStatus::NotApplicable => NOT_APPLICABLE_COLOR,
        RowStatus::NeedsAttention => NEEDS_ATTENTION_COLOR,
    }
}

impl Renderer for HtmlRenderer {
    type Cell = String;
    type Output = String;

    fn render_header(&mut self, headers: &[String]) {
        self.headers = headers.to_vec();
    }

    fn render_cell(&self, cell: &Cell) -> String {
        match cell {
            Cell::Link { url, label } => {
                format!(r#"<a href="{}">{}</a>"#, html_escape(url), html_escape(label))
            }
            Cell::Text { text, note: None } => html_escape(text),
            Cell::Text {
                text,
                note: Some(note),
            } => format!("{} <b>(NOTE: {})</b>", html_escape(text), html_escape(note)),
        }
    }

    fn render_row(&mut self, cells: &[Cell], status: RowStatus) {
        let cells = cells.iter().map(|cell| self.render_cell(cell)).collect();
        self.rows.push(HtmlRow {
            bgcolor: row_color(status),
            cells,
        });
    }

    fn render_summary(&mut self, lines: &[String]) {
        self.summary = lines.to_vec();
    }

    fn finish(self) -> Result<String, RenderError> {
        let document = Document {
            headers: &self.headers,
            rows: &self.rows,
            summary: &self.summary,
        };
        Ok(self.handlebars.render_template(DOCUMENT_TEMPLATE, &document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::report::{Report, Row, Tally};

    fn report_with(rows: Vec<Row>) -> Report {
        Report {
            branch: "release".to_string(),
            headers: vec!["PR".to_string(), "Title".to_string()],
            rows,
            summary: vec![
                "1 of 2 already exist on master".to_string(),
                "1 of 2 need cherry-picks".to_string(),
            ],
            tally: Tally {
                picked: 1,
                unpicked: 1,
                total: 2,
            },
        }
    }

    fn row(number: u64, status: RowStatus, title: Cell) -> Row {
        Row {
            number,
            status,
            cells: vec![
                Cell::link(format!("https://example.com/pull/{number}"), number.to_string()),
                title,
            ],
        }
    }

    #[test]
    fn renders_links_as_anchors() {
        let renderer = HtmlRenderer::new();
        let html = renderer.render_cell(&Cell::link("https://example.com/pull/5", "5"));
        assert_eq!(html, r#"<a href="https://example.com/pull/5">5</a>"#);
    }

    #[test]
    fn renders_notes_in_bold() {
        let renderer = HtmlRenderer::new();
        let html = renderer.render_cell(&Cell::annotated("Fix", Some("Investigate".into())));
        assert_eq!(html, "Fix <b>(NOTE: Investigate)</b>");
    }

    #[test]
    fn escapes_text() {
        let renderer = HtmlRenderer::new();
        let html = renderer.render_cell(&Cell::text("a < b & c"));
        assert_eq!(html, "a &lt; b &amp; c");
    }

    #[test]
    fn renders_document() {
        let report = report_with(vec![
            row(1, RowStatus::Resolved, Cell::text("Done")),
            row(2, RowStatus::Unmarked, Cell::text("Pending")),
        ]);

        let html = render(&report, HtmlRenderer::new()).unwrap();

        assert!(html.contains("<th>PR</th>"));
        assert!(html.contains("<th>Title</th>"));
        assert!(html.contains(r##"<tr bgcolor="#93c47d">"##));
        assert!(html.contains(r#"<td><a href="https://example.com/pull/1">1</a></td>"#));
        assert!(html.contains("<td>Pending</td>"));
        assert!(html.contains("<p>1 of 2 already exist on master</p>"));
        assert!(html.contains("<p>1 of 2 need cherry-picks</p>"));
        assert_eq!(html.matches("bgcolor").count(), 1);
    }

    #[test]
    fn colors_follow_status() {
        let report = report_with(vec![
            row(1, RowStatus::NotApplicable, Cell::text("Skip")),
            row(2, RowStatus::NeedsAttention, Cell::text("Look")),
        ]);

        let html = render(&report, HtmlRenderer::new()).unwrap();

        assert!(html.contains(r##"<tr bgcolor="#c0c4c9">"##));
        assert!(html.contains(r##"<tr bgcolor="#ffff00">"##));
    }

    #[test]
    fn cells_are_not_escaped_twice() {
        let report = report_with(vec![row(1, RowStatus::Unmarked, Cell::text("x & y"))]);
        let html = render(&report, HtmlRenderer::new()).unwrap();

        assert!(html.contains("<td>x &amp; y</td>"));
        assert!(!html.contains("&amp;amp;"));
    }

    #[test]
    fn empty_report_still_has_header() {
        let html = render(&report_with(Vec::new()), HtmlRenderer::new()).unwrap();
        assert!(html.contains("<th>PR</th>"));
        assert!(!html.contains("<td>"));
    }
}
