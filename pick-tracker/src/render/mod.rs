//! Report renderers.
//!
//! A renderer turns the abstract [`Report`] into something a backend can use.
//! Two ship with the crate: [`HtmlRenderer`] builds the table as an HTML
//! fragment, and [`SheetRenderer`] builds spreadsheet rows with hyperlink
//! formulas and background colors.

mod error;
mod html;
mod sheet;

pub use error::RenderError;
pub use html::HtmlRenderer;
pub use sheet::{Sheet, SheetColor, SheetRenderer, SheetRow};

use crate::report::{Cell, Report, RowStatus};

/// Output formats supported by [`render_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// HTML table, see [`HtmlRenderer`].
    #[default]
    Html,

    /// Spreadsheet rows as JSON, see [`SheetRenderer`].
    Sheet,

    /// The abstract report itself, as JSON.
    Json,
}

/// A report backend.
///
/// [`render`] drives a renderer through the header, every row in order, and
/// the summary, then calls [`finish`](Renderer::finish).
pub trait Renderer {
    /// Backend representation of one cell.
    type Cell;

    /// Final rendered output.
    type Output;

    /// Renders the column labels.
    fn render_header(&mut self, headers: &[String]);

    /// Renders one cell. Links and text must be handled distinctly.
    fn render_cell(&self, cell: &Cell) -> Self::Cell;

    /// Renders one row with its status.
    fn render_row(&mut self, cells: &[Cell], status: RowStatus);

    /// Renders the summary lines.
    fn render_summary(&mut self, lines: &[String]);

    /// Produces the output.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the backend fails to produce its output.
    fn finish(self) -> Result<Self::Output, RenderError>;
}

/// Runs `renderer` over `report`.
///
/// # Errors
///
/// Returns whatever error the renderer's [`finish`](Renderer::finish) returns.
pub fn render<R: Renderer>(report: &Report, mut renderer: R) -> Result<R::Output, RenderError> {
    renderer.render_header(&report.headers);
    for row in &report.rows {
        renderer.render_row(&row.cells, row.status);
    }
    renderer.render_summary(&report.summary);
    renderer.finish()
}

/// Renders `report` in the given format.
///
/// # Errors
///
/// Returns [`RenderError`] if rendering or serialization fails.
pub fn render_report(report: &Report, format: ReportFormat) -> Result<String, RenderError> {
    match format {
        ReportFormat::Html => render(report, HtmlRenderer::new()),
        ReportFormat::Sheet => {
            let sheet = render(report, SheetRenderer::new())?;
            Ok(serde_json::to_string_pretty(&sheet)?)
        }
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}
