#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod inference;
pub mod overrides;
pub mod reconcile;
pub mod records;
pub mod render;
pub mod report;
pub mod runner;

pub use inference::{index_picks, infer_pick, PickIndex, PickSource};
pub use overrides::{Cleared, OverrideEntry, OverrideError, OverrideTable, ToMasterOverride};
pub use reconcile::{
    find_pick, reconcile, BranchTable, ReconciledPr, Resolution, DEFAULT_PRIMARY_BRANCH,
    NOT_APPLICABLE, UNKNOWN_BRANCH,
};
pub use records::{
    load_corpus, load_json_corpus, load_sqlite_corpus, Corpus, PrRecord, RecordError,
    RepositoryOwner,
};
pub use render::{
    render, render_report, HtmlRenderer, RenderError, Renderer, ReportFormat, Sheet, SheetColor,
    SheetRenderer, SheetRow,
};
pub use report::{
    assemble, Cell, Report, ReportConfig, ReportError, Row, RowStatus, Tally,
    DEFAULT_REPOSITORY_URL, HEADERS,
};
pub use runner::{write_report, Runner, RunnerConfig, RunnerError};
