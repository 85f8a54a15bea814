//! CLI for pick-tracker.
//!
//! Reads a corpus of merged pull requests and reports which PRs on a release
//! branch still need to be cherry-picked to the primary branch.

use clap::{Parser, ValueEnum};
use pick_tracker::{
    write_report, ReportFormat, Runner, RunnerConfig, RunnerError, DEFAULT_PRIMARY_BRANCH,
    DEFAULT_REPOSITORY_URL,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// pick-tracker - Track cherry-pick propagation between branches.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// PR corpus: a `.json` export or a SQLite database.
    corpus: PathBuf,

    /// Branch to report on.
    #[arg(short, long)]
    branch: String,

    /// TOML file with manual overrides.
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Branch that pick status is measured against.
    #[arg(long, default_value = DEFAULT_PRIMARY_BRANCH)]
    primary_branch: String,

    /// Repository URL used to build PR links.
    #[arg(long, env = "PICK_TRACKER_REPO_URL", default_value = DEFAULT_REPOSITORY_URL)]
    repo_url: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Logging level, used when `RUST_LOG` is not set.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    logging: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Html,
    Sheet,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => ReportFormat::Html,
            Format::Sheet => ReportFormat::Sheet,
            Format::Json => ReportFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.logging);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Failed to build report");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing on stderr so stdout only carries the report.
///
/// `RUST_LOG` wins over `--logging` when it is set and valid.
fn init_tracing(level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive())))
        .init();
}

/// Main execution logic.
fn run(args: Args) -> Result<(), RunnerError> {
    let mut config = RunnerConfig::new(args.corpus, args.branch)
        .with_primary_branch(args.primary_branch)
        .with_repository_url(args.repo_url);
    if let Some(path) = args.overrides {
        config = config.with_overrides_path(path);
    }

    let runner = Runner::new(config)?;
    let rendered = runner.run_and_render(args.format.into())?;

    match args.output {
        Some(path) => write_report(&rendered, &path),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{rendered}").map_err(|e| RunnerError::Output {
                path: "<stdout>".to_string(),
                source: e,
            })
        }
    }
}
