mod render;

use anyhow::Result;
use clap::Parser;
use render::{ColorMode, RenderOptions, Renderer};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wlog_core::{QueryError, QueryResult, WorkLog};

/// wlog — tab-delimited daily work-log reader
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Prints the work-log root directory
    #[arg(long, short, exclusive = true)]
    path: bool,
    /// View entries on a specific date (e.g., `wlog --on yesterday`, `wlog --on 08-05-2026`)
    #[arg(long, conflicts_with_all = ["from", "to"])]
    on: Option<String>,
    /// View entries from, or on, this date (e.g., `wlog --from monday`)
    #[arg(long, conflicts_with = "on")]
    from: Option<String>,
    /// View entries up to this date (inclusive)
    #[arg(long, conflicts_with = "on", requires = "from")]
    to: Option<String>,
    /// Print per-day and total hours after the entries
    #[arg(long, short = 't')]
    totals: bool,
    /// Hourly rate for the cost column; overrides the configured rate
    #[arg(long, requires = "totals")]
    rate: Option<f64>,
    /// Only shows one line per entry.
    #[arg(long, short)]
    short: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
    /// Explicit work-log files to read instead of the log directory
    #[arg(conflicts_with_all = ["path", "on", "from", "to"])]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wlog: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let worklog = WorkLog::new()?;

    let use_color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    };
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: worklog.config.date_format.clone(),
        use_color,
        short_mode: cli.short,
    }));

    if cli.path {
        renderer.print_info(&format!("{}", worklog.config.log_dir.display()));
        return Ok(());
    }

    let result = if !cli.files.is_empty() {
        worklog.read_files(&cli.files)
    } else if let Some(on) = cli.on.as_deref() {
        worklog.read_entries(on, None, None)
    } else {
        match (cli.from.as_deref(), cli.to.as_deref()) {
            (Some(from), Some(to)) => worklog.read_entries(from, Some(to), None),
            (Some(from), None) => worklog.read_entries(from, Some("today"), None),
            // No selector: today's log.
            _ => worklog.read_entries("today", None, None),
        }
    };

    let rate = cli.rate.or(worklog.config.rate);
    print_result(&renderer, &result, cli.totals, rate);
    Ok(())
}

fn print_result(renderer: &Renderer, result: &QueryResult, totals: bool, rate: Option<f64>) {
    let count = result.entries().count();
    if count == 0 {
        renderer.print_info("No entries found.");
    } else {
        renderer.print_info(&format!("{count} entries found."));
        renderer.print_days(result);
        if totals {
            renderer.print_summary(result, rate);
        }
    }
    if !result.errors.is_empty() {
        print_errors(renderer, &result.errors);
    }
}

fn print_errors(renderer: &Renderer, errors: &[QueryError]) {
    renderer.print_md("\n# Errors:");
    for error in errors {
        let message = match error {
            QueryError::FileError { path, error } => {
                format!("* Could not process '{}': {}", path.display(), error)
            }
            QueryError::InvalidDate { input, error } => {
                format!("* Could not process '{}': {}", input, error)
            }
            QueryError::MissingHeader { path } => {
                format!(
                    "* Skipped '{}': no line carries the required column header.",
                    path.display()
                )
            }
            QueryError::RejectedRow {
                path,
                line_no,
                line,
                reason,
            } => {
                format!(
                    "* Rejected row at {}:{} [{}]: {}. Row: `{}`",
                    path.display(),
                    line_no,
                    reason.as_ref(),
                    reason.message(),
                    line
                )
            }
        };
        renderer.print_md(&message);
    }
}
