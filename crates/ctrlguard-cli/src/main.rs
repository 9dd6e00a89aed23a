//! CLI entry point for ctrlguard.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, I/O, and exit
//! codes. All business logic lives in the `ctrlguard-app` crate.

#![forbid(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand};
use ctrlguard_app::{
    AuditInput, ExplainOutput, format_explanation, format_not_found, render_report, run_audit,
    run_explain, verdict_exit_code, write_text,
};
use ctrlguard_settings::{DEFAULT_PATTERN, DEFAULT_ROOT, Overrides};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "ctrlguard",
    version,
    about = "Heuristic compliance auditor for controller files"
)]
struct Cli {
    /// Directory to audit.
    #[arg(long, default_value = DEFAULT_ROOT)]
    root: Utf8PathBuf,

    /// File name glob selecting candidate controllers.
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pattern: String,

    /// Output format (text|json|markdown).
    #[arg(long, default_value = "text")]
    format: String,

    /// Write the rendered report to this file instead of stdout.
    #[arg(long)]
    out: Option<Utf8PathBuf>,

    /// Exit with status 2 when any controller needs work.
    #[arg(long)]
    fail_on_findings: bool,

    /// Increase diagnostic verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Explain a requirement id or label with remediation guidance.
    Explain {
        /// The requirement id (e.g., "controller.status_set") or label (e.g., "status set").
        identifier: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.cmd {
        Some(Commands::Explain { ref identifier }) => cmd_explain(identifier),
        None => cmd_audit(&cli),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("ctrlguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(false)
                .compact(),
        )
        .init();
}

fn cmd_audit(cli: &Cli) -> anyhow::Result<i32> {
    let overrides = Overrides {
        root: Some(cli.root.clone()),
        pattern: Some(cli.pattern.clone()),
        format: Some(cli.format.clone()),
        fail_on_findings: cli.fail_on_findings,
    };

    let output = run_audit(AuditInput { overrides })?;
    let rendered =
        render_report(&output.report, output.settings.format).context("render report")?;

    match &cli.out {
        Some(path) => {
            write_text(path, &rendered).context("write report")?;
            tracing::info!(path = %path, "wrote report");
        }
        None => print!("{rendered}"),
    }

    Ok(verdict_exit_code(output.report.verdict))
}

fn cmd_explain(identifier: &str) -> anyhow::Result<i32> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(0)
        }
        ExplainOutput::NotFound {
            identifier,
            available_ids,
            available_labels,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_ids, available_labels)
            );
            Ok(1)
        }
    }
}
