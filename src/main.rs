//! SEO Probe main entry point
//!
//! This is the command-line interface for the one-shot page auditor.

use anyhow::Context;
use clap::Parser;
use seo_probe::config::load_config_or_default;
use seo_probe::output::{emit_all, sinks_from_config};
use seo_probe::Auditor;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// SEO Probe: a one-shot on-page SEO auditor
///
/// Fetches a single page, extracts title, description, headings, counts and
/// social metadata, scores the page from 0 to 100 and prints a JSON report.
#[derive(Parser, Debug)]
#[command(name = "seo-probe")]
#[command(version)]
#[command(about = "A one-shot on-page SEO auditor", long_about = None)]
struct Cli {
    /// URL to audit; https:// is assumed when no scheme is given
    #[arg(value_name = "URL", env = "SEO_PROBE_URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Also write the report to this file (overrides report-path)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Do not echo the report to stdout
    #[arg(long)]
    no_echo: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout is reserved for the report. `RUST_LOG` wins
/// when set.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("seo_probe=info,warn"),
                1 => EnvFilter::new("seo_probe=debug,info"),
                2 => EnvFilter::new("seo_probe=trace,debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads configuration, audits the URL and emits the report
async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config_or_default(cli.config.as_deref()).with_context(|| {
        match &cli.config {
            Some(path) => format!("Failed to load configuration from {}", path.display()),
            None => "Failed to load configuration".to_string(),
        }
    })?;

    if let Some(path) = &cli.output {
        config.output.report_path = Some(path.display().to_string());
    }
    if cli.no_echo {
        config.output.echo = false;
    }

    let auditor = Auditor::new(&config)?;
    let report = auditor.audit(&cli.url).await?;

    let sinks = sinks_from_config(&config.output);
    emit_all(&report, &sinks)?;

    Ok(())
}
