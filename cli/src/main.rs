//! CLI for the Issue Importer.
//!
//! This tool reads issues from a CSV or JSON file and creates them in a
//! GitHub repository, reporting the outcome of every record.

use clap::Parser;
use issue_importer::{
    load_settings, parse_api_url, ConfigError, ImportOutcome, ImportReport, ImporterSettings,
    InputFormat, Pacer, RepositoryRef, Runner, RunnerConfig, RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue Importer - Create GitHub issues from a CSV or JSON file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the CSV or JSON file with issues.
    #[arg(long)]
    file: PathBuf,

    /// Input format (csv or json). Inferred from the file extension if omitted.
    #[arg(long)]
    format: Option<String>,

    /// Target repository in owner/name form.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// GitHub API base URL (for GitHub Enterprise).
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Validate issues without creating them.
    #[arg(long)]
    dry_run: bool,

    /// Pause between issue creations, in milliseconds.
    #[arg(long)]
    request_delay_ms: Option<u64>,

    /// Wait for the rate limit to reset when it is nearly exhausted.
    #[arg(long)]
    respect_rate_limit: bool,

    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON report of every outcome to this path.
    #[arg(long)]
    report: Option<PathBuf>,

    /// GitHub Actions output file.
    #[arg(long, env = "GITHUB_OUTPUT")]
    github_output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    let report_path = args.report.clone();
    let github_output = args.github_output.clone();

    // Run the main logic
    match run(args).await {
        Ok(report) => {
            print_summary(&report);
            write_outputs(&report, report_path, github_output);

            if report.summary.run_failed() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<ImportReport, RunnerError> {
    let config = build_config(args)?;
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Merges CLI arguments over the optional settings file.
fn build_config(args: Args) -> Result<RunnerConfig, RunnerError> {
    let settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => ImporterSettings::default(),
    };

    let repository: RepositoryRef = args
        .repository
        .or(settings.repository)
        .ok_or(ConfigError::MissingSetting { name: "repository" })?
        .parse()?;

    let format = match args.format {
        Some(format) => Some(format.parse::<InputFormat>()?),
        None => settings.format,
    };

    let delay = args
        .request_delay_ms
        .or(settings.request_delay_ms)
        .map(Duration::from_millis)
        .unwrap_or(issue_importer::DEFAULT_REQUEST_DELAY);
    let respect_rate_limit =
        args.respect_rate_limit || settings.respect_rate_limit.unwrap_or(false);
    let dry_run = args.dry_run || settings.dry_run.unwrap_or(false);

    let mut config = RunnerConfig::new(args.file, repository, args.token, dry_run)
        .with_pacer(Pacer::new(delay, respect_rate_limit));
    if let Some(format) = format {
        config = config.with_format(format);
    }
    if let Some(api_url) = args.api_url.filter(|url| !url.is_empty()) {
        config = config.with_api_url(parse_api_url(&api_url)?);
    }
    Ok(config)
}

/// Prints the final import summary.
fn print_summary(report: &ImportReport) {
    let summary = &report.summary;
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Records processed: {}", summary.total());
    println!("  Successful: {}", summary.successful);
    println!("  Failed: {}", summary.failed);

    for (i, outcome) in report.outcomes.iter().enumerate() {
        let position = i + 1;
        match outcome {
            ImportOutcome::Created { title, number, url } => {
                println!("  [{position}] Created #{number}: {title} ({url})");
            }
            ImportOutcome::DryRun { title } => {
                println!("  [{position}] Would create: {title}");
            }
            ImportOutcome::Failed { title, error } => {
                println!("  [{position}] Failed: {title} - {error}");
            }
        }
    }

    println!("\n{}", summary.message());
}

/// Writes the optional JSON report and GitHub Actions outputs.
fn write_outputs(
    report: &ImportReport,
    report_path: Option<PathBuf>,
    github_output: Option<PathBuf>,
) {
    if let Some(path) = report_path {
        if let Err(e) = report.write_json(&path) {
            warn!(error = %e, "Failed to write report");
        }
    }

    if let Some(path) = github_output.filter(|path| !path.as_os_str().is_empty()) {
        if let Err(e) = report.write_github_outputs(&path) {
            warn!(error = %e, "Failed to write GitHub Actions outputs");
        }
    }
}
