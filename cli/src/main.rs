//! CLI for the issue migrator.
//!
//! Copies issues from an exported snapshot into a target GitHub repository.

use clap::Parser;
use issue_migrator::{ItemKind, ItemStatus, RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;

/// Issue Migrator - Copy issues, labels, milestones and comments into another repository.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON file containing the issue data array.
    #[arg(long)]
    file: PathBuf,

    /// Owner of the target GitHub repository.
    #[arg(long)]
    owner: String,

    /// Name of the target GitHub repository.
    #[arg(long)]
    repo: String,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// API base URL, for GitHub Enterprise hosts.
    #[arg(long)]
    api_url: Option<Url>,

    /// Handlebars template for the consolidated comment.
    #[arg(long)]
    comment_template: Option<PathBuf>,

    /// Preview the migration without touching the target repository.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
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
/// Uses compact single-line output and honours `RUST_LOG`, falling back to
/// "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut config = RunnerConfig::new(
        args.file,
        args.owner,
        args.repo,
        args.token.unwrap_or_default(),
    )
    .with_dry_run(args.dry_run);
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(api_url);
    }
    if let Some(path) = args.comment_template {
        config = config.with_comment_template_path(path);
    }

    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Issues in snapshot: {}", summary.issues_in_snapshot);
    println!("  Unique labels: {}", summary.labels_collected);
    println!("  Unique milestones: {}", summary.milestones_collected);

    if summary.dry_run {
        return;
    }

    for kind in [
        ItemKind::Label,
        ItemKind::Milestone,
        ItemKind::Issue,
        ItemKind::Comment,
        ItemKind::BodyUpdate,
    ] {
        let counts = summary.counts(kind);
        println!(
            "  {kind}: {} created, {} existing, {} failed",
            counts.created, counts.existing, counts.failed
        );
    }

    if summary.has_failures() {
        println!("\nFailures:");
        for failure in &summary.failures {
            if let ItemStatus::Failed { error } = &failure.status {
                println!("  {} {}: {error}", failure.kind, failure.key);
            }
        }
    }
}
