//! topo-order - linear, topologically ordered view of local git history
//!
//! # Usage
//! ```bash
//! topo-order                  # Current repository
//! topo-order ~/src/project    # Any path inside a repository
//! topo-order --format json    # One JSON object per line
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use topo_order::AppError;
use topo_order::git::GitRepository;
use topo_order::render::output::{OutputFormat, render_to_stdout};

/// Print local branch history children-first, marking where the linear
/// order leaves the real commit graph
#[derive(Parser)]
#[command(name = "topo-order", version)]
#[command(about = "Topologically ordered commit history with branch connectors", long_about = None)]
struct Cli {
    /// Path inside the git repository to read
    #[arg(value_name = "REPO_PATH", default_value = ".")]
    repo_path: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let repo = GitRepository::open(&cli.repo_path)?;
    let graph = repo.load_graph()?;

    match render_to_stdout(&graph, cli.format) {
        Ok(stats) => {
            tracing::info!("Printed {} commits in {} fragments", stats.commits, stats.fragments);
            Ok(())
        }
        // Reader went away (e.g. `| head`); nothing left to report.
        Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the rendered history.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {}", e);
            if let Some(AppError::RepoNotFound(_)) = e.downcast_ref::<AppError>() {
                eprintln!("  Run inside a git repository or pass its path.");
            }
            ExitCode::FAILURE
        }
    }
}
