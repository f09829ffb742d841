use std::io::IsTerminal;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use orf2jpg::cli;
use orf2jpg::{CommandConverter, WalkConfig, walk_tree};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stdout().is_terminal())
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = cli::parse_args();

    let config = WalkConfig::new(&args.directory, args.output_directory.as_ref())
        .context("invalid directory arguments")?
        .with_dry_run(args.dry_run)
        .with_progress(args.progress);
    let converter = CommandConverter::new(args.converter);

    let summary = walk_tree(&config, &converter)
        .with_context(|| format!("failed to scan {}", config.root_directory.display()))?;

    info!(
        directories = summary.directories,
        files = summary.files,
        converted = summary.converted,
        planned = summary.planned,
        skipped = summary.skipped,
        failed = summary.failed,
        traversal_errors = summary.traversal_errors,
        "Run complete"
    );
    Ok(())
}
