use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};

use crate::config::{DEFAULT_CONVERTER, validate_directory};

#[derive(Parser, Debug)]
#[command(
    name = "orf2jpg",
    about = "Recursively convert Olympus .orf RAW files into .jpg files, leaving the originals untouched",
    version
)]
pub struct Cli {
    /// Root directory to scan for .orf files
    #[arg(short = 'd', long = "directory", value_parser = parse_directory)]
    pub directory: PathBuf,
    /// Write converted files here instead of next to each original
    #[arg(
        short = 'o',
        long = "outputDirectory",
        visible_alias = "output-directory",
        value_parser = parse_output_directory
    )]
    pub output_directory: Option<PathBuf>,
    /// External program invoked as `<converter> <source> <destination>`
    #[arg(long = "converter", env = "ORF2JPG_CONVERTER", default_value = DEFAULT_CONVERTER)]
    pub converter: String,
    /// Dry-run: show what would be converted but do not run the converter
    #[arg(long = "dry-run")]
    pub dry_run: bool,
    /// Show a spinner counting visited files
    #[arg(long = "progress", action = ArgAction::SetTrue)]
    pub progress: bool,
}

/// Parse the process arguments, printing usage after a rejected directory.
pub fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::ValueValidation => {
            // stderr itself failing leaves nowhere to report to; exit code still signals it
            let _ = e.print();
            eprintln!("\n{}", Cli::command().render_usage());
            std::process::exit(e.exit_code());
        }
        Err(e) => e.exit(),
    }
}

fn parse_directory(raw: &str) -> Result<PathBuf, String> {
    validate_directory(Path::new(raw)).map_err(|e| e.to_string())
}

// an empty value behaves like the flag was never given
fn parse_output_directory(raw: &str) -> Result<PathBuf, String> {
    if raw.is_empty() {
        return Ok(PathBuf::new());
    }
    parse_directory(raw)
}
