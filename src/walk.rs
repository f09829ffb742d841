//! Recursive pre-order walk that drives classification and conversion

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::classify::{Classification, FileEntry, classify};
use crate::config::{
    ALREADY_CONVERTED_LABEL, DIRECTORY_NAME_LABEL, DRY_RUN_LABEL, ERROR_LABEL, FILE_NAME_LABEL,
    LOCATION_LABEL, PROCESSING_LABEL, SEPARATOR, SKIPPING_LABEL, WalkConfig,
};
use crate::error::WalkError;
use crate::invoker::{ExternalConverter, convert, log_streams};

/// What happened to one visited file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Converted,
    /// Eligible, but `dry_run` kept the converter from running
    Planned,
    NotRaw,
    AlreadyConverted,
    Failed,
}

/// Counters for a finished walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: u64,
    pub files: u64,
    pub converted: u64,
    pub planned: u64,
    pub skipped: u64,
    pub failed: u64,
    pub traversal_errors: u64,
}

impl WalkSummary {
    fn record(&mut self, outcome: FileOutcome) {
        self.files += 1;
        match outcome {
            FileOutcome::Converted => self.converted += 1,
            FileOutcome::Planned => self.planned += 1,
            FileOutcome::NotRaw | FileOutcome::AlreadyConverted => self.skipped += 1,
            FileOutcome::Failed => self.failed += 1,
        }
    }
}

/// Walk `config.root_directory` depth-first, converting every eligible file.
///
/// Directories are announced before their children. A failure inside one file
/// or one sub-directory is logged and the walk moves on; only a root that
/// cannot be read aborts with [`WalkError::Root`].
pub fn walk_tree<C: ExternalConverter + ?Sized>(
    config: &WalkConfig,
    converter: &C,
) -> Result<WalkSummary, WalkError> {
    let root = config.root_directory.as_path();
    let mut summary = WalkSummary::default();

    let pb = if config.show_progress {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {pos} files {msg}") {
            pb.set_style(style);
        }
        Some(pb)
    } else {
        None
    };

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if err.depth() == 0 || err.path() == Some(root) {
                    if let Some(pb) = &pb {
                        pb.abandon();
                    }
                    return Err(WalkError::Root {
                        path: root.to_path_buf(),
                        source: err,
                    });
                }
                let location = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                error!(%location, "A file traversal error occurred: {}", err);
                summary.traversal_errors += 1;
                continue;
            }
        };

        if entry.file_type().is_dir() {
            enter_directory(&entry);
            summary.directories += 1;
            continue;
        }

        let outcome = visit_file(FileEntry::new(entry.path()), config, converter);
        summary.record(outcome);
        if let Some(pb) = &pb {
            pb.inc(1);
            pb.set_message(entry.file_name().to_string_lossy().into_owned());
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    Ok(summary)
}

fn enter_directory(entry: &DirEntry) {
    let name = entry.file_name().to_string_lossy();
    let location = absolute_location(entry.path());
    info!("{}", SEPARATOR);
    info!(
        "{} {} {} {}",
        DIRECTORY_NAME_LABEL,
        name,
        LOCATION_LABEL,
        location
    );
    info!("{}", SEPARATOR);
}

fn absolute_location(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Classify one file and convert it when eligible.
pub fn visit_file<C: ExternalConverter + ?Sized>(
    entry: FileEntry,
    config: &WalkConfig,
    converter: &C,
) -> FileOutcome {
    let file = entry.name.as_str();
    info!("{} {}", FILE_NAME_LABEL, file);

    match classify(&entry, config.output_directory.as_deref()) {
        Classification::NotRaw => {
            info!("{} {}", SKIPPING_LABEL, file);
            FileOutcome::NotRaw
        }
        Classification::AlreadyConverted(destination) => {
            info!(destination = %destination.display(), "{} {}", ALREADY_CONVERTED_LABEL, file);
            FileOutcome::AlreadyConverted
        }
        Classification::Convert(job) if config.dry_run => {
            info!(destination = %job.destination.display(), "{} {}", DRY_RUN_LABEL, file);
            FileOutcome::Planned
        }
        Classification::Convert(job) => {
            info!(destination = %job.destination.display(), "{} {}", PROCESSING_LABEL, file);
            let result = convert(job, converter);
            log_streams(file, &result);
            match &result.failure_reason {
                None => FileOutcome::Converted,
                Some(reason) => {
                    warn!(reason = %reason, "{} {}", ERROR_LABEL, file);
                    FileOutcome::Failed
                }
            }
        }
    }
}
