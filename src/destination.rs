//! Destination path resolution for converted files

use std::path::{Path, PathBuf};

use crate::config::JPG_EXTENSION;

/// One source → destination mapping, alive for a single conversion attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl ConversionJob {
    pub fn new(source: impl Into<PathBuf>, output_directory: Option<&Path>) -> Self {
        let source = source.into();
        let destination = resolve(&source, output_directory);
        Self {
            source,
            destination,
        }
    }
}

/// Compute where the JPEG for `source` is written.
///
/// The trailing extension is swapped for `jpg`, leaving the stem untouched.
/// Without an output directory (or with an empty one) the result sits next to
/// the source; otherwise only the source's file name is kept and joined onto
/// `output_directory`. Pure path arithmetic, nothing is created.
pub fn resolve(source: &Path, output_directory: Option<&Path>) -> PathBuf {
    let renamed = source.with_extension(JPG_EXTENSION);
    match output_directory {
        Some(dir) if !dir.as_os_str().is_empty() => match renamed.file_name() {
            Some(name) => dir.join(name),
            None => dir.to_path_buf(),
        },
        _ => renamed,
    }
}
