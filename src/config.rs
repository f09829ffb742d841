//! Labels, extensions and the per-run walk configuration

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const SEPARATOR: &str = "--------------------------------------------------------------";
pub const DIRECTORY_NAME_LABEL: &str = "DIRECTORY NAME:";
pub const LOCATION_LABEL: &str = "LOCATION:";
pub const FILE_NAME_LABEL: &str = "FILE NAME:";
pub const PROCESSING_LABEL: &str = "PROCESSING:";
pub const SKIPPING_LABEL: &str = "SKIPPING:";
pub const ALREADY_CONVERTED_LABEL: &str = "SKIPPING (Converted file already exists):";
pub const DRY_RUN_LABEL: &str = "WOULD CONVERT:";
pub const ERROR_LABEL: &str = "ERROR PROCESSING FILE:";
pub const CONVERT_OUTPUT_LABEL: &str = "CONVERT OPERATION OUTPUT:";
pub const CONVERT_ERROR_OUTPUT_LABEL: &str = "CONVERT ERROR OUTPUT:";

/// Olympus RAW extension, compared case-insensitively.
pub const RAW_EXTENSION: &str = "orf";
pub const JPG_EXTENSION: &str = "jpg";

/// ImageMagick's converter, invoked with its defaults.
pub const DEFAULT_CONVERTER: &str = "convert";

/// Settings for one traversal
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Directory the walk starts from
    pub root_directory: PathBuf,
    /// Where converted files go; `None` writes next to each source
    pub output_directory: Option<PathBuf>,
    /// Classify and resolve only, never run the converter
    pub dry_run: bool,
    /// Show a spinner counting visited files
    pub show_progress: bool,
}

impl WalkConfig {
    /// Build a config after checking both directories exist.
    ///
    /// An empty output directory is treated as absent.
    pub fn new(
        root_directory: impl AsRef<Path>,
        output_directory: Option<impl AsRef<Path>>,
    ) -> Result<Self, ConfigError> {
        let root_directory = validate_directory(root_directory.as_ref())?;
        let output_directory = match output_directory {
            Some(dir) if !dir.as_ref().as_os_str().is_empty() => {
                Some(validate_directory(dir.as_ref())?)
            }
            _ => None,
        };
        Ok(Self {
            root_directory,
            output_directory,
            dry_run: false,
            show_progress: false,
        })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// Check that `path` exists and is a directory.
pub fn validate_directory(path: &Path) -> Result<PathBuf, ConfigError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(path.to_path_buf()),
        Ok(_) => Err(ConfigError::NotADirectory(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ConfigError::NotFound(path.to_path_buf()))
        }
        Err(source) => Err(ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}
