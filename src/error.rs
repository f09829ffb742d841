//! Error types shared by the conversion pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems with the directories handed to a run. Always raised before
/// anything is traversed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("directory does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot access {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Fatal traversal failures. Only the root can abort a walk.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot traverse root directory {}: {source}", .path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Why a single conversion did not succeed.
#[derive(Debug, Error)]
pub enum ConversionFailure {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("converter exited with status {0}")]
    ExitStatus(i32),
    #[error("converter terminated without an exit code")]
    Terminated,
    #[error("converter stream I/O failed: {0}")]
    Io(#[source] io::Error),
}
