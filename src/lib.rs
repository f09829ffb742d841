//! orf2jpg - Batch-convert Olympus RAW (.orf) photographs to JPEG
//!
//! The library walks a directory tree, picks out `.orf`/`.ORF` files that
//! have not been converted yet, and hands each one to an external converter
//! (ImageMagick's `convert` by default). Originals are never written to.
//!
//! # Pipeline
//!
//! - **Classification** ([`classify`]): extension check plus an idempotency
//!   check against an existing `.jpg` at the destination
//! - **Destination** ([`destination`]): same directory as the source, or a
//!   flat output directory keeping only the file name
//! - **Invocation** ([`invoker`]): `<converter> <source> <destination>`, both
//!   output streams captured, failures kept per file
//! - **Walk** ([`walk`]): pre-order traversal tying the three together
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use orf2jpg::{walk_tree, CommandConverter, WalkConfig};
//!
//! let config = WalkConfig::new("/photos", Some(Path::new("/out")))?;
//! let summary = walk_tree(&config, &CommandConverter::default())?;
//! println!("converted {} files", summary.converted);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod destination;
pub mod error;
pub mod invoker;
pub mod walk;

pub use classify::{Classification, FileEntry, should_process};
pub use config::WalkConfig;
pub use destination::{ConversionJob, resolve};
pub use error::{ConfigError, ConversionFailure, WalkError};
pub use invoker::{CommandConverter, ConversionResult, ExternalConverter, convert};
pub use walk::{FileOutcome, WalkSummary, walk_tree};
