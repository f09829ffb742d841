//! Decide which visited files get converted

use std::path::{Path, PathBuf};

use crate::config::RAW_EXTENSION;
use crate::destination::{ConversionJob, resolve};

/// A visited filesystem path with its name and extension pulled out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub extension: Option<String>,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned());
        Self {
            path,
            name,
            extension,
        }
    }

    /// True when the extension is `orf` in any letter case.
    pub fn is_raw(&self) -> bool {
        self.extension
            .as_deref()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(RAW_EXTENSION))
    }
}

/// Outcome of classifying one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Not an Olympus RAW file
    NotRaw,
    /// A converted file already sits at the destination
    AlreadyConverted(PathBuf),
    /// Should be converted by this job
    Convert(ConversionJob),
}

/// Classify `entry`, resolving its destination against `output_directory`.
///
/// An existence check that errors (permission denied on a parent, say) counts
/// as "not there", so the conversion goes ahead and the converter reports the
/// real problem.
pub fn classify(entry: &FileEntry, output_directory: Option<&Path>) -> Classification {
    if !entry.is_raw() {
        return Classification::NotRaw;
    }
    let destination = resolve(&entry.path, output_directory);
    if destination.try_exists().unwrap_or(false) {
        Classification::AlreadyConverted(destination)
    } else {
        Classification::Convert(ConversionJob {
            source: entry.path.clone(),
            destination,
        })
    }
}

pub fn should_process(entry: &FileEntry, output_directory: Option<&Path>) -> bool {
    matches!(
        classify(entry, output_directory),
        Classification::Convert(_)
    )
}

pub fn is_raw_file(path: &Path) -> bool {
    FileEntry::new(path).is_raw()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_file_entry_parts() {
        let entry = FileEntry::new("/photos/trip/P1010001.ORF");
        assert_eq!(entry.name, "P1010001.ORF");
        assert_eq!(entry.extension.as_deref(), Some("ORF"));

        let bare = FileEntry::new("/photos/README");
        assert_eq!(bare.extension, None);
    }

    #[test]
    fn test_raw_extension_any_case() {
        for name in ["a.orf", "a.ORF", "a.Orf", "a.oRf", "x.y.ORF"] {
            assert!(is_raw_file(Path::new(name)), "{name} should be raw");
        }
        for name in ["a.jpg", "a.orf.jpg", "a.orff", "a.or", "orf", "a.raw", ".orf", "a"] {
            assert!(!is_raw_file(Path::new(name)), "{name} should not be raw");
        }
    }

    #[test]
    fn test_raw_without_output_is_processed() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("a.ORF");
        fs::write(&raw, b"raw").unwrap();

        let entry = FileEntry::new(&raw);
        assert!(should_process(&entry, None));
        match classify(&entry, None) {
            Classification::Convert(job) => {
                assert_eq!(job.source, raw);
                assert_eq!(job.destination, dir.path().join("a.jpg"));
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_existing_output_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("d.ORF");
        fs::write(&raw, b"raw").unwrap();
        fs::write(dir.path().join("d.jpg"), b"jpg").unwrap();

        let entry = FileEntry::new(&raw);
        assert!(!should_process(&entry, None));
        assert_eq!(
            classify(&entry, None),
            Classification::AlreadyConverted(dir.path().join("d.jpg"))
        );
    }

    #[test]
    fn test_existing_output_checked_in_output_directory() {
        let input = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let raw = input.path().join("d.ORF");
        fs::write(&raw, b"raw").unwrap();
        // a sibling jpg does not count when writing elsewhere
        fs::write(input.path().join("d.jpg"), b"jpg").unwrap();

        let entry = FileEntry::new(&raw);
        assert!(should_process(&entry, Some(out.path())));

        fs::write(out.path().join("d.jpg"), b"jpg").unwrap();
        assert!(!should_process(&entry, Some(out.path())));
    }

    #[test]
    fn test_non_raw_never_processed() {
        let dir = tempfile::tempdir().unwrap();
        let jpg = dir.path().join("c.jpg");
        fs::write(&jpg, b"jpg").unwrap();
        assert_eq!(classify(&FileEntry::new(&jpg), None), Classification::NotRaw);
        assert!(!should_process(&FileEntry::new(dir.path().join("missing.png")), None));
    }

    #[test]
    fn test_unreachable_destination_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("a.ORF");
        fs::write(&raw, b"raw").unwrap();
        // a plain file used as output directory makes the existence check error out
        let not_a_dir = dir.path().join("plain");
        fs::write(&not_a_dir, b"file").unwrap();
        assert!(not_a_dir.join("a.jpg").try_exists().is_err());

        let entry = FileEntry::new(&raw);
        assert!(should_process(&entry, Some(not_a_dir.as_path())));
        match classify(&entry, Some(not_a_dir.as_path())) {
            Classification::Convert(job) => {
                assert_eq!(job.destination, not_a_dir.join("a.jpg"));
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }
}
