//! Directory scanning and threshold filtering.
//!
//! This module provides the core scanning logic that traverses a directory
//! tree and collects every entry whose size exceeds the configured
//! threshold. Traversal is top-down; within each directory level, child
//! directories are visited before files. A directory's size is whatever the
//! filesystem reports for the directory entry itself, never a recursive sum
//! of its contents.

use std::path::Path;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::{
    config::ScanOptions,
    record::{EntryDetails, EntryKind, ScanRecord},
    units::{human_readable_size, threshold_in_bytes},
};

/// Directory scanner for entries exceeding a size threshold.
///
/// The `Scanner` walks the tree rooted at a given path sequentially and
/// produces one [`ScanRecord`] per qualifying entry: bare paths by default,
/// structured records in verbose mode. All records of one scan share a
/// shape.
#[derive(Debug)]
pub struct Scanner {
    /// Threshold, unit, precision and verbosity for this scan
    options: ScanOptions,

    /// When `true`, suppresses the progress spinner.
    quiet: bool,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    #[must_use]
    pub const fn new(options: ScanOptions) -> Self {
        Self {
            options,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses the progress spinner).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Scan the tree rooted at `root` and collect all qualifying entries.
    ///
    /// Comparison is strict: an entry whose size exactly equals the
    /// threshold is not reported. Entries that fail to stat (removed
    /// between listing and stat, permission denied) are skipped with a
    /// warning on stderr; partial results are still useful.
    ///
    /// The root directory itself is never reported.
    ///
    /// # Panics
    ///
    /// May panic if the progress bar template string is invalid, though the
    /// template is hardcoded and valid.
    #[must_use]
    pub fn scan(&self, root: &Path) -> Vec<ScanRecord> {
        let progress = if self.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message("Scanning...");
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb
        };

        let threshold = threshold_in_bytes(self.options.size, self.options.unit);
        let mut records = Vec::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            // Directories before files within each level.
            .sort_by(|a, b| b.file_type().is_dir().cmp(&a.file_type().is_dir()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!("{}", format!("Warning: skipping entry: {e}").yellow());
                    continue;
                }
            };

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    eprintln!(
                        "{}",
                        format!("Warning: could not stat {}: {e}", entry.path().display())
                            .yellow()
                    );
                    continue;
                }
            };

            #[allow(clippy::cast_precision_loss)]
            if metadata.len() as f64 > threshold {
                records.push(self.record_for(root, &entry, metadata.len()));
                progress.set_message(format!("Scanning... {} found", records.len()));
            }
        }

        progress.finish_and_clear();

        records
    }

    /// Build the record for one qualifying entry, in the shape selected by
    /// the verbosity flag.
    fn record_for(&self, root: &Path, entry: &walkdir::DirEntry, size: u64) -> ScanRecord {
        if !self.options.verbose {
            return ScanRecord::PathOnly(entry.path().to_path_buf());
        }

        let kind = if entry.file_type().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        ScanRecord::Detailed(EntryDetails {
            name: entry.file_name().to_string_lossy().into_owned(),
            kind,
            root: entry.path().parent().unwrap_or(root).display().to_string(),
            path: entry.path().display().to_string(),
            size: human_readable_size(size, self.options.unit, self.options.precision),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::units::SizeUnit;

    fn scanner(size: f64, unit: SizeUnit, verbose: bool) -> Scanner {
        Scanner::new(ScanOptions {
            size,
            unit,
            precision: 2,
            verbose,
        })
        .with_quiet(true)
    }

    fn write_bytes(dir: &Path, name: &str, len: usize) {
        fs::write(dir.join(name), vec![b'x'; len]).unwrap();
    }

    #[test]
    fn test_threshold_is_strict() {
        let temp = TempDir::new().unwrap();
        write_bytes(temp.path(), "exact.bin", 1_000);
        write_bytes(temp.path(), "over.bin", 1_001);

        let records = scanner(1.0, SizeUnit::Kb, false).scan(temp.path());

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].as_path_only().unwrap(),
            &temp.path().join("over.bin")
        );
    }

    #[test]
    fn test_small_entries_are_not_reported() {
        let temp = TempDir::new().unwrap();
        write_bytes(temp.path(), "small.txt", 10);

        let records = scanner(1.0, SizeUnit::Mb, false).scan(temp.path());
        assert!(records.is_empty());
    }

    #[test]
    fn test_root_itself_is_not_reported() {
        let temp = TempDir::new().unwrap();

        // A threshold of 0 bytes matches anything, including the root's own
        // directory entry if it were considered.
        let records = scanner(0.0, SizeUnit::Kb, false).scan(temp.path());
        assert!(records.is_empty());
    }

    #[test]
    fn test_verbose_record_fields() {
        let temp = TempDir::new().unwrap();
        write_bytes(temp.path(), "big.log", 5_000_000);

        let records = scanner(1.0, SizeUnit::Mb, true).scan(temp.path());

        assert_eq!(records.len(), 1);
        let details = records[0].as_detailed().unwrap();
        assert_eq!(details.name, "big.log");
        assert_eq!(details.kind, EntryKind::File);
        assert_eq!(details.root, temp.path().display().to_string());
        assert_eq!(
            details.path,
            temp.path().join("big.log").display().to_string()
        );
        assert_eq!(details.size, "5.00 MB");
    }

    #[test]
    fn test_verbose_size_uses_configured_unit_and_precision() {
        let temp = TempDir::new().unwrap();
        write_bytes(temp.path(), "data.bin", 1_048_576);

        let records = Scanner::new(ScanOptions {
            size: 1.0,
            unit: SizeUnit::Kib,
            precision: 0,
            verbose: true,
        })
        .with_quiet(true)
        .scan(temp.path());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_detailed().unwrap().size, "1024 KiB");
    }

    #[test]
    fn test_directories_use_their_own_entry_size() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        write_bytes(&sub, "huge.bin", 2_000_000);

        // The subdirectory holds 2 MB of content, but its own entry size is
        // a few KiB of metadata at most; only the file qualifies at 1 MB.
        let records = scanner(1.0, SizeUnit::Mb, false).scan(temp.path());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_path_only().unwrap(), &sub.join("huge.bin"));
    }

    #[test]
    fn test_nested_files_are_found() {
        let temp = TempDir::new().unwrap();
        let deep = temp.path().join("a").join("b");
        fs::create_dir_all(&deep).unwrap();
        write_bytes(&deep, "nested.bin", 3_000);
        write_bytes(temp.path(), "top.bin", 3_000);

        let records = scanner(1.0, SizeUnit::Kb, false).scan(temp.path());

        let paths: Vec<_> = records.iter().filter_map(|r| r.as_path_only()).collect();
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&&deep.join("nested.bin")));
        assert!(paths.contains(&&temp.path().join("top.bin")));
    }

    #[test]
    fn test_all_records_share_one_shape() {
        let temp = TempDir::new().unwrap();
        write_bytes(temp.path(), "one.bin", 2_000);
        write_bytes(temp.path(), "two.bin", 3_000);

        let plain = scanner(1.0, SizeUnit::Kb, false).scan(temp.path());
        assert!(plain.iter().all(|r| r.as_path_only().is_some()));

        let detailed = scanner(1.0, SizeUnit::Kb, true).scan(temp.path());
        assert!(detailed.iter().all(|r| r.as_detailed().is_some()));
    }
}
