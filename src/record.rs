//! Scan result records.
//!
//! A scan produces either bare paths (default) or structured records
//! (`--verbose`). The two shapes are modeled as a tagged variant so the
//! renderers branch on a closed set of cases; every record of one scan
//! session has the same variant.

use std::fmt;
use std::path::PathBuf;

/// Column headers for detailed output, in the lexicographic order they are
/// always rendered in (table columns and CSV header row).
pub const DETAIL_HEADERS: [&str; 5] = ["name", "path", "root", "size", "type"];

/// Whether a reported entry is a file or a directory.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntryKind {
    /// A regular file
    File,

    /// A directory entry (its own filesystem-reported size, not a recursive sum)
    Directory,
}

impl EntryKind {
    /// The label used in detailed output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Directory => "Directory",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured record for one entry that exceeded the threshold.
///
/// Paths are stored pre-stringified since every consumer (table layout,
/// CSV rows) works on rendered widths and text values.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EntryDetails {
    /// File or directory name (final path component)
    pub name: String,

    /// Whether the entry is a file or a directory
    pub kind: EntryKind,

    /// The directory the entry was found in
    pub root: String,

    /// Full path of the entry
    pub path: String,

    /// Human-readable size in the configured unit and precision
    pub size: String,
}

impl EntryDetails {
    /// Look up the rendered value for a column header.
    ///
    /// # Panics
    ///
    /// Panics when `header` is not one of [`DETAIL_HEADERS`]; callers only
    /// ever iterate that constant.
    #[must_use]
    pub fn field(&self, header: &str) -> &str {
        match header {
            "name" => &self.name,
            "path" => &self.path,
            "root" => &self.root,
            "size" => &self.size,
            "type" => self.kind.as_str(),
            other => unreachable!("unknown column header: {other}"),
        }
    }
}

/// A single scan result.
///
/// `PathOnly` is produced in the default mode, `Detailed` under
/// `--verbose`. A scan never mixes the two.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ScanRecord {
    /// Bare full path of a qualifying entry
    PathOnly(PathBuf),

    /// Structured multi-field record of a qualifying entry
    Detailed(EntryDetails),
}

impl ScanRecord {
    /// The bare path, when this is a `PathOnly` record.
    #[must_use]
    pub const fn as_path_only(&self) -> Option<&PathBuf> {
        match self {
            Self::PathOnly(path) => Some(path),
            Self::Detailed(_) => None,
        }
    }

    /// The structured record, when this is a `Detailed` record.
    #[must_use]
    pub const fn as_detailed(&self) -> Option<&EntryDetails> {
        match self {
            Self::Detailed(details) => Some(details),
            Self::PathOnly(_) => None,
        }
    }
}
