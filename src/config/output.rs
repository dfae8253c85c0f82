//! Output configuration: target, format and store location.

use std::path::PathBuf;

use clap::ValueEnum;

/// Where rendered output goes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Default)]
pub enum OutputTarget {
    /// Write to standard output
    #[default]
    Console,

    /// Write to a file under the store path
    File,
}

/// The format rendered output is produced in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain text: path list, or an aligned box table in verbose mode
    #[default]
    Txt,

    /// RFC-4180 CSV: one column of paths, or one column per record field
    Csv,
}

impl OutputFormat {
    /// File extension for this format (no leading dot).
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
        }
    }
}

/// Resolved output configuration for one render session.
///
/// `store` has already been defaulted to the current working directory and
/// tilde-expanded when it came from the config file; its existence is
/// validated eagerly before any scanning starts.
#[derive(Clone, Debug)]
pub struct OutputOptions {
    /// Console or file output
    pub target: OutputTarget,

    /// Text or CSV format
    pub format: OutputFormat,

    /// Base file name (no extension) used when writing to a file
    pub file_name: String,

    /// Directory (or file) the output file is stored at
    pub store: PathBuf,
}
