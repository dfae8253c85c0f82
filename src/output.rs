//! Output rendering and store-path resolution.
//!
//! The [`OutputRenderer`] owns one render session: it resolves where the
//! output goes (console, or exactly one file under the store path), picks
//! one of the four render modes from `(verbose) × (txt | csv)`, and writes
//! every line/row to the sink. The file handle, when one is opened, lives
//! only for the duration of the render pass and is closed deterministically
//! on every exit path when it goes out of scope.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{OutputFormat, OutputOptions, OutputTarget};
use crate::record::{DETAIL_HEADERS, EntryDetails, ScanRecord};
use crate::table::TableLayout;

/// Banner printed above the plain-text path list.
const PLAIN_BANNER: &str = "Files and Directories found";

/// Divider printed under the plain-text banner.
const PLAIN_DIVIDER: &str = "----------------------------";

/// Where a render session writes to, after store-path resolution.
#[derive(Debug, PartialEq, Eq)]
enum Destination {
    /// Standard output
    Console,

    /// A single resolved output file
    File(PathBuf),
}

/// Renders scan records to the configured sink in the configured format.
#[derive(Debug)]
pub struct OutputRenderer {
    /// Text or CSV
    format: OutputFormat,

    /// Structured records vs. bare paths
    verbose: bool,

    /// Resolved output destination
    destination: Destination,
}

impl OutputRenderer {
    /// Create a renderer, resolving the output destination once.
    ///
    /// When the target is a file, the effective path is derived from the
    /// store path, file name and format. Mismatches between an existing
    /// store file and the configured format, and overwrites of existing
    /// output files, are recovered from with a warning (never an error).
    #[must_use]
    pub fn new(options: &OutputOptions, verbose: bool) -> Self {
        let destination = match options.target {
            OutputTarget::Console => Destination::Console,
            OutputTarget::File => Destination::File(Self::resolve_store_path(options)),
        };

        Self {
            format: options.format,
            verbose,
            destination,
        }
    }

    /// The resolved output file path, when writing to a file.
    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        match &self.destination {
            Destination::Console => None,
            Destination::File(path) => Some(path),
        }
    }

    /// Resolve the effective output file path from the store path.
    ///
    /// - An existing file whose extension does not match the configured
    ///   format is replaced by `<store_parent>/<file_name>.<ext>`.
    /// - An existing file whose stem differs from the configured file name
    ///   is kept, with a warning.
    /// - An existing directory yields `<store>/<file_name>.<ext>`,
    ///   overwriting (with a warning) any previous output file.
    fn resolve_store_path(options: &OutputOptions) -> PathBuf {
        let extension = options.format.extension();
        let file_name = format!("{}.{extension}", options.file_name);

        if options.store.is_file() {
            let extension_matches =
                options.store.extension().and_then(|e| e.to_str()) == Some(extension);

            if !extension_matches {
                let derived = options
                    .store
                    .parent()
                    .unwrap_or_else(|| Path::new("."))
                    .join(&file_name);
                eprintln!(
                    "{}",
                    format!(
                        "Warning: specified store file is not of type {extension}, \
                         storing output at {} instead",
                        derived.display()
                    )
                    .yellow()
                );
                return derived;
            }

            let stem_matches = options.store.file_stem().and_then(|s| s.to_str())
                == Some(options.file_name.as_str());
            if !stem_matches {
                eprintln!(
                    "{}",
                    format!(
                        "Warning: output is being stored at {} instead of {file_name}",
                        options.store.display()
                    )
                    .yellow()
                );
            }

            return options.store.clone();
        }

        // Store existence is validated before any scanning; anything that
        // is not a file is treated as the containing directory.
        let derived = options.store.join(&file_name);
        if derived.exists() {
            eprintln!(
                "{}",
                format!("Warning: {file_name} already exists, this will be overwritten").yellow()
            );
        }
        derived
    }

    /// Write all records to the resolved destination.
    ///
    /// Callers skip rendering entirely when no records matched; this is
    /// never invoked with an empty set.
    ///
    /// # Errors
    ///
    /// Returns an error when the output file cannot be created or any write
    /// to the sink fails. Write failures after the file is open propagate
    /// as fatal; a partial output file is an acceptable degraded outcome,
    /// silent corruption is not.
    pub fn render(&self, records: &[ScanRecord]) -> Result<()> {
        debug_assert!(!records.is_empty(), "render called with no records");

        match &self.destination {
            Destination::Console => self.render_to(io::stdout().lock(), records),
            Destination::File(path) => {
                println!("Writing to file {}.....", path.display());
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file {}", path.display())
                })?;
                self.render_to(file, records)
            }
        }
    }

    /// Write records to a concrete sink in the configured format.
    fn render_to<W: Write>(&self, mut sink: W, records: &[ScanRecord]) -> Result<()> {
        match self.format {
            OutputFormat::Txt => {
                for line in self.text_lines(records) {
                    writeln!(sink, "{line}")?;
                }
                sink.flush()?;
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(sink);
                if self.verbose {
                    writer.write_record(DETAIL_HEADERS)?;
                    for details in Self::detailed(records) {
                        writer
                            .write_record(DETAIL_HEADERS.iter().map(|h| details.field(h)))?;
                    }
                } else {
                    writer.write_record(["Paths"])?;
                    for path in Self::bare_paths(records) {
                        writer.write_record([path.display().to_string()])?;
                    }
                }
                writer.flush()?;
            }
        }

        Ok(())
    }

    /// Compose the plain-text lines: banner + path list, or the table.
    fn text_lines(&self, records: &[ScanRecord]) -> Vec<String> {
        if self.verbose {
            return TableLayout::render(&Self::detailed(records));
        }

        let mut lines = vec![
            String::new(),
            PLAIN_BANNER.to_string(),
            PLAIN_DIVIDER.to_string(),
        ];
        lines.extend(
            Self::bare_paths(records)
                .iter()
                .map(|path| path.display().to_string()),
        );
        lines
    }

    /// Structured views over a record set known to be detailed.
    fn detailed(records: &[ScanRecord]) -> Vec<&EntryDetails> {
        records.iter().filter_map(ScanRecord::as_detailed).collect()
    }

    /// Path views over a record set known to be path-only.
    fn bare_paths(records: &[ScanRecord]) -> Vec<&PathBuf> {
        records
            .iter()
            .filter_map(ScanRecord::as_path_only)
            .collect()
    }
}
