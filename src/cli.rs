//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their
//! validation using the [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that
//! config-file values act as defaults that CLI arguments can override
//! (layered config), plus the process working directory as the final
//! fallback for path-shaped options.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use find_large_files::config::file::{FileConfig, expand_tilde};
use find_large_files::config::{OutputFormat, OutputOptions, OutputTarget, ScanOptions};
use find_large_files::units::SizeUnit;

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file
/// values act as defaults when the corresponding CLI argument is not
/// provided.
#[derive(Parser)]
#[command(name = "find-large-files")]
#[command(
    about = "Find files and directories larger than a size threshold under a provided path"
)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// The path to scan
    ///
    /// Defaults to the current directory when not specified. Must exist;
    /// validation happens before any scanning starts.
    #[arg()]
    path: Option<PathBuf>,

    /// Threshold size; entries strictly larger than this are listed
    ///
    /// The magnitude is converted to bytes using the configured unit.
    #[arg(short = 's', long)]
    size: Option<f64>,

    /// Size unit used for the threshold and all rendered sizes
    #[arg(short = 'u', long, value_enum)]
    unit: Option<SizeUnit>,

    /// Output target: print to the console or write to a file
    #[arg(short = 'o', long, value_enum)]
    output: Option<OutputTarget>,

    /// Output format when writing to a file (or console)
    ///
    /// - txt: a plain path list, or an aligned table with --verbose
    /// - csv: a single Paths column, or one column per field with --verbose
    #[arg(short = 't', long, value_enum)]
    file_type: Option<OutputFormat>,

    /// Base name (no extension) of the output file
    #[arg(short = 'n', long)]
    file_name: Option<String>,

    /// Directory (or file) to store the output file at
    ///
    /// Must exist; an existing output file at the resolved location is
    /// overwritten with a warning.
    #[arg(long)]
    store: Option<PathBuf>,

    /// Number of decimal digits for rendered sizes (0 for integer values)
    #[arg(short = 'r', long)]
    round: Option<usize>,

    /// Produce structured multi-field records instead of bare paths
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    /// Resolve the scan root from the CLI or the given default (cwd).
    #[must_use]
    pub fn scan_root(&self, default: &Path) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| default.to_path_buf())
    }

    /// Extract scan options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > hardcoded default.
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        ScanOptions {
            size: self.size.or(config.size).unwrap_or(1.0),
            unit: self
                .unit
                .or_else(|| {
                    config
                        .unit
                        .as_ref()
                        .and_then(|s| SizeUnit::from_str(s, true).ok())
                })
                .unwrap_or_default(),
            precision: self.round.or(config.round).unwrap_or(2),
            verbose: self.verbose || config.verbose.unwrap_or(false),
        }
    }

    /// Extract output options from CLI args and config file.
    ///
    /// The store path defaults to `default_store` (the current working
    /// directory, resolved once at startup); values from the config file
    /// get tilde expansion applied.
    #[must_use]
    pub fn output_options(&self, config: &FileConfig, default_store: &Path) -> OutputOptions {
        OutputOptions {
            target: self
                .output
                .or_else(|| {
                    config
                        .output
                        .target
                        .as_ref()
                        .and_then(|s| OutputTarget::from_str(s, true).ok())
                })
                .unwrap_or_default(),
            format: self
                .file_type
                .or_else(|| {
                    config
                        .output
                        .file_type
                        .as_ref()
                        .and_then(|s| OutputFormat::from_str(s, true).ok())
                })
                .unwrap_or_default(),
            file_name: self
                .file_name
                .clone()
                .or_else(|| config.output.file_name.clone())
                .unwrap_or_else(|| "large_files".to_string()),
            store: self
                .store
                .clone()
                .or_else(|| config.output.store.as_ref().map(|p| expand_tilde(p)))
                .unwrap_or_else(|| default_store.to_path_buf()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use find_large_files::config::file::FileOutputConfig;

    fn cwd() -> PathBuf {
        PathBuf::from("/work")
    }

    #[test]
    fn test_default_values() {
        let args = Cli::parse_from(["find-large-files"]);
        let config = FileConfig::default();

        assert_eq!(args.scan_root(&cwd()), cwd());

        let scan_opts = args.scan_options(&config);
        assert_eq!(scan_opts.size, 1.0);
        assert_eq!(scan_opts.unit, SizeUnit::Mb);
        assert_eq!(scan_opts.precision, 2);
        assert!(!scan_opts.verbose);

        let output_opts = args.output_options(&config, &cwd());
        assert_eq!(output_opts.target, OutputTarget::Console);
        assert_eq!(output_opts.format, OutputFormat::Txt);
        assert_eq!(output_opts.file_name, "large_files");
        assert_eq!(output_opts.store, cwd());
    }

    #[test]
    fn test_threshold_arguments() {
        let config = FileConfig::default();
        let args = Cli::parse_from(["find-large-files", "-s", "2.5", "-u", "GiB", "-r", "0"]);
        let scan_opts = args.scan_options(&config);

        assert_eq!(scan_opts.size, 2.5);
        assert_eq!(scan_opts.unit, SizeUnit::Gib);
        assert_eq!(scan_opts.precision, 0);
    }

    #[test]
    fn test_all_units_parse() {
        let config = FileConfig::default();
        let cases = [
            ("KB", SizeUnit::Kb),
            ("KiB", SizeUnit::Kib),
            ("MB", SizeUnit::Mb),
            ("MiB", SizeUnit::Mib),
            ("GB", SizeUnit::Gb),
            ("GiB", SizeUnit::Gib),
            ("TB", SizeUnit::Tb),
            ("TiB", SizeUnit::Tib),
        ];

        for (input, expected) in cases {
            let args = Cli::parse_from(["find-large-files", "--unit", input]);
            assert_eq!(args.scan_options(&config).unit, expected);
        }
    }

    #[test]
    fn test_invalid_unit_rejected() {
        assert!(Cli::try_parse_from(["find-large-files", "--unit", "XB"]).is_err());
    }

    #[test]
    fn test_output_arguments() {
        let config = FileConfig::default();
        let args = Cli::parse_from([
            "find-large-files",
            "--output",
            "file",
            "--file-type",
            "csv",
            "--file-name",
            "report",
            "--store",
            "/tmp/out",
        ]);
        let output_opts = args.output_options(&config, &cwd());

        assert_eq!(output_opts.target, OutputTarget::File);
        assert_eq!(output_opts.format, OutputFormat::Csv);
        assert_eq!(output_opts.file_name, "report");
        assert_eq!(output_opts.store, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_verbose_flag() {
        let config = FileConfig::default();

        let args = Cli::parse_from(["find-large-files", "--verbose"]);
        assert!(args.scan_options(&config).verbose);

        let args_short = Cli::parse_from(["find-large-files", "-v"]);
        assert!(args_short.scan_options(&config).verbose);
    }

    #[test]
    fn test_positional_path() {
        let args = Cli::parse_from(["find-large-files", "/data"]);
        assert_eq!(args.scan_root(&cwd()), PathBuf::from("/data"));
    }

    #[test]
    fn test_config_values_used_when_cli_absent() {
        let args = Cli::parse_from(["find-large-files"]);
        let config = FileConfig {
            size: Some(50.0),
            unit: Some("MiB".to_string()),
            round: Some(1),
            verbose: Some(true),
            output: FileOutputConfig {
                target: Some("file".to_string()),
                file_type: Some("csv".to_string()),
                file_name: Some("report".to_string()),
                store: Some(PathBuf::from("/srv/reports")),
            },
        };

        let scan_opts = args.scan_options(&config);
        assert_eq!(scan_opts.size, 50.0);
        assert_eq!(scan_opts.unit, SizeUnit::Mib);
        assert_eq!(scan_opts.precision, 1);
        assert!(scan_opts.verbose);

        let output_opts = args.output_options(&config, &cwd());
        assert_eq!(output_opts.target, OutputTarget::File);
        assert_eq!(output_opts.format, OutputFormat::Csv);
        assert_eq!(output_opts.file_name, "report");
        assert_eq!(output_opts.store, PathBuf::from("/srv/reports"));
    }

    #[test]
    fn test_cli_overrides_config_values() {
        let args = Cli::parse_from([
            "find-large-files",
            "-s",
            "100",
            "-u",
            "GB",
            "--file-type",
            "txt",
        ]);
        let config = FileConfig {
            size: Some(50.0),
            unit: Some("MiB".to_string()),
            output: FileOutputConfig {
                file_type: Some("csv".to_string()),
                ..FileOutputConfig::default()
            },
            ..FileConfig::default()
        };

        let scan_opts = args.scan_options(&config);
        assert_eq!(scan_opts.size, 100.0);
        assert_eq!(scan_opts.unit, SizeUnit::Gb);

        let output_opts = args.output_options(&config, &cwd());
        assert_eq!(output_opts.format, OutputFormat::Txt);
    }

    #[test]
    fn test_config_unit_case_insensitive() {
        let args = Cli::parse_from(["find-large-files"]);
        let config = FileConfig {
            unit: Some("gib".to_string()),
            ..FileConfig::default()
        };

        assert_eq!(args.scan_options(&config).unit, SizeUnit::Gib);
    }

    #[test]
    fn test_invalid_config_unit_falls_back_to_default() {
        let args = Cli::parse_from(["find-large-files"]);
        let config = FileConfig {
            unit: Some("parsecs".to_string()),
            ..FileConfig::default()
        };

        assert_eq!(args.scan_options(&config).unit, SizeUnit::Mb);
    }

    #[test]
    fn test_config_store_gets_tilde_expansion() {
        let args = Cli::parse_from(["find-large-files"]);
        let config = FileConfig {
            output: FileOutputConfig {
                store: Some(PathBuf::from("~/reports")),
                ..FileOutputConfig::default()
            },
            ..FileConfig::default()
        };

        let output_opts = args.output_options(&config, &cwd());
        if let Some(home) = dirs::home_dir() {
            assert_eq!(output_opts.store, home.join("reports"));
        }
    }

    #[test]
    fn test_config_verbose_or_cli_flag() {
        let config_verbose = FileConfig {
            verbose: Some(true),
            ..FileConfig::default()
        };

        let args = Cli::parse_from(["find-large-files"]);
        assert!(args.scan_options(&config_verbose).verbose);

        let args_flag = Cli::parse_from(["find-large-files", "-v"]);
        assert!(args_flag.scan_options(&FileConfig::default()).verbose);
    }
}
