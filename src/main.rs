//! # find-large-files
//!
//! A CLI tool that scans a directory tree and reports every file or
//! directory larger than a size threshold.
//!
//! Results come out as a bare path list or, in verbose mode, as structured
//! records with name, path, parent and size columns. Output goes to the
//! console or to a text/CSV file, and defaults can be persisted via
//! `~/.config/find-large-files/config.toml`.
//!
//! ## Usage
//!
//! ```bash
//! # Everything above 1 MB under the current directory
//! find-large-files
//!
//! # Everything above 2.5 GiB under /data, as a table
//! find-large-files /data --size 2.5 --unit GiB --verbose
//!
//! # Write a CSV report to ~/reports/large_files.csv
//! find-large-files /data -o file -t csv --store ~/reports
//! ```

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use find_large_files::{
    config::FileConfig, output::OutputRenderer, scanner::Scanner, units::format_magnitude,
};
use std::env;
use std::process::exit;

/// Entry point for the find-large-files application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and
/// printing any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function orchestrates the full pipeline: parse arguments, merge in
/// the config file, validate the scan root and store path, scan, print the
/// summary line, and render the results.
///
/// # Errors
///
/// Returns errors when the current working directory cannot be determined,
/// when the scan root or store path does not exist, or when the output file
/// cannot be written.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let file_config = load_config();
    let cwd = env::current_dir()?;

    let scan_options = args.scan_options(&file_config);
    let output_options = args.output_options(&file_config, &cwd);
    let root = args.scan_root(&cwd);

    if !root.exists() {
        bail!("Provided path does not exist: {}", root.display());
    }

    // The store path is validated even when output goes to the console; a
    // bad --store is a user error regardless of the selected target.
    if !output_options.store.exists() {
        bail!(
            "Provided store path does not exist: {}",
            output_options.store.display()
        );
    }

    let scanner = Scanner::new(scan_options);
    let records = scanner.scan(&root);

    println!(
        "Total Number of files larger than {} {}: {}",
        format_magnitude(scan_options.size),
        scan_options.unit,
        records.len()
    );

    if records.is_empty() {
        return Ok(());
    }

    let renderer = OutputRenderer::new(&output_options, scan_options.verbose);
    renderer.render(&records)
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# find-large-files configuration
# All values shown are their defaults. Uncomment and change as needed.

# Threshold magnitude; entries strictly larger than this are reported
# size = 1.0

# Threshold unit (KB, KiB, MB, MiB, GB, GiB, TB, TiB)
# unit = "MB"

# Decimal places for rendered sizes
# round = 2

# Produce structured multi-field records instead of bare paths
# verbose = false

[output]
# Output target (console, file)
# target = "console"

# Output format (txt, csv)
# file_type = "txt"

# Base name of the output file (no extension)
# file_name = "large_files"

# Directory to store the output file in (defaults to the working directory)
# store = "~/reports"
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_f64(val: Option<f64>, default: f64) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_usize(val: Option<usize>, default: usize) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let store_str = config.output.store.as_ref().map_or_else(
        || "(working directory)  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );

    format!(
        "\
size      = {size}
unit      = {unit}
round     = {round}
verbose   = {verbose}

[output]
target    = {target}
file_type = {file_type}
file_name = {file_name}
store     = {store}",
        size = show_f64(config.size, 1.0),
        unit = show_str(config.unit.as_deref(), "MB"),
        round = show_usize(config.round, 2),
        verbose = show_bool(config.verbose, false),
        target = show_str(config.output.target.as_deref(), "console"),
        file_type = show_str(config.output.file_type.as_deref(), "txt"),
        file_name = show_str(config.output.file_name.as_deref(), "large_files"),
        store = store_str,
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}
