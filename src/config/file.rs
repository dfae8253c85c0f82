//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/find-large-files/config.toml` (or the
//! platform-specific equivalent). Configuration file values serve as
//! defaults that can be overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! size = 100.0
//! unit = "MiB"
//! round = 1
//! verbose = true
//!
//! [output]
//! target = "file"
//! file_type = "csv"
//! file_name = "large_files"
//! store = "~/reports"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in
/// the config file and apply layered configuration (CLI > config file >
/// defaults).
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Default threshold magnitude
    pub size: Option<f64>,

    /// Default threshold unit (e.g. `"MB"`, `"GiB"`)
    pub unit: Option<String>,

    /// Default number of decimal places for rendered sizes
    pub round: Option<usize>,

    /// Whether to produce structured records by default
    pub verbose: Option<bool>,

    /// Output options
    #[serde(default)]
    pub output: FileOutputConfig,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileOutputConfig {
    /// Output target (`"console"` or `"file"`)
    pub target: Option<String>,

    /// Output format (`"txt"` or `"csv"`)
    pub file_type: Option<String>,

    /// Base name of the output file (no extension)
    pub file_name: Option<String>,

    /// Directory or file path the output is stored at
    pub store: Option<PathBuf>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at
    /// `<config_dir>/find-large-files/config.toml`, where `<config_dir>` is
    /// the platform-specific configuration directory (e.g., `~/.config` on
    /// Linux/macOS, `%APPDATA%` on Windows).
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("find-large-files").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty)
    /// configuration. If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}
