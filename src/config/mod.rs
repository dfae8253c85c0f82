//! Configuration types resolved from the CLI and the config file.
//!
//! ## Main Parts
//!
//! - [`ScanOptions`] - Threshold, unit, precision and verbosity for a scan
//! - [`OutputOptions`] - Output target, format, file name and store path
//! - [`FileConfig`] - Optional values loaded from the TOML config file
//!
//! All defaults that were path-shaped in earlier versions (output store,
//! scan root) resolve against the process current working directory,
//! computed once at startup and passed down explicitly.

pub mod file;
pub mod output;
pub mod scan;

pub use file::FileConfig;
pub use output::{OutputFormat, OutputOptions, OutputTarget};
pub use scan::ScanOptions;
