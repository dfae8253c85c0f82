//! Core library for the `find-large-files` CLI.
//!
//! Scans a directory tree and reports every file or directory whose size
//! exceeds a user-specified threshold, as bare paths or as structured
//! records rendered to an aligned text table or CSV, on the console or in
//! a file.
//!
//! ## Main Parts
//!
//! - [`units`] - Size units and byte conversions
//! - [`scanner`] - Tree traversal and threshold filtering
//! - [`record`] - Scan result records (bare path or structured)
//! - [`table`] - Fixed-width table layout for verbose text output
//! - [`output`] - Render-mode dispatch and store-path resolution
//! - [`config`] - Resolved options and the TOML config file layer

pub mod config;
pub mod output;
pub mod record;
pub mod scanner;
pub mod table;
pub mod units;

pub use config::{OutputOptions, ScanOptions};
