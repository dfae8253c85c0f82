//! Size unit conversion utilities.
//!
//! This module defines the closed set of size units the threshold can be
//! expressed in, and the conversions between raw byte counts and
//! human-readable size strings.

use std::fmt;

use clap::ValueEnum;

/// Enumeration of supported size units.
///
/// Decimal units (KB, MB, GB, TB) use powers of 1000; binary units
/// (KiB, MiB, GiB, TiB) use powers of 1024.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Default)]
pub enum SizeUnit {
    /// Kilobyte (1000 bytes)
    #[value(name = "KB")]
    Kb,

    /// Kibibyte (1024 bytes)
    #[value(name = "KiB")]
    Kib,

    /// Megabyte (1000² bytes)
    #[default]
    #[value(name = "MB")]
    Mb,

    /// Mebibyte (1024² bytes)
    #[value(name = "MiB")]
    Mib,

    /// Gigabyte (1000³ bytes)
    #[value(name = "GB")]
    Gb,

    /// Gibibyte (1024³ bytes)
    #[value(name = "GiB")]
    Gib,

    /// Terabyte (1000⁴ bytes)
    #[value(name = "TB")]
    Tb,

    /// Tebibyte (1024⁴ bytes)
    #[value(name = "TiB")]
    Tib,
}

impl SizeUnit {
    /// Byte multiplier for this unit.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Kb => 1_000.0,
            Self::Kib => 1_024.0,
            Self::Mb => 1_000_000.0,
            Self::Mib => 1_048_576.0,
            Self::Gb => 1_000_000_000.0,
            Self::Gib => 1_073_741_824.0,
            Self::Tb => 1_000_000_000_000.0,
            Self::Tib => 1_099_511_627_776.0,
        }
    }

    /// The suffix used when rendering sizes (e.g. `"MiB"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kb => "KB",
            Self::Kib => "KiB",
            Self::Mb => "MB",
            Self::Mib => "MiB",
            Self::Gb => "GB",
            Self::Gib => "GiB",
            Self::Tb => "TB",
            Self::Tib => "TiB",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a threshold magnitude and unit into a byte count.
///
/// The result stays a float so fractional thresholds like `0.5 MB` compare
/// exactly as specified (`size > threshold`, strict).
#[must_use]
pub fn threshold_in_bytes(size: f64, unit: SizeUnit) -> f64 {
    size * unit.multiplier()
}

/// Format a raw byte count as a human-readable size in the given unit.
///
/// The value is divided by the unit's multiplier and rendered with
/// `precision` decimal places followed by the unit suffix. Rounding is the
/// round-half-to-even behavior of Rust's fixed-precision float formatting.
/// A `precision` of 0 yields an integer-valued display (still suffixed).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn human_readable_size(bytes: u64, unit: SizeUnit, precision: usize) -> String {
    let converted = bytes as f64 / unit.multiplier();
    format!("{converted:.precision$} {unit}")
}

/// Format a threshold magnitude for the summary line.
///
/// Integral magnitudes keep one decimal (`1.0`, not `1`) so the summary
/// always echoes the threshold the way it was given.
#[must_use]
pub fn format_magnitude(size: f64) -> String {
    if size.fract() == 0.0 {
        format!("{size:.1}")
    } else {
        format!("{size}")
    }
}
