//! Scanning configuration for directory traversal.

use crate::units::SizeUnit;

/// Resolved configuration for one scan.
///
/// Constructed once from CLI arguments layered over the config file, then
/// passed to the scanner unchanged.
#[derive(Clone, Copy, Debug)]
pub struct ScanOptions {
    /// Threshold magnitude; entries strictly larger than
    /// `size * unit.multiplier()` bytes are reported
    pub size: f64,

    /// Unit the threshold (and all rendered sizes) are expressed in
    pub unit: SizeUnit,

    /// Decimal places for human-readable sizes in verbose output
    pub precision: usize,

    /// Whether to produce structured records instead of bare paths
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_options_copy() {
        let original = ScanOptions {
            size: 1.5,
            unit: SizeUnit::Gib,
            precision: 3,
            verbose: true,
        };
        let copied = original;

        assert_eq!(original.size, copied.size);
        assert_eq!(original.unit, copied.unit);
        assert_eq!(original.precision, copied.precision);
        assert_eq!(original.verbose, copied.verbose);
    }
}
