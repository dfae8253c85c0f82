//! Fixed-width table rendering for verbose text output.
//!
//! This module turns a list of structured records into an aligned box
//! table drawn with `+`, `-` and `|`:
//!
//! ```text
//! +------+------+
//! | Col1 | Col2 |
//! +------+------+
//! | Data | Data |
//! +------+------+
//! ```
//!
//! Column widths are computed once over the fully materialized record set,
//! so all records must be collected before the first line is emitted.

use crate::record::{DETAIL_HEADERS, EntryDetails};

/// Column layout for one render pass.
///
/// Holds one width per header in [`DETAIL_HEADERS`] order. A width is the
/// longest rendered value in that column, including the header text itself,
/// so headers are never truncated or misaligned.
#[derive(Debug)]
pub struct TableLayout {
    /// Per-column content widths, parallel to [`DETAIL_HEADERS`]
    widths: Vec<usize>,
}

impl TableLayout {
    /// Compute column widths from the complete record set.
    #[must_use]
    pub fn compute(records: &[&EntryDetails]) -> Self {
        let widths = DETAIL_HEADERS
            .iter()
            .map(|header| {
                records
                    .iter()
                    .map(|record| record.field(header).len())
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        Self { widths }
    }

    /// Per-column content widths in header order.
    #[must_use]
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Render a divider line: `+` followed by `width + 2` dashes per column.
    #[must_use]
    pub fn divider(&self) -> String {
        let mut line = String::new();
        for width in &self.widths {
            line.push('+');
            line.push_str(&"-".repeat(width + 2));
        }
        line.push('+');
        line
    }

    /// Render the header line with each header centered within its column.
    ///
    /// Each cell spans `width + 2` characters between the framing `|`s; the
    /// leftover padding is split evenly with the extra space on the right.
    #[must_use]
    pub fn header_line(&self) -> String {
        let mut line = String::new();
        for (header, width) in DETAIL_HEADERS.iter().zip(&self.widths) {
            let total = width + 2;
            let leading = (total - header.len()) / 2;
            let trailing = total - header.len() - leading;

            line.push('|');
            line.push_str(&" ".repeat(leading));
            line.push_str(header);
            line.push_str(&" ".repeat(trailing));
        }
        line.push('|');
        line
    }

    /// Render one data line, left-aligning each value within its column.
    #[must_use]
    pub fn data_line(&self, record: &EntryDetails) -> String {
        let mut line = String::new();
        for (header, width) in DETAIL_HEADERS.iter().zip(&self.widths) {
            let value = record.field(header);
            line.push_str("| ");
            line.push_str(value);
            line.push_str(&" ".repeat(width - value.len() + 1));
        }
        line.push('|');
        line
    }

    /// Render the complete table: divider, header line, divider, one data
    /// line per record, divider.
    ///
    /// Callers must not invoke this with an empty record set; the output
    /// pipeline skips rendering entirely when nothing matched.
    #[must_use]
    pub fn render(records: &[&EntryDetails]) -> Vec<String> {
        debug_assert!(!records.is_empty(), "table rendering needs records");

        let layout = Self::compute(records);
        let divider = layout.divider();

        let mut lines = vec![divider.clone(), layout.header_line(), divider.clone()];
        lines.extend(records.iter().map(|record| layout.data_line(record)));
        lines.push(divider);
        lines
    }
}
