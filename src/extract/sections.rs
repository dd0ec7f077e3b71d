use super::types::{Cell, RawRow};
use super::values;

/// Rows of one table classified around the header row.
#[derive(Debug, Default)]
pub struct Segments {
    /// Caption/title rows above the period header, joined text.
    pub pre_header: Vec<String>,
    /// Annotation rows directly below the header, joined text.
    pub post_header: Vec<String>,
    /// Typed data rows; blank runs collapsed to one empty separator each.
    pub rows: Vec<Vec<Cell>>,
    /// First currency symbol consumed anywhere in the data rows.
    pub currency: Option<String>,
}

/// Classify every row of a table around the header at index `header`.
///
/// Rows above the header become pre-header lines. Below it, rows whose first
/// cell is empty are post-header annotations until the first row with a
/// non-empty first cell; from then on everything is data. Within the data
/// region a contiguous run of fully-empty rows emits exactly one separator.
pub fn split(rows: &[RawRow], header: usize) -> Segments {
    let mut segments = Segments::default();
    let mut in_data = false;
    let mut blank_run = false;

    for (i, row) in rows.iter().enumerate() {
        if i < header {
            segments.pre_header.push(row.text.clone());
            continue;
        }
        if i == header {
            continue;
        }

        let first_cell_empty = row.cells.first().map_or(true, |c| c.is_empty());
        if !in_data {
            if first_cell_empty {
                segments.post_header.push(row.text.clone());
                continue;
            }
            in_data = true;
        }

        if row.is_blank() {
            if !blank_run {
                // One separator per run, padded to full width at assembly.
                segments.rows.push(Vec::new());
                blank_run = true;
            }
            continue;
        }
        blank_run = false;

        let parsed = values::parse_row(&row.cells);
        if segments.currency.is_none() {
            segments.currency = parsed.currency;
        }
        segments.rows.push(parsed.cells);
    }

    segments
}
