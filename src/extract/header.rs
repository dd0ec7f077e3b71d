use super::patterns;
use super::types::RawRow;

/// Find the reporting-period header row: the first row with at least one
/// non-empty cell where every non-empty cell is a bare year label.
///
/// `None` means the table carries no period header and is not a statement;
/// callers skip it silently.
pub fn detect(rows: &[RawRow]) -> Option<usize> {
    rows.iter().position(|row| {
        let mut labels = row.cells.iter().filter(|c| !c.is_empty()).peekable();
        labels.peek().is_some() && labels.all(|c| patterns::is_year_label(c))
    })
}
