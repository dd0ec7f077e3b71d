/// One header cell with its declared span.
#[derive(Debug, Clone)]
pub struct HeaderCell {
    pub text: String,
    /// Number of underlying columns the cell visually covers; 1 when the
    /// markup declares none.
    pub span: usize,
}

/// Two-phase column builder: collect the header-declared columns first, then
/// reconcile the width once against the widest observed data row.
#[derive(Debug, Default)]
pub struct ColumnBuilder {
    columns: Vec<String>,
}

impl ColumnBuilder {
    pub fn from_header(cells: &[HeaderCell]) -> Self {
        let mut columns = Vec::new();
        for cell in cells {
            columns.push(cell.text.clone());
            // A span of n covers n columns: the label plus n-1 unnamed ones,
            // resolved later by position only.
            for _ in 1..cell.span {
                columns.push(String::new());
            }
        }
        ColumnBuilder { columns }
    }

    /// Extend with unnamed columns until the list covers the widest data
    /// row. Saturates: an already-wider header is left alone, never
    /// truncated.
    pub fn reconcile(mut self, widest_row: usize) -> Vec<String> {
        let missing = widest_row.saturating_sub(self.columns.len());
        self.columns
            .extend(std::iter::repeat(String::new()).take(missing));
        self.columns
    }
}
