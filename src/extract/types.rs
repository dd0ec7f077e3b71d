use serde::{Deserialize, Serialize};

/// One typed table cell. Serializes untagged so the workbook side sees
/// `null`, a number, or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

/// One financial statement lifted out of a filing page.
///
/// Every row has exactly `columns.len()` cells; short rows are padded with
/// [`Cell::Empty`] during assembly. Row order matches the source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedStatement {
    pub name: String,
    /// Caller-supplied provenance, e.g. "ACME - 2019-12-31 - 10-K, p. 12".
    pub source: String,
    pub page: Option<u32>,
    /// Currency symbol consumed from the table's cells, or empty.
    pub currency: String,
    /// Caption/title rows above the period header, joined row text.
    pub pre_header_lines: Vec<String>,
    /// Annotation rows directly below the period header (units of measure).
    pub post_header_lines: Vec<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Statements keyed by table ordinal (position among all tables of the
/// document, stringified), in document order.
pub type Statements = Vec<(String, ExtractedStatement)>;

/// A table row reduced to trimmed text: the joined row text plus one entry
/// per th/td cell.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub text: String,
    pub cells: Vec<String>,
}

impl RawRow {
    /// True when every cell is empty, including the degenerate zero-cell row.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}
