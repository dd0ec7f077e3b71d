pub mod columns;
pub mod header;
pub mod metadata;
pub mod node;
pub mod patterns;
pub mod sections;
pub mod types;
pub mod values;

use anyhow::{anyhow, Result};
use log::{debug, warn};
use scraper::Html;

use self::columns::{ColumnBuilder, HeaderCell};
use self::node::{DocNode, NodeKind};
use self::types::{Cell, ExtractedStatement, RawRow, Statements};

/// Extract every statement table from a parsed filing page.
///
/// Tables are visited in document order and keyed by their ordinal among all
/// tables of the document. Tables without a reporting-period header row are
/// skipped silently; an unexpected failure in one table is logged and never
/// aborts the rest.
pub fn extract_statements(document: &Html, title: &str) -> Statements {
    let tables = node::tables(document);
    let total = tables.len();
    let mut statements = Vec::new();

    for (ordinal, table) in tables.iter().enumerate() {
        match extract_table(table) {
            Ok(Some(mut statement)) => {
                statement.source = source_label(title, statement.page);
                debug!("converted table {} out of a possible {}", ordinal, total);
                statements.push((ordinal.to_string(), statement));
            }
            Ok(None) => debug!("table {}: no period header row, skipping", ordinal),
            Err(e) => warn!("table {}: {:#}, skipping", ordinal, e),
        }
    }

    statements
}

/// Provenance label handed to the workbook side: the caller's document title
/// plus the printed page when one resolved.
pub fn source_label(title: &str, page: Option<u32>) -> String {
    match page {
        Some(page) => format!("{}, p. {}", title, page),
        None => title.to_string(),
    }
}

/// Extract a single table into a statement. `Ok(None)` means the table
/// carries no period header row and is not a statement.
pub fn extract_table<N: DocNode>(table: &N) -> Result<Option<ExtractedStatement>> {
    let row_nodes = table.matching_descendants(NodeKind::Row);
    let rows: Vec<RawRow> = row_nodes
        .iter()
        .map(|row| RawRow {
            text: row.text(),
            cells: row
                .matching_descendants(NodeKind::Cell)
                .iter()
                .map(|cell| cell.text())
                .collect(),
        })
        .collect();

    let Some(header) = header::detect(&rows) else {
        return Ok(None);
    };

    let segments = sections::split(&rows, header);

    let header_cells: Vec<HeaderCell> = row_nodes
        .get(header)
        .ok_or_else(|| anyhow!("header row {} out of range", header))?
        .matching_descendants(NodeKind::Cell)
        .iter()
        .map(|cell| HeaderCell {
            text: cell.text(),
            span: cell
                .attr("colspan")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        })
        .collect();

    let widest = segments.rows.iter().map(Vec::len).max().unwrap_or(0);
    let columns = ColumnBuilder::from_header(&header_cells).reconcile(widest);

    let mut rows = segments.rows;
    for row in &mut rows {
        row.resize(columns.len(), Cell::Empty);
    }

    let mut name = metadata::statement_name(table);
    if let Some(symbol) = &segments.currency {
        name.push_str(&format!(" ({})", symbol));
    }

    Ok(Some(ExtractedStatement {
        name,
        source: String::new(),
        page: metadata::page_number(table),
        currency: segments.currency.unwrap_or_default(),
        pre_header_lines: segments.pre_header,
        post_header_lines: segments.post_header,
        columns,
        rows,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_label_appends_the_resolved_page() {
        assert_eq!(
            source_label("ACME - 2019-12-31 - 10-K", Some(12)),
            "ACME - 2019-12-31 - 10-K, p. 12"
        );
        assert_eq!(
            source_label("ACME - 2019-12-31 - 10-K", None),
            "ACME - 2019-12-31 - 10-K"
        );
    }
}
