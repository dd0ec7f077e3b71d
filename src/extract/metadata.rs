use super::node::{DocNode, NodeKind};

/// Printed page number for a table, when one can be resolved.
///
/// Filing pages end with a horizontal rule preceded by a page-number
/// paragraph. When the paragraph just before the next rule after the table
/// is purely numeric, that is the printed page. Otherwise fall back to a
/// 1-based ordinal from the count of rules anywhere before the table, or
/// `None` when the document has no rules at all.
pub fn page_number<N: DocNode>(table: &N) -> Option<u32> {
    if let Some(page) = printed_page(table) {
        return Some(page);
    }
    let rules = table.preceding(NodeKind::Rule).len();
    if rules > 0 {
        Some(rules as u32)
    } else {
        None
    }
}

fn printed_page<N: DocNode>(table: &N) -> Option<u32> {
    let rule = table.next_matching(NodeKind::Rule)?;
    let text = rule
        .preceding(NodeKind::Paragraph)
        .into_iter()
        .map(|p| p.text())
        .find(|t| !t.is_empty())?;
    if text.chars().all(|c| c.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

/// Display name: nearest preceding bold caption, skipping empty text and
/// bracketed annotations like "(unaudited)". Empty when no caption exists.
pub fn statement_name<N: DocNode>(table: &N) -> String {
    table
        .preceding(NodeKind::Bold)
        .into_iter()
        .map(|b| b.text())
        .find(|t| !t.is_empty() && !(t.starts_with('(') && t.ends_with(')')))
        .unwrap_or_default()
}
