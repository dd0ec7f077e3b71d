use ego_tree::NodeRef;
use scraper::{Html, Node};

use super::patterns;

/// Node kinds the extraction heuristics care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Table,
    Row,
    Cell,
    Bold,
    Rule,
    Paragraph,
}

/// Capabilities the core needs from a markup tree.
///
/// The extraction modules depend only on this trait; [`HtmlNode`] adapts
/// scraper's tree to it. The tree is never mutated.
pub trait DocNode: Sized {
    /// Concatenated descendant text, whitespace-collapsed and trimmed.
    fn text(&self) -> String;

    fn attr(&self, name: &str) -> Option<String>;

    /// Matching descendants in document order, excluding the node itself.
    fn matching_descendants(&self, kind: NodeKind) -> Vec<Self>;

    /// Nearest following match in document order, descendants included.
    fn next_matching(&self, kind: NodeKind) -> Option<Self>;

    /// All preceding matches, nearest first (reverse document order).
    fn preceding(&self, kind: NodeKind) -> Vec<Self>;
}

/// Adapter over scraper's immutable HTML tree.
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a> {
    node: NodeRef<'a, Node>,
}

/// Tables of a parsed document, in document order.
pub fn tables(document: &Html) -> Vec<HtmlNode<'_>> {
    document
        .select(&patterns::TABLES)
        .map(|element| HtmlNode { node: *element })
        .collect()
}

fn matches_kind(node: &NodeRef<'_, Node>, kind: NodeKind) -> bool {
    let Some(element) = node.value().as_element() else {
        return false;
    };
    match kind {
        NodeKind::Table => element.name() == "table",
        NodeKind::Row => element.name() == "tr",
        NodeKind::Cell => element.name() == "th" || element.name() == "td",
        NodeKind::Bold => element.name() == "b",
        NodeKind::Rule => element.name() == "hr",
        NodeKind::Paragraph => element.name() == "p",
    }
}

/// Pre-order successor: first child, else the next sibling of the nearest
/// ancestor-or-self that has one.
fn pre_order_next<'a>(node: NodeRef<'a, Node>) -> Option<NodeRef<'a, Node>> {
    if let Some(child) = node.first_child() {
        return Some(child);
    }
    let mut current = node;
    loop {
        if let Some(sibling) = current.next_sibling() {
            return Some(sibling);
        }
        current = current.parent()?;
    }
}

/// Pre-order predecessor: deepest last descendant of the previous sibling,
/// else the parent.
fn pre_order_prev<'a>(node: NodeRef<'a, Node>) -> Option<NodeRef<'a, Node>> {
    let Some(sibling) = node.prev_sibling() else {
        return node.parent();
    };
    let mut current = sibling;
    while let Some(child) = current.last_child() {
        current = child;
    }
    Some(current)
}

impl<'a> DocNode for HtmlNode<'a> {
    fn text(&self) -> String {
        let raw: String = self
            .node
            .descendants()
            .filter_map(|n| n.value().as_text().map(|t| &**t))
            .collect();
        patterns::WHITESPACE
            .replace_all(&raw, " ")
            .trim()
            .to_string()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.node
            .value()
            .as_element()
            .and_then(|element| element.attr(name))
            .map(str::to_string)
    }

    fn matching_descendants(&self, kind: NodeKind) -> Vec<Self> {
        self.node
            .descendants()
            .skip(1)
            .filter(|n| matches_kind(n, kind))
            .map(|node| HtmlNode { node })
            .collect()
    }

    fn next_matching(&self, kind: NodeKind) -> Option<Self> {
        let mut current = pre_order_next(self.node)?;
        loop {
            if matches_kind(&current, kind) {
                return Some(HtmlNode { node: current });
            }
            current = pre_order_next(current)?;
        }
    }

    fn preceding(&self, kind: NodeKind) -> Vec<Self> {
        let mut found = Vec::new();
        let mut current = self.node;
        while let Some(prev) = pre_order_prev(current) {
            if matches_kind(&prev, kind) {
                found.push(HtmlNode { node: prev });
            }
            current = prev;
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_collapsed_and_trimmed() {
        let document = Html::parse_document("<table><tr><td>  1,234\n   </td></tr></table>");
        let table = tables(&document)[0];
        let cells = table.matching_descendants(NodeKind::Cell);
        assert_eq!(cells[0].text(), "1,234");
        assert_eq!(table.text(), "1,234");
    }

    #[test]
    fn attrs_are_looked_up_on_elements() {
        let document =
            Html::parse_document("<table><tr><td colspan=\"3\">2019</td></tr></table>");
        let cell = tables(&document)[0].matching_descendants(NodeKind::Cell)[0];
        assert_eq!(cell.attr("colspan").as_deref(), Some("3"));
        assert_eq!(cell.attr("rowspan"), None);
    }

    #[test]
    fn preceding_walks_in_reverse_document_order() {
        let document =
            Html::parse_document("<p>one</p><p>two</p><table></table><p>after</p>");
        let table = tables(&document)[0];
        let texts: Vec<String> = table
            .preceding(NodeKind::Paragraph)
            .iter()
            .map(|p| p.text())
            .collect();
        assert_eq!(texts, vec!["two", "one"]);
    }

    #[test]
    fn next_matching_finds_the_nearest_follower() {
        let document = Html::parse_document("<hr/><table></table><p>x</p><hr id=\"a\"/><hr/>");
        let table = tables(&document)[0];
        let rule = table.next_matching(NodeKind::Rule).unwrap();
        assert_eq!(rule.attr("id").as_deref(), Some("a"));
        assert!(table.next_matching(NodeKind::Table).is_none());
    }

    #[test]
    fn rows_of_nested_tables_are_descendants() {
        let document = Html::parse_document(
            "<table><tr><td><table><tr><td>inner</td></tr></table></td></tr></table>",
        );
        let outer = tables(&document)[0];
        assert_eq!(outer.matching_descendants(NodeKind::Row).len(), 2);
    }
}
