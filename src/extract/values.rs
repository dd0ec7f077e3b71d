use super::patterns;
use super::types::Cell;

/// Tokens that continue the previous cell's value when the markup split a
/// number across adjacent cells.
fn is_continuation(text: &str) -> bool {
    matches!(text, ")" | "%" | ")%")
}

/// One row of cell texts parsed into typed values.
#[derive(Debug, Default, PartialEq)]
pub struct ParsedRow {
    pub cells: Vec<Cell>,
    /// First currency symbol consumed from this row, if any.
    pub currency: Option<String>,
}

/// Parse one row of raw cell texts.
///
/// Pure function of the inputs. Output slots stay positionally aligned to
/// the source cells, except that currency symbols and merged continuation
/// tokens give up their slots. A continuation token with no eligible prior
/// slot (start of row, or after an empty/consumed cell) becomes an isolated
/// literal instead of merging.
pub fn parse_row(values: &[String]) -> ParsedRow {
    let mut slots: Vec<String> = Vec::with_capacity(values.len());
    let mut currency = None;
    // Slot written by the immediately preceding source cell. Merge targets
    // are only ever one cell back; a merged-into slot is not itself a target.
    let mut prev_slot: Option<usize> = None;

    for value in values {
        if value.is_empty() {
            slots.push(String::new());
            prev_slot = None;
        } else if patterns::CURRENCY.is_match(value) {
            if currency.is_none() {
                currency = Some(value.clone());
            }
            prev_slot = None;
        } else if is_continuation(value) {
            match prev_slot.take() {
                Some(i) => slots[i].push_str(value),
                None => {
                    slots.push(value.clone());
                    prev_slot = Some(slots.len() - 1);
                }
            }
        } else {
            slots.push(value.clone());
            prev_slot = Some(slots.len() - 1);
        }
    }

    let cells = slots.iter().map(|slot| type_slot(slot)).collect();
    ParsedRow { cells, currency }
}

/// Type a merged slot: parenthesized values are negative, thousands
/// separators are stripped, a lone long dash means nil. Anything that still
/// fails to parse stays as its literal text.
fn type_slot(slot: &str) -> Cell {
    if slot.is_empty() {
        return Cell::Empty;
    }
    let mut text = slot.to_string();
    if text.starts_with('(') && text.ends_with(')') {
        text = format!("-{}", &text[1..text.len() - 1]);
    }
    let text = text.replace(',', "");
    if text == "—" || text == "–" {
        return Cell::Number(0.0);
    }
    match text.parse::<f64>() {
        Ok(n) => Cell::Number(n),
        Err(_) => Cell::Text(slot.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> ParsedRow {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        parse_row(&values)
    }

    #[test]
    fn parenthesized_number_is_negative() {
        assert_eq!(row(&["(1,234)"]).cells, vec![Cell::Number(-1234.0)]);
    }

    #[test]
    fn thousands_separators_are_stripped() {
        assert_eq!(row(&["1,234"]).cells, vec![Cell::Number(1234.0)]);
    }

    #[test]
    fn long_dash_is_zero() {
        assert_eq!(row(&["—"]).cells, vec![Cell::Number(0.0)]);
        assert_eq!(row(&["–"]).cells, vec![Cell::Number(0.0)]);
    }

    #[test]
    fn empty_cell_stays_empty() {
        assert_eq!(row(&[""]).cells, vec![Cell::Empty]);
    }

    #[test]
    fn currency_cell_is_consumed_and_recorded() {
        let parsed = row(&["$", "1,234"]);
        assert_eq!(parsed.currency.as_deref(), Some("$"));
        assert_eq!(parsed.cells, vec![Cell::Number(1234.0)]);
    }

    #[test]
    fn first_currency_symbol_wins() {
        let parsed = row(&["$", "1", "£", "2"]);
        assert_eq!(parsed.currency.as_deref(), Some("$"));
        assert_eq!(parsed.cells, vec![Cell::Number(1.0), Cell::Number(2.0)]);
    }

    #[test]
    fn split_closing_paren_merges_into_previous_cell() {
        assert_eq!(row(&["(1,234", ")"]).cells, vec![Cell::Number(-1234.0)]);
    }

    #[test]
    fn split_percent_suffix_merges_as_text() {
        assert_eq!(
            row(&["12.5", "%"]).cells,
            vec![Cell::Text("12.5%".to_string())]
        );
    }

    #[test]
    fn continuation_with_no_prior_slot_is_a_literal() {
        assert_eq!(
            row(&[")", "7"]).cells,
            vec![Cell::Text(")".to_string()), Cell::Number(7.0)]
        );
    }

    #[test]
    fn continuation_after_empty_cell_does_not_merge() {
        assert_eq!(
            row(&["1,234", "", ")"]).cells,
            vec![
                Cell::Number(1234.0),
                Cell::Empty,
                Cell::Text(")".to_string()),
            ]
        );
    }

    #[test]
    fn merged_slot_is_not_a_target_for_the_next_token() {
        // "(5" + ")" closes the slot; the trailing "%" stands alone.
        assert_eq!(
            row(&["(5", ")", "%"]).cells,
            vec![Cell::Number(-5.0), Cell::Text("%".to_string())]
        );
    }

    #[test]
    fn unparseable_text_is_kept_verbatim() {
        assert_eq!(
            row(&["Total revenue"]).cells,
            vec![Cell::Text("Total revenue".to_string())]
        );
    }
}
