use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Selector;

/// A bare reporting-period label: a 4-digit year at the end of the cell,
/// tolerating stray spaces between the digits.
pub static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:2\s?0|1\s?9)\s?[0-9]\s?[0-9]$").unwrap());

/// A currency symbol occupying a whole cell on its own.
pub static CURRENCY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[$£]$").unwrap());

/// Runs of whitespace, collapsed to a single space when collecting text.
pub static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Table elements of a document, for the top-level scan.
pub static TABLES: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());

/// Anything longer is a period phrase ("Year ended December 31, 2019"),
/// not a bare year label.
const MAX_YEAR_LABEL_LEN: usize = 15;

pub fn is_year_label(text: &str) -> bool {
    text.chars().count() < MAX_YEAR_LABEL_LEN && YEAR.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_years_match() {
        assert!(is_year_label("2019"));
        assert!(is_year_label("1998"));
        assert!(is_year_label("2 019"));
        assert!(is_year_label("FY 2020"));
    }

    #[test]
    fn period_phrases_do_not_match() {
        assert!(!is_year_label("Year ended December 31, 2019"));
        assert!(!is_year_label("Revenue"));
        assert!(!is_year_label("2019 results"));
        assert!(!is_year_label(""));
    }

    #[test]
    fn currency_is_a_lone_symbol() {
        assert!(CURRENCY.is_match("$"));
        assert!(CURRENCY.is_match("£"));
        assert!(!CURRENCY.is_match("$1"));
        assert!(!CURRENCY.is_match(""));
    }
}
