// src/extract/money.rs

use once_cell::sync::Lazy;
use regex::Regex;

// French listing sites format amounts as `1 234 567,89 €`: spaces (often
// NBSP/narrow NBSP) group thousands, the comma is the decimal separator, and
// a dot is treated as another grouping character. This is a deliberate
// simplification for the supported sites, not a general currency parser.

static MONEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\d\s][\d\s\.,]{2,})\s*€").unwrap());
static PCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)\s*%").unwrap());

/// Parses the first euro-marked amount in `text`.
///
/// Returns `None` when no `€`-suffixed number is present or the matched span
/// does not survive numeric normalization. Never panics, never returns NaN or
/// a negative value.
pub fn parse_currency(text: &str) -> Option<f64> {
    let m = MONEY_RE.captures(text)?;
    parse_amount(m.get(1)?.as_str())
}

/// Parses the first `<number>%` occurrence in `text` (comma or point decimal).
pub fn parse_percentage(text: &str) -> Option<f64> {
    let m = PCT_RE.captures(text)?;
    m.get(1)?.as_str().replace(',', ".").parse::<f64>().ok()
}

/// Normalizes a locale-formatted numeric span and parses it as `f64`.
///
/// Strips all whitespace (including NBSP and narrow NBSP) and `.` grouping
/// characters, then converts the decimal comma to a point. Garbled separators
/// (e.g. two decimal commas) fail the final parse and degrade to `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_with_decimal_comma() {
        assert_eq!(parse_currency("1 234,56 €"), Some(1234.56));
    }

    #[test]
    fn currency_with_nbsp_grouping() {
        assert_eq!(parse_currency("Prix : 1\u{a0}250\u{202f}000 €"), Some(1_250_000.0));
    }

    #[test]
    fn currency_with_dot_grouping() {
        // Dots are thousands separators on the supported sites.
        assert_eq!(parse_currency("1.234.567 €"), Some(1_234_567.0));
    }

    #[test]
    fn currency_absent_without_marker() {
        assert_eq!(parse_currency("no money here"), None);
        assert_eq!(parse_currency("285 000 EUR"), None);
    }

    #[test]
    fn currency_garbled_separators_degrade_to_none() {
        assert_eq!(parse_currency("12,34,56 €"), None);
    }

    #[test]
    fn percentage_with_comma() {
        assert_eq!(parse_percentage("Rendement : 7,5 %"), Some(7.5));
    }

    #[test]
    fn percentage_with_point_and_no_space() {
        assert_eq!(parse_percentage("yield 6.25%"), Some(6.25));
    }

    #[test]
    fn percentage_absent() {
        assert_eq!(parse_percentage("Rendement inconnu"), None);
    }

    #[test]
    fn amount_without_marker() {
        assert_eq!(parse_amount("285 000"), Some(285_000.0));
        assert_eq!(parse_amount("1 234,5"), Some(1234.5));
    }
}
