// src/extract/fields.rs

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::extract::money::{parse_currency, parse_percentage};

/// Upper bounds on the raw lease/tenant spans kept in a record, so a runaway
/// match cannot blow up downstream rendering.
pub const LEASE_MAX_CHARS: usize = 200;
pub const TENANT_MAX_CHARS: usize = 120;

// Each field is extracted by an ordered table of label-anchored rules; the
// first rule that matches wins and later rules are never consulted. New site
// quirks are handled by adding a label to the right table, not by new code.

/// Builds one euro-amount rule per label: `<label> <gap> <number> €`.
fn money_rules(labels: &[&str], gap: usize) -> Vec<Regex> {
    labels
        .iter()
        .map(|label| {
            Regex::new(&format!(r"(?i){label}[:\s]{{0,{gap}}}[0-9\s\.,]+\s*€")).unwrap()
        })
        .collect()
}

static PRICE_RULES: Lazy<Vec<Regex>> = Lazy::new(|| money_rules(&[r"Prix(?: de vente)?"], 6));
static RENT_RULES: Lazy<Vec<Regex>> =
    Lazy::new(|| money_rules(&["Loyer annuel", r"Loyers?", "Revenu locatif"], 10));
static CHARGES_RULES: Lazy<Vec<Regex>> =
    Lazy::new(|| money_rules(&["Charges locatives", "Charges"], 10));
static TAX_RULES: Lazy<Vec<Regex>> = Lazy::new(|| money_rules(&["Taxe foncière", "TF"], 10));

static YIELD_RULES: Lazy<Vec<Regex>> =
    Lazy::new(|| vec![Regex::new(r"(?i)Rendement[:\s\-]{0,6}\d+[.,]?\d*\s*%").unwrap()]);

// Lease and tenant keep the whole matched span (label included): these are
// human-readable annotations, not normalized values. Longer labels come first
// so `Type de bail` is not shadowed by the bare `Bail`.
static LEASE_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["Type de bail", "Échéance bail", "Bail"]
        .iter()
        .map(|label| Regex::new(&format!(r"(?i){label}[\s:]{{0,30}}[A-Za-z0-9\s/.,-]+")).unwrap())
        .collect()
});
static TENANT_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["Locataire", "Enseigne", "Occupant"]
        .iter()
        .map(|label| Regex::new(&format!(r"(?i){label}[:\s]{{0,10}}[A-Za-z0-9\s.,-]+")).unwrap())
        .collect()
});

// Price is also advertised in dedicated markup on several sites; these are
// tried before any label rule. Only the first element per selector counts.
static PRICE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [".prix", ".price", "strong"]
        .iter()
        .map(|css| Selector::parse(css).unwrap())
        .collect()
});

static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Flattens a parsed document to whitespace-collapsed plain text, the form
/// every label rule operates on.
pub fn flatten_text(doc: &Html) -> String {
    let joined = doc.root_element().text().collect::<Vec<_>>().join(" ");
    WS_RE.replace_all(&joined, " ").trim().to_string()
}

fn first_rule_match<'t>(rules: &[Regex], text: &'t str) -> Option<&'t str> {
    rules.iter().find_map(|re| re.find(text)).map(|m| m.as_str())
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Selector-based price path: the first selector whose element text carries a
/// euro marker decides, successfully or not. Callers fall back to
/// [`extract_price_text`] on `None`.
pub fn extract_price_markup(doc: &Html) -> Option<f64> {
    for selector in PRICE_SELECTORS.iter() {
        if let Some(element) = doc.select(selector).next() {
            let text = element.text().collect::<Vec<_>>().join(" ");
            if text.contains('€') {
                return parse_currency(&text);
            }
        }
    }
    None
}

pub fn extract_price_text(text: &str) -> Option<f64> {
    first_rule_match(&PRICE_RULES, text).and_then(parse_currency)
}

pub fn extract_rent(text: &str) -> Option<f64> {
    first_rule_match(&RENT_RULES, text).and_then(parse_currency)
}

pub fn extract_charges(text: &str) -> Option<f64> {
    first_rule_match(&CHARGES_RULES, text).and_then(parse_currency)
}

pub fn extract_tax(text: &str) -> Option<f64> {
    first_rule_match(&TAX_RULES, text).and_then(parse_currency)
}

/// Page-advertised gross yield (`Rendement : x %`). Informational only; the
/// assembler recomputes yields from the monetary fields.
pub fn extract_listed_yield(text: &str) -> Option<f64> {
    first_rule_match(&YIELD_RULES, text).and_then(parse_percentage)
}

pub fn extract_lease(text: &str) -> Option<String> {
    first_rule_match(&LEASE_RULES, text).map(|span| truncate_chars(span, LEASE_MAX_CHARS))
}

pub fn extract_tenant(text: &str) -> Option<String> {
    first_rule_match(&TENANT_RULES, text).map(|span| truncate_chars(span, TENANT_MAX_CHARS))
}
