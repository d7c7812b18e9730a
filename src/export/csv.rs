// src/export/csv.rs

use crate::domain::ListingRecord;
use crate::export::{fmt_amount, HEADERS};

/// Encodes records as CSV with the fixed column headers. Lease/tenant spans
/// are free text from the pages, so fields are quoted whenever they contain
/// a separator, quote, or line break.
pub fn to_csv(records: &[ListingRecord]) -> String {
    let mut out = String::new();
    out.push_str(&HEADERS.join(","));
    out.push('\n');

    for r in records {
        let row = [
            r.source_id.clone(),
            r.source_url.clone(),
            fmt_amount(r.price_amount),
            fmt_amount(r.annual_rent),
            fmt_amount(r.annual_charges),
            fmt_amount(r.property_tax),
            fmt_amount(r.gross_yield_pct),
            fmt_amount(r.net_yield_pct),
            r.lease_description.clone().unwrap_or_default(),
            r.tenant_description.clone().unwrap_or_default(),
            r.extraction_note.clone().unwrap_or_default(),
        ];

        let encoded: Vec<String> = row.iter().map(|field| csv_field(field)).collect();
        out.push_str(&encoded.join(","));
        out.push('\n');
    }

    out
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
