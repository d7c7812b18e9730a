// src/export/json.rs

use crate::domain::ListingRecord;
use crate::errors::AppError;

/// Encodes records as JSON lines (one object per record, stable field names)
/// for downstream tooling that does not want the tabular projection.
pub fn to_json_lines(records: &[ListingRecord]) -> Result<String, AppError> {
    let mut out = String::new();
    for record in records {
        let line = serde_json::to_string(record).map_err(|e| AppError::Json(e.to_string()))?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_object_per_line_with_stable_names() {
        let record = ListingRecord {
            source_id: "seloger.com".to_string(),
            source_url: "https://seloger.com/annonce/2".to_string(),
            price_amount: Some(285_000.0),
            annual_rent: None,
            annual_charges: None,
            property_tax: None,
            gross_yield_pct: None,
            net_yield_pct: None,
            lease_description: None,
            tenant_description: None,
            extraction_note: None,
        };

        let out = to_json_lines(&[record.clone(), record]).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.lines().next().unwrap().contains("\"price_amount\":285000.0"));
        assert!(out.contains("\"source_id\":\"seloger.com\""));
    }
}
