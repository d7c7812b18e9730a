// src/domain/listing.rs

use scraper::Html;
use serde::Serialize;

use crate::domain::yields::compute_returns;
use crate::extract::fields::flatten_text;
use crate::extract::profiles::select_profile;
use crate::fetch::FetchOutcome;

/// Note stored on a record when the transport reported no page content.
pub const FETCH_FAILED_NOTE: &str = "Fetch KO";

/// One parsed observation of one listing URL.
///
/// All value fields are optional because extraction is best-effort; the two
/// yield percentages are derived at assembly time and never set directly.
/// A record is built fresh per URL per pass and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRecord {
    pub source_id: String,
    pub source_url: String,
    pub price_amount: Option<f64>,
    pub annual_rent: Option<f64>,
    pub annual_charges: Option<f64>,
    pub property_tax: Option<f64>,
    pub gross_yield_pct: Option<f64>,
    pub net_yield_pct: Option<f64>,
    pub lease_description: Option<String>,
    pub tenant_description: Option<String>,
    pub extraction_note: Option<String>,
}

impl ListingRecord {
    fn empty(source_id: &str, url: &str, note: Option<String>) -> Self {
        ListingRecord {
            source_id: source_id.to_string(),
            source_url: url.to_string(),
            price_amount: None,
            annual_rent: None,
            annual_charges: None,
            property_tax: None,
            gross_yield_pct: None,
            net_yield_pct: None,
            lease_description: None,
            tenant_description: None,
            extraction_note: note,
        }
    }
}

/// Builds the record for one URL from the transport's outcome.
///
/// A failed fetch yields a record with every value field absent and the
/// fixed [`FETCH_FAILED_NOTE`]; no extraction is attempted without content.
/// Otherwise the site profile selected for `source_id` extracts the fields
/// and the yields are computed from them. The page-advertised yield, when
/// extracted, is deliberately not carried into the record.
pub fn assemble(source_id: &str, url: &str, outcome: &FetchOutcome) -> ListingRecord {
    let html = match outcome {
        FetchOutcome::Failed => {
            return ListingRecord::empty(source_id, url, Some(FETCH_FAILED_NOTE.to_string()))
        }
        FetchOutcome::Page(html) => html,
    };

    let doc = Html::parse_document(html);
    let text = flatten_text(&doc);
    let extracted = select_profile(source_id).extract(&text, &doc);

    let (gross, net) = compute_returns(
        extracted.price,
        extracted.annual_rent,
        extracted.annual_charges,
        extracted.property_tax,
    );

    ListingRecord {
        price_amount: extracted.price,
        annual_rent: extracted.annual_rent,
        annual_charges: extracted.annual_charges,
        property_tax: extracted.property_tax,
        gross_yield_pct: gross,
        net_yield_pct: net,
        lease_description: extracted.lease,
        tenant_description: extracted.tenant,
        ..ListingRecord::empty(source_id, url, None)
    }
}

/// Keeps records whose gross or net yield reaches `min_yield`. Absent yields
/// compare as 0, so records with no computable yield survive only a zero
/// threshold.
pub fn filter_by_min_yield(records: Vec<ListingRecord>, min_yield: f64) -> Vec<ListingRecord> {
    records
        .into_iter()
        .filter(|r| {
            r.gross_yield_pct.unwrap_or(0.0) >= min_yield
                || r.net_yield_pct.unwrap_or(0.0) >= min_yield
        })
        .collect()
}
