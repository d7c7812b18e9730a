// src/extract/profiles.rs

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::extract::fields;
use crate::extract::money::{parse_amount, parse_currency};

/// The seven fields a profile can produce for one page. Extraction is
/// best-effort: every field is optional and `None` simply means no rule
/// matched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExtractedFields {
    pub price: Option<f64>,
    pub annual_rent: Option<f64>,
    pub annual_charges: Option<f64>,
    pub property_tax: Option<f64>,
    pub listed_yield_pct: Option<f64>,
    pub lease: Option<String>,
    pub tenant: Option<String>,
}

/// A named extraction strategy for one family of listing sites.
///
/// `text` is the whitespace-collapsed page text (see
/// [`fields::flatten_text`]); `doc` is the parsed markup for selector-based
/// lookups. Implementations are stateless and must never fail: anything they
/// cannot read stays `None`.
pub trait SiteProfile: Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, text: &str, doc: &Html) -> ExtractedFields;
}

/// Default strategy: selector-based price with label-regex fallback, then the
/// shared label rules for every other field. Several site families share this
/// behavior unchanged.
pub struct LabelRegexProfile;

impl SiteProfile for LabelRegexProfile {
    fn name(&self) -> &'static str {
        "label-regex"
    }

    fn extract(&self, text: &str, doc: &Html) -> ExtractedFields {
        ExtractedFields {
            price: fields::extract_price_markup(doc).or_else(|| fields::extract_price_text(text)),
            annual_rent: fields::extract_rent(text),
            annual_charges: fields::extract_charges(text),
            property_tax: fields::extract_tax(text),
            listed_yield_pct: fields::extract_listed_yield(text),
            lease: fields::extract_lease(text),
            tenant: fields::extract_tenant(text),
        }
    }
}

static LD_JSON_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"script[type="application/ld+json"]"#).unwrap());
static LD_PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""price"\s*:\s*"?([\d\s\.,]+)"?"#).unwrap());

/// Strategy for sites that embed ld+json metadata: the structured `price` key
/// is preferred over anything in the rendered text; every other field falls
/// back to the label-regex behavior.
pub struct StructuredDataProfile;

impl StructuredDataProfile {
    fn structured_price(doc: &Html) -> Option<f64> {
        for script in doc.select(&LD_JSON_SELECTOR) {
            let payload = script.text().collect::<String>();
            if let Some(caps) = LD_PRICE_RE.captures(&payload) {
                // The JSON value carries no currency marker, so it goes
                // through the bare amount normalizer.
                if let Some(price) = caps.get(1).and_then(|m| parse_amount(m.as_str())) {
                    return Some(price);
                }
            }
        }
        None
    }
}

impl SiteProfile for StructuredDataProfile {
    fn name(&self) -> &'static str {
        "structured-data"
    }

    fn extract(&self, text: &str, doc: &Html) -> ExtractedFields {
        let mut extracted = LabelRegexProfile.extract(text, doc);
        extracted.price = Self::structured_price(doc).or(extracted.price);
        extracted
    }
}

/// Strategy for sites where only the first euro-marked number is trustworthy
/// as a price (no reliable label anchor); the remaining fields reuse the
/// label rules and usually stay absent for this family.
pub struct MinimalPriceProfile;

impl SiteProfile for MinimalPriceProfile {
    fn name(&self) -> &'static str {
        "minimal-price"
    }

    fn extract(&self, text: &str, doc: &Html) -> ExtractedFields {
        let mut extracted = LabelRegexProfile.extract(text, doc);
        extracted.price = parse_currency(text);
        extracted
    }
}

static LABEL_REGEX: LabelRegexProfile = LabelRegexProfile;
static STRUCTURED_DATA: StructuredDataProfile = StructuredDataProfile;
static MINIMAL_PRICE: MinimalPriceProfile = MinimalPriceProfile;

// Priority-ordered: the first token contained in the site identifier decides.
// Keep broader tokens (`cession`) after the specific ones they would shadow.
static PROFILE_TABLE: &[(&str, &'static dyn SiteProfile)] = &[
    ("murscommerciaux", &LABEL_REGEX),
    ("seloger", &STRUCTURED_DATA),
    ("leboncoin", &MINIMAL_PRICE),
    ("bureauxlocaux", &LABEL_REGEX),
    ("cessionpme", &LABEL_REGEX),
    ("cession", &LABEL_REGEX),
];

/// Maps a site identifier to its extraction profile. Unknown sites get the
/// label-regex default rather than an error.
pub fn select_profile(source_id: &str) -> &'static dyn SiteProfile {
    let id = source_id.to_lowercase();
    for (token, profile) in PROFILE_TABLE {
        if id.contains(token) {
            return *profile;
        }
    }
    &LABEL_REGEX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> (String, Html) {
        let doc = Html::parse_document(html);
        let text = fields::flatten_text(&doc);
        (text, doc)
    }

    #[test]
    fn dispatch_is_case_insensitive() {
        let a = select_profile("www.murscommerciaux.com");
        let b = select_profile("MursCommerciaux.com");
        assert_eq!(a.name(), b.name());
        assert_eq!(a.name(), "label-regex");
    }

    #[test]
    fn dispatch_per_family() {
        assert_eq!(select_profile("www.seloger.com").name(), "structured-data");
        assert_eq!(select_profile("leboncoin.fr").name(), "minimal-price");
        assert_eq!(select_profile("bureauxlocaux.com").name(), "label-regex");
        assert_eq!(select_profile("cessionpme.com").name(), "label-regex");
        assert_eq!(select_profile("cession-affaire.fr").name(), "label-regex");
    }

    #[test]
    fn unknown_site_falls_back_to_generic() {
        assert_eq!(select_profile("unknownsite.fr").name(), "label-regex");
    }

    #[test]
    fn generic_profile_extracts_all_seven_fields() {
        let (text, doc) = page(
            r#"<html><body>
                <p>Prix de vente : 200 000 €</p>
                <p>Loyer annuel : 18 000 €</p>
                <p>Charges locatives : 1 200 €</p>
                <p>Taxe foncière : 800 €</p>
                <p>Rendement : 9 %</p>
                <p>Bail : commercial 3/6/9</p>
                <p>Locataire : boulangerie</p>
            </body></html>"#,
        );
        let extracted = LabelRegexProfile.extract(&text, &doc);
        assert_eq!(extracted.price, Some(200_000.0));
        assert_eq!(extracted.annual_rent, Some(18_000.0));
        assert_eq!(extracted.annual_charges, Some(1200.0));
        assert_eq!(extracted.property_tax, Some(800.0));
        assert_eq!(extracted.listed_yield_pct, Some(9.0));
        assert!(extracted.lease.as_deref().unwrap().contains("3/6/9"));
        assert!(extracted.tenant.as_deref().unwrap().contains("boulangerie"));
    }

    #[test]
    fn structured_price_wins_over_label_price() {
        let (text, doc) = page(
            r#"<html><head>
                <script type="application/ld+json">{"@type":"Offer","price":"285 000"}</script>
            </head><body>
                <p>Prix de vente : 999 €</p>
            </body></html>"#,
        );
        let extracted = StructuredDataProfile.extract(&text, &doc);
        assert_eq!(extracted.price, Some(285_000.0));
    }

    #[test]
    fn structured_profile_falls_back_without_metadata() {
        let (text, doc) = page("<html><body><p>Prix de vente : 150 000 €</p></body></html>");
        let extracted = StructuredDataProfile.extract(&text, &doc);
        assert_eq!(extracted.price, Some(150_000.0));
    }

    #[test]
    fn minimal_profile_takes_first_bare_amount() {
        let (text, doc) = page(
            "<html><body><p>Local commercial 450 000 € secteur gare</p></body></html>",
        );
        let extracted = MinimalPriceProfile.extract(&text, &doc);
        assert_eq!(extracted.price, Some(450_000.0));
        assert_eq!(extracted.annual_rent, None);
        assert_eq!(extracted.lease, None);
    }
}
