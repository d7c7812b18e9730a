pub mod csv;
pub mod json;
pub mod xlsx;

/// Fixed column headers shared by the CSV and XLSX projections. Downstream
/// consumers key on these names; do not reorder.
pub const HEADERS: [&str; 11] = [
    "Source",
    "URL",
    "Prix de vente (€)",
    "Loyer annuel HT-HC (€)",
    "Charges locatives (€)",
    "Taxe foncière (€)",
    "Rendement brut (%)",
    "Rendement net (%)",
    "Bail",
    "Locataire",
    "Notes",
];

/// Renders an optional amount for a text cell: empty when absent, no
/// trailing `.0` on whole values.
pub(crate) fn fmt_amount(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => format!("{v}"),
    }
}
