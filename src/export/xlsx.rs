// src/export/xlsx.rs

use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::domain::ListingRecord;
use crate::errors::AppError;
use crate::export::HEADERS;

/// Writes records to an XLSX workbook with the same projection as the CSV
/// encoder: one `Deals` sheet, fixed headers, numbers as numeric cells and
/// absent values as blank cells.
pub fn export_records_xlsx(records: &[ListingRecord], path: &Path) -> Result<(), AppError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Deals").map_err(xlsx_err)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(xlsx_err)?;
    }

    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &record.source_id)
            .map_err(xlsx_err)?;
        worksheet
            .write_string(r, 1, &record.source_url)
            .map_err(xlsx_err)?;

        let amounts = [
            record.price_amount,
            record.annual_rent,
            record.annual_charges,
            record.property_tax,
            record.gross_yield_pct,
            record.net_yield_pct,
        ];
        for (offset, amount) in amounts.iter().enumerate() {
            if let Some(value) = amount {
                worksheet
                    .write_number(r, (2 + offset) as u16, *value)
                    .map_err(xlsx_err)?;
            }
        }

        let lease = record.lease_description.as_deref().unwrap_or("");
        worksheet.write_string(r, 8, lease).map_err(xlsx_err)?;

        let tenant = record.tenant_description.as_deref().unwrap_or("");
        worksheet.write_string(r, 9, tenant).map_err(xlsx_err)?;

        let note = record.extraction_note.as_deref().unwrap_or("");
        worksheet.write_string(r, 10, note).map_err(xlsx_err)?;
    }

    workbook.save(path).map_err(xlsx_err)
}

fn xlsx_err(e: XlsxError) -> AppError {
    AppError::Xlsx(e.to_string())
}
