//! CM spreadsheet output
//!
//! Writes a single `BOM` worksheet using the contract manufacturer's
//! column schema, quantity as a number, columns auto-fit.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;

use super::PartRecord;

/// Contract manufacturer column schema, in order
const CM_COLUMNS: &[&str] = &[
    "Quantity per board",
    "Manufacturer part number (MPN)",
    "Reference designators",
    "DNI/DNP",
    "Vendor",
    "Vendor part number",
    "Value",
    "Size/footprint",
    "Part description/specs",
    "Manufacturer",
];

fn text_cells(rec: &PartRecord) -> Vec<String> {
    vec![
        rec.mpn.clone(),
        rec.designators.join(", "),
        if rec.dni { "DNI".to_string() } else { String::new() },
        rec.vendor.clone().unwrap_or_default(),
        rec.vendor_part_number.clone().unwrap_or_default(),
        rec.value.clone().unwrap_or_default(),
        rec.footprint.clone().unwrap_or_default(),
        rec.description.clone(),
        rec.manufacturer.clone().unwrap_or_default(),
    ]
}

/// Write the CM spreadsheet
pub fn write_sheet(path: &Path, records: &[PartRecord]) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("BOM")?;

    let mut widths: Vec<usize> = CM_COLUMNS.iter().map(|h| h.len()).collect();

    for (col, header) in CM_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (i, rec) in records.iter().enumerate() {
        let row = (i + 1) as u32;

        let qty = rec.quantity.to_string();
        widths[0] = widths[0].max(qty.chars().count());
        sheet.write_number(row, 0, rec.quantity as f64)?;

        for (j, cell) in text_cells(rec).iter().enumerate() {
            let col = j + 1;
            widths[col] = widths[col].max(cell.chars().count());
            sheet.write_string(row, col as u16, cell)?;
        }
    }

    for (col, width) in widths.iter().enumerate() {
        sheet.set_column_width(col as u16, (*width + 2) as f64)?;
    }

    workbook.save(path)?;
    Ok(())
}
