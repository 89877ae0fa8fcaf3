//! Console table rendering for the priced report

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::PartRecord;

/// Format an optional price as `$X.XX`, empty when absent
pub fn money(value: Option<f64>) -> String {
    value.map(|v| format!("${:.2}", v)).unwrap_or_default()
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[derive(Tabled)]
struct DisplayRow {
    #[tabled(rename = "MPN")]
    mpn: String,
    #[tabled(rename = "Quantity")]
    quantity: u32,
    #[tabled(rename = "DNI")]
    dni: String,
    #[tabled(rename = "Manufacturer")]
    manufacturer: String,
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Vendor Part Number")]
    vendor_part_number: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Footprint")]
    footprint: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "Total Price")]
    total_price: String,
}

impl From<&PartRecord> for DisplayRow {
    fn from(rec: &PartRecord) -> Self {
        DisplayRow {
            mpn: rec.mpn.clone(),
            quantity: rec.quantity,
            dni: if rec.dni { "DNI".to_string() } else { String::new() },
            manufacturer: opt(&rec.manufacturer),
            vendor: opt(&rec.vendor),
            vendor_part_number: opt(&rec.vendor_part_number),
            value: opt(&rec.value),
            footprint: opt(&rec.footprint),
            description: rec.description.clone(),
            available: rec.available.map(|a| a.to_string()).unwrap_or_default(),
            unit_price: money(rec.unit_price),
            total_price: money(rec.total_price),
        }
    }
}

/// Render the priced report as a rounded table
pub fn render(records: &[PartRecord]) -> String {
    let rows: Vec<DisplayRow> = records.iter().map(DisplayRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
