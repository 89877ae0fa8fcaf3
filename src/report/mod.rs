//! Report assembly - enriched part records, ordering, totals

pub mod sheet;
pub mod table;

use crate::bom::BomLine;
use crate::catalog::ProductInfo;
use crate::classify::PartClass;

/// One enriched, priced BOM line
#[derive(Debug, Clone, Default)]
pub struct PartRecord {
    pub mpn: String,
    pub quantity: u32,
    pub designators: Vec<String>,
    pub dni: bool,
    pub manufacturer: Option<String>,
    pub vendor: Option<String>,
    pub vendor_part_number: Option<String>,
    pub value: Option<String>,
    pub footprint: Option<String>,
    pub description: String,
    pub available: Option<u32>,
    pub unit_price: Option<f64>,
    pub total_price: Option<f64>,
}

impl PartRecord {
    /// Seed a record from a BOM line and its classification.
    ///
    /// Catalog data, applied later, overwrites the identifying fields;
    /// value/footprint from a decoded passive survive.
    pub fn from_line(line: &BomLine, class: &PartClass) -> Self {
        match class {
            PartClass::Passive(p) => PartRecord {
                mpn: p.mpn.clone(),
                quantity: line.quantity(),
                designators: line.designators.clone(),
                value: Some(p.value.clone()),
                footprint: Some(p.footprint.clone()),
                description: p.description.clone(),
                manufacturer: Some(p.manufacturer.to_string()),
                ..Default::default()
            },
            PartClass::DoNotInstall => PartRecord {
                mpn: "DNI".to_string(),
                quantity: line.quantity(),
                designators: line.designators.clone(),
                dni: true,
                description: "Do not install".to_string(),
                ..Default::default()
            },
            PartClass::Generic { mpn } => PartRecord {
                mpn: mpn.clone(),
                quantity: line.quantity(),
                designators: line.designators.clone(),
                description: line.comment.clone(),
                ..Default::default()
            },
        }
    }

    /// Overlay resolved catalog data and compute the line total
    pub fn apply_product(&mut self, info: ProductInfo, order_quantity: u32) {
        self.mpn = info.mpn;
        self.description = info.description;
        self.manufacturer = Some(info.manufacturer);
        self.vendor = Some(info.vendor);
        if info.footprint.is_some() {
            self.footprint = info.footprint;
        }

        if let Some(offer) = info.offer {
            self.vendor_part_number = Some(offer.vendor_part_number);
            self.available = Some(offer.available);
            self.unit_price = Some(offer.unit_price);
            self.total_price = Some(offer.unit_price * order_quantity as f64);
        }
    }

    /// Line total, treating unpriced lines as zero
    pub fn total_or_zero(&self) -> f64 {
        self.total_price.unwrap_or(0.0)
    }
}

/// Stable sort by descending total price; unpriced lines sink to the end
pub fn sort_by_total(records: &mut [PartRecord]) {
    records.sort_by(|a, b| {
        b.total_or_zero()
            .partial_cmp(&a.total_or_zero())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Grand total across all lines
pub fn grand_total(records: &[PartRecord]) -> f64 {
    records.iter().map(|r| r.total_or_zero()).sum()
}
