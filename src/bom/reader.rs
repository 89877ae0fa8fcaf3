//! CSV BOM export reading
//!
//! Reads the EDA tool's BOM export. Required columns: `LCSC` (supplier
//! part identifier), `Designator` (comma-separated reference labels),
//! `Comment` (free-text description).

use std::path::Path;

use serde::Deserialize;

use crate::error::{BomError, Result};

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "LCSC")]
    lcsc: String,

    #[serde(rename = "Designator")]
    designator: String,

    #[serde(rename = "Comment")]
    comment: String,
}

/// One line of the BOM export
#[derive(Debug, Clone, PartialEq)]
pub struct BomLine {
    /// Supplier part identifier from the export
    pub part_id: String,

    /// Reference designators covered by this line
    pub designators: Vec<String>,

    /// Free-text component description
    pub comment: String,
}

impl BomLine {
    /// Per-board quantity: one part per designator
    pub fn quantity(&self) -> u32 {
        self.designators.len() as u32
    }
}

impl From<RawRow> for BomLine {
    fn from(row: RawRow) -> Self {
        let designators = row
            .designator
            .split(',')
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();

        BomLine {
            part_id: row.lcsc,
            designators,
            comment: row.comment,
        }
    }
}

/// Read all lines from a BOM CSV export
pub fn read_bom(path: &Path) -> Result<Vec<BomLine>> {
    if !path.exists() {
        return Err(BomError::BomNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut lines = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        lines.push(row?.into());
    }
    Ok(lines)
}
