//! BOM comment classification
//!
//! Decodes free-text component descriptions into canonical part
//! identifiers. Resistors and capacitors are decoded from their comment
//! text against static tables; do-not-populate lines short-circuit; any
//! other line passes its supplier identifier through the alias table and
//! on to the catalog.

pub mod capacitor;
pub mod maps;
pub mod resistor;

use crate::error::Result;

/// A passive component decoded from its comment text
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPassive {
    /// Synthesized manufacturer part number
    pub mpn: String,

    /// Component value (e.g. `10kΩ`, `100nF`)
    pub value: String,

    /// Imperial footprint code (e.g. `0402`)
    pub footprint: String,

    /// Canonical regenerated description
    pub description: String,

    /// Known manufacturer for this part family
    pub manufacturer: &'static str,
}

/// Outcome of classifying one BOM line
#[derive(Debug, Clone, PartialEq)]
pub enum PartClass {
    /// Decoded passive; priced via the catalog under its synthesized MPN
    Passive(DecodedPassive),

    /// Do-not-install line; never priced
    DoNotInstall,

    /// Anything else; priced under the alias-resolved identifier
    Generic { mpn: String },
}

impl PartClass {
    /// The identifier sent to the catalog, if this line is priced
    pub fn lookup_mpn(&self) -> Option<&str> {
        match self {
            PartClass::Passive(p) => Some(&p.mpn),
            PartClass::DoNotInstall => None,
            PartClass::Generic { mpn } => Some(mpn),
        }
    }
}

/// Classify one BOM line from its comment and supplier part identifier
pub fn classify(comment: &str, part_id: &str) -> Result<PartClass> {
    if comment.contains("Resistor") {
        Ok(PartClass::Passive(resistor::decode(comment)?))
    } else if comment.contains("Capacitor") {
        Ok(PartClass::Passive(capacitor::decode(comment)?))
    } else if comment.contains("Do not populate") {
        Ok(PartClass::DoNotInstall)
    } else {
        Ok(PartClass::Generic {
            mpn: maps::resolve_alias(part_id),
        })
    }
}
