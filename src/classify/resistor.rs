//! Resistor comment decoding into Panasonic ERJ part numbers

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{BomError, Result};

use super::maps;
use super::DecodedPassive;

fn value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"±1% ([0-9.]+[kΩ]+)").expect("resistor value regex"))
}

fn footprint_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]{4})").expect("footprint regex"))
}

/// Build the ERJ MPN for a value/footprint pair
fn erj_mpn(value: &str, footprint: &str) -> Result<String> {
    let code = maps::erj_value_code(value)
        .ok_or_else(|| BomError::UnknownResistorValue(value.to_string()))?;
    let (prefix, suffix) = maps::erj_series(footprint)
        .ok_or_else(|| BomError::UnknownResistorFootprint(footprint.to_string()))?;
    Ok(format!("{}{}{}", prefix, code, suffix))
}

/// Decode a free-text resistor comment.
///
/// Expects the value after a `±1%` marker and a 4-digit imperial
/// footprint somewhere in the comment, e.g.
/// `"Resistor ±1% 10kΩ 0402"`.
pub fn decode(comment: &str) -> Result<DecodedPassive> {
    let value = value_re()
        .captures(comment)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());
    let footprint = footprint_re()
        .captures(comment)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    let (value, footprint) = match (value, footprint) {
        (Some(v), Some(f)) => (v, f),
        _ => return Err(BomError::ResistorComment(comment.to_string())),
    };

    let mpn = erj_mpn(&value, &footprint)?;
    let description = format!(
        "{} ±1% {} thick film resistor 0.1W 50V ±100ppm/C",
        value, footprint
    );

    Ok(DecodedPassive {
        mpn,
        value,
        footprint,
        description,
        manufacturer: "Panasonic Electronic Components",
    })
}
