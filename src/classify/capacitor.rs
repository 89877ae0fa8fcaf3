//! Capacitor comment decoding into Murata MLCC part numbers

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{BomError, Result};

use super::maps;
use super::DecodedPassive;

fn voltage_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+\.?\d*)V").expect("voltage regex"))
}

fn value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+\.?\d*)(pF|nF|uF)").expect("capacitance regex"))
}

fn dielectric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(X7R|X5R|C0G)").expect("dielectric regex"))
}

fn tolerance_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"±(\d+)%").expect("tolerance regex"))
}

fn footprint_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]{4})").expect("footprint regex"))
}

fn capture<'a>(re: &Regex, text: &'a str, group: usize) -> Option<&'a str> {
    re.captures(text)
        .and_then(|c| c.get(group))
        .map(|m| m.as_str())
}

/// Decode a free-text capacitor comment.
///
/// Needs a voltage rating, capacitance with unit, dielectric class,
/// tolerance, and a 4-digit footprint, e.g.
/// `"Capacitor 16V 100nF X7R ±10% 0402"`. The full 5-tuple must map to
/// a known MPN.
pub fn decode(comment: &str) -> Result<DecodedPassive> {
    let voltage = capture(voltage_re(), comment, 1);
    let cap_value = value_re().captures(comment);
    let dielectric = capture(dielectric_re(), comment, 1);
    let tolerance = capture(tolerance_re(), comment, 1);
    let footprint = capture(footprint_re(), comment, 1);

    let (voltage, caps, dielectric, tolerance, footprint) =
        match (voltage, cap_value, dielectric, tolerance, footprint) {
            (Some(v), Some(c), Some(d), Some(t), Some(f)) => (v, c, d, t, f),
            _ => return Err(BomError::CapacitorComment(comment.to_string())),
        };

    let voltage: f64 = voltage
        .parse()
        .map_err(|_| BomError::CapacitorComment(comment.to_string()))?;
    let tolerance: u32 = tolerance
        .parse()
        .map_err(|_| BomError::CapacitorComment(comment.to_string()))?;
    let value = format!("{}{}", &caps[1], &caps[2]);

    let mpn = maps::capacitor_mpn(voltage, &value, dielectric, tolerance, footprint).ok_or_else(
        || BomError::UnknownCapacitor {
            voltage: voltage.to_string(),
            value: value.clone(),
            dielectric: dielectric.to_string(),
            tolerance,
            footprint: footprint.to_string(),
        },
    )?;

    let description = format!(
        "{} ±{}% {} {} capacitor (MLCC)",
        value, tolerance, dielectric, footprint
    );

    Ok(DecodedPassive {
        mpn: mpn.to_string(),
        value,
        footprint: footprint.to_string(),
        description,
        manufacturer: "Murata",
    })
}
