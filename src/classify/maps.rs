//! Static decode tables for the part library
//!
//! These tables cover the parts actually used on the boards this tool
//! prices. Unknown values are an error, not a fallback: a new part gets
//! added here deliberately, with its verified catalog MPN.

/// Resistance value → Panasonic ERJ value code
const ERJ_VALUE_CODES: &[(&str, &str)] = &[
    ("1.5kΩ", "1501"),
    ("10kΩ", "1002"),
    ("1kΩ", "1001"),
    ("26.1Ω", "26R1"),
    ("4.7kΩ", "4701"),
    ("220Ω", "2200"),
    ("510Ω", "5100"),
    ("5.6kΩ", "5601"),
    ("100kΩ", "1003"),
    ("60.4Ω", "60R4"),
    ("1.2kΩ", "1201"),
    ("180Ω", "1800"),
];

/// Footprint → (ERJ series prefix, packaging suffix)
const ERJ_SERIES: &[(&str, &str, &str)] = &[
    ("0402", "ERJ-2RKF", "X"),
    ("0603", "ERJ-3EKF", "V"),
];

/// (voltage, value, dielectric, tolerance %, footprint) → Murata MPN
const CAPACITOR_MPNS: &[(f64, &str, &str, u32, &str, &str)] = &[
    (16.0, "100nF", "X7R", 10, "0402", "GCM155R71C104KA55J"),
    (50.0, "2.2uF", "X5R", 10, "0805", "GCM21BR71C225KA64L"),
    (6.3, "2.2uF", "X5R", 20, "0402", "GRM155R61C225KE11D"),
    (50.0, "12nF", "X7R", 10, "0402", "GCM155R71E123KA55J"),
    (50.0, "18pF", "C0G", 5, "0402", "GCM1555C1H180JA16D"),
    (50.0, "20pF", "C0G", 5, "0402", "GCM1555C1H220JA16J"),
    (25.0, "1uF", "X5R", 10, "0402", "GRM155R61E105KA12D"),
    (50.0, "4.7nF", "X7R", 10, "0402", "GCM155R71H472KA37J"),
];

/// Supplier/part identifier aliases, chased transitively.
///
/// Some BOM exports carry a supplier stock number or an obsolete MPN;
/// each hop moves one step closer to the identifier the catalog matches.
const MPN_ALIASES: &[(&str, &str)] = &[
    ("C2040", "RP2040"),
    ("RP2040", "SC0914(13)"),
    ("C9002", "X322512MSB4SI"),
    ("C97521", "W25Q128JVSIQ"),
    ("X322512MSB4SI", "ECS-2333-120-BN-TR"),
    ("ERM8-040-05.0-X-DV-L-K-TR", "ERM8-040-05.0-L-DV-L-K-TR"),
];

/// Look up the ERJ value code for a resistance value
pub fn erj_value_code(value: &str) -> Option<&'static str> {
    ERJ_VALUE_CODES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, code)| *code)
}

/// Look up the ERJ series prefix and suffix for a footprint
pub fn erj_series(footprint: &str) -> Option<(&'static str, &'static str)> {
    ERJ_SERIES
        .iter()
        .find(|(fp, _, _)| *fp == footprint)
        .map(|(_, prefix, suffix)| (*prefix, *suffix))
}

/// Look up the Murata MPN for a capacitor parameter tuple
pub fn capacitor_mpn(
    voltage: f64,
    value: &str,
    dielectric: &str,
    tolerance: u32,
    footprint: &str,
) -> Option<&'static str> {
    CAPACITOR_MPNS
        .iter()
        .find(|(v, val, diel, tol, fp, _)| {
            *v == voltage
                && *val == value
                && *diel == dielectric
                && *tol == tolerance
                && *fp == footprint
        })
        .map(|(_, _, _, _, _, mpn)| *mpn)
}

/// Chase the alias table to a fixed point.
///
/// The table is acyclic; the hop cap only guards against an accidental
/// cycle introduced by a future edit.
pub fn resolve_alias(mpn: &str) -> String {
    let mut current = mpn.to_string();
    for _ in 0..=MPN_ALIASES.len() {
        match MPN_ALIASES.iter().find(|(from, _)| *from == current) {
            Some((_, to)) => current = to.to_string(),
            None => break,
        }
    }
    current
}
