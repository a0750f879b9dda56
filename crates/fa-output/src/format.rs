//! Cell formatting shared by the renderers.
//!
//! Rounding happens here and only here; accumulated state is never rounded.

/// A real with at least one fractional digit: `400.0`, `0.002`, `-3.5`.
pub fn real(value: f64) -> String {
    format!("{value:?}")
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `[5, 0]`
pub fn profile(loads: &[i64]) -> String {
    let cells: Vec<String> = loads.iter().map(i64::to_string).collect();
    format!("[{}]", cells.join(", "))
}
