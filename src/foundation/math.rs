/// Round halves towards positive infinity, matching the way slider
/// readouts round (`2.5 -> 3`, `-2.5 -> -2`).
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

pub(crate) fn clamp_percent(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

/// Shortest decimal form with at most `places` fractional digits and no trailing zeros.
pub(crate) fn fmt_trimmed(v: f64, places: usize) -> String {
    let s = format!("{v:.places$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
