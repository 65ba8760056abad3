// Projections - pure functions from a state snapshot to panel view models
pub mod distribution;
pub mod geo_summary;
pub mod hourly;
pub mod metrics_summary;
pub mod time_series;

/// Non-finite numbers render as zero instead of "NaN" or "inf".
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Fixed-point rendering where exact halves round away from zero, so
/// `12.25` shows as `12.3` the way the browser dashboard prints it.
/// Plain `{:.N}` would round those ties to even.
pub(crate) fn to_fixed(value: f64, digits: usize) -> String {
    const GUARD: usize = 32;

    let value = finite_or_zero(value);
    let mut magnitude = value.abs();

    // The guard digits are exact for every tie reachable at small precisions
    let expanded = format!("{:.*}", digits + GUARD, magnitude);
    let tail = &expanded[expanded.len() - GUARD..];
    if tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0') {
        magnitude = f64::from_bits(magnitude.to_bits() + 1);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.*}", sign, digits, magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(1.5), 1.5);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_to_fixed_rounds_halves_away_from_zero() {
        assert_eq!(to_fixed(12.25, 1), "12.3");
        assert_eq!(to_fixed(-95.25, 1), "-95.3");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
    }

    #[test]
    fn test_to_fixed_leaves_non_ties_alone() {
        // 0.15 is stored just below the half
        assert_eq!(to_fixed(0.15, 1), "0.1");
        assert_eq!(to_fixed(412.345, 1), "412.3");
        assert_eq!(to_fixed(-0.04, 1), "-0.0");
        assert_eq!(to_fixed(-0.0, 1), "0.0");
        assert_eq!(to_fixed(f64::NAN, 1), "0.0");
        assert_eq!(to_fixed(28.6, 0), "29");
    }
}
