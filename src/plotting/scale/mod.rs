//! Axis scaling and tick generation.

mod linear;

pub use linear::LinearScale;

/// Maps data values onto the unit interval of an axis.
pub trait Scale: std::fmt::Debug {
    /// Transform a data value to normalized coordinates (0.0 - 1.0).
    fn transform(&self, value: f64) -> f64;

    /// Set the data range for this scale.
    fn set_range(&mut self, min: f64, max: f64);

    /// Get the current data range.
    fn range(&self) -> (f64, f64);

    /// Generate tick values inside the current range.
    fn ticks(&self, num_ticks: usize) -> Vec<f64>;
}

/// Fractional position of `value` within `[lo, hi]`.
///
/// Operands are halved first so spans close to `f64::MAX` do not overflow.
/// A collapsed or non-finite span maps everything to the middle.
pub fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    let span = hi / 2.0 - lo / 2.0;
    if span == 0.0 || !span.is_finite() {
        return 0.5;
    }
    (value / 2.0 - lo / 2.0) / span
}

/// Round a span to 1, 2, 5 or 10 times a power of ten.
pub fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let nice_fraction = match (round, fraction) {
        (true, f) if f < 1.5 => 1.0,
        (true, f) if f < 3.0 => 2.0,
        (true, f) if f < 7.0 => 5.0,
        (true, _) => 10.0,
        (false, f) if f <= 1.0 => 1.0,
        (false, f) if f <= 2.0 => 2.0,
        (false, f) if f <= 5.0 => 5.0,
        (false, _) => 10.0,
    };

    nice_fraction * 10_f64.powf(exponent)
}

/// Generate evenly spaced, round tick positions within `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if num_ticks < 2 || !(max > min) || !(max - min).is_finite() {
        return vec![min / 2.0 + max / 2.0];
    }

    let range = nice_number(max - min, false);
    let spacing = nice_number(range / (num_ticks - 1) as f64, true);
    let first = (min / spacing - 1e-9).ceil() as i64;
    let last = (max / spacing + 1e-9).floor() as i64;

    // integer steps avoid accumulating float error across ticks
    (first..=last).map(|i| i as f64 * spacing).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ticks_unit_range() {
        let ticks = nice_ticks(0.0, 1.0, 6);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0], 0.0);
        assert!((ticks[5] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_nice_ticks_stay_inside_range() {
        let ticks = nice_ticks(-1.05, 1.05, 6);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| *t >= -1.05 && *t <= 1.05));
        assert!(ticks.contains(&0.0));
    }

    #[test]
    fn test_huge_range_stays_finite() {
        let ticks = nice_ticks(-1e308, 1e308, 6);
        assert_eq!(ticks, vec![0.0]);
        assert_eq!(normalize(1e308, -1e308, 1e308), 1.0);
        assert_eq!(normalize(0.0, -1e308, 1e308), 0.5);
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(nice_ticks(2.0, 2.0, 5), vec![2.0]);
    }
}
