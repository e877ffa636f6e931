//! Linear scale transformation.

use super::{nice_ticks, normalize, Scale};

/// A linear scale for axis transformation.
#[derive(Debug, Clone)]
pub struct LinearScale {
    min: f64,
    max: f64,
}

impl LinearScale {
    /// Create a linear scale over `[0, 1]`, to be ranged later.
    pub fn auto() -> Self {
        LinearScale { min: 0.0, max: 1.0 }
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        LinearScale::auto()
    }
}

impl Scale for LinearScale {
    fn transform(&self, value: f64) -> f64 {
        normalize(value, self.min, self.max)
    }

    fn set_range(&mut self, min: f64, max: f64) {
        if min >= max {
            // widen a collapsed range so the transform stays defined
            let padding = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
            self.min = min - padding;
            self.max = max + padding;
        } else {
            self.min = min;
            self.max = max;
        }
    }

    fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn ticks(&self, num_ticks: usize) -> Vec<f64> {
        nice_ticks(self.min, self.max, num_ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform() {
        let mut scale = LinearScale::auto();
        scale.set_range(-2.0, 2.0);
        assert_eq!(scale.transform(0.0), 0.5);
        assert_eq!(scale.transform(2.0), 1.0);
    }

    #[test]
    fn test_collapsed_range_widened() {
        let mut scale = LinearScale::auto();
        scale.set_range(5.0, 5.0);
        assert_eq!(scale.range(), (4.5, 5.5));
        scale.set_range(0.0, 0.0);
        assert_eq!(scale.range(), (-1.0, 1.0));
    }
}
