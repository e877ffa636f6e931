//! Visual elements around the plotted data: axes, grid, legend, text.

mod axis;
mod grid;
mod legend;
pub mod text;

pub use axis::AxisConfig;
pub use grid::GridConfig;
pub use legend::{Legend, LegendEntry, LegendPosition};
pub use text::{escape_xml, Text};

use crate::plotting::scale::normalize;

/// Axis-aligned box, used both in data and in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Inverted bounds that any included point will replace.
    pub fn empty() -> Self {
        Bounds::new(
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        )
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// True once at least one finite point has been included.
    pub fn is_valid(&self) -> bool {
        self.x_min.is_finite() && self.x_max.is_finite() && self.y_min.is_finite() && self.y_max.is_finite()
    }

    /// Expand bounds to include a point.
    pub fn include_point(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Expand bounds to include another bounds.
    pub fn include_bounds(&mut self, other: &Bounds) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    /// Add padding as a fraction of the range, saturating at `±f64::MAX`.
    pub fn pad(&self, fraction: f64) -> Bounds {
        // half spans keep ranges near f64::MAX finite
        let x_pad = (self.x_max / 2.0 - self.x_min / 2.0) * (2.0 * fraction);
        let y_pad = (self.y_max / 2.0 - self.y_min / 2.0) * (2.0 * fraction);
        Bounds::new(
            saturate(self.x_min - x_pad),
            saturate(self.x_max + x_pad),
            saturate(self.y_min - y_pad),
            saturate(self.y_max + y_pad),
        )
    }

    /// Map a point in these (data) bounds into `pixel` bounds, flipping y
    /// since SVG grows downwards.
    pub fn map_point(&self, x: f64, y: f64, pixel: &Bounds) -> (f64, f64) {
        let x_norm = normalize(x, self.x_min, self.x_max);
        let y_norm = normalize(y, self.y_min, self.y_max);
        (
            pixel.x_min + x_norm * pixel.width(),
            pixel.y_max - y_norm * pixel.height(),
        )
    }
}

fn saturate(v: f64) -> f64 {
    v.clamp(-f64::MAX, f64::MAX)
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(0.0, 1.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_point_flips_y() {
        let data = Bounds::new(0.0, 10.0, 0.0, 1.0);
        let pixel = Bounds::new(100.0, 200.0, 50.0, 150.0);
        assert_eq!(data.map_point(0.0, 0.0, &pixel), (100.0, 150.0));
        assert_eq!(data.map_point(10.0, 1.0, &pixel), (200.0, 50.0));
        assert_eq!(data.map_point(5.0, 0.5, &pixel), (150.0, 100.0));
    }

    #[test]
    fn test_map_point_near_float_limits() {
        let data = Bounds::new(-1e308, 1e308, 0.0, 1.0).pad(0.05);
        assert!(data.is_valid());
        let pixel = Bounds::new(0.0, 100.0, 0.0, 100.0);
        let (px, py) = data.map_point(1e308, 1.0, &pixel);
        assert!(px.is_finite() && py.is_finite());
        assert!(px > 50.0 && px <= 100.0);
    }

    #[test]
    fn test_empty_bounds_grow() {
        let mut b = Bounds::empty();
        assert!(!b.is_valid());
        b.include_point(1.0, -2.0);
        b.include_point(3.0, 4.0);
        assert!(b.is_valid());
        assert_eq!(b, Bounds::new(1.0, 3.0, -2.0, 4.0));
        assert_eq!(b.pad(0.5), Bounds::new(0.0, 4.0, -5.0, 7.0));
    }
}
