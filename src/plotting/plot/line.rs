//! Line plot with optional, thinned-out markers.

use crate::plotting::element::Bounds;
use crate::plotting::plot::Plot;
use crate::plotting::style::{LineStyle, MarkerStyle};

/// A polyline through `(x, y)` pairs.
#[derive(Debug, Clone)]
pub struct LinePlot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub line_style: LineStyle,
    pub marker_style: Option<MarkerStyle>,
    /// Draw a marker only at every n-th point, starting with the first
    pub markevery: Option<usize>,
    pub label: Option<String>,
}

impl LinePlot {
    /// Pairs beyond the shorter of `x` and `y` are ignored.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        LinePlot {
            x,
            y,
            line_style: LineStyle::default(),
            marker_style: None,
            markevery: None,
            label: None,
        }
    }

    fn finite_points(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .enumerate()
            .filter(|(_, (x, y))| x.is_finite() && y.is_finite())
            .map(|(i, (&x, &y))| (i, x, y))
    }

    /// Indices of the points that carry a marker.
    pub fn marker_indices(&self) -> Vec<usize> {
        let n = self.x.len().min(self.y.len());
        let stride = self.markevery.unwrap_or(1).max(1);
        (0..n).step_by(stride).collect()
    }
}

impl Plot for LinePlot {
    fn bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::empty();
        for (_, x, y) in self.finite_points() {
            bounds.include_point(x, y);
        }
        if bounds.is_valid() {
            Some(bounds)
        } else {
            None
        }
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn line_style(&self) -> Option<LineStyle> {
        Some(self.line_style.clone())
    }

    fn marker_style(&self) -> Option<MarkerStyle> {
        self.marker_style.clone()
    }

    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String {
        let mut svg = Vec::new();

        // a non-finite point lifts the pen, starting a new subpath
        let mut commands = Vec::new();
        let mut segments = 0;
        let mut pen_down = false;
        for (&x, &y) in self.x.iter().zip(self.y.iter()) {
            if !(x.is_finite() && y.is_finite()) {
                pen_down = false;
                continue;
            }
            let (px, py) = data_bounds.map_point(x, y, pixel_bounds);
            let cmd = if pen_down { 'L' } else { 'M' };
            if pen_down {
                segments += 1;
            }
            commands.push(format!("{}{:.2},{:.2}", cmd, px, py));
            pen_down = true;
        }

        if segments > 0 {
            svg.push(format!(
                "<path d=\"{}\" {}/>",
                commands.join(" "),
                self.line_style.to_svg_style()
            ));
        }

        if let Some(ref marker_style) = self.marker_style {
            for i in self.marker_indices() {
                let (x, y) = (self.x[i], self.y[i]);
                if !(x.is_finite() && y.is_finite()) {
                    continue;
                }
                let (px, py) = data_bounds.map_point(x, y, pixel_bounds);
                let marker = marker_style.render_at(px, py);
                if !marker.is_empty() {
                    svg.push(marker);
                }
            }
        }

        svg.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::style::Marker;

    fn sample(n: usize) -> LinePlot {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y = x.iter().map(|v| v * v).collect();
        LinePlot::new(x, y)
    }

    #[test]
    fn test_bounds_skip_non_finite() {
        let mut plot = sample(4);
        plot.y[3] = f64::NAN;
        let bounds = plot.bounds().unwrap();
        assert_eq!((bounds.x_min, bounds.x_max), (0.0, 2.0));
        assert_eq!((bounds.y_min, bounds.y_max), (0.0, 4.0));
        assert!(LinePlot::new(vec![], vec![]).bounds().is_none());
    }

    #[test]
    fn test_marker_indices_follow_stride() {
        let mut plot = sample(10);
        assert_eq!(plot.marker_indices().len(), 10);
        plot.markevery = Some(3);
        assert_eq!(plot.marker_indices(), vec![0, 3, 6, 9]);
        plot.markevery = Some(0);
        assert_eq!(plot.marker_indices().len(), 10);
    }

    #[test]
    fn test_render_draws_markers_at_stride() {
        let mut plot = sample(10);
        plot.marker_style = Some(MarkerStyle::new(Marker::Square));
        plot.markevery = Some(5);
        let data = plot.bounds().unwrap();
        let pixel = Bounds::new(0.0, 100.0, 0.0, 100.0);
        let svg = plot.render_svg(&data, &pixel);
        // one polyline plus two square markers
        assert_eq!(svg.matches("<path").count(), 3);
        assert!(svg.contains("M0.00,100.00"));
    }

    #[test]
    fn test_gap_breaks_the_line() {
        let mut plot = LinePlot::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0, 1.0, f64::NAN, 3.0, 4.0]);
        plot.x[4] = f64::INFINITY;
        let data = Bounds::new(0.0, 4.0, 0.0, 4.0);
        let pixel = Bounds::new(0.0, 100.0, 0.0, 100.0);
        let svg = plot.render_svg(&data, &pixel);
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.contains("d=\"M0.00,100.00 L25.00,75.00 M75.00,25.00\""));
    }

    #[test]
    fn test_huge_span_renders_finite_coordinates() {
        let plot = LinePlot::new(vec![-1e308, 0.0, 1e308], vec![0.0, 1.0, 0.0]);
        let data = plot.bounds().unwrap().pad(0.05);
        let pixel = Bounds::new(0.0, 100.0, 0.0, 100.0);
        let svg = plot.render_svg(&data, &pixel);
        assert!(svg.contains("<path"));
        assert!(!svg.contains("NaN") && !svg.contains("inf"));
    }
}
