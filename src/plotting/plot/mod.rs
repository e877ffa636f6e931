//! Plot types drawn inside an axes.

mod line;

pub use line::LinePlot;

use crate::plotting::element::{Bounds, LegendEntry};
use crate::plotting::style::{LineStyle, MarkerStyle};

/// A data series that can report its extent and render itself.
pub trait Plot: std::fmt::Debug {
    /// Data bounds over the finite points, or `None` if there are none.
    fn bounds(&self) -> Option<Bounds>;

    fn label(&self) -> Option<&str>;

    fn line_style(&self) -> Option<LineStyle> {
        None
    }

    fn marker_style(&self) -> Option<MarkerStyle> {
        None
    }

    /// Legend entry for labelled plots.
    fn legend_entry(&self) -> Option<LegendEntry> {
        self.label().map(|label| {
            let mut entry = LegendEntry::new(label);
            if let Some(style) = self.line_style() {
                entry = entry.line_style(style);
            }
            if let Some(style) = self.marker_style() {
                entry = entry.marker_style(style);
            }
            entry
        })
    }

    /// Render SVG elements mapping `data_bounds` onto `pixel_bounds`.
    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String;
}
