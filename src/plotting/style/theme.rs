//! Theme derived from print parameters.

use super::color::{tableau_colors, Color};
use super::text_style::TextStyle;
use crate::config::RcParams;

/// Theme configuration containing all style settings, in pixels.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Pixels per typographic point (dpi / 72)
    pub px_per_pt: f64,
    /// Background color for the figure
    pub background: Color,
    /// Background color for the plot area
    pub plot_background: Color,
    /// Color for axis lines and ticks
    pub axis_color: Color,
    /// Color for grid lines
    pub grid_color: Color,
    /// Whether to show grid by default
    pub show_grid: bool,
    pub title_style: TextStyle,
    pub label_style: TextStyle,
    pub tick_style: TextStyle,
    pub legend_style: TextStyle,
    /// Color cycle for series drawn without an explicit color
    pub color_cycle: Vec<Color>,
    /// Default line width
    pub line_width: f64,
    /// Default marker size (diameter)
    pub marker_size: f64,
    /// Marker edge width
    pub marker_edge_width: f64,
    /// Axis line width
    pub axis_width: f64,
    /// Grid line width
    pub grid_width: f64,
    /// Tick mark length
    pub tick_length: f64,
    /// Gap between tick marks and their labels
    pub tick_padding: f64,
}

impl ThemeConfig {
    /// Build a theme for the given print parameters.
    ///
    /// Sizes follow matplotlib's defaults in points, converted with the
    /// configured dpi; titles are 1.2x the base font size.
    pub fn from_rc(rc: &RcParams) -> Self {
        let px = rc.dpi / 72.0;
        let base = rc.font_size * px;
        ThemeConfig {
            px_per_pt: px,
            background: Color::WHITE,
            plot_background: Color::WHITE,
            axis_color: Color::BLACK,
            grid_color: Color::rgb(176, 176, 176),
            show_grid: false,
            title_style: TextStyle::new().font_size(base * 1.2),
            label_style: TextStyle::new().font_size(base),
            tick_style: TextStyle::new().font_size(base),
            legend_style: TextStyle::new().font_size(rc.legend_font_size * px),
            color_cycle: tableau_colors(),
            line_width: 1.5 * px,
            marker_size: 6.0 * px,
            marker_edge_width: 1.0 * px,
            axis_width: 0.8 * px,
            grid_width: 0.8 * px,
            tick_length: 3.5 * px,
            tick_padding: 3.5 * px,
        }
    }

    /// Convert a length in points to pixels.
    pub fn pt(&self, points: f64) -> f64 {
        points * self.px_per_pt
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::from_rc(&RcParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_scaled_by_dpi() {
        let rc = RcParams {
            dpi: 144.0,
            font_size: 8.0,
            legend_font_size: 6.0,
        };
        let theme = ThemeConfig::from_rc(&rc);
        assert_eq!(theme.px_per_pt, 2.0);
        assert_eq!(theme.label_style.font_size, 16.0);
        assert_eq!(theme.legend_style.font_size, 12.0);
        assert_eq!(theme.line_width, 3.0);
        assert_eq!(theme.pt(10.0), 20.0);
    }

    #[test]
    fn test_default_cycle_is_tableau() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.color_cycle.len(), 10);
        assert_eq!(theme.color_cycle[0], Color::named("tab:blue"));
    }
}
