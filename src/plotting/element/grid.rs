//! Grid configuration.

use crate::plotting::style::{LineStyle, ThemeConfig};

/// Configuration for grid lines at the major ticks.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub visible: bool,
    pub line_style: LineStyle,
    /// Whether to show X grid lines
    pub show_x: bool,
    /// Whether to show Y grid lines
    pub show_y: bool,
}

impl GridConfig {
    /// Grid styled after the given theme.
    pub fn themed(theme: &ThemeConfig) -> Self {
        GridConfig {
            visible: theme.show_grid,
            line_style: LineStyle::new()
                .color(theme.grid_color.clone())
                .width(theme.grid_width),
            show_x: true,
            show_y: true,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::themed(&ThemeConfig::default())
    }
}
