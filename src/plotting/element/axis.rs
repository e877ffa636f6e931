//! Axis configuration.

use crate::plotting::style::{LineStyle, TextStyle, ThemeConfig};

/// Configuration for one axis (line, ticks, tick labels).
#[derive(Debug, Clone)]
pub struct AxisConfig {
    /// Whether the axis is visible
    pub visible: bool,
    /// Axis line style
    pub line_style: LineStyle,
    /// Length of tick marks in pixels
    pub tick_length: f64,
    /// Gap between tick marks and labels
    pub tick_padding: f64,
    pub tick_label_style: TextStyle,
    /// Target number of ticks
    pub num_ticks: usize,
    /// Custom tick positions (overrides automatic generation)
    pub tick_positions: Option<Vec<f64>>,
}

impl AxisConfig {
    /// Axis styled after the given theme.
    pub fn themed(theme: &ThemeConfig) -> Self {
        AxisConfig {
            visible: true,
            line_style: LineStyle::new()
                .color(theme.axis_color.clone())
                .width(theme.axis_width),
            tick_length: theme.tick_length,
            tick_padding: theme.tick_padding,
            tick_label_style: theme.tick_style.clone(),
            num_ticks: 6,
            tick_positions: None,
        }
    }

    /// Format a tick value as a label.
    pub fn format_tick(&self, value: f64) -> String {
        if value == 0.0 {
            "0".to_string()
        } else if value.abs() >= 1e4 || value.abs() < 1e-3 {
            format!("{:.1e}", value)
        } else if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            // trim trailing zeros of a short fixed representation
            let s = format!("{:.3}", value);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self::themed(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tick() {
        let axis = AxisConfig::default();
        assert_eq!(axis.format_tick(0.0), "0");
        assert_eq!(axis.format_tick(2.0), "2");
        assert_eq!(axis.format_tick(0.25), "0.25");
        assert_eq!(axis.format_tick(-0.5), "-0.5");
        assert_eq!(axis.format_tick(20000.0), "2.0e4");
    }
}
