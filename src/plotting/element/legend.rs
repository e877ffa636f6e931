//! Legend configuration.

use crate::plotting::style::{Color, FillStyle, LineStyle, MarkerStyle, TextStyle, ThemeConfig};

/// Position of the legend inside the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LegendPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A single entry in the legend.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub line_style: Option<LineStyle>,
    pub marker_style: Option<MarkerStyle>,
}

impl LegendEntry {
    /// Create a new legend entry with just a label.
    pub fn new(label: impl Into<String>) -> Self {
        LegendEntry {
            label: label.into(),
            line_style: None,
            marker_style: None,
        }
    }

    /// Set the line style.
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    /// Set the marker style.
    pub fn marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = Some(style);
        self
    }
}

/// Legend configuration. Sizes are in pixels.
#[derive(Debug, Clone)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub position: LegendPosition,
    pub visible: bool,
    /// Frame fill and border
    pub background: FillStyle,
    pub text_style: TextStyle,
    /// Padding inside the frame
    pub padding: f64,
    /// Length of the line sample
    pub line_length: f64,
    /// Gap between sample and label
    pub label_gap: f64,
}

impl Legend {
    /// Legend sized after the theme's legend font.
    pub fn themed(theme: &ThemeConfig) -> Self {
        let font = theme.legend_style.font_size;
        Legend {
            entries: Vec::new(),
            position: LegendPosition::TopRight,
            visible: true,
            background: FillStyle::new(Color::WHITE)
                .opacity(0.8)
                .stroke(Color::rgb(204, 204, 204), theme.pt(0.8)),
            text_style: theme.legend_style.clone(),
            padding: font * 0.5,
            line_length: font * 2.0,
            label_gap: font * 0.8,
        }
    }

    /// Add an entry to the legend.
    pub fn add_entry(&mut self, entry: LegendEntry) {
        self.entries.push(entry);
    }

    /// Height of one entry row.
    pub fn row_height(&self) -> f64 {
        self.text_style.font_size * 1.4
    }

    /// Frame size, estimating label width from character count.
    pub fn frame_size(&self) -> (f64, f64) {
        let longest = self
            .entries
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0) as f64;
        let width = self.padding * 2.0
            + self.line_length
            + self.label_gap
            + longest * self.text_style.font_size * 0.55;
        let height = self.padding * 2.0 + self.entries.len() as f64 * self.row_height();
        (width, height)
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::themed(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_grows_with_entries_and_labels() {
        let mut legend = Legend::default();
        let (w0, h0) = legend.frame_size();
        legend.add_entry(LegendEntry::new("short"));
        let (w1, h1) = legend.frame_size();
        legend.add_entry(LegendEntry::new("a much longer label"));
        let (w2, h2) = legend.frame_size();
        assert!(w1 > w0 && w2 > w1);
        assert!(h1 > h0 && h2 > h1);
    }
}
