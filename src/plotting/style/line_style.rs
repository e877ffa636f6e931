//! Line styling options.

use std::fmt;

use super::color::Color;

/// Dash pattern for lines.
///
/// Dash and gap lengths are expressed in multiples of the line width, so a
/// pattern keeps its look when lines get thicker.
#[derive(Debug, Clone, PartialEq)]
pub enum DashPattern {
    /// Solid line
    Solid,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Alternating dash-dot pattern
    DashDot,
    /// Phase offset plus alternating on/off lengths
    Custom { offset: f64, dashes: Vec<f64> },
}

impl DashPattern {
    /// Create a custom pattern from a phase offset and on/off lengths.
    pub fn custom(offset: f64, dashes: impl Into<Vec<f64>>) -> Self {
        DashPattern::Custom {
            offset,
            dashes: dashes.into(),
        }
    }

    /// Phase offset and on/off lengths, or `None` for a solid line.
    pub fn segments(&self) -> Option<(f64, &[f64])> {
        match self {
            DashPattern::Solid => None,
            DashPattern::Dashed => Some((0.0, &[3.7, 1.6][..])),
            DashPattern::Dotted => Some((0.0, &[1.0, 1.65][..])),
            DashPattern::DashDot => Some((0.0, &[6.4, 1.6, 1.0, 1.6][..])),
            DashPattern::Custom { dashes, .. } if dashes.is_empty() => None,
            DashPattern::Custom { offset, dashes } => Some((*offset, dashes.as_slice())),
        }
    }

    /// SVG `stroke-dasharray` value for a line of the given width.
    pub fn to_svg_dasharray(&self, line_width: f64) -> Option<String> {
        let (_, dashes) = self.segments()?;
        Some(
            dashes
                .iter()
                .map(|d| format_length(d * line_width))
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// SVG `stroke-dashoffset` value, omitted when the phase is zero.
    pub fn to_svg_dashoffset(&self, line_width: f64) -> Option<String> {
        match self.segments()? {
            (offset, _) if offset != 0.0 => Some(format_length(offset * line_width)),
            _ => None,
        }
    }

    /// Parse a named style or its shorthand ("dashed" or "--", ...).
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "-" | "solid" => Some(DashPattern::Solid),
            "--" | "dashed" => Some(DashPattern::Dashed),
            ":" | "dotted" => Some(DashPattern::Dotted),
            "-." | "dashdot" => Some(DashPattern::DashDot),
            _ => None,
        }
    }
}

impl Default for DashPattern {
    fn default() -> Self {
        DashPattern::Solid
    }
}

impl fmt::Display for DashPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashPattern::Solid => f.write_str("solid"),
            DashPattern::Dashed => f.write_str("dashed"),
            DashPattern::Dotted => f.write_str("dotted"),
            DashPattern::DashDot => f.write_str("dashdot"),
            DashPattern::Custom { offset, dashes } => {
                let dashes: Vec<String> = dashes.iter().map(|d| d.to_string()).collect();
                write!(f, "({}, ({}))", offset, dashes.join(", "))
            }
        }
    }
}

fn format_length(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    rounded.to_string()
}

/// Style configuration for lines.
#[derive(Debug, Clone)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
    /// Dash pattern
    pub dash: DashPattern,
    /// Line cap style
    pub cap: LineCap,
    /// Opacity (0.0 - 1.0)
    pub opacity: f64,
}

impl LineStyle {
    /// Create a new line style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the line width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the dash pattern.
    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    /// Set the opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        // Round caps would eat into short gaps
        let cap = match self.dash {
            DashPattern::Solid => self.cap,
            _ => LineCap::Butt,
        };
        let mut attrs = vec![
            format!("stroke=\"{}\"", self.color.to_svg_string()),
            format!("stroke-width=\"{}\"", format_length(self.width)),
            format!("stroke-linecap=\"{}\"", cap.to_svg_string()),
            "stroke-linejoin=\"round\"".to_string(),
            "fill=\"none\"".to_string(),
        ];

        if self.opacity < 1.0 {
            attrs.push(format!("stroke-opacity=\"{}\"", self.opacity));
        }

        if let Some(dasharray) = self.dash.to_svg_dasharray(self.width) {
            attrs.push(format!("stroke-dasharray=\"{}\"", dasharray));
        }
        if let Some(offset) = self.dash.to_svg_dashoffset(self.width) {
            attrs.push(format!("stroke-dashoffset=\"{}\"", offset));
        }

        attrs.join(" ")
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::default(),
            width: 1.5,
            dash: DashPattern::Solid,
            cap: LineCap::Round,
            opacity: 1.0,
        }
    }
}

/// Line cap styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat end at the exact endpoint
    Butt,
    /// Rounded end
    #[default]
    Round,
    /// Square end extending past the endpoint
    Square,
}

impl LineCap {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}
