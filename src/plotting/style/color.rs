//! Color definitions and named-color resolution.

use std::fmt;

/// Hex values of the Tableau palette, in cycle order.
const TABLEAU: [(&str, &str); 10] = [
    ("blue", "#1f77b4"),
    ("orange", "#ff7f0e"),
    ("green", "#2ca02c"),
    ("red", "#d62728"),
    ("purple", "#9467bd"),
    ("brown", "#8c564b"),
    ("pink", "#e377c2"),
    ("gray", "#7f7f7f"),
    ("olive", "#bcbd22"),
    ("cyan", "#17becf"),
];

/// Represents a color for plotting elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// RGB color with values 0-255
    Rgb(u8, u8, u8),
    /// RGBA color with alpha 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// Named color (e.g., "red", "tab:blue", "C0")
    Named(String),
}

impl Color {
    /// Create a new RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Create a named color. The name is resolved when rendering.
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::Rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)? as f64 / 255.0,
            )),
            _ => None,
        }
    }

    /// Convert the color to an SVG-compatible string.
    pub fn to_svg_string(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Named(name) => resolve_named_color(name),
        }
    }

    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::Rgb(211, 211, 211);
}

impl Default for Color {
    fn default() -> Self {
        Color::Named("tab:blue".to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            other => f.write_str(&other.to_svg_string()),
        }
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            Color::from_hex(s).unwrap_or_else(|| Color::Named(s.to_string()))
        } else {
            Color::Named(s.to_string())
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

/// The Tableau color cycle as named colors (`tab:blue` .. `tab:cyan`).
pub fn tableau_colors() -> Vec<Color> {
    TABLEAU
        .iter()
        .map(|(name, _)| Color::Named(format!("tab:{}", name)))
        .collect()
}

/// Resolve a named color to its hex value.
fn resolve_named_color(name: &str) -> String {
    let lower = name.to_lowercase();

    if let Some(tab) = lower.strip_prefix("tab:") {
        let tab = if tab == "grey" { "gray" } else { tab };
        if let Some((_, hex)) = TABLEAU.iter().find(|(n, _)| *n == tab) {
            return hex.to_string();
        }
    }

    // "C0".."C9" index the same cycle
    if let Some(idx) = lower.strip_prefix('c').and_then(|d| d.parse::<usize>().ok()) {
        if idx < TABLEAU.len() {
            return TABLEAU[idx].1.to_string();
        }
    }

    match lower.as_str() {
        "black" | "k" => "#000000".to_string(),
        "white" | "w" => "#FFFFFF".to_string(),
        "red" | "r" => "#FF0000".to_string(),
        "green" | "g" => "#008000".to_string(),
        "blue" | "b" => "#0000FF".to_string(),
        "yellow" | "y" => "#FFFF00".to_string(),
        "cyan" | "c" => "#00FFFF".to_string(),
        "magenta" | "m" => "#FF00FF".to_string(),
        "orange" => "#FFA500".to_string(),
        "purple" => "#800080".to_string(),
        "gray" | "grey" => "#808080".to_string(),
        "lightgray" | "lightgrey" => "#D3D3D3".to_string(),
        "brown" => "#A52A2A".to_string(),
        "pink" => "#FFC0CB".to_string(),
        "olive" => "#808000".to_string(),
        // might still be a valid CSS color
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tableau_names_resolve() {
        assert_eq!(Color::named("tab:blue").to_svg_string(), "#1f77b4");
        assert_eq!(Color::named("tab:cyan").to_svg_string(), "#17becf");
        assert_eq!(Color::named("TAB:Grey").to_svg_string(), "#7f7f7f");
        assert_eq!(Color::named("C3").to_svg_string(), "#d62728");
    }

    #[test]
    fn test_basic_names_and_passthrough() {
        assert_eq!(Color::named("black").to_svg_string(), "#000000");
        assert_eq!(Color::named("k").to_svg_string(), "#000000");
        assert_eq!(Color::named("rebeccapurple").to_svg_string(), "rebeccapurple");
        // c10 is outside the cycle and not a CSS name either
        assert_eq!(Color::named("C10").to_svg_string(), "C10");
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(Color::from("#00ff00"), Color::Rgb(0, 255, 0));
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("zzzzzz").is_none());
    }

    #[test]
    fn test_tableau_cycle_order() {
        let colors = tableau_colors();
        assert_eq!(colors.len(), 10);
        assert_eq!(colors[0], Color::named("tab:blue"));
        assert_eq!(colors[9], Color::named("tab:cyan"));
        assert_eq!(colors[1].to_string(), "tab:orange");
    }
}
