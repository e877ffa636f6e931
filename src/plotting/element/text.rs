//! Text element for titles and labels.

use crate::plotting::style::{TextAnchor, TextStyle};

/// A positioned piece of text.
#[derive(Debug, Clone)]
pub struct Text {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub style: TextStyle,
}

impl Text {
    /// Create a text element with the given style; position is set when
    /// the owning axes is laid out.
    pub fn new(content: impl Into<String>, style: TextStyle) -> Self {
        Text {
            content: content.into(),
            x: 0.0,
            y: 0.0,
            style,
        }
    }

    /// Copy of this text placed at `(x, y)` with the given anchor.
    pub fn placed(&self, x: f64, y: f64, anchor: TextAnchor) -> Text {
        let mut t = self.clone();
        t.x = x;
        t.y = y;
        t.style.anchor = anchor;
        t
    }

    /// Generate SVG for this text element.
    pub fn to_svg(&self) -> String {
        let transform = if self.style.rotation != 0.0 {
            format!(
                " transform=\"rotate({},{:.2},{:.2})\"",
                self.style.rotation, self.x, self.y
            )
        } else {
            String::new()
        };

        format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" {}{}>{}</text>",
            self.x,
            self.y,
            self.style.to_svg_attrs(),
            transform,
            escape_xml(&self.content)
        )
    }
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaped_and_rotated() {
        let t = Text::new("f(x) < g(x) & \"h\"", TextStyle::new().rotation(-90.0))
            .placed(10.0, 20.0, TextAnchor::Middle);
        let svg = t.to_svg();
        assert!(svg.contains("f(x) &lt; g(x) &amp; &quot;h&quot;"));
        assert!(svg.contains("rotate(-90,10.00,20.00)"));
        assert!(svg.contains("text-anchor=\"middle\""));
    }
}
