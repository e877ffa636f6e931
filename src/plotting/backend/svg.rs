//! SVG document assembly.

use crate::plotting::element::Text;
use crate::plotting::style::{FillStyle, LineStyle};

/// Accumulates SVG elements for one figure and renders the final document.
#[derive(Debug)]
pub struct SvgBackend {
    /// Image width in pixels
    pub width: f64,
    /// Image height in pixels
    pub height: f64,
    content: Vec<String>,
    /// Clip paths referenced from `content`
    defs: Vec<String>,
}

impl SvgBackend {
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            content: Vec::new(),
            defs: Vec::new(),
        }
    }

    /// Add pre-rendered SVG elements.
    pub fn add_content(&mut self, content: impl Into<String>) {
        let content = content.into();
        if !content.is_empty() {
            self.content.push(content);
        }
    }

    pub fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), style: &LineStyle) {
        self.content.push(format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
            from.0,
            from.1,
            to.0,
            to.1,
            style.to_svg_style()
        ));
    }

    /// Draw an open path through `points`. Fewer than two points draw nothing.
    pub fn draw_path(&mut self, points: &[(f64, f64)], style: &LineStyle) {
        if points.len() < 2 {
            return;
        }
        let data: Vec<String> = points
            .iter()
            .enumerate()
            .map(|(i, (x, y))| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{}{:.2},{:.2}", cmd, x, y)
            })
            .collect();
        self.content.push(format!(
            "<path d=\"{}\" {}/>",
            data.join(" "),
            style.to_svg_style()
        ));
    }

    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &FillStyle) {
        self.content.push(format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>",
            x,
            y,
            width,
            height,
            style.to_svg_style()
        ));
    }

    pub fn draw_text(&mut self, text: &Text) {
        self.content.push(text.to_svg());
    }

    /// Clip everything until [`SvgBackend::end_clip`] to the given rectangle.
    pub fn start_clip(&mut self, id: &str, x: f64, y: f64, width: f64, height: f64) {
        self.defs.push(format!(
            "<clipPath id=\"{}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath>",
            id, x, y, width, height
        ));
        self.content.push(format!("<g clip-path=\"url(#{})\">", id));
    }

    pub fn end_clip(&mut self) {
        self.content.push("</g>".to_string());
    }

    /// Render the complete SVG document.
    pub fn render(self) -> String {
        let defs = if self.defs.is_empty() {
            String::new()
        } else {
            format!("<defs>\n  {}\n</defs>\n", self.defs.join("\n  "))
        };

        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.0} {h:.0}\">\n\
             {defs}{body}\n</svg>\n",
            w = self.width,
            h = self.height,
            defs = defs,
            body = self.content.join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_document() {
        let mut backend = SvgBackend::new(1200.0, 900.0);
        backend.start_clip("clip0", 0.0, 0.0, 10.0, 10.0);
        backend.draw_path(&[(0.0, 0.0), (5.0, 5.0)], &LineStyle::new());
        backend.draw_path(&[(1.0, 1.0)], &LineStyle::new());
        backend.end_clip();
        let svg = backend.render();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("width=\"1200\" height=\"900\""));
        assert!(svg.contains("<clipPath id=\"clip0\">"));
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.contains("M0.00,0.00 L5.00,5.00"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
