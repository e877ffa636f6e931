//! Marker shapes drawn at data points.
//!
//! Shapes follow the usual matplotlib marker table, including the numeric
//! codes 0-11 for ticks and carets.

use std::f64::consts::PI;
use std::fmt::Write as _;

use super::color::Color;

/// Direction a directional marker points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Angle in degrees, counter-clockwise from the positive x axis.
    fn degrees(self) -> f64 {
        match self {
            Direction::Right => 0.0,
            Direction::Up => 90.0,
            Direction::Left => 180.0,
            Direction::Down => 270.0,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Marker shapes for data points.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Marker {
    /// No marker
    #[default]
    None,
    /// Small filled dot
    Point,
    /// Circle marker
    Circle,
    /// Square marker
    Square,
    /// Upward-pointing triangle
    Triangle,
    /// Downward-pointing triangle
    TriangleDown,
    /// Diamond marker
    Diamond,
    /// Plus sign drawn with strokes
    Plus,
    /// Diagonal cross drawn with strokes
    Cross,
    /// Three spokes, one of them pointing in the given direction
    Tri(Direction),
    /// Single stroke from the point towards the direction
    Tick(Direction),
    /// Filled caret whose tip sits on the data point
    Caret(Direction),
    /// Filled caret whose base is centered on the data point
    CaretBase(Direction),
    /// Custom SVG path, centered at the origin
    Custom(String),
}

impl Marker {
    /// Parse a single-character marker symbol (".", "o", "1", "+", ...).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Marker::Point),
            'o' => Some(Marker::Circle),
            's' => Some(Marker::Square),
            '^' => Some(Marker::Triangle),
            'v' => Some(Marker::TriangleDown),
            'D' | 'd' => Some(Marker::Diamond),
            '+' => Some(Marker::Plus),
            'x' | 'X' => Some(Marker::Cross),
            '1' => Some(Marker::Tri(Direction::Down)),
            '2' => Some(Marker::Tri(Direction::Up)),
            '3' => Some(Marker::Tri(Direction::Left)),
            '4' => Some(Marker::Tri(Direction::Right)),
            _ => None,
        }
    }

    /// Parse a numeric marker code (0-3 ticks, 4-7 carets, 8-11 caret bases).
    pub fn from_code(code: i32) -> Option<Self> {
        const ORDER: [Direction; 4] = [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ];
        let dir = *ORDER.get(usize::try_from(code).ok()? % 4)?;
        match code {
            0..=3 => Some(Marker::Tick(dir)),
            4..=7 => Some(Marker::Caret(dir)),
            8..=11 => Some(Marker::CaretBase(dir)),
            _ => None,
        }
    }

    /// Short descriptive name, e.g. "tri_down" or "caretleftbase".
    pub fn name(&self) -> String {
        match self {
            Marker::None => "none".to_string(),
            Marker::Point => "point".to_string(),
            Marker::Circle => "circle".to_string(),
            Marker::Square => "square".to_string(),
            Marker::Triangle => "triangle_up".to_string(),
            Marker::TriangleDown => "triangle_down".to_string(),
            Marker::Diamond => "diamond".to_string(),
            Marker::Plus => "plus".to_string(),
            Marker::Cross => "x".to_string(),
            Marker::Tri(d) => format!("tri_{}", d.name()),
            Marker::Tick(d) => format!("tick{}", d.name()),
            Marker::Caret(d) => format!("caret{}", d.name()),
            Marker::CaretBase(d) => format!("caret{}base", d.name()),
            Marker::Custom(_) => "custom".to_string(),
        }
    }

    /// Whether the shape has an interior to fill. Stroke-only markers
    /// (plus, cross, tri, tick) are drawn with the edge color.
    pub fn is_filled(&self) -> bool {
        !matches!(
            self,
            Marker::None | Marker::Plus | Marker::Cross | Marker::Tri(_) | Marker::Tick(_)
        )
    }

    /// Generate SVG path data for the marker centered at origin.
    /// The size parameter is the radius (half the marker size).
    /// Circles and points return `None`; they render as `<circle>`.
    pub fn to_svg_path(&self, size: f64) -> Option<String> {
        match self {
            Marker::None | Marker::Point | Marker::Circle => None,
            Marker::Square => Some(polygon(&[
                (-size, -size),
                (size, -size),
                (size, size),
                (-size, size),
            ])),
            Marker::Triangle => Some(regular_polygon(3, size * 1.15, 90.0)),
            Marker::TriangleDown => Some(regular_polygon(3, size * 1.15, 270.0)),
            Marker::Diamond => Some(regular_polygon(4, size * 1.2, 90.0)),
            Marker::Plus => Some(spokes(&[0.0, 90.0, 180.0, 270.0], size)),
            Marker::Cross => Some(spokes(&[45.0, 135.0, 225.0, 315.0], size)),
            Marker::Tri(d) => {
                let a = d.degrees();
                Some(spokes(&[a, a + 120.0, a + 240.0], size))
            }
            Marker::Tick(d) => Some(spokes(&[d.degrees()], size)),
            Marker::Caret(d) => {
                // tip at the origin, body trailing behind it
                let (ux, uy) = unit(d.degrees());
                let (bx, by) = (-ux * size * 1.5, -uy * size * 1.5);
                Some(polygon(&[
                    (0.0, 0.0),
                    (bx - uy * size * 0.75, by + ux * size * 0.75),
                    (bx + uy * size * 0.75, by - ux * size * 0.75),
                ]))
            }
            Marker::CaretBase(d) => {
                let (ux, uy) = unit(d.degrees());
                Some(polygon(&[
                    (ux * size * 1.5, uy * size * 1.5),
                    (-uy * size * 0.75, ux * size * 0.75),
                    (uy * size * 0.75, -ux * size * 0.75),
                ]))
            }
            Marker::Custom(path) => Some(path.clone()),
        }
    }

    /// Check if this marker should be rendered as a circle element.
    pub fn is_circle(&self) -> bool {
        matches!(self, Marker::Circle | Marker::Point)
    }
}

fn unit(degrees: f64) -> (f64, f64) {
    let rad = degrees * PI / 180.0;
    (rad.cos(), rad.sin())
}

/// Closed path through points given in y-up coordinates.
fn polygon(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        let _ = write!(path, "{}{:.2},{:.2}", cmd, x, -y);
    }
    path.push_str(" Z");
    path
}

fn regular_polygon(sides: usize, radius: f64, start_degrees: f64) -> String {
    let points: Vec<(f64, f64)> = (0..sides)
        .map(|i| {
            let (ux, uy) = unit(start_degrees + 360.0 * i as f64 / sides as f64);
            (ux * radius, uy * radius)
        })
        .collect();
    polygon(&points)
}

/// Open strokes from the origin outwards.
fn spokes(angles: &[f64], length: f64) -> String {
    let mut path = String::new();
    for a in angles {
        let (ux, uy) = unit(*a);
        if !path.is_empty() {
            path.push(' ');
        }
        let _ = write!(path, "M0,0 L{:.2},{:.2}", ux * length, -uy * length);
    }
    path
}

/// Style configuration for markers.
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    /// The marker shape
    pub marker: Marker,
    /// Marker size (diameter in pixels)
    pub size: f64,
    /// Fill color
    pub fill: Color,
    /// Edge/stroke color
    pub edge_color: Color,
    /// Edge/stroke width
    pub edge_width: f64,
}

impl MarkerStyle {
    /// Create a new marker style.
    pub fn new(marker: Marker) -> Self {
        MarkerStyle {
            marker,
            ..Default::default()
        }
    }

    /// Set the marker size.
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set fill and edge to the same color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        let color = color.into();
        self.fill = color.clone();
        self.edge_color = color;
        self
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        let fill = if self.marker.is_filled() {
            self.fill.to_svg_string()
        } else {
            "none".to_string()
        };
        format!(
            "fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
            fill,
            self.edge_color.to_svg_string(),
            self.edge_width
        )
    }

    /// Render the marker at a specific position, returning SVG elements.
    pub fn render_at(&self, x: f64, y: f64) -> String {
        let style = self.to_svg_style();
        let radius = match self.marker {
            Marker::Point => self.size / 4.0,
            _ => self.size / 2.0,
        };

        if self.marker.is_circle() {
            format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>",
                x, y, radius, style
            )
        } else if let Some(path) = self.marker.to_svg_path(radius) {
            format!(
                "<path d=\"{}\" transform=\"translate({:.2},{:.2})\" {}/>",
                path, x, y, style
            )
        } else {
            String::new()
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            marker: Marker::Circle,
            size: 6.0,
            fill: Color::default(),
            edge_color: Color::default(),
            edge_width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Marker::from_symbol('.'), Some(Marker::Point));
        assert_eq!(Marker::from_symbol('1'), Some(Marker::Tri(Direction::Down)));
        assert_eq!(Marker::from_symbol('4'), Some(Marker::Tri(Direction::Right)));
        assert_eq!(Marker::from_symbol('+'), Some(Marker::Plus));
        assert_eq!(Marker::from_symbol('x'), Some(Marker::Cross));
        assert_eq!(Marker::from_symbol('?'), None);
    }

    #[test]
    fn test_codes() {
        assert_eq!(Marker::from_code(0), Some(Marker::Tick(Direction::Left)));
        assert_eq!(Marker::from_code(4), Some(Marker::Caret(Direction::Left)));
        assert_eq!(Marker::from_code(6), Some(Marker::Caret(Direction::Up)));
        assert_eq!(Marker::from_code(11), Some(Marker::CaretBase(Direction::Down)));
        assert_eq!(Marker::from_code(12), None);
        assert_eq!(Marker::from_code(-1), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Marker::Tri(Direction::Down).name(), "tri_down");
        assert_eq!(Marker::Caret(Direction::Right).name(), "caretright");
        assert_eq!(Marker::CaretBase(Direction::Up).name(), "caretupbase");
    }

    #[test]
    fn test_stroke_only_markers_are_unfilled() {
        let style = MarkerStyle::new(Marker::Tri(Direction::Up)).color("tab:red");
        let svg = style.render_at(10.0, 20.0);
        assert!(svg.starts_with("<path"));
        assert!(svg.contains("fill=\"none\""));
        assert!(svg.contains("stroke=\"#d62728\""));
        // three spokes
        assert_eq!(svg.matches("M0,0").count(), 3);
    }

    #[test]
    fn test_point_renders_as_small_circle() {
        let style = MarkerStyle::new(Marker::Point).size(8.0);
        let svg = style.render_at(1.0, 2.0);
        assert!(svg.starts_with("<circle"));
        assert!(svg.contains("r=\"2.00\""));
    }

    #[test]
    fn test_caret_tip_at_origin() {
        let path = Marker::Caret(Direction::Up).to_svg_path(2.0).unwrap();
        assert!(path.starts_with("M0.00,"));
        assert!(path.ends_with(" Z"));
        assert!(Marker::None.to_svg_path(2.0).is_none());
    }
}
