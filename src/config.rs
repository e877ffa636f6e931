//! Print parameters and the optional JSON configuration file.
//!
//! Everything is optional; an empty object `{}` yields the defaults:
//!
//! ```json
//! {
//!   "rc": { "dpi": 300, "font_size": 8, "legend_font_size": 6 },
//!   "figsize": [4.0, 3.0],
//!   "markers_per_series": 15,
//!   "styles": {
//!     "colors": ["tab:blue", "#ff7f0e"],
//!     "markers": [".", "x", 4],
//!     "line_patterns": [[0, [1, 1]], "dashed"]
//!   }
//! }
//! ```

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::style::{
    Color, DashPattern, Marker, StyleCatalogs, DEFAULT_MARKERS_PER_SERIES,
};

/// Resolution and font sizes applied to every new figure. Font sizes are
/// in points.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RcParams {
    pub dpi: f64,
    pub font_size: f64,
    pub legend_font_size: f64,
}

impl Default for RcParams {
    fn default() -> Self {
        RcParams {
            dpi: 300.0,
            font_size: 8.0,
            legend_font_size: 6.0,
        }
    }
}

/// A marker given either as its symbol (`"x"`) or as a numeric code (`4`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MarkerSpec {
    Code(i32),
    Symbol(String),
}

impl MarkerSpec {
    pub fn to_marker(&self) -> PlotResult<Marker> {
        let marker = match self {
            MarkerSpec::Code(code) => Marker::from_code(*code),
            MarkerSpec::Symbol(symbol) => {
                let mut chars = symbol.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Marker::from_symbol(c),
                    _ => None,
                }
            }
        };
        marker.ok_or_else(|| PlotError::InvalidData(format!("unknown marker {:?}", self)))
    }
}

/// A dash pattern given by name (`"dashed"`, `"--"`) or as
/// `[offset, [on, off, ...]]` in units of the line width.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PatternSpec {
    Named(String),
    Custom(f64, Vec<f64>),
}

impl PatternSpec {
    pub fn to_pattern(&self) -> PlotResult<DashPattern> {
        match self {
            PatternSpec::Named(name) => DashPattern::from_name(name).ok_or_else(|| {
                PlotError::InvalidData(format!("unknown line pattern {:?}", name))
            }),
            PatternSpec::Custom(offset, dashes) => {
                if !offset.is_finite() {
                    return Err(PlotError::InvalidData(format!(
                        "dash offset must be a finite number, got {}",
                        offset
                    )));
                }
                if dashes.is_empty() || dashes.iter().any(|d| !d.is_finite() || *d < 0.0) {
                    return Err(PlotError::InvalidData(format!(
                        "dash lengths must be non-negative numbers, got {:?}",
                        dashes
                    )));
                }
                Ok(DashPattern::custom(*offset, dashes.clone()))
            }
        }
    }
}

/// Replacement style catalogs. Omitted lists keep their defaults.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct StyleConfig {
    pub colors: Option<Vec<String>>,
    pub markers: Option<Vec<MarkerSpec>>,
    pub line_patterns: Option<Vec<PatternSpec>>,
}

/// Top-level configuration file.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PlotConfig {
    pub rc: RcParams,
    /// Base figure size in inches, before scaling
    pub figsize: Option<(f64, f64)>,
    pub markers_per_series: usize,
    pub styles: Option<StyleConfig>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            rc: RcParams::default(),
            figsize: None,
            markers_per_series: DEFAULT_MARKERS_PER_SERIES,
            styles: None,
        }
    }
}

impl PlotConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let config = Self::from_reader(BufReader::new(file))?;
        info!("Loaded plot configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> PlotResult<Self> {
        let config: PlotConfig = serde_json::from_reader(reader)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        debug!("{:?}", config);
        Ok(config)
    }

    /// Style catalogs with the configured overrides applied.
    pub fn catalogs(&self) -> PlotResult<StyleCatalogs> {
        let defaults = StyleCatalogs::default();
        let styles = match self.styles {
            Some(ref styles) => styles,
            None => return Ok(defaults),
        };

        let colors = match styles.colors {
            Some(ref colors) => colors.iter().map(|c| parse_color(c)).collect::<PlotResult<_>>()?,
            None => defaults.colors().to_vec(),
        };
        let markers = match styles.markers {
            Some(ref markers) => markers.iter().map(MarkerSpec::to_marker).collect::<PlotResult<_>>()?,
            None => defaults.markers().to_vec(),
        };
        let line_patterns = match styles.line_patterns {
            Some(ref patterns) => patterns.iter().map(PatternSpec::to_pattern).collect::<PlotResult<_>>()?,
            None => defaults.line_patterns().to_vec(),
        };

        StyleCatalogs::new(colors, markers, line_patterns)
    }
}

fn parse_color(s: &str) -> PlotResult<Color> {
    if s.starts_with('#') {
        Color::from_hex(s).ok_or_else(|| PlotError::InvalidData(format!("invalid hex color {:?}", s)))
    } else if s.trim().is_empty() {
        Err(PlotError::InvalidData("empty color name".to_string()))
    } else {
        Ok(Color::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::style::Direction;
    use std::io::Cursor;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = PlotConfig::from_reader(Cursor::new("{}")).unwrap();
        assert_eq!(config.rc, RcParams::default());
        assert_eq!(config.figsize, None);
        assert_eq!(config.markers_per_series, 15);
        assert_eq!(config.catalogs().unwrap(), StyleCatalogs::default());
    }

    #[test]
    fn test_overrides() {
        let json = r##"{
            "rc": {"dpi": 150},
            "figsize": [6, 4],
            "markers_per_series": 5,
            "styles": {
                "colors": ["black", "#112233"],
                "markers": ["x", 7],
                "line_patterns": [[0.5, [2, 1]], "--"]
            }
        }"##;
        let config = PlotConfig::from_reader(Cursor::new(json)).unwrap();
        assert_eq!(config.rc.dpi, 150.0);
        assert_eq!(config.rc.font_size, 8.0);
        assert_eq!(config.figsize, Some((6.0, 4.0)));
        assert_eq!(config.markers_per_series, 5);

        let catalogs = config.catalogs().unwrap();
        assert_eq!(catalogs.colors(), &[Color::named("black"), Color::rgb(0x11, 0x22, 0x33)]);
        assert_eq!(catalogs.markers(), &[Marker::Cross, Marker::Caret(Direction::Down)]);
        assert_eq!(
            catalogs.line_patterns(),
            &[DashPattern::custom(0.5, vec![2.0, 1.0]), DashPattern::Dashed]
        );
    }

    #[test]
    fn test_partial_styles_keep_other_defaults() {
        let json = r#"{"styles": {"colors": ["red"]}}"#;
        let catalogs = PlotConfig::from_reader(Cursor::new(json))
            .unwrap()
            .catalogs()
            .unwrap();
        assert_eq!(catalogs.colors().len(), 1);
        assert_eq!(catalogs.markers().len(), 15);
        assert_eq!(catalogs.line_patterns().len(), 6);
    }

    #[test]
    fn test_invalid_styles_rejected() {
        let unknown = r#"{"styles": {"markers": ["?"]}}"#;
        let config = PlotConfig::from_reader(Cursor::new(unknown)).unwrap();
        assert!(matches!(config.catalogs(), Err(PlotError::InvalidData(_))));

        let code = r#"{"styles": {"markers": [42]}}"#;
        let config = PlotConfig::from_reader(Cursor::new(code)).unwrap();
        assert!(matches!(config.catalogs(), Err(PlotError::InvalidData(_))));

        let empty = r#"{"styles": {"line_patterns": []}}"#;
        let config = PlotConfig::from_reader(Cursor::new(empty)).unwrap();
        assert!(matches!(config.catalogs(), Err(PlotError::EmptyCatalog("line_patterns"))));
    }

    #[test]
    fn test_non_finite_dash_offset_rejected() {
        assert!(matches!(
            PatternSpec::Custom(f64::NAN, vec![1.0, 1.0]).to_pattern(),
            Err(PlotError::InvalidData(_))
        ));
        assert!(matches!(
            PatternSpec::Custom(f64::INFINITY, vec![1.0, 1.0]).to_pattern(),
            Err(PlotError::InvalidData(_))
        ));
        assert!(PatternSpec::Custom(-0.5, vec![2.0, 1.0]).to_pattern().is_ok());
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        match PlotConfig::from_reader(Cursor::new("{ not json")) {
            Err(PlotError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
