//! Styling: colors, line and marker styles, text, theme, and the series
//! style cycler.

pub mod color;
pub mod cycler;
pub mod fill_style;
pub mod line_style;
pub mod marker;
pub mod text_style;
pub mod theme;

pub use color::{tableau_colors, Color};
pub use cycler::{SeriesStyle, StyleCatalogs, StyleCycler, DEFAULT_MARKERS_PER_SERIES};
pub use fill_style::FillStyle;
pub use line_style::{DashPattern, LineCap, LineStyle};
pub use marker::{Direction, Marker, MarkerStyle};
pub use text_style::{FontWeight, TextAnchor, TextStyle};
pub use theme::ThemeConfig;
