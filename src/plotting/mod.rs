//! Minimal matplotlib-like plotting with SVG output.
//!
//! Only what styled multi-series line charts need: a [`Figure`] holding a
//! grid of [`Axes`], line plots with dash patterns and sparse markers, a
//! legend, and the [`StyleCycler`] that picks series styles.

pub mod axes;
pub mod backend;
pub mod data;
pub mod element;
pub mod error;
pub mod figure;
pub mod plot;
pub mod scale;
pub mod style;

pub use axes::{Axes, LinePlotBuilder};
pub use data::IntoPlotData;
pub use element::{Bounds, LegendPosition};
pub use error::{PlotError, PlotResult};
pub use figure::{AxesGrid, AxesHandle, Figure};
pub use plot::{LinePlot, Plot};
pub use scale::{LinearScale, Scale};
pub use style::{
    Color, DashPattern, Direction, LineStyle, Marker, MarkerStyle, SeriesStyle, StyleCatalogs,
    StyleCycler, TextStyle, ThemeConfig,
};
