//! Round-robin style selection for multi-series plots.
//!
//! A [`StyleCycler`] keeps three independent counters over three fixed
//! catalogs: colors, markers and dash patterns. Every call to
//! [`StyleCycler::next_style`] returns the current combination and advances
//! all three counters by one. Because the catalogs have different lengths
//! (10, 15 and 6 by default), consecutive series differ in all three
//! dimensions and stay distinguishable in grayscale print as well.
//!
//! Counters can be set to arbitrary values to make several series share one
//! dimension, e.g. group related curves under one color while markers and
//! dash patterns keep varying:
//!
//! ```
//! use plotstyle::plotting::StyleCycler;
//!
//! let mut styles = StyleCycler::new();
//! let first = styles.next_style(None);
//! styles.set_color_index(0);
//! let second = styles.next_style(None);
//! assert_eq!(first.color, second.color);
//! assert_ne!(first.marker, second.marker);
//! ```

use log::trace;

use super::color::{tableau_colors, Color};
use super::line_style::DashPattern;
use super::marker::Marker;
use crate::plotting::error::{PlotError, PlotResult};

/// Default number of markers drawn along one series.
pub const DEFAULT_MARKERS_PER_SERIES: usize = 15;

/// The fixed, non-empty lists a [`StyleCycler`] walks through.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleCatalogs {
    colors: Vec<Color>,
    markers: Vec<Marker>,
    line_patterns: Vec<DashPattern>,
}

impl StyleCatalogs {
    /// Build catalogs from explicit lists. Every list must have at least
    /// one entry.
    pub fn new(
        colors: Vec<Color>,
        markers: Vec<Marker>,
        line_patterns: Vec<DashPattern>,
    ) -> PlotResult<Self> {
        if colors.is_empty() {
            return Err(PlotError::EmptyCatalog("colors"));
        }
        if markers.is_empty() {
            return Err(PlotError::EmptyCatalog("markers"));
        }
        if line_patterns.is_empty() {
            return Err(PlotError::EmptyCatalog("line_patterns"));
        }
        Ok(StyleCatalogs {
            colors,
            markers,
            line_patterns,
        })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn line_patterns(&self) -> &[DashPattern] {
        &self.line_patterns
    }
}

impl Default for StyleCatalogs {
    /// Tableau colors; dot, tri and cross markers followed by carets;
    /// six dense dash patterns.
    fn default() -> Self {
        let mut markers: Vec<Marker> = ['.', '1', '2', '3', '4', '+', 'x']
            .into_iter()
            .filter_map(Marker::from_symbol)
            .collect();
        markers.extend((4..=11).filter_map(Marker::from_code));

        let line_patterns = vec![
            DashPattern::custom(0.0, vec![1.0, 1.0]),
            DashPattern::custom(0.0, vec![8.0, 1.0]),
            DashPattern::custom(0.0, vec![5.0, 1.0]),
            DashPattern::custom(0.0, vec![3.0, 2.0, 5.0, 2.0]),
            DashPattern::custom(0.0, vec![3.0, 1.0, 1.0, 1.0]),
            DashPattern::custom(0.0, vec![6.0, 1.0, 6.0, 1.0, 6.0, 1.0]),
        ];

        StyleCatalogs {
            colors: tableau_colors(),
            markers,
            line_patterns,
        }
    }
}

/// One series' worth of drawing style, as handed out by [`StyleCycler`].
///
/// Pass it to [`LinePlotBuilder::style`](crate::plotting::LinePlotBuilder::style).
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    pub color: Color,
    pub marker: Marker,
    pub pattern: DashPattern,
    /// Draw a marker on every `stride`-th point. Only set when the number
    /// of points was known; never zero.
    pub stride: Option<usize>,
}

/// Hands out distinguishable color/marker/dash combinations in a fixed
/// round-robin order.
///
/// Not synchronized; share behind a lock if several threads draw.
#[derive(Debug, Clone)]
pub struct StyleCycler {
    catalogs: StyleCatalogs,
    color_index: i64,
    marker_index: i64,
    pattern_index: i64,
}

impl StyleCycler {
    /// Create a cycler over the default catalogs.
    pub fn new() -> Self {
        Self::with_catalogs(StyleCatalogs::default())
    }

    /// Create a cycler over custom catalogs.
    pub fn with_catalogs(catalogs: StyleCatalogs) -> Self {
        StyleCycler {
            catalogs,
            color_index: 0,
            marker_index: 0,
            pattern_index: 0,
        }
    }

    pub fn catalogs(&self) -> &StyleCatalogs {
        &self.catalogs
    }

    /// Reset all three counters to zero.
    pub fn reset(&mut self) {
        self.color_index = 0;
        self.marker_index = 0;
        self.pattern_index = 0;
    }

    /// Set the color counter. Any value is accepted; it is reduced modulo
    /// the catalog length when a style is taken.
    pub fn set_color_index(&mut self, index: i64) {
        self.color_index = index;
    }

    /// Set the marker counter.
    pub fn set_marker_index(&mut self, index: i64) {
        self.marker_index = index;
    }

    /// Set the dash pattern counter.
    pub fn set_pattern_index(&mut self, index: i64) {
        self.pattern_index = index;
    }

    pub fn color_index(&self) -> i64 {
        self.color_index
    }

    pub fn marker_index(&self) -> i64 {
        self.marker_index
    }

    pub fn pattern_index(&self) -> i64 {
        self.pattern_index
    }

    /// Take the next style, aiming for [`DEFAULT_MARKERS_PER_SERIES`]
    /// markers when `num_points` is given.
    pub fn next_style(&mut self, num_points: Option<usize>) -> SeriesStyle {
        self.next_style_with(num_points, DEFAULT_MARKERS_PER_SERIES)
    }

    /// Take the next style and advance every counter by one.
    ///
    /// With `num_points`, the marker stride is `num_points / markers_per_series`
    /// rounded down and clamped to at least 1. A `markers_per_series` of 0
    /// counts as 1.
    ///
    /// Counters wrap from `i64::MAX` to `i64::MIN` instead of panicking, so
    /// the round-robin order is only continuous for counters below
    /// `i64::MAX`.
    pub fn next_style_with(
        &mut self,
        num_points: Option<usize>,
        markers_per_series: usize,
    ) -> SeriesStyle {
        let style = SeriesStyle {
            color: pick(&self.catalogs.colors, self.color_index).clone(),
            marker: pick(&self.catalogs.markers, self.marker_index).clone(),
            pattern: pick(&self.catalogs.line_patterns, self.pattern_index).clone(),
            stride: num_points.map(|n| (n / markers_per_series.max(1)).max(1)),
        };

        trace!(
            "Series style [{}, {}, {}]: color={} marker={} pattern={} stride={:?}",
            self.color_index,
            self.marker_index,
            self.pattern_index,
            style.color,
            style.marker.name(),
            style.pattern,
            style.stride
        );

        self.color_index = self.color_index.wrapping_add(1);
        self.marker_index = self.marker_index.wrapping_add(1);
        self.pattern_index = self.pattern_index.wrapping_add(1);

        style
    }
}

impl Default for StyleCycler {
    fn default() -> Self {
        Self::new()
    }
}

/// Floor-modulo lookup; catalogs are never empty.
fn pick<T>(items: &[T], index: i64) -> &T {
    let len = items.len() as i64;
    &items[index.rem_euclid(len) as usize]
}
