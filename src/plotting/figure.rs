//! Figure (canvas) implementation.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::config::RcParams;
use crate::plotting::axes::Axes;
use crate::plotting::backend::SvgBackend;
use crate::plotting::element::{Bounds, Text};
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::style::{FillStyle, TextAnchor, ThemeConfig};

// Subplot area within the figure, as fractions of its size
const LEFT: f64 = 0.125;
const RIGHT: f64 = 0.9;
const BOTTOM: f64 = 0.11;
const TOP: f64 = 0.88;
/// Spacing between subplots relative to the average subplot size
const SPACING: f64 = 0.2;

/// Identifies one axes of a [`Figure`]. Only valid for the figure that
/// handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxesHandle(usize);

impl AxesHandle {
    /// Position of the axes in creation order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Handles of a grid of subplots in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxesGrid {
    rows: usize,
    cols: usize,
    handles: Vec<AxesHandle>,
}

impl AxesGrid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Handle at row `row`, column `col` (both zero-based).
    pub fn at(&self, row: usize, col: usize) -> Option<AxesHandle> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.handles.get(row * self.cols + col).copied()
    }

    /// Top-left handle. A grid always holds at least one axes.
    pub fn first(&self) -> AxesHandle {
        self.handles[0]
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = AxesHandle> + '_ {
        self.handles.iter().copied()
    }
}

/// A figure containing one or more axes.
#[derive(Debug)]
pub struct Figure {
    /// Size in inches
    pub figsize: (f64, f64),
    pub dpi: f64,
    /// Size in pixels
    pub width: f64,
    pub height: f64,
    pub theme: ThemeConfig,
    axes: Vec<Axes>,
    pub title: Option<Text>,
}

impl Figure {
    /// Create an empty figure of `figsize` inches rendered at `rc.dpi`.
    pub fn new(figsize: (f64, f64), rc: &RcParams) -> Self {
        Figure {
            figsize,
            dpi: rc.dpi,
            width: (figsize.0 * rc.dpi).round(),
            height: (figsize.1 * rc.dpi).round(),
            theme: ThemeConfig::from_rc(rc),
            axes: Vec::new(),
            title: None,
        }
    }

    /// Add a subplot at 1-based `index` of a `rows` x `cols` grid, filled
    /// row by row.
    pub fn add_subplot(&mut self, rows: usize, cols: usize, index: usize) -> PlotResult<AxesHandle> {
        if rows == 0 || cols == 0 {
            return Err(PlotError::InvalidConfig(format!(
                "subplot grid must have at least one row and column, got {}x{}",
                rows, cols
            )));
        }
        if index == 0 || index > rows * cols {
            return Err(PlotError::InvalidConfig(format!(
                "subplot index {} outside 1..={}",
                index,
                rows * cols
            )));
        }

        let (row, col) = ((index - 1) / cols, (index - 1) % cols);
        let position = subplot_position(rows, cols, row, col);
        debug!(
            "Adding subplot {} of {}x{} at ({:.3}, {:.3})-({:.3}, {:.3})",
            index, rows, cols, position.x_min, position.y_min, position.x_max, position.y_max
        );

        self.axes.push(Axes::new(self.theme.clone(), position));
        Ok(AxesHandle(self.axes.len() - 1))
    }

    /// Add a full `rows` x `cols` grid of subplots.
    pub fn subplots(&mut self, rows: usize, cols: usize) -> PlotResult<AxesGrid> {
        let handles = (1..=rows * cols)
            .map(|i| self.add_subplot(rows, cols, i))
            .collect::<PlotResult<Vec<_>>>()?;
        if handles.is_empty() {
            return Err(PlotError::InvalidConfig(format!(
                "subplot grid must have at least one row and column, got {}x{}",
                rows, cols
            )));
        }
        Ok(AxesGrid {
            rows,
            cols,
            handles,
        })
    }

    pub fn axes(&self, handle: AxesHandle) -> PlotResult<&Axes> {
        self.axes.get(handle.0).ok_or_else(|| unknown_handle(handle))
    }

    pub fn axes_mut(&mut self, handle: AxesHandle) -> PlotResult<&mut Axes> {
        self.axes.get_mut(handle.0).ok_or_else(|| unknown_handle(handle))
    }

    pub fn axes_count(&self) -> usize {
        self.axes.len()
    }

    /// Set a centered title above all subplots.
    pub fn suptitle(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(Text::new(title, self.theme.title_style.clone().bold()));
        self
    }

    /// Render the figure to an SVG document.
    pub fn render(&mut self) -> String {
        let mut backend = SvgBackend::new(self.width, self.height);
        backend.draw_rect(
            0.0,
            0.0,
            self.width,
            self.height,
            &FillStyle::new(self.theme.background.clone()),
        );

        if let Some(ref title) = self.title {
            let y = self.height * (1.0 - TOP) / 2.0 + title.style.font_size * 0.35;
            backend.draw_text(&title.placed(self.width / 2.0, y, TextAnchor::Middle));
        }

        for (i, axes) in self.axes.iter_mut().enumerate() {
            axes.render(&mut backend, &format!("axes-clip-{}", i));
        }

        backend.render()
    }

    /// Render and write the figure as SVG to `path`.
    pub fn save(&mut self, path: impl AsRef<Path>) -> PlotResult<()> {
        let path = path.as_ref();
        let svg = self.render();
        fs::write(path, svg.as_bytes())?;
        info!(
            "Saved {}x{} px figure with {} axes to {}",
            self.width,
            self.height,
            self.axes.len(),
            path.display()
        );
        Ok(())
    }
}

fn unknown_handle(handle: AxesHandle) -> PlotError {
    PlotError::InvalidConfig(format!("no axes with index {} in this figure", handle.0))
}

fn subplot_position(rows: usize, cols: usize, row: usize, col: usize) -> Bounds {
    // cell = n * width + (n - 1) * SPACING * width
    let cell_w = (RIGHT - LEFT) / (cols as f64 + SPACING * (cols as f64 - 1.0));
    let cell_h = (TOP - BOTTOM) / (rows as f64 + SPACING * (rows as f64 - 1.0));

    let left = LEFT + col as f64 * cell_w * (1.0 + SPACING);
    let top = TOP - row as f64 * cell_h * (1.0 + SPACING);
    Bounds::new(left, left + cell_w, top - cell_h, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_size_from_dpi() {
        let fig = Figure::new((4.0, 3.0), &RcParams::default());
        assert_eq!((fig.width, fig.height), (1200.0, 900.0));
    }

    #[test]
    fn test_grid_layout_row_major() {
        let mut fig = Figure::new((8.0, 6.0), &RcParams::default());
        let grid = fig.subplots(2, 3).unwrap();
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.at(1, 2).unwrap().index(), 5);
        assert!(grid.at(2, 0).is_none());

        let top_left = fig.axes(grid.first()).unwrap().position;
        let bottom_right = fig.axes(grid.at(1, 2).unwrap()).unwrap().position;
        assert!((top_left.x_min - LEFT).abs() < 1e-12);
        assert!((top_left.y_max - TOP).abs() < 1e-12);
        assert!((bottom_right.x_max - RIGHT).abs() < 1e-12);
        assert!((bottom_right.y_min - BOTTOM).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_subplots_rejected() {
        let mut fig = Figure::new((4.0, 3.0), &RcParams::default());
        assert!(matches!(fig.add_subplot(0, 1, 1), Err(PlotError::InvalidConfig(_))));
        assert!(matches!(fig.add_subplot(1, 1, 2), Err(PlotError::InvalidConfig(_))));
        assert!(fig.axes_mut(AxesHandle(0)).is_err());
    }

    #[test]
    fn test_render_contains_every_axes() {
        let mut fig = Figure::new((4.0, 3.0), &RcParams::default());
        let grid = fig.subplots(1, 2).unwrap();
        for handle in grid.iter() {
            fig.axes_mut(handle)
                .unwrap()
                .plot(vec![0.0, 1.0], vec![0.0, 1.0])
                .build();
        }
        fig.suptitle("Both & more");
        let svg = fig.render();
        assert!(svg.contains("axes-clip-0"));
        assert!(svg.contains("axes-clip-1"));
        assert!(svg.contains("Both &amp; more"));
    }
}
