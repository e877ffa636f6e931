//! One-call figure creation sized for print.

use log::debug;

use crate::config::RcParams;
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::figure::{AxesGrid, Figure};

/// Base figure size in inches, before scaling.
pub const DEFAULT_FIGSIZE: (f64, f64) = (4.0, 3.0);

/// Options for [`setup`].
#[derive(Debug, Clone, PartialEq)]
pub struct SetupOptions {
    /// Base size in inches; `None` uses [`DEFAULT_FIGSIZE`]
    pub figsize: Option<(f64, f64)>,
    /// Multiplier applied to both dimensions of the base size
    pub scale: f64,
    pub nrows: usize,
    pub ncols: usize,
}

impl Default for SetupOptions {
    fn default() -> Self {
        SetupOptions {
            figsize: None,
            scale: 1.0,
            nrows: 1,
            ncols: 1,
        }
    }
}

impl SetupOptions {
    /// Effective figure size in inches.
    pub fn effective_figsize(&self) -> (f64, f64) {
        let (w, h) = self.figsize.unwrap_or(DEFAULT_FIGSIZE);
        (w * self.scale, h * self.scale)
    }

    fn validate(&self) -> PlotResult<()> {
        if self.nrows == 0 || self.ncols == 0 {
            return Err(PlotError::InvalidConfig(format!(
                "subplot grid must have at least one row and column, got {}x{}",
                self.nrows, self.ncols
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(PlotError::InvalidConfig(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        let (w, h) = self.effective_figsize();
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(PlotError::InvalidConfig(format!(
                "figure size must be positive, got {}x{} in",
                w, h
            )));
        }
        Ok(())
    }
}

/// Create a fresh figure of `nrows` x `ncols` subplots with `rc` applied.
///
/// Returns the figure together with handles to its axes; pass a handle to
/// [`Figure::axes_mut`] to draw into that subplot.
pub fn setup(options: &SetupOptions, rc: &RcParams) -> PlotResult<(Figure, AxesGrid)> {
    options.validate()?;
    if !(rc.dpi.is_finite() && rc.dpi > 0.0) {
        return Err(PlotError::InvalidConfig(format!("dpi must be positive, got {}", rc.dpi)));
    }

    let figsize = options.effective_figsize();
    debug!(
        "Creating {:.2}x{:.2} in figure at {} dpi with {}x{} subplots",
        figsize.0, figsize.1, rc.dpi, options.nrows, options.ncols
    );

    let mut fig = Figure::new(figsize, rc);
    let grid = fig.subplots(options.nrows, options.ncols)?;
    Ok((fig, grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        let (fig, grid) = setup(&SetupOptions::default(), &RcParams::default()).unwrap();
        assert_eq!(fig.figsize, (4.0, 3.0));
        assert_eq!(fig.dpi, 300.0);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_scale_applies_to_both_dimensions() {
        let options = SetupOptions {
            scale: 2.0,
            ..Default::default()
        };
        let (fig, _) = setup(&options, &RcParams::default()).unwrap();
        assert_eq!(fig.figsize, (8.0, 6.0));

        let options = SetupOptions {
            figsize: Some((5.0, 2.0)),
            scale: 1.5,
            ..Default::default()
        };
        assert_eq!(options.effective_figsize(), (7.5, 3.0));
    }

    #[test]
    fn test_grid_handles() {
        let options = SetupOptions {
            nrows: 2,
            ncols: 2,
            ..Default::default()
        };
        let (mut fig, grid) = setup(&options, &RcParams::default()).unwrap();
        assert_eq!(grid.len(), 4);
        assert_eq!(fig.axes_count(), 4);
        for handle in grid.iter() {
            assert!(fig.axes_mut(handle).is_ok());
        }
    }

    #[test]
    fn test_each_call_creates_a_fresh_figure() {
        let (mut first, grid) = setup(&SetupOptions::default(), &RcParams::default()).unwrap();
        first
            .axes_mut(grid.first())
            .unwrap()
            .plot(vec![0.0, 1.0], vec![0.0, 1.0])
            .build();
        let (second, grid) = setup(&SetupOptions::default(), &RcParams::default()).unwrap();
        assert_eq!(second.axes(grid.first()).unwrap().plot_count(), 0);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let rc = RcParams::default();
        for options in [
            SetupOptions { nrows: 0, ..Default::default() },
            SetupOptions { ncols: 0, ..Default::default() },
            SetupOptions { scale: 0.0, ..Default::default() },
            SetupOptions { scale: f64::NAN, ..Default::default() },
            SetupOptions { figsize: Some((-1.0, 3.0)), ..Default::default() },
        ] {
            assert!(matches!(setup(&options, &rc), Err(PlotError::InvalidConfig(_))));
        }
    }
}
