//! Figure setup for print output and style cycling for multi-series plots.
//!
//! - [`setup`] creates a print-sized [`plotting::Figure`] and hands back
//!   explicit handles to its subplots.
//! - [`plotting::StyleCycler`] assigns each new series a color, marker and
//!   dash pattern so that curves stay distinguishable without relying on
//!   color alone.
//!
//! ```no_run
//! use plotstyle::config::RcParams;
//! use plotstyle::plotting::StyleCycler;
//! use plotstyle::setup::{setup, SetupOptions};
//!
//! let (mut fig, grid) = setup(&SetupOptions::default(), &RcParams::default())?;
//! let mut styles = StyleCycler::new();
//!
//! let x: Vec<f64> = (0..80).map(|i| i as f64 / 79.0).collect();
//! let y: Vec<f64> = x.iter().map(|v| (v * 10.0).sin()).collect();
//!
//! let ax = fig.axes_mut(grid.first())?;
//! ax.plot(&x, &y)
//!     .style(&styles.next_style(Some(x.len())))
//!     .label("f(x) = sin(x)")
//!     .build();
//! ax.legend();
//! fig.save("example.svg")?;
//! # Ok::<(), plotstyle::plotting::PlotError>(())
//! ```

pub mod config;
pub mod plotting;
pub mod setup;
