//! Output backends.

mod svg;

pub use svg::SvgBackend;
