//! Error types for figure setup, configuration and rendering.

use std::fmt;
use std::io;

/// The main error type for plotting operations.
#[derive(Debug)]
pub enum PlotError {
    /// Error during IO operations (file writing, config reading)
    Io(io::Error),
    /// Malformed values, e.g. an unknown marker symbol
    InvalidData(String),
    /// Invalid configuration or parameters
    InvalidConfig(String),
    /// A style catalog with no entries; cycling over it is undefined
    EmptyCatalog(&'static str),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "IO error: {}", err),
            PlotError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlotError::EmptyCatalog(name) => write!(f, "Style catalog '{}' is empty", name),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

/// Result type alias for plotting operations.
pub type PlotResult<T> = Result<T, PlotError>;
