//! Error types for plot construction.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// A corner of the plot area is NaN or infinite.
    #[error("plot area corner ({x}, {y}) is not finite")]
    NonFiniteCorner { x: f64, y: f64 },

    /// The plot area is too small to hold the label margins.
    #[error("plot area {dimension} {extent} must exceed {required}")]
    DegenerateArea {
        dimension: &'static str,
        extent: f64,
        required: f64,
    },

    /// Padding is negative, not finite or larger than the data rectangle.
    #[error("invalid padding ({x}, {y})")]
    InvalidPadding { x: f64, y: f64 },

    /// Marker radius is negative or not finite.
    #[error("invalid marker radius {0}")]
    InvalidRadius(f64),
}

impl PlotError {
    pub fn degenerate(dimension: &'static str, extent: f64, required: f64) -> Self {
        Self::DegenerateArea {
            dimension,
            extent,
            required,
        }
    }
}
