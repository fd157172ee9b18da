//! Plot configuration.

use crate::color::Color;

/// Height of the label strips and width of the y label strip.
pub const LABEL_MARGIN: f64 = 20.;

/// Marker radius used by [`crate::layout::marker::PlotPoint::at`].
pub const DEFAULT_RADIUS: f64 = 3.;

/// How a data coordinate is turned into a fraction of the data range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// `(v - min) / range`.
    #[default]
    FromMinimum,
    /// `v / range`. Only lands inside the plot when the minimum is the origin.
    RawRatio,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub normalization: Normalization,
    /// Stroke the left and bottom edges of the data rectangle.
    pub show_axes: bool,
    pub label_color: Color,
    pub axis_color: Color,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            normalization: Normalization::FromMinimum,
            show_axes: false,
            label_color: Color::BLACK,
            axis_color: Color::BLACK,
        }
    }
}
