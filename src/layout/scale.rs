use tracing::debug;

use crate::config::Normalization;
use crate::layout::bounds::Bounds;
use crate::layout::marker::PlotPoint;
use crate::layout::{Point, Rect};

/// Maps markers from data space into a device rectangle.
#[derive(Debug, Clone, Copy)]
pub struct Scaler {
    bounds: Bounds,
    target: Rect,
    normalization: Normalization,
}

impl Scaler {
    pub fn new(bounds: Bounds, target: Rect, normalization: Normalization) -> Self {
        Self {
            bounds,
            target,
            normalization,
        }
    }

    /// Fraction of the data range covered by `value` along one axis.
    ///
    /// An axis without extent (all samples share the coordinate, or nothing has
    /// been seen yet) maps everything onto its middle.
    fn fraction(&self, value: f64, min: f64, range: f64) -> f64 {
        if !(range.is_finite() && range > 0.) {
            debug!(range, "degenerate data range, centering");
            return 0.5;
        }
        match self.normalization {
            Normalization::FromMinimum => (value - min) / range,
            Normalization::RawRatio => value / range,
        }
    }

    /// Scale a marker into the target rectangle.
    ///
    /// The returned center is the lower left corner of the marker's bounding
    /// square, i.e. the device position shifted by `-radius` on both axes.
    /// Radius and color are kept.
    pub fn scale(&self, point: &PlotPoint) -> PlotPoint {
        let (range_x, range_y) = self.bounds.range();
        let pct_x = self.fraction(point.center().x(), self.bounds.min.x(), range_x);
        let pct_y = self.fraction(point.center().y(), self.bounds.min.y(), range_y);

        let x = pct_x * (self.target.max_x() - self.target.min_x()) + self.target.min_x()
            - point.radius();
        let y = pct_y * (self.target.max_y() - self.target.min_y()) + self.target.min_y()
            - point.radius();
        point.with_center(Point(x, y))
    }

    /// The marker as it is drawn: centered on its device position.
    pub fn to_device(&self, point: &PlotPoint) -> PlotPoint {
        let scaled = self.scale(point);
        scaled.with_center(scaled.center().offset(point.radius(), point.radius()))
    }
}
