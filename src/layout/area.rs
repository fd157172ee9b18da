use tracing::debug;

use crate::config::LABEL_MARGIN;
use crate::error::{PlotError, Result};
use crate::layout::{Point, Rect, Size};

/// The rectangle a plot is drawn into.
///
/// The area is split into a data rectangle on the upper right, a strip for the
/// x label along the bottom and a strip for the y label along the left edge.
/// ```text
///   +----+----------------------+ upper_right
///   | y  |                      |
///   |    |     data_rect        |
///   |    |                      |
///   +----+----------------------+
///   |    |     x_label_area     |
///   +----+----------------------+
/// lower_left
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    lower_left: Point,
    upper_right: Point,
    padding: Point,
}

impl PlotArea {
    /// Create an area from its corners.
    ///
    /// Fails if a corner is not finite, if the width does not exceed the label
    /// margin or if the height does not exceed four label margins.
    pub fn new(lower_left: Point, upper_right: Point) -> Result<Self> {
        for corner in [lower_left, upper_right] {
            if !corner.is_finite() {
                debug!(x = corner.x(), y = corner.y(), "rejecting plot area");
                return Err(PlotError::NonFiniteCorner {
                    x: corner.x(),
                    y: corner.y(),
                });
            }
        }

        let width = upper_right.x() - lower_left.x();
        let height = upper_right.y() - lower_left.y();
        if width <= LABEL_MARGIN {
            debug!(width, "rejecting plot area");
            return Err(PlotError::degenerate("width", width, LABEL_MARGIN));
        }
        if height <= 4. * LABEL_MARGIN {
            debug!(height, "rejecting plot area");
            return Err(PlotError::degenerate("height", height, 4. * LABEL_MARGIN));
        }

        Ok(Self {
            lower_left,
            upper_right,
            padding: Point::ORIGIN,
        })
    }

    /// Keep markers `padding` away from the edges of the data rectangle.
    pub fn with_padding(self, padding: Point) -> Result<Self> {
        let data = self.data_rect();
        let valid = |p: f64, extent: f64| p.is_finite() && p >= 0. && 2. * p <= extent;
        if !valid(padding.x(), data.width()) || !valid(padding.y(), data.height()) {
            return Err(PlotError::InvalidPadding {
                x: padding.x(),
                y: padding.y(),
            });
        }
        Ok(Self { padding, ..self })
    }

    pub fn lower_left(&self) -> Point {
        self.lower_left
    }

    pub fn upper_right(&self) -> Point {
        self.upper_right
    }

    pub fn padding(&self) -> Point {
        self.padding
    }

    pub fn width(&self) -> f64 {
        self.upper_right.x() - self.lower_left.x()
    }

    pub fn height(&self) -> f64 {
        self.upper_right.y() - self.lower_left.y()
    }

    /// The whole area as a rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.lower_left, self.upper_right)
    }

    /// The region markers are drawn into.
    pub fn data_rect(&self) -> Rect {
        Rect(
            self.lower_left.offset(LABEL_MARGIN, LABEL_MARGIN),
            Size(self.width() - LABEL_MARGIN, self.height() - LABEL_MARGIN),
        )
    }

    pub fn x_label_area(&self) -> Rect {
        Rect(
            self.lower_left.offset(LABEL_MARGIN, 0.),
            Size(self.width() - LABEL_MARGIN, LABEL_MARGIN),
        )
    }

    pub fn y_label_area(&self) -> Rect {
        Rect(
            self.lower_left.offset(0., LABEL_MARGIN),
            Size(LABEL_MARGIN, self.height() - 4. * LABEL_MARGIN),
        )
    }

    /// The data rectangle shrunk by the padding; points are scaled into this.
    pub fn plot_rect(&self) -> Rect {
        self.data_rect().inset(self.padding.x(), self.padding.y())
    }
}
