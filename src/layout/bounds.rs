use ndarray::{s, Array2};
use ndarray_stats::QuantileExt;

use crate::layout::marker::PlotPoint;
use crate::layout::Point;

/// The componentwise minimum and maximum of a set of marker centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Bounds of nothing. Widening by it is a no-op.
    pub const EMPTY: Bounds = Bounds {
        min: Point(f64::INFINITY, f64::INFINITY),
        max: Point(f64::NEG_INFINITY, f64::NEG_INFINITY),
    };

    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Compute the bounds of all centers in one pass. NaN and infinite coordinates are ignored.
    pub fn of(points: &[PlotPoint]) -> Self {
        if points.is_empty() {
            return Self::EMPTY;
        }
        // N x 2 shaped matrix of centers, non-finite coordinates replaced by NaN
        let centers = Array2::from_shape_fn((points.len(), 2), |(i, j)| {
            let center = points[i].center();
            let v = if j == 0 { center.x() } else { center.y() };
            if v.is_finite() {
                v
            } else {
                f64::NAN
            }
        });

        // min_skipnan yields NaN if a column holds nothing else
        let or = |v: f64, fallback: f64| if v.is_nan() { fallback } else { v };
        Self {
            min: Point(
                or(*centers.slice(s![.., 0]).min_skipnan(), f64::INFINITY),
                or(*centers.slice(s![.., 1]).min_skipnan(), f64::INFINITY),
            ),
            max: Point(
                or(*centers.slice(s![.., 0]).max_skipnan(), f64::NEG_INFINITY),
                or(*centers.slice(s![.., 1]).max_skipnan(), f64::NEG_INFINITY),
            ),
        }
    }

    /// The smallest bounds containing both `self` and `other`.
    pub fn widen(&self, other: &Bounds) -> Self {
        Self {
            min: Point(self.min.x().min(other.min.x()), self.min.y().min(other.min.y())),
            max: Point(self.max.x().max(other.max.x()), self.max.y().max(other.max.y())),
        }
    }

    /// True when no finite point has been seen on either axis.
    pub fn is_empty(&self) -> bool {
        self.min.x() > self.max.x() || self.min.y() > self.max.y()
    }

    /// Extent along x and y.
    pub fn range(&self) -> (f64, f64) {
        (self.max.x() - self.min.x(), self.max.y() - self.min.y())
    }

    pub fn contains(&self, p: Point) -> bool {
        self.min.x() <= p.x() && p.x() <= self.max.x() && self.min.y() <= p.y() && p.y() <= self.max.y()
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::random_points;

    #[test]
    fn bounds_of_points() {
        let points = [
            PlotPoint::at(Point(0., 0.)),
            PlotPoint::at(Point(10., 0.)),
            PlotPoint::at(Point(0., 10.)),
        ];
        assert_eq!(Bounds::of(&points), Bounds::new(Point(0., 0.), Point(10., 10.)));
        assert_eq!(Bounds::of(&points).range(), (10., 10.));
    }

    #[test]
    fn negative_coordinates() {
        let points = [PlotPoint::at(Point(-3., 7.)), PlotPoint::at(Point(-8., -1.))];
        assert_eq!(Bounds::of(&points), Bounds::new(Point(-8., -1.), Point(-3., 7.)));
    }

    #[test]
    fn empty_input_is_the_empty_sentinel() {
        let bounds = Bounds::of(&[]);
        assert_eq!(bounds, Bounds::EMPTY);
        assert!(bounds.is_empty());
        assert!(!Bounds::new(Point(1., 1.), Point(1., 1.)).is_empty());
    }

    #[test]
    fn nan_coordinates_are_skipped() {
        let points = [
            PlotPoint::at(Point(f64::NAN, 2.)),
            PlotPoint::at(Point(4., f64::NAN)),
            PlotPoint::at(Point(1., 5.)),
        ];
        assert_eq!(Bounds::of(&points), Bounds::new(Point(1., 2.), Point(4., 5.)));

        let only_nan = [PlotPoint::at(Point(f64::NAN, 2.))];
        let bounds = Bounds::of(&only_nan);
        assert_eq!(bounds.min, Point(f64::INFINITY, 2.));
        assert_eq!(bounds.max, Point(f64::NEG_INFINITY, 2.));
        assert!(bounds.is_empty());
    }

    #[test]
    fn infinite_coordinates_are_skipped() {
        let points = [
            PlotPoint::at(Point(0., 0.)),
            PlotPoint::at(Point(10., 10.)),
            PlotPoint::at(Point(f64::INFINITY, 5.)),
            PlotPoint::at(Point(3., f64::NEG_INFINITY)),
        ];
        assert_eq!(Bounds::of(&points), Bounds::new(Point(0., 0.), Point(10., 10.)));
    }

    #[test]
    fn empty_is_identity_of_widen() {
        let bounds = Bounds::new(Point(-1., 2.), Point(3., 4.));
        assert_eq!(bounds.widen(&Bounds::EMPTY), bounds);
        assert_eq!(Bounds::EMPTY.widen(&bounds), bounds);
    }

    #[test]
    fn widening_in_chunks_equals_single_fold() {
        let points = random_points(200, 3);
        let whole = Bounds::of(&points);
        let chunked = points
            .chunks(17)
            .map(Bounds::of)
            .fold(Bounds::EMPTY, |acc, b| acc.widen(&b));
        assert_eq!(whole, chunked);
        for p in &points {
            assert!(whole.contains(p.center()));
        }
    }
}
