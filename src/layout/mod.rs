pub mod area;
pub mod bounds;
pub mod marker;
pub mod scale;
pub mod scatter;

/// A location in 2D space, either in data coordinates or on the device.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub const ORIGIN: Point = Point(0., 0.);

    pub fn x(&self) -> f64 {
        self.0
    }
    pub fn y(&self) -> f64 {
        self.1
    }

    /// Shift by the given vector.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point(self.0 + dx, self.1 + dy)
    }

    pub fn with_x(&self, x: f64) -> Point {
        Point(x, self.1)
    }

    pub fn with_y(&self, y: f64) -> Point {
        Point(self.0, y)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size(pub f64, pub f64);

impl Size {
    pub fn square(edge: f64) -> Self {
        Size(edge, edge)
    }
    pub fn width(&self) -> f64 {
        self.0
    }
    pub fn height(&self) -> f64 {
        self.1
    }
}

/// An axis aligned rectangle given by its lower left corner and its size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect(pub Point, pub Size);

impl Rect {
    pub fn from_corners(lower_left: Point, upper_right: Point) -> Self {
        Rect(
            lower_left,
            Size(
                upper_right.x() - lower_left.x(),
                upper_right.y() - lower_left.y(),
            ),
        )
    }

    pub fn origin(&self) -> Point {
        self.0
    }

    pub fn size(&self) -> Size {
        self.1
    }

    pub fn width(&self) -> f64 {
        self.1.width()
    }

    pub fn height(&self) -> f64 {
        self.1.height()
    }

    pub fn min_x(&self) -> f64 {
        self.0.x()
    }

    pub fn min_y(&self) -> f64 {
        self.0.y()
    }

    pub fn max_x(&self) -> f64 {
        self.0.x() + self.width()
    }

    pub fn max_y(&self) -> f64 {
        self.0.y() + self.height()
    }

    pub fn lower_left(&self) -> Point {
        self.0
    }

    pub fn upper_right(&self) -> Point {
        Point(self.max_x(), self.max_y())
    }

    pub fn center(&self) -> Point {
        Point(
            self.min_x() + self.width() / 2.,
            self.min_y() + self.height() / 2.,
        )
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Shrink by `dx` on the left and right and by `dy` on the bottom and top.
    pub fn inset(&self, dx: f64, dy: f64) -> Rect {
        Rect(
            self.0.offset(dx, dy),
            Size(self.width() - 2. * dx, self.height() - 2. * dy),
        )
    }
}
