use crate::color::Color;
use crate::config::DEFAULT_RADIUS;
use crate::error::{PlotError, Result};
use crate::layout::{Point, Rect, Size};
use crate::render::{Render, Surface};

/// A filled circle marking one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    center: Point,
    radius: f64,
    color: Color,
}

impl PlotPoint {
    pub fn new(center: Point, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Like [`PlotPoint::new`] but rejects negative or non-finite radii.
    pub fn try_new(center: Point, radius: f64, color: Color) -> Result<Self> {
        if radius.is_finite() && radius >= 0. {
            Ok(Self::new(center, radius, color))
        } else {
            Err(PlotError::InvalidRadius(radius))
        }
    }

    /// A marker with the default radius and color.
    pub fn at(center: Point) -> Self {
        Self::new(center, DEFAULT_RADIUS, Color::BLACK)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The square the circle is inscribed in.
    pub fn bounding_rect(&self) -> Rect {
        Rect(
            self.center.offset(-self.radius, -self.radius),
            Size::square(2. * self.radius),
        )
    }

    /// A finite center and a finite, non-negative radius.
    pub fn is_drawable(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite() && self.radius >= 0.
    }

    pub(crate) fn with_center(&self, center: Point) -> Self {
        Self { center, ..*self }
    }
}

impl Render for PlotPoint {
    fn render(&self, surface: &mut impl Surface) {
        surface.save_state();
        surface.set_fill_color(self.color);
        surface.fill_ellipse(self.bounding_rect());
        surface.restore_state();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{Op, RecordingSurface};

    #[test]
    fn defaults() {
        let p = PlotPoint::at(Point(1., 2.));
        assert_eq!(p.radius(), 3.);
        assert_eq!(p.color(), Color::BLACK);
    }

    #[test]
    fn radius_validation() {
        assert!(PlotPoint::try_new(Point(0., 0.), 0., Color::RED).is_ok());
        assert_eq!(
            PlotPoint::try_new(Point(0., 0.), -1., Color::RED),
            Err(PlotError::InvalidRadius(-1.))
        );
        assert!(PlotPoint::try_new(Point(0., 0.), f64::NAN, Color::RED).is_err());
        assert!(PlotPoint::try_new(Point(0., 0.), f64::INFINITY, Color::RED).is_err());
    }

    #[test]
    fn drawable() {
        assert!(PlotPoint::new(Point(1., 1.), 0., Color::RED).is_drawable());
        assert!(!PlotPoint::new(Point(1., 1.), -4., Color::RED).is_drawable());
        assert!(!PlotPoint::new(Point(1., 1.), f64::NAN, Color::RED).is_drawable());
        assert!(!PlotPoint::new(Point(f64::INFINITY, 1.), 1., Color::RED).is_drawable());
    }

    #[test]
    fn renders_inscribed_circle() {
        let mut surface = RecordingSurface::default();
        PlotPoint::new(Point(10., 20.), 5., Color::RED).render(&mut surface);
        assert_eq!(
            surface.ops,
            vec![
                Op::Save,
                Op::Fill(Color::RED),
                Op::Ellipse(Rect(Point(5., 15.), Size(10., 10.)), Color::RED),
                Op::Restore,
            ]
        );
        assert!(surface.is_balanced());
    }
}
