pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod render;


pub use color::Color;
pub use config::{Normalization, PlotConfig};
pub use error::{PlotError, Result};
pub use layout::area::PlotArea;
pub use layout::bounds::Bounds;
pub use layout::marker::PlotPoint;
pub use layout::scatter::ScatterPlot;
pub use layout::{Point, Rect, Size};
pub use render::{Alignment, Render, Rotation, Surface};

#[cfg(test)]
mod public_api {
    use super::*;

    #[test]
    fn public_api() {
        let area = PlotArea::new(Point(0., 0.), Point(300., 300.)).unwrap();
        let mut plot = ScatterPlot::new(
            area,
            vec![PlotPoint::at(Point(1., 2.)), PlotPoint::at(Point(3., 4.))],
        )
        .with_labels("x", "y");
        plot.add_point(PlotPoint::new(Point(5., 6.), 2., Color::RED));
        assert_eq!(plot.bounds(), Bounds::new(Point(1., 2.), Point(5., 6.)));

        let mut surface = crate::test::RecordingSurface::default();
        plot.render(&mut surface);
        assert_eq!(surface.ellipses().count(), 3);
    }
}
