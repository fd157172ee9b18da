use svg::node::element::{Ellipse, Line, Text};
use svg::{Document, Node};
use tracing::{debug, warn};

use crate::color::Color;
use crate::layout::scatter::ScatterPlot;
use crate::layout::{Point, Rect, Size};
use crate::render::{Alignment, Render, Rotation, Surface};

/// A [`Surface`] writing SVG elements into a document.
///
/// The frame given at construction becomes the view box. Device y grows
/// upwards while SVG y grows downwards, so y is mirrored such that the top
/// edge of the frame lands on SVG y = 0.
#[derive(Debug)]
pub struct SvgSurface {
    document: Document,
    frame: Rect,
    fill: Color,
    saved: Vec<Color>,
    elements: usize,
}

impl SvgSurface {
    pub fn new(frame: Rect) -> Self {
        let document = Document::new()
            .set(
                "viewBox",
                (frame.min_x(), 0., frame.width(), frame.height()),
            )
            .set("width", format!("{}px", frame.width()))
            .set("height", format!("{}px", frame.height()));
        Self {
            document,
            frame,
            fill: Color::BLACK,
            saved: Vec::new(),
            elements: 0,
        }
    }

    /// A surface showing `[0, width] x [0, height]`.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self::new(Rect(Point::ORIGIN, Size(width, height)))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Number of elements drawn so far.
    pub fn elements(&self) -> usize {
        self.elements
    }

    fn flip(&self, y: f64) -> f64 {
        self.frame.max_y() - y
    }
}

impl Surface for SvgSurface {
    fn save_state(&mut self) {
        self.saved.push(self.fill);
    }

    fn restore_state(&mut self) {
        match self.saved.pop() {
            Some(fill) => self.fill = fill,
            None => warn!("restore_state without matching save_state"),
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_ellipse(&mut self, rect: Rect) {
        let center = rect.center();
        let ellipse = Ellipse::new()
            .set("cx", center.x())
            .set("cy", self.flip(center.y()))
            .set("rx", rect.width() / 2.)
            .set("ry", rect.height() / 2.)
            .set("fill", self.fill.hex())
            .set("fill-opacity", self.fill.opacity());
        self.document.append(ellipse);
        self.elements += 1;
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        let line = Line::new()
            .set("x1", from.x())
            .set("y1", self.flip(from.y()))
            .set("x2", to.x())
            .set("y2", self.flip(to.y()))
            .set("stroke", self.fill.hex())
            .set("stroke-opacity", self.fill.opacity())
            .set("stroke-width", 1);
        self.document.append(line);
        self.elements += 1;
    }

    fn draw_text(&mut self, text: &str, rect: Rect, alignment: Alignment, rotation: Rotation) {
        let anchor = match alignment {
            Alignment::Left => "start",
            Alignment::Center => "middle",
            Alignment::Right => "end",
        };
        let center = rect.center();
        // text runs bottom to top when rotated, so alignment picks a point on the vertical center line
        let position = match (rotation, alignment) {
            (Rotation::None, Alignment::Left) => center.with_x(rect.min_x()),
            (Rotation::None, Alignment::Right) => center.with_x(rect.max_x()),
            (Rotation::Quarter, Alignment::Left) => center.with_y(rect.min_y()),
            (Rotation::Quarter, Alignment::Right) => center.with_y(rect.max_y()),
            (_, Alignment::Center) => center,
        };
        let (x, y) = (position.x(), self.flip(position.y()));

        let mut node = Text::new()
            .set("x", x)
            .set("y", y)
            .set("text-anchor", anchor)
            .set("dominant-baseline", "central")
            .set("fill", self.fill.hex())
            .set("fill-opacity", self.fill.opacity())
            .add(svg::node::Text::new(text));
        if rotation == Rotation::Quarter {
            node = node.set("transform", format!("rotate(-90, {}, {})", x, y));
        }
        self.document.append(node);
        self.elements += 1;
    }
}

/// Render a scatter plot onto a document covering its whole plot area.
pub fn render(plot: &ScatterPlot) -> Document {
    let mut surface = SvgSurface::new(plot.plot_area().bounds());
    plot.render(&mut surface);
    debug!(elements = surface.elements(), "rendered svg document");
    surface.into_document()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::layout::area::PlotArea;
    use crate::layout::marker::PlotPoint;
    use crate::test::defined_plots;

    fn plot() -> ScatterPlot {
        ScatterPlot::new(
            PlotArea::new(Point(0., 0.), Point(300., 300.)).unwrap(),
            vec![
                PlotPoint::new(Point(0., 0.), 1., Color::BLACK),
                PlotPoint::new(Point(10., 0.), 1., Color::RED),
                PlotPoint::new(Point(0., 10.), 1., Color::BLACK),
            ],
        )
        .with_labels("weight", "height")
    }

    #[test]
    fn markers_and_labels() {
        let content = render(&plot()).to_string();
        assert_eq!(content.matches("<ellipse").count(), 3);
        assert_eq!(content.matches("<text").count(), 2);
        assert!(content.contains("#ff0000"));
        assert!(content.contains("weight"));
        assert!(content.contains("rotate(-90, 10, 170)"));
    }

    #[test]
    fn y_axis_is_flipped() {
        let mut surface = SvgSurface::with_size(100., 50.);
        surface.fill_ellipse(Rect(Point(10., 0.), Size(4., 4.)));
        surface.stroke_line(Point(0., 0.), Point(0., 50.));
        let content = surface.document().to_string();
        assert!(content.contains("cx=\"12\""));
        assert!(content.contains("cy=\"48\""));
        assert!(content.contains("y1=\"50\""));
        assert!(content.contains("y2=\"0\""));
        assert_eq!(surface.elements(), 2);
    }

    #[test]
    fn state_stack() {
        let mut surface = SvgSurface::with_size(100., 100.);
        surface.set_fill_color(Color::RED);
        surface.save_state();
        surface.set_fill_color(Color::BLUE);
        surface.restore_state();
        assert_eq!(surface.fill, Color::RED);

        // unmatched restore keeps the current color
        surface.restore_state();
        assert_eq!(surface.fill, Color::RED);
    }

    #[test]
    fn save_documents() {
        let dir = tempfile::tempdir().unwrap();
        for (name, plot) in defined_plots() {
            let path = dir.path().join(format!("{}.svg", name));
            svg::save(&path, &render(&plot)).unwrap();
            let content = std::fs::read_to_string(&path).unwrap();
            assert!(content.starts_with("<svg"), "{}", name);
            assert_eq!(
                content.matches("<ellipse").count(),
                plot.points().len(),
                "{}",
                name
            );
        }
    }
}
