use tracing::{debug, trace, warn};

use crate::config::PlotConfig;
use crate::layout::area::PlotArea;
use crate::layout::bounds::Bounds;
use crate::layout::marker::PlotPoint;
use crate::layout::scale::Scaler;
use crate::layout::Point;
use crate::render::{Alignment, Render, Rotation, Surface};

/// A set of markers placed inside a [`PlotArea`].
///
/// The bounds of all marker centers are cached and widened whenever points are
/// added, so they always equal [`Bounds::of`] over the whole collection.
#[derive(Clone, Debug)]
pub struct ScatterPlot {
    plot_area: PlotArea,
    points: Vec<PlotPoint>,
    bounds: Bounds,
    x_label: String,
    y_label: String,
    config: PlotConfig,
}

impl ScatterPlot {
    pub fn new(plot_area: PlotArea, points: Vec<PlotPoint>) -> Self {
        let bounds = Bounds::of(&points);
        Self {
            plot_area,
            points,
            bounds,
            x_label: String::new(),
            y_label: String::new(),
            config: PlotConfig::default(),
        }
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.set_labels(x_label, y_label);
        self
    }

    pub fn with_config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_labels(&mut self, x_label: impl Into<String>, y_label: impl Into<String>) {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
    }

    pub fn plot_area(&self) -> &PlotArea {
        &self.plot_area
    }

    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn min_bounds(&self) -> Point {
        self.bounds.min
    }

    pub fn max_bounds(&self) -> Point {
        self.bounds.max
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn add_point(&mut self, point: PlotPoint) {
        self.add_points([point]);
    }

    /// Append points in order and widen the bounds to include them.
    pub fn add_points(&mut self, points: impl IntoIterator<Item = PlotPoint>) {
        let start = self.points.len();
        self.points.extend(points);
        let new = Bounds::of(&self.points[start..]);
        self.widen_bounds(&new);
    }

    /// Widen the cached bounds by the bounds of `new_points`. Never shrinks.
    pub fn set_new_bounds(&mut self, new_points: &[PlotPoint]) {
        self.widen_bounds(&Bounds::of(new_points));
    }

    fn widen_bounds(&mut self, new: &Bounds) {
        let widened = self.bounds.widen(new);
        if widened != self.bounds {
            trace!(from = ?self.bounds, to = ?widened, "widening bounds");
        }
        self.bounds = widened;
    }

    /// The transform from data space into the plot rectangle for the current bounds.
    pub fn scaler(&self) -> Scaler {
        Scaler::new(
            self.bounds,
            self.plot_area.plot_rect(),
            self.config.normalization,
        )
    }

    /// Map a marker from data space into the plot's data rectangle.
    ///
    /// See [`Scaler::scale`]: the resulting center is the marker's bounding box
    /// origin.
    pub fn scale(&self, point: &PlotPoint) -> PlotPoint {
        self.scaler().scale(point)
    }

    fn render_axes(&self, surface: &mut impl Surface) {
        let data = self.plot_area.data_rect();
        surface.save_state();
        surface.set_fill_color(self.config.axis_color);
        surface.stroke_line(data.upper_right().with_y(data.min_y()), data.lower_left());
        surface.stroke_line(data.lower_left(), data.lower_left().with_y(data.max_y()));
        surface.restore_state();
    }

    fn render_labels(&self, surface: &mut impl Surface) {
        if self.x_label.is_empty() && self.y_label.is_empty() {
            return;
        }
        surface.save_state();
        surface.set_fill_color(self.config.label_color);
        if !self.x_label.is_empty() {
            surface.draw_text(
                &self.x_label,
                self.plot_area.x_label_area(),
                Alignment::Center,
                Rotation::None,
            );
        }
        if !self.y_label.is_empty() {
            surface.draw_text(
                &self.y_label,
                self.plot_area.y_label_area(),
                Alignment::Center,
                Rotation::Quarter,
            );
        }
        surface.restore_state();
    }
}

impl Render for ScatterPlot {
    fn render(&self, surface: &mut impl Surface) {
        let scaler = self.scaler();
        let mut drawn = 0;
        for point in &self.points {
            if !point.is_drawable() {
                warn!(
                    center = ?point.center(),
                    radius = point.radius(),
                    "skipping marker that cannot be drawn"
                );
                continue;
            }
            scaler.to_device(point).render(surface);
            drawn += 1;
        }

        if self.config.show_axes {
            self.render_axes(surface);
        }
        self.render_labels(surface);
        debug!(drawn, total = self.points.len(), "rendered scatter plot");
    }
}
