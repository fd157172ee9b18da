use crate::color::Color;
use crate::layout::{Point, Rect};

/// Horizontal placement of text inside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    /// 90 degrees counter clockwise, reading bottom to top.
    Quarter,
}

/// Anything markers and labels can be painted on.
///
/// Coordinates are device coordinates with the origin in the lower left and y
/// growing upwards. The fill color is graphics state: it is pushed by
/// `save_state` and popped by `restore_state`.
pub trait Surface {
    fn save_state(&mut self);

    fn restore_state(&mut self);

    fn set_fill_color(&mut self, color: Color);

    /// Fill the ellipse inscribed in `rect` with the current fill color.
    fn fill_ellipse(&mut self, rect: Rect);

    /// Stroke a straight line with the current fill color.
    fn stroke_line(&mut self, from: Point, to: Point);

    /// Draw a single line of text inside `rect`, vertically centered.
    fn draw_text(&mut self, text: &str, rect: Rect, alignment: Alignment, rotation: Rotation);
}

/// Paint self onto a surface, leaving the surface state as it was found.
pub trait Render {
    fn render(&self, surface: &mut impl Surface);
}

#[cfg(feature = "svg")]
pub mod svg;
