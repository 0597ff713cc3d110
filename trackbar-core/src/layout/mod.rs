use nalgebra::{Point2, Vector2};

mod constraint;
pub use constraint::*;

mod direction;
pub use direction::*;

mod padding;
pub use padding::*;

/// The final placement of a widget inside its host, in host pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Top-left corner of the widget.
    pub location: Point2<f32>,
    /// Size of the widget, usually what it returned from its measure pass.
    pub size: Vector2<f32>,
}

impl Layout {
    /// Create a new layout from a location and a size.
    pub fn new(location: Point2<f32>, size: Vector2<f32>) -> Self {
        Self { location, size }
    }

    /// A layout placed at the origin.
    pub fn at_origin(size: Vector2<f32>) -> Self {
        Self::new(Point2::origin(), size)
    }

    /// Check if a point in host coordinates lies inside this layout.
    pub fn contains(&self, point: Point2<f32>) -> bool {
        point.x >= self.location.x
            && point.x <= self.location.x + self.size.x
            && point.y >= self.location.y
            && point.y <= self.location.y + self.size.y
    }
}
