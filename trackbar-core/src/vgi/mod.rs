//! Vector Graphics Interface abstraction.
//!
//! This module provides an abstraction over rendering backends, allowing widgets
//! to be decoupled from the specific rendering implementation (e.g., Vello).

use vello::kurbo::{Affine, BezPath, Shape, Stroke};
use vello::peniko::{Brush, Fill};

use crate::text::TextMetrics;

/// A trait for rendering vector graphics.
///
/// This trait abstracts over different rendering backends, allowing widgets to
/// be written without being tied to a specific implementation.
///
/// Note: Methods use `&BezPath` for object-safety. To use concrete shape types
/// (Line, Circle, etc.), convert them with [shape_to_path].
pub trait Graphics {
    /// Fill a shape with the given brush.
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Stroke a shape with the given brush.
    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Measure a single line of text at the given font size.
    fn measure_text(&mut self, text: &str, font_size: f32) -> TextMetrics;

    /// Draw a single line of text.
    ///
    /// `transform` maps the text's origin, the left end of its baseline.
    fn draw_text(&mut self, text: &str, font_size: f32, brush: &Brush, transform: Affine);
}

/// Helper function to convert a shape to BezPath for use with Graphics trait.
pub fn shape_to_path(shape: &impl Shape) -> BezPath {
    shape.to_path(0.1)
}

/// A default graphics implementation using Vello.
pub mod vello_vg;

/// A graphics implementation that records draw calls.
pub mod recording;
