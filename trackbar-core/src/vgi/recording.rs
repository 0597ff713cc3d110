use vello::kurbo::{Affine, BezPath, Point, Rect, Shape, Stroke};
use vello::peniko::{Brush, Fill};

use crate::text::TextMetrics;
use crate::vgi::Graphics;

/// A single recorded draw call.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// A [Graphics::fill] call.
    Fill {
        /// The transform the shape was drawn with.
        transform: Affine,
        /// The brush the shape was filled with.
        brush: Brush,
        /// The shape, in its own coordinates.
        shape: BezPath,
    },
    /// A [Graphics::stroke] call.
    Stroke {
        /// The stroke style.
        style: Stroke,
        /// The transform the shape was drawn with.
        transform: Affine,
        /// The brush the shape was stroked with.
        brush: Brush,
        /// The shape, in its own coordinates.
        shape: BezPath,
    },
    /// A [Graphics::draw_text] call.
    Text {
        /// The text.
        text: String,
        /// Font size in pixels.
        font_size: f32,
        /// The text brush.
        brush: Brush,
        /// The transform of the baseline origin.
        transform: Affine,
    },
}

impl DrawCommand {
    /// The brush used by this command.
    pub fn brush(&self) -> &Brush {
        match self {
            DrawCommand::Fill { brush, .. }
            | DrawCommand::Stroke { brush, .. }
            | DrawCommand::Text { brush, .. } => brush,
        }
    }

    /// Bounding box of the recorded shape in target coordinates.
    ///
    /// Stroke width is not included. Text commands report an empty rect at their origin.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawCommand::Fill {
                transform, shape, ..
            }
            | DrawCommand::Stroke {
                transform, shape, ..
            } => (*transform * shape.clone()).bounding_box(),
            DrawCommand::Text { transform, .. } => {
                let origin = origin_of(transform);
                Rect::from_points(origin, origin)
            },
        }
    }

    /// Origin of the command's transform in target coordinates.
    pub fn origin(&self) -> Point {
        match self {
            DrawCommand::Fill { transform, .. }
            | DrawCommand::Stroke { transform, .. }
            | DrawCommand::Text { transform, .. } => origin_of(transform),
        }
    }
}

fn origin_of(transform: &Affine) -> Point {
    *transform * Point::ORIGIN
}

/// A [Graphics] implementation that records every call instead of drawing.
///
/// Useful for tests and for hosts that want to inspect what a widget draws.
/// Text is measured with [TextMetrics::estimate].
#[derive(Debug, Default)]
pub struct RecordingGraphics {
    commands: Vec<DrawCommand>,
}

impl RecordingGraphics {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded stroke commands in call order.
    pub fn strokes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Stroke { .. }))
    }

    /// Recorded fill commands in call order.
    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Fill { .. }))
    }

    /// Recorded text commands in call order.
    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Text { .. }))
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Graphics for RecordingGraphics {
    fn fill(
        &mut self,
        _fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.commands.push(DrawCommand::Fill {
            transform,
            brush: brush.clone(),
            shape: shape.clone(),
        });
    }

    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.commands.push(DrawCommand::Stroke {
            style: style.clone(),
            transform,
            brush: brush.clone(),
            shape: shape.clone(),
        });
    }

    fn measure_text(&mut self, text: &str, font_size: f32) -> TextMetrics {
        TextMetrics::estimate(text, font_size)
    }

    fn draw_text(&mut self, text: &str, font_size: f32, brush: &Brush, transform: Affine) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            font_size,
            brush: brush.clone(),
            transform,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vgi::shape_to_path;
    use vello::kurbo::{Circle, Line};
    use vello::peniko::Color;

    #[test]
    fn test_records_in_order() {
        let mut graphics = RecordingGraphics::new();
        let brush = Brush::Solid(Color::from_rgb8(255, 0, 0));
        let transform = Affine::translate((5.0, 10.0));

        graphics.stroke(
            &Stroke::new(2.0),
            transform,
            &brush,
            None,
            &shape_to_path(&Line::new((0.0, 0.0), (20.0, 0.0))),
        );
        graphics.fill(
            Fill::NonZero,
            transform,
            &brush,
            None,
            &shape_to_path(&Circle::new((20.0, 0.0), 4.0)),
        );
        graphics.draw_text("42", 12.0, &brush, transform);

        assert_eq!(graphics.commands().len(), 3);
        assert_eq!(graphics.strokes().count(), 1);
        assert_eq!(graphics.fills().count(), 1);
        assert_eq!(graphics.texts().count(), 1);
        assert_eq!(graphics.commands()[0].brush(), &brush);
    }

    #[test]
    fn test_bounds_apply_transform() {
        let mut graphics = RecordingGraphics::new();
        let brush = Brush::Solid(Color::from_rgb8(0, 0, 0));

        graphics.stroke(
            &Stroke::new(2.0),
            Affine::translate((5.0, 10.0)),
            &brush,
            None,
            &shape_to_path(&Line::new((0.0, 0.0), (20.0, 0.0))),
        );

        let bounds = graphics.commands()[0].bounds();
        assert!((bounds.x0 - 5.0).abs() < 1e-9);
        assert!((bounds.x1 - 25.0).abs() < 1e-9);
        assert!((bounds.y0 - 10.0).abs() < 1e-9);

        graphics.clear();
        assert!(graphics.commands().is_empty());
    }
}
