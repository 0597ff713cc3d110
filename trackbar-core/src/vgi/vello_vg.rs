use vello::kurbo::{Affine, BezPath, Stroke};
use vello::peniko::{Brush, Fill};
use vello::Scene;

use crate::text::TextMetrics;
#[cfg(feature = "text")]
use crate::text::TextRenderContext;
use crate::vgi::Graphics;

/// A Vello-based implementation of the [Graphics] trait.
pub struct VelloGraphics<'a> {
    scene: &'a mut Scene,
    #[cfg(feature = "text")]
    text: Option<&'a mut TextRenderContext>,
}

impl<'a> VelloGraphics<'a> {
    /// Create a new VelloGraphics from a Scene reference.
    ///
    /// Text is measured with estimated metrics and not drawn; use
    /// [VelloGraphics::with_text] to render labels.
    pub fn new(scene: &'a mut Scene) -> Self {
        Self {
            scene,
            #[cfg(feature = "text")]
            text: None,
        }
    }

    /// Create a new VelloGraphics that lays out and draws text with `text`.
    #[cfg(feature = "text")]
    pub fn with_text(scene: &'a mut Scene, text: &'a mut TextRenderContext) -> Self {
        Self {
            scene,
            text: Some(text),
        }
    }
}

impl<'a> Graphics for VelloGraphics<'a> {
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.scene.fill(fill_rule, transform, brush, brush_transform, shape);
    }

    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.scene.stroke(style, transform, brush, brush_transform, shape);
    }

    fn measure_text(&mut self, text: &str, font_size: f32) -> TextMetrics {
        #[cfg(feature = "text")]
        if let Some(cx) = self.text.as_deref_mut() {
            return cx.measure(text, font_size);
        }

        TextMetrics::estimate(text, font_size)
    }

    fn draw_text(&mut self, text: &str, font_size: f32, brush: &Brush, transform: Affine) {
        #[cfg(feature = "text")]
        if let Some(cx) = self.text.as_deref_mut() {
            cx.render(self.scene, text, font_size, brush, transform);
            return;
        }

        log::debug!("no text context attached, skipping label {:?}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vgi::shape_to_path;
    use vello::kurbo::{Circle, Line};
    use vello::peniko::Color;

    #[test]
    fn test_draws_into_scene_without_text_context() {
        let mut scene = Scene::new();
        let brush = Brush::Solid(Color::BLACK);
        let mut graphics = VelloGraphics::new(&mut scene);

        graphics.stroke(
            &Stroke::new(4.0),
            Affine::IDENTITY,
            &brush,
            None,
            &shape_to_path(&Line::new((0.0, 0.0), (10.0, 0.0))),
        );
        graphics.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &brush,
            None,
            &shape_to_path(&Circle::new((5.0, 0.0), 3.0)),
        );
        graphics.draw_text("1", 12.0, &brush, Affine::IDENTITY);

        assert_eq!(
            graphics.measure_text("12", 10.0),
            TextMetrics::estimate("12", 10.0)
        );
    }

    #[cfg(feature = "text")]
    #[test]
    fn test_text_goes_through_text_context() {
        let mut scene = Scene::new();
        let mut text = TextRenderContext::new();
        let brush = Brush::Solid(Color::WHITE);
        let mut graphics = VelloGraphics::with_text(&mut scene, &mut text);

        assert_eq!(graphics.measure_text("", 12.0), TextMetrics::default());
        graphics.draw_text("50", 12.0, &brush, Affine::translate((10.0, 20.0)));
    }
}
