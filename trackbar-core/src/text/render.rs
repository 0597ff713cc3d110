// SPDX-License-Identifier: MIT OR Apache-2.0

//! Label rendering using Parley for layout and glyph mapping.

use parley::fontique::{Collection, CollectionOptions};
use parley::{Alignment, FontContext, Layout, LayoutContext, PositionedLayoutItem, StyleProperty};
use vello::kurbo::Affine;
use vello::peniko::{Brush, Fill};
use vello::Scene;

use crate::text::TextMetrics;

/// Font and layout contexts shared by every label drawn into a scene.
///
/// Creating one loads the system font collection, so hosts should keep it around.
pub struct TextRenderContext {
    font_cx: FontContext,
    layout_cx: LayoutContext<[u8; 4]>,
}

impl TextRenderContext {
    /// Create a new text rendering context with system fonts.
    pub fn new() -> Self {
        let font_cx = FontContext {
            collection: Collection::new(CollectionOptions {
                system_fonts: true,
                ..Default::default()
            }),
            source_cache: Default::default(),
        };

        Self {
            font_cx,
            layout_cx: LayoutContext::new(),
        }
    }

    fn layout(&mut self, text: &str, font_size: f32) -> Layout<[u8; 4]> {
        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, text, 1.0, true);
        builder.push_default(StyleProperty::FontSize(font_size));

        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, Default::default());
        layout
    }

    /// Measure a single line of text.
    pub fn measure(&mut self, text: &str, font_size: f32) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::default();
        }

        let layout = self.layout(text, font_size);
        let first = layout.lines().next().map(|line| *line.metrics());
        match first {
            Some(metrics) => {
                TextMetrics {
                    width: layout.width(),
                    ascent: metrics.ascent,
                    descent: metrics.descent,
                }
            },
            None => {
                log::debug!("no line produced for {:?}, estimating metrics", text);
                TextMetrics::estimate(text, font_size)
            },
        }
    }

    /// Draw a single line of text with its baseline-left corner at the origin of `transform`.
    pub fn render(
        &mut self,
        scene: &mut Scene,
        text: &str,
        font_size: f32,
        brush: &Brush,
        transform: Affine,
    ) {
        if text.is_empty() {
            return;
        }

        let layout = self.layout(text, font_size);
        let Some(first_baseline) = layout.lines().next().map(|line| line.metrics().baseline)
        else {
            log::warn!("Could not render label '{}' - no suitable font available", text);
            return;
        };
        // Parley lays out from the top of the line box; shift so the baseline sits at y = 0.
        let transform = transform * Affine::translate((0.0, -(first_baseline as f64)));

        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };

                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let font = run.font();
                let font_size = run.font_size();
                let glyph_xform = run
                    .synthesis()
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));
                let coords = run.normalized_coords();

                scene
                    .draw_glyphs(font)
                    .brush(brush)
                    .hint(false)
                    .transform(transform)
                    .glyph_transform(glyph_xform)
                    .font_size(font_size)
                    .normalized_coords(coords)
                    .draw(
                        Fill::NonZero,
                        glyph_run.glyphs().map(|glyph| {
                            let gx = x + glyph.x;
                            let gy = y - glyph.y;
                            x += glyph.advance;
                            vello::Glyph {
                                id: glyph.id as _,
                                x: gx,
                                y: gy,
                            }
                        }),
                    );
            }
        }
    }
}

impl Default for TextRenderContext {
    fn default() -> Self {
        Self::new()
    }
}
