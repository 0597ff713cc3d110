#[cfg(feature = "text")]
mod render;
#[cfg(feature = "text")]
pub use render::TextRenderContext;

/// Metrics of a single line of laid out text, in pixels.
///
/// `ascent` and `descent` are both positive distances from the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Advance width of the whole line.
    pub width: f32,
    /// Distance from the baseline to the top of the tallest glyph box.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyph box.
    pub descent: f32,
}

impl TextMetrics {
    /// Rough metrics for when no font backend is available.
    ///
    /// Uses typical sans-serif proportions, which is good enough for centering a short label.
    pub fn estimate(text: &str, font_size: f32) -> Self {
        Self {
            width: text.chars().count() as f32 * font_size * 0.55,
            ascent: font_size * 0.8,
            descent: font_size * 0.2,
        }
    }

    /// Height of the glyph block.
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }

    /// Baseline position that centers the glyph block vertically on `center`.
    pub fn baseline_for_center(&self, center: f32) -> f32 {
        center + (self.ascent - self.descent) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_centers_glyph_block() {
        let metrics = TextMetrics {
            width: 20.0,
            ascent: 9.0,
            descent: 3.0,
        };
        let baseline = metrics.baseline_for_center(50.0);
        let top = baseline - metrics.ascent;
        let bottom = baseline + metrics.descent;
        assert_eq!((top + bottom) / 2.0, 50.0);
        assert_eq!(metrics.height(), 12.0);
    }

    #[test]
    fn test_estimate_scales_with_length() {
        let one = TextMetrics::estimate("5", 10.0);
        let three = TextMetrics::estimate("100", 10.0);
        assert!((three.width - one.width * 3.0).abs() < 1e-4);
        assert_eq!(one.height(), 10.0);
        assert_eq!(TextMetrics::estimate("", 10.0).width, 0.0);
    }
}
