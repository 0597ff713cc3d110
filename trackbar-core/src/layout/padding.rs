// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::layout::Orientation;
use serde::Deserialize;

/// Padding around the content of a widget, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Padding {
    /// Left padding.
    pub left: f32,
    /// Top padding.
    pub top: f32,
    /// Right padding.
    pub right: f32,
    /// Bottom padding.
    pub bottom: f32,
}

impl Padding {
    /// No padding at all.
    pub const ZERO: Padding = Padding {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Create padding from each side.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same padding on every side.
    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Padding before the content along `orientation` (left or top).
    pub fn leading(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.left,
            Orientation::Vertical => self.top,
        }
    }

    /// Sum of both paddings along `orientation`.
    pub fn main_sum(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.left + self.right,
            Orientation::Vertical => self.top + self.bottom,
        }
    }

    /// Sum of both paddings across `orientation`.
    pub fn cross_sum(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.top + self.bottom,
            Orientation::Vertical => self.left + self.right,
        }
    }

    /// Scale every side, e.g. to convert dp into px.
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(
            self.left * factor,
            self.top * factor,
            self.right * factor,
            self.bottom * factor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_per_orientation() {
        let padding = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(padding.main_sum(Orientation::Horizontal), 4.0);
        assert_eq!(padding.cross_sum(Orientation::Horizontal), 6.0);
        assert_eq!(padding.main_sum(Orientation::Vertical), 6.0);
        assert_eq!(padding.cross_sum(Orientation::Vertical), 4.0);
        assert_eq!(padding.leading(Orientation::Vertical), 2.0);
    }

    #[test]
    fn test_scaled() {
        assert_eq!(Padding::all(2.0).scaled(1.5), Padding::all(3.0));
    }
}
