use trackbar_core::layout::Orientation;

/// Resolved geometry of a progress track along its long axis.
///
/// Positions are axis coordinates in pixels, measured from the leading edge
/// of the padded content box: left for horizontal tracks, top for vertical
/// ones. Vertical tracks fill from the bottom, so their progress offsets are
/// mirrored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    orientation: Orientation,
    measured_extent: f32,
    thumb_radius: f32,
    center: f32,
}

impl TrackGeometry {
    /// Create geometry for a content box of `measured_extent` pixels.
    ///
    /// Negative extents (padding larger than the widget) are floored at `0`.
    /// A degenerate track centers its thumb on the middle of the content box
    /// unless [with_center](Self::with_center) says otherwise.
    pub fn new(orientation: Orientation, measured_extent: f32, thumb_radius: f32) -> Self {
        let measured_extent = measured_extent.max(0.0);
        Self {
            orientation,
            measured_extent,
            thumb_radius,
            center: measured_extent / 2.0,
        }
    }

    /// Set the axis position a degenerate track pins its thumb to.
    pub fn with_center(mut self, center: f32) -> Self {
        self.center = center;
        self
    }

    /// Length of the content box along the track.
    pub fn measured_extent(&self) -> f32 {
        self.measured_extent
    }

    /// First position the thumb center may take.
    pub fn draw_bound_start(&self) -> f32 {
        self.thumb_radius
    }

    /// Last position the thumb center may take.
    pub fn draw_bound_end(&self) -> f32 {
        self.measured_extent - self.thumb_radius
    }

    /// `true` when the thumb is wider than the content box.
    pub fn is_degenerate(&self) -> bool {
        self.draw_bound_start() > self.draw_bound_end()
    }

    /// Clamp an axis position into the draw bounds.
    ///
    /// When the bounds are degenerate everything collapses onto the center
    /// set with [with_center](Self::with_center).
    pub fn clamp(&self, position: f32) -> f32 {
        if self.is_degenerate() {
            return self.center;
        }

        position.clamp(self.draw_bound_start(), self.draw_bound_end())
    }

    /// Unclamped distance of `progress` from the start of the range, in pixels.
    pub fn progress_offset(&self, progress: i32, min: i32, max: i32) -> f32 {
        let ratio = (progress as f64 - min as f64) / (max as f64 - min as f64);
        (ratio * self.measured_extent as f64) as f32
    }

    /// Axis position of a progress offset, before clamping.
    pub fn axis_position(&self, offset: f32) -> f32 {
        match self.orientation {
            Orientation::Horizontal => offset,
            Orientation::Vertical => self.measured_extent - offset,
        }
    }

    /// Axis position of the thumb center for `progress`.
    pub fn thumb_center(&self, progress: i32, min: i32, max: i32) -> f32 {
        self.clamp(self.axis_position(self.progress_offset(progress, min, max)))
    }

    /// The reached part of the track as `(start, end)`, or `None` if it has no length.
    pub fn reached_segment(&self, progress: i32, min: i32, max: i32) -> Option<(f32, f32)> {
        let thumb = self.thumb_center(progress, min, max);
        let segment = match self.orientation {
            Orientation::Horizontal => (self.draw_bound_start(), thumb),
            Orientation::Vertical => (thumb, self.draw_bound_end()),
        };
        non_empty(segment)
    }

    /// The unreached part of the track as `(start, end)`, or `None` if it has no length.
    pub fn unreached_segment(&self, progress: i32, min: i32, max: i32) -> Option<(f32, f32)> {
        let thumb = self.thumb_center(progress, min, max);
        let segment = match self.orientation {
            Orientation::Horizontal => (thumb, self.draw_bound_end()),
            Orientation::Vertical => (self.draw_bound_start(), thumb),
        };
        non_empty(segment)
    }

    /// Map an axis position back to a progress value in `[min, max]`.
    ///
    /// This is the inverse of [axis_position](Self::axis_position) composed with
    /// [progress_offset](Self::progress_offset). Returns `None` when there is
    /// no extent to map onto or the position is not finite.
    pub fn progress_at(&self, position: f32, min: i32, max: i32) -> Option<i32> {
        if self.measured_extent <= 0.0 || !position.is_finite() {
            return None;
        }

        let raw = match self.orientation {
            Orientation::Horizontal => position,
            Orientation::Vertical => self.measured_extent - position,
        };
        let span = max as f64 - min as f64;
        let value = (raw as f64 / self.measured_extent as f64 * span).round() + min as f64;

        Some(value.clamp(min as f64, max as f64) as i32)
    }
}

fn non_empty((start, end): (f32, f32)) -> Option<(f32, f32)> {
    (end > start).then_some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> TrackGeometry {
        TrackGeometry::new(Orientation::Horizontal, 200.0, 10.0)
    }

    #[test]
    fn test_bounds() {
        let geometry = horizontal();
        assert_eq!(geometry.draw_bound_start(), 10.0);
        assert_eq!(geometry.draw_bound_end(), 190.0);
        assert!(!geometry.is_degenerate());
    }

    #[test]
    fn test_midpoint_scenario() {
        let geometry = horizontal();
        assert_eq!(geometry.thumb_center(50, 0, 100), 100.0);
        assert_eq!(geometry.reached_segment(50, 0, 100), Some((10.0, 100.0)));
        assert_eq!(geometry.unreached_segment(50, 0, 100), Some((100.0, 190.0)));
    }

    #[test]
    fn test_ends_suppress_segments() {
        let geometry = horizontal();
        assert_eq!(geometry.reached_segment(0, 0, 100), None);
        assert_eq!(geometry.unreached_segment(0, 0, 100), Some((10.0, 190.0)));
        assert_eq!(geometry.unreached_segment(100, 0, 100), None);
        assert_eq!(geometry.reached_segment(100, 0, 100), Some((10.0, 190.0)));
    }

    #[test]
    fn test_vertical_fills_from_bottom() {
        let geometry = TrackGeometry::new(Orientation::Vertical, 200.0, 10.0);
        assert_eq!(geometry.thumb_center(0, 0, 100), 190.0);
        assert_eq!(geometry.thumb_center(100, 0, 100), 10.0);
        assert_eq!(geometry.thumb_center(25, 0, 100), 150.0);
        assert_eq!(geometry.reached_segment(25, 0, 100), Some((150.0, 190.0)));
        assert_eq!(geometry.unreached_segment(25, 0, 100), Some((10.0, 150.0)));
        assert_eq!(geometry.reached_segment(0, 0, 100), None);
        assert_eq!(geometry.unreached_segment(100, 0, 100), None);
    }

    #[test]
    fn test_offset_respects_min() {
        let geometry = horizontal();
        assert_eq!(geometry.progress_offset(-50, -100, 100), 50.0);
        assert_eq!(geometry.progress_offset(150, 100, 200), 100.0);
    }

    #[test]
    fn test_degenerate_collapses_to_center() {
        let geometry = TrackGeometry::new(Orientation::Horizontal, 16.0, 10.0);
        assert!(geometry.is_degenerate());
        for progress in [0, 37, 100] {
            assert_eq!(geometry.thumb_center(progress, 0, 100), 8.0);
            assert_eq!(geometry.reached_segment(progress, 0, 100), None);
            assert_eq!(geometry.unreached_segment(progress, 0, 100), None);
        }
    }

    #[test]
    fn test_degenerate_uses_given_center() {
        let geometry = TrackGeometry::new(Orientation::Vertical, 16.0, 10.0).with_center(5.0);
        assert_eq!(geometry.thumb_center(0, 0, 100), 5.0);
        assert_eq!(geometry.clamp(-40.0), 5.0);

        // Only degenerate tracks look at the center.
        let roomy = horizontal().with_center(5.0);
        assert_eq!(roomy.clamp(-40.0), 10.0);
        assert_eq!(roomy.thumb_center(50, 0, 100), 100.0);
    }

    #[test]
    fn test_negative_extent_is_floored() {
        let geometry = TrackGeometry::new(Orientation::Vertical, -4.0, 2.0);
        assert_eq!(geometry.measured_extent(), 0.0);
        assert_eq!(geometry.progress_at(3.0, 0, 100), None);
    }

    #[test]
    fn test_progress_at() {
        let geometry = horizontal();
        assert_eq!(geometry.progress_at(100.0, 0, 100), Some(50));
        assert_eq!(geometry.progress_at(101.0, 0, 100), Some(51));
        assert_eq!(geometry.progress_at(-30.0, 0, 100), Some(0));
        assert_eq!(geometry.progress_at(500.0, 0, 100), Some(100));
        assert_eq!(geometry.progress_at(f32::NAN, 0, 100), None);

        let vertical = TrackGeometry::new(Orientation::Vertical, 200.0, 10.0);
        assert_eq!(vertical.progress_at(150.0, 0, 100), Some(25));
        assert_eq!(vertical.progress_at(0.0, 0, 100), Some(100));
        assert_eq!(vertical.progress_at(200.0, 0, 100), Some(0));
    }
}
