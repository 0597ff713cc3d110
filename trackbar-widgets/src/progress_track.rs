use nalgebra::{Point2, Vector2};
use trackbar_core::input::{PointerAction, PointerEvent};
use trackbar_core::layout::{AxisConstraint, Layout, Orientation, Padding};
use trackbar_core::units::Density;
use trackbar_core::update::Update;
use trackbar_core::vg::kurbo::{Affine, Cap, Circle, Line, Point, Stroke};
use trackbar_core::vg::peniko::Fill;
use trackbar_core::vgi::{shape_to_path, Graphics};
use trackbar_core::widget::Widget;
use trackbar_theme::palette::{TrackPalette, TrackRole};

use crate::error::ConfigError;

mod config;
pub use config::ProgressTrackConfig;

mod geometry;
pub use geometry::TrackGeometry;

/// A draggable progress track: a line with a circular thumb.
///
/// The value is an integer in `[min, max]`. The part of the track before the
/// thumb is drawn in the reached color and the rest in the unreached color;
/// vertical tracks fill from the bottom. While disabled everything but the
/// label uses the disabled color and pointer input is ignored.
///
/// ```rust
/// use trackbar_core::input::PointerEvent;
/// use trackbar_core::layout::AxisConstraint;
/// use trackbar_core::units::Density;
/// use trackbar_core::widget::Widget;
/// use trackbar_widgets::progress_track::{ProgressTrack, ProgressTrackConfig};
///
/// let mut track = ProgressTrack::new(&ProgressTrackConfig::default(), Density::BASELINE).unwrap();
/// track.measure(AxisConstraint::Exact(206.0), AxisConstraint::Unbounded);
///
/// track.handle_pointer(&PointerEvent::down(103.0, 3.0));
/// track.handle_pointer(&PointerEvent::up(103.0, 3.0));
/// assert_eq!(track.progress(), 50);
/// ```
///
/// ### Theming
/// Colors come from the [TrackPalette] in the configuration:
/// - `unreached` - The track after the thumb.
/// - `reached` - The track before the thumb.
/// - `thumb` - The thumb.
/// - `disabled` - Track and thumb while disabled.
/// - `label` - The progress label.
pub struct ProgressTrack {
    orientation: Orientation,
    min: i32,
    max: i32,
    progress: i32,
    thumb_radius: f32,
    label_size: Option<f32>,
    padding: Padding,
    palette: TrackPalette,
    stroke: Stroke,
    enabled: bool,
    dragging: bool,
    size: Vector2<f32>,
    geometry: TrackGeometry,
    update: Update,
}

impl ProgressTrack {
    /// Build a track from its configuration, converting lengths with `density`.
    ///
    /// Fails if the range is empty or a length is unusable.
    pub fn new(config: &ProgressTrackConfig, density: Density) -> Result<Self, ConfigError> {
        validate_range(config.min, config.max)?;

        let track_thickness = density.dp_to_px(config.track_thickness_dp);
        if !(track_thickness.is_finite() && track_thickness > 0.0) {
            return Err(ConfigError::InvalidTrackThickness(track_thickness));
        }

        let mut thumb_radius = density.dp_to_px(config.thumb_radius_dp);
        if !(thumb_radius.is_finite() && thumb_radius >= 0.0) {
            return Err(ConfigError::InvalidThumbRadius(thumb_radius));
        }

        let padding = config.padding_dp.scaled(density.scale());
        for side in [padding.left, padding.top, padding.right, padding.bottom] {
            if !(side.is_finite() && side >= 0.0) {
                return Err(ConfigError::InvalidPadding(side));
            }
        }

        let label_size = if config.show_label {
            let size = density.sp_to_px(config.label_size_sp);
            if !(size.is_finite() && size > 0.0) {
                return Err(ConfigError::InvalidLabelSize(size));
            }
            // The label is drawn inside the thumb.
            thumb_radius = thumb_radius.max(size);
            Some(size)
        } else {
            None
        };

        let progress = config
            .progress
            .unwrap_or(config.min)
            .clamp(config.min, config.max);

        Ok(Self {
            orientation: config.orientation,
            min: config.min,
            max: config.max,
            progress,
            thumb_radius,
            label_size,
            padding,
            palette: config.palette.clone(),
            stroke: Stroke::new(track_thickness as f64).with_caps(Cap::Round),
            enabled: config.enabled,
            dragging: false,
            size: Vector2::zeros(),
            geometry: TrackGeometry::new(config.orientation, 0.0, thumb_radius),
            update: Update::empty(),
        })
    }

    /// The current value.
    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// Set the value, clamping it into `[min, max]`.
    ///
    /// Requests a redraw only if the value actually changes.
    pub fn set_progress(&mut self, progress: i32) {
        let clamped = progress.clamp(self.min, self.max);
        if clamped != progress {
            log::debug!(
                "progress {} outside [{}, {}], clamped to {}",
                progress,
                self.min,
                self.max,
                clamped
            );
        }
        self.commit(clamped);
    }

    /// Lower end of the range.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper end of the range.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Change the range, re-clamping the current value into it.
    pub fn set_range(&mut self, min: i32, max: i32) -> Result<(), ConfigError> {
        validate_range(min, max)?;
        if (min, max) == (self.min, self.max) {
            return Ok(());
        }

        self.min = min;
        self.max = max;
        self.update.insert(Update::DRAW);
        self.commit(self.progress.clamp(min, max));
        Ok(())
    }

    /// Whether the widget reacts to pointer input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the widget. Does not touch the value.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }

        self.enabled = enabled;
        if !enabled {
            self.dragging = false;
        }
        self.update.insert(Update::DRAW);
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Track axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Thumb radius in pixels, after growing to fit the label.
    pub fn thumb_radius(&self) -> f32 {
        self.thumb_radius
    }

    /// Stroke width of the track in pixels.
    pub fn track_thickness(&self) -> f32 {
        self.stroke.width as f32
    }

    /// Whether the value is drawn on the thumb.
    pub fn shows_label(&self) -> bool {
        self.label_size.is_some()
    }

    /// The colors in use.
    pub fn palette(&self) -> &TrackPalette {
        &self.palette
    }

    /// Geometry of the last measure or render pass.
    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    /// Size resolved by the last measure or render pass.
    pub fn size(&self) -> Vector2<f32> {
        self.size
    }

    fn commit(&mut self, progress: i32) {
        if progress == self.progress {
            return;
        }

        self.progress = progress;
        self.update.insert(Update::DRAW | Update::VALUE);
    }

    fn content_thickness(&self) -> f32 {
        self.track_thickness().max(self.thumb_radius * 2.0)
    }

    fn apply_size(&mut self, size: Vector2<f32>) {
        if size == self.size {
            return;
        }

        let main = self.orientation.main(size);
        let leading = self.padding.leading(self.orientation);
        let extent = main - self.padding.main_sum(self.orientation);
        self.size = size;
        // A thumb that does not fit sits on the middle of the whole widget, not just the padded box.
        self.geometry = TrackGeometry::new(self.orientation, extent, self.thumb_radius)
            .with_center(main / 2.0 - leading);

        if self.geometry.is_degenerate() {
            log::debug!(
                "track extent {}px is smaller than the thumb ({}px radius)",
                self.geometry.measured_extent(),
                self.thumb_radius
            );
        }
    }

    /// Transform from track coordinates to host coordinates.
    ///
    /// The track runs along the local x axis (horizontal) or y axis (vertical)
    /// through the origin, which sits on the leading edge of the padded box,
    /// centered across it.
    fn frame(&self, layout: &Layout) -> Affine {
        let inner_width = layout.size.x - self.padding.left - self.padding.right;
        let inner_height = layout.size.y - self.padding.top - self.padding.bottom;
        let (x, y) = match self.orientation {
            Orientation::Horizontal => (self.padding.left, self.padding.top + inner_height / 2.0),
            Orientation::Vertical => (self.padding.left + inner_width / 2.0, self.padding.top),
        };

        Affine::translate((
            (layout.location.x + x) as f64,
            (layout.location.y + y) as f64,
        ))
    }

    fn point_on_axis(&self, position: f32) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(position as f64, 0.0),
            Orientation::Vertical => Point::new(0.0, position as f64),
        }
    }

    fn draw_segment(
        &self,
        graphics: &mut dyn Graphics,
        frame: Affine,
        segment: Option<(f32, f32)>,
        role: TrackRole,
    ) {
        let Some((start, end)) = segment else {
            return;
        };

        let line = Line::new(self.point_on_axis(start), self.point_on_axis(end));
        graphics.stroke(
            &self.stroke,
            frame,
            &self.palette.brush(role, self.enabled),
            None,
            &shape_to_path(&line),
        );
    }

    fn draw_label(&self, graphics: &mut dyn Graphics, frame: Affine, center: Point, size: f32) {
        let text = self.progress.to_string();
        let metrics = graphics.measure_text(&text, size);
        let origin = Point::new(
            center.x - metrics.width as f64 / 2.0,
            metrics.baseline_for_center(center.y as f32) as f64,
        );

        graphics.draw_text(
            &text,
            size,
            &self.palette.brush(TrackRole::Label, self.enabled),
            frame * Affine::translate(origin.to_vec2()),
        );
    }

    fn inside(&self, position: Point2<f32>) -> bool {
        Layout::at_origin(self.size).contains(position)
    }

    fn drag_to(&mut self, position: Point2<f32>) {
        let axis = self.orientation.main_of_point(position) - self.padding.leading(self.orientation);
        // Every value near an end draws its thumb at the same clamped spot, so
        // pointing there must not snap to whichever value that spot maps back to.
        let thumb = self.geometry.thumb_center(self.progress, self.min, self.max);
        if self.geometry.clamp(axis) == thumb {
            log::trace!("pointer at {}px is on the thumb, keeping {}", axis, self.progress);
            return;
        }

        let Some(progress) = self.geometry.progress_at(axis, self.min, self.max) else {
            log::trace!("no track extent to map pointer {:?} onto", position);
            return;
        };

        log::trace!("pointer at {}px on track maps to {}", axis, progress);
        self.commit(progress);
    }
}

impl Widget for ProgressTrack {
    fn measure(&mut self, width: AxisConstraint, height: AxisConstraint) -> Vector2<f32> {
        let (main, cross) = match self.orientation {
            Orientation::Horizontal => (width, height),
            Orientation::Vertical => (height, width),
        };

        let content = self.content_thickness();
        // The long axis has no natural length; it takes what the host offers.
        let main_size = main.resolve_fill(content + self.padding.main_sum(self.orientation));
        let cross_size = cross.resolve(content + self.padding.cross_sum(self.orientation));

        let size = self.orientation.pack(main_size, cross_size);
        log::debug!(
            "measured progress track: {:?} ({}x{})",
            self.orientation,
            size.x,
            size.y
        );

        self.apply_size(size);
        size
    }

    fn render(&mut self, graphics: &mut dyn Graphics, layout: &Layout) {
        self.apply_size(layout.size);

        let frame = self.frame(layout);
        let geometry = self.geometry;
        let (min, max, progress) = (self.min, self.max, self.progress);

        self.draw_segment(
            graphics,
            frame,
            geometry.unreached_segment(progress, min, max),
            TrackRole::Unreached,
        );
        self.draw_segment(
            graphics,
            frame,
            geometry.reached_segment(progress, min, max),
            TrackRole::Reached,
        );

        let center = self.point_on_axis(geometry.thumb_center(progress, min, max));
        graphics.fill(
            Fill::NonZero,
            frame,
            &self.palette.brush(TrackRole::Thumb, self.enabled),
            None,
            &shape_to_path(&Circle::new(center, self.thumb_radius as f64)),
        );

        if let Some(size) = self.label_size {
            self.draw_label(graphics, frame, center, size);
        }
    }

    fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        if !self.enabled {
            return false;
        }

        match event.action {
            PointerAction::Down => {
                // Arms the drag; the value only changes once the pointer moves or lifts.
                self.dragging = self.inside(event.position);
                self.dragging
            },
            PointerAction::Move => {
                if !self.dragging {
                    return false;
                }
                self.drag_to(event.position);
                true
            },
            PointerAction::Up => {
                if !self.dragging {
                    return false;
                }
                self.drag_to(event.position);
                self.dragging = false;
                true
            },
            PointerAction::Cancel => std::mem::replace(&mut self.dragging, false),
        }
    }

    fn take_update(&mut self) -> Update {
        std::mem::take(&mut self.update)
    }
}

fn validate_range(min: i32, max: i32) -> Result<(), ConfigError> {
    if max <= min {
        return Err(ConfigError::InvalidRange { min, max });
    }
    Ok(())
}
