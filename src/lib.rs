#![warn(missing_docs)]

//! A draggable line-and-circle progress track widget for Vello based UIs.
//!
//! The widget is host agnostic: hosts measure it with per-axis constraints,
//! render it into any [Graphics](core::vgi::Graphics) backend and feed it
//! widget-local pointer events.

pub use nalgebra as math;
pub use vello::peniko as color;

pub use trackbar_core as core;
pub use trackbar_theme as theme;
pub use trackbar_widgets as widgets;

/// A "prelude" for users of the trackbar crate.
///
/// ```rust
/// use trackbar::prelude::*;
///
/// let config = ProgressTrackConfig::default().with_orientation(Orientation::Vertical);
/// let mut track = ProgressTrack::new(&config, Density::BASELINE).unwrap();
/// let size = track.measure(AxisConstraint::AtMost(40.0), AxisConstraint::Exact(120.0));
///
/// let mut graphics = RecordingGraphics::new();
/// track.render(&mut graphics, &Layout::at_origin(size));
/// assert_eq!(graphics.fills().count(), 1);
/// ```
pub mod prelude {
    pub use crate::core::input::{PointerAction, PointerEvent};
    pub use crate::core::layout::{AxisConstraint, Layout, Orientation, Padding};
    pub use crate::core::units::Density;
    pub use crate::core::update::Update;
    pub use crate::core::vgi::recording::{DrawCommand, RecordingGraphics};
    pub use crate::core::vgi::vello_vg::VelloGraphics;
    pub use crate::core::vgi::Graphics;
    pub use crate::core::widget::Widget;

    pub use crate::theme::palette::{TrackPalette, TrackRole};

    pub use crate::widgets::error::ConfigError;
    pub use crate::widgets::progress_track::{ProgressTrack, ProgressTrackConfig, TrackGeometry};

    pub use nalgebra::{Point2, Vector2};
}
