use nalgebra::Vector2;

use crate::input::PointerEvent;
use crate::layout::{AxisConstraint, Layout};
use crate::update::Update;
use crate::vgi::Graphics;

/// The base trait for all widgets.
///
/// # Lifecycle
///
/// Hosts drive widgets synchronously from their UI thread:
///
/// 1. **Measure**: [`measure()`](Widget::measure) resolves a size from per-axis constraints.
/// 2. **Render**: [`render()`](Widget::render) draws into the host's [Graphics] at the placed [Layout].
/// 3. **Input**: [`handle_pointer()`](Widget::handle_pointer) feeds widget-local pointer events.
///
/// After setters or input, the host drains [`take_update()`](Widget::take_update)
/// to learn whether a redraw or a new layout pass is needed.
pub trait Widget {
    /// Resolve the widget size from the host's constraints.
    fn measure(&mut self, width: AxisConstraint, height: AxisConstraint) -> Vector2<f32>;

    /// Draw the widget.
    fn render(&mut self, graphics: &mut dyn Graphics, layout: &Layout);

    /// Handle a pointer event. Returns `true` if the event was consumed.
    fn handle_pointer(&mut self, event: &PointerEvent) -> bool;

    /// Return and clear the pending update flags.
    fn take_update(&mut self) -> Update;
}
