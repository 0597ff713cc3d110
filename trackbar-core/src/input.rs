use nalgebra::Point2;

/// Phase of a pointer (touch or mouse) interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// The pointer was pressed.
    Down,
    /// The pointer moved while pressed.
    Move,
    /// The pointer was released.
    Up,
    /// The host aborted the gesture (e.g. a parent took over the touch stream).
    Cancel,
}

/// A pointer event delivered to a widget.
///
/// The position is local to the widget: `(0, 0)` is its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub action: PointerAction,
    /// Where it happened, in widget-local pixels.
    pub position: Point2<f32>,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self {
            action,
            position: Point2::new(x, y),
        }
    }

    /// Shorthand for a [PointerAction::Down] event.
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, x, y)
    }

    /// Shorthand for a [PointerAction::Move] event.
    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    /// Shorthand for a [PointerAction::Up] event.
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, x, y)
    }

    /// Shorthand for a [PointerAction::Cancel] event.
    pub fn cancel() -> Self {
        Self::new(PointerAction::Cancel, 0.0, 0.0)
    }
}
