// SPDX-License-Identifier: MIT OR Apache-2.0

/// Size constraint a host places on one axis of a widget during measuring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AxisConstraint {
    /// The widget must be exactly this size.
    Exact(f32),
    /// The widget may be any size up to this bound.
    AtMost(f32),
    /// The host places no limit on this axis.
    #[default]
    Unbounded,
}

impl AxisConstraint {
    /// Resolve a size on this axis from the widget's content size.
    ///
    /// An `Exact` size wins over the content; an `AtMost` bound caps it.
    pub fn resolve(&self, content: f32) -> f32 {
        match *self {
            AxisConstraint::Exact(size) => size,
            AxisConstraint::AtMost(max) => content.min(max),
            AxisConstraint::Unbounded => content,
        }
    }

    /// Resolve a size on an axis that fills whatever the host offers.
    ///
    /// Only `Unbounded` falls back to `content`, since there is nothing to fill.
    pub fn resolve_fill(&self, content: f32) -> f32 {
        match *self {
            AxisConstraint::Exact(size) | AxisConstraint::AtMost(size) => size,
            AxisConstraint::Unbounded => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_content() {
        assert_eq!(AxisConstraint::Exact(40.0).resolve(12.0), 40.0);
        assert_eq!(AxisConstraint::AtMost(40.0).resolve(12.0), 12.0);
        assert_eq!(AxisConstraint::AtMost(8.0).resolve(12.0), 8.0);
        assert_eq!(AxisConstraint::Unbounded.resolve(12.0), 12.0);
    }

    #[test]
    fn test_resolve_fill() {
        assert_eq!(AxisConstraint::Exact(200.0).resolve_fill(6.0), 200.0);
        assert_eq!(AxisConstraint::AtMost(300.0).resolve_fill(6.0), 300.0);
        assert_eq!(AxisConstraint::Unbounded.resolve_fill(6.0), 6.0);
    }
}
