// SPDX-License-Identifier: MIT OR Apache-2.0
use nalgebra::{Point2, Scalar, Vector2};
use serde::Deserialize;

/// Axis along which a one-dimensional widget lays out its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Content runs from left to right.
    #[default]
    Horizontal,
    /// Content runs from bottom to top.
    Vertical,
}

impl Orientation {
    /// Component of `v` along this orientation.
    pub fn main<T: Scalar + Copy>(&self, v: Vector2<T>) -> T {
        match self {
            Orientation::Horizontal => v.x,
            Orientation::Vertical => v.y,
        }
    }

    /// Component of `v` across this orientation.
    pub fn cross<T: Scalar + Copy>(&self, v: Vector2<T>) -> T {
        match self {
            Orientation::Horizontal => v.y,
            Orientation::Vertical => v.x,
        }
    }

    /// Component of point `p` along this orientation.
    pub fn main_of_point(&self, p: Point2<f32>) -> f32 {
        match self {
            Orientation::Horizontal => p.x,
            Orientation::Vertical => p.y,
        }
    }

    /// Build a vector from a main and a cross component.
    pub fn pack<T: Scalar + Copy>(&self, main: T, cross: T) -> Vector2<T> {
        match self {
            Orientation::Horizontal => Vector2::new(main, cross),
            Orientation::Vertical => Vector2::new(cross, main),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_and_unpack() {
        let v = Orientation::Vertical.pack(100.0_f32, 8.0);
        assert_eq!(v, Vector2::new(8.0, 100.0));
        assert_eq!(Orientation::Vertical.main(v), 100.0);
        assert_eq!(Orientation::Vertical.cross(v), 8.0);

        let h = Orientation::Horizontal.pack(100.0_f32, 8.0);
        assert_eq!(Orientation::Horizontal.main(h), 100.0);
        assert_eq!(Orientation::Horizontal.cross(h), 8.0);
    }
}
