//! Offsets between points.

use num_traits::Float;

/// The difference of two [`Point2`](super::Point2)s.
///
/// Unlike points, vectors are never rounded: they carry the exact offset
/// used by the orientation and turn-angle tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product. Positive when `other` turns
    /// counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the signed turn, in degrees, needed to go from the direction
    /// of `self` to the direction of `other`.
    ///
    /// The result is normalised to `]-180, 180]`. Zero-length vectors give 0.
    pub fn turn_angle_degrees(self, other: Self) -> F {
        let turn = self.cross(other).atan2(self.dot(other)).to_degrees();
        let half_turn = F::from(180.0).unwrap();
        if turn <= -half_turn {
            turn + half_turn + half_turn
        } else {
            turn
        }
    }
}
