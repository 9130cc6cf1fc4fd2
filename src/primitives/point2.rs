//! 2D point type with rounded, hash-stable coordinates.

use super::Vec2;
use crate::config::POINT_DECIMALS;
use num_traits::Float;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Sub;

/// A 2D point.
///
/// Coordinates are rounded to [`POINT_DECIMALS`] decimal places when the point
/// is built with [`Point2::new`], so two points describing the same location
/// compare equal bit for bit and hash identically. That makes points usable as
/// keys in sorted and hashed collections.
///
/// The coordinates are private so every point passes through that rounding.
/// Rounded coordinates never hold `-0.0`, so values that compare equal also
/// share their bit patterns, which is what the hash reads.
///
/// Points are ordered by `y` first, then by `x` (reading order).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    x: F,
    y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point, rounding both coordinates.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self {
            x: round_coordinate(x),
            y: round_coordinate(y),
        }
    }

    /// Returns the x coordinate.
    #[inline]
    pub fn x(&self) -> F {
        self.x
    }

    /// Returns the y coordinate.
    #[inline]
    pub fn y(&self) -> F {
        self.y
    }

    /// Creates the point at the origin.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Returns the distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let half = F::from(0.5).unwrap();
        Self::new((self.x + other.x) * half, (self.y + other.y) * half)
    }

    /// Linearly interpolates between `self` and `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Returns the angle, in radians, of the vector from `self` to `other`.
    #[inline]
    pub fn angle_to(self, other: Self) -> F {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Rounds a coordinate to the fixed decimal precision, normalising `-0.0`.
#[inline]
fn round_coordinate<F: Float>(v: F) -> F {
    let scale = F::from(10f64.powi(POINT_DECIMALS)).unwrap();
    let rounded = (v * scale).round() / scale;
    if rounded == F::zero() {
        F::zero()
    } else {
        rounded
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Eq for Point2<F> {}

impl<F: Float> Ord for Point2<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y
            .partial_cmp(&other.y)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.x.partial_cmp(&other.x).unwrap_or(Ordering::Equal))
    }
}

impl<F: Float> PartialOrd for Point2<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Hash for Point2<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.integer_decode().hash(state);
        self.y.integer_decode().hash(state);
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}
