//! 2D line segment type.

use super::{Point2, Vec2};
use crate::bounds::BoundingBox;
use num_traits::Float;

/// A polygon edge or polyline step between two rounded points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the axis-aligned bounding box of the segment.
    #[inline]
    pub fn bounding_box(self) -> BoundingBox<F> {
        BoundingBox::from_corners(self.start, self.end)
    }

    /// Squared distance from `p` to the nearest point of the segment.
    ///
    /// The nearest point is not rounded, so a point snapped to the grid
    /// next to an edge reports how far the snapping moved it.
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let v = self.direction();
        let len_sq = v.magnitude_squared();
        let t = if len_sq <= F::epsilon() {
            F::zero()
        } else {
            ((p - self.start).dot(v) / len_sq).max(F::zero()).min(F::one())
        };
        let dx = self.start.x() + v.x * t - p.x();
        let dy = self.start.y() + v.y * t - p.y();
        dx * dx + dy * dy
    }

    /// Squared perpendicular distance from `p` to the infinite line through
    /// the segment.
    ///
    /// Falls back to the distance to `start` when the segment is degenerate.
    pub fn line_distance_squared(self, p: Point2<F>) -> F {
        let v = self.direction();
        let len_sq = v.magnitude_squared();
        if len_sq <= F::epsilon() {
            return self.start.distance_squared(p);
        }
        let cross = v.cross(p - self.start);
        cross * cross / len_sq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment2<f64> {
        Segment2::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[test]
    fn test_length() {
        let s = seg(0.0, 0.0, 3.0, 4.0);
        assert_eq!(s.length_squared(), 25.0);
        assert_eq!(s.length(), 5.0);
    }

    #[test]
    fn test_bounding_box() {
        let bbox = seg(4.0, 1.0, 0.0, 3.0).bounding_box();
        assert_eq!(bbox.upper_left, Point2::new(0.0, 1.0));
        assert_eq!(bbox.lower_right, Point2::new(4.0, 3.0));
    }

    #[test]
    fn test_distance_clamps_to_endpoints() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(s.distance_squared_to_point(Point2::new(5.0, 3.0)), 9.0, epsilon = 1e-10);
        assert_relative_eq!(s.distance_squared_to_point(Point2::new(13.0, 4.0)), 25.0, epsilon = 1e-10);
        assert_relative_eq!(s.distance_squared_to_point(Point2::new(-3.0, 0.0)), 9.0, epsilon = 1e-10);
    }

    #[test]
    fn test_distance_uses_exact_foot() {
        // The foot of (1, 1) on this edge is not a grid point
        let s = seg(0.0, 0.0, 3.0, 7.0);
        let expected = (7.0_f64 - 3.0).powi(2) / 58.0;
        assert_relative_eq!(s.distance_squared_to_point(Point2::new(1.0, 1.0)), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_segment_distance() {
        let degen = seg(1.0, 1.0, 1.0, 1.0);
        assert_eq!(degen.length(), 0.0);
        assert_relative_eq!(degen.distance_squared_to_point(Point2::new(4.0, 5.0)), 25.0, epsilon = 1e-10);
        assert_relative_eq!(degen.line_distance_squared(Point2::new(4.0, 5.0)), 25.0, epsilon = 1e-10);
    }

    #[test]
    fn test_line_distance_ignores_segment_extent() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(s.line_distance_squared(Point2::new(20.0, 3.0)), 9.0, epsilon = 1e-10);
        assert_relative_eq!(s.distance_squared_to_point(Point2::new(20.0, 3.0)), 109.0, epsilon = 1e-10);
    }
}
