//! Geometric predicates with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// Returns the orientation of the triangle formed by points `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if `c` is on the line (within `eps` tolerance)
///
/// `eps` is compared against the absolute value of the cross product
/// (twice the signed area of the triangle).
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks if a point lies on a line segment within tolerance.
///
/// `eps` is a distance: the point is on the segment when its distance to
/// the nearest point of the segment is at most `eps`, whatever the length
/// or direction of the segment.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}

/// Orientation of `p` relative to `segment`, treating points within `eps`
/// of the supporting line as collinear.
#[inline]
fn side<F: Float>(segment: Segment2<F>, p: Point2<F>, eps: F) -> Orientation {
    orient2d(segment.start, segment.end, p, eps * segment.length())
}

/// How two segments meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentCrossing<F> {
    /// The segments do not meet.
    None,
    /// The segments only touch: they meet at an endpoint of one of them, or
    /// overlap along a shared line.
    Neutral,
    /// The segments cross at a point that is none of their endpoints.
    Proper(Point2<F>),
}

impl<F> SegmentCrossing<F> {
    /// Returns `true` for [`SegmentCrossing::Proper`].
    #[inline]
    pub fn is_proper(&self) -> bool {
        matches!(self, SegmentCrossing::Proper(_))
    }
}

/// Classifies how two segments meet, using orientation tests.
///
/// Touching is reported as [`SegmentCrossing::Neutral`] so that shared
/// vertices and shared edges of neighbouring polygons do not count as a
/// crossing. `eps` is a distance, as in [`point_on_segment`].
pub fn segment_crossing<F: Float>(s1: Segment2<F>, s2: Segment2<F>, eps: F) -> SegmentCrossing<F> {
    let o1 = side(s1, s2.start, eps);
    let o2 = side(s1, s2.end, eps);
    let o3 = side(s2, s1.start, eps);
    let o4 = side(s2, s1.end, eps);

    let straddles = o1 != o2
        && o3 != o4
        && o1 != Orientation::Collinear
        && o2 != Orientation::Collinear
        && o3 != Orientation::Collinear
        && o4 != Orientation::Collinear;

    if straddles {
        return match intersection_point(s1, s2) {
            Some(point) if is_endpoint_of(point, s1, s2) => SegmentCrossing::Neutral,
            Some(point) => SegmentCrossing::Proper(point),
            None => SegmentCrossing::None,
        };
    }

    // Any remaining contact involves an endpoint lying on the other segment
    if point_on_segment(s2.start, s1, eps)
        || point_on_segment(s2.end, s1, eps)
        || point_on_segment(s1.start, s2, eps)
        || point_on_segment(s1.end, s2, eps)
    {
        SegmentCrossing::Neutral
    } else {
        SegmentCrossing::None
    }
}

/// Intersection point of the lines through two segments (rounded like every
/// point), or `None` when they are parallel.
fn intersection_point<F: Float>(s1: Segment2<F>, s2: Segment2<F>) -> Option<Point2<F>> {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let denom = d1.cross(d2);
    if denom == F::zero() {
        return None;
    }
    let t = (s2.start - s1.start).cross(d2) / denom;
    Some(Point2::new(s1.start.x() + t * d1.x, s1.start.y() + t * d1.y))
}

fn is_endpoint_of<F: Float>(p: Point2<F>, s1: Segment2<F>, s2: Segment2<F>) -> bool {
    p == s1.start || p == s1.end || p == s2.start || p == s2.end
}
