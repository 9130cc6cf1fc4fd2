//! Convex hulls.
//!
//! A [`ConvexHull`] is computed once, when a shape is built, and then
//! queried for bounding boxes, containment and hull-of-hulls merges.
//!
//! # Example
//!
//! ```
//! use svgeom::hull::ConvexHull;
//! use svgeom::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // Interior point
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let hull = ConvexHull::from_points(&points);
//!
//! // Hull should be the 4 corners (interior point excluded)
//! assert_eq!(hull.len(), 4);
//! ```

use crate::bounds::BoundingBox;
use crate::primitives::{Point2, Transform};
use num_traits::Float;
use std::cmp::Ordering;

/// The convex boundary of a point set, with its bounding box.
///
/// Hull points are in counter-clockwise order (with y pointing up; clockwise
/// on screen) starting at the pivot, the minimal point in reading order. The
/// hull is implicitly closed.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull<F> {
    points: Vec<Point2<F>>,
    bounding_box: BoundingBox<F>,
}

impl<F: Float> ConvexHull<F> {
    /// Computes the convex hull of a set of points using Graham's scan.
    ///
    /// Inputs with fewer than 3 points are kept verbatim. Collinear points on
    /// the hull boundary are dropped.
    ///
    /// # Algorithm
    ///
    /// 1. Pick the minimal point (by y, then x) as pivot
    /// 2. Sort the other points by polar angle around the pivot (ties by
    ///    distance), comparing angles with cross products
    /// 3. Walk the sorted points, popping the stack top while the last two
    ///    stack points and the candidate do not make a counter-clockwise turn
    ///
    /// # Complexity
    ///
    /// - Time: O(n log n) due to sorting
    /// - Space: O(n)
    pub fn from_points(points: &[Point2<F>]) -> Self {
        Self::from_known_convex(graham_scan(points))
    }

    /// Builds a hull from points that are already known to be convex and in
    /// hull order, skipping the scan.
    ///
    /// The caller is responsible for convexity. This is the fast path used
    /// after affine transforms, which preserve convexity.
    pub fn from_known_convex(points: Vec<Point2<F>>) -> Self {
        let bounding_box = BoundingBox::from_points(points.iter().copied());
        Self {
            points,
            bounding_box,
        }
    }

    /// Computes the hull of several hulls by rescanning the union of their
    /// points.
    pub fn merge<'a, I>(hulls: I) -> Self
    where
        I: IntoIterator<Item = &'a ConvexHull<F>>,
        F: 'a,
    {
        let points: Vec<Point2<F>> = hulls
            .into_iter()
            .flat_map(|hull| hull.points.iter().copied())
            .collect();
        Self::from_points(&points)
    }

    /// Applies an affine transform to the hull.
    ///
    /// Affine maps keep convex sets convex, so no rescan is needed. Mirroring
    /// transforms flip the winding, which is restored by reversing the points.
    pub fn transform(&self, transform: &Transform<F>) -> Self {
        let mut points = transform.apply_points(&self.points);
        if transform.determinant() < F::zero() {
            points.reverse();
        }
        Self::from_known_convex(points)
    }

    /// Returns the hull vertices.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Returns the bounding box of the hull (and so of the original points).
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox<F> {
        self.bounding_box
    }

    /// Returns the number of hull vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the hull has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Computes the area of the hull using the shoelace formula.
    ///
    /// Returns 0 for fewer than 3 vertices.
    pub fn area(&self) -> F {
        let hull = &self.points;
        if hull.len() < 3 {
            return F::zero();
        }

        let n = hull.len();
        let twice_area = (0..n).fold(F::zero(), |acc, i| {
            let j = (i + 1) % n;
            acc + hull[i].x() * hull[j].y() - hull[j].x() * hull[i].y()
        });

        twice_area.abs() / F::from(2.0).unwrap()
    }

    /// Computes the perimeter of the hull.
    ///
    /// Returns 0 for fewer than 2 vertices.
    pub fn perimeter(&self) -> F {
        let hull = &self.points;
        if hull.len() < 2 {
            return F::zero();
        }

        let n = hull.len();
        (0..n).fold(F::zero(), |acc, i| acc + hull[i].distance(hull[(i + 1) % n]))
    }

    /// Tests if a point is inside the hull. Points on the boundary are inside.
    ///
    /// # Example
    ///
    /// ```
    /// use svgeom::hull::ConvexHull;
    /// use svgeom::Point2;
    ///
    /// let hull = ConvexHull::from_points(&[
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(2.0, 0.0),
    ///     Point2::new(2.0, 2.0),
    ///     Point2::new(0.0, 2.0),
    /// ]);
    ///
    /// assert!(hull.contains_point(Point2::new(1.0, 1.0))); // Center
    /// assert!(hull.contains_point(Point2::new(0.0, 0.0))); // Corner
    /// assert!(!hull.contains_point(Point2::new(3.0, 3.0))); // Outside
    /// ```
    pub fn contains_point(&self, point: Point2<F>) -> bool {
        let hull = &self.points;
        if hull.len() < 3 {
            return false;
        }
        if !self.bounding_box.contains_point(point) {
            return false;
        }

        // Inside when on the left of (or on) every edge
        let n = hull.len();
        (0..n).all(|i| cross(&hull[i], &hull[(i + 1) % n], &point) >= F::zero())
    }
}

/// Graham's scan over `points`; see [`ConvexHull::from_points`].
fn graham_scan<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted: Vec<Point2<F>> = points.to_vec();
    sorted.sort();
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let pivot = sorted[0];
    let rest = &mut sorted[1..];
    // Every point lies in the half-plane after the pivot, so the sign of the
    // cross product orders them by polar angle without calling atan2
    rest.sort_by(|a, b| {
        let turn = cross(&pivot, a, b);
        if turn > F::zero() {
            Ordering::Less
        } else if turn < F::zero() {
            Ordering::Greater
        } else {
            pivot
                .distance_squared(*a)
                .partial_cmp(&pivot.distance_squared(*b))
                .unwrap_or(Ordering::Equal)
        }
    });

    let mut stack: Vec<Point2<F>> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while stack.len() >= 2
            && cross(&stack[stack.len() - 2], &stack[stack.len() - 1], &p) <= F::zero()
        {
            stack.pop();
        }
        stack.push(p);
    }

    stack
}

/// Cross product of vectors OA and OB where O is the origin point.
/// Positive if counter-clockwise, negative if clockwise, zero if collinear.
#[inline]
fn cross<F: Float>(o: &Point2<F>, a: &Point2<F>, b: &Point2<F>) -> F {
    (a.x() - o.x()) * (b.y() - o.y()) - (a.y() - o.y()) * (b.x() - o.x())
}
