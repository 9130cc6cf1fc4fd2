//! Open polylines.

use crate::bounds::BoundingBox;
use crate::error::GeometryError;
use crate::hull::ConvexHull;
use crate::primitives::{Point2, Segment2, Transform};
use num_traits::Float;
use std::fmt::Display;
use std::sync::OnceLock;

/// An open chain of at least two points.
///
/// The convex hull is computed on first request and cached.
#[derive(Debug, Clone)]
pub struct Polyline<F> {
    points: Vec<Point2<F>>,
    convex_hull: OnceLock<ConvexHull<F>>,
}

impl<F: Float> Polyline<F> {
    /// Creates a polyline.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewPoints`] for fewer than 2 points.
    ///
    /// # Example
    ///
    /// ```
    /// use svgeom::polyline::Polyline;
    /// use svgeom::Point2;
    ///
    /// let line = Polyline::new(vec![Point2::new(0.0_f64, 0.0), Point2::new(3.0, 4.0)]).unwrap();
    /// assert_eq!(line.length(), 5.0);
    ///
    /// assert!(Polyline::new(vec![Point2::new(0.0_f64, 0.0)]).is_err());
    /// ```
    pub fn new(points: Vec<Point2<F>>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewPoints {
                required: 2,
                actual: points.len(),
            });
        }
        Ok(Self {
            points,
            convex_hull: OnceLock::new(),
        })
    }

    /// Creates a polyline from coordinate pairs.
    pub fn from_coords(coords: &[(F, F)]) -> Result<Self, GeometryError> {
        Self::new(coords.iter().map(|&c| Point2::from(c)).collect())
    }

    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a constructed polyline.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Point2<F> {
        self.points[0]
    }

    #[inline]
    pub fn last(&self) -> Point2<F> {
        self.points[self.points.len() - 1]
    }

    /// Iterates over consecutive segments.
    pub fn segments(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.points.windows(2).map(|w| Segment2::new(w[0], w[1]))
    }

    /// Total length of all segments.
    pub fn length(&self) -> F {
        self.segments().fold(F::zero(), |acc, s| acc + s.length())
    }

    /// Returns the convex hull, computing it on first use.
    pub fn convex_hull(&self) -> &ConvexHull<F> {
        self.convex_hull
            .get_or_init(|| ConvexHull::from_points(&self.points))
    }

    pub fn bounding_box(&self) -> BoundingBox<F> {
        self.convex_hull().bounding_box()
    }

    /// Applies an affine transform. An already computed hull is carried along.
    pub fn transform(&self, transform: &Transform<F>) -> Self {
        let convex_hull = OnceLock::new();
        if let Some(hull) = self.convex_hull.get() {
            let _ = convex_hull.set(hull.transform(transform));
        }
        Self {
            points: transform.apply_points(&self.points),
            convex_hull,
        }
    }

    /// Consumes the polyline, returning its points.
    pub fn into_points(self) -> Vec<Point2<F>> {
        self.points
    }
}

impl<F: Float + Display> Polyline<F> {
    /// Serialises the polyline as open SVG path data.
    pub fn to_path_data(&self) -> String {
        crate::io::polyline_to_path_data(&self.points)
    }
}

impl<F: PartialEq> PartialEq for Polyline<F> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_too_few_points() {
        assert_eq!(
            Polyline::<f64>::new(vec![]),
            Err(GeometryError::TooFewPoints {
                required: 2,
                actual: 0
            })
        );
        assert!(Polyline::from_coords(&[(1.0_f64, 1.0)]).is_err());
    }

    #[test]
    fn test_length() {
        let line = Polyline::from_coords(&[(0.0_f64, 0.0), (3.0, 0.0), (3.0, 4.0)]).unwrap();
        assert_relative_eq!(line.length(), 7.0, epsilon = 1e-10);
        assert_eq!(line.segments().count(), 2);
        assert_eq!(line.first(), Point2::new(0.0, 0.0));
        assert_eq!(line.last(), Point2::new(3.0, 4.0));
    }

    #[test]
    fn test_lazy_hull() {
        let line = Polyline::from_coords(&[(0.0_f64, 0.0), (2.0, 1.0), (4.0, 0.0), (2.0, 3.0)]).unwrap();
        assert!(line.convex_hull.get().is_none());

        let hull = line.convex_hull();
        assert_eq!(hull.len(), 3);
        assert!(line.convex_hull.get().is_some());

        let bbox = line.bounding_box();
        assert_eq!(bbox.upper_left, Point2::new(0.0, 0.0));
        assert_eq!(bbox.lower_right, Point2::new(4.0, 3.0));
    }

    #[test]
    fn test_transform_carries_hull() {
        let line = Polyline::from_coords(&[(0.0_f64, 0.0), (2.0, 2.0), (4.0, 0.0)]).unwrap();
        let _ = line.convex_hull();

        let moved = line.transform(&Transform::translate(1.0, 1.0));
        assert!(moved.convex_hull.get().is_some());
        assert_eq!(moved.points()[1], Point2::new(3.0, 3.0));
        assert_eq!(moved.bounding_box().upper_left, Point2::new(1.0, 1.0));

        let fresh = Polyline::from_coords(&[(0.0_f64, 0.0), (1.0, 0.0)])
            .unwrap()
            .transform(&Transform::scale(2.0));
        assert!(fresh.convex_hull.get().is_none());
        assert_eq!(fresh.last(), Point2::new(2.0, 0.0));
    }

    #[test]
    fn test_shared_across_threads() {
        let line = Polyline::from_coords(&[(0.0_f64, 0.0), (5.0, 5.0), (10.0, 0.0)]).unwrap();
        std::thread::scope(|s| {
            let a = s.spawn(|| line.convex_hull().len());
            let b = s.spawn(|| line.convex_hull().len());
            assert_eq!(a.join().unwrap(), 3);
            assert_eq!(b.join().unwrap(), 3);
        });
    }
}
