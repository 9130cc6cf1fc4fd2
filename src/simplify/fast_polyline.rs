//! Direction-normalised polylines for deduplication and merging.

use crate::error::GeometryError;
use crate::polyline::Polyline;
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// An immutable polyline of at least two points, stored in a canonical
/// direction.
///
/// The points are reversed if needed so that the first point is not
/// greater than the last one. When both endpoints are the same point, the
/// lexicographically smaller of the two directions is kept. Two polylines
/// walking the same points in opposite directions are therefore equal and
/// hash the same.
///
/// Every optimisation returns a new polyline.
#[derive(Debug, Clone)]
pub struct FastPolyline<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> FastPolyline<F> {
    /// Creates a polyline in canonical direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewPoints`] for fewer than 2 points.
    ///
    /// # Example
    ///
    /// ```
    /// use svgeom::simplify::FastPolyline;
    /// use svgeom::Point2;
    ///
    /// let forward = vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 1.0), Point2::new(2.0, 0.0)];
    /// let mut backward = forward.clone();
    /// backward.reverse();
    ///
    /// assert_eq!(
    ///     FastPolyline::new(forward).unwrap(),
    ///     FastPolyline::new(backward).unwrap(),
    /// );
    /// ```
    pub fn new(points: Vec<Point2<F>>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewPoints {
                required: 2,
                actual: points.len(),
            });
        }
        Ok(Self::canonical(points))
    }

    /// Creates a polyline from coordinate pairs.
    pub fn from_coords(coords: &[(F, F)]) -> Result<Self, GeometryError> {
        Self::new(coords.iter().map(|&c| Point2::from(c)).collect())
    }

    /// Builds from points already known to number at least two.
    pub(crate) fn canonical(mut points: Vec<Point2<F>>) -> Self {
        debug_assert!(points.len() >= 2);
        let first = points[0];
        let last = points[points.len() - 1];
        if first > last {
            points.reverse();
        } else if first == last {
            let reversed: Vec<Point2<F>> = points.iter().rev().copied().collect();
            if reversed < points {
                points = reversed;
            }
        }
        Self { points }
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

    /// Consumes the polyline, returning its points.
    pub fn into_points(self) -> Vec<Point2<F>> {
        self.points
    }

    /// Drops points that are within `threshold_sq` (squared distance) of the
    /// last kept point.
    ///
    /// The first point is always kept. The last point is always kept too,
    /// replacing the last kept point if that one is too close to it.
    /// Polylines of two points are returned unchanged.
    pub fn remove_equivalent_adjacent_points(&self, threshold_sq: F) -> Self {
        let n = self.points.len();
        if n <= 2 {
            return self.clone();
        }

        let mut kept = vec![self.points[0]];
        for &p in &self.points[1..] {
            let previous = kept[kept.len() - 1];
            if previous.distance_squared(p) > threshold_sq {
                kept.push(p);
            }
        }

        let last = self.points[n - 1];
        if kept.len() == 1 {
            kept.push(last);
        } else {
            let end = kept.len() - 1;
            kept[end] = last;
        }

        Self::canonical(kept)
    }

    /// Returns `true` if any point occurs more than once.
    pub fn has_duplicated_points(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.points.len());
        !self.points.iter().all(|p| seen.insert(*p))
    }
}

impl<F: Float + Display> FastPolyline<F> {
    /// Serialises the polyline as open SVG path data.
    pub fn to_path_data(&self) -> String {
        crate::io::polyline_to_path_data(&self.points)
    }
}

impl<F: Float> From<Polyline<F>> for FastPolyline<F> {
    fn from(polyline: Polyline<F>) -> Self {
        Self::canonical(polyline.into_points())
    }
}

impl<F: Float> PartialEq for FastPolyline<F> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<F: Float> Eq for FastPolyline<F> {}

impl<F: Float> Hash for FastPolyline<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.points.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fast(coords: &[(f64, f64)]) -> FastPolyline<f64> {
        FastPolyline::from_coords(coords).unwrap()
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(
            FastPolyline::<f64>::new(vec![Point2::new(1.0, 1.0)]),
            Err(GeometryError::TooFewPoints {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_canonical_direction() {
        let line = fast(&[(5.0, 5.0), (0.0, 3.0), (1.0, 0.0)]);
        assert_eq!(line.first(), Point2::new(1.0, 0.0));
        assert_eq!(line.last(), Point2::new(5.0, 5.0));
    }

    #[test]
    fn test_closed_ring_direction_is_stable() {
        let a = fast(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        let b = fast(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
        assert_eq!(a, b);
        assert_eq!(a.points()[1], Point2::new(1.0, 0.0));
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(fast(&[(0.0, 0.0), (1.0, 1.0)]));
        assert!(set.contains(&fast(&[(1.0, 1.0), (0.0, 0.0)])));
    }

    #[test]
    fn test_remove_equivalent_adjacent_points() {
        let line = fast(&[(0.0, 0.0), (0.5, 0.0), (3.0, 0.0), (3.2, 0.0), (6.0, 0.0)]);
        let cleaned = line.remove_equivalent_adjacent_points(1.0);
        assert_eq!(cleaned, fast(&[(0.0, 0.0), (3.0, 0.0), (6.0, 0.0)]));
    }

    #[test]
    fn test_remove_equivalent_forces_last_point() {
        // The last point is too close to the previous kept point
        let line = fast(&[(0.0, 0.0), (3.0, 0.0), (6.0, 0.0), (6.5, 0.0)]);
        let cleaned = line.remove_equivalent_adjacent_points(1.0);
        assert_eq!(cleaned, fast(&[(0.0, 0.0), (3.0, 0.0), (6.5, 0.0)]));
    }

    #[test]
    fn test_remove_equivalent_collapsed_line_keeps_endpoints() {
        let line = fast(&[(0.0, 0.0), (0.1, 0.0), (0.2, 0.0), (0.3, 0.0)]);
        let cleaned = line.remove_equivalent_adjacent_points(1.0);
        assert_eq!(cleaned, fast(&[(0.0, 0.0), (0.3, 0.0)]));
    }

    #[test]
    fn test_remove_equivalent_two_points_untouched() {
        let line = fast(&[(0.0, 0.0), (0.1, 0.0)]);
        assert_eq!(line.remove_equivalent_adjacent_points(1.0), line);
    }

    #[test]
    fn test_has_duplicated_points() {
        assert!(!fast(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).has_duplicated_points());
        assert!(fast(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]).has_duplicated_points());
        assert!(fast(&[(0.0, 0.0), (1.0, 0.0), (2.0, 2.0), (1.0, 0.0), (5.0, 5.0)]).has_duplicated_points());
    }

    #[test]
    fn test_from_polyline() {
        let polyline = Polyline::from_coords(&[(2.0_f64, 2.0), (0.0, 0.0)]).unwrap();
        let line = FastPolyline::from(polyline);
        assert_eq!(line.first(), Point2::new(0.0, 0.0));
    }

    proptest! {
        #[test]
        fn prop_direction_does_not_matter(coords in prop::collection::vec((-100i32..100, -100i32..100), 2..30)) {
            let points: Vec<Point2<f64>> = coords
                .iter()
                .map(|&(x, y)| Point2::new(x as f64, y as f64))
                .collect();
            let mut reversed = points.clone();
            reversed.reverse();

            let forward = FastPolyline::new(points).unwrap();
            let backward = FastPolyline::new(reversed).unwrap();
            prop_assert!(forward.first() <= forward.last());
            prop_assert_eq!(forward, backward);
        }
    }
}
