//! Detection and removal of near-reversals.

use super::FastPolyline;
use crate::config::SHARP_TURN_DEGREES;
use crate::primitives::Point2;
use num_traits::Float;

impl<F: Float> FastPolyline<F> {
    /// Returns `true` if the path nearly reverses on itself anywhere.
    pub fn contains_sharp_turns(&self) -> bool {
        self.points()
            .windows(3)
            .any(|w| is_sharp_turn(w[0], w[1], w[2]))
    }

    /// Drops points until no sharp turn remains. Endpoints are never dropped.
    ///
    /// Points are taken greedily: the first two points are kept and every
    /// later point is appended only if it does not make a sharp turn with
    /// the last two kept points. The last point is always appended, after
    /// popping kept points (never the first one) until it fits.
    ///
    /// # Example
    ///
    /// ```
    /// use svgeom::simplify::FastPolyline;
    ///
    /// // The path runs out to (10, 0), doubles back, then goes on upwards
    /// let line = FastPolyline::from_coords(&[(0.0_f64, 0.0), (10.0, 0.0), (5.0, 0.1), (5.0, 10.0)]).unwrap();
    /// assert!(line.contains_sharp_turns());
    ///
    /// let cleaned = line.remove_sharp_turns();
    /// assert!(!cleaned.contains_sharp_turns());
    /// assert_eq!(cleaned.len(), 3);
    /// ```
    pub fn remove_sharp_turns(&self) -> Self {
        let points = self.points();
        let n = points.len();
        if n < 3 {
            return self.clone();
        }

        let mut kept = vec![points[0], points[1]];
        for &p in &points[2..n - 1] {
            let k = kept.len();
            if !is_sharp_turn(kept[k - 2], kept[k - 1], p) {
                kept.push(p);
            }
        }

        let last = points[n - 1];
        while kept.len() >= 2 && is_sharp_turn(kept[kept.len() - 2], kept[kept.len() - 1], last) {
            kept.pop();
        }
        kept.push(last);

        Self::canonical(kept)
    }
}

/// A turn is sharp when the heading changes by more than
/// [`SHARP_TURN_DEGREES`] in either direction.
pub fn is_sharp_turn<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    let limit = F::from(SHARP_TURN_DEGREES).unwrap();
    (b - a).turn_angle_degrees(c - b).abs() > limit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast(coords: &[(f64, f64)]) -> FastPolyline<f64> {
        FastPolyline::from_coords(coords).unwrap()
    }

    #[test]
    fn test_is_sharp_turn() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(10.0, 0.0);
        assert!(is_sharp_turn(a, b, Point2::new(0.0, 1.0)));
        assert!(!is_sharp_turn(a, b, Point2::new(10.0, 10.0)));
        assert!(!is_sharp_turn(a, b, Point2::new(20.0, 0.0)));
        // 150 degrees is not sharp enough
        assert!(!is_sharp_turn(a, b, Point2::new(10.0 - 3.0_f64.sqrt(), 1.0)));
    }

    #[test]
    fn test_no_sharp_turns_untouched() {
        let line = fast(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert!(!line.contains_sharp_turns());
        assert_eq!(line.remove_sharp_turns(), line);
    }

    #[test]
    fn test_spike_removed() {
        let line = fast(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (10.0, 0.5), (30.0, 0.0), (40.0, 0.0)]);
        assert!(line.contains_sharp_turns());
        let cleaned = line.remove_sharp_turns();
        assert_eq!(cleaned, fast(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0), (40.0, 0.0)]));
    }

    #[test]
    fn test_last_point_forces_backtracking() {
        // The last point lies behind the kept run
        let line = fast(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (15.0, 0.1)]);
        let cleaned = line.remove_sharp_turns();
        assert_eq!(cleaned.first(), Point2::new(0.0, 0.0));
        assert_eq!(cleaned.last(), Point2::new(15.0, 0.1));
        assert!(!cleaned.contains_sharp_turns());
        assert_eq!(cleaned, fast(&[(0.0, 0.0), (10.0, 0.0), (15.0, 0.1)]));
    }

    #[test]
    fn test_first_point_never_dropped() {
        let line = fast(&[(0.0, 0.0), (10.0, 0.0), (-5.0, 0.1)]);
        let cleaned = line.remove_sharp_turns();
        assert_eq!(cleaned, fast(&[(0.0, 0.0), (-5.0, 0.1)]));
    }
}
