//! Ramer-Douglas-Peucker polyline simplification.
//!
//! The RDP algorithm recursively simplifies a polyline by removing points
//! that are within a specified tolerance of the line through the endpoints
//! of the current span.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use super::FastPolyline;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

impl<F: Float> FastPolyline<F> {
    /// Simplifies the polyline with the Ramer-Douglas-Peucker algorithm.
    ///
    /// `threshold_sq` is compared with the squared perpendicular distance of
    /// each point to the chord line. The endpoints are always kept.
    ///
    /// # Example
    ///
    /// ```
    /// use svgeom::simplify::FastPolyline;
    ///
    /// let line = FastPolyline::from_coords(&[
    ///     (0.0_f64, 0.0),
    ///     (1.0, 0.1),  // Close to the line, will be removed
    ///     (2.0, 0.0),
    ///     (3.0, 2.0),  // Far from line, will be kept
    ///     (4.0, 0.0),
    /// ])
    /// .unwrap();
    ///
    /// let simplified = line.apply_rdpa(0.25);
    /// assert_eq!(simplified.len(), 4);
    /// ```
    pub fn apply_rdpa(&self, threshold_sq: F) -> Self {
        let points = rdp(self.points(), threshold_sq);
        Self::canonical(points)
    }
}

/// Simplifies a point sequence, returning the retained points.
///
/// Returns the input unchanged if it has fewer than 3 points.
pub fn rdp<F: Float>(points: &[Point2<F>], threshold_sq: F) -> Vec<Point2<F>> {
    let indices = rdp_indices(points, threshold_sq);
    indices.into_iter().map(|i| points[i]).collect()
}

/// Simplifies a point sequence and returns the indices of retained points.
///
/// This is useful when you need to preserve the relationship between
/// the simplified points and associated data.
///
/// # Returns
///
/// A vector of indices into the original point array, in order.
/// Always includes index 0 and the last index if the input has >= 2 points.
pub fn rdp_indices<F: Float>(points: &[Point2<F>], threshold_sq: F) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }

    // Track which points to keep
    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    rdp_recursive(points, 0, n - 1, threshold_sq, &mut keep);

    keep.iter()
        .enumerate()
        .filter_map(|(i, &k)| if k { Some(i) } else { None })
        .collect()
}

/// Processes the span from `start` to `end` (inclusive).
fn rdp_recursive<F: Float>(
    points: &[Point2<F>],
    start: usize,
    end: usize,
    threshold_sq: F,
    keep: &mut [bool],
) {
    if end <= start + 1 {
        return; // No points between start and end
    }

    // First point with the maximum distance wins ties
    let chord = Segment2::new(points[start], points[end]);
    let mut max_dist_sq = F::zero();
    let mut max_idx = start;

    for (i, &p) in points.iter().enumerate().take(end).skip(start + 1) {
        let dist_sq = chord.line_distance_squared(p);
        if dist_sq > max_dist_sq {
            max_dist_sq = dist_sq;
            max_idx = i;
        }
    }

    if max_dist_sq > threshold_sq {
        keep[max_idx] = true;
        rdp_recursive(points, start, max_idx, threshold_sq, keep);
        rdp_recursive(points, max_idx, end, threshold_sq, keep);
    }
}
