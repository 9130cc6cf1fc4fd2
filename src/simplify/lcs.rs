//! Longest common run of points between two polylines.

use super::FastPolyline;
use crate::error::GeometryError;
use num_traits::Float;

/// Reusable scratch space for [`FastPolyline::longest_common_substring`].
///
/// Matching polylines of `m` and `n` points needs at least `(m + 1) x
/// (n + 1)` cells. Allocate one matrix for the largest pair and reuse it.
#[derive(Debug, Clone)]
pub struct LcsMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsMatrix {
    /// Allocates a `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Allocates a matrix big enough for polylines of `m` and `n` points.
    pub fn for_lengths(m: usize, n: usize) -> Self {
        Self::new(m + 1, n + 1)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.cols + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[row * self.cols + col] = value;
    }
}

/// A run of equal consecutive points shared by two polylines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommonSubstring {
    /// Index of the first matched point in the receiver.
    pub start_a: usize,
    /// Index of the first matched point in the other polyline.
    pub start_b: usize,
    /// Number of matched points; zero when nothing matches.
    pub length: usize,
}

impl CommonSubstring {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl<F: Float> FastPolyline<F> {
    /// Finds the longest run of consecutive points shared with `other`.
    ///
    /// Classic O(mn) dynamic programming over `matrix`, which is only
    /// overwritten and may be reused across calls. The earliest run wins ties.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ScratchTooSmall`] if `matrix` has fewer than
    /// `self.len() + 1` rows or `other.len() + 1` columns.
    ///
    /// # Example
    ///
    /// ```
    /// use svgeom::simplify::{FastPolyline, LcsMatrix};
    ///
    /// let a = FastPolyline::from_coords(&[(0.0_f64, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 1.0)]).unwrap();
    /// let b = FastPolyline::from_coords(&[(1.0_f64, 0.0), (2.0, 0.0), (5.0, 5.0)]).unwrap();
    ///
    /// let mut matrix = LcsMatrix::for_lengths(a.len(), b.len());
    /// let common = a.longest_common_substring(&b, &mut matrix).unwrap();
    /// assert_eq!((common.start_a, common.start_b, common.length), (1, 0, 2));
    /// ```
    pub fn longest_common_substring(
        &self,
        other: &FastPolyline<F>,
        matrix: &mut LcsMatrix,
    ) -> Result<CommonSubstring, GeometryError> {
        let a = self.points();
        let b = other.points();
        let (m, n) = (a.len(), b.len());

        if matrix.rows < m + 1 || matrix.cols < n + 1 {
            return Err(GeometryError::ScratchTooSmall {
                required_rows: m + 1,
                required_cols: n + 1,
                rows: matrix.rows,
                cols: matrix.cols,
            });
        }

        for row in 0..=m {
            matrix.set(row, 0, 0);
        }
        for col in 0..=n {
            matrix.set(0, col, 0);
        }

        let mut best = CommonSubstring::default();
        for i in 1..=m {
            for j in 1..=n {
                let run = if a[i - 1] == b[j - 1] {
                    matrix.get(i - 1, j - 1) + 1
                } else {
                    0
                };
                matrix.set(i, j, run);

                if run > best.length {
                    best = CommonSubstring {
                        start_a: i - run,
                        start_b: j - run,
                        length: run,
                    };
                }
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast(coords: &[(f64, f64)]) -> FastPolyline<f64> {
        FastPolyline::from_coords(coords).unwrap()
    }

    #[test]
    fn test_no_common_points() {
        let a = fast(&[(0.0, 0.0), (1.0, 0.0)]);
        let b = fast(&[(5.0, 5.0), (6.0, 5.0)]);
        let mut matrix = LcsMatrix::for_lengths(2, 2);
        let common = a.longest_common_substring(&b, &mut matrix).unwrap();
        assert!(common.is_empty());
        assert_eq!(common, CommonSubstring::default());
    }

    #[test]
    fn test_identical_polylines() {
        let a = fast(&[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0)]);
        let mut matrix = LcsMatrix::for_lengths(3, 3);
        let common = a.longest_common_substring(&a.clone(), &mut matrix).unwrap();
        assert_eq!(
            common,
            CommonSubstring {
                start_a: 0,
                start_b: 0,
                length: 3
            }
        );
    }

    #[test]
    fn test_longest_run_wins() {
        let a = fast(&[(0.0, 0.0), (1.0, 0.0), (9.0, 9.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0), (8.0, 8.0)]);
        let b = fast(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0), (7.0, 7.0)]);
        let mut matrix = LcsMatrix::for_lengths(a.len(), b.len());
        let common = a.longest_common_substring(&b, &mut matrix).unwrap();
        assert_eq!(
            common,
            CommonSubstring {
                start_a: 3,
                start_b: 2,
                length: 3
            }
        );
    }

    #[test]
    fn test_matrix_reuse() {
        let a = fast(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let b = fast(&[(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let c = fast(&[(5.0, 5.0), (6.0, 6.0)]);

        let mut matrix = LcsMatrix::new(10, 10);
        assert_eq!(a.longest_common_substring(&b, &mut matrix).unwrap().length, 2);
        assert_eq!(a.longest_common_substring(&c, &mut matrix).unwrap().length, 0);
        assert_eq!(b.longest_common_substring(&a, &mut matrix).unwrap().length, 2);
    }

    #[test]
    fn test_matrix_too_small() {
        let a = fast(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let b = fast(&[(1.0, 0.0), (2.0, 0.0)]);
        let mut matrix = LcsMatrix::new(3, 3);
        assert_eq!(
            a.longest_common_substring(&b, &mut matrix),
            Err(GeometryError::ScratchTooSmall {
                required_rows: 4,
                required_cols: 3,
                rows: 3,
                cols: 3
            })
        );
    }
}
