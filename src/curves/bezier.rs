//! Bézier curve types and discretization.
//!
//! Provides quadratic, cubic and conic Bézier curves sampled at evenly
//! spaced parameters for converting curves to point lists.

use crate::bounds::BoundingBox;
use crate::primitives::Point2;
use num_traits::Float;

/// A quadratic Bézier curve defined by 3 control points.
///
/// The curve starts at `p0`, is influenced by `p1`, and ends at `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// Control point
    pub p1: Point2<F>,
    /// End point
    pub p2: Point2<F>,
}

impl<F: Float> QuadraticBezier2<F> {
    /// Creates a new quadratic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluates the curve at parameter `t` (0 to 1).
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let one = F::one();
        let mt = one - t;
        let mt2 = mt * mt;
        let t2 = t * t;
        let two = one + one;

        Point2::new(
            mt2 * self.p0.x() + two * mt * t * self.p1.x() + t2 * self.p2.x(),
            mt2 * self.p0.y() + two * mt * t * self.p1.y() + t2 * self.p2.y(),
        )
    }

    /// Samples the curve at `segments + 1` evenly spaced parameters,
    /// including both endpoints.
    pub fn sample(&self, segments: usize) -> Vec<Point2<F>> {
        sample_with(segments, |t| self.eval(t))
    }

    /// Splits the curve at parameter `t`, returning two new curves.
    pub fn split(&self, t: F) -> (Self, Self) {
        // de Casteljau's algorithm
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p012 = p01.lerp(p12, t);

        (
            Self::new(self.p0, p01, p012),
            Self::new(p012, p12, self.p2),
        )
    }

    /// Returns the bounding box of the curve's control points.
    ///
    /// Note: This is a conservative bound; the actual curve may be tighter.
    pub fn control_bounds(&self) -> BoundingBox<F> {
        BoundingBox::from_points([self.p0, self.p1, self.p2])
    }
}

/// A cubic Bézier curve defined by 4 control points.
///
/// The curve starts at `p0`, is influenced by `p1` and `p2`, and ends at `p3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// First control point
    pub p1: Point2<F>,
    /// Second control point
    pub p2: Point2<F>,
    /// End point
    pub p3: Point2<F>,
}

impl<F: Float> CubicBezier2<F> {
    /// Creates a new cubic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the curve at parameter `t` (0 to 1).
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let one = F::one();
        let mt = one - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;
        let t2 = t * t;
        let t3 = t2 * t;
        let three = one + one + one;

        Point2::new(
            mt3 * self.p0.x()
                + three * mt2 * t * self.p1.x()
                + three * mt * t2 * self.p2.x()
                + t3 * self.p3.x(),
            mt3 * self.p0.y()
                + three * mt2 * t * self.p1.y()
                + three * mt * t2 * self.p2.y()
                + t3 * self.p3.y(),
        )
    }

    /// Samples the curve at `segments + 1` evenly spaced parameters,
    /// including both endpoints.
    ///
    /// # Example
    ///
    /// ```
    /// use svgeom::{Point2, curves::CubicBezier2};
    ///
    /// let curve = CubicBezier2::new(
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(1.0, 2.0),
    ///     Point2::new(3.0, 2.0),
    ///     Point2::new(4.0, 0.0),
    /// );
    ///
    /// let points = curve.sample(10);
    /// assert_eq!(points.len(), 11);
    /// assert_eq!(points[0], Point2::new(0.0, 0.0));
    /// assert_eq!(points[10], Point2::new(4.0, 0.0));
    /// ```
    pub fn sample(&self, segments: usize) -> Vec<Point2<F>> {
        sample_with(segments, |t| self.eval(t))
    }

    /// Splits the curve at parameter `t`, returning two new curves.
    pub fn split(&self, t: F) -> (Self, Self) {
        // de Casteljau's algorithm
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);

        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);

        let p0123 = p012.lerp(p123, t);

        (
            Self::new(self.p0, p01, p012, p0123),
            Self::new(p0123, p123, p23, self.p3),
        )
    }

    /// Returns the bounding box of the curve's control points.
    ///
    /// Note: This is a conservative bound; the actual curve may be tighter.
    pub fn control_bounds(&self) -> BoundingBox<F> {
        BoundingBox::from_points([self.p0, self.p1, self.p2, self.p3])
    }
}

/// A rational quadratic Bézier curve (conic section).
///
/// The control point `p1` pulls the curve with weight `w`: `w = 1` is an
/// ordinary quadratic, `w < 1` an ellipse arc, `w > 1` a hyperbola arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicBezier2<F> {
    pub p0: Point2<F>,
    pub p1: Point2<F>,
    pub p2: Point2<F>,
    /// Weight of `p1`.
    pub w: F,
}

impl<F: Float> ConicBezier2<F> {
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>, w: F) -> Self {
        Self { p0, p1, p2, w }
    }

    /// Evaluates the curve at parameter `t` (0 to 1).
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let one = F::one();
        let two = one + one;
        let mt = one - t;

        let b0 = mt * mt;
        let b1 = two * mt * t * self.w;
        let b2 = t * t;
        let denom = b0 + b1 + b2;

        Point2::new(
            (b0 * self.p0.x() + b1 * self.p1.x() + b2 * self.p2.x()) / denom,
            (b0 * self.p0.y() + b1 * self.p1.y() + b2 * self.p2.y()) / denom,
        )
    }

    /// Samples the curve at `segments + 1` evenly spaced parameters,
    /// including both endpoints.
    pub fn sample(&self, segments: usize) -> Vec<Point2<F>> {
        sample_with(segments, |t| self.eval(t))
    }

    /// Returns the bounding box of the curve's control points.
    pub fn control_bounds(&self) -> BoundingBox<F> {
        BoundingBox::from_points([self.p0, self.p1, self.p2])
    }
}

/// Evaluates `eval` at `segments + 1` evenly spaced parameters in [0, 1].
/// Zero segments is treated as one.
fn sample_with<F, E>(segments: usize, eval: E) -> Vec<Point2<F>>
where
    F: Float,
    E: Fn(F) -> Point2<F>,
{
    let segments = segments.max(1);
    let n = F::from(segments).unwrap();
    (0..=segments)
        .map(|i| eval(F::from(i).unwrap() / n))
        .collect()
}
