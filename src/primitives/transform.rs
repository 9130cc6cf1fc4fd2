//! 2D affine transform, matching the SVG `transform` attribute model.

use super::{Point2, Vec2};
use num_traits::Float;
use std::ops::Mul;

/// A 2D affine transformation matrix.
///
/// Represented as a 2x3 matrix in row-major order:
/// ```text
/// | a  b  tx |
/// | c  d  ty |
/// ```
///
/// Transforms are applied as:
/// - Point: `(a*x + b*y + tx, c*x + d*y + ty)`
/// - Vector: `(a*x + b*y, c*x + d*y)` (no translation)
///
/// Note that SVG writes the same matrix as `matrix(a c b d tx ty)`; use
/// [`Transform::from_svg_matrix`] to build one from SVG's ordering.
///
/// # Example
///
/// ```
/// use svgeom::primitives::{Point2, Transform};
///
/// // Rotate 90 degrees then translate
/// let transform: Transform<f64> = Transform::rotation_degrees(90.0).then_translate(10.0, 0.0);
///
/// let point = transform.apply_point(Point2::new(1.0, 0.0));
/// assert_eq!(point, Point2::new(10.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform<F> {
    /// Matrix element [0,0] - x scale / rotation component
    pub a: F,
    /// Matrix element [0,1] - x shear / rotation component
    pub b: F,
    /// Matrix element [1,0] - y shear / rotation component
    pub c: F,
    /// Matrix element [1,1] - y scale / rotation component
    pub d: F,
    /// Translation x component
    pub tx: F,
    /// Translation y component
    pub ty: F,
}

impl<F: Float> Transform<F> {
    /// Creates a new transform from row-major matrix components.
    #[inline]
    pub fn new(a: F, b: F, c: F, d: F, tx: F, ty: F) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Creates a transform from the six values of an SVG `matrix(a b c d e f)`.
    ///
    /// SVG lists the matrix column by column, so `b` and `c` swap places.
    #[inline]
    pub fn from_svg_matrix(a: F, b: F, c: F, d: F, e: F, f: F) -> Self {
        Self::new(a, c, b, d, e, f)
    }

    /// Returns the six values in SVG `matrix(a b c d e f)` order.
    #[inline]
    pub fn to_svg_matrix(&self) -> [F; 6] {
        [self.a, self.c, self.b, self.d, self.tx, self.ty]
    }

    /// Creates the identity transform (no change).
    #[inline]
    pub fn identity() -> Self {
        Self::new(F::one(), F::zero(), F::zero(), F::one(), F::zero(), F::zero())
    }

    /// Creates a translation transform.
    #[inline]
    pub fn translate(tx: F, ty: F) -> Self {
        Self::new(F::one(), F::zero(), F::zero(), F::one(), tx, ty)
    }

    /// Creates a translation transform from an offset vector.
    #[inline]
    pub fn translation(offset: Vec2<F>) -> Self {
        Self::translate(offset.x, offset.y)
    }

    /// Creates a rotation transform around the origin.
    ///
    /// Angle is in radians, positive turns the x axis towards the y axis.
    #[inline]
    pub fn rotation(angle: F) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self::new(cos_a, -sin_a, sin_a, cos_a, F::zero(), F::zero())
    }

    /// Creates a rotation transform from an angle in degrees, as SVG's `rotate()`.
    #[inline]
    pub fn rotation_degrees(degrees: F) -> Self {
        Self::rotation(degrees.to_radians())
    }

    /// Creates a rotation transform around a specific point.
    pub fn rotation_around(angle: F, center: Point2<F>) -> Self {
        // Translate to origin, rotate, translate back
        Self::translate(-center.x(), -center.y())
            .then(Self::rotation(angle))
            .then_translate(center.x(), center.y())
    }

    /// Creates a uniform scaling transform around the origin.
    #[inline]
    pub fn scale(factor: F) -> Self {
        Self::scale_xy(factor, factor)
    }

    /// Creates a non-uniform scaling transform around the origin.
    #[inline]
    pub fn scale_xy(sx: F, sy: F) -> Self {
        Self::new(sx, F::zero(), F::zero(), sy, F::zero(), F::zero())
    }

    /// Creates a horizontal skew by `degrees`, as SVG's `skewX()`.
    ///
    /// Points are shifted horizontally by `tan(angle) * y`.
    #[inline]
    pub fn skew_x(degrees: F) -> Self {
        Self::new(F::one(), degrees.to_radians().tan(), F::zero(), F::one(), F::zero(), F::zero())
    }

    /// Creates a vertical skew by `degrees`, as SVG's `skewY()`.
    ///
    /// Points are shifted vertically by `tan(angle) * x`.
    #[inline]
    pub fn skew_y(degrees: F) -> Self {
        Self::new(F::one(), F::zero(), degrees.to_radians().tan(), F::one(), F::zero(), F::zero())
    }

    /// Applies this transform to a point.
    #[inline]
    pub fn apply_point(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            self.a * p.x() + self.b * p.y() + self.tx,
            self.c * p.x() + self.d * p.y() + self.ty,
        )
    }

    /// Applies this transform to a vector (no translation).
    #[inline]
    pub fn apply_vec(&self, v: Vec2<F>) -> Vec2<F> {
        Vec2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    /// Applies this transform to multiple points.
    pub fn apply_points(&self, points: &[Point2<F>]) -> Vec<Point2<F>> {
        points.iter().map(|p| self.apply_point(*p)).collect()
    }

    /// Composes this transform with another (self * other).
    ///
    /// The resulting transform applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.a * other.tx + self.b * other.ty + self.tx,
            ty: self.c * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// Returns a transform that applies `self` first, then `other`.
    #[inline]
    pub fn then(&self, other: Self) -> Self {
        other.compose(self)
    }

    /// Returns a transform that applies `self` first, then translates.
    #[inline]
    pub fn then_translate(&self, tx: F, ty: F) -> Self {
        self.then(Self::translate(tx, ty))
    }

    /// Returns a transform that applies `self` first, then rotates by `degrees`.
    #[inline]
    pub fn then_rotate_degrees(&self, degrees: F) -> Self {
        self.then(Self::rotation_degrees(degrees))
    }

    /// Returns a transform that applies `self` first, then scales.
    #[inline]
    pub fn then_scale(&self, sx: F, sy: F) -> Self {
        self.then(Self::scale_xy(sx, sy))
    }

    /// Returns the determinant of the linear part.
    ///
    /// Negative means the transform mirrors, zero means it collapses the plane.
    #[inline]
    pub fn determinant(&self) -> F {
        self.a * self.d - self.b * self.c
    }

    /// Returns the inverse transform, if it exists.
    ///
    /// Returns `None` if the transform is singular (determinant is zero).
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < F::epsilon() {
            return None;
        }

        let inv_det = F::one() / det;
        Some(Self {
            a: self.d * inv_det,
            b: -self.b * inv_det,
            c: -self.c * inv_det,
            d: self.a * inv_det,
            tx: (self.b * self.ty - self.d * self.tx) * inv_det,
            ty: (self.c * self.tx - self.a * self.ty) * inv_det,
        })
    }

    /// Returns true if this is approximately the identity transform.
    pub fn is_identity(&self, epsilon: F) -> bool {
        (self.a - F::one()).abs() < epsilon
            && self.b.abs() < epsilon
            && self.c.abs() < epsilon
            && (self.d - F::one()).abs() < epsilon
            && self.tx.abs() < epsilon
            && self.ty.abs() < epsilon
    }
}

impl<F: Float> Default for Transform<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> Mul for Transform<F> {
    type Output = Self;

    /// The result applies `rhs` first, then `self`.
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl<F: Float> Mul<Point2<F>> for Transform<F> {
    type Output = Point2<F>;

    fn mul(self, rhs: Point2<F>) -> Point2<F> {
        self.apply_point(rhs)
    }
}
