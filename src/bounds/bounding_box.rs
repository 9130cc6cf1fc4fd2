//! Axis-aligned bounding box in SVG (y-down) orientation.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by its upper-left (smallest x and y) and lower-right (largest x
/// and y) corners, as in SVG user space where y grows downwards.
///
/// [`BoundingBox::none`] is the zero-size box at the origin. It stands for
/// "no geometry" and is what [`BoundingBox::from_points`] returns for an
/// empty input; check for it with [`BoundingBox::is_none`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<F> {
    /// Corner with the smallest x and y values.
    pub upper_left: Point2<F>,
    /// Corner with the largest x and y values.
    pub lower_right: Point2<F>,
}

impl<F: Float> BoundingBox<F> {
    /// Creates a new box from its corners.
    ///
    /// Does not validate that `upper_left <= lower_right`.
    #[inline]
    pub fn new(upper_left: Point2<F>, lower_right: Point2<F>) -> Self {
        Self {
            upper_left,
            lower_right,
        }
    }

    /// The empty sentinel: a zero-size box at the origin.
    #[inline]
    pub fn none() -> Self {
        Self::new(Point2::origin(), Point2::origin())
    }

    /// Returns `true` if this is the [`BoundingBox::none`] sentinel.
    #[inline]
    pub fn is_none(&self) -> bool {
        *self == Self::none()
    }

    /// Creates a box from two arbitrary corners.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            upper_left: Point2::new(a.x().min(b.x()), a.y().min(b.y())),
            lower_right: Point2::new(a.x().max(b.x()), a.y().max(b.y())),
        }
    }

    /// Creates a box containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self::new(p, p)
    }

    /// Creates the smallest box containing all points.
    ///
    /// Returns [`BoundingBox::none`] if the iterator is empty.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::none();
        };

        iter.fold(Self::from_point(first), |bbox, p| bbox.expand_to_include(p))
    }

    /// Smallest x value.
    #[inline]
    pub fn min_x(&self) -> F {
        self.upper_left.x()
    }

    /// Smallest y value.
    #[inline]
    pub fn min_y(&self) -> F {
        self.upper_left.y()
    }

    /// Largest x value.
    #[inline]
    pub fn max_x(&self) -> F {
        self.lower_right.x()
    }

    /// Largest y value.
    #[inline]
    pub fn max_y(&self) -> F {
        self.lower_right.y()
    }

    /// Horizontal centre.
    #[inline]
    pub fn mid_x(&self) -> F {
        (self.upper_left.x() + self.lower_right.x()) / F::from(2.0).unwrap()
    }

    /// Vertical centre.
    #[inline]
    pub fn mid_y(&self) -> F {
        (self.upper_left.y() + self.lower_right.y()) / F::from(2.0).unwrap()
    }

    /// Returns the width of the box.
    #[inline]
    pub fn width(&self) -> F {
        self.lower_right.x() - self.upper_left.x()
    }

    /// Returns the height of the box.
    #[inline]
    pub fn height(&self) -> F {
        self.lower_right.y() - self.upper_left.y()
    }

    /// Returns the center point of the box.
    #[inline]
    pub fn center(&self) -> Point2<F> {
        self.upper_left.midpoint(self.lower_right)
    }

    /// Returns the area of the box.
    #[inline]
    pub fn area(&self) -> F {
        self.width() * self.height()
    }

    /// Returns a new box expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            upper_left: Point2::new(self.upper_left.x().min(p.x()), self.upper_left.y().min(p.y())),
            lower_right: Point2::new(self.lower_right.x().max(p.x()), self.lower_right.y().max(p.y())),
        }
    }

    /// Returns the smallest box containing both boxes.
    ///
    /// The [`BoundingBox::none`] sentinel is the identity of this operation.
    pub fn union(self, other: Self) -> Self {
        if self.is_none() {
            return other;
        }
        if other.is_none() {
            return self;
        }
        self.expand_to_include(other.upper_left)
            .expand_to_include(other.lower_right)
    }

    /// Returns the overlapping region of two boxes, if they overlap.
    pub fn intersection(self, other: Self) -> Option<Self> {
        let upper_left = Point2::new(
            self.upper_left.x().max(other.upper_left.x()),
            self.upper_left.y().max(other.upper_left.y()),
        );
        let lower_right = Point2::new(
            self.lower_right.x().min(other.lower_right.x()),
            self.lower_right.y().min(other.lower_right.y()),
        );

        if upper_left.x() <= lower_right.x() && upper_left.y() <= lower_right.y() {
            Some(Self::new(upper_left, lower_right))
        } else {
            None
        }
    }

    /// Returns `true` if the point lies inside the box or on its border.
    #[inline]
    pub fn contains_point(&self, p: Point2<F>) -> bool {
        p.x() >= self.upper_left.x()
            && p.x() <= self.lower_right.x()
            && p.y() >= self.upper_left.y()
            && p.y() <= self.lower_right.y()
    }

    /// Returns `true` if the boxes overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.upper_left.x() <= other.lower_right.x()
            && self.lower_right.x() >= other.upper_left.x()
            && self.upper_left.y() <= other.lower_right.y()
            && self.lower_right.y() >= other.upper_left.y()
    }

    /// Returns the box grown by `margin` on every side.
    #[inline]
    pub fn inflate(&self, margin: F) -> Self {
        Self {
            upper_left: Point2::new(self.upper_left.x() - margin, self.upper_left.y() - margin),
            lower_right: Point2::new(self.lower_right.x() + margin, self.lower_right.y() + margin),
        }
    }
}

impl<F: Float> Default for BoundingBox<F> {
    fn default() -> Self {
        Self::none()
    }
}
