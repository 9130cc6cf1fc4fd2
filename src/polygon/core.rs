//! Core polygon type and relation tests.

use super::Relation;
use crate::bounds::BoundingBox;
use crate::config::EDGE_TOLERANCE;
use crate::hull::ConvexHull;
use crate::primitives::{Point2, Segment2, Transform};
use crate::tolerance::{point_on_segment, segment_crossing};
use num_traits::Float;
use std::collections::BTreeSet;
use std::fmt::Display;

/// A closed ring of vertices.
///
/// The ring is implicitly closed: the last vertex connects back to the
/// first, which is not repeated. Self-intersecting rings are accepted.
///
/// The bounding box and the convex hull are computed once, when the polygon
/// is built, and the polygon is read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    vertices: Vec<Point2<F>>,
    bounding_box: BoundingBox<F>,
    convex_hull: ConvexHull<F>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        let convex_hull = ConvexHull::from_points(&vertices);
        Self::with_hull(vertices, convex_hull)
    }

    /// Creates a polygon from coordinate pairs.
    pub fn from_coords(coords: &[(F, F)]) -> Self {
        Self::new(coords.iter().map(|&c| Point2::from(c)).collect())
    }

    fn with_hull(vertices: Vec<Point2<F>>, convex_hull: ConvexHull<F>) -> Self {
        Self {
            bounding_box: convex_hull.bounding_box(),
            vertices,
            convex_hull,
        }
    }

    /// Returns the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox<F> {
        self.bounding_box
    }

    #[inline]
    pub fn convex_hull(&self) -> &ConvexHull<F> {
        &self.convex_hull
    }

    /// Iterates over the edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding (with y pointing up), negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the centroid (center of mass) of the polygon.
    ///
    /// Returns None for degenerate polygons (fewer than 3 vertices or zero area).
    pub fn centroid(&self) -> Option<Point2<F>> {
        let vertices = &self.vertices;
        let area = self.signed_area();
        if vertices.len() < 3 || area.abs() < F::epsilon() {
            return None;
        }

        let mut cx = F::zero();
        let mut cy = F::zero();
        let n = vertices.len();

        for i in 0..n {
            let j = (i + 1) % n;
            let cross = vertices[i].x() * vertices[j].y() - vertices[j].x() * vertices[i].y();
            cx = cx + (vertices[i].x() + vertices[j].x()) * cross;
            cy = cy + (vertices[i].y() + vertices[j].y()) * cross;
        }

        let six = F::from(6.0).unwrap();
        Some(Point2::new(cx / (six * area), cy / (six * area)))
    }

    /// Returns the perimeter of the polygon.
    pub fn perimeter(&self) -> F {
        if self.vertices.len() < 2 {
            return F::zero();
        }
        self.edges().fold(F::zero(), |acc, edge| acc + edge.length())
    }

    /// Classifies a point against the polygon.
    ///
    /// Returns [`Relation::Inside`] when the point is a vertex, lies on an
    /// edge (within [`EDGE_TOLERANCE`]) or is inside by the even-odd rule,
    /// and [`Relation::Disjoint`] otherwise. The boundary always counts as
    /// inside.
    ///
    /// # Example
    ///
    /// ```
    /// use svgeom::polygon::{Polygon, Relation};
    /// use svgeom::Point2;
    ///
    /// let square = Polygon::from_coords(&[(0.0_f64, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    ///
    /// assert_eq!(square.relation_to_point(Point2::new(5.0, 5.0)), Relation::Inside);
    /// assert_eq!(square.relation_to_point(Point2::new(10.0, 5.0)), Relation::Inside);
    /// assert_eq!(square.relation_to_point(Point2::new(15.0, 15.0)), Relation::Disjoint);
    /// ```
    pub fn relation_to_point(&self, point: Point2<F>) -> Relation {
        if self.on_boundary(point) || self.ray_cast(point) {
            Relation::Inside
        } else {
            Relation::Disjoint
        }
    }

    /// Returns the relation of `self` to `target`.
    ///
    /// This test is partial: it only ever returns [`Relation::Disjoint`],
    /// [`Relation::Intersect`] or [`Relation::Inside`]. Use
    /// [`Polygon::classify`] to also detect [`Relation::Cover`] and
    /// [`Relation::Equal`].
    ///
    /// Vertices of `self` lying on the boundary of `target` are neutral. The
    /// result is `Inside` when every other vertex is strictly inside
    /// `target`, `Intersect` when two edges properly cross away from their
    /// endpoints, and `Disjoint` otherwise.
    pub fn relation_to(&self, target: &Polygon<F>) -> Relation {
        if self.is_empty() || target.is_empty() {
            return Relation::Disjoint;
        }
        if !self.bounding_box.intersects(&target.bounding_box) {
            return Relation::Disjoint;
        }

        let mut inside = 0;
        let mut neutral = 0;
        for &vertex in &self.vertices {
            if target.on_boundary(vertex) {
                neutral += 1;
            } else if target.ray_cast(vertex) {
                inside += 1;
            }
        }

        if inside == self.vertices.len() - neutral {
            return Relation::Inside;
        }

        let eps = edge_tolerance::<F>();
        for edge in self.edges() {
            let edge_box = edge.bounding_box();
            if !edge_box.intersects(&target.bounding_box) {
                continue;
            }
            let crosses = target
                .edges()
                .filter(|other| edge_box.intersects(&other.bounding_box()))
                .any(|other| segment_crossing(edge, other, eps).is_proper());
            if crosses {
                return Relation::Intersect;
            }
        }

        Relation::Disjoint
    }

    /// Returns the full relation of `self` to `other`.
    ///
    /// Unlike [`Polygon::relation_to`] this is total over [`Relation`]:
    /// `Equal` when both vertex sets are the same, `Inside` when `self` is
    /// inside `other`, `Cover` when `other` is inside `self`, and the partial
    /// result otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use svgeom::polygon::{Polygon, Relation};
    ///
    /// let outer = Polygon::from_coords(&[(0.0_f64, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    /// let inner = Polygon::from_coords(&[(2.0_f64, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 8.0)]);
    ///
    /// assert_eq!(inner.classify(&outer), Relation::Inside);
    /// assert_eq!(outer.classify(&inner), Relation::Cover);
    /// assert_eq!(outer.classify(&outer.clone()), Relation::Equal);
    /// ```
    pub fn classify(&self, other: &Polygon<F>) -> Relation {
        if self.same_vertex_set(other) {
            return Relation::Equal;
        }
        match self.relation_to(other) {
            Relation::Inside => Relation::Inside,
            partial => {
                if other.relation_to(self) == Relation::Inside {
                    Relation::Cover
                } else {
                    partial
                }
            }
        }
    }

    /// Applies an affine transform, carrying the hull along without a rescan.
    pub fn transform(&self, transform: &Transform<F>) -> Self {
        Self::with_hull(
            transform.apply_points(&self.vertices),
            self.convex_hull.transform(transform),
        )
    }

    /// Returns `true` if the point is a vertex or lies on an edge.
    pub(crate) fn on_boundary(&self, point: Point2<F>) -> bool {
        let eps = edge_tolerance::<F>();
        let bbox = self.bounding_box;
        if point.x() < bbox.min_x() - eps
            || point.x() > bbox.max_x() + eps
            || point.y() < bbox.min_y() - eps
            || point.y() > bbox.max_y() + eps
        {
            return false;
        }

        self.vertices.contains(&point) || self.edges().any(|edge| point_on_segment(point, edge, eps))
    }

    /// Even-odd ray casting. Boundary points may land on either side.
    pub(crate) fn ray_cast(&self, point: Point2<F>) -> bool {
        let vertices = &self.vertices;
        if vertices.len() < 3 || !self.bounding_box.contains_point(point) {
            return false;
        }

        let mut inside = false;
        let n = vertices.len();

        let mut j = n - 1;
        for i in 0..n {
            let vi = vertices[i];
            let vj = vertices[j];

            if ((vi.y() > point.y()) != (vj.y() > point.y()))
                && (point.x() < (vj.x() - vi.x()) * (point.y() - vi.y()) / (vj.y() - vi.y()) + vi.x())
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    fn same_vertex_set(&self, other: &Polygon<F>) -> bool {
        if self.bounding_box != other.bounding_box {
            return false;
        }
        let ours: BTreeSet<_> = self.vertices.iter().collect();
        let theirs: BTreeSet<_> = other.vertices.iter().collect();
        ours == theirs
    }
}

impl<F: Float + Display> Polygon<F> {
    /// Serialises the polygon as closed SVG path data.
    pub fn to_path_data(&self) -> String {
        crate::io::polygon_to_path_data(&self.vertices)
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

#[inline]
fn edge_tolerance<F: Float>() -> F {
    F::from(EDGE_TOLERANCE).unwrap()
}

/// Computes the signed area of a ring using the shoelace formula.
fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x() * vertices[j].y();
        area = area - vertices[j].x() * vertices[i].y();
    }

    area / F::from(2.0).unwrap()
}
