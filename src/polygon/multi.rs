//! Polygons with holes, and collections of them.

use super::{Polygon, Relation};
use crate::bounds::BoundingBox;
use crate::error::GeometryError;
use crate::hull::ConvexHull;
use crate::primitives::{Point2, Transform};
use num_traits::Float;
use std::fmt::Display;
use tracing::debug;

/// An exterior polygon with the holes cut out of it.
///
/// Holes are expected to lie inside the exterior and not to overlap each
/// other. Holes never contain further polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct EnclosedPolygonGroup<F> {
    exterior: Polygon<F>,
    interiors: Vec<Polygon<F>>,
}

impl<F: Float> EnclosedPolygonGroup<F> {
    /// Creates a group with no holes.
    pub fn new(exterior: Polygon<F>) -> Self {
        Self {
            exterior,
            interiors: Vec::new(),
        }
    }

    #[inline]
    pub fn exterior(&self) -> &Polygon<F> {
        &self.exterior
    }

    #[inline]
    pub fn interiors(&self) -> &[Polygon<F>] {
        &self.interiors
    }

    /// Classifies a point against the group.
    ///
    /// A point is inside when it is inside the exterior and not strictly
    /// inside any hole. The boundary of a hole belongs to the group.
    pub fn relation_to_point(&self, point: Point2<F>) -> Relation {
        if self.exterior.relation_to_point(point) == Relation::Disjoint {
            return Relation::Disjoint;
        }
        let in_hole = self
            .interiors
            .iter()
            .any(|hole| !hole.on_boundary(point) && hole.ray_cast(point));
        if in_hole {
            Relation::Disjoint
        } else {
            Relation::Inside
        }
    }

    fn transform(&self, transform: &Transform<F>) -> Self {
        Self {
            exterior: self.exterior.transform(transform),
            interiors: self.interiors.iter().map(|hole| hole.transform(transform)).collect(),
        }
    }
}

/// Polygons grouped into exteriors with holes.
///
/// The convex hull and bounding box cover the exterior polygons only, since
/// holes always lie within their exterior.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon<F> {
    groups: Vec<EnclosedPolygonGroup<F>>,
    convex_hull: ConvexHull<F>,
    bounding_box: BoundingBox<F>,
}

impl<F: Float> MultiPolygon<F> {
    /// Groups polygons by inserting them in order into a
    /// [`MultiPolygonBuilder`].
    ///
    /// # Example
    ///
    /// ```
    /// use svgeom::polygon::{MultiPolygon, Polygon};
    ///
    /// let outer = Polygon::from_coords(&[(0.0_f64, 0.0), (20.0, 0.0), (20.0, 20.0), (0.0, 20.0)]);
    /// let hole = Polygon::from_coords(&[(5.0_f64, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0)]);
    ///
    /// let multi = MultiPolygon::from_polygons(vec![outer, hole]).unwrap();
    /// assert_eq!(multi.len(), 1);
    /// assert_eq!(multi.groups()[0].interiors().len(), 1);
    /// ```
    pub fn from_polygons<I>(polygons: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = Polygon<F>>,
    {
        let mut builder = MultiPolygonBuilder::new();
        for polygon in polygons {
            builder.insert(polygon)?;
        }
        Ok(builder.build())
    }

    fn from_groups(groups: Vec<EnclosedPolygonGroup<F>>) -> Self {
        let convex_hull = ConvexHull::merge(groups.iter().map(|g| g.exterior.convex_hull()));
        Self {
            bounding_box: convex_hull.bounding_box(),
            groups,
            convex_hull,
        }
    }

    #[inline]
    pub fn groups(&self) -> &[EnclosedPolygonGroup<F>] {
        &self.groups
    }

    /// Iterates over the groups.
    pub fn iter(&self) -> std::slice::Iter<'_, EnclosedPolygonGroup<F>> {
        self.groups.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[inline]
    pub fn convex_hull(&self) -> &ConvexHull<F> {
        &self.convex_hull
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox<F> {
        self.bounding_box
    }

    /// Inside when some group contains the point.
    pub fn relation_to_point(&self, point: Point2<F>) -> Relation {
        let inside = self
            .groups
            .iter()
            .any(|group| group.relation_to_point(point) == Relation::Inside);
        if inside {
            Relation::Inside
        } else {
            Relation::Disjoint
        }
    }

    /// Applies an affine transform to every polygon, keeping the grouping.
    pub fn transform(&self, transform: &Transform<F>) -> Self {
        Self::from_groups(self.groups.iter().map(|g| g.transform(transform)).collect())
    }
}

impl<F: Float + Display> MultiPolygon<F> {
    /// Serialises every exterior and hole as subpaths of one path.
    pub fn to_path_data(&self) -> String {
        crate::io::multipolygon_to_path_data(self)
    }
}

impl<'a, F> IntoIterator for &'a MultiPolygon<F> {
    type Item = &'a EnclosedPolygonGroup<F>;
    type IntoIter = std::slice::Iter<'a, EnclosedPolygonGroup<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Incremental construction of a [`MultiPolygon`].
///
/// Each inserted polygon is classified against the exterior of every
/// existing group, in insertion order, and the first group it relates to
/// takes it:
///
/// - inside the exterior: it becomes a hole of that group;
/// - covering the exterior: it becomes the new exterior and the old one its
///   only hole;
/// - equal to the exterior: [`GeometryError::DuplicatePolygon`];
/// - otherwise it starts a new group.
///
/// Only one level of nesting is supported, so covering a group that already
/// has holes, or landing inside an existing hole, fails with
/// [`GeometryError::NestingTooDeep`]. The result depends on insertion order
/// when polygons overlap ambiguously.
#[derive(Debug, Clone, Default)]
pub struct MultiPolygonBuilder<F> {
    groups: Vec<EnclosedPolygonGroup<F>>,
}

impl<F: Float> MultiPolygonBuilder<F> {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Number of groups built so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Inserts a polygon, placing it in the first group it relates to.
    pub fn insert(&mut self, polygon: Polygon<F>) -> Result<(), GeometryError> {
        for (index, group) in self.groups.iter_mut().enumerate() {
            match polygon.classify(&group.exterior) {
                Relation::Inside => {
                    for hole in &group.interiors {
                        match polygon.classify(hole) {
                            Relation::Equal => return Err(GeometryError::DuplicatePolygon),
                            Relation::Inside | Relation::Cover => {
                                return Err(GeometryError::NestingTooDeep)
                            }
                            Relation::Disjoint | Relation::Intersect => {}
                        }
                    }
                    debug!(group = index, holes = group.interiors.len() + 1, "polygon added as hole");
                    group.interiors.push(polygon);
                    return Ok(());
                }
                Relation::Cover => {
                    if !group.interiors.is_empty() {
                        return Err(GeometryError::NestingTooDeep);
                    }
                    debug!(group = index, "polygon replaces exterior");
                    let old_exterior = std::mem::replace(&mut group.exterior, polygon);
                    group.interiors.push(old_exterior);
                    return Ok(());
                }
                Relation::Equal => return Err(GeometryError::DuplicatePolygon),
                Relation::Disjoint | Relation::Intersect => {}
            }
        }

        debug!(group = self.groups.len(), "polygon starts a new group");
        self.groups.push(EnclosedPolygonGroup::new(polygon));
        Ok(())
    }

    /// Finishes construction, computing the hull and bounding box.
    pub fn build(self) -> MultiPolygon<F> {
        MultiPolygon::from_groups(self.groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Polygon<f64> {
        Polygon::from_coords(&[(x1, y1), (x2, y1), (x2, y2), (x1, y2)])
    }

    #[test]
    fn test_hole_containment() {
        let multi = MultiPolygon::from_polygons(vec![
            rect(0.0, 0.0, 20.0, 20.0),
            rect(5.0, 5.0, 15.0, 15.0),
        ])
        .unwrap();

        assert_eq!(multi.len(), 1);
        let group = &multi.groups()[0];
        assert_eq!(group.exterior(), &rect(0.0, 0.0, 20.0, 20.0));
        assert_eq!(group.interiors(), &[rect(5.0, 5.0, 15.0, 15.0)]);
    }

    #[test]
    fn test_cover_swaps_exterior() {
        let multi = MultiPolygon::from_polygons(vec![
            rect(5.0, 5.0, 15.0, 15.0),
            rect(0.0, 0.0, 20.0, 20.0),
        ])
        .unwrap();

        assert_eq!(multi.len(), 1);
        let group = &multi.groups()[0];
        assert_eq!(group.exterior(), &rect(0.0, 0.0, 20.0, 20.0));
        assert_eq!(group.interiors(), &[rect(5.0, 5.0, 15.0, 15.0)]);
    }

    #[test]
    fn test_disjoint_polygons_make_groups() {
        let multi = MultiPolygon::from_polygons(vec![
            rect(0.0, 0.0, 10.0, 10.0),
            rect(15.0, 15.0, 25.0, 25.0),
        ])
        .unwrap();

        assert_eq!(multi.len(), 2);
        assert_eq!(multi.bounding_box().upper_left, Point2::new(0.0, 0.0));
        assert_eq!(multi.bounding_box().lower_right, Point2::new(25.0, 25.0));
        assert_eq!(multi.convex_hull().len(), 6);
    }

    #[test]
    fn test_duplicate_polygon() {
        let mut builder = MultiPolygonBuilder::new();
        builder.insert(rect(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(
            builder.insert(rect(0.0, 0.0, 10.0, 10.0)),
            Err(GeometryError::DuplicatePolygon)
        );
    }

    #[test]
    fn test_cover_with_holes_is_too_deep() {
        let mut builder = MultiPolygonBuilder::new();
        builder.insert(rect(10.0, 10.0, 40.0, 40.0)).unwrap();
        builder.insert(rect(20.0, 20.0, 30.0, 30.0)).unwrap();
        assert_eq!(
            builder.insert(rect(0.0, 0.0, 50.0, 50.0)),
            Err(GeometryError::NestingTooDeep)
        );
    }

    #[test]
    fn test_hole_inside_hole_is_too_deep() {
        let mut builder = MultiPolygonBuilder::new();
        builder.insert(rect(0.0, 0.0, 50.0, 50.0)).unwrap();
        builder.insert(rect(10.0, 10.0, 40.0, 40.0)).unwrap();
        assert_eq!(
            builder.insert(rect(20.0, 20.0, 30.0, 30.0)),
            Err(GeometryError::NestingTooDeep)
        );
    }

    #[test]
    fn test_duplicate_hole() {
        let mut builder = MultiPolygonBuilder::new();
        builder.insert(rect(0.0, 0.0, 50.0, 50.0)).unwrap();
        builder.insert(rect(20.0, 20.0, 30.0, 30.0)).unwrap();

        // Same ring, different start vertex and winding
        let again = Polygon::from_coords(&[(30.0, 30.0), (30.0, 20.0), (20.0, 20.0), (20.0, 30.0)]);
        assert_eq!(builder.insert(again), Err(GeometryError::DuplicatePolygon));

        let multi = builder.build();
        assert_eq!(multi.groups()[0].interiors(), &[rect(20.0, 20.0, 30.0, 30.0)]);
    }

    #[test]
    fn test_polygon_around_hole_is_too_deep() {
        let mut builder = MultiPolygonBuilder::new();
        builder.insert(rect(0.0, 0.0, 50.0, 50.0)).unwrap();
        builder.insert(rect(20.0, 20.0, 30.0, 30.0)).unwrap();
        assert_eq!(
            builder.insert(rect(10.0, 10.0, 40.0, 40.0)),
            Err(GeometryError::NestingTooDeep)
        );

        let multi = builder.build();
        assert_eq!(multi.len(), 1);
        assert_eq!(multi.groups()[0].interiors().len(), 1);
    }

    #[test]
    fn test_several_holes() {
        let mut builder = MultiPolygonBuilder::new();
        builder.insert(rect(0.0, 0.0, 50.0, 50.0)).unwrap();
        builder.insert(rect(10.0, 10.0, 20.0, 20.0)).unwrap();
        builder.insert(rect(30.0, 30.0, 40.0, 40.0)).unwrap();
        assert_eq!(builder.len(), 1);

        let multi = builder.build();
        assert_eq!(multi.groups()[0].interiors().len(), 2);
    }

    #[test]
    fn test_first_matching_group_wins() {
        // Two overlapping exteriors both contain the last polygon
        let mut builder = MultiPolygonBuilder::new();
        builder.insert(rect(0.0, 0.0, 10.0, 10.0)).unwrap();
        builder.insert(rect(5.0, 5.0, 15.0, 15.0)).unwrap();
        builder.insert(rect(6.0, 6.0, 9.0, 9.0)).unwrap();

        let multi = builder.build();
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.groups()[0].interiors().len(), 1);
        assert!(multi.groups()[1].interiors().is_empty());
    }

    #[test]
    fn test_point_in_multipolygon_with_hole() {
        let multi = MultiPolygon::from_polygons(vec![
            rect(0.0, 0.0, 20.0, 20.0),
            rect(5.0, 5.0, 15.0, 15.0),
        ])
        .unwrap();

        assert_eq!(multi.relation_to_point(Point2::new(2.0, 2.0)), Relation::Inside);
        assert_eq!(multi.relation_to_point(Point2::new(10.0, 10.0)), Relation::Disjoint);
        assert_eq!(multi.relation_to_point(Point2::new(5.0, 10.0)), Relation::Inside);
        assert_eq!(multi.relation_to_point(Point2::new(30.0, 10.0)), Relation::Disjoint);
    }

    #[test]
    fn test_transform_keeps_groups() {
        let multi = MultiPolygon::from_polygons(vec![
            rect(0.0, 0.0, 20.0, 20.0),
            rect(5.0, 5.0, 15.0, 15.0),
        ])
        .unwrap();
        let moved = multi.transform(&Transform::translate(100.0, 0.0));

        assert_eq!(moved.len(), 1);
        assert_eq!(moved.groups()[0].interiors()[0], rect(105.0, 5.0, 115.0, 15.0));
        assert_eq!(moved.bounding_box().upper_left, Point2::new(100.0, 0.0));
        assert_eq!((&moved).into_iter().count(), 1);
    }
}
