//! svgeom - 2D geometry core for SVG maps
//!
//! Points snapped to a fixed precision, polygon relations, convex hulls,
//! multi-polygons with holes, Bezier flattening and the polyline
//! optimisation suite used to merge and simplify transit routes.
//!
//! ```
//! use svgeom::polygon::{MultiPolygon, Polygon, Relation};
//! use svgeom::Point2;
//!
//! let block = Polygon::from_coords(&[(0.0_f64, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
//! let courtyard = Polygon::from_coords(&[(3.0_f64, 3.0), (6.0, 3.0), (6.0, 6.0), (3.0, 6.0)]);
//! assert_eq!(courtyard.relation_to(&block), Relation::Inside);
//!
//! let multi = MultiPolygon::from_polygons(vec![block, courtyard]).unwrap();
//! assert_eq!(multi.relation_to_point(Point2::new(4.0, 4.0)), Relation::Disjoint);
//! assert_eq!(multi.relation_to_point(Point2::new(1.0, 1.0)), Relation::Inside);
//! ```

pub mod bounds;
pub mod config;
pub mod curves;
pub mod error;
pub mod hull;
pub mod io;
pub mod polygon;
pub mod polyline;
pub mod primitives;
pub mod simplify;
pub mod tolerance;

pub use bounds::BoundingBox;
pub use error::{FormatError, GeometryError};
pub use hull::ConvexHull;
pub use polygon::{MultiPolygon, Polygon, Relation};
pub use polyline::Polyline;
pub use primitives::{Point2, Segment2, Transform, Vec2};
pub use tolerance::{orient2d, point_on_segment, Orientation};
