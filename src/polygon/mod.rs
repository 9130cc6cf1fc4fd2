//! Polygons, their spatial relations and polygons with holes.
//!
//! This module provides:
//! - Point and polygon relation tests
//! - Grouping of polygons into exteriors with holes
//!
//! # Example
//!
//! ```
//! use svgeom::polygon::{MultiPolygonBuilder, Polygon, Relation};
//! use svgeom::Point2;
//!
//! let outer = Polygon::from_coords(&[(0.0_f64, 0.0), (20.0, 0.0), (20.0, 20.0), (0.0, 20.0)]);
//! let hole = Polygon::from_coords(&[(5.0_f64, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0)]);
//! assert_eq!(hole.relation_to(&outer), Relation::Inside);
//!
//! let mut builder = MultiPolygonBuilder::new();
//! builder.insert(outer).unwrap();
//! builder.insert(hole).unwrap();
//! let multi = builder.build();
//!
//! assert_eq!(multi.relation_to_point(Point2::new(1.0, 1.0)), Relation::Inside);
//! assert_eq!(multi.relation_to_point(Point2::new(10.0, 10.0)), Relation::Disjoint);
//! ```

mod core;
mod multi;
mod relation;

pub use core::Polygon;
pub use multi::{EnclosedPolygonGroup, MultiPolygon, MultiPolygonBuilder};
pub use relation::Relation;
