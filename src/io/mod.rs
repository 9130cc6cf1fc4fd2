//! Reading and writing SVG attribute strings.
//!
//! Provides parsing and serialization for point lists, transform lists and
//! path data.

mod svg;

pub use svg::{
    multipolygon_to_path_data, parse_path_data, parse_points, parse_transform,
    points_to_string, polygon_to_path_data, polyline_to_path_data, transform_to_string,
};
