//! Curve discretization.
//!
//! Bézier curves are sampled at evenly spaced parameters, and a [`Path`] of
//! drawing commands flattens into polygons.

mod bezier;
mod path;

pub use bezier::{ConicBezier2, CubicBezier2, QuadraticBezier2};
pub use path::{Path, PathCommand};
