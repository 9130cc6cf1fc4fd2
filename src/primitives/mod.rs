//! Floating-point geometric primitives and operations.

mod point2;
mod segment2;
mod transform;
mod vec2;

pub use point2::Point2;
pub use segment2::Segment2;
pub use transform::Transform;
pub use vec2::Vec2;
