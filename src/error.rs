//! Error types for svgeom operations.

use thiserror::Error;

/// Errors raised when a geometric invariant is violated at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A line was built from two identical endpoints.
    #[error("zero-length line")]
    ZeroLengthLine,

    /// Not enough points to build the requested shape.
    #[error("expected at least {required} points, got {actual}")]
    TooFewPoints {
        /// Minimum number of points.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// A polygon equal to an existing exterior was added to a multi-polygon.
    #[error("duplicate polygon in multi-polygon")]
    DuplicatePolygon,

    /// A polygon would have nested more than one level deep.
    #[error("more than 1 level of containment is not supported")]
    NestingTooDeep,

    /// The longest-common-substring scratch matrix cannot hold the inputs.
    #[error("scratch matrix is {rows}x{cols} but {required_rows}x{required_cols} is needed")]
    ScratchTooSmall {
        /// Rows needed.
        required_rows: usize,
        /// Columns needed.
        required_cols: usize,
        /// Rows available.
        rows: usize,
        /// Columns available.
        cols: usize,
    },
}

/// Errors raised while reading serialized geometry (point lists, transform
/// lists, path data).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A token could not be parsed as a number.
    #[error("invalid number '{token}' at position {position}")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// Byte offset in the input.
        position: usize,
    },

    /// A token appeared where it is not allowed.
    #[error("unexpected '{token}' at position {position}")]
    UnexpectedToken {
        /// The offending token.
        token: String,
        /// Byte offset in the input.
        position: usize,
    },

    /// A transform function name is not recognised.
    #[error("unknown transform '{name}' at position {position}")]
    UnknownTransform {
        /// The function name.
        name: String,
        /// Byte offset in the input.
        position: usize,
    },

    /// A transform function got a number of arguments it does not accept.
    #[error("transform '{name}' does not take {count} arguments (position {position})")]
    WrongArgumentCount {
        /// The function name.
        name: String,
        /// Number of arguments found.
        count: usize,
        /// Byte offset in the input.
        position: usize,
    },

    /// Input ended in the middle of a construct.
    #[error("unexpected end of input")]
    UnexpectedEnd,
}
