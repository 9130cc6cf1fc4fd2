//! Default constants and configuration for the geometry core.
//!
//! Everything here is plain static data: nothing is mutated at runtime.

/// Number of decimal places every [`Point2`](crate::Point2) coordinate is
/// rounded to.
pub const POINT_DECIMALS: i32 = 4;

/// Distance tolerance used when testing whether a point lies on an edge.
///
/// Rounding to [`POINT_DECIMALS`] shifts a point by at most half a step on
/// each axis (about `7.1e-5`), so a point computed on an edge stays within
/// this distance of it. It is kept below one full grid step.
pub const EDGE_TOLERANCE: f64 = 7.5e-5;

/// A turn sharper than this many degrees (in absolute value) is considered
/// a reversal of the path.
pub const SHARP_TURN_DEGREES: f64 = 160.0;

/// Default number of segments a Bezier curve is split into when a path is
/// converted to polygons.
pub const DEFAULT_BEZIER_SEGMENTS: usize = 10;

/// Settings for [`optimize_polylines`](crate::simplify::optimize_polylines).
///
/// # Example
///
/// ```
/// use svgeom::config::OptimizeConfig;
///
/// let config = OptimizeConfig::default()
///     .with_rdpa_threshold_sq(4.0)
///     .with_merge_lines(false);
/// assert_eq!(config.rdpa_threshold_sq, 4.0);
/// assert!(config.remove_sharp_turns);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizeConfig {
    /// Squared distance under which adjacent points are considered equivalent.
    pub equivalent_threshold_sq: f64,
    /// Squared distance tolerance for Ramer-Douglas-Peucker simplification.
    pub rdpa_threshold_sq: f64,
    /// Whether near-reversals of the path are removed.
    pub remove_sharp_turns: bool,
    /// Whether shared sub-paths are merged through a line set.
    pub merge_lines: bool,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            equivalent_threshold_sq: 1.0,
            rdpa_threshold_sq: 1.0,
            remove_sharp_turns: true,
            merge_lines: true,
        }
    }
}

impl OptimizeConfig {
    /// Sets the squared equivalence distance.
    pub fn with_equivalent_threshold_sq(mut self, threshold_sq: f64) -> Self {
        self.equivalent_threshold_sq = threshold_sq;
        self
    }

    /// Sets the squared RDPA tolerance.
    pub fn with_rdpa_threshold_sq(mut self, threshold_sq: f64) -> Self {
        self.rdpa_threshold_sq = threshold_sq;
        self
    }

    /// Enables or disables sharp-turn removal.
    pub fn with_remove_sharp_turns(mut self, enabled: bool) -> Self {
        self.remove_sharp_turns = enabled;
        self
    }

    /// Enables or disables line merging.
    pub fn with_merge_lines(mut self, enabled: bool) -> Self {
        self.merge_lines = enabled;
        self
    }
}
