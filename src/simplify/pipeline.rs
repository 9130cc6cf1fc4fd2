//! The full polyline optimisation pipeline.

use super::{FastPolyline, LineSet};
use crate::config::OptimizeConfig;
use num_traits::Float;
use tracing::debug;

/// Runs every polyline through the configured optimisation steps.
///
/// Each polyline first loses points equivalent to their predecessor, then
/// its sharp turns (if enabled), then is simplified with RDP. When
/// `merge_lines` is set the results are finally merged through a
/// [`LineSet`], so that shared stretches come out once.
///
/// # Example
///
/// ```
/// use svgeom::config::OptimizeConfig;
/// use svgeom::simplify::{optimize_polylines, FastPolyline};
///
/// let noisy = FastPolyline::from_coords(&[(0.0_f64, 0.0), (0.2, 0.0), (5.0, 0.1), (10.0, 0.0)]).unwrap();
/// let config = OptimizeConfig::default().with_merge_lines(false);
///
/// let optimized = optimize_polylines(vec![noisy], &config);
/// assert_eq!(optimized.len(), 1);
/// assert_eq!(optimized[0].len(), 2);
/// ```
pub fn optimize_polylines<F, I>(polylines: I, config: &OptimizeConfig) -> Vec<FastPolyline<F>>
where
    F: Float,
    I: IntoIterator<Item = FastPolyline<F>>,
{
    let equivalent_sq = F::from(config.equivalent_threshold_sq).unwrap();
    let rdpa_sq = F::from(config.rdpa_threshold_sq).unwrap();

    let mut points_in = 0;
    let simplified: Vec<FastPolyline<F>> = polylines
        .into_iter()
        .map(|polyline| {
            points_in += polyline.len();
            let mut polyline = polyline.remove_equivalent_adjacent_points(equivalent_sq);
            if config.remove_sharp_turns {
                polyline = polyline.remove_sharp_turns();
            }
            polyline.apply_rdpa(rdpa_sq)
        })
        .collect();

    let output = if config.merge_lines {
        let mut lines = LineSet::new();
        for polyline in &simplified {
            lines.add_polyline(polyline);
        }
        lines.optimize()
    } else {
        simplified
    };

    debug!(
        points_in,
        points_out = output.iter().map(FastPolyline::len).sum::<usize>(),
        polylines = output.len(),
        merged = config.merge_lines,
        "polylines optimized"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;

    fn fast(coords: &[(f64, f64)]) -> FastPolyline<f64> {
        FastPolyline::from_coords(coords).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let output = optimize_polylines(Vec::<FastPolyline<f64>>::new(), &OptimizeConfig::default());
        assert!(output.is_empty());
    }

    #[test]
    fn test_steps_without_merging() {
        let config = OptimizeConfig::default().with_merge_lines(false);
        let line = fast(&[
            (0.0, 0.0),
            (0.3, 0.0),
            (10.0, 0.0),
            (20.0, 0.0),
            (10.0, 0.2),
            (30.0, 0.0),
            (40.0, 0.5),
        ]);
        let output = optimize_polylines(vec![line], &config);
        assert_eq!(output, vec![fast(&[(0.0, 0.0), (40.0, 0.5)])]);
    }

    #[test]
    fn test_sharp_turns_kept_when_disabled() {
        let config = OptimizeConfig::default()
            .with_merge_lines(false)
            .with_remove_sharp_turns(false);
        let line = fast(&[(0.0, 0.0), (10.0, 0.0), (0.0, 1.0)]);
        let output = optimize_polylines(vec![line.clone()], &config);
        assert_eq!(output, vec![line]);
    }

    #[test]
    fn test_merging_shares_common_stretch() {
        let config = OptimizeConfig::default();
        let a = fast(&[(0.0, 5.0), (10.0, 0.0), (20.0, 0.0), (30.0, 5.0)]);
        let b = fast(&[(10.0, 10.0), (10.0, 0.0), (20.0, 0.0), (20.0, 10.0)]);
        let output = optimize_polylines(vec![a, b], &config);

        assert_eq!(output.len(), 5);
        let shared = fast(&[(10.0, 0.0), (20.0, 0.0)]);
        assert_eq!(output.iter().filter(|p| **p == shared).count(), 1);
    }

    #[test]
    fn test_output_is_canonical() {
        let config = OptimizeConfig::default();
        let line = fast(&[(50.0, 50.0), (25.0, 20.0), (0.0, 0.0)]);
        for polyline in optimize_polylines(vec![line], &config) {
            assert!(polyline.first() <= polyline.last());
            assert_eq!(polyline.first(), Point2::new(0.0, 0.0));
        }
    }
}
