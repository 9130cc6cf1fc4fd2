//! Merging polylines through their shared segments.
//!
//! A [`LineSet`] breaks polylines into undirected unit segments, so that
//! segments shared by several polylines are stored once, then rebuilds the
//! longest chains it can without passing through a branch point or an
//! original polyline endpoint.

use super::FastPolyline;
use crate::error::GeometryError;
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use tracing::debug;

/// An undirected segment, stored with its endpoints in point order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<F> {
    min: Point2<F>,
    max: Point2<F>,
}

impl<F: Float> Eq for Line<F> {}

impl<F: Float> Line<F> {
    /// Creates a line between two points, in either order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthLine`] if both points are equal.
    pub fn new(a: Point2<F>, b: Point2<F>) -> Result<Self, GeometryError> {
        if a == b {
            return Err(GeometryError::ZeroLengthLine);
        }
        let (min, max) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> Point2<F> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point2<F> {
        self.max
    }

    /// Returns the endpoint opposite to `p`, if `p` is an endpoint.
    pub fn other_end(&self, p: Point2<F>) -> Option<Point2<F>> {
        if p == self.min {
            Some(self.max)
        } else if p == self.max {
            Some(self.min)
        } else {
            None
        }
    }
}

/// Working set of undirected lines indexed by both endpoints.
///
/// # Example
///
/// ```
/// use svgeom::simplify::{FastPolyline, LineSet};
///
/// // Two routes sharing the stretch from (1, 0) to (3, 0)
/// let a = FastPolyline::from_coords(&[(0.0_f64, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]).unwrap();
/// let b = FastPolyline::from_coords(&[(1.0_f64, 1.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (3.0, 1.0)]).unwrap();
///
/// let mut lines = LineSet::new();
/// lines.add_polyline(&a);
/// lines.add_polyline(&b);
/// assert_eq!(lines.len(), 6);
///
/// let merged = lines.optimize();
/// // The shared stretch comes out once, between the two branch points
/// assert_eq!(merged.len(), 5);
/// assert!(lines.is_empty());
/// assert_eq!(lines.added_endpoints().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineSet<F> {
    by_min: BTreeMap<Point2<F>, BTreeSet<Point2<F>>>,
    by_max: BTreeMap<Point2<F>, BTreeSet<Point2<F>>>,
    lines: usize,
    original_endpoints: BTreeSet<Point2<F>>,
    added_endpoints: BTreeSet<Point2<F>>,
    passthrough: Vec<FastPolyline<F>>,
}

#[derive(Clone, Copy)]
enum End {
    Front,
    Back,
}

impl<F: Float> LineSet<F> {
    pub fn new() -> Self {
        Self {
            by_min: BTreeMap::new(),
            by_max: BTreeMap::new(),
            lines: 0,
            original_endpoints: BTreeSet::new(),
            added_endpoints: BTreeSet::new(),
            passthrough: Vec::new(),
        }
    }

    /// Number of distinct lines not yet consumed by [`LineSet::optimize`].
    #[inline]
    pub fn len(&self) -> usize {
        self.lines
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }

    /// Endpoints of the polylines added so far.
    pub fn original_endpoints(&self) -> &BTreeSet<Point2<F>> {
        &self.original_endpoints
    }

    /// Points where merging stopped that were not original endpoints.
    pub fn added_endpoints(&self) -> &BTreeSet<Point2<F>> {
        &self.added_endpoints
    }

    /// Polylines kept whole because they visit some point twice.
    pub fn passthrough(&self) -> &[FastPolyline<F>] {
        &self.passthrough
    }

    /// Breaks a polyline into lines and records its endpoints.
    ///
    /// Polylines that visit a point more than once are not broken up; they
    /// are returned unchanged by [`LineSet::optimize`].
    pub fn add_polyline(&mut self, polyline: &FastPolyline<F>) {
        if polyline.has_duplicated_points() {
            self.passthrough.push(polyline.clone());
            return;
        }

        self.original_endpoints.insert(polyline.first());
        self.original_endpoints.insert(polyline.last());
        for pair in polyline.points().windows(2) {
            if let Ok(line) = Line::new(pair[0], pair[1]) {
                self.add_line(line);
            }
        }
    }

    /// Adds a single line. Returns `false` if it was already present.
    pub fn add_line(&mut self, line: Line<F>) -> bool {
        let inserted = self.by_min.entry(line.min).or_default().insert(line.max);
        if inserted {
            self.by_max.entry(line.max).or_default().insert(line.min);
            self.lines += 1;
        }
        inserted
    }

    /// Returns `true` if the line is still in the set.
    pub fn contains(&self, line: &Line<F>) -> bool {
        self.by_min
            .get(&line.min)
            .is_some_and(|ends| ends.contains(&line.max))
    }

    /// Number of remaining lines touching `p`.
    pub fn degree(&self, p: Point2<F>) -> usize {
        self.by_min.get(&p).map_or(0, BTreeSet::len) + self.by_max.get(&p).map_or(0, BTreeSet::len)
    }

    /// Consumes every line, rebuilding maximal polylines.
    ///
    /// Each output polyline grows from one line in both directions and stops
    /// at a branch point (more than two lines meet), at an original endpoint,
    /// or where no line is left. Stops that are not original endpoints are
    /// recorded in [`LineSet::added_endpoints`]. Passthrough polylines are
    /// returned first, unchanged.
    pub fn optimize(&mut self) -> Vec<FastPolyline<F>> {
        let degrees = self.degrees();
        let input_lines = self.lines;
        let mut output = std::mem::take(&mut self.passthrough);

        while let Some(line) = self.pop_first() {
            let mut chain = VecDeque::from([line.min, line.max]);
            self.extend_chain(&mut chain, End::Back, &degrees);
            self.extend_chain(&mut chain, End::Front, &degrees);
            output.push(FastPolyline::canonical(chain.into_iter().collect()));
        }

        debug!(
            lines = input_lines,
            polylines = output.len(),
            added_endpoints = self.added_endpoints.len(),
            "line set merged"
        );
        output
    }

    fn degrees(&self) -> BTreeMap<Point2<F>, usize> {
        let mut degrees = BTreeMap::new();
        for (&min, ends) in &self.by_min {
            *degrees.entry(min).or_insert(0) += ends.len();
            for &max in ends {
                *degrees.entry(max).or_insert(0) += 1;
            }
        }
        degrees
    }

    fn extend_chain(
        &mut self,
        chain: &mut VecDeque<Point2<F>>,
        end: End,
        degrees: &BTreeMap<Point2<F>, usize>,
    ) {
        loop {
            let tip = match end {
                End::Front => chain.front(),
                End::Back => chain.back(),
            };
            let Some(&tip) = tip else {
                return;
            };

            let is_original = self.original_endpoints.contains(&tip);
            let is_branch = degrees.get(&tip).copied().unwrap_or(0) > 2;
            let next = if is_original || is_branch {
                None
            } else {
                self.take_adjacent(tip)
            };

            match next {
                Some(next) => match end {
                    End::Front => chain.push_front(next),
                    End::Back => chain.push_back(next),
                },
                None => {
                    if !is_original {
                        self.added_endpoints.insert(tip);
                    }
                    return;
                }
            }
        }
    }

    /// Removes and returns the first line in point order.
    fn pop_first(&mut self) -> Option<Line<F>> {
        let (&min, ends) = self.by_min.first_key_value()?;
        let &max = ends.first()?;
        self.remove_line(min, max);
        Some(Line { min, max })
    }

    /// Removes some remaining line touching `p`, returning its other end.
    fn take_adjacent(&mut self, p: Point2<F>) -> Option<Point2<F>> {
        if let Some(&max) = self.by_min.get(&p).and_then(BTreeSet::first) {
            self.remove_line(p, max);
            return Some(max);
        }
        if let Some(&min) = self.by_max.get(&p).and_then(BTreeSet::first) {
            self.remove_line(min, p);
            return Some(min);
        }
        None
    }

    fn remove_line(&mut self, min: Point2<F>, max: Point2<F>) {
        let mut removed = false;
        if let Some(ends) = self.by_min.get_mut(&min) {
            removed = ends.remove(&max);
            if ends.is_empty() {
                self.by_min.remove(&min);
            }
        }
        if let Some(ends) = self.by_max.get_mut(&max) {
            ends.remove(&min);
            if ends.is_empty() {
                self.by_max.remove(&max);
            }
        }
        if removed {
            self.lines -= 1;
        }
    }
}
