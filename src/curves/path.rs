//! Drawing paths and their conversion to polygons.

use super::{ConicBezier2, CubicBezier2, QuadraticBezier2};
use crate::config::DEFAULT_BEZIER_SEGMENTS;
use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;
use tracing::trace;

/// A single drawing command. Curve commands start at the current point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand<F> {
    /// Starts a new subpath at the point.
    MoveTo(Point2<F>),
    /// Straight line to the point.
    LineTo(Point2<F>),
    /// Quadratic curve with a control point, to the end point.
    QuadTo(Point2<F>, Point2<F>),
    /// Cubic curve with two control points, to the end point.
    CubicTo(Point2<F>, Point2<F>, Point2<F>),
    /// Conic curve with a control point, to the end point, with the control
    /// point's weight.
    ConicTo(Point2<F>, Point2<F>, F),
    /// Closes the current subpath back to its first point.
    Close,
}

/// A sequence of drawing commands.
///
/// # Example
///
/// ```
/// use svgeom::curves::Path;
/// use svgeom::Point2;
///
/// let path = Path::new()
///     .move_to(Point2::new(0.0_f64, 0.0))
///     .line_to(Point2::new(10.0, 0.0))
///     .quad_to(Point2::new(10.0, 10.0), Point2::new(0.0, 10.0))
///     .close();
///
/// let polygons = path.to_polygons(4);
/// assert_eq!(polygons.len(), 1);
/// // start, line end, four curve samples, closing point
/// assert_eq!(polygons[0].len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path<F> {
    commands: Vec<PathCommand<F>>,
}

impl<F: Float> Path<F> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn from_commands(commands: Vec<PathCommand<F>>) -> Self {
        Self { commands }
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand<F>] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Appends a command.
    pub fn push(&mut self, command: PathCommand<F>) {
        self.commands.push(command);
    }

    pub fn move_to(mut self, p: Point2<F>) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point2<F>) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn quad_to(mut self, control: Point2<F>, p: Point2<F>) -> Self {
        self.commands.push(PathCommand::QuadTo(control, p));
        self
    }

    pub fn cubic_to(mut self, c1: Point2<F>, c2: Point2<F>, p: Point2<F>) -> Self {
        self.commands.push(PathCommand::CubicTo(c1, c2, p));
        self
    }

    pub fn conic_to(mut self, control: Point2<F>, p: Point2<F>, w: F) -> Self {
        self.commands.push(PathCommand::ConicTo(control, p, w));
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Flattens the path into polygons, sampling every curve with
    /// `segments` segments.
    ///
    /// A move starts a new point list, emitting the previous one (unclosed)
    /// if it has points. A close appends the first point of the list and
    /// emits it. Whatever is left at the end is emitted unclosed.
    ///
    /// A line or curve drawn into an empty list, before any move or right
    /// after a close, first pushes the current point, so the emitted list
    /// keeps the segment that was drawn instead of a lone endpoint. The
    /// current point is the origin before any move and the first point of
    /// the closed list after a close.
    pub fn to_polygons(&self, segments: usize) -> Vec<Polygon<F>> {
        let mut polygons = Vec::new();
        let mut current: Vec<Point2<F>> = Vec::new();
        let mut cursor = Point2::origin();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    flush(&mut current, &mut polygons);
                    current.push(p);
                    cursor = p;
                }
                PathCommand::LineTo(p) => {
                    start_at(&mut current, cursor);
                    current.push(p);
                    cursor = p;
                }
                PathCommand::QuadTo(c, p) => {
                    start_at(&mut current, cursor);
                    let curve = QuadraticBezier2::new(cursor, c, p);
                    current.extend(curve.sample(segments).into_iter().skip(1));
                    cursor = p;
                }
                PathCommand::CubicTo(c1, c2, p) => {
                    start_at(&mut current, cursor);
                    let curve = CubicBezier2::new(cursor, c1, c2, p);
                    current.extend(curve.sample(segments).into_iter().skip(1));
                    cursor = p;
                }
                PathCommand::ConicTo(c, p, w) => {
                    start_at(&mut current, cursor);
                    let curve = ConicBezier2::new(cursor, c, p, w);
                    current.extend(curve.sample(segments).into_iter().skip(1));
                    cursor = p;
                }
                PathCommand::Close => {
                    if let Some(&first) = current.first() {
                        current.push(first);
                        cursor = first;
                    }
                    flush(&mut current, &mut polygons);
                }
            }
        }
        flush(&mut current, &mut polygons);

        polygons
    }

    /// [`Path::to_polygons`] with [`DEFAULT_BEZIER_SEGMENTS`].
    pub fn to_polygons_default(&self) -> Vec<Polygon<F>> {
        self.to_polygons(DEFAULT_BEZIER_SEGMENTS)
    }
}

impl<F> FromIterator<PathCommand<F>> for Path<F> {
    fn from_iter<I: IntoIterator<Item = PathCommand<F>>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

/// Drawing into an empty list starts from the current point.
fn start_at<F: Float>(current: &mut Vec<Point2<F>>, cursor: Point2<F>) {
    if current.is_empty() {
        current.push(cursor);
    }
}

fn flush<F: Float>(current: &mut Vec<Point2<F>>, polygons: &mut Vec<Polygon<F>>) {
    if current.is_empty() {
        return;
    }
    trace!(points = current.len(), "path subpath flushed");
    polygons.push(Polygon::new(std::mem::take(current)));
}
