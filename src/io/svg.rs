//! SVG attribute parsing and export.
//!
//! Reads and writes the three SVG attribute grammars the geometry core
//! exchanges with a renderer:
//!
//! - `points` on `<polyline>` / `<polygon>`: `"x,y x,y ..."`
//! - `transform`: a list of `matrix`, `translate`, `scale`, `rotate`,
//!   `skewX` and `skewY` functions
//! - `d` on `<path>`: path data
//!
//! # Supported path commands
//!
//! - `M`/`m` - Move to (absolute/relative)
//! - `L`/`l` - Line to
//! - `H`/`h` - Horizontal line to
//! - `V`/`v` - Vertical line to
//! - `Q`/`q` - Quadratic Bézier curve
//! - `C`/`c` - Cubic Bézier curve
//! - `Z`/`z` - Close path
//!
//! # Example
//!
//! ```
//! use svgeom::io::{parse_path_data, polygon_to_path_data};
//!
//! let path = parse_path_data::<f64>("M 0 0 L 10 0 L 10 10 Z").unwrap();
//! let polygons = path.to_polygons_default();
//! assert_eq!(polygons.len(), 1);
//!
//! let d = polygon_to_path_data(polygons[0].vertices());
//! assert_eq!(d, "M0,0 L10,0 L10,10 L0,0 Z");
//! ```

use crate::curves::{Path, PathCommand};
use crate::error::FormatError;
use crate::polygon::MultiPolygon;
use crate::primitives::{Point2, Transform};
use num_traits::Float;
use std::fmt::Display;
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

/// Writes points in SVG `points` attribute form, `"x,y x,y"`.
///
/// # Example
///
/// ```
/// use svgeom::io::points_to_string;
/// use svgeom::Point2;
///
/// let points = [Point2::new(0.0_f64, 0.5), Point2::new(10.0, -2.0)];
/// assert_eq!(points_to_string(&points), "0,0.5 10,-2");
/// ```
pub fn points_to_string<F: Float + Display>(points: &[Point2<F>]) -> String {
    let mut result = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push_str(&format!("{},{}", p.x(), p.y()));
    }
    result
}

/// Parses an SVG `points` attribute.
///
/// Coordinates may be separated by commas, whitespace or both.
///
/// # Errors
///
/// Returns [`FormatError`] on a malformed number, a stray character, or an
/// odd number of coordinates.
pub fn parse_points<F: Float + FromStr>(s: &str) -> Result<Vec<Point2<F>>, FormatError> {
    let mut scanner = Scanner::new(s);
    let mut points = Vec::new();
    while !scanner.is_done() {
        let (x, y) = scanner.pair()?;
        points.push(Point2::new(x, y));
    }
    Ok(points)
}

/// Writes an open polyline as path data, `"M0,0 L10,0"`.
///
/// Returns an empty string for no points.
pub fn polyline_to_path_data<F: Float + Display>(points: &[Point2<F>]) -> String {
    let mut result = String::new();
    write_subpath(&mut result, points, false);
    result
}

/// Writes a polygon ring as closed path data, `"M0,0 L10,0 L10,10 Z"`.
///
/// Returns an empty string for no points.
pub fn polygon_to_path_data<F: Float + Display>(points: &[Point2<F>]) -> String {
    let mut result = String::new();
    write_subpath(&mut result, points, true);
    result
}

/// Writes every exterior and hole of a multi-polygon as closed subpaths.
///
/// Holes follow their exterior, so that an even-odd fill renders them as
/// holes.
pub fn multipolygon_to_path_data<F: Float + Display>(multi: &MultiPolygon<F>) -> String {
    let mut result = String::new();
    for group in multi {
        let rings = std::iter::once(group.exterior()).chain(group.interiors());
        for ring in rings {
            write_subpath(&mut result, ring.vertices(), true);
        }
    }
    result
}

fn write_subpath<F: Float + Display>(out: &mut String, points: &[Point2<F>], closed: bool) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(&format!("M{},{}", first.x(), first.y()));
    for p in rest {
        out.push_str(&format!(" L{},{}", p.x(), p.y()));
    }
    if closed {
        out.push_str(" Z");
    }
}

/// Parses an SVG `transform` attribute into a single transform.
///
/// Functions are composed the way SVG applies them: the rightmost function
/// acts on the points first. An empty string is the identity.
///
/// # Errors
///
/// Returns [`FormatError`] for unknown function names, argument counts a
/// function does not accept, and malformed syntax.
///
/// # Example
///
/// ```
/// use svgeom::io::parse_transform;
/// use svgeom::Point2;
///
/// let transform = parse_transform::<f64>("translate(10, 0) scale(2)").unwrap();
/// assert_eq!(transform.apply_point(Point2::new(1.0, 1.0)), Point2::new(12.0, 2.0));
/// ```
pub fn parse_transform<F: Float + FromStr>(s: &str) -> Result<Transform<F>, FormatError> {
    let mut scanner = Scanner::new(s);
    let mut acc = Transform::identity();

    while !scanner.is_done() {
        let position = scanner.position();
        let name = scanner.name();
        if name.is_empty() {
            return Err(scanner.unexpected());
        }

        scanner.expect('(')?;
        let mut args: Vec<F> = Vec::new();
        while scanner.has_number() {
            args.push(scanner.number()?);
        }
        scanner.expect(')')?;

        let next = transform_function(name, &args, position)?;
        acc = acc.compose(&next);
    }

    Ok(acc)
}

fn transform_function<F: Float>(
    name: &str,
    args: &[F],
    position: usize,
) -> Result<Transform<F>, FormatError> {
    let transform = match (name, args) {
        ("matrix", &[a, b, c, d, e, f]) => Transform::from_svg_matrix(a, b, c, d, e, f),
        ("translate", &[tx]) => Transform::translate(tx, F::zero()),
        ("translate", &[tx, ty]) => Transform::translate(tx, ty),
        ("scale", &[s]) => Transform::scale(s),
        ("scale", &[sx, sy]) => Transform::scale_xy(sx, sy),
        ("rotate", &[angle]) => Transform::rotation_degrees(angle),
        ("rotate", &[angle, cx, cy]) => {
            Transform::rotation_around(angle.to_radians(), Point2::new(cx, cy))
        }
        ("skewX", &[angle]) => Transform::skew_x(angle),
        ("skewY", &[angle]) => Transform::skew_y(angle),
        ("matrix" | "translate" | "scale" | "rotate" | "skewX" | "skewY", _) => {
            return Err(FormatError::WrongArgumentCount {
                name: name.to_string(),
                count: args.len(),
                position,
            })
        }
        _ => {
            return Err(FormatError::UnknownTransform {
                name: name.to_string(),
                position,
            })
        }
    };
    Ok(transform)
}

/// Writes a transform as an SVG `matrix(a b c d e f)` function.
pub fn transform_to_string<F: Float + Display>(transform: &Transform<F>) -> String {
    let [a, b, c, d, e, f] = transform.to_svg_matrix();
    format!("matrix({} {} {} {} {} {})", a, b, c, d, e, f)
}

/// Parses SVG path data into a [`Path`] of absolute commands.
///
/// Relative commands are resolved against the current point, `H` and `V`
/// become line commands, and coordinate pairs following a move are
/// implicit line commands.
///
/// # Errors
///
/// Returns [`FormatError`] for unsupported commands, coordinates before the
/// first command and malformed numbers.
///
/// # Example
///
/// ```
/// use svgeom::io::parse_path_data;
/// use svgeom::curves::PathCommand;
/// use svgeom::Point2;
///
/// let path = parse_path_data::<f64>("m 1 1 h 4 v 4 z").unwrap();
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.commands()[2], PathCommand::LineTo(Point2::new(5.0, 5.0)));
/// ```
pub fn parse_path_data<F: Float + FromStr>(d: &str) -> Result<Path<F>, FormatError> {
    let mut scanner = Scanner::new(d);
    let mut path = Path::new();
    let mut current = Point2::origin();
    let mut subpath_start = current;

    while !scanner.is_done() {
        let Some((position, letter)) = scanner.peek() else {
            break;
        };
        if !letter.is_ascii_alphabetic() {
            return Err(scanner.unexpected());
        }
        scanner.bump();

        let relative = letter.is_ascii_lowercase();
        let resolve = |(x, y): (F, F), base: Point2<F>| {
            if relative {
                Point2::new(base.x() + x, base.y() + y)
            } else {
                Point2::new(x, y)
            }
        };

        match letter.to_ascii_uppercase() {
            'M' => {
                let p = resolve(scanner.pair()?, current);
                path.push(PathCommand::MoveTo(p));
                current = p;
                subpath_start = p;
                // Subsequent pairs are implicit LineTo
                while scanner.has_number() {
                    let p = resolve(scanner.pair()?, current);
                    path.push(PathCommand::LineTo(p));
                    current = p;
                }
            }
            'L' => loop {
                let p = resolve(scanner.pair()?, current);
                path.push(PathCommand::LineTo(p));
                current = p;
                if !scanner.has_number() {
                    break;
                }
            },
            'H' => loop {
                let x: F = scanner.number()?;
                let x = if relative { current.x() + x } else { x };
                let p = Point2::new(x, current.y());
                path.push(PathCommand::LineTo(p));
                current = p;
                if !scanner.has_number() {
                    break;
                }
            },
            'V' => loop {
                let y: F = scanner.number()?;
                let y = if relative { current.y() + y } else { y };
                let p = Point2::new(current.x(), y);
                path.push(PathCommand::LineTo(p));
                current = p;
                if !scanner.has_number() {
                    break;
                }
            },
            'Q' => loop {
                let control = resolve(scanner.pair()?, current);
                let p = resolve(scanner.pair()?, current);
                path.push(PathCommand::QuadTo(control, p));
                current = p;
                if !scanner.has_number() {
                    break;
                }
            },
            'C' => loop {
                let c1 = resolve(scanner.pair()?, current);
                let c2 = resolve(scanner.pair()?, current);
                let p = resolve(scanner.pair()?, current);
                path.push(PathCommand::CubicTo(c1, c2, p));
                current = p;
                if !scanner.has_number() {
                    break;
                }
            },
            'Z' => {
                path.push(PathCommand::Close);
                current = subpath_start;
            }
            _ => {
                return Err(FormatError::UnexpectedToken {
                    token: letter.to_string(),
                    position,
                })
            }
        }
    }

    Ok(path)
}

/// Character scanner shared by the attribute parsers.
struct Scanner<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) {
        self.chars.next();
    }

    fn position(&mut self) -> usize {
        self.chars.peek().map_or(self.input.len(), |&(i, _)| i)
    }

    fn skip_whitespace_and_commas(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() || c == ',' {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn is_done(&mut self) -> bool {
        self.skip_whitespace_and_commas();
        self.chars.peek().is_none()
    }

    fn has_number(&mut self) -> bool {
        self.skip_whitespace_and_commas();
        matches!(self.chars.peek(), Some(&(_, c)) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.')
    }

    /// Error for whatever comes next.
    fn unexpected(&mut self) -> FormatError {
        match self.peek() {
            Some((position, c)) => FormatError::UnexpectedToken {
                token: c.to_string(),
                position,
            },
            None => FormatError::UnexpectedEnd,
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), FormatError> {
        self.skip_whitespace_and_commas();
        match self.peek() {
            Some((_, c)) if c == expected => {
                self.bump();
                Ok(())
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Consumes a run of ASCII letters.
    fn name(&mut self) -> &'a str {
        let start = self.position();
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_ascii_alphabetic() {
                self.chars.next();
            } else {
                break;
            }
        }
        let end = self.position();
        let input = self.input;
        &input[start..end]
    }

    fn number<F: Float + FromStr>(&mut self) -> Result<F, FormatError> {
        self.skip_whitespace_and_commas();

        let start = self.position();
        let mut end = start;

        // Optional sign
        if let Some(&(_, c)) = self.chars.peek() {
            if c == '-' || c == '+' {
                self.chars.next();
            }
        }

        // Integer part
        while let Some(&(i, c)) = self.chars.peek() {
            if c.is_ascii_digit() {
                end = i + 1;
                self.chars.next();
            } else {
                break;
            }
        }

        // Decimal part
        if let Some(&(_, '.')) = self.chars.peek() {
            self.chars.next();
            while let Some(&(i, c)) = self.chars.peek() {
                if c.is_ascii_digit() {
                    end = i + 1;
                    self.chars.next();
                } else {
                    break;
                }
            }
        }

        // Exponent part
        if let Some(&(_, c)) = self.chars.peek() {
            if c == 'e' || c == 'E' {
                self.chars.next();
                if let Some(&(_, c)) = self.chars.peek() {
                    if c == '-' || c == '+' {
                        self.chars.next();
                    }
                }
                while let Some(&(i, c)) = self.chars.peek() {
                    if c.is_ascii_digit() {
                        end = i + 1;
                        self.chars.next();
                    } else {
                        break;
                    }
                }
            }
        }

        if end == start {
            let consumed = self.position();
            if consumed == start {
                return Err(self.unexpected());
            }
            return Err(FormatError::InvalidNumber {
                token: self.input[start..consumed].to_string(),
                position: start,
            });
        }

        let token = &self.input[start..end];
        token.parse().map_err(|_| FormatError::InvalidNumber {
            token: token.to_string(),
            position: start,
        })
    }

    fn pair<F: Float + FromStr>(&mut self) -> Result<(F, F), FormatError> {
        let x = self.number()?;
        let y = self.number()?;
        Ok((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon;
    use approx::assert_relative_eq;

    #[test]
    fn test_points_round_trip() {
        let points: Vec<Point2<f64>> = parse_points("0,0 10.5,0 10.5,-3").unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2], Point2::new(10.5, -3.0));
        assert_eq!(points_to_string(&points), "0,0 10.5,0 10.5,-3");
    }

    #[test]
    fn test_parse_points_loose_separators() {
        let points: Vec<Point2<f64>> = parse_points("  1 2,3 , 4\n5,6 ").unwrap();
        assert_eq!(
            points,
            vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0), Point2::new(5.0, 6.0)]
        );
        assert!(parse_points::<f64>("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_points_errors() {
        assert_eq!(parse_points::<f64>("1,2 3"), Err(FormatError::UnexpectedEnd));
        assert_eq!(
            parse_points::<f64>("1,2 x,4"),
            Err(FormatError::UnexpectedToken {
                token: "x".to_string(),
                position: 4
            })
        );
        assert_eq!(
            parse_points::<f64>("1,- 2"),
            Err(FormatError::InvalidNumber {
                token: "-".to_string(),
                position: 2
            })
        );
    }

    #[test]
    fn test_path_data_writers() {
        let points = [Point2::new(0.0_f64, 0.0), Point2::new(10.0, 0.0), Point2::new(10.0, 10.0)];
        assert_eq!(polyline_to_path_data(&points), "M0,0 L10,0 L10,10");
        assert_eq!(polygon_to_path_data(&points), "M0,0 L10,0 L10,10 Z");
        assert_eq!(polygon_to_path_data::<f64>(&[]), "");
    }

    #[test]
    fn test_writers_emit_rounded_coordinates() {
        let points = [Point2::new(-0.000_01_f64, 1.234_56), Point2::new(2.0 / 3.0, -7.0)];
        assert_eq!(points_to_string(&points), "0,1.2346 0.6667,-7");
        assert_eq!(polyline_to_path_data(&points), "M0,1.2346 L0.6667,-7");
        assert_eq!(polygon_to_path_data(&points[..1]), "M0,1.2346 Z");
    }

    #[test]
    fn test_multipolygon_path_data() {
        let outer = Polygon::from_coords(&[(0.0_f64, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let hole = Polygon::from_coords(&[(2.0_f64, 2.0), (4.0, 2.0), (4.0, 4.0)]);
        let multi = MultiPolygon::from_polygons(vec![outer, hole]).unwrap();
        assert_eq!(
            multipolygon_to_path_data(&multi),
            "M0,0 L10,0 L10,10 L0,10 Z M2,2 L4,2 L4,4 Z"
        );
    }

    #[test]
    fn test_parse_transform_functions() {
        let p = Point2::new(1.0_f64, 2.0);

        let t: Transform<f64> = parse_transform("translate(5)").unwrap();
        assert_eq!(t.apply_point(p), Point2::new(6.0, 2.0));

        let t: Transform<f64> = parse_transform("scale(2 3)").unwrap();
        assert_eq!(t.apply_point(p), Point2::new(2.0, 6.0));

        let t: Transform<f64> = parse_transform("rotate(90)").unwrap();
        assert_eq!(t.apply_point(p), Point2::new(-2.0, 1.0));

        let t: Transform<f64> = parse_transform("rotate(180, 1, 1)").unwrap();
        assert_eq!(t.apply_point(p), Point2::new(1.0, 0.0));

        let t: Transform<f64> = parse_transform("skewX(45)").unwrap();
        assert_eq!(t.apply_point(p), Point2::new(3.0, 2.0));

        let t: Transform<f64> = parse_transform("skewY(45)").unwrap();
        assert_eq!(t.apply_point(p), Point2::new(1.0, 3.0));

        let t: Transform<f64> = parse_transform("matrix(1 0 0 1 7 8)").unwrap();
        assert_eq!(t.apply_point(p), Point2::new(8.0, 10.0));
    }

    #[test]
    fn test_parse_transform_order() {
        // Scale applies first, then the translation
        let t: Transform<f64> = parse_transform("translate(10,0) scale(2)").unwrap();
        assert_eq!(t.apply_point(Point2::new(1.0, 1.0)), Point2::new(12.0, 2.0));

        let t: Transform<f64> = parse_transform("scale(2) translate(10,0)").unwrap();
        assert_eq!(t.apply_point(Point2::new(1.0, 1.0)), Point2::new(22.0, 2.0));
    }

    #[test]
    fn test_parse_transform_empty_is_identity() {
        let t: Transform<f64> = parse_transform("   ").unwrap();
        assert!(t.is_identity(1e-12));
    }

    #[test]
    fn test_parse_transform_errors() {
        assert_eq!(
            parse_transform::<f64>("translate(1) spin(3)"),
            Err(FormatError::UnknownTransform {
                name: "spin".to_string(),
                position: 13
            })
        );
        assert_eq!(
            parse_transform::<f64>("rotate(1 2)"),
            Err(FormatError::WrongArgumentCount {
                name: "rotate".to_string(),
                count: 2,
                position: 0
            })
        );
        assert_eq!(parse_transform::<f64>("scale(2"), Err(FormatError::UnexpectedEnd));
        assert_eq!(
            parse_transform::<f64>("(2)"),
            Err(FormatError::UnexpectedToken {
                token: "(".to_string(),
                position: 0
            })
        );
    }

    #[test]
    fn test_transform_to_string() {
        let t: Transform<f64> = Transform::translate(3.0, 4.0).then_scale(2.0, 2.0);
        assert_eq!(transform_to_string(&t), "matrix(2 0 0 2 6 8)");

        let parsed: Transform<f64> = parse_transform(&transform_to_string(&t)).unwrap();
        assert_relative_eq!(parsed.tx, t.tx);
        assert_relative_eq!(parsed.ty, t.ty);
        assert_relative_eq!(parsed.a, t.a);
    }

    #[test]
    fn test_parse_path_absolute() {
        let path = parse_path_data::<f64>("M 0 0 L 10 0 L 10 10 Z").unwrap();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point2::new(0.0, 0.0)),
                PathCommand::LineTo(Point2::new(10.0, 0.0)),
                PathCommand::LineTo(Point2::new(10.0, 10.0)),
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_parse_path_implicit_lineto() {
        let path = parse_path_data::<f64>("M0,0 10,0 10,10").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.commands()[1], PathCommand::LineTo(Point2::new(10.0, 0.0)));

        let path = parse_path_data::<f64>("m1,1 2,0 0,2").unwrap();
        assert_eq!(path.commands()[2], PathCommand::LineTo(Point2::new(3.0, 3.0)));
    }

    #[test]
    fn test_parse_path_relative_after_close() {
        let path = parse_path_data::<f64>("M10,10 l5,0 z l0,5").unwrap();
        assert_eq!(path.commands()[3], PathCommand::LineTo(Point2::new(10.0, 15.0)));
    }

    #[test]
    fn test_parse_path_curves() {
        let path = parse_path_data::<f64>("M0,0 Q5,10 10,0 c0,5 5,5 5,0").unwrap();
        assert_eq!(
            path.commands()[1],
            PathCommand::QuadTo(Point2::new(5.0, 10.0), Point2::new(10.0, 0.0))
        );
        assert_eq!(
            path.commands()[2],
            PathCommand::CubicTo(
                Point2::new(10.0, 5.0),
                Point2::new(15.0, 5.0),
                Point2::new(15.0, 0.0)
            )
        );
    }

    #[test]
    fn test_parse_path_compact_numbers() {
        let path = parse_path_data::<f64>("M-1.5-2L.5.5l1e1,0").unwrap();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point2::new(-1.5, -2.0)),
                PathCommand::LineTo(Point2::new(0.5, 0.5)),
                PathCommand::LineTo(Point2::new(10.5, 0.5)),
            ]
        );
    }

    #[test]
    fn test_parse_path_errors() {
        assert_eq!(
            parse_path_data::<f64>("M0,0 A1,1 0 0 1 5,5"),
            Err(FormatError::UnexpectedToken {
                token: "A".to_string(),
                position: 5
            })
        );
        assert_eq!(
            parse_path_data::<f64>("10,0"),
            Err(FormatError::UnexpectedToken {
                token: "1".to_string(),
                position: 0
            })
        );
        assert_eq!(parse_path_data::<f64>("M0"), Err(FormatError::UnexpectedEnd));
    }

    #[test]
    fn test_f32_support() {
        let points: Vec<Point2<f32>> = parse_points("1.5,2").unwrap();
        assert_eq!(points[0], Point2::new(1.5_f32, 2.0));
    }
}
