//! Curve segments: lines, quadratic and cubic beziers
//!
//! Each degree is its own type holding a fixed-size control-point array.
//! `Curve` is the tagged union the tree stores; read-only queries go through
//! the `Segment` trait via `enum_dispatch`, and operations that must return
//! the same degree (lerp, reversal, degree conversion) match on the variant.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::types::{Bounds, Fraction};

/// Polynomial degree of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Degree {
    Line,
    Quadratic,
    Cubic,
}

/// Common read-only behavior of all segment types
#[enum_dispatch]
pub trait Segment {
    /// Control points, first to last
    fn points(&self) -> &[DVec2];

    fn degree(&self) -> Degree;

    /// SVG path command letter drawing this segment from the current point
    fn command(&self) -> char;

    fn start(&self) -> DVec2 {
        self.points()[0]
    }

    fn end(&self) -> DVec2 {
        let points = self.points();
        points[points.len() - 1]
    }

    /// Point at parameter `t` (de Casteljau)
    fn eval(&self, t: f64) -> DVec2 {
        let mut scratch = [DVec2::ZERO; 4];
        let n = self.points().len();
        scratch[..n].copy_from_slice(self.points());
        for level in (1..n).rev() {
            for i in 0..level {
                scratch[i] = scratch[i].lerp(scratch[i + 1], t);
            }
        }
        scratch[0]
    }

    fn is_finite(&self) -> bool {
        self.points().iter().all(|p| p.is_finite())
    }
}

/// Straight line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub points: [DVec2; 2],
}

/// Quadratic bezier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub points: [DVec2; 3],
}

/// Cubic bezier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    pub points: [DVec2; 4],
}

impl Segment for Line {
    fn points(&self) -> &[DVec2] {
        &self.points
    }
    fn degree(&self) -> Degree {
        Degree::Line
    }
    fn command(&self) -> char {
        'L'
    }
}

impl Segment for Quad {
    fn points(&self) -> &[DVec2] {
        &self.points
    }
    fn degree(&self) -> Degree {
        Degree::Quadratic
    }
    fn command(&self) -> char {
        'Q'
    }
}

impl Segment for Cubic {
    fn points(&self) -> &[DVec2] {
        &self.points
    }
    fn degree(&self) -> Degree {
        Degree::Cubic
    }
    fn command(&self) -> char {
        'C'
    }
}

/// A segment of any supported degree
#[enum_dispatch(Segment)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Line,
    Quad,
    Cubic,
}

impl Curve {
    pub fn line(p0: DVec2, p1: DVec2) -> Curve {
        Curve::Line(Line { points: [p0, p1] })
    }

    pub fn quad(p0: DVec2, p1: DVec2, p2: DVec2) -> Curve {
        Curve::Quad(Quad { points: [p0, p1, p2] })
    }

    pub fn cubic(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Curve {
        Curve::Cubic(Cubic {
            points: [p0, p1, p2, p3],
        })
    }

    /// Build a curve from 2, 3 or 4 control points. Other counts yield `None`.
    pub fn from_points(points: &[DVec2]) -> Option<Curve> {
        match *points {
            [p0, p1] => Some(Curve::line(p0, p1)),
            [p0, p1, p2] => Some(Curve::quad(p0, p1, p2)),
            [p0, p1, p2, p3] => Some(Curve::cubic(p0, p1, p2, p3)),
            _ => None,
        }
    }

    /// Same geometry walked the other way.
    pub fn reversed(&self) -> Curve {
        match *self {
            Curve::Line(Line { points: [a, b] }) => Curve::line(b, a),
            Curve::Quad(Quad { points: [a, b, c] }) => Curve::quad(c, b, a),
            Curve::Cubic(Cubic {
                points: [a, b, c, d],
            }) => Curve::cubic(d, c, b, a),
        }
    }

    /// Replace the first and last control points.
    pub fn with_endpoints(&self, start: DVec2, end: DVec2) -> Curve {
        match *self {
            Curve::Line(_) => Curve::line(start, end),
            Curve::Quad(Quad { points: [_, b, _] }) => Curve::quad(start, b, end),
            Curve::Cubic(Cubic {
                points: [_, b, c, _],
            }) => Curve::cubic(start, b, c, end),
        }
    }

    /// Convert to `target` degree.
    ///
    /// Raising the degree is exact. Lowering keeps the endpoints; a cubic
    /// lowered to a quadratic uses the control point `(3(p1 + p2) - p0 - p3) / 4`.
    pub fn to_degree(&self, target: Degree) -> Curve {
        match target {
            Degree::Line => Curve::Line(self.to_line()),
            Degree::Quadratic => Curve::Quad(self.to_quad()),
            Degree::Cubic => Curve::Cubic(self.to_cubic()),
        }
    }

    fn to_line(&self) -> Line {
        match *self {
            Curve::Line(line) => line,
            Curve::Quad(Quad { points: [a, _, c] }) => Line { points: [a, c] },
            Curve::Cubic(Cubic {
                points: [a, _, _, d],
            }) => Line { points: [a, d] },
        }
    }

    fn to_quad(&self) -> Quad {
        match *self {
            Curve::Line(Line { points: [a, b] }) => Quad {
                points: [a, a.lerp(b, 0.5), b],
            },
            Curve::Quad(quad) => quad,
            Curve::Cubic(Cubic {
                points: [a, b, c, d],
            }) => Quad {
                points: [a, ((b + c) * 3.0 - a - d) * 0.25, d],
            },
        }
    }

    fn to_cubic(&self) -> Cubic {
        match *self {
            Curve::Line(Line { points: [a, b] }) => Cubic {
                points: [a, a.lerp(b, 1.0 / 3.0), a.lerp(b, 2.0 / 3.0), b],
            },
            Curve::Quad(Quad { points: [a, b, c] }) => Cubic {
                points: [a, a + (b - a) * (2.0 / 3.0), c + (b - c) * (2.0 / 3.0), c],
            },
            Curve::Cubic(cubic) => cubic,
        }
    }

    /// Pointwise interpolation toward `target` at fraction `f`.
    ///
    /// The result keeps `self`'s degree; `target` is converted first when
    /// the degrees differ. `f = 0` returns `self` and `f = 1` returns the
    /// converted target, both exactly.
    pub fn lerp(&self, target: &Curve, f: Fraction) -> Curve {
        let t = f.raw();
        match *self {
            Curve::Line(a) => Curve::Line(Line {
                points: lerp_points(a.points, target.to_line().points, t),
            }),
            Curve::Quad(a) => Curve::Quad(Quad {
                points: lerp_points(a.points, target.to_quad().points, t),
            }),
            Curve::Cubic(a) => Curve::Cubic(Cubic {
                points: lerp_points(a.points, target.to_cubic().points, t),
            }),
        }
    }

    /// Tight bounds of the curve itself: endpoints plus interior extrema.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new();
        bounds.expand_point(self.start());
        bounds.expand_point(self.end());
        for axis in 0..2 {
            let coords: Vec<f64> = self.points().iter().map(|p| p.to_array()[axis]).collect();
            for t in extrema_params(&coords) {
                bounds.expand_point(self.eval(t));
            }
        }
        bounds
    }
}

// Parameters in (0, 1) where the derivative of one coordinate vanishes.
fn extrema_params(c: &[f64]) -> Vec<f64> {
    let mut roots = Vec::new();
    match *c {
        [p0, p1, p2] => {
            let denom = p0 - 2.0 * p1 + p2;
            if denom != 0.0 {
                roots.push((p0 - p1) / denom);
            }
        }
        [p0, p1, p2, p3] => {
            let a = 3.0 * (p1 - p2) + p3 - p0;
            let b = 2.0 * (p0 - 2.0 * p1 + p2);
            let k = p1 - p0;
            if a.abs() < f64::EPSILON {
                if b != 0.0 {
                    roots.push(-k / b);
                }
            } else {
                let disc = b * b - 4.0 * a * k;
                if disc >= 0.0 {
                    let sq = disc.sqrt();
                    roots.push((-b + sq) / (2.0 * a));
                    roots.push((-b - sq) / (2.0 * a));
                }
            }
        }
        _ => {}
    }
    roots.retain(|t| *t > 0.0 && *t < 1.0);
    roots
}

// Weighted form so both t = 0 and t = 1 are exact.
fn lerp_points<const N: usize>(from: [DVec2; N], to: [DVec2; N], t: f64) -> [DVec2; N] {
    std::array::from_fn(|i| from[i] * (1.0 - t) + to[i] * t)
}
