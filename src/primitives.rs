//! Primitive outlines for demos and tests
//!
//! Polygon vertices sit at `center + r·(sin θ, cos θ)` with `θ = 2πi/n`, so
//! vertex 0 is straight "up" in path coordinates and the rest follow
//! clockwise on screen.

use std::f64::consts::PI;

use glam::DVec2;

use crate::curve::Curve;
use crate::errors::ShapeError;
use crate::path::PathBuilder;
use crate::tree::{EdgeCurves, TransformTree};
use crate::types::{Circle, check_finite, check_non_negative};

/// Vertices of a regular `n`-gon.
pub fn polygon_vertices(n: usize, center: DVec2, r: f64) -> Vec<DVec2> {
    (0..n)
        .map(|i| {
            let theta = i as f64 * 2.0 * PI / n as f64;
            let (sin, cos) = theta.sin_cos();
            center + r * DVec2::new(sin, cos)
        })
        .collect()
}

/// Closed path of a regular `n`-gon: `M v0 L v1 … Z`. Empty for `n == 0`.
pub fn polygon_path(n: usize, center: DVec2, r: f64) -> String {
    let mut builder = PathBuilder::new();
    let vertices = polygon_vertices(n, center, r);
    let Some((first, rest)) = vertices.split_first() else {
        return String::new();
    };
    builder.move_to(*first);
    for v in rest {
        builder.line_to(*v);
    }
    builder.close();
    builder.build()
}

/// Open path of a single line.
pub fn line_path(ps: [DVec2; 2]) -> String {
    segment_path(&Curve::line(ps[0], ps[1]))
}

/// Open path of a single quadratic bezier.
pub fn quad_path(ps: [DVec2; 3]) -> String {
    segment_path(&Curve::quad(ps[0], ps[1], ps[2]))
}

/// Open path of a single cubic bezier.
pub fn cubic_path(ps: [DVec2; 4]) -> String {
    segment_path(&Curve::cubic(ps[0], ps[1], ps[2], ps[3]))
}

fn segment_path(curve: &Curve) -> String {
    let mut builder = PathBuilder::new();
    builder.push_curve(curve);
    builder.build()
}

/// Medial-axis transform of a regular `n`-gon with the vertices of
/// [`polygon_vertices`].
///
/// The root is the incircle, radius `r·cos(π/n)`, touching every side at
/// its midpoint. Each vertex is a zero-radius child; the edge to vertex `i`
/// carries the half-side arriving at the vertex (outbound) and the half-side
/// leaving it (inbound). The axis pieces are the chords from the center to
/// the vertices, so no explicit axis curve is stored.
pub fn regular_polygon_transform(
    n: usize,
    center: DVec2,
    r: f64,
) -> Result<TransformTree, ShapeError> {
    if n < 3 {
        return Err(ShapeError::TooFewSides { sides: n });
    }
    check_non_negative(r).map_err(|reason| ShapeError::InvalidRadius { value: r, reason })?;
    check_finite(center.x).map_err(|_| ShapeError::InvalidCenter)?;
    check_finite(center.y).map_err(|_| ShapeError::InvalidCenter)?;

    let vertices = polygon_vertices(n, center, r);
    let touch: Vec<DVec2> = (0..n)
        .map(|i| (vertices[i] + vertices[(i + 1) % n]) * 0.5)
        .collect();

    let mut tree = TransformTree::new();
    let incircle = Circle::try_new(center, r * (PI / n as f64).cos())
        .map_err(|reason| ShapeError::InvalidRadius { value: r, reason })?;
    let root = tree.add_node(incircle);

    for (i, &vertex) in vertices.iter().enumerate() {
        let corner = tree.add_node(Circle {
            center: vertex,
            radius: 0.0,
        });
        let arriving = Curve::line(touch[(i + n - 1) % n], vertex);
        let leaving = Curve::line(vertex, touch[i]);
        tree.connect(root, corner, EdgeCurves::sides(arriving, leaving))?;
    }

    crate::log::debug!(sides = n, radius = r, "built regular polygon transform");
    Ok(tree)
}
