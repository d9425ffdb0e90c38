//! Thinning of one edge side.
//!
//! A boundary curve flanking an axis edge is pulled toward the axis piece it
//! flanks. The target ("anchor") is the axis piece oriented the way the side
//! is walked, with its endpoints on the two circle centers and its degree
//! matched to the side. Every control point moves on a straight line from
//! the boundary to its anchor, so the morph is linear in the fraction.
//!
//! Contact points lie on their circle, so moving a contact point a fraction
//! `f` toward the center lands on the circle shrunk by `1 - f`. A
//! zero-radius circle already has its contact point at the center and the
//! point stays put; nothing here divides, so no radius produces NaN.

use crate::curve::{Curve, Segment};
use crate::tree::EdgeCurves;
use crate::types::{Circle, Fraction};

/// Which side of an edge is being thinned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Walked from the parent circle to the child circle
    Outbound,
    /// Walked from the child circle back to the parent circle
    Inbound,
}

impl Side {
    /// The boundary curve on this side of an edge, if present
    pub fn boundary(self, curves: &EdgeCurves) -> Option<Curve> {
        match self {
            Side::Outbound => curves.outbound,
            Side::Inbound => curves.inbound,
        }
    }
}

/// The axis curve a side converges to, in the side's walking direction.
pub fn anchor_curve(
    side: Side,
    curves: &EdgeCurves,
    parent: &Circle,
    child: &Circle,
    degree_of: &Curve,
) -> Curve {
    let axis = match curves.axis {
        Some(axis) => axis.with_endpoints(parent.center, child.center),
        None => Curve::line(parent.center, child.center),
    };
    let axis = match side {
        Side::Outbound => axis,
        Side::Inbound => axis.reversed(),
    };
    axis.to_degree(degree_of.degree())
}

/// Thin one side of an edge to fraction `f`.
///
/// Returns `None` when the edge has no curve on that side.
pub fn thin_side(
    side: Side,
    curves: &EdgeCurves,
    parent: &Circle,
    child: &Circle,
    f: Fraction,
) -> Option<Curve> {
    let boundary = side.boundary(curves)?;
    let anchor = anchor_curve(side, curves, parent, child, &boundary);
    Some(boundary.lerp(&anchor, f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Degree;
    use glam::{DVec2, dvec2};

    const EPSILON: f64 = 1e-12;

    fn assert_near(actual: DVec2, expected: DVec2) {
        assert!(
            (actual - expected).length() < EPSILON,
            "point mismatch: {actual} != {expected}"
        );
    }

    fn circles() -> (Circle, Circle) {
        (
            Circle::try_new(dvec2(0.0, 0.0), 2.0).unwrap(),
            Circle::try_new(dvec2(4.0, 0.0), 1.0).unwrap(),
        )
    }

    fn sides() -> EdgeCurves {
        EdgeCurves::sides(
            Curve::line(dvec2(0.0, -2.0), dvec2(4.0, -1.0)),
            Curve::cubic(dvec2(4.0, 1.0), dvec2(3.0, 1.5), dvec2(1.0, 2.0), dvec2(0.0, 2.0)),
        )
    }

    #[test]
    fn fraction_zero_is_identity() {
        let (p, c) = circles();
        let curves = sides();
        assert_eq!(
            thin_side(Side::Outbound, &curves, &p, &c, Fraction::OUTLINE),
            curves.outbound
        );
        assert_eq!(
            thin_side(Side::Inbound, &curves, &p, &c, Fraction::OUTLINE),
            curves.inbound
        );
    }

    #[test]
    fn fraction_one_lands_on_chord() {
        let (p, c) = circles();
        let curves = sides();
        let out = thin_side(Side::Outbound, &curves, &p, &c, Fraction::AXIS).unwrap();
        assert_eq!(out.points(), &[p.center, c.center]);

        let back = thin_side(Side::Inbound, &curves, &p, &c, Fraction::AXIS).unwrap();
        assert_eq!(back.degree(), Degree::Cubic);
        assert_eq!(back.start(), c.center);
        assert_eq!(back.end(), p.center);
        for q in back.points() {
            assert!(q.y.abs() < EPSILON, "{q} is off the axis");
        }
    }

    #[test]
    fn endpoints_shrink_with_their_circles() {
        let (p, c) = circles();
        let curves = sides();
        let half = Fraction::clamped(0.5);
        let out = thin_side(Side::Outbound, &curves, &p, &c, half).unwrap();
        // Contact points end up on circles of half the radius
        assert_near(out.start(), dvec2(0.0, -1.0));
        assert_near(out.end(), dvec2(4.0, -0.5));
        let back = thin_side(Side::Inbound, &curves, &p, &c, half).unwrap();
        assert_near(back.start(), dvec2(4.0, 0.5));
        assert_near(back.end(), dvec2(0.0, 1.0));
    }

    #[test]
    fn curved_axis_is_followed() {
        let (p, c) = circles();
        let axis = Curve::quad(dvec2(0.0, 0.0), dvec2(2.0, 1.0), dvec2(4.0, 0.0));
        let curves = EdgeCurves::sides(
            Curve::quad(dvec2(0.0, -2.0), dvec2(2.0, -1.0), dvec2(4.0, -1.0)),
            Curve::quad(dvec2(4.0, 1.0), dvec2(2.0, 3.0), dvec2(0.0, 2.0)),
        )
        .with_axis(axis);

        let out = thin_side(Side::Outbound, &curves, &p, &c, Fraction::AXIS).unwrap();
        assert_eq!(out, axis);
        let back = thin_side(Side::Inbound, &curves, &p, &c, Fraction::AXIS).unwrap();
        assert_eq!(back, axis.reversed());
    }

    #[test]
    fn axis_endpoints_snap_to_centers() {
        let (p, c) = circles();
        let curves = EdgeCurves {
            outbound: Some(Curve::line(dvec2(0.0, -2.0), dvec2(4.0, -1.0))),
            inbound: None,
            axis: Some(Curve::line(dvec2(0.5, 0.5), dvec2(3.5, 0.5))),
        };
        let anchor = anchor_curve(Side::Outbound, &curves, &p, &c, &curves.outbound.unwrap());
        assert_eq!(anchor.points(), &[p.center, c.center]);
    }

    #[test]
    fn missing_side_yields_none() {
        let (p, c) = circles();
        let curves = EdgeCurves {
            outbound: Some(Curve::line(dvec2(0.0, -2.0), dvec2(4.0, -1.0))),
            ..EdgeCurves::default()
        };
        assert!(thin_side(Side::Inbound, &curves, &p, &c, Fraction::AXIS).is_none());
    }

    #[test]
    fn zero_radius_circles_stay_finite() {
        let p = Circle::try_new(dvec2(1.0, 1.0), 0.0).unwrap();
        let c = Circle::try_new(dvec2(1.0, 1.0), 0.0).unwrap();
        let curves = EdgeCurves::sides(
            Curve::quad(dvec2(1.0, 1.0), dvec2(1.0, 1.0), dvec2(1.0, 1.0)),
            Curve::line(dvec2(1.0, 1.0), dvec2(1.0, 1.0)),
        );
        for i in 0..=20 {
            let f = Fraction::clamped(i as f64 / 20.0);
            for side in [Side::Outbound, Side::Inbound] {
                let curve = thin_side(side, &curves, &p, &c, f).unwrap();
                assert!(curve.is_finite());
                for q in curve.points() {
                    assert_eq!(*q, dvec2(1.0, 1.0));
                }
            }
        }
    }

    #[test]
    fn motion_is_linear_in_fraction() {
        let (p, c) = circles();
        let curves = sides();
        let at = |f: f64| {
            thin_side(Side::Inbound, &curves, &p, &c, Fraction::clamped(f)).unwrap()
        };
        let a = at(0.2);
        let b = at(0.6);
        let mid = at(0.4);
        for i in 0..4 {
            assert_near(mid.points()[i], (a.points()[i] + b.points()[i]) * 0.5);
        }
    }
}
