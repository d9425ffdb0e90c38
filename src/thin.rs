//! Thinning pipeline: transform forest + fraction → path data.
//!
//! Each tree of the forest is walked once. Going down an edge emits its
//! thinned outbound side, coming back up emits its thinned inbound side, so
//! the curves come out in loop order. Trees whose root is terminating
//! contribute nothing. Consecutive boundary sides must join; a gap is a
//! [`TreeError::BrokenLoop`] at every fraction.

use glam::DVec2;

use crate::curve::{Curve, Segment};
use crate::defaults::JOIN_TOLERANCE;
use crate::errors::TreeError;
use crate::interpolate::{Side, thin_side};
use crate::path::{PathBuilder, loops_to_path};
use crate::traverse::{Step, walk};
use crate::tree::{Edge, NodeId, TransformTree};
use crate::types::{Circle, Fraction};

/// Thinned curves of one tree, in loop order.
pub fn thin_loop(tree: &TransformTree, f: Fraction) -> Result<Vec<Curve>, TreeError> {
    let root = tree.root()?;
    let mut acc = LoopAccumulator::new(f);

    walk(tree, root, |step| match step {
        Step::Node { node, .. } => {
            if node.is_terminating() {
                crate::log::debug!(radius = node.circle.radius, "terminating node");
            }
            Ok(())
        }
        Step::Descend { parent, index, edge } => {
            acc.push(tree, Side::Outbound, parent, index, edge)
        }
        Step::Ascend { parent, index, edge } => {
            acc.push(tree, Side::Inbound, parent, index, edge)
        }
    })?;

    crate::log::debug!(
        curves = acc.curves.len(),
        fraction = f.raw(),
        "thinned loop"
    );
    Ok(acc.curves)
}

// Joins are checked on the input sides, so the verdict does not depend on `f`.
struct LoopAccumulator {
    f: Fraction,
    curves: Vec<Curve>,
    end: Option<DVec2>,
}

impl LoopAccumulator {
    fn new(f: Fraction) -> Self {
        Self {
            f,
            curves: Vec::new(),
            end: None,
        }
    }

    fn push(
        &mut self,
        tree: &TransformTree,
        side: Side,
        parent: NodeId,
        index: usize,
        edge: &Edge,
    ) -> Result<(), TreeError> {
        let Some(boundary) = side.boundary(&edge.curves) else {
            return Ok(());
        };
        if let Some(end) = self.end {
            let gap = end.distance(boundary.start());
            if gap > JOIN_TOLERANCE {
                return Err(TreeError::BrokenLoop {
                    node: parent.index(),
                    edge: index,
                    gap,
                });
            }
        }
        self.end = Some(boundary.end());

        let (from, to) = circles(tree, parent, index, edge.target)?;
        self.curves
            .extend(thin_side(side, &edge.curves, from, to, self.f));
        Ok(())
    }
}

fn circles(
    tree: &TransformTree,
    parent: NodeId,
    index: usize,
    child: NodeId,
) -> Result<(&Circle, &Circle), TreeError> {
    let from = tree.node(parent).ok_or(TreeError::MissingNode {
        node: parent.index(),
        len: tree.len(),
    })?;
    let to = tree.node(child).ok_or(TreeError::DanglingEdge {
        node: parent.index(),
        edge: index,
        target: child.index(),
    })?;
    Ok((&from.circle, &to.circle))
}

/// Thinned curves of every tree, one loop per tree.
pub fn thin_loops(forest: &[TransformTree], f: Fraction) -> Result<Vec<Vec<Curve>>, TreeError> {
    forest.iter().map(|tree| thin_loop(tree, f)).collect()
}

/// Path data of the forest thinned to `fraction` (clamped into `[0, 1]`).
pub fn thinned_path(forest: &[TransformTree], fraction: f64) -> Result<String, TreeError> {
    thinned_path_with(forest, Fraction::clamped(fraction), crate::defaults::SIG_FIGS)
}

/// Path data of the forest thinned to `f`, coordinates at `sig_figs` significant figures.
pub fn thinned_path_with(
    forest: &[TransformTree],
    f: Fraction,
    sig_figs: u32,
) -> Result<String, TreeError> {
    let loops = thin_loops(forest, f)?;
    Ok(loops_to_path(&loops, sig_figs))
}

/// Axis pieces of one tree in walk order: the explicit axis curve of each
/// edge, or the chord between the two centers.
pub fn axis_curves(tree: &TransformTree) -> Result<Vec<Curve>, TreeError> {
    let root = tree.root()?;
    let mut curves = Vec::new();
    walk(tree, root, |step| {
        if let Step::Descend { parent, index, edge } = step {
            if !edge.has_curve() {
                return Ok(());
            }
            let (from, to) = circles(tree, parent, index, edge.target)?;
            let axis = match edge.curves.axis {
                Some(axis) => axis.with_endpoints(from.center, to.center),
                None => Curve::line(from.center, to.center),
            };
            curves.push(axis);
        }
        Ok(())
    })?;
    Ok(curves)
}

/// Path data drawing every axis piece of the forest as its own open subpath.
pub fn axis_path(forest: &[TransformTree], sig_figs: u32) -> Result<String, TreeError> {
    let mut builder = PathBuilder::with_precision(sig_figs);
    for tree in forest {
        for curve in axis_curves(tree)? {
            builder.move_to(curve.start());
            builder.push_curve(&curve);
        }
    }
    Ok(builder.build())
}
