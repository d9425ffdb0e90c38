//! Transform tree model
//!
//! A medial-axis or scale-axis transform of one outline loop, stored as an
//! arena of circle nodes. Links are indices into the arena, so the tree owns
//! every node exactly once and parent back-references cannot form cycles.
//!
//! Each edge stands for one piece of the axis between two circles. The
//! outline runs along both sides of that piece: `outbound` is the boundary
//! met walking from the parent circle to the child, `inbound` the boundary
//! met walking back. A depth-first walk that emits `outbound` on the way down
//! and `inbound` on the way up therefore traces the loop in order.

use glam::DVec2;

use crate::curve::{Curve, Segment};
use crate::errors::TreeError;
use crate::types::{Bounds, Circle, check_finite};

/// Index of a node in its tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Curves carried by an edge
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeCurves {
    /// Boundary from the parent's contact point to the child's
    pub outbound: Option<Curve>,
    /// Boundary from the child's contact point back to the parent's
    pub inbound: Option<Curve>,
    /// Axis from the parent center to the child center; the chord when absent
    pub axis: Option<Curve>,
}

impl EdgeCurves {
    pub fn sides(outbound: Curve, inbound: Curve) -> Self {
        EdgeCurves {
            outbound: Some(outbound),
            inbound: Some(inbound),
            axis: None,
        }
    }

    pub fn with_axis(mut self, axis: Curve) -> Self {
        self.axis = Some(axis);
        self
    }
}

/// Directed edge from a node to one of its children
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub curves: EdgeCurves,
}

impl Edge {
    /// Whether this edge contributes any boundary curve
    pub fn has_curve(&self) -> bool {
        self.curves.outbound.is_some() || self.curves.inbound.is_some()
    }
}

/// A node of the transform: one maximal inscribed circle
#[derive(Debug, Clone, PartialEq)]
pub struct CircleNode {
    pub circle: Circle,
    /// Bookkeeping only; traversal never follows it
    pub parent: Option<NodeId>,
    /// Outgoing edges in creation order
    pub edges: Vec<Edge>,
}

impl CircleNode {
    /// A node with no curve-bearing outgoing edge ends the walk.
    pub fn is_terminating(&self) -> bool {
        !self.edges.iter().any(Edge::has_curve)
    }
}

/// One loop's transform: an arena of nodes plus the root
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformTree {
    nodes: Vec<CircleNode>,
    root: Option<NodeId>,
}

impl TransformTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node; the first node added becomes the root.
    pub fn add_node(&mut self, circle: Circle) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(CircleNode {
            circle,
            parent: None,
            edges: Vec::new(),
        });
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Add an edge from `parent` to `child`.
    ///
    /// The child's parent back-reference is set by its first incoming edge.
    pub fn connect(
        &mut self,
        parent: NodeId,
        child: NodeId,
        curves: EdgeCurves,
    ) -> Result<(), TreeError> {
        let len = self.nodes.len();
        let Some(from) = self.nodes.get(parent.0) else {
            return Err(TreeError::MissingNode {
                node: parent.0,
                len,
            });
        };
        let edge = from.edges.len();
        if child.0 >= len {
            return Err(TreeError::DanglingEdge {
                node: parent.0,
                edge,
                target: child.0,
            });
        }
        for curve in [curves.outbound, curves.inbound, curves.axis].iter().flatten() {
            if !curve.is_finite() {
                return Err(TreeError::NonFinitePoint {
                    node: parent.0,
                    edge,
                });
            }
        }

        self.nodes[parent.0].edges.push(Edge {
            target: child,
            curves,
        });
        let child_node = &mut self.nodes[child.0];
        if child_node.parent.is_none() && child != parent {
            child_node.parent = Some(parent);
        }
        Ok(())
    }

    /// Choose a different root.
    pub fn set_root(&mut self, root: NodeId) -> Result<(), TreeError> {
        if root.0 >= self.nodes.len() {
            return Err(TreeError::RootOutOfRange {
                root: root.0,
                len: self.nodes.len(),
            });
        }
        self.root = Some(root);
        Ok(())
    }

    pub fn root(&self) -> Result<NodeId, TreeError> {
        self.root.ok_or(TreeError::MissingRoot)
    }

    pub fn node(&self, id: NodeId) -> Option<&CircleNode> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> &[CircleNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of edges in the arena
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Largest circle radius in the tree (0 for an empty tree)
    pub fn max_radius(&self) -> f64 {
        self.nodes
            .iter()
            .map(|n| n.circle.radius)
            .fold(0.0, f64::max)
    }

    /// Same topology and curves, every radius multiplied by `factor`.
    ///
    /// This is the radius-only scale-axis derivation: the SAT of a MAT with
    /// factor `s` keeps the MAT's structure.
    pub fn scaled_radii(&self, factor: f64) -> TransformTree {
        let mut scaled = self.clone();
        for node in &mut scaled.nodes {
            node.circle = node.circle.scaled(factor);
        }
        scaled
    }

    /// Bounds of every boundary curve
    pub fn outline_bounds(&self) -> Bounds {
        let mut bounds = Bounds::new();
        for edge in self.nodes.iter().flat_map(|n| &n.edges) {
            for curve in [edge.curves.outbound, edge.curves.inbound].iter().flatten() {
                bounds.expand_bounds(&curve.bounds());
            }
        }
        bounds
    }

    /// Build a tree from raw records handed over by an axis builder.
    ///
    /// Node `i` of the result is `records[i]`. Every record is checked:
    /// circle data, edge targets, control-point counts and finiteness.
    pub fn from_records(records: &[NodeRecord], root: usize) -> Result<Self, TreeError> {
        if records.is_empty() {
            return Err(TreeError::MissingRoot);
        }
        let mut tree = TransformTree::new();
        for (i, record) in records.iter().enumerate() {
            let center = DVec2::from_array(record.center);
            let circle = Circle::try_new(center, record.radius)
                .map_err(|reason| TreeError::InvalidCircle { node: i, reason })?;
            tree.add_node(circle);
        }
        tree.set_root(NodeId(root))?;

        for (i, record) in records.iter().enumerate() {
            for (e, edge) in record.edges.iter().enumerate() {
                if edge.target >= records.len() {
                    return Err(TreeError::DanglingEdge {
                        node: i,
                        edge: e,
                        target: edge.target,
                    });
                }
                let curves = EdgeCurves {
                    outbound: curve_from_record(edge.outbound.as_deref(), i, e)?,
                    inbound: curve_from_record(edge.inbound.as_deref(), i, e)?,
                    axis: curve_from_record(edge.axis.as_deref(), i, e)?,
                };
                tree.connect(NodeId(i), NodeId(edge.target), curves)?;
            }
        }
        crate::log::debug!(
            nodes = tree.len(),
            edges = tree.edge_count(),
            "imported transform tree"
        );
        Ok(tree)
    }
}

fn curve_from_record(
    points: Option<&[[f64; 2]]>,
    node: usize,
    edge: usize,
) -> Result<Option<Curve>, TreeError> {
    let Some(points) = points else {
        return Ok(None);
    };
    for p in points {
        for &v in p {
            check_finite(v).map_err(|_| TreeError::NonFinitePoint { node, edge })?;
        }
    }
    let points: Vec<DVec2> = points.iter().copied().map(DVec2::from_array).collect();
    Curve::from_points(&points)
        .map(Some)
        .ok_or(TreeError::UnsupportedDegree {
            node,
            edge,
            count: points.len(),
        })
}

/// Plain node data as produced by an axis builder
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeRecord {
    pub center: [f64; 2],
    pub radius: f64,
    pub edges: Vec<EdgeRecord>,
}

/// Plain edge data; curves are control-point lists of length 2, 3 or 4
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeRecord {
    pub target: usize,
    pub outbound: Option<Vec<[f64; 2]>>,
    pub inbound: Option<Vec<[f64; 2]>>,
    pub axis: Option<Vec<[f64; 2]>>,
}

/// Largest circle radius across a forest
pub fn max_radius(forest: &[TransformTree]) -> f64 {
    forest
        .iter()
        .map(TransformTree::max_radius)
        .fold(0.0, f64::max)
}

/// Radius-scaled copy of every tree in a forest
pub fn to_scale_axis(forest: &[TransformTree], factor: f64) -> Vec<TransformTree> {
    forest.iter().map(|t| t.scaled_radii(factor)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::try_new(dvec2(x, y), r).unwrap()
    }

    fn line_record(a: [f64; 2], b: [f64; 2]) -> Option<Vec<[f64; 2]>> {
        Some(vec![a, b])
    }

    #[test]
    fn first_node_is_root() {
        let mut tree = TransformTree::new();
        assert_eq!(tree.root(), Err(TreeError::MissingRoot));
        let a = tree.add_node(circle(0.0, 0.0, 1.0));
        let _b = tree.add_node(circle(1.0, 0.0, 0.0));
        assert_eq!(tree.root(), Ok(a));
    }

    #[test]
    fn connect_sets_parent_and_edge_order() {
        let mut tree = TransformTree::new();
        let root = tree.add_node(circle(0.0, 0.0, 1.0));
        let a = tree.add_node(circle(1.0, 0.0, 0.0));
        let b = tree.add_node(circle(-1.0, 0.0, 0.0));
        tree.connect(root, a, EdgeCurves::default()).unwrap();
        tree.connect(root, b, EdgeCurves::default()).unwrap();

        let root_node = tree.node(root).unwrap();
        assert_eq!(root_node.edges[0].target, a);
        assert_eq!(root_node.edges[1].target, b);
        assert_eq!(tree.node(a).unwrap().parent, Some(root));
        assert_eq!(tree.node(root).unwrap().parent, None);
        assert_eq!(tree.edge_count(), 2);
    }

    #[test]
    fn connect_rejects_missing_nodes() {
        let mut tree = TransformTree::new();
        let root = tree.add_node(circle(0.0, 0.0, 1.0));
        let err = tree
            .connect(root, NodeId(7), EdgeCurves::default())
            .unwrap_err();
        assert_eq!(
            err,
            TreeError::DanglingEdge {
                node: 0,
                edge: 0,
                target: 7
            }
        );
    }

    #[test]
    fn connect_reports_missing_parent() {
        let mut tree = TransformTree::new();
        let root = tree.add_node(circle(0.0, 0.0, 1.0));
        let err = tree
            .connect(NodeId(4), root, EdgeCurves::default())
            .unwrap_err();
        assert_eq!(err, TreeError::MissingNode { node: 4, len: 1 });
        assert!(tree.node(root).unwrap().edges.is_empty());
    }

    #[test]
    fn connect_rejects_non_finite_curve() {
        let mut tree = TransformTree::new();
        let root = tree.add_node(circle(0.0, 0.0, 1.0));
        let leaf = tree.add_node(circle(1.0, 0.0, 0.0));
        let bad = Curve::line(DVec2::ZERO, dvec2(f64::NAN, 1.0));
        let err = tree
            .connect(root, leaf, EdgeCurves::sides(bad, bad))
            .unwrap_err();
        assert_eq!(err, TreeError::NonFinitePoint { node: 0, edge: 0 });
    }

    #[test]
    fn terminating_nodes() {
        let mut tree = TransformTree::new();
        let root = tree.add_node(circle(0.0, 0.0, 1.0));
        let leaf = tree.add_node(circle(1.0, 0.0, 0.0));
        tree.connect(root, leaf, EdgeCurves::default()).unwrap();
        // An edge without curves does not make its source non-terminating
        assert!(tree.node(root).unwrap().is_terminating());
        assert!(tree.node(leaf).unwrap().is_terminating());

        let side = Curve::line(dvec2(0.0, 1.0), dvec2(1.0, 0.0));
        tree.connect(
            root,
            leaf,
            EdgeCurves {
                outbound: Some(side),
                ..EdgeCurves::default()
            },
        )
        .unwrap();
        assert!(!tree.node(root).unwrap().is_terminating());
    }

    #[test]
    fn max_radius_and_scaling() {
        let mut tree = TransformTree::new();
        let root = tree.add_node(circle(0.0, 0.0, 2.0));
        let leaf = tree.add_node(circle(3.0, 0.0, 0.5));
        tree.connect(root, leaf, EdgeCurves::default()).unwrap();
        assert_eq!(tree.max_radius(), 2.0);

        let sat = tree.scaled_radii(2.5);
        assert_eq!(sat.max_radius(), 5.0);
        assert_eq!(sat.node(leaf).unwrap().circle.radius, 1.25);
        assert_eq!(sat.edge_count(), tree.edge_count());
        assert_eq!(sat.root(), tree.root());

        let forest = vec![tree.clone(), sat];
        assert_eq!(max_radius(&forest), 5.0);
        assert_eq!(max_radius(&[]), 0.0);
        assert_eq!(max_radius(&to_scale_axis(&[tree], 2.0)), 4.0);
    }

    #[test]
    fn from_records_builds_tree() {
        let records = vec![
            NodeRecord {
                center: [0.0, 0.0],
                radius: 1.0,
                edges: vec![EdgeRecord {
                    target: 1,
                    outbound: line_record([0.0, -1.0], [2.0, 0.0]),
                    inbound: Some(vec![[2.0, 0.0], [1.0, 1.0], [0.0, 1.0]]),
                    axis: None,
                }],
            },
            NodeRecord {
                center: [2.0, 0.0],
                radius: 0.0,
                edges: vec![],
            },
        ];
        let tree = TransformTree::from_records(&records, 0).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.root(), Ok(NodeId(0)));
        let edge = &tree.node(NodeId(0)).unwrap().edges[0];
        assert_eq!(edge.curves.inbound.unwrap().degree(), crate::curve::Degree::Quadratic);
        assert_eq!(tree.node(NodeId(1)).unwrap().parent, Some(NodeId(0)));
    }

    #[test]
    fn from_records_rejects_bad_degree() {
        let records = vec![
            NodeRecord {
                center: [0.0, 0.0],
                radius: 1.0,
                edges: vec![EdgeRecord {
                    target: 1,
                    outbound: Some(vec![[0.0, 0.0]; 5]),
                    ..EdgeRecord::default()
                }],
            },
            NodeRecord::default(),
        ];
        assert_eq!(
            TransformTree::from_records(&records, 0),
            Err(TreeError::UnsupportedDegree {
                node: 0,
                edge: 0,
                count: 5
            })
        );
    }

    #[test]
    fn from_records_rejects_bad_circle() {
        let records = vec![NodeRecord {
            center: [0.0, 0.0],
            radius: -2.0,
            edges: vec![],
        }];
        assert_eq!(
            TransformTree::from_records(&records, 0),
            Err(TreeError::InvalidCircle {
                node: 0,
                reason: crate::types::NumericError::Negative
            })
        );
    }

    #[test]
    fn from_records_rejects_missing_root() {
        assert_eq!(
            TransformTree::from_records(&[], 0),
            Err(TreeError::MissingRoot)
        );
        let records = vec![NodeRecord::default()];
        assert_eq!(
            TransformTree::from_records(&records, 3),
            Err(TreeError::RootOutOfRange { root: 3, len: 1 })
        );
    }

    #[test]
    fn from_records_rejects_dangling_edge() {
        let records = vec![NodeRecord {
            center: [0.0, 0.0],
            radius: 1.0,
            edges: vec![EdgeRecord {
                target: 4,
                ..EdgeRecord::default()
            }],
        }];
        assert_eq!(
            TransformTree::from_records(&records, 0),
            Err(TreeError::DanglingEdge {
                node: 0,
                edge: 0,
                target: 4
            })
        );
    }

    #[test]
    fn from_records_rejects_non_finite_point() {
        let records = vec![
            NodeRecord {
                center: [0.0, 0.0],
                radius: 1.0,
                edges: vec![EdgeRecord {
                    target: 1,
                    axis: line_record([0.0, 0.0], [f64::INFINITY, 0.0]),
                    ..EdgeRecord::default()
                }],
            },
            NodeRecord::default(),
        ];
        assert_eq!(
            TransformTree::from_records(&records, 0),
            Err(TreeError::NonFinitePoint { node: 0, edge: 0 })
        );
    }

    #[test]
    fn outline_bounds_cover_sides() {
        let mut tree = TransformTree::new();
        let root = tree.add_node(circle(0.0, 0.0, 1.0));
        let leaf = tree.add_node(circle(2.0, 0.0, 0.0));
        tree.connect(
            root,
            leaf,
            EdgeCurves::sides(
                Curve::line(dvec2(0.0, -1.0), dvec2(2.0, 0.0)),
                Curve::line(dvec2(2.0, 0.0), dvec2(0.0, 1.0)),
            ),
        )
        .unwrap();
        let b = tree.outline_bounds();
        assert_eq!(b.min, dvec2(0.0, -1.0));
        assert_eq!(b.max, dvec2(2.0, 1.0));
    }
}
