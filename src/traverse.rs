//! Depth-first walk over a transform tree.
//!
//! The walk uses an explicit work-list instead of recursion, so glyphs with
//! deep axis trees cannot exhaust the call stack. Every reachable node is
//! entered once; every edge yields exactly one `Descend` and one `Ascend`.

use crate::errors::TreeError;
use crate::tree::{CircleNode, Edge, NodeId, TransformTree};

/// One event of the walk
#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    /// Entering a node, before any of its edges
    Node { id: NodeId, node: &'a CircleNode },
    /// About to walk from `parent` into `edge.target`
    Descend { parent: NodeId, index: usize, edge: &'a Edge },
    /// Finished `edge.target`'s subtree, back at `parent`
    Ascend { parent: NodeId, index: usize, edge: &'a Edge },
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Enter(NodeId),
    Down { parent: NodeId, index: usize },
    Up { parent: NodeId, index: usize },
}

/// Walk `tree` from `root`, calling `visit` for every step.
///
/// Children are visited in edge-creation order. A node reachable through
/// more than one edge is entered only the first time; later edges into it
/// still produce their `Descend`/`Ascend` pair. The visitor can stop the
/// walk by returning an error.
pub fn walk<'a, F>(tree: &'a TransformTree, root: NodeId, mut visit: F) -> Result<(), TreeError>
where
    F: FnMut(Step<'a>) -> Result<(), TreeError>,
{
    if tree.node(root).is_none() {
        return Err(TreeError::RootOutOfRange {
            root: root.index(),
            len: tree.len(),
        });
    }

    let mut entered = vec![false; tree.len()];
    let mut stack = vec![Frame::Enter(root)];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(id) => {
                if std::mem::replace(&mut entered[id.index()], true) {
                    crate::log::warn!(node = id.index(), "node reached twice, not re-entering");
                    continue;
                }
                let node = node_at(tree, id)?;
                visit(Step::Node { id, node })?;
                for index in (0..node.edges.len()).rev() {
                    stack.push(Frame::Down { parent: id, index });
                }
            }
            Frame::Down { parent, index } => {
                let edge = &node_at(tree, parent)?.edges[index];
                if tree.node(edge.target).is_none() {
                    return Err(TreeError::DanglingEdge {
                        node: parent.index(),
                        edge: index,
                        target: edge.target.index(),
                    });
                }
                visit(Step::Descend { parent, index, edge })?;
                stack.push(Frame::Up { parent, index });
                if entered[edge.target.index()] {
                    crate::log::warn!(
                        node = parent.index(),
                        edge = index,
                        target = edge.target.index(),
                        "edge leads to an already visited node"
                    );
                } else {
                    stack.push(Frame::Enter(edge.target));
                }
            }
            Frame::Up { parent, index } => {
                let edge = &node_at(tree, parent)?.edges[index];
                visit(Step::Ascend { parent, index, edge })?;
            }
        }
    }
    Ok(())
}

fn node_at(tree: &TransformTree, id: NodeId) -> Result<&CircleNode, TreeError> {
    tree.node(id).ok_or(TreeError::MissingNode {
        node: id.index(),
        len: tree.len(),
    })
}
