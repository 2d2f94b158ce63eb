//! Pre-order flattening.
//!
//! Lists a tree's nodes in the order the comparator visits them: a node,
//! then each of its children (as given by [`treeq_ir::children`]), recursively.

use std::ops::Index;

use treeq_ir::{walk_node, ExprArena, ExprRef, NodeId, Visitor};

/// Pre-order listing of one tree's nodes.
///
/// Holds node IDs only; resolve them against the arena the tree came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlattenedTree {
    nodes: Vec<NodeId>,
}

impl FlattenedTree {
    /// Number of present nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` for an absent tree.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<NodeId> {
        self.nodes.get(position).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }
}

impl Index<usize> for FlattenedTree {
    type Output = NodeId;

    fn index(&self, position: usize) -> &NodeId {
        &self.nodes[position]
    }
}

impl<'a> IntoIterator for &'a FlattenedTree {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Flatten `tree` into pre-order. An absent tree flattens to nothing.
pub fn flatten(tree: ExprRef<'_>) -> FlattenedTree {
    let mut flattener = Flattener { nodes: Vec::new() };
    flattener.visit_tree(tree);
    FlattenedTree {
        nodes: flattener.nodes,
    }
}

struct Flattener {
    nodes: Vec<NodeId>,
}

impl<'ast> Visitor<'ast> for Flattener {
    fn visit_node(&mut self, id: NodeId, arena: &'ast ExprArena) {
        self.nodes.push(id);
        walk_node(self, id, arena);
    }
}
