//! Child order and tree traversal.
//!
//! [`children`] is the single definition of which children a node has and
//! in which positional order they are visited. Flattening, comparison,
//! hashing and validation all go through it, so two structurally equal trees
//! always produce positionally aligned pre-order listings.
//!
//! # Example
//!
//! ```text
//! struct CountConstants {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountConstants {
//!     fn visit_node(&mut self, id: NodeId, arena: &'ast ExprArena) {
//!         if let ExprKind::Constant(_) = arena.kind(id) {
//!             self.count += 1;
//!         }
//!         walk_node(self, id, arena);
//!     }
//! }
//! ```

use smallvec::SmallVec;

use crate::{ensure_sufficient_stack, ExprArena, ExprKind, ExprRef, NodeId, NodeRange};

/// Children of one node, in visiting order.
///
/// Inline capacity covers every fixed-arity kind; argument lists longer than
/// three spill to the heap.
pub type Children = SmallVec<[NodeId; 4]>;

/// The present children of `id`, in positional order.
///
/// | Kind | Order |
/// |---|---|
/// | `MemberAccess` | target (if any) |
/// | `MethodCall` | target (if any), args |
/// | `TypeIs`, `Unary` | operand |
/// | `Binary` | left, right |
/// | `New` | args |
/// | `Conditional` | test, if_true, if_false |
/// | `Invoke` | callee, args |
/// | `Lambda` | body, params |
/// | `NewArrayInit`, `NewArrayBounds` | elements |
///
/// Absent optional children are left out.
///
/// # Panics
///
/// Panics if a required child slot holds `NodeId::INVALID`. That is a tree
/// construction bug, not an absent child.
pub fn children(arena: &ExprArena, id: NodeId) -> Children {
    let mut out = Children::new();
    match *arena.kind(id) {
        // Leaves
        ExprKind::Constant(_) | ExprKind::Parameter { .. } => {}

        // Optional target
        ExprKind::MemberAccess { target, .. } => {
            out.extend(target.present());
        }
        ExprKind::MethodCall { target, args, .. } => {
            out.extend(target.present());
            push_list(&mut out, arena, id, args);
        }

        // Single child
        ExprKind::TypeIs { operand, .. } | ExprKind::Unary { operand, .. } => {
            push_required(&mut out, id, operand, "operand");
        }

        // Fixed arity
        ExprKind::Binary { left, right, .. } => {
            push_required(&mut out, id, left, "left");
            push_required(&mut out, id, right, "right");
        }
        ExprKind::Conditional {
            test,
            if_true,
            if_false,
        } => {
            push_required(&mut out, id, test, "test");
            push_required(&mut out, id, if_true, "if_true");
            push_required(&mut out, id, if_false, "if_false");
        }

        // Lists
        ExprKind::New { args, .. } => push_list(&mut out, arena, id, args),
        ExprKind::Invoke { callee, args } => {
            push_required(&mut out, id, callee, "callee");
            push_list(&mut out, arena, id, args);
        }
        ExprKind::Lambda { body, params } => {
            push_required(&mut out, id, body, "body");
            push_list(&mut out, arena, id, params);
        }
        ExprKind::NewArrayInit { elements: list } | ExprKind::NewArrayBounds { bounds: list } => {
            push_list(&mut out, arena, id, list);
        }
    }
    out
}

#[inline]
fn push_required(out: &mut Children, parent: NodeId, child: NodeId, slot: &str) {
    assert!(
        child.is_valid(),
        "{parent:?}: required child `{slot}` is absent"
    );
    out.push(child);
}

fn push_list(out: &mut Children, arena: &ExprArena, parent: NodeId, range: NodeRange) {
    for &child in arena.get_expr_list(range) {
        push_required(out, parent, child, "list element");
    }
}

/// Expression tree visitor.
///
/// Override `visit_node` to add behavior at each node; call [`walk_node`]
/// to continue into the node's children. The visitor may mutate its own
/// state, the tree itself stays immutable.
pub trait Visitor<'ast> {
    /// Visit a whole tree. Absent trees are not visited.
    fn visit_tree(&mut self, tree: ExprRef<'ast>) {
        if let Some(root) = tree.root.present() {
            self.visit_node(root, tree.arena);
        }
    }

    /// Visit a present node.
    fn visit_node(&mut self, id: NodeId, arena: &'ast ExprArena) {
        walk_node(self, id, arena);
    }
}

/// Visit each child of `id` in positional order.
pub fn walk_node<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: NodeId,
    arena: &'ast ExprArena,
) {
    ensure_sufficient_stack(|| {
        for child in children(arena, id) {
            visitor.visit_node(child, arena);
        }
    });
}
