//! Structural hashing of expression trees.
//!
//! Folds exactly the attributes [`check_structural_eq`](crate::check_structural_eq)
//! looks at, so structurally equal trees always hash equal, whichever arena
//! they live in.
//!
//! # Strategy
//!
//! Depth-first in the shared child order. For each node:
//! 1. Hash the `NodeKind` (variant plus operator)
//! 2. Hash `ty.raw()`
//! 3. Hash the kind's own attributes, list lengths included
//! 4. Recurse into [`children`]
//!
//! `NodeId` values are never hashed: they are arena positions, not content.
//! Nor are `Name`s: parameter names and string literals hash their strings,
//! so trees from arenas with different interners hash alike.

use std::hash::{Hash, Hasher};
use std::mem;

use rustc_hash::FxHasher;
use treeq_ir::{
    children, ensure_sufficient_stack, ConstValue, ExprArena, ExprKind, ExprRef, NodeId,
    OperatorInfo,
};

/// Hash the tree `tree` names.
///
/// An absent tree hashes to a fixed value. Trees that differ structurally
/// usually hash differently, with the usual collision caveat.
#[tracing::instrument(level = "trace", skip_all, fields(root = ?tree.root))]
pub fn hash_tree(tree: ExprRef<'_>) -> u64 {
    let mut hasher = FxHasher::default();
    hash_node(tree.arena, tree.root, &mut hasher);
    hasher.finish()
}

fn hash_node(arena: &ExprArena, id: NodeId, state: &mut FxHasher) {
    let Some(id) = id.present() else {
        // Sentinel for "no expression"
        u32::MAX.hash(state);
        return;
    };

    ensure_sufficient_stack(|| {
        let kind = arena.kind(id);
        kind.node_kind().hash(state);
        arena.ty(id).raw().hash(state);
        hash_attributes(arena, kind, state);

        for child in children(arena, id) {
            hash_node(arena, child, state);
        }
    });
}

/// Hash a node's non-child payload.
fn hash_attributes(arena: &ExprArena, kind: &ExprKind, state: &mut FxHasher) {
    match *kind {
        ExprKind::Constant(value) => {
            mem::discriminant(&value).hash(state);
            match value {
                ConstValue::Str(name) => arena.name(name).hash(state),
                ConstValue::Null => {}
                ConstValue::Bool(v) => v.hash(state),
                ConstValue::Int(v) => v.hash(state),
                ConstValue::Float(bits) => bits.hash(state),
                ConstValue::Char(c) => c.hash(state),
            }
        }
        ExprKind::MemberAccess { target, member } => {
            member.hash(state);
            target.is_valid().hash(state);
        }
        ExprKind::MethodCall {
            target,
            method,
            args,
        } => {
            method.hash(state);
            target.is_valid().hash(state);
            args.len().hash(state);
        }
        ExprKind::Parameter { name } => arena.name(name).hash(state),
        ExprKind::TypeIs { type_operand, .. } => type_operand.raw().hash(state),
        ExprKind::Binary { operator, .. } | ExprKind::Unary { operator, .. } => {
            hash_operator(operator, state);
        }
        ExprKind::New {
            ctor,
            args,
            members,
        } => {
            ctor.hash(state);
            args.len().hash(state);
            arena.get_member_list(members).hash(state);
        }
        ExprKind::Invoke { args, .. } => args.len().hash(state),
        ExprKind::Lambda { params, .. } => params.len().hash(state),
        ExprKind::NewArrayInit { elements } => elements.len().hash(state),
        ExprKind::NewArrayBounds { bounds } => bounds.len().hash(state),
        ExprKind::Conditional { .. } => {}
    }
}

fn hash_operator(operator: OperatorInfo, state: &mut FxHasher) {
    operator.method.hash(state);
    operator.is_lifted.hash(state);
    operator.is_lifted_to_null.hash(state);
}

#[cfg(test)]
mod tests;
