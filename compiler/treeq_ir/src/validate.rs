//! Validation of expression tree invariants.
//!
//! Walks a tree and checks that it is well formed:
//! - every referenced `NodeId` resolves to a node in the arena
//! - every child was allocated before its parent, so the tree is acyclic
//! - required child slots are present (only `MemberAccess` and `MethodCall`
//!   targets are optional)
//! - every `NodeRange` and `MemberRange` is within its table
//! - `New` binds either no members or exactly one member per argument
//! - `Lambda` parameters are `Parameter` nodes
//! - parameter names and string literals resolve in the arena's interner
//!
//! Malformed trees are caller bugs. Comparison asserts validity in debug
//! builds; callers that build trees from untrusted descriptions can call
//! [`validate`] up front and get a descriptive error instead of a panic.

use crate::{
    children, ensure_sufficient_stack, ConstValue, ExprArena, ExprKind, ExprRef, Name, NodeId,
    NodeRange,
};

/// Why a tree is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedTree {
    #[error("{id:?} is not a node of this arena ({len} nodes)")]
    DanglingNode { id: NodeId, len: usize },

    #[error("{parent:?}: required child `{slot}` is absent")]
    MissingChild { parent: NodeId, slot: &'static str },

    #[error("{parent:?}: child {child:?} was not allocated before its parent")]
    ForwardReference { parent: NodeId, child: NodeId },

    #[error("{parent:?}: `{slot}` range {start}..{end} is out of bounds")]
    RangeOutOfBounds {
        parent: NodeId,
        slot: &'static str,
        start: usize,
        end: usize,
    },

    #[error("{parent:?}: {members} bound members for {args} constructor arguments")]
    MemberArityMismatch {
        parent: NodeId,
        members: usize,
        args: usize,
    },

    #[error("{parent:?}: lambda parameter {param:?} is not a Parameter node")]
    NonParameterParam { parent: NodeId, param: NodeId },

    #[error("{id:?}: {name:?} was not interned by this arena's interner")]
    UnknownName { id: NodeId, name: Name },
}

/// Validate the tree rooted at `tree.root`. Absent trees are valid.
pub fn validate(tree: ExprRef<'_>) -> Result<(), MalformedTree> {
    let Some(root) = tree.root.present() else {
        return Ok(());
    };
    check_in_arena(tree.arena, root)?;
    validate_node(tree.arena, root)
}

fn validate_node(arena: &ExprArena, id: NodeId) -> Result<(), MalformedTree> {
    ensure_sufficient_stack(|| -> Result<(), MalformedTree> {
        validate_slots(arena, id)?;
        for child in children(arena, id) {
            validate_node(arena, child)?;
        }
        Ok(())
    })
}

/// Check the child slots of one node without recursing.
fn validate_slots(arena: &ExprArena, id: NodeId) -> Result<(), MalformedTree> {
    match *arena.kind(id) {
        ExprKind::Constant(ConstValue::Str(name)) | ExprKind::Parameter { name } => {
            if arena.interner().contains(name) {
                Ok(())
            } else {
                Err(MalformedTree::UnknownName { id, name })
            }
        }
        ExprKind::Constant(_) => Ok(()),
        ExprKind::MemberAccess { target, .. } => optional(arena, id, target),
        ExprKind::MethodCall { target, args, .. } => {
            optional(arena, id, target)?;
            list(arena, id, args, "args")
        }
        ExprKind::TypeIs { operand, .. } | ExprKind::Unary { operand, .. } => {
            required(arena, id, operand, "operand")
        }
        ExprKind::Binary { left, right, .. } => {
            required(arena, id, left, "left")?;
            required(arena, id, right, "right")
        }
        ExprKind::New { args, members, .. } => {
            list(arena, id, args, "args")?;
            if !arena.contains_member_list(members) {
                return Err(MalformedTree::RangeOutOfBounds {
                    parent: id,
                    slot: "members",
                    start: members.start as usize,
                    end: members.end(),
                });
            }
            if !members.is_empty() && members.len() != args.len() {
                return Err(MalformedTree::MemberArityMismatch {
                    parent: id,
                    members: members.len(),
                    args: args.len(),
                });
            }
            Ok(())
        }
        ExprKind::Conditional {
            test,
            if_true,
            if_false,
        } => {
            required(arena, id, test, "test")?;
            required(arena, id, if_true, "if_true")?;
            required(arena, id, if_false, "if_false")
        }
        ExprKind::Invoke { callee, args } => {
            required(arena, id, callee, "callee")?;
            list(arena, id, args, "args")
        }
        ExprKind::Lambda { body, params } => {
            required(arena, id, body, "body")?;
            list(arena, id, params, "params")?;
            for &param in arena.get_expr_list(params) {
                if !matches!(arena.kind(param), ExprKind::Parameter { .. }) {
                    return Err(MalformedTree::NonParameterParam { parent: id, param });
                }
            }
            Ok(())
        }
        ExprKind::NewArrayInit { elements } => list(arena, id, elements, "elements"),
        ExprKind::NewArrayBounds { bounds } => list(arena, id, bounds, "bounds"),
    }
}

fn check_in_arena(arena: &ExprArena, id: NodeId) -> Result<(), MalformedTree> {
    if arena.contains(id) {
        Ok(())
    } else {
        Err(MalformedTree::DanglingNode {
            id,
            len: arena.len(),
        })
    }
}

fn child(arena: &ExprArena, parent: NodeId, id: NodeId) -> Result<(), MalformedTree> {
    check_in_arena(arena, id)?;
    if id.raw() >= parent.raw() {
        return Err(MalformedTree::ForwardReference { parent, child: id });
    }
    Ok(())
}

fn optional(arena: &ExprArena, parent: NodeId, id: NodeId) -> Result<(), MalformedTree> {
    match id.present() {
        Some(id) => child(arena, parent, id),
        None => Ok(()),
    }
}

fn required(
    arena: &ExprArena,
    parent: NodeId,
    id: NodeId,
    slot: &'static str,
) -> Result<(), MalformedTree> {
    if !id.is_valid() {
        return Err(MalformedTree::MissingChild { parent, slot });
    }
    child(arena, parent, id)
}

fn list(
    arena: &ExprArena,
    parent: NodeId,
    range: NodeRange,
    slot: &'static str,
) -> Result<(), MalformedTree> {
    if !arena.contains_expr_list(range) {
        return Err(MalformedTree::RangeOutOfBounds {
            parent,
            slot,
            start: range.start as usize,
            end: range.end(),
        });
    }
    for &id in arena.get_expr_list(range) {
        required(arena, parent, id, slot)?;
    }
    Ok(())
}
