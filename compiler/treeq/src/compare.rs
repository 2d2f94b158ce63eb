//! Structural comparison of expression trees.
//!
//! The right-hand tree is flattened once into a queue of candidates. The
//! left-hand tree is then walked in the same pre-order; every present node
//! consumes exactly one candidate, which must agree with it on kind, static
//! type and the kind's own attributes before the walk descends into the
//! node's children. The first disagreement ends the comparison.
//!
//! Per-kind attributes:
//!
//! | Kind | Compared besides kind and static type |
//! |---|---|
//! | `Constant` | literal value |
//! | `MemberAccess` | member, target presence |
//! | `MethodCall` | method, target presence, argument count |
//! | `Parameter` | declared name |
//! | `TypeIs` | tested type |
//! | `Binary`, `Unary` | operator method, lifted, lifted-to-null |
//! | `New` | constructor, argument count, bound members (count, then each) |
//! | `Invoke` | argument count |
//! | `Lambda` | parameter count |
//! | `NewArrayInit`, `NewArrayBounds` | element count |
//! | `Conditional` | nothing |
//!
//! List lengths are compared before any element so that two trees whose
//! pre-order listings happen to line up but whose lists are split
//! differently (`f(g(), x)` vs `f(g(x))`) are told apart.
//!
//! Parameter names and string literals are compared as `Name`s when both
//! arenas share an interner, and by their strings otherwise.

use std::fmt;

use treeq_ir::{
    children, ensure_sufficient_stack, validate, ConstValue, ExprArena, ExprKind, ExprRef, Name,
    NodeId, NodeKind, NodeRange, OperatorInfo, TypeId,
};

use crate::flatten::{flatten, FlattenedTree};

/// A node attribute that differed between two otherwise matching nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Literal value of a `Constant`.
    Value,
    /// Field or property of a `MemberAccess`.
    Member,
    /// Method of a `MethodCall`.
    Method,
    /// One side accesses a static member or method, the other an instance one.
    Target,
    /// Length of an argument, parameter or element list.
    Arity,
    /// Declared name of a `Parameter`.
    ParameterName,
    /// Tested type of a `TypeIs`.
    TypeOperand,
    /// User-defined implementation of an operator.
    OperatorMethod,
    /// Whether an operator is lifted over nullable operands.
    Lifted,
    /// Whether a lifted operator's result is nullable.
    LiftedToNull,
    /// Constructor of a `New`.
    Constructor,
    /// Number of members bound by a `New`.
    BoundMemberCount,
    /// Member bound at `index` by a `New`.
    BoundMember { index: usize },
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Value => f.write_str("literal value"),
            Attribute::Member => f.write_str("member"),
            Attribute::Method => f.write_str("method"),
            Attribute::Target => f.write_str("target presence"),
            Attribute::Arity => f.write_str("list length"),
            Attribute::ParameterName => f.write_str("parameter name"),
            Attribute::TypeOperand => f.write_str("tested type"),
            Attribute::OperatorMethod => f.write_str("operator method"),
            Attribute::Lifted => f.write_str("lifting"),
            Attribute::LiftedToNull => f.write_str("lifting to null"),
            Attribute::Constructor => f.write_str("constructor"),
            Attribute::BoundMemberCount => f.write_str("bound member count"),
            Attribute::BoundMember { index } => write!(f, "bound member #{index}"),
        }
    }
}

/// The first structural difference between two trees.
///
/// `left` IDs refer to the first tree's arena, `right` IDs to the second's.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    /// The left tree has a node where the right tree has already ended.
    #[error("{left:?} has no counterpart in the right tree")]
    MissingCandidate { left: NodeId },

    /// The right tree has nodes the left tree never reached.
    #[error("right tree has {count} unmatched node(s), starting at {first:?}")]
    ExtraCandidates { first: NodeId, count: usize },

    #[error("{left:?} is {left_kind} but {right:?} is {right_kind}")]
    Kind {
        left: NodeId,
        right: NodeId,
        left_kind: NodeKind,
        right_kind: NodeKind,
    },

    #[error("{left:?} has type {left_ty:?} but {right:?} has type {right_ty:?}")]
    Type {
        left: NodeId,
        right: NodeId,
        left_ty: TypeId,
        right_ty: TypeId,
    },

    #[error("{left:?} and {right:?} differ in {attribute}")]
    Attribute {
        left: NodeId,
        right: NodeId,
        attribute: Attribute,
    },
}

/// Returns `true` if `a` and `b` are structurally equal.
///
/// Two absent trees are equal; an absent tree never equals a present one.
pub fn structurally_equal(a: ExprRef<'_>, b: ExprRef<'_>) -> bool {
    check_structural_eq(a, b).is_ok()
}

/// Compare `a` against `b`, reporting the first difference.
///
/// # Panics
///
/// In debug builds, panics if either tree is malformed (see
/// [`treeq_ir::validate`]).
#[tracing::instrument(level = "trace", skip_all, fields(left = ?a.root, right = ?b.root))]
pub fn check_structural_eq(a: ExprRef<'_>, b: ExprRef<'_>) -> Result<(), Mismatch> {
    debug_assert_well_formed(a);
    debug_assert_well_formed(b);

    let mut comparison = Comparison {
        left: a.arena,
        right: b.arena,
        shared_names: a.arena.shares_interner(b.arena),
        candidates: flatten(b),
        cursor: 0,
    };
    let result = comparison
        .compare_node(a.root)
        .and_then(|()| comparison.finish());

    match &result {
        Ok(()) => tracing::trace!(nodes = comparison.cursor, "structurally equal"),
        Err(mismatch) => {
            tracing::debug!(%mismatch, matched = comparison.cursor, "trees differ");
        }
    }
    result
}

fn debug_assert_well_formed(tree: ExprRef<'_>) {
    if cfg!(debug_assertions) {
        if let Err(err) = validate(tree) {
            panic!("malformed expression tree: {err}");
        }
    }
}

/// State of one comparison: the right tree's pre-order listing and how much
/// of it has been matched.
struct Comparison<'a> {
    left: &'a ExprArena,
    right: &'a ExprArena,
    /// Both arenas intern through one interner, so `Name`s compare directly.
    shared_names: bool,
    candidates: FlattenedTree,
    cursor: usize,
}

impl Comparison<'_> {
    /// Match `id` (a left node) and its subtree against the next candidates.
    fn compare_node(&mut self, id: NodeId) -> Result<(), Mismatch> {
        // Absent nodes are never matched against a candidate.
        let Some(id) = id.present() else {
            return Ok(());
        };

        ensure_sufficient_stack(|| -> Result<(), Mismatch> {
            let candidate = self
                .candidates
                .get(self.cursor)
                .ok_or(Mismatch::MissingCandidate { left: id })?;

            self.compare_kind_and_type(id, candidate)?;
            self.cursor += 1;
            self.compare_attributes(id, candidate)?;

            for child in children(self.left, id) {
                self.compare_node(child)?;
            }
            Ok(())
        })
    }

    /// Fail if the right tree has candidates left over.
    fn finish(&self) -> Result<(), Mismatch> {
        match self.candidates.get(self.cursor) {
            Some(first) => Err(Mismatch::ExtraCandidates {
                first,
                count: self.candidates.len() - self.cursor,
            }),
            None => Ok(()),
        }
    }

    fn compare_kind_and_type(&self, left: NodeId, right: NodeId) -> Result<(), Mismatch> {
        let left_kind = self.left.kind(left).node_kind();
        let right_kind = self.right.kind(right).node_kind();
        if left_kind != right_kind {
            return Err(Mismatch::Kind {
                left,
                right,
                left_kind,
                right_kind,
            });
        }

        let left_ty = self.left.ty(left);
        let right_ty = self.right.ty(right);
        if left_ty != right_ty {
            return Err(Mismatch::Type {
                left,
                right,
                left_ty,
                right_ty,
            });
        }
        Ok(())
    }

    /// Compare the non-child payload of two nodes already known to share a kind.
    fn compare_attributes(&self, l: NodeId, r: NodeId) -> Result<(), Mismatch> {
        let check = |same: bool, attribute: Attribute| {
            if same {
                Ok(())
            } else {
                Err(Mismatch::Attribute {
                    left: l,
                    right: r,
                    attribute,
                })
            }
        };
        let arity = |a: NodeRange, b: NodeRange| check(a.len() == b.len(), Attribute::Arity);

        let right = *self.right.kind(r);
        match *self.left.kind(l) {
            ExprKind::Constant(value) => {
                let ExprKind::Constant(other) = right else {
                    return Err(self.kind_mismatch(l, r));
                };
                check(self.same_value(value, other), Attribute::Value)
            }
            ExprKind::MemberAccess { target, member } => {
                let ExprKind::MemberAccess {
                    target: other_target,
                    member: other_member,
                } = right
                else {
                    return Err(self.kind_mismatch(l, r));
                };
                check(member == other_member, Attribute::Member)?;
                check(target.is_valid() == other_target.is_valid(), Attribute::Target)
            }
            ExprKind::MethodCall {
                target,
                method,
                args,
            } => {
                let ExprKind::MethodCall {
                    target: other_target,
                    method: other_method,
                    args: other_args,
                } = right
                else {
                    return Err(self.kind_mismatch(l, r));
                };
                check(method == other_method, Attribute::Method)?;
                check(target.is_valid() == other_target.is_valid(), Attribute::Target)?;
                arity(args, other_args)
            }
            ExprKind::Parameter { name } => {
                let ExprKind::Parameter { name: other } = right else {
                    return Err(self.kind_mismatch(l, r));
                };
                check(self.same_name(name, other), Attribute::ParameterName)
            }
            ExprKind::TypeIs { type_operand, .. } => {
                let ExprKind::TypeIs {
                    type_operand: other,
                    ..
                } = right
                else {
                    return Err(self.kind_mismatch(l, r));
                };
                check(type_operand == other, Attribute::TypeOperand)
            }
            ExprKind::Binary { operator, .. } => {
                let ExprKind::Binary {
                    operator: other, ..
                } = right
                else {
                    return Err(self.kind_mismatch(l, r));
                };
                compare_operator(operator, other, &check)
            }
            ExprKind::Unary { operator, .. } => {
                let ExprKind::Unary {
                    operator: other, ..
                } = right
                else {
                    return Err(self.kind_mismatch(l, r));
                };
                compare_operator(operator, other, &check)
            }
            ExprKind::New {
                ctor,
                args,
                members,
            } => {
                let ExprKind::New {
                    ctor: other_ctor,
                    args: other_args,
                    members: other_members,
                } = right
                else {
                    return Err(self.kind_mismatch(l, r));
                };
                check(ctor == other_ctor, Attribute::Constructor)?;
                arity(args, other_args)?;

                let members = self.left.get_member_list(members);
                let other_members = self.right.get_member_list(other_members);
                check(
                    members.len() == other_members.len(),
                    Attribute::BoundMemberCount,
                )?;
                for (index, (member, other)) in members.iter().zip(other_members).enumerate() {
                    check(member == other, Attribute::BoundMember { index })?;
                }
                Ok(())
            }
            ExprKind::Invoke { args, .. } => {
                let ExprKind::Invoke {
                    args: other_args, ..
                } = right
                else {
                    return Err(self.kind_mismatch(l, r));
                };
                arity(args, other_args)
            }
            ExprKind::Lambda { params, .. } => {
                let ExprKind::Lambda {
                    params: other_params,
                    ..
                } = right
                else {
                    return Err(self.kind_mismatch(l, r));
                };
                arity(params, other_params)
            }
            ExprKind::NewArrayInit { elements } => {
                let ExprKind::NewArrayInit { elements: other } = right else {
                    return Err(self.kind_mismatch(l, r));
                };
                arity(elements, other)
            }
            ExprKind::NewArrayBounds { bounds } => {
                let ExprKind::NewArrayBounds { bounds: other } = right else {
                    return Err(self.kind_mismatch(l, r));
                };
                arity(bounds, other)
            }
            // Three required children and no payload of its own.
            ExprKind::Conditional { .. } => Ok(()),
        }
    }

    fn same_name(&self, left: Name, right: Name) -> bool {
        if self.shared_names {
            left == right
        } else {
            self.left.name(left) == self.right.name(right)
        }
    }

    fn same_value(&self, left: ConstValue, right: ConstValue) -> bool {
        match (left, right) {
            (ConstValue::Str(l), ConstValue::Str(r)) => self.same_name(l, r),
            _ => left == right,
        }
    }

    fn kind_mismatch(&self, left: NodeId, right: NodeId) -> Mismatch {
        Mismatch::Kind {
            left,
            right,
            left_kind: self.left.kind(left).node_kind(),
            right_kind: self.right.kind(right).node_kind(),
        }
    }
}

fn compare_operator(
    operator: OperatorInfo,
    other: OperatorInfo,
    check: impl Fn(bool, Attribute) -> Result<(), Mismatch>,
) -> Result<(), Mismatch> {
    check(operator.method == other.method, Attribute::OperatorMethod)?;
    check(operator.is_lifted == other.is_lifted, Attribute::Lifted)?;
    check(
        operator.is_lifted_to_null == other.is_lifted_to_null,
        Attribute::LiftedToNull,
    )
}
