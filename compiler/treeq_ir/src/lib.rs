//! treeq IR - Expression Tree Types
//!
//! This crate contains the data structures shared by the structural
//! comparison passes:
//! - `NodeId` / range newtypes indexing into an arena
//! - Opaque handles for members, methods and constructors
//! - `TypeId` for static types and `Name` for interned identifiers
//! - `ExprKind` / `NodeKind` describing what a node represents
//! - `ExprArena` storing whole trees, and `ExprRef` naming one of them
//! - The canonical child order (`children`) and a `Visitor` built on it
//! - `ExprBuilder` for assembling trees bottom-up
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32), Types → TypeId(u32)
//! - **Flatten Everything**: No `Box<ExprKind>`, children are `NodeId(u32)` indices
//! - **One Traversal Order**: every pass walks children through [`children`],
//!   so pre-order listings of structurally equal trees line up position by position
//!
//! Floats are stored as u64 bits so literal equality and hashing agree.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod builder;
mod expr;
mod ids;
mod interner;
mod name;
mod stack;
mod type_id;
pub mod validate;
pub mod visitor;

pub use arena::{ExprArena, ExprRef};
pub use builder::ExprBuilder;
pub use expr::{BinaryOp, ConstValue, ExprKind, ExprNode, NodeKind, OperatorInfo, UnaryOp};
pub use ids::{CtorId, MemberId, MemberRange, MethodId, NodeId, NodeRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use stack::ensure_sufficient_stack;
pub use type_id::TypeId;
pub use validate::{validate, MalformedTree};
pub use visitor::{children, walk_node, Children, Visitor};

// Size assertions to prevent accidental regressions.
// These are checked at compile time on 64-bit platforms.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{NodeId, NodeRange, TypeId};
    crate::static_assert_size!(NodeId, 4);
    crate::static_assert_size!(NodeRange, 8);
    crate::static_assert_size!(Option<NodeId>, 8);
    crate::static_assert_size!(TypeId, 4);
}
