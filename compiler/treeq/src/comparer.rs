//! Equality-comparer façade over [`structurally_equal`] and [`hash_tree`].
//!
//! [`StructuralComparer`] is what callers holding a pair of trees reach
//! for. [`StructuralKey`] wraps one tree so it can key a `HashMap` or sit
//! in a `HashSet`, with `==` and `Hash` both meaning structural identity.

use std::hash::{Hash, Hasher};

use treeq_ir::ExprRef;

use crate::{hash_tree, structurally_equal};

/// Structural equality and hashing as a pair of operations.
///
/// Stateless; use [`StructuralComparer::INSTANCE`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StructuralComparer;

impl StructuralComparer {
    /// The shared comparer.
    pub const INSTANCE: StructuralComparer = StructuralComparer;

    /// Returns `true` if `a` and `b` are structurally equal.
    #[inline]
    pub fn equals(self, a: ExprRef<'_>, b: ExprRef<'_>) -> bool {
        structurally_equal(a, b)
    }

    /// Hash consistent with [`equals`](Self::equals).
    #[inline]
    pub fn hash_of(self, tree: ExprRef<'_>) -> u64 {
        hash_tree(tree)
    }
}

/// A tree used as a hash key under structural identity.
///
/// Two keys over different arenas are equal exactly when their trees are
/// structurally equal.
#[derive(Copy, Clone, Debug)]
pub struct StructuralKey<'a>(pub ExprRef<'a>);

impl<'a> StructuralKey<'a> {
    #[inline]
    pub fn new(tree: ExprRef<'a>) -> Self {
        StructuralKey(tree)
    }

    #[inline]
    pub fn tree(self) -> ExprRef<'a> {
        self.0
    }
}

impl PartialEq for StructuralKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        structurally_equal(self.0, other.0)
    }
}

impl Eq for StructuralKey<'_> {}

impl Hash for StructuralKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash_tree(self.0));
    }
}

impl<'a> From<ExprRef<'a>> for StructuralKey<'a> {
    fn from(tree: ExprRef<'a>) -> Self {
        StructuralKey(tree)
    }
}
