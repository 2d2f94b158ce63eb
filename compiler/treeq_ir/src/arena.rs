//! Expression arena.
//!
//! [`ExprArena`] uses struct-of-arrays layout for cache locality (parallel
//! `kinds` and `types` arrays indexed by [`NodeId`]). Argument lists and
//! bound-member lists are flattened into side tables addressed by ranges.
//! Each arena also carries the [`SharedInterner`] its names were interned in,
//! so parameter names and string literals can be resolved wherever the tree
//! goes.
//!
//! [`ExprRef`] names a single tree: an arena plus the root to start from.

use crate::{
    ExprKind, ExprNode, MemberId, MemberRange, Name, NodeId, NodeRange, SharedInterner, TypeId,
};

/// Convert a table length to `u32`, panicking with the table's name on overflow.
#[inline]
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

/// Convert a list length to `u16`, panicking with the list's name on overflow.
#[inline]
pub(crate) fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("{what} too long: {len} exceeds u16::MAX"))
}

/// Arena for expression trees.
///
/// # Index Spaces
///
/// - `kinds`/`types`: parallel arrays indexed by [`NodeId`]
/// - `expr_lists`: flat `Vec<NodeId>` indexed by [`NodeRange`]
/// - `member_lists`: flat `Vec<MemberId>` indexed by [`MemberRange`]
/// - `interner`: resolves every [`Name`] stored in the nodes
///
/// Nodes are immutable once pushed. Any number of trees may share one arena,
/// and any number of arenas may share one interner.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprArena {
    /// Expression kinds (parallel with types).
    kinds: Vec<ExprKind>,
    /// Static types (parallel with kinds).
    types: Vec<TypeId>,
    /// Flattened expression ID lists (args, elements, params).
    expr_lists: Vec<NodeId>,
    /// Flattened bound-member lists (for `New`).
    member_lists: Vec<MemberId>,
    /// Interner owning the names in `kinds`.
    interner: SharedInterner,
}

impl ExprArena {
    /// Create an empty arena with a fresh interner of its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty arena interning names through `interner`.
    ///
    /// Arenas sharing an interner compare names as plain `u32`s; otherwise
    /// names are compared by their strings.
    pub fn with_interner(interner: SharedInterner) -> Self {
        Self {
            interner,
            ..Self::default()
        }
    }

    /// Create an arena with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            kinds: Vec::with_capacity(nodes),
            types: Vec::with_capacity(nodes),
            expr_lists: Vec::with_capacity(nodes),
            member_lists: Vec::new(),
            interner: SharedInterner::new(),
        }
    }

    /// The interner this arena's names belong to.
    #[inline]
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Returns `true` if `self` and `other` intern names through the same
    /// interner, so equal names are equal `Name`s.
    #[inline]
    pub fn shares_interner(&self, other: &ExprArena) -> bool {
        self.interner.ptr_eq(&other.interner)
    }

    /// Resolve a name stored in this arena.
    ///
    /// # Panics
    /// Panics if `name` was not interned by this arena's interner.
    #[inline]
    pub fn name(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    /// Allocate a node, returning its ID.
    pub fn push(&mut self, node: ExprNode) -> NodeId {
        let id = NodeId::new(to_u32(self.kinds.len(), "expression nodes"));
        self.kinds.push(node.kind);
        self.types.push(node.ty);
        id
    }

    /// Allocate a node from its parts.
    pub fn alloc(&mut self, kind: ExprKind, ty: TypeId) -> NodeId {
        self.push(ExprNode::new(kind, ty))
    }

    /// Get the expression kind for a node.
    ///
    /// # Panics
    /// Panics if `id` is `INVALID` or was not allocated in this arena.
    #[inline]
    pub fn kind(&self, id: NodeId) -> &ExprKind {
        &self.kinds[id.index()]
    }

    /// Get the static type for a node.
    #[inline]
    pub fn ty(&self, id: NodeId) -> TypeId {
        self.types[id.index()]
    }

    /// Reconstruct a full `ExprNode` from the parallel arrays.
    pub fn get(&self, id: NodeId) -> ExprNode {
        ExprNode {
            kind: self.kinds[id.index()],
            ty: self.types[id.index()],
        }
    }

    /// Returns `true` if `id` refers to a node allocated in this arena.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.is_valid() && id.index() < self.kinds.len()
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Allocate a contiguous list of expression IDs.
    pub fn push_expr_list(&mut self, ids: &[NodeId]) -> NodeRange {
        if ids.is_empty() {
            return NodeRange::EMPTY;
        }
        let start = to_u32(self.expr_lists.len(), "expression lists");
        self.expr_lists.extend_from_slice(ids);
        NodeRange::new(start, to_u16(ids.len(), "expression list"))
    }

    /// Get expression IDs from a range.
    pub fn get_expr_list(&self, range: NodeRange) -> &[NodeId] {
        if range.is_empty() {
            return &[];
        }
        &self.expr_lists[range.start as usize..range.end()]
    }

    /// Returns `true` if `range` lies within the expression-list table.
    pub fn contains_expr_list(&self, range: NodeRange) -> bool {
        range.is_empty() || range.end() <= self.expr_lists.len()
    }

    /// Allocate a contiguous list of bound members.
    pub fn push_member_list(&mut self, members: &[MemberId]) -> MemberRange {
        if members.is_empty() {
            return MemberRange::EMPTY;
        }
        let start = to_u32(self.member_lists.len(), "member lists");
        self.member_lists.extend_from_slice(members);
        MemberRange::new(start, to_u16(members.len(), "member list"))
    }

    /// Get bound members from a range.
    pub fn get_member_list(&self, range: MemberRange) -> &[MemberId] {
        if range.is_empty() {
            return &[];
        }
        &self.member_lists[range.start as usize..range.end()]
    }

    /// Returns `true` if `range` lies within the member-list table.
    pub fn contains_member_list(&self, range: MemberRange) -> bool {
        range.is_empty() || range.end() <= self.member_lists.len()
    }

    /// View the tree rooted at `root`.
    #[inline]
    pub fn tree(&self, root: NodeId) -> ExprRef<'_> {
        ExprRef::new(self, root)
    }
}

/// A borrowed expression tree: an arena and the root node to start from.
///
/// A root of `NodeId::INVALID` denotes an absent expression.
#[derive(Copy, Clone, Debug)]
pub struct ExprRef<'a> {
    pub arena: &'a ExprArena,
    pub root: NodeId,
}

impl<'a> ExprRef<'a> {
    #[inline]
    pub fn new(arena: &'a ExprArena, root: NodeId) -> Self {
        ExprRef { arena, root }
    }

    /// An absent expression.
    #[inline]
    pub fn absent(arena: &'a ExprArena) -> Self {
        ExprRef {
            arena,
            root: NodeId::INVALID,
        }
    }

    /// Returns `true` if there is no expression.
    #[inline]
    pub fn is_absent(&self) -> bool {
        !self.root.is_valid()
    }
}
