//! ID, range and handle newtypes for expression trees.
//!
//! `NodeId` and the range types index into [`ExprArena`](crate::ExprArena)
//! storage. `MemberId`, `MethodId` and `CtorId` are opaque handles assigned by
//! whatever metadata registry the caller uses to describe fields, properties,
//! methods and constructors; the trees only ever compare them for identity.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Index of an expression node in an [`ExprArena`](crate::ExprArena).
///
/// `NodeId::INVALID` marks an absent node: an empty optional child slot
/// (the target of a static call) or an absent root.
#[derive(Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel value indicating "no expression".
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Create a new `NodeId` from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` if this is a present (non-sentinel) node.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }

    /// `Some(self)` for a present node, `None` for the sentinel.
    #[inline]
    pub const fn present(self) -> Option<NodeId> {
        if self.is_valid() {
            Some(self)
        } else {
            None
        }
    }
}

impl Hash for NodeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INVALID {
            write!(f, "NodeId::INVALID")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// A contiguous range of node IDs in an arena's expression lists.
///
/// Used for argument lists, array elements and lambda parameters.
///
/// Layout: `start: u32, len: u16` = 8 bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct NodeRange {
    pub start: u32,
    pub len: u16,
}

impl NodeRange {
    /// Empty range constant.
    pub const EMPTY: Self = Self { start: 0, len: 0 };

    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        Self { start, len }
    }

    /// Returns `true` if the range contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements in the range.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// One past the last index covered by this range.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start as usize + self.len as usize
    }
}

impl fmt::Debug for NodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRange({}..{})", self.start, self.end())
    }
}

/// Range of bound members in an arena's member lists.
///
/// Used by `New` nodes that initialize members positionally (anonymous-object
/// style construction).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct MemberRange {
    pub start: u32,
    pub len: u16,
}

impl MemberRange {
    pub const EMPTY: Self = Self { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        Self { start, len }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.start as usize + self.len as usize
    }
}

impl fmt::Debug for MemberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemberRange({}..{})", self.start, self.end())
    }
}

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_handle!(
    /// A field or property.
    MemberId
);
define_handle!(
    /// A method, including user-defined operator implementations.
    MethodId
);
define_handle!(
    /// A constructor.
    CtorId
);

#[cfg(test)]
mod tests;
