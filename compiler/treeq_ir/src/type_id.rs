//! Static type identifier.
//!
//! Every expression node records the type it evaluates to. Types are owned by
//! the caller's type registry; trees only store and compare `TypeId`s.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of a static type.
///
/// # Pre-interned Types
/// Common primitive types have fixed indices below [`TypeId::FIRST_USER`] so
/// that independently built trees agree on them without a shared registry.
/// Registries hand out IDs from `FIRST_USER` upwards for everything else
/// (classes, nullable wrappers, delegate types, ...).
#[derive(Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub const OBJECT: TypeId = TypeId(0);
    pub const VOID: TypeId = TypeId(1);
    pub const BOOL: TypeId = TypeId(2);
    pub const INT: TypeId = TypeId(3);
    pub const LONG: TypeId = TypeId(4);
    pub const DOUBLE: TypeId = TypeId(5);
    pub const CHAR: TypeId = TypeId(6);
    pub const STRING: TypeId = TypeId(7);

    /// First ID available to caller-defined types.
    pub const FIRST_USER: u32 = 8;

    /// Create a `TypeId` from a raw value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    /// Create the `n`th caller-defined type.
    #[inline]
    pub const fn user(n: u32) -> Self {
        TypeId(Self::FIRST_USER + n)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is one of the pre-interned primitive types.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::FIRST_USER
    }

    /// Short name for pre-interned types.
    pub const fn primitive_name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("object"),
            1 => Some("void"),
            2 => Some("bool"),
            3 => Some("int"),
            4 => Some("long"),
            5 => Some("double"),
            6 => Some("char"),
            7 => Some("string"),
            _ => None,
        }
    }
}

impl Hash for TypeId {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.primitive_name() {
            Some(name) => write!(f, "TypeId({name})"),
            None => write!(f, "TypeId(user {})", self.0 - Self::FIRST_USER),
        }
    }
}

#[cfg(test)]
mod tests;
