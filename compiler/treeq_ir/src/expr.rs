//! Expression Node Types
//!
//! `ExprKind` carries each node's payload: child references plus the
//! non-child attributes that structural equality compares. `NodeKind` is the
//! payload-free discriminant that answers "what kind of node is this".
//!
//! # Design Notes
//! - No `Box<ExprKind>`, children are `NodeId(u32)` indices
//! - Child lists and bound-member lists live in arena side tables
//! - Every type is `Copy + Eq + Hash` so the arena can store them in plain vectors

use std::fmt;

use crate::{CtorId, MemberId, MemberRange, MethodId, Name, NodeId, NodeRange, TypeId};

/// Expression node: kind plus static type.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprNode {
    pub kind: ExprKind,
    pub ty: TypeId,
}

impl ExprNode {
    pub fn new(kind: ExprKind, ty: TypeId) -> Self {
        ExprNode { kind, ty }
    }
}

impl fmt::Debug for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} : {:?}", self.kind, self.ty)
    }
}

/// Literal value of a `Constant` node.
///
/// Equality is value equality. Floats compare by bit pattern, so `NaN`
/// equals an identically encoded `NaN` and `0.0` differs from `-0.0`; this
/// keeps equality and hashing in agreement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstValue {
    Null,
    Bool(bool),
    Int(i64),
    /// IEEE 754 bits of an `f64`.
    Float(u64),
    Char(char),
    Str(Name),
}

impl ConstValue {
    /// Build a float literal from its value.
    #[inline]
    pub fn float(value: f64) -> Self {
        ConstValue::Float(value.to_bits())
    }

    /// The float value, if this is a float literal.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            ConstValue::Float(bits) => Some(f64::from_bits(bits)),
            _ => None,
        }
    }
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    AddChecked,
    Subtract,
    SubtractChecked,
    Multiply,
    MultiplyChecked,
    Divide,
    Modulo,
    Power,

    // Comparison
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,

    // Logical (short-circuiting)
    AndAlso,
    OrElse,

    // Bitwise
    And,
    Or,
    ExclusiveOr,
    LeftShift,
    RightShift,

    // Other
    Coalesce,
    ArrayIndex,
}

impl BinaryOp {
    /// Returns the conventional source symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add | Self::AddChecked => "+",
            Self::Subtract | Self::SubtractChecked => "-",
            Self::Multiply | Self::MultiplyChecked => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "**",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::AndAlso => "&&",
            Self::OrElse => "||",
            Self::And => "&",
            Self::Or => "|",
            Self::ExclusiveOr => "^",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::Coalesce => "??",
            Self::ArrayIndex => "[]",
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Negate,
    NegateChecked,
    UnaryPlus,
    Not,
    /// Conversion to the node's static type.
    Convert,
    ConvertChecked,
    /// `operand as T`, where `T` is the node's static type.
    TypeAs,
    ArrayLength,
    Quote,
}

/// Operator metadata shared by binary and unary nodes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatorInfo {
    /// User-defined operator implementation, `None` for built-in operators.
    pub method: Option<MethodId>,
    /// Operands are nullable and the operator is lifted over them.
    pub is_lifted: bool,
    /// The lifted operator's result is itself nullable.
    pub is_lifted_to_null: bool,
}

impl OperatorInfo {
    /// A built-in, non-lifted operator.
    pub const BUILTIN: OperatorInfo = OperatorInfo {
        method: None,
        is_lifted: false,
        is_lifted_to_null: false,
    };

    /// A built-in operator lifted over nullable operands.
    pub const fn lifted(to_null: bool) -> Self {
        OperatorInfo {
            method: None,
            is_lifted: true,
            is_lifted_to_null: to_null,
        }
    }

    /// A user-defined operator implemented by `method`.
    pub const fn user_defined(method: MethodId) -> Self {
        OperatorInfo {
            method: Some(method),
            is_lifted: false,
            is_lifted_to_null: false,
        }
    }
}

/// Expression variants.
///
/// Child slots are `NodeId`s; optional slots use `NodeId::INVALID`.
/// The positional order children are visited in is defined once, by
/// [`children`](crate::children).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// Literal value.
    Constant(ConstValue),

    /// Field or property read: `target.member`.
    /// `target` is `INVALID` for static members.
    MemberAccess { target: NodeId, member: MemberId },

    /// Method invocation: `target.method(args)`.
    /// `target` is `INVALID` for static methods.
    MethodCall {
        target: NodeId,
        method: MethodId,
        args: NodeRange,
    },

    /// Reference to a lambda parameter, identified by its declared name.
    Parameter { name: Name },

    /// Type test: `operand is type_operand`.
    TypeIs { operand: NodeId, type_operand: TypeId },

    /// Binary operation.
    Binary {
        op: BinaryOp,
        left: NodeId,
        right: NodeId,
        operator: OperatorInfo,
    },

    /// Unary operation.
    Unary {
        op: UnaryOp,
        operand: NodeId,
        operator: OperatorInfo,
    },

    /// Constructor call. `ctor` is `None` for parameterless value-type
    /// construction. `members` lists the members bound by each argument,
    /// positionally, for anonymous-object style construction.
    New {
        ctor: Option<CtorId>,
        args: NodeRange,
        members: MemberRange,
    },

    /// `test ? if_true : if_false`
    Conditional {
        test: NodeId,
        if_true: NodeId,
        if_false: NodeId,
    },

    /// Delegate or lambda invocation: `callee(args)`.
    Invoke { callee: NodeId, args: NodeRange },

    /// Lambda: `(params) => body`. `params` are `Parameter` nodes.
    Lambda { body: NodeId, params: NodeRange },

    /// Array construction from element values: `new[] { elements }`.
    NewArrayInit { elements: NodeRange },

    /// Array construction from dimension sizes: `new T[bounds]`.
    NewArrayBounds { bounds: NodeRange },
}

impl ExprKind {
    /// The payload-free discriminant of this node.
    #[inline]
    pub const fn node_kind(&self) -> NodeKind {
        match *self {
            ExprKind::Constant(_) => NodeKind::Constant,
            ExprKind::MemberAccess { .. } => NodeKind::MemberAccess,
            ExprKind::MethodCall { .. } => NodeKind::MethodCall,
            ExprKind::Parameter { .. } => NodeKind::Parameter,
            ExprKind::TypeIs { .. } => NodeKind::TypeIs,
            ExprKind::Binary { op, .. } => NodeKind::Binary(op),
            ExprKind::Unary { op, .. } => NodeKind::Unary(op),
            ExprKind::New { .. } => NodeKind::New,
            ExprKind::Conditional { .. } => NodeKind::Conditional,
            ExprKind::Invoke { .. } => NodeKind::Invoke,
            ExprKind::Lambda { .. } => NodeKind::Lambda,
            ExprKind::NewArrayInit { .. } => NodeKind::NewArrayInit,
            ExprKind::NewArrayBounds { .. } => NodeKind::NewArrayBounds,
        }
    }
}

/// What a node represents, without its payload.
///
/// Operators are part of the kind: `a + b` and `a - b` are different kinds
/// of node, while the operator-implementation details (`OperatorInfo`) are
/// attributes compared separately.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Constant,
    MemberAccess,
    MethodCall,
    Parameter,
    TypeIs,
    Binary(BinaryOp),
    Unary(UnaryOp),
    New,
    Conditional,
    Invoke,
    Lambda,
    NewArrayInit,
    NewArrayBounds,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Binary(op) => write!(f, "Binary({})", op.as_symbol()),
            NodeKind::Unary(op) => write!(f, "Unary({op:?})"),
            other => fmt::Debug::fmt(other, f),
        }
    }
}
