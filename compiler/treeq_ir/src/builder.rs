//! Convenience constructors for expression trees.
//!
//! Trees are built bottom-up: children first, then the node that refers to
//! them. Each method allocates one node (plus any list it needs) and returns
//! its ID. Names are interned through the arena's own interner.
//!
//! Lists (arguments, elements, parameters, bound members) are stored with a
//! `u16` length: the list-taking methods panic on more than 65,535 entries.
//!
//! ```text
//! // i => i + 1
//! let mut b = ExprBuilder::new(&mut arena);
//! let i = b.param("i", TypeId::INT);
//! let one = b.int(1);
//! let body = b.binary(BinaryOp::Add, i, one, TypeId::INT);
//! let decl = b.param("i", TypeId::INT);
//! let lambda = b.lambda(body, &[decl], func_int_int);
//! ```

use crate::{
    BinaryOp, ConstValue, CtorId, ExprArena, ExprKind, MemberId, MethodId, NodeId, OperatorInfo,
    TypeId, UnaryOp,
};

/// Builds nodes into an arena, interning names as it goes.
pub struct ExprBuilder<'a> {
    arena: &'a mut ExprArena,
}

impl<'a> ExprBuilder<'a> {
    pub fn new(arena: &'a mut ExprArena) -> Self {
        ExprBuilder { arena }
    }

    /// The arena being built into.
    pub fn arena(&self) -> &ExprArena {
        self.arena
    }

    // Leaves

    pub fn constant(&mut self, value: ConstValue, ty: TypeId) -> NodeId {
        self.arena.alloc(ExprKind::Constant(value), ty)
    }

    pub fn int(&mut self, value: i64) -> NodeId {
        self.constant(ConstValue::Int(value), TypeId::INT)
    }

    pub fn float(&mut self, value: f64) -> NodeId {
        self.constant(ConstValue::float(value), TypeId::DOUBLE)
    }

    pub fn bool(&mut self, value: bool) -> NodeId {
        self.constant(ConstValue::Bool(value), TypeId::BOOL)
    }

    pub fn string(&mut self, value: &str) -> NodeId {
        let name = self.arena.interner().intern(value);
        self.constant(ConstValue::Str(name), TypeId::STRING)
    }

    pub fn null(&mut self, ty: TypeId) -> NodeId {
        self.constant(ConstValue::Null, ty)
    }

    pub fn param(&mut self, name: &str, ty: TypeId) -> NodeId {
        let name = self.arena.interner().intern(name);
        self.arena.alloc(ExprKind::Parameter { name }, ty)
    }

    // Access and calls

    /// `target.member`, or a static member when `target` is `None`.
    pub fn member(&mut self, target: Option<NodeId>, member: MemberId, ty: TypeId) -> NodeId {
        self.arena.alloc(
            ExprKind::MemberAccess {
                target: target.unwrap_or(NodeId::INVALID),
                member,
            },
            ty,
        )
    }

    /// `target.method(args)`, or a static call when `target` is `None`.
    ///
    /// # Panics
    /// Panics if `args` has more than `u16::MAX` entries.
    pub fn call(
        &mut self,
        target: Option<NodeId>,
        method: MethodId,
        args: &[NodeId],
        ty: TypeId,
    ) -> NodeId {
        let args = self.arena.push_expr_list(args);
        self.arena.alloc(
            ExprKind::MethodCall {
                target: target.unwrap_or(NodeId::INVALID),
                method,
                args,
            },
            ty,
        )
    }

    /// `callee(args)`.
    ///
    /// # Panics
    /// Panics if `args` has more than `u16::MAX` entries.
    pub fn invoke(&mut self, callee: NodeId, args: &[NodeId], ty: TypeId) -> NodeId {
        let args = self.arena.push_expr_list(args);
        self.arena.alloc(ExprKind::Invoke { callee, args }, ty)
    }

    // Operators

    pub fn type_is(&mut self, operand: NodeId, type_operand: TypeId) -> NodeId {
        self.arena.alloc(
            ExprKind::TypeIs {
                operand,
                type_operand,
            },
            TypeId::BOOL,
        )
    }

    /// Built-in, non-lifted binary operator.
    pub fn binary(&mut self, op: BinaryOp, left: NodeId, right: NodeId, ty: TypeId) -> NodeId {
        self.binary_with(op, left, right, OperatorInfo::BUILTIN, ty)
    }

    pub fn binary_with(
        &mut self,
        op: BinaryOp,
        left: NodeId,
        right: NodeId,
        operator: OperatorInfo,
        ty: TypeId,
    ) -> NodeId {
        self.arena.alloc(
            ExprKind::Binary {
                op,
                left,
                right,
                operator,
            },
            ty,
        )
    }

    /// Built-in, non-lifted unary operator.
    pub fn unary(&mut self, op: UnaryOp, operand: NodeId, ty: TypeId) -> NodeId {
        self.unary_with(op, operand, OperatorInfo::BUILTIN, ty)
    }

    pub fn unary_with(
        &mut self,
        op: UnaryOp,
        operand: NodeId,
        operator: OperatorInfo,
        ty: TypeId,
    ) -> NodeId {
        self.arena.alloc(
            ExprKind::Unary {
                op,
                operand,
                operator,
            },
            ty,
        )
    }

    pub fn conditional(
        &mut self,
        test: NodeId,
        if_true: NodeId,
        if_false: NodeId,
        ty: TypeId,
    ) -> NodeId {
        self.arena.alloc(
            ExprKind::Conditional {
                test,
                if_true,
                if_false,
            },
            ty,
        )
    }

    // Construction

    /// Constructor call. `members` is empty unless the constructor binds
    /// members positionally.
    ///
    /// # Panics
    /// Panics if `args` or `members` has more than `u16::MAX` entries.
    pub fn new_object(
        &mut self,
        ctor: Option<CtorId>,
        args: &[NodeId],
        members: &[MemberId],
        ty: TypeId,
    ) -> NodeId {
        let args = self.arena.push_expr_list(args);
        let members = self.arena.push_member_list(members);
        self.arena.alloc(ExprKind::New { ctor, args, members }, ty)
    }

    /// `new[] { elements }`.
    ///
    /// # Panics
    /// Panics if `elements` has more than `u16::MAX` entries.
    pub fn new_array(&mut self, elements: &[NodeId], ty: TypeId) -> NodeId {
        let elements = self.arena.push_expr_list(elements);
        self.arena.alloc(ExprKind::NewArrayInit { elements }, ty)
    }

    /// `new T[bounds]`.
    ///
    /// # Panics
    /// Panics if `bounds` has more than `u16::MAX` entries.
    pub fn new_array_bounds(&mut self, bounds: &[NodeId], ty: TypeId) -> NodeId {
        let bounds = self.arena.push_expr_list(bounds);
        self.arena.alloc(ExprKind::NewArrayBounds { bounds }, ty)
    }

    /// `(params) => body`. `params` must be nodes made with [`Self::param`].
    ///
    /// # Panics
    /// Panics if `params` has more than `u16::MAX` entries.
    pub fn lambda(&mut self, body: NodeId, params: &[NodeId], ty: TypeId) -> NodeId {
        let params = self.arena.push_expr_list(params);
        self.arena.alloc(ExprKind::Lambda { body, params }, ty)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{validate, SharedInterner};

    #[test]
    fn test_builds_valid_trees() {
        let mut arena = ExprArena::new();
        let mut b = ExprBuilder::new(&mut arena);

        let i = b.param("i", TypeId::INT);
        let one = b.int(1);
        let body = b.binary(BinaryOp::Add, i, one, TypeId::INT);
        let decl = b.param("i", TypeId::INT);
        let lambda = b.lambda(body, &[decl], TypeId::user(0));

        assert_eq!(b.arena().len(), 5);
        assert_eq!(validate(arena.tree(lambda)), Ok(()));
    }

    #[test]
    fn test_static_member_has_absent_target() {
        let mut arena = ExprArena::new();
        let mut b = ExprBuilder::new(&mut arena);

        let now = b.member(None, MemberId::new(0), TypeId::user(3));
        assert_eq!(
            *arena.kind(now),
            ExprKind::MemberAccess {
                target: NodeId::INVALID,
                member: MemberId::new(0)
            }
        );
    }

    #[test]
    fn test_strings_are_interned() {
        let mut arena = ExprArena::new();
        let mut b = ExprBuilder::new(&mut arena);

        let a = b.string("abc");
        let c = b.string("abc");
        assert_eq!(arena.kind(a), arena.kind(c));
        let ExprKind::Constant(ConstValue::Str(name)) = *arena.kind(a) else {
            panic!("expected a string constant");
        };
        assert_eq!(arena.name(name), "abc");
    }

    #[test]
    fn test_arenas_can_share_an_interner() {
        let shared = SharedInterner::new();
        let mut first = ExprArena::with_interner(shared.clone());
        let mut second = ExprArena::with_interner(shared);

        let x = ExprBuilder::new(&mut first).param("x", TypeId::INT);
        let y = ExprBuilder::new(&mut second).param("x", TypeId::INT);

        assert!(first.shares_interner(&second));
        assert!(!first.shares_interner(&ExprArena::new()));
        assert_eq!(first.kind(x), second.kind(y));
    }

    #[test]
    #[should_panic(expected = "expression list too long: 65536 exceeds u16::MAX")]
    fn test_oversized_list_panics() {
        let mut arena = ExprArena::new();
        let mut b = ExprBuilder::new(&mut arena);
        let zero = b.int(0);
        let args = vec![zero; usize::from(u16::MAX) + 1];
        b.call(None, MethodId::new(0), &args, TypeId::INT);
    }
}
