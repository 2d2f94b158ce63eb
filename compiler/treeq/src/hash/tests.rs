use treeq_ir::{
    BinaryOp, ConstValue, CtorId, ExprBuilder, MemberId, MethodId, OperatorInfo, TypeId,
};

use super::*;
use crate::structurally_equal;

fn build(f: impl FnOnce(&mut ExprBuilder<'_>) -> NodeId) -> (ExprArena, NodeId) {
    let mut arena = ExprArena::new();
    let root = f(&mut ExprBuilder::new(&mut arena));
    (arena, root)
}

fn hash_of(f: impl FnOnce(&mut ExprBuilder<'_>) -> NodeId) -> u64 {
    let (arena, root) = build(f);
    hash_tree(arena.tree(root))
}

#[test]
fn same_tree_same_hash() {
    let sum = |b: &mut ExprBuilder<'_>| {
        let i = b.param("i", TypeId::INT);
        let one = b.int(1);
        b.binary(BinaryOp::Add, i, one, TypeId::INT)
    };
    assert_eq!(hash_of(sum), hash_of(sum));
}

#[test]
fn different_value_different_hash() {
    assert_ne!(hash_of(|b| b.int(42)), hash_of(|b| b.int(43)));
}

#[test]
fn different_type_different_hash() {
    assert_ne!(
        hash_of(|b| b.constant(ConstValue::Int(1), TypeId::INT)),
        hash_of(|b| b.constant(ConstValue::Int(1), TypeId::LONG))
    );
}

#[test]
fn arena_position_does_not_affect_hash() {
    let compact = hash_of(|b| b.int(7));
    let padded = hash_of(|b| {
        for n in 0..10 {
            b.int(n);
        }
        b.int(7)
    });
    assert_eq!(compact, padded);
}

#[test]
fn absent_tree_hashes_to_sentinel() {
    let empty = ExprArena::new();
    let mut other = ExprArena::new();
    ExprBuilder::new(&mut other).int(1);

    assert_eq!(hash_tree(ExprRef::absent(&empty)), hash_tree(ExprRef::absent(&other)));
    let mut sentinel = FxHasher::default();
    u32::MAX.hash(&mut sentinel);
    assert_eq!(hash_tree(ExprRef::absent(&empty)), sentinel.finish());
}

#[test]
fn operator_affects_hash() {
    let with = |op: BinaryOp, operator: OperatorInfo| {
        move |b: &mut ExprBuilder<'_>| {
            let x = b.param("x", TypeId::INT);
            let y = b.param("y", TypeId::INT);
            b.binary_with(op, x, y, operator, TypeId::INT)
        }
    };
    let add = hash_of(with(BinaryOp::Add, OperatorInfo::BUILTIN));
    assert_ne!(add, hash_of(with(BinaryOp::Subtract, OperatorInfo::BUILTIN)));
    assert_ne!(add, hash_of(with(BinaryOp::Add, OperatorInfo::lifted(false))));
    assert_ne!(
        add,
        hash_of(with(
            BinaryOp::Add,
            OperatorInfo::user_defined(MethodId::new(1))
        ))
    );
}

#[test]
fn child_order_affects_hash() {
    let call = |first: i64, second: i64| {
        move |b: &mut ExprBuilder<'_>| {
            let one = b.int(first);
            let two = b.int(second);
            b.call(None, MethodId::new(0), &[one, two], TypeId::INT)
        }
    };
    assert_ne!(hash_of(call(1, 2)), hash_of(call(2, 1)));
}

#[test]
fn list_split_affects_hash() {
    let (f, g) = (MethodId::new(0), MethodId::new(1));
    let flat = hash_of(|b| {
        let inner = b.call(None, g, &[], TypeId::INT);
        let x = b.param("x", TypeId::INT);
        b.call(None, f, &[inner, x], TypeId::INT)
    });
    let nested = hash_of(|b| {
        let x = b.param("x", TypeId::INT);
        let inner = b.call(None, g, &[x], TypeId::INT);
        b.call(None, f, &[inner], TypeId::INT)
    });
    assert_ne!(flat, nested);
}

#[test]
fn bound_members_affect_hash() {
    let anonymous = |members: [MemberId; 2]| {
        move |b: &mut ExprBuilder<'_>| {
            let x = b.int(1);
            let y = b.int(2);
            b.new_object(Some(CtorId::new(0)), &[x, y], &members, TypeId::user(3))
        }
    };
    let (x, y) = (MemberId::new(0), MemberId::new(1));
    assert_eq!(hash_of(anonymous([x, y])), hash_of(anonymous([x, y])));
    assert_ne!(hash_of(anonymous([x, y])), hash_of(anonymous([y, x])));
}

#[test]
fn equal_trees_hash_equal_across_kinds() {
    let tree = |b: &mut ExprBuilder<'_>| {
        let o = b.param("o", TypeId::OBJECT);
        let test = b.type_is(o, TypeId::STRING);
        let p = b.param("p", TypeId::user(4));
        let field = b.member(Some(p), MemberId::new(2), TypeId::INT);
        let zero = b.float(0.0);
        let arr = b.new_array(&[zero], TypeId::user(5));
        let len = b.unary(treeq_ir::UnaryOp::ArrayLength, arr, TypeId::INT);
        let body = b.conditional(test, field, len, TypeId::INT);
        let decl_o = b.param("o", TypeId::OBJECT);
        let decl_p = b.param("p", TypeId::user(4));
        b.lambda(body, &[decl_o, decl_p], TypeId::user(6))
    };
    let (left, l) = build(tree);
    let (right, r) = build(tree);

    assert!(structurally_equal(left.tree(l), right.tree(r)));
    assert_eq!(hash_tree(left.tree(l)), hash_tree(right.tree(r)));
}

#[test]
fn float_hash_follows_bits() {
    assert_eq!(hash_of(|b| b.float(f64::NAN)), hash_of(|b| b.float(f64::NAN)));
    assert_ne!(hash_of(|b| b.float(0.0)), hash_of(|b| b.float(-0.0)));
}

#[test]
fn deep_tree_does_not_overflow() {
    let hash = hash_of(|b| {
        let mut acc = b.param("x", TypeId::BOOL);
        for _ in 0..50_000 {
            acc = b.unary(treeq_ir::UnaryOp::Not, acc, TypeId::BOOL);
        }
        acc
    });
    assert_ne!(hash, 0);
}
