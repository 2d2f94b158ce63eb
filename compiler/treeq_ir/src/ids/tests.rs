use super::*;

#[test]
fn test_node_id_valid() {
    let id = NodeId::new(42);
    assert!(id.is_valid());
    assert_eq!(id.index(), 42);
    assert_eq!(id.present(), Some(id));
}

#[test]
fn test_node_id_invalid() {
    assert!(!NodeId::INVALID.is_valid());
    assert!(!NodeId::default().is_valid());
    assert_eq!(NodeId::INVALID.present(), None);
}

#[test]
fn test_node_id_debug() {
    assert_eq!(format!("{:?}", NodeId::new(3)), "NodeId(3)");
    assert_eq!(format!("{:?}", NodeId::INVALID), "NodeId::INVALID");
}

#[test]
fn test_node_range() {
    let range = NodeRange::new(10, 5);
    assert!(!range.is_empty());
    assert_eq!(range.len(), 5);
    assert_eq!(range.end(), 15);
    assert_eq!(format!("{range:?}"), "NodeRange(10..15)");
}

#[test]
fn test_ranges_empty() {
    assert!(NodeRange::EMPTY.is_empty());
    assert!(NodeRange::default().is_empty());
    assert!(MemberRange::EMPTY.is_empty());
    assert!(MemberRange::default().is_empty());
}

#[test]
fn test_handles_compare_by_identity() {
    assert_eq!(MethodId::new(7), MethodId::new(7));
    assert_ne!(MethodId::new(7), MethodId::new(8));
    assert_eq!(MemberId::new(1).raw(), 1);
    assert_eq!(format!("{:?}", CtorId::new(4)), "CtorId(4)");
}

#[test]
fn test_node_id_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(NodeId::new(1));
    set.insert(NodeId::new(1)); // duplicate
    set.insert(NodeId::new(2));
    assert_eq!(set.len(), 2);
}
