use super::*;

#[test]
fn test_primitive_types() {
    assert!(TypeId::OBJECT.is_primitive());
    assert!(TypeId::VOID.is_primitive());
    assert!(TypeId::BOOL.is_primitive());
    assert!(TypeId::INT.is_primitive());
    assert!(TypeId::LONG.is_primitive());
    assert!(TypeId::DOUBLE.is_primitive());
    assert!(TypeId::CHAR.is_primitive());
    assert!(TypeId::STRING.is_primitive());
}

#[test]
fn test_user_types() {
    let point = TypeId::user(0);
    assert!(!point.is_primitive());
    assert_eq!(point.raw(), TypeId::FIRST_USER);
    assert_ne!(TypeId::user(0), TypeId::user(1));
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", TypeId::INT), "TypeId(int)");
    assert_eq!(format!("{:?}", TypeId::user(2)), "TypeId(user 2)");
}

#[test]
fn test_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(TypeId::INT);
    set.insert(TypeId::INT); // duplicate
    set.insert(TypeId::DOUBLE);
    assert_eq!(set.len(), 2);
}
