//! Ordered collection tests.

use muster_foundation::{ArgList, ArgMap, Value};

#[test]
fn map_preserves_insertion_order() {
    let mut map = ArgMap::new();
    map.insert("zeta", Value::Int(1));
    map.insert("alpha", Value::Int(2));
    map.insert("mid", Value::Int(3));

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn map_overwrite_keeps_position() {
    let mut map = ArgMap::new();
    map.insert("a", Value::Int(1));
    map.insert("b", Value::Int(2));
    map.insert("a", Value::Int(10));

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(map.get("a"), Some(&Value::Int(10)));
    assert_eq!(map.len(), 2);
}

#[test]
fn map_lookup_and_membership() {
    let mut map = ArgMap::new();
    assert!(map.is_empty());
    map.insert("item", Value::from("axe"));
    assert!(map.contains_key("item"));
    assert!(!map.contains_key("amount"));
    assert_eq!(map.get("missing"), None);
}

#[test]
fn map_from_iterator() {
    let map: ArgMap = [
        ("x".to_string(), Value::Int(1)),
        ("y".to_string(), Value::Int(2)),
    ]
    .into_iter()
    .collect();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("y"), Some(&Value::Int(2)));
}

#[test]
fn list_order_and_access() {
    let mut list = ArgList::new();
    list.push(Value::Int(3));
    list.push(Value::Int(1));
    list.push(Value::Int(2));

    assert_eq!(list.len(), 3);
    assert_eq!(list.get(1), Some(&Value::Int(1)));
    let values: Vec<i64> = list.iter().filter_map(Value::as_int).collect();
    assert_eq!(values, vec![3, 1, 2]);
}
