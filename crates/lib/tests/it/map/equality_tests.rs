//! Equality, hashing and duplication of OrderedMaps.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use ordered_hash::OrderedMap;
use ordered_hash::document::Value;

use crate::helpers::*;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_equality_is_order_sensitive() {
    let ab = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    let ba = OrderedMap::from_pairs([("b", 2), ("a", 1)]);

    assert_ne!(ab, ba);
    assert_eq!(ab, OrderedMap::from_pairs([("a", 1), ("b", 2)]));
}

#[test]
fn test_equality_compares_values() {
    let one = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    let other = OrderedMap::from_pairs([("a", 1), ("b", 3)]);

    assert_ne!(one, other);
}

#[test]
fn test_equality_with_different_lengths() {
    let short = OrderedMap::from_pairs([("a", 1)]);
    let long = OrderedMap::from_pairs([("a", 1), ("b", 2)]);

    assert_ne!(short, long);
    assert_ne!(long, short);
}

#[test]
fn test_equality_after_reorder_through_delete() {
    let mut map = setup_abcd();
    let original = setup_abcd();

    let value = map.delete("a").unwrap();
    map.set("a".to_string(), value);

    // Same pairs, different order
    assert_ne!(map, original);
}

#[test]
fn test_equals_any_rejects_foreign_types() {
    let map = OrderedMap::from_pairs([("a".to_string(), 1)]);

    assert!(!map.equals_any(&42));
    assert!(!map.equals_any(&"a"));

    let plain: HashMap<String, i32> = HashMap::from([("a".to_string(), 1)]);
    assert!(!map.equals_any(&plain));

    // Same pairs but a different value type is a different map type
    let other_type = OrderedMap::from_pairs([("a".to_string(), 1_i64)]);
    assert!(!map.equals_any(&other_type));

    assert!(map.equals_any(&map.clone()));
}

#[test]
fn test_uncomparable_values_make_maps_unequal() {
    let with_nan = OrderedMap::from_pairs([("x".to_string(), Value::Double(f64::NAN))]);

    assert_ne!(with_nan, with_nan.clone());
    assert!(!with_nan.equals_any(&with_nan.clone()));
}

#[test]
fn test_hash_consistent_with_equality() {
    let one = setup_abcd();
    let two = setup_abcd();
    assert_eq!(hash_of(&one), hash_of(&two));

    let reordered = OrderedMap::from_pairs([
        ("b".to_string(), 2),
        ("a".to_string(), 1),
        ("c".to_string(), 3),
        ("d".to_string(), 4),
    ]);
    assert_ne!(one, reordered);

    let mut set = HashSet::new();
    set.insert(one);
    assert!(set.contains(&two));
    assert!(!set.contains(&reordered));
}

#[test]
fn test_clone_is_independent() {
    let original = setup_abcd();
    let mut copy = original.clone();

    copy.set("e".to_string(), 5);
    copy.delete("a");
    copy.set("b".to_string(), 20);

    assert_eq!(keys_of(&original), vec!["a", "b", "c", "d"]);
    assert_entries(&original, &[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    assert_entries(&copy, &[("b", 20), ("c", 3), ("d", 4), ("e", 5)]);
}

#[test]
fn test_clone_preserves_order_and_equality() {
    let mut map = setup_abcd();
    map.delete("b");
    map.set("b".to_string(), 2);

    let copy = map.clone();
    assert_eq!(copy, map);
    assert_eq!(keys_of(&copy), vec!["a", "c", "d", "b"]);
}

#[test]
fn test_clone_shares_reference_counted_values() {
    let shared = Rc::new(String::from("payload"));
    let original = OrderedMap::from_pairs([("k", Rc::clone(&shared))]);

    let copy = original.clone();

    // The copy holds the same allocation rather than a deep copy
    assert!(Rc::ptr_eq(&original["k"], &copy["k"]));
    assert_eq!(Rc::strong_count(&shared), 3);
}
