//! Mutation of OrderedMaps: set, delete, clear and replace, and how each one
//! affects insertion order.

use std::collections::HashMap;

use ordered_hash::OrderedMap;

use crate::helpers::*;

#[test]
fn test_set_records_first_occurrence_order() {
    let mut map = OrderedMap::new();
    for (value, key) in ["c", "a", "c", "b", "a", "d", "b"].into_iter().enumerate() {
        map.set(key.to_string(), value as i32);
    }

    assert_eq!(keys_of(&map), vec!["c", "a", "b", "d"]);
    assert_entries(&map, &[("c", 2), ("a", 4), ("b", 6), ("d", 5)]);
}

#[test]
fn test_set_returns_previous_value() {
    let mut map = OrderedMap::new();

    assert_eq!(map.set("key", "original"), None);
    assert_eq!(map.set("key", "modified"), Some("original"));
    assert_eq!(map.get("key"), Some(&"modified"));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_update_in_place_does_not_reorder() {
    let mut map = setup_abcd();

    map.set("b".to_string(), 20);
    map.set("b".to_string(), 200);
    map.set("e".to_string(), 5);

    assert_entries(
        &map,
        &[("a", 1), ("b", 200), ("c", 3), ("d", 4), ("e", 5)],
    );
}

#[test]
fn test_get_mut_does_not_reorder() {
    let mut map = setup_abcd();

    if let Some(value) = map.get_mut("a") {
        *value *= 10;
    }
    assert!(map.get_mut("missing").is_none());

    assert_entries(&map, &[("a", 10), ("b", 2), ("c", 3), ("d", 4)]);
}

#[test]
fn test_delete_returns_value_and_removes_from_order() {
    let mut map = setup_abcd();

    assert_eq!(map.delete("b"), Some(2));
    assert!(!map.contains_key("b"));
    assert_eq!(map.get("b"), None);
    assert_entries(&map, &[("a", 1), ("c", 3), ("d", 4)]);
}

#[test]
fn test_delete_absent_key_is_noop() {
    let mut map = setup_abcd();

    assert_eq!(map.delete("zzz"), None);
    assert_entries(&map, &[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);

    let mut empty: OrderedMap<String, i32> = OrderedMap::new();
    assert_eq!(empty.delete("a"), None);
    assert!(empty.is_empty());
}

#[test]
fn test_delete_then_set_moves_key_to_end() {
    let mut map = setup_abcd();

    map.delete("a");
    map.set("a".to_string(), 100);

    assert_entries(&map, &[("b", 2), ("c", 3), ("d", 4), ("a", 100)]);
    assert_eq!(map.position("a"), Some(3));
}

#[test]
fn test_position_reports_order_index() {
    let map = setup_abcd();

    assert_eq!(map.position("a"), Some(0));
    assert_eq!(map.position("d"), Some(3));
    assert_eq!(map.position("nope"), None);
}

#[test]
fn test_index_by_key() {
    let map = setup_abcd();
    assert_eq!(map["c"], 3);
}

#[test]
#[should_panic]
fn test_index_missing_key_panics() {
    let map = setup_abcd();
    let _value = map["missing"];
}

#[test]
fn test_clear_empties_store_and_order() {
    let mut map = setup_abcd();

    map.clear();
    assert!(map.is_empty());
    assert!(map.ordered_keys().is_empty());
    assert_eq!(map.get("a"), None);

    // Order starts fresh after clear
    map.set("d".to_string(), 1);
    map.set("a".to_string(), 2);
    assert_entries(&map, &[("d", 1), ("a", 2)]);
}

#[test]
fn test_replace_adopts_source_entries_and_order() {
    let mut map = setup_abcd();
    let source = OrderedMap::from_pairs([("z".to_string(), 26), ("b".to_string(), 20)]);

    map.replace(&source);

    assert_entries(&map, &[("z", 26), ("b", 20)]);
    assert!(!map.contains_key("a"));
}

#[test]
fn test_replace_with_pair_list_and_hashmap() {
    let mut map = setup_abcd();

    map.replace(&vec![("y".to_string(), 1), ("x".to_string(), 2)]);
    assert_entries(&map, &[("y", 1), ("x", 2)]);

    let source: HashMap<String, i32> = HashMap::from([("only".to_string(), 7)]);
    map.replace(&source);
    assert_entries(&map, &[("only", 7)]);
}

#[test]
fn test_extend_appends_new_keys_and_updates_existing() {
    let mut map = setup_abcd();

    map.extend([("e".to_string(), 5), ("a".to_string(), 11)]);

    assert_entries(&map, &[("a", 11), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]);
}
