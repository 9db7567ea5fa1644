use ironcollect::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[test]
fn iterates_values_in_order() {
    let mut result = String::new();
    for item in &Collection::of(vec![1, 2, 3, 4, 5]) {
        result.push_str(&item.to_string());
    }
    assert_eq!(result, "12345");
}

#[test]
fn iterates_records() {
    let clubs = Collection::of(json!([
        { "name": "Liverpool" },
        { "name": "Arsenal" },
        { "name": "Chelsea" },
    ]));

    let mut seen: Vec<Value> = Vec::new();
    for club in &clubs {
        seen.push(club.clone());
    }
    assert_eq!(seen, clubs.to_vec());
}

#[test]
fn mapping_iteration_follows_insertion_order() {
    let c = Collection::from_pairs([("z", 1), ("a", 2), ("m", 3)]);
    assert_eq!(c.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(c.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn has_next_reports_remaining_values() {
    let c = Collection::of(vec!["a", "b"]);
    let mut it = c.iter();
    assert!(it.has_next());
    assert_eq!(it.next(), Some(&"a"));
    assert!(it.has_next());
    assert_eq!(it.next(), Some(&"b"));
    assert!(!it.has_next());
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);

    let mut owned = Collection::from_pairs([("k", 1)]).into_iter();
    assert!(owned.has_next());
    assert_eq!(owned.next(), Some(1));
    assert!(!owned.has_next());
}

#[test]
fn empty_collection_yields_nothing() {
    let c: Collection<i32> = Collection::new();
    assert!(!c.iter().has_next());
    assert_eq!(c.entries().count(), 0);
}

#[test]
fn entries_pair_keys_with_values() {
    let seq = Collection::of(vec!["x", "y"]);
    let keys: Vec<String> = seq.entries().map(|(k, _)| k.to_string()).collect();
    assert_eq!(keys, vec!["0", "1"]);

    let map = Collection::from_pairs([("name", "Sadio Mané"), ("club", "Liverpool")]);
    let pairs: Vec<(String, &str)> = map.entries().map(|(k, v)| (k.to_string(), *v)).collect();
    assert_eq!(
        pairs,
        vec![
            ("name".to_string(), "Sadio Mané"),
            ("club".to_string(), "Liverpool"),
        ]
    );
    assert_eq!(map.entries().len(), 2);
}
