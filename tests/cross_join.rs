use ironcollect::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn tuples(c: &Collection<Vec<Value>>) -> Value {
    Value::Array(c.iter().cloned().map(Value::Array).collect())
}

#[test]
fn cross_join_with_one_list() {
    let joined = Collection::of(json!([1, 2])).cross_join([json!(["a", "b"])]);
    assert_eq!(
        tuples(&joined),
        json!([[1, "a"], [1, "b"], [2, "a"], [2, "b"]])
    );
}

#[test]
fn cross_join_with_collections_and_lists() {
    let letters = Collection::of(json!(["a", "b"]));
    let joined = Collection::of(json!([1, 2]))
        .cross_join([letters.into_items(), json!(["I", "II"]).normalize()]);

    assert_eq!(
        tuples(&joined),
        json!([
            [1, "a", "I"], [1, "a", "II"],
            [1, "b", "I"], [1, "b", "II"],
            [2, "a", "I"], [2, "a", "II"],
            [2, "b", "I"], [2, "b", "II"],
        ])
    );
}

#[test]
fn cross_join_cardinality_is_the_product_of_sizes() {
    let joined = Collection::of(vec![1, 2, 3]).cross_join([vec![10, 20], vec![100, 200, 300, 400]]);
    assert_eq!(joined.count(), 3 * 2 * 4);
    assert_eq!(joined.first(), Some(&vec![1, 10, 100]));
    assert_eq!(joined.last(), Some(&vec![3, 20, 400]));
}

#[test]
fn cross_join_with_an_empty_list_is_empty() {
    let joined = Collection::of(vec![1, 2]).cross_join([Vec::<i32>::new()]);
    assert!(joined.is_empty());
}

#[test]
fn cross_join_with_nothing_yields_singletons() {
    let joined = Collection::of(vec![1, 2]).cross_join(Vec::<Vec<i32>>::new());
    assert_eq!(joined.to_vec(), vec![vec![1], vec![2]]);
}

#[test]
fn cross_join_uses_mapping_values() {
    let sizes = Collection::from_pairs([("small", "S"), ("large", "L")]);
    let joined = Collection::of(vec!["tee"]).cross_join([sizes]);
    assert_eq!(joined.to_vec(), vec![vec!["tee", "S"], vec!["tee", "L"]]);
}
