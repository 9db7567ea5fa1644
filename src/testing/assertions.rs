//! Assertion functions for testing collection outputs.
//!
//! Everything here is order-sensitive: collections promise a deterministic
//! entry order, so tests should hold them to it.

use crate::collection::Collection;
use crate::items::Shape;
use std::fmt::Debug;

/// Assert that two value lists are equal in order and content.
///
/// # Panics
///
/// Panics if the lists differ in length or content.
///
/// # Example
///
/// ```
/// use ironcollect::testing::assert_collections_equal;
///
/// let actual = vec![1, 2, 3];
/// let expected = vec![1, 2, 3];
/// assert_collections_equal(&actual, &expected);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that a collection's keys are exactly `expected`, in order.
///
/// Sequence keys are their positions (`"0"`, `"1"`, ...).
///
/// # Panics
///
/// Panics if the key lists differ.
///
/// # Example
///
/// ```
/// use ironcollect::Collection;
/// use ironcollect::testing::assert_keys_in_order;
///
/// let c = Collection::from_pairs([("b", 1), ("a", 2)]);
/// assert_keys_in_order(&c, &["b", "a"]);
/// ```
pub fn assert_keys_in_order<T>(collection: &Collection<T>, expected: &[&str]) {
    let actual = collection.keys().to_vec();
    assert!(
        actual.iter().map(String::as_str).eq(expected.iter().copied()),
        "Key order mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert the shape of a collection.
///
/// # Panics
///
/// Panics if the shape differs.
pub fn assert_shape<T>(collection: &Collection<T>, expected: Shape) {
    assert_eq!(
        collection.shape(),
        expected,
        "Shape mismatch:\n  Expected: {expected:?}\n  Actual: {:?}",
        collection.shape()
    );
}

/// Assert that every value satisfies `pred`.
///
/// # Panics
///
/// Panics on the first value that fails, reporting its key.
pub fn assert_all<T, F>(collection: &Collection<T>, mut pred: F)
where
    T: Debug,
    F: FnMut(&T) -> bool,
{
    for (key, value) in collection.entries() {
        assert!(pred(value), "Predicate failed at key {key}: {value:?}");
    }
}
