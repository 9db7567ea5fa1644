//! Helpers for dynamically typed [`serde_json::Value`] items.
//!
//! - [`lookup`]: dot-path field access into records (`"owner.name"`)
//! - [`compare_values`]: a total order over values, used by `sort` on
//!   `Collection<Value>`
//! - [`values_equal`] and [`ValueEq`]: the equality keyed comparisons use
//! - [`GroupKey`]: the string label a value contributes when used as a
//!   grouping key

use crate::items::parse_index;
use ordered_float::OrderedFloat;
use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Follow a dot-separated path through nested objects and arrays.
///
/// Path segments index arrays when they parse as a position. An empty path
/// returns the value itself.
///
/// ```
/// use ironcollect::value::lookup;
/// use serde_json::json;
///
/// let record = json!({ "owner": { "name": "Ada", "tags": ["a", "b"] } });
/// assert_eq!(lookup(&record, "owner.name"), Some(&json!("Ada")));
/// assert_eq!(lookup(&record, "owner.tags.1"), Some(&json!("b")));
/// assert_eq!(lookup(&record, "owner.age"), None);
/// ```
#[must_use]
pub fn lookup<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    if path.is_empty() {
        return Some(value);
    }
    path.split('.').try_fold(value, |cur, segment| match cur {
        Value::Object(m) => m.get(segment),
        Value::Array(v) => parse_index(segment).and_then(|i| v.get(i)),
        _ => None,
    })
}

const fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order over JSON values.
///
/// Values of different kinds order as null < bool < number < string < array
/// < object. Numbers compare by magnitude with `NaN`-free total ordering,
/// arrays lexicographically, objects by their entries in insertion order.
#[must_use]
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => x
            .iter()
            .zip(y)
            .map(|(x, y)| compare_values(x, y))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        (Value::Object(x), Value::Object(y)) => x
            .iter()
            .zip(y)
            .map(|((kx, vx), (ky, vy))| kx.cmp(ky).then_with(|| compare_values(vx, vy)))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn compare_numbers(x: &Number, y: &Number) -> Ordering {
    if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
        return x.cmp(&y);
    }
    if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
        return x.cmp(&y);
    }
    OrderedFloat(x.as_f64().unwrap_or(f64::NAN)).cmp(&OrderedFloat(y.as_f64().unwrap_or(f64::NAN)))
}

/// Structural equality over JSON values in which numbers compare by
/// magnitude, so `6` and `6.0` are equal. Kinds never mix: `100` and
/// `"100"` stay different. Objects compare by key, ignoring key order.
///
/// ```
/// use ironcollect::value::values_equal;
/// use serde_json::json;
///
/// assert!(values_equal(&json!({ "n": [6] }), &json!({ "n": [6.0] })));
/// assert!(!values_equal(&json!(100), &json!("100")));
/// ```
#[must_use]
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y).is_eq(),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| values_equal(v, w)))
        }
        _ => a == b,
    }
}

/// Equality used when collections compare values: `diff`, `diff_assoc`.
///
/// `serde_json::Value` uses [`values_equal`]; every other implementation
/// defers to `PartialEq`. Implement it for your own record types with
/// `impl ValueEq for MyRecord {}` when `PartialEq` is the right notion.
pub trait ValueEq: PartialEq {
    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl ValueEq for Value {
    fn value_eq(&self, other: &Self) -> bool {
        values_equal(self, other)
    }
}

impl<T: ValueEq + ?Sized> ValueEq for &T {
    fn value_eq(&self, other: &Self) -> bool {
        (**self).value_eq(*other)
    }
}

impl<T: ValueEq> ValueEq for Vec<T> {
    fn value_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.value_eq(b))
    }
}

impl<T: ValueEq> ValueEq for Option<T> {
    fn value_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.value_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! partial_eq_value_eq {
    ($($t:ty),* $(,)?) => {
        $(impl ValueEq for $t {})*
    };
}

partial_eq_value_eq!(
    (), bool, char, str, String, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64,
    u128, usize,
);

/// The string label a value files under when it is used as a grouping key.
///
/// Strings contribute their text without quotes; other JSON values use their
/// compact JSON form.
pub trait GroupKey {
    fn group_key(&self) -> String;
}

impl GroupKey for str {
    fn group_key(&self) -> String {
        self.to_owned()
    }
}

impl GroupKey for String {
    fn group_key(&self) -> String {
        self.clone()
    }
}

impl<K: GroupKey + ?Sized> GroupKey for &K {
    fn group_key(&self) -> String {
        (**self).group_key()
    }
}

impl GroupKey for Value {
    fn group_key(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl GroupKey for crate::items::Key<'_> {
    fn group_key(&self) -> String {
        self.to_string()
    }
}

macro_rules! display_group_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl GroupKey for $t {
                fn group_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_group_key!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_order_by_magnitude_across_representations() {
        assert_eq!(compare_values(&json!(2), &json!(10)), Ordering::Less);
        assert_eq!(compare_values(&json!(2.5), &json!(2)), Ordering::Greater);
        assert_eq!(compare_values(&json!(-1), &json!(0.5)), Ordering::Less);
    }

    #[test]
    fn kinds_order_before_contents() {
        assert_eq!(compare_values(&json!(null), &json!(false)), Ordering::Less);
        assert_eq!(compare_values(&json!(100), &json!("1")), Ordering::Less);
        assert_eq!(compare_values(&json!([1, 2]), &json!([1, 2, 0])), Ordering::Less);
    }

    #[test]
    fn large_unsigned_numbers_keep_their_precision() {
        let max = json!(u64::MAX);
        let below = json!(u64::MAX - 1);
        assert_eq!(compare_values(&below, &max), Ordering::Less);
        assert!(!values_equal(&below, &max));
    }

    #[test]
    fn equality_unifies_number_representations_only() {
        assert!(values_equal(&json!(6), &json!(6.0)));
        assert!(values_equal(&json!(-2), &json!(-2.0)));
        assert!(!values_equal(&json!(6), &json!(6.5)));
        assert!(!values_equal(&json!(6), &json!("6")));
        assert!(!values_equal(&json!(null), &json!(false)));
        assert!(values_equal(&json!({ "a": 1, "b": [1.0] }), &json!({ "b": [1], "a": 1.0 })));
        assert!(!values_equal(&json!([1, 2]), &json!([1, 2, 3])));
        assert!(json!([6]).value_eq(&json!([6.0])));
    }

    #[test]
    fn group_keys_drop_string_quotes() {
        assert_eq!(json!("B").group_key(), "B");
        assert_eq!(json!(4).group_key(), "4");
        assert_eq!(json!(true).group_key(), "true");
        assert_eq!(7u8.group_key(), "7");
    }

    #[test]
    fn lookup_walks_arrays_and_objects() {
        let v = json!({ "a": [{ "b": 1 }] });
        assert_eq!(lookup(&v, "a.0.b"), Some(&json!(1)));
        assert_eq!(lookup(&v, "a.1.b"), None);
        assert_eq!(lookup(&v, ""), Some(&v));
    }
}
