//! Keyed comparison and record filtering.
//!
//! ## Provided methods
//! - [`Collection::diff_assoc`] -- entries whose key is missing from, or whose
//!   value differs in, another collection
//! - [`Collection::diff_keys`] -- entries whose key is missing from another
//!   collection
//! - [`Collection::diff`] -- values that do not occur in another collection
//! - [`Collection::where_in`] / [`Collection::where_not_in`] -- keep or drop
//!   records by one field's value
//!
//! Value equality is [`ValueEq`]. For `serde_json::Value` that is
//! [`values_equal`]: structural and type-sensitive, so `100` and `"100"`
//! never match, while `6` and `6.0` do. Other element types use their own
//! `PartialEq`. Records are compared through their `serde_json` form, so
//! `where_in` works for any `Serialize` element.
//!
//! All of these keep the receiver's shape, keys and order (mappings keep
//! their keys, sequences are compacted).

use crate::collection::Collection;
use crate::error::Result;
use crate::items::Normalize;
use crate::value::{ValueEq, lookup, values_equal};
use serde::Serialize;
use serde_json::Value;

impl<T: Clone + ValueEq> Collection<T> {
    /// Keep every entry `(k, v)` for which `other` has no key `k`, or holds a
    /// value at `k` that is not equal to `v`.
    ///
    /// Keys match across forms, so a sequence position `2` lines up with a
    /// mapping key `"2"`.
    ///
    /// ```
    /// use ironcollect::Collection;
    /// use serde_json::json;
    ///
    /// let fruit = Collection::of(json!({ "color": "orange", "type": "fruit", "remain": 6 }));
    /// let diff = fruit.diff_assoc(json!({ "color": "yellow", "type": "fruit", "remain": 3, "used": 6 }));
    /// assert_eq!(diff.to_value()?, json!({ "color": "orange", "remain": 6 }));
    /// # Ok::<(), ironcollect::CollectionError>(())
    /// ```
    pub fn diff_assoc<N: Normalize<T>>(&self, other: N) -> Self {
        let other = other.normalize();
        self.filter(|value, key| other.get(key).is_none_or(|theirs| !theirs.value_eq(value)))
    }

    /// Keep the values that do not occur anywhere in `other`.
    pub fn diff<N: Normalize<T>>(&self, other: N) -> Self {
        let other = other.normalize().into_values();
        self.filter(|value, _| !other.iter().any(|theirs| theirs.value_eq(value)))
    }
}

impl<T: Clone> Collection<T> {
    /// Keep the entries whose key `other` does not have.
    pub fn diff_keys<U, N: Normalize<U>>(&self, other: N) -> Self {
        let other = other.normalize();
        self.filter(|_, key| other.get(key).is_none())
    }
}

impl<T: Clone + Serialize> Collection<T> {
    /// Keep the records whose field at `key` (a dot path, see
    /// [`lookup`](crate::value::lookup)) equals one of `values`.
    ///
    /// Records without the field are dropped.
    ///
    /// ```
    /// use ironcollect::Collection;
    /// use serde_json::json;
    ///
    /// let products = Collection::of(json!([
    ///     { "product": "Desk", "price": 200 },
    ///     { "product": "Chair", "price": 100 },
    /// ]));
    /// let cheap = products.where_in("price", &[json!(100), json!("200")])?;
    /// assert_eq!(cheap.count(), 1);
    /// # Ok::<(), ironcollect::CollectionError>(())
    /// ```
    ///
    /// # Errors
    /// Fails if a record or comparison value cannot be serialized.
    pub fn where_in<V: Serialize>(&self, key: &str, values: &[V]) -> Result<Self> {
        self.filter_by_field(key, values, true)
    }

    /// Drop the records whose field at `key` equals one of `values`.
    ///
    /// Records without the field are kept.
    ///
    /// # Errors
    /// Fails if a record or comparison value cannot be serialized.
    pub fn where_not_in<V: Serialize>(&self, key: &str, values: &[V]) -> Result<Self> {
        self.filter_by_field(key, values, false)
    }

    fn filter_by_field<V: Serialize>(&self, key: &str, values: &[V], keep_matching: bool) -> Result<Self> {
        let wanted = values
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()?;
        let keep = self
            .iter()
            .map(|record| -> Result<bool> {
                let record = serde_json::to_value(record)?;
                let matched = lookup(&record, key)
                    .is_some_and(|field| wanted.iter().any(|w| values_equal(field, w)));
                Ok(matched == keep_matching)
            })
            .collect::<Result<Vec<bool>>>()?;
        let mut keep = keep.into_iter();
        Ok(self.filter(|_, _| keep.next().unwrap_or(false)))
    }
}
