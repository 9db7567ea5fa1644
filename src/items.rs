//! Canonical item storage and the normalizer.
//!
//! Every collection stores its data as an [`Items<T>`]: either an ordered
//! sequence with implicit `0..n` positions, or an insertion-ordered mapping
//! from string keys to values. The shape is decided once, when input is
//! normalized through [`Normalize`], and never changes for the lifetime of
//! the collection that owns it.
//!
//! ```
//! use ironcollect::{Collection, Shape};
//! use serde_json::json;
//!
//! let seq = Collection::of(vec![1, 2, 3]);
//! assert_eq!(seq.shape(), Shape::Sequence);
//!
//! let map = Collection::of(json!({ "name": "Desk", "price": 200 }));
//! assert_eq!(map.shape(), Shape::Mapping);
//! ```

use crate::collection::Collection;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Which of the two storage forms a collection uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Ordered values addressed by position.
    Sequence,
    /// Ordered, unique string keys.
    Mapping,
}

/// The key of one entry, as handed to callbacks.
///
/// Lookups are cross-form: `Index(3)` finds mapping key `"3"`, and
/// `Name("3")` finds sequence position 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl Key<'_> {
    /// Position this key addresses in a sequence, if any.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(name) => parse_index(name),
        }
    }
}

/// Parse a key written as a canonical decimal position. `"+1"` and `"01"`
/// are names, not positions.
pub(crate) fn parse_index(key: &str) -> Option<usize> {
    key.parse::<usize>().ok().filter(|i| i.to_string() == key)
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key<'_> {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(name: &'a String) -> Self {
        Key::Name(name)
    }
}

/// Canonical representation of a collection's data.
///
/// Serializes as a JSON array or object; deserializing an object produces a
/// mapping and anything array-like produces a sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Items<T> {
    Sequence(Vec<T>),
    Mapping(IndexMap<String, T>),
}

impl<T> Default for Items<T> {
    fn default() -> Self {
        Items::Sequence(Vec::new())
    }
}

impl<T> Items<T> {
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Items::Sequence(_) => Shape::Sequence,
            Items::Mapping(_) => Shape::Mapping,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Items::Sequence(v) => v.len(),
            Items::Mapping(m) => m.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a value by key, accepting either key form.
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Option<&T> {
        let key = key.into();
        match self {
            Items::Sequence(v) => key.as_index().and_then(|i| v.get(i)),
            Items::Mapping(m) => match key {
                Key::Name(name) => m.get(name),
                Key::Index(i) => m.get(i.to_string().as_str()),
            },
        }
    }

    /// Drop the keys and return the values in order.
    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        match self {
            Items::Sequence(v) => v,
            Items::Mapping(m) => m.into_values().collect(),
        }
    }

    /// Build items of the same shape as `self` from per-entry results, keeping
    /// every key in place.
    pub(crate) fn map_entries<U, F>(&self, mut f: F) -> Items<U>
    where
        F: FnMut(&T, Key<'_>) -> U,
    {
        match self {
            Items::Sequence(v) => Items::Sequence(
                v.iter()
                    .enumerate()
                    .map(|(i, value)| f(value, Key::Index(i)))
                    .collect(),
            ),
            Items::Mapping(m) => Items::Mapping(
                m.iter()
                    .map(|(k, value)| (k.clone(), f(value, Key::Name(k))))
                    .collect(),
            ),
        }
    }
}

impl<T: Clone> Items<T> {
    /// Keep the entries for which `keep` returns true. Mappings keep their
    /// keys; sequences are compacted.
    pub(crate) fn retain_entries<F>(&self, mut keep: F) -> Items<T>
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        match self {
            Items::Sequence(v) => Items::Sequence(
                v.iter()
                    .enumerate()
                    .filter(|(i, value)| keep(value, Key::Index(*i)))
                    .map(|(_, value)| value.clone())
                    .collect(),
            ),
            Items::Mapping(m) => Items::Mapping(
                m.iter()
                    .filter(|(k, value)| keep(value, Key::Name(k)))
                    .map(|(k, value)| (k.clone(), value.clone()))
                    .collect(),
            ),
        }
    }

    #[must_use]
    pub fn to_values(&self) -> Vec<T> {
        match self {
            Items::Sequence(v) => v.clone(),
            Items::Mapping(m) => m.values().cloned().collect(),
        }
    }
}

/// Conversion of supported inputs into canonical [`Items`].
///
/// Normalization is total: every implementor maps to some shape, and nothing
/// is rejected.
pub trait Normalize<T> {
    fn normalize(self) -> Items<T>;
}

impl<T> Normalize<T> for Items<T> {
    fn normalize(self) -> Items<T> {
        self
    }
}

impl<T> Normalize<T> for Vec<T> {
    fn normalize(self) -> Items<T> {
        Items::Sequence(self)
    }
}

impl<T: Clone> Normalize<T> for &[T] {
    fn normalize(self) -> Items<T> {
        Items::Sequence(self.to_vec())
    }
}

impl<T, const N: usize> Normalize<T> for [T; N] {
    fn normalize(self) -> Items<T> {
        Items::Sequence(self.into())
    }
}

impl<T> Normalize<T> for IndexMap<String, T> {
    fn normalize(self) -> Items<T> {
        Items::Mapping(self)
    }
}

impl<T> Normalize<T> for Collection<T> {
    fn normalize(self) -> Items<T> {
        self.into_items()
    }
}

impl<T: Clone> Normalize<T> for &Collection<T> {
    fn normalize(self) -> Items<T> {
        self.all().clone()
    }
}

/// `None` normalizes to an empty sequence.
impl<T, N: Normalize<T>> Normalize<T> for Option<N> {
    fn normalize(self) -> Items<T> {
        self.map_or_else(Items::default, Normalize::normalize)
    }
}

/// JSON input: `null` is empty, arrays are sequences, objects are mappings,
/// and any scalar becomes a one-element sequence.
impl Normalize<Value> for Value {
    fn normalize(self) -> Items<Value> {
        match self {
            Value::Null => Items::default(),
            Value::Array(v) => Items::Sequence(v),
            Value::Object(m) => Items::Mapping(m.into_iter().collect()),
            scalar => Items::Sequence(vec![scalar]),
        }
    }
}

impl Normalize<Value> for &Value {
    fn normalize(self) -> Items<Value> {
        self.clone().normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cross_form_lookup() {
        let seq: Items<i32> = vec![10, 20, 30].normalize();
        assert_eq!(seq.get("1"), Some(&20));
        assert_eq!(seq.get("x"), None);

        let map: Items<Value> = json!({ "0": "zero", "a": 1 }).normalize();
        assert_eq!(map.get(0usize), Some(&json!("zero")));

        assert_eq!(seq.get("+1"), None);
        assert_eq!(seq.get("01"), None);
        assert_eq!(Key::Name("-0").as_index(), None);
        assert_eq!(map.get("a"), Some(&json!(1)));
    }

    #[test]
    fn json_scalars_become_single_element_sequences() {
        assert_eq!(json!("foo").normalize(), Items::Sequence(vec![json!("foo")]));
        assert_eq!(Value::Null.normalize(), Items::<Value>::default());
        assert_eq!(json!({}).normalize().shape(), Shape::Mapping);
    }

    #[test]
    fn none_is_empty_sequence() {
        let items: Items<u8> = None::<Vec<u8>>.normalize();
        assert_eq!(items, Items::Sequence(vec![]));
    }
}
