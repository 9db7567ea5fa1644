use crate::error::{CollectionError, Result};
use crate::items::{Items, Key, Normalize, Shape, parse_index};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An eager, shape-aware wrapper around an ordered sequence or a keyed
/// mapping.
///
/// Every transform returns a new collection and leaves the receiver alone.
/// The exceptions are the documented in-place methods (`push`, `put`,
/// `concat`, `shift`, `pop`) and the callbacks run by `when`/`unless`, which
/// receive the live receiver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    pub(crate) items: Items<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> {
    /// An empty sequence-shaped collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Items::default(),
        }
    }

    /// Build a collection from any input the normalizer accepts.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// let c = Collection::of(vec![1, 2, 3]);
    /// assert_eq!(c.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn of<N: Normalize<T>>(input: N) -> Self {
        Self {
            items: input.normalize(),
        }
    }

    /// Build a mapping-shaped collection from key/value pairs. A repeated key
    /// keeps its first position and takes the last value.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        Self {
            items: Items::Mapping(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    /// Build a sequence by calling `f(i)` for `i` in `1..=n`.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// let c = Collection::times(3, |i| i * 9);
    /// assert_eq!(c.to_vec(), vec![9, 18, 27]);
    /// ```
    pub fn times<F>(n: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            items: Items::Sequence((1..=n).map(f).collect()),
        }
    }

    /// Borrow the canonical items.
    #[must_use]
    pub const fn all(&self) -> &Items<T> {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Items<T> {
        self.items
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.items.shape()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Option<&T> {
        self.items.get(key)
    }

    pub fn has<'k>(&self, key: impl Into<Key<'k>>) -> bool {
        self.items.get(key).is_some()
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        match &self.items {
            Items::Sequence(v) => v.first(),
            Items::Mapping(m) => m.first().map(|(_, v)| v),
        }
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        match &self.items {
            Items::Sequence(v) => v.last(),
            Items::Mapping(m) => m.last().map(|(_, v)| v),
        }
    }

    /// The keys as strings: positions for a sequence, names for a mapping.
    #[must_use]
    pub fn keys(&self) -> Collection<String> {
        let keys: Vec<String> = match &self.items {
            Items::Sequence(v) => (0..v.len()).map(|i| i.to_string()).collect(),
            Items::Mapping(m) => m.keys().cloned().collect(),
        };
        Collection::of(keys)
    }

    /// Apply `f(value, key)` to every entry.
    ///
    /// Key-preserving: the result has the same shape, keys and key order as
    /// the receiver.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// let prices = Collection::from_pairs([("desk", 200), ("chair", 100)]);
    /// let doubled = prices.map(|v, _| v * 2);
    /// assert_eq!(doubled.get("desk"), Some(&400));
    /// assert_eq!(prices.get("desk"), Some(&200));
    /// ```
    pub fn map<U, F>(&self, f: F) -> Collection<U>
    where
        F: FnMut(&T, Key<'_>) -> U,
    {
        Collection {
            items: self.items.map_entries(f),
        }
    }

    /// Remove and return the first value.
    pub fn shift(&mut self) -> Option<T> {
        match &mut self.items {
            Items::Sequence(v) if v.is_empty() => None,
            Items::Sequence(v) => Some(v.remove(0)),
            Items::Mapping(m) => m.shift_remove_index(0).map(|(_, v)| v),
        }
    }

    /// Remove and return the last value.
    pub fn pop(&mut self) -> Option<T> {
        match &mut self.items {
            Items::Sequence(v) => v.pop(),
            Items::Mapping(m) => m.pop().map(|(_, v)| v),
        }
    }

    /// Append a value in place.
    ///
    /// A mapping receives the next integer key: one past the largest key that
    /// is a canonical integer, or `"0"` when there is none. Should that key
    /// overflow, the smallest unused integer key is taken instead.
    pub fn push(&mut self, value: T) -> &mut Self {
        match &mut self.items {
            Items::Sequence(v) => v.push(value),
            Items::Mapping(m) => {
                let next = next_integer_key(m);
                m.insert(next, value);
            }
        }
        self
    }

    /// Insert or replace the value stored under `key`, in place.
    ///
    /// # Errors
    /// On a sequence, `key` must be a position no greater than the length;
    /// anything else is [`CollectionError::InvalidArgument`].
    pub fn put(&mut self, key: impl Into<String>, value: T) -> Result<&mut Self> {
        let key = key.into();
        match &mut self.items {
            Items::Mapping(m) => {
                m.insert(key, value);
            }
            Items::Sequence(v) => match parse_index(&key) {
                Some(i) if i < v.len() => v[i] = value,
                Some(i) if i == v.len() => v.push(value),
                _ => {
                    return Err(CollectionError::invalid_argument(
                        "put",
                        format!("`{key}` is not a position in a sequence of length {}", v.len()),
                    ));
                }
            },
        }
        Ok(self)
    }

    /// Append every value of `other`, in place, with [`push`](Self::push)
    /// semantics. Keys of `other` are discarded.
    pub fn concat<N: Normalize<T>>(&mut self, other: N) -> &mut Self {
        for value in other.normalize().into_values() {
            self.push(value);
        }
        self
    }
}

impl<T: Clone> Collection<T> {
    /// Keep the entries for which `pred(value, key)` holds. Mappings keep
    /// their keys; sequences are compacted.
    pub fn filter<F>(&self, pred: F) -> Self
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        Self {
            items: self.items.retain_entries(pred),
        }
    }

    /// The values as a new sequence-shaped collection.
    #[must_use]
    pub fn values(&self) -> Self {
        Self::of(self.items.to_values())
    }

    /// The values as a plain `Vec`, in order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_values()
    }
}

impl<T: Serialize> Collection<T> {
    /// Serialize into a JSON array (sequence) or object (mapping).
    ///
    /// # Errors
    /// Propagates a `serde_json` failure to serialize an element.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.items)?)
    }

    /// # Errors
    /// Propagates a `serde_json` failure to serialize an element.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.items)?)
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(v: Vec<T>) -> Self {
        Self::of(v)
    }
}

impl<T> From<IndexMap<String, T>> for Collection<T> {
    fn from(m: IndexMap<String, T>) -> Self {
        Self::of(m)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect::<Vec<_>>())
    }
}

/// One past the largest integer key, or the smallest free integer key when
/// the largest is already `usize::MAX`.
fn next_integer_key<T>(m: &IndexMap<String, T>) -> String {
    let largest = m.keys().filter_map(|k| parse_index(k)).max();
    match largest.map_or(Some(0), |max| max.checked_add(1)) {
        Some(next) => next.to_string(),
        None => (0..=m.len())
            .map(|i| i.to_string())
            .find(|k| !m.contains_key(k))
            .unwrap_or_default(),
    }
}
