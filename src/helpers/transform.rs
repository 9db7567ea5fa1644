//! Shape-aware transforms for [`Collection`].
//!
//! Key-preserving:
//! - [`Collection::map_into`] -- build one `U` per value through a factory
//! - [`Collection::sort`] / [`Collection::sort_by`] / [`Collection::reverse`]
//!   -- reorder entries; a mapping keeps each value on its key
//!
//! Key-generating:
//! - [`Collection::map_to_groups`] -- `(group, value)` pairs collected per group
//! - [`Collection::group_by`] -- values collected under a derived label
//!
//! Value-only (keys dropped, plain `Vec`s returned):
//! - [`Collection::partition`], [`Collection::split`], [`Collection::chunk`]

use crate::collection::Collection;
use crate::error::{CollectionError, Result};
use crate::items::{Items, Key};
use crate::value::GroupKey;
use indexmap::IndexMap;
use std::cmp::Ordering;

impl<T> Collection<T> {
    /// Map each entry to a `(group, value)` pair and collect the values per
    /// group.
    ///
    /// The result is always a mapping from the group's label (see
    /// [`GroupKey`]) to the values in visiting order. Groups appear in the
    /// order they are first seen.
    ///
    /// ```
    /// use ironcollect::Collection;
    /// use serde_json::json;
    ///
    /// let people = Collection::of(json!([
    ///     { "id": 1, "name": "A" },
    ///     { "id": 2, "name": "B" },
    ///     { "id": 3, "name": "B" },
    /// ]));
    /// let groups = people.map_to_groups(|p, _| (p["name"].clone(), p["id"].clone()));
    /// assert_eq!(groups.get("B"), Some(&vec![json!(2), json!(3)]));
    /// ```
    pub fn map_to_groups<K, V, F>(&self, mut f: F) -> Collection<Vec<V>>
    where
        K: GroupKey,
        F: FnMut(&T, Key<'_>) -> (K, V),
    {
        let mut groups: IndexMap<String, Vec<V>> = IndexMap::new();
        for (key, value) in self.entries() {
            let (group, out) = f(value, key);
            groups.entry(group.group_key()).or_default().push(out);
        }
        Collection::of(groups)
    }
}

impl<T: Clone> Collection<T> {
    /// Replace each value with `factory(value)`, keeping keys and shape.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Person { name: String }
    ///
    /// let people = Collection::of(vec!["Firmino".to_string()])
    ///     .map_into(|name| Person { name });
    /// assert_eq!(people.first(), Some(&Person { name: "Firmino".into() }));
    /// ```
    pub fn map_into<U, F>(&self, mut factory: F) -> Collection<U>
    where
        F: FnMut(T) -> U,
    {
        self.map(|value, _| factory(value.clone()))
    }

    /// Split the values into `(passing, failing)` in a single pass, keeping
    /// relative order on each side. Keys are dropped.
    pub fn partition<P>(&self, mut pred: P) -> (Vec<T>, Vec<T>)
    where
        P: FnMut(&T) -> bool,
    {
        let mut pass = Vec::new();
        let mut fail = Vec::new();
        for value in self {
            if pred(value) {
                pass.push(value.clone());
            } else {
                fail.push(value.clone());
            }
        }
        (pass, fail)
    }

    /// Divide the values into exactly `groups` contiguous chunks.
    ///
    /// Every chunk holds `ceil(count / groups)` values except the trailing
    /// ones, which take what is left and may be empty.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// let c = Collection::of(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(c.split(3)?, vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// assert_eq!(c.split(6)?.len(), 6);
    /// # Ok::<(), ironcollect::CollectionError>(())
    /// ```
    ///
    /// # Errors
    /// [`CollectionError::InvalidArgument`] when `groups` is zero.
    pub fn split(&self, groups: usize) -> Result<Vec<Vec<T>>> {
        if groups == 0 {
            return Err(CollectionError::invalid_argument(
                "split",
                "number of groups must be positive",
            ));
        }
        let values = self.to_vec();
        let total = values.len();
        let size = total.div_ceil(groups);
        Ok((0..groups)
            .map(|i| {
                let start = (i * size).min(total);
                let end = (start + size).min(total);
                values[start..end].to_vec()
            })
            .collect())
    }

    /// Break the values into consecutive chunks of at most `size` values.
    ///
    /// # Errors
    /// [`CollectionError::InvalidArgument`] when `size` is zero.
    pub fn chunk(&self, size: usize) -> Result<Vec<Vec<T>>> {
        if size == 0 {
            return Err(CollectionError::invalid_argument(
                "chunk",
                "chunk size must be positive",
            ));
        }
        Ok(self.to_vec().chunks(size).map(<[T]>::to_vec).collect())
    }

    /// Collect values under the label `f(value, key)` returns. The result is
    /// a mapping; groups appear in first-seen order.
    pub fn group_by<K, F>(&self, mut f: F) -> Collection<Vec<T>>
    where
        K: GroupKey,
        F: FnMut(&T, Key<'_>) -> K,
    {
        self.map_to_groups(|value, key| (f(value, key), value.clone()))
    }

    /// Reverse the entry order. A mapping keeps each value on its key.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let items = match &self.items {
            Items::Sequence(v) => Items::Sequence(v.iter().rev().cloned().collect()),
            Items::Mapping(m) => Items::Mapping(
                m.iter()
                    .rev()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
        };
        Self { items }
    }

    /// Stable sort by `cmp`. A mapping keeps each value on its key.
    pub fn sort_by<F>(&self, mut cmp: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items = self.items.clone();
        match &mut items {
            Items::Sequence(v) => v.sort_by(|a, b| cmp(a, b)),
            Items::Mapping(m) => m.sort_by(|_, a, _, b| cmp(a, b)),
        }
        Self { items }
    }
}

impl<T: Clone + Ord> Collection<T> {
    #[must_use]
    pub fn sort(&self) -> Self {
        self.sort_by(Ord::cmp)
    }
}
