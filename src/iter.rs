//! Forward iteration over a collection's values.
//!
//! Iteration yields values only: positions order a sequence, insertion order
//! orders a mapping. Borrowing iterators hold a shared borrow of the
//! collection, so the collection cannot change underneath them; the owning
//! iterator consumes it.
//!
//! ```
//! use ironcollect::Collection;
//!
//! let mut out = String::new();
//! for n in &Collection::of(vec![1, 2, 3, 4, 5]) {
//!     out.push_str(&n.to_string());
//! }
//! assert_eq!(out, "12345");
//! ```

use crate::collection::Collection;
use crate::items::{Items, Key};
use std::iter::FusedIterator;

enum Cursor<'a, T> {
    Sequence(std::slice::Iter<'a, T>),
    Mapping(indexmap::map::Values<'a, String, T>),
}

/// Borrowing iterator over values, created by [`Collection::iter`].
pub struct Iter<'a, T> {
    cursor: Cursor<'a, T>,
}

impl<T> Iter<'_, T> {
    /// Whether another call to `next` will yield a value.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.len() > 0
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.cursor {
            Cursor::Sequence(it) => it.next(),
            Cursor::Mapping(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursor {
            Cursor::Sequence(it) => it.size_hint(),
            Cursor::Mapping(it) => it.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over values, created by `Collection::into_iter`.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.inner.len() > 0
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// Borrowing iterator over `(key, value)` pairs, created by
/// [`Collection::entries`].
pub struct Entries<'a, T> {
    items: &'a Items<T>,
    pos: usize,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (Key<'a>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.pos;
        let entry = match self.items {
            Items::Sequence(v) => v.get(pos).map(|value| (Key::Index(pos), value)),
            Items::Mapping(m) => m
                .get_index(pos)
                .map(|(k, value)| (Key::Name(k.as_str()), value)),
        };
        if entry.is_some() {
            self.pos += 1;
        }
        entry
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.items.len().saturating_sub(self.pos);
        (rest, Some(rest))
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> Collection<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        let cursor = match &self.items {
            Items::Sequence(v) => Cursor::Sequence(v.iter()),
            Items::Mapping(m) => Cursor::Mapping(m.values()),
        };
        Iter { cursor }
    }

    pub fn entries(&self) -> Entries<'_, T> {
        Entries {
            items: &self.items,
            pos: 0,
        }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.items.into_values().into_iter(),
        }
    }
}
