//! Conditional execution and mid-chain observation.
//!
//! `when`/`unless` hand the *live* receiver to the chosen callback, so any
//! in-place change the callback makes (`push`, `put`, `concat`, ...) is
//! visible to the caller afterwards. `tap` only observes.
//!
//! ```
//! use ironcollect::Collection;
//!
//! let mut c = Collection::of(vec![1, 2, 3]);
//! c.when(true, |c| {
//!     c.push(4);
//! });
//! c.when_else(false, |c| { c.push(5); }, |c| { c.push(6); });
//! assert_eq!(c.to_vec(), vec![1, 2, 3, 4, 6]);
//! ```

use crate::collection::Collection;

/// Something `when`/`unless` can evaluate against the receiver: a plain
/// `bool`, or a predicate over the collection.
pub trait Condition<T> {
    fn holds(self, collection: &Collection<T>) -> bool;
}

impl<T> Condition<T> for bool {
    fn holds(self, _: &Collection<T>) -> bool {
        self
    }
}

impl<T, F> Condition<T> for F
where
    F: FnOnce(&Collection<T>) -> bool,
{
    fn holds(self, collection: &Collection<T>) -> bool {
        self(collection)
    }
}

impl<T> Collection<T> {
    /// Run `then` on the receiver when `condition` holds.
    pub fn when<C, F>(&mut self, condition: C, then: F) -> &mut Self
    where
        C: Condition<T>,
        F: FnOnce(&mut Self),
    {
        if condition.holds(self) {
            then(self);
        }
        self
    }

    /// Run `then` when `condition` holds, `otherwise` when it does not.
    pub fn when_else<C, F, G>(&mut self, condition: C, then: F, otherwise: G) -> &mut Self
    where
        C: Condition<T>,
        F: FnOnce(&mut Self),
        G: FnOnce(&mut Self),
    {
        if condition.holds(self) {
            then(self);
        } else {
            otherwise(self);
        }
        self
    }

    /// Run `then` on the receiver when `condition` does not hold.
    pub fn unless<C, F>(&mut self, condition: C, then: F) -> &mut Self
    where
        C: Condition<T>,
        F: FnOnce(&mut Self),
    {
        if !condition.holds(self) {
            then(self);
        }
        self
    }

    /// Run `then` when `condition` does not hold, `otherwise` when it does.
    pub fn unless_else<C, F, G>(&mut self, condition: C, then: F, otherwise: G) -> &mut Self
    where
        C: Condition<T>,
        F: FnOnce(&mut Self),
        G: FnOnce(&mut Self),
    {
        if condition.holds(self) {
            otherwise(self);
        } else {
            then(self);
        }
        self
    }

    /// Pass the collection to `f` for a side effect and hand it back
    /// unchanged.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// let mut seen = Vec::new();
    /// let first = Collection::of(vec![2, 4, 3, 1, 5])
    ///     .sort()
    ///     .tap(|c| seen = c.to_vec())
    ///     .shift();
    /// assert_eq!(first, Some(1));
    /// assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }
}
