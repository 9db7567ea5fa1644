//! Guaranteed wrapping into, and unwrapping out of, a collection.

use crate::collection::Collection;
use crate::items::{Items, Normalize};
use serde_json::Value;

impl<T> Collection<T> {
    /// Normalize any supported input into a collection. An existing
    /// collection comes back as is.
    ///
    /// A JSON object normalizes to a mapping, so `wrap(json!({}))` is empty.
    /// Use [`wrap_value`](Collection::wrap_value) to wrap a JSON value as a
    /// single element.
    pub fn wrap<N: Normalize<T>>(input: N) -> Self {
        Self::of(input)
    }
}

impl Collection<Value> {
    /// Wrap a JSON value: arrays become sequences, `null` becomes empty, and
    /// anything else, objects included, becomes a one-element sequence.
    ///
    /// ```
    /// use ironcollect::Collection;
    /// use serde_json::json;
    ///
    /// assert_eq!(Collection::wrap_value(json!("foo")).to_vec(), vec![json!("foo")]);
    /// assert_eq!(Collection::wrap_value(json!(["foo"])).to_vec(), vec![json!("foo")]);
    /// assert_eq!(Collection::wrap_value(json!({})).to_vec(), vec![json!({})]);
    /// ```
    #[must_use]
    pub fn wrap_value(value: Value) -> Self {
        let items = match value {
            Value::Null => Items::default(),
            Value::Array(v) => Items::Sequence(v),
            other => Items::Sequence(vec![other]),
        };
        Self { items }
    }
}

/// Inputs [`unwrap`] accepts.
///
/// Collections give up their values as a plain `Vec`; plain values pass
/// through unchanged.
pub trait Unwrap {
    type Output;

    fn unwrap_items(self) -> Self::Output;
}

impl<T> Unwrap for Collection<T> {
    type Output = Vec<T>;

    fn unwrap_items(self) -> Vec<T> {
        self.into_items().into_values()
    }
}

impl<T: Clone> Unwrap for &Collection<T> {
    type Output = Vec<T>;

    fn unwrap_items(self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T> Unwrap for Vec<T> {
    type Output = Vec<T>;

    fn unwrap_items(self) -> Vec<T> {
        self
    }
}

impl Unwrap for Value {
    type Output = Value;

    fn unwrap_items(self) -> Value {
        self
    }
}

/// Extract the plain values of a collection, or pass anything else through.
///
/// ```
/// use ironcollect::{Collection, unwrap};
/// use serde_json::json;
///
/// assert_eq!(unwrap(Collection::of(vec!["foo"])), vec!["foo"]);
/// assert_eq!(unwrap(vec!["foo"]), vec!["foo"]);
/// assert_eq!(unwrap(json!("foo")), json!("foo"));
/// ```
pub fn unwrap<U: Unwrap>(input: U) -> U::Output {
    input.unwrap_items()
}
