//! Cartesian products of a collection with other lists.

use crate::collection::Collection;
use crate::items::Normalize;

impl<T: Clone> Collection<T> {
    /// Cartesian product of this collection's values with every list in
    /// `others`, as a sequence of tuples.
    ///
    /// Tuples are ordered with the receiver varying slowest and the last list
    /// varying fastest. The output length is the product of all input
    /// lengths, so any empty input yields an empty result. Keys of mapping
    /// inputs are ignored.
    ///
    /// To mix input kinds, normalize them first:
    /// `[other.into_items(), vec.normalize()]`.
    ///
    /// ```
    /// use ironcollect::Collection;
    /// use serde_json::json;
    ///
    /// let joined = Collection::of(json!([1, 2]))
    ///     .cross_join([json!(["a", "b"]), json!(["I", "II"])]);
    /// assert_eq!(joined.count(), 8);
    /// assert_eq!(joined.first(), Some(&vec![json!(1), json!("a"), json!("I")]));
    /// assert_eq!(joined.last(), Some(&vec![json!(2), json!("b"), json!("II")]));
    /// ```
    pub fn cross_join<I, N>(&self, others: I) -> Collection<Vec<T>>
    where
        I: IntoIterator<Item = N>,
        N: Normalize<T>,
    {
        let mut lists = vec![self.to_vec()];
        lists.extend(others.into_iter().map(|other| other.normalize().into_values()));

        let tuples = lists.iter().fold(vec![Vec::with_capacity(lists.len())], |acc, list| {
            acc.into_iter()
                .flat_map(|prefix| {
                    list.iter().map(move |item| {
                        let mut tuple = prefix.clone();
                        tuple.push(item.clone());
                        tuple
                    })
                })
                .collect()
        });
        Collection::of(tuples)
    }
}
