//! Diagnostic output of a collection's current items.
//!
//! `dump` writes to stderr. `dump_to` writes to any [`io::Write`] so output
//! can be captured.

use crate::collection::Collection;
use crate::items::Items;
use std::fmt::Debug;
use std::io::{self, Write};

/// Options for [`Collection::dump_to`].
///
/// ```
/// use ironcollect::DumpOptions;
///
/// let opts = DumpOptions { label: Some("after sort".into()), ..Default::default() };
/// assert_eq!(opts.max_items, None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DumpOptions {
    /// Prefix printed in front of every line.
    pub label: Option<String>,
    /// Print at most this many entries, then a summary of the rest.
    pub max_items: Option<usize>,
}

impl<T: Debug> Collection<T> {
    /// Print the items to stderr and return the collection for chaining.
    pub fn dump(&self) -> &Self {
        let mut stderr = io::stderr().lock();
        if let Err(err) = self.dump_to(&mut stderr, &DumpOptions::default()) {
            tracing::warn!(error = %err, "failed to dump collection");
        }
        self
    }

    /// Write one line per entry (`key: value`) to `out`, preceded by a header
    /// with the shape and count.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    pub fn dump_to<W: Write>(&self, out: &mut W, opts: &DumpOptions) -> io::Result<()> {
        let label = opts.label.as_deref().unwrap_or("dump");
        writeln!(
            out,
            "[{label}] {:?} with {} entries",
            self.shape(),
            self.count()
        )?;
        let limit = opts.max_items.unwrap_or(usize::MAX);
        match &self.items {
            Items::Sequence(v) => {
                for (i, value) in v.iter().enumerate().take(limit) {
                    writeln!(out, "[{label}] {i}: {value:?}")?;
                }
            }
            Items::Mapping(m) => {
                for (k, value) in m.iter().take(limit) {
                    writeln!(out, "[{label}] {k}: {value:?}")?;
                }
            }
        }
        if self.count() > limit {
            writeln!(out, "[{label}] ... ({} more entries)", self.count() - limit)?;
        }
        Ok(())
    }
}
