//! # Ironcollect
//!
//! A **chainable collection library** for Rust. A [`Collection<T>`] wraps either
//! an ordered sequence or an insertion-ordered keyed mapping, and every
//! operation knows which of the two it is working on: key-preserving transforms
//! keep mapping keys in place, key-generating transforms derive their own
//! labels, and value-only operations hand back plain `Vec`s.
//!
//! ## Key Features
//!
//! - **Two shapes, one API** - sequences and mappings share every operation
//! - **Key-aware transforms** - map, filter, group, partition, split, chunk
//! - **Keyed comparison** - `diff_assoc`, `diff_keys`, `where_in`/`where_not_in`
//! - **Cartesian products** - `cross_join` with a fixed, documented order
//! - **Conditional execution** - `when`/`unless` over the live collection, `tap`
//! - **Runtime macros** - register named operations for `Collection<Value>`
//! - **Serde integration** - sequences are JSON arrays, mappings JSON objects
//!
//! ## Quick Start
//!
//! ```
//! use ironcollect::*;
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let people = Collection::of(json!([
//!     { "id": 1, "name": "A" },
//!     { "id": 2, "name": "B" },
//!     { "id": 3, "name": "C" },
//!     { "id": 4, "name": "B" },
//! ]));
//!
//! let groups = people.map_to_groups(|p, _| (p["name"].clone(), p["id"].clone()));
//! assert_eq!(groups.to_value()?, json!({ "A": [1], "B": [2, 4], "C": [3] }));
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Shape
//!
//! A collection's [`Shape`] is decided once, when its input is normalized
//! (see [`Normalize`]), and never changes. Operations that produce a different
//! shape return a new collection.
//!
//! ### Eager and non-mutating
//!
//! Every transform runs to completion and returns a new collection; the
//! receiver is untouched. The in-place exceptions are `push`, `put`, `concat`,
//! `shift`, `pop`, and the callbacks `when`/`unless` run against the live
//! receiver.
//!
//! ### Macros
//!
//! [`register_macro`] adds a named operation to a process-wide registry;
//! [`Collection::call`] dispatches by name to a macro or a built-in. See the
//! [`macros`] module.
//!
//! ## Module Overview
//!
//! - [`collection`] - the `Collection` type, construction, accessors and in-place ops
//! - [`items`] - canonical storage, keys, and the normalizer
//! - [`iter`] - forward iteration over values and entries
//! - [`macros`] - macro registry and dynamic dispatch
//! - [`value`] - helpers for `serde_json::Value` items
//! - [`testing`] - assertions and fixtures for tests

pub mod collection;
pub mod error;
pub mod items;
pub mod iter;
pub mod macros;
pub mod testing;
pub mod value;
pub mod helpers;

// General re-exports
pub use collection::Collection;
pub use error::{CollectionError, Result};
pub use items::{Items, Key, Normalize, Shape};
pub use macros::{has_macro, register_macro, resolve};
pub use value::{GroupKey, ValueEq};
pub use helpers::*;
