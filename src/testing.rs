//! Testing utilities for code built on ironcollect.
//!
//! - **Assertions**: order-sensitive comparisons of collection contents, keys
//!   and shape, with messages that print both sides in full
//! - **Fixtures**: small record datasets for filtering, grouping and diffing
//!
//! # Quick Start
//!
//! ```
//! use ironcollect::Collection;
//! use ironcollect::testing::*;
//!
//! let products = Collection::of(sample_products());
//! let cheap = products.where_in("price", &[100])?;
//! assert_collections_equal(
//!     &cheap.map(|p, _| p["product"].clone()).to_vec(),
//!     &["Chair".into(), "Door".into()],
//! );
//! # Ok::<(), ironcollect::CollectionError>(())
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
