pub(crate) mod compare;
pub(crate) mod conditional;
pub(crate) mod cross_join;
pub(crate) mod dump;
pub(crate) mod transform;
pub(crate) mod wrap;

// Only re-export items callers name directly
pub use conditional::Condition;
pub use dump::DumpOptions;
pub use wrap::{Unwrap, unwrap};
