//! Error type shared by every fallible collection operation.
//!
//! Operations fail synchronously at the call that detects the problem; nothing
//! is retried or rolled back, because every operation is a single in-memory
//! pass over the receiver.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = CollectionError> = std::result::Result<T, E>;

/// Failures raised by collection operations and the macro registry.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// A malformed argument, such as a zero group count for `split`.
    #[error("invalid argument to `{operation}`: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },

    /// Dynamic dispatch to a name that is neither built in nor registered.
    #[error("method `{0}` does not exist on collection")]
    MethodNotFound(String),

    /// A macro registration that cannot be accepted.
    #[error("cannot register macro `{name}`: {reason}")]
    InvalidMacro { name: String, reason: String },

    /// The body of a registered macro returned an error.
    #[error("macro `{name}` failed")]
    Macro {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// Converting items to or from `serde_json::Value` failed.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CollectionError {
    pub(crate) fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}
