//! Errors from name-based dispatch.

use thiserror::Error;

/// Why [`crate::check`] could not run a predicate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("unknown predicate `{name}`")]
    UnknownPredicate { name: String },

    #[error("predicate `{name}` takes {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
}
