//! Error types for the ternion triplestore.
//!
//! Every error here is a local, recoverable condition surfaced to the
//! caller. A failed insert or query never corrupts index consistency,
//! and the engine has no internal retry policy.

use thiserror::Error;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TernionError>;

/// All error conditions the store can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TernionError {
    /// An explicit identifier string was not a well-formed 128-bit value.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// An entity name was not identifier-shaped.
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// A predicate validator rejected the object at insert time.
    #[error("object {object} does not match the criteria for predicate {predicate}")]
    Validation {
        /// Name of the rejecting predicate.
        predicate: String,
        /// Rendering of the rejected object.
        object: String,
    },

    /// A filter-based query was invoked with no constraints.
    #[error("filter query invoked with no constraints")]
    EmptyQuery,

    /// A single-result query matched nothing.
    #[error("no item matches the criteria")]
    NoResult,

    /// A single-result query matched more than one item.
    #[error("more than a single item matches the criteria")]
    AmbiguousResult,

    /// `last_added` was called before any entity subject was inserted.
    #[error("store has no insertions yet")]
    EmptyStore,

    /// A reified triple was used as a subject without being in the store.
    #[error("reified subject ({0}) was not found in the store")]
    ReifiedSubjectMissing(String),

    /// A value column in a batch creation had an incompatible length.
    #[error("value columns must have length 1 or {expected}, got {got}")]
    ShapeMismatch {
        /// Row count implied by the longest column.
        expected: usize,
        /// Offending column length.
        got: usize,
    },
}
