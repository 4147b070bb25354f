//! Storage and indexing engine for the ternion triplestore.
//!
//! The store keeps one authoritative triple set and three derived indices
//! keyed by 128-bit composite keys (subject-predicate, predicate-object,
//! object-subject), giving near-O(1) lookups whenever two of the three
//! triple terms are bound. Composite keys come from the RMX mixer in
//! [`mix`]; the query evaluator in [`query`] turns bound/unbound patterns
//! and predicate→object filters into index lookups and set
//! intersections.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod index;
pub mod mix;
mod query;
mod shared;
mod store;

pub use query::TriplePattern;
pub use shared::SharedStore;
pub use store::{TripleStore, Validator};
