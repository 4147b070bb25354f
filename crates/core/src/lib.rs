//! Core types for the ternion triplestore.
//!
//! This crate defines the data model shared across the workspace:
//! 128-bit identified terms ([`Entity`], [`Predicate`]), literal values
//! ([`Value`]), reifiable facts ([`Triple`]) and the workspace error type
//! ([`TernionError`]). The indexing engine and query evaluator live in
//! `ternion-engine`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod identity;
pub mod triple;
pub mod value;

pub use error::{Result, TernionError};
pub use identity::{Entity, Id, Predicate};
pub use triple::{Object, Subject, Triple};
pub use value::Value;
