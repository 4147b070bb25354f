//! Ternion — an embeddable semantic triplestore.
//!
//! A database of (subject, predicate, object) facts over typed relations,
//! with entity identity, predicate-level value validation, reification (a
//! fact can itself be the subject of another fact), and pattern queries
//! combinable through set algebra. Designed for embedding inside a host
//! program as a knowledge base, not as a standalone server.
//!
//! # Example
//!
//! ```
//! use ternion::{Entity, Predicate, TripleStore, Value};
//!
//! let mut store = TripleStore::new();
//! let name = Predicate::new("name");
//! let side = Predicate::new("side");
//!
//! // Only accept string literals for `name`.
//! store.set_check(&name, |o| matches!(o.as_literal(), Some(Value::Str(_))));
//!
//! let eye = Entity::new();
//! store.insert(&eye, &name, "eye")?;
//! store.insert(&eye, &side, "left")?;
//!
//! let found = store.get(&[(side, "left".into())])?;
//! assert_eq!(found.as_entity(), Some(&eye));
//! # Ok::<(), ternion::TernionError>(())
//! ```

// ============================================================================
// Public API — re-exported from the internal crates
// ============================================================================

// Data model
pub use ternion_core::{Entity, Id, Object, Predicate, Subject, Triple, Value};

// Errors
pub use ternion_core::{Result, TernionError};

// Store, query evaluator and concurrency facade
pub use ternion_engine::{SharedStore, TriplePattern, TripleStore, Validator};

// Composite key mixer (exposed for diagnostics and tuning)
pub use ternion_engine::mix;
