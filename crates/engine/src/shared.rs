//! Thread-safe facade over a [`TripleStore`].
//!
//! The engine itself is synchronous and the whole of its state (canonical
//! set, three indices, subject index, insertion log) is one unit of
//! mutual exclusion: a partially updated index set is an observable
//! inconsistency, not just a performance artifact. `SharedStore` wraps
//! the store in a single reader-writer lock accordingly — readers run
//! concurrently, any writer excludes everything else.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use ternion_core::{Object, Predicate, Result, Subject, Triple};

use crate::store::TripleStore;

/// Cloneable handle to a shared store.
///
/// Clone is cheap (an `Arc` clone); all clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<TripleStore>>,
}

impl SharedStore {
    /// Create a handle to a fresh empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing store.
    pub fn from_store(store: TripleStore) -> Self {
        SharedStore {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Shared read access. Hold the guard across related lookups to get
    /// a consistent view.
    pub fn read(&self) -> RwLockReadGuard<'_, TripleStore> {
        self.inner.read()
    }

    /// Exclusive write access.
    pub fn write(&self) -> RwLockWriteGuard<'_, TripleStore> {
        self.inner.write()
    }

    /// Insert a fact (single-call convenience; takes the write lock).
    pub fn insert(
        &self,
        s: impl Into<Subject>,
        p: &Predicate,
        o: impl Into<Object>,
    ) -> Result<Triple> {
        self.inner.write().insert(s, p, o)
    }

    /// Containment test (single-call convenience; takes the read lock).
    pub fn contains(&self, t: &Triple) -> bool {
        self.inner.read().contains(t)
    }
}
