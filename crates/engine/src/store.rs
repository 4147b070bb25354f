//! The triplestore: validation-gated writes over the index engine.
//!
//! `TripleStore` owns the index engine and the validation registry. Writes
//! take `&mut self` and reads take `&self`, so within one process the
//! borrow checker enforces the one-writer/many-readers contract; see
//! [`crate::shared::SharedStore`] for the cross-thread facade.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use ternion_core::{Entity, Object, Predicate, Result, Subject, TernionError, Triple};
use tracing::{debug, trace};

use crate::index::IndexEngine;

/// Per-predicate object acceptance hook.
pub type Validator = Box<dyn Fn(&Object) -> bool + Send + Sync>;

/// An embeddable semantic triplestore.
///
/// Owns the canonical triple set, three composite-key indices (SP, PO,
/// OS), an auxiliary subject index, an insertion-order log, and the
/// validation registry.
#[derive(Default)]
pub struct TripleStore {
    pub(crate) engine: IndexEngine,
    validators: FxHashMap<Predicate, Validator>,
}

impl TripleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TripleStore {
            engine: IndexEngine::new(),
            validators: FxHashMap::default(),
        }
    }

    // =========================================================================
    // Validation registry
    // =========================================================================

    /// Register (or replace) the validator for a predicate.
    ///
    /// Validators see only the object term and apply to future insertions
    /// only; existing triples are never re-validated.
    pub fn set_check<F>(&mut self, p: &Predicate, check: F)
    where
        F: Fn(&Object) -> bool + Send + Sync + 'static,
    {
        self.validators.insert(p.clone(), Box::new(check));
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Insert a (subject, predicate, object) fact.
    ///
    /// Re-inserting an existing triple is a no-op. If the predicate's
    /// validator rejects the object, nothing is mutated. A reified
    /// subject must already be a fact in this store.
    pub fn insert(
        &mut self,
        s: impl Into<Subject>,
        p: &Predicate,
        o: impl Into<Object>,
    ) -> Result<Triple> {
        let s = s.into();
        let o = o.into();

        if let Subject::Fact(inner) = &s {
            if !self.engine.contains(inner) {
                return Err(TernionError::ReifiedSubjectMissing(inner.to_string()));
            }
        }

        if let Some(check) = self.validators.get(p) {
            if !check(&o) {
                debug!(predicate = %p, object = %o, "validator rejected object");
                return Err(TernionError::Validation {
                    predicate: p.to_string(),
                    object: o.to_string(),
                });
            }
        }

        let triple = Triple::new(s, p.clone(), o);
        let net_new = self.engine.insert(triple.clone());
        trace!(%triple, net_new, "insert");
        Ok(triple)
    }

    /// Insert the Cartesian product subjects × objects under one
    /// predicate.
    ///
    /// Not transactional: a validation failure mid-batch leaves earlier
    /// insertions in place.
    pub fn add_all(
        &mut self,
        subjects: &[Subject],
        objects: &[Object],
        p: &Predicate,
    ) -> Result<Vec<Triple>> {
        let mut results = Vec::with_capacity(subjects.len() * objects.len());
        for s in subjects {
            for o in objects {
                results.push(self.insert(s.clone(), p, o.clone())?);
            }
        }
        Ok(results)
    }

    /// For each subject, insert every (predicate, object) pair of the
    /// mapping. Accepts the shape [`TripleStore::attributes_of`] returns,
    /// so an entity's full attribute set can be copied onto others.
    ///
    /// Not transactional: a validation failure mid-batch leaves earlier
    /// insertions in place.
    pub fn set_all(
        &mut self,
        subjects: &[Subject],
        predobjects: &FxHashMap<Predicate, FxHashSet<Object>>,
    ) -> Result<Vec<Triple>> {
        let mut results = Vec::new();
        for s in subjects {
            for (p, objects) in predobjects {
                for o in objects {
                    results.push(self.insert(s.clone(), p, o.clone())?);
                }
            }
        }
        Ok(results)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Whether a fully bound triple is in the store.
    pub fn contains(&self, t: &Triple) -> bool {
        self.engine.contains(t)
    }

    /// Number of triples in the canonical set.
    pub fn len(&self) -> usize {
        self.engine.len()
    }

    /// Whether the canonical set is empty.
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    /// Every triple exactly once, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.engine.iter()
    }

    /// Full attribute map of a subject: predicate → set of objects.
    ///
    /// Backed by the auxiliary subject index, so cost is proportional to
    /// the matching triples. Unknown subjects yield an empty map.
    pub fn attributes_of(
        &self,
        subject: impl Into<Subject>,
    ) -> FxHashMap<Predicate, FxHashSet<Object>> {
        self.engine
            .attributes(&subject.into())
            .cloned()
            .unwrap_or_default()
    }

    /// The most recently net-new-inserted entity acting as subject.
    pub fn last_added(&self) -> Result<Entity> {
        self.engine
            .last_entity_subject()
            .cloned()
            .ok_or(TernionError::EmptyStore)
    }
}

impl fmt::Debug for TripleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripleStore")
            .field("triples", &self.engine.len())
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl fmt::Display for TripleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self.iter() {
            writeln!(f, "{t}")?;
        }
        Ok(())
    }
}
