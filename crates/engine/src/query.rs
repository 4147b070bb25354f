//! Query evaluator: bound/unbound patterns and set algebra.
//!
//! Two-bound-term patterns resolve through the index whose composite key
//! matches the bound pair, so their cost tracks the result set, not the
//! store size. One-bound patterns fall back to the subject index or to a
//! restricted scan; the zero-bound pattern is the full canonical set.

use rustc_hash::FxHashSet;
use ternion_core::{Entity, Object, Predicate, Result, Subject, TernionError, Triple};
use tracing::trace;

use crate::store::TripleStore;

/// A triple pattern with any combination of bound and free terms.
#[derive(Debug, Clone, Default)]
pub struct TriplePattern {
    /// Bound subject, or free.
    pub subject: Option<Subject>,
    /// Bound predicate, or free.
    pub predicate: Option<Predicate>,
    /// Bound object, or free.
    pub object: Option<Object>,
}

impl TriplePattern {
    /// The fully free pattern (matches every triple).
    pub fn any() -> Self {
        Self::default()
    }

    /// Bind the subject.
    pub fn with_subject(mut self, s: impl Into<Subject>) -> Self {
        self.subject = Some(s.into());
        self
    }

    /// Bind the predicate.
    pub fn with_predicate(mut self, p: &Predicate) -> Self {
        self.predicate = Some(p.clone());
        self
    }

    /// Bind the object.
    pub fn with_object(mut self, o: impl Into<Object>) -> Self {
        self.object = Some(o.into());
        self
    }
}

impl TripleStore {
    // =========================================================================
    // Two-bound-term lookups (one composite-key index each)
    // =========================================================================

    /// Objects completing (s, p, ?), via the SP index.
    pub fn objects(&self, s: impl Into<Subject>, p: &Predicate) -> FxHashSet<Object> {
        self.engine
            .objects(&s.into(), p)
            .cloned()
            .unwrap_or_default()
    }

    /// Subjects completing (?, p, o), via the PO index.
    pub fn subjects(&self, p: &Predicate, o: impl Into<Object>) -> FxHashSet<Subject> {
        self.engine
            .subjects(p, &o.into())
            .cloned()
            .unwrap_or_default()
    }

    /// Predicates completing (s, ?, o), via the OS index.
    pub fn predicates(&self, s: impl Into<Subject>, o: impl Into<Object>) -> FxHashSet<Predicate> {
        self.engine
            .predicates(&s.into(), &o.into())
            .cloned()
            .unwrap_or_default()
    }

    // =========================================================================
    // Filter queries (dict-style predicate → object clauses)
    // =========================================================================

    /// Single-pair convenience form of [`TripleStore::get_all`].
    pub fn get_which(&self, p: &Predicate, o: impl Into<Object>) -> FxHashSet<Subject> {
        self.subjects(p, o)
    }

    /// Subjects matching ALL (predicate, object) clauses.
    ///
    /// Each clause resolves through the PO index; the clause results are
    /// intersected. An empty filter fails with `EmptyQuery` — an
    /// unconstrained scan is a distinct, deliberate operation
    /// ([`TripleStore::iter`] or [`TriplePattern::any`]).
    pub fn get_all(&self, filter: &[(Predicate, Object)]) -> Result<FxHashSet<Subject>> {
        let mut clauses = filter.iter();
        let Some((p, o)) = clauses.next() else {
            return Err(TernionError::EmptyQuery);
        };
        let mut result = self.subjects(p, o.clone());
        for (p, o) in clauses {
            if result.is_empty() {
                break;
            }
            let next = self.subjects(p, o.clone());
            result.retain(|s| next.contains(s));
        }
        trace!(clauses = filter.len(), matches = result.len(), "get_all");
        Ok(result)
    }

    /// The single subject matching ALL clauses.
    ///
    /// Fails with `NoResult` when nothing matches and `AmbiguousResult`
    /// when more than one subject does.
    pub fn get(&self, filter: &[(Predicate, Object)]) -> Result<Subject> {
        let mut matches = self.get_all(filter)?.into_iter();
        match (matches.next(), matches.next()) {
            (Some(s), None) => Ok(s),
            (None, _) => Err(TernionError::NoResult),
            (Some(_), Some(_)) => Err(TernionError::AmbiguousResult),
        }
    }

    // =========================================================================
    // Pattern queries (all eight bound/unbound combinations)
    // =========================================================================

    /// Triples matching a bound/unbound pattern.
    ///
    /// Two bound terms use the matching composite-key index; one bound
    /// term restricts a scan (subject via the auxiliary index); zero
    /// bound terms return the full canonical set.
    pub fn matching(&self, pattern: &TriplePattern) -> FxHashSet<Triple> {
        match (&pattern.subject, &pattern.predicate, &pattern.object) {
            (Some(s), Some(p), Some(o)) => {
                let t = Triple::new(s.clone(), p.clone(), o.clone());
                if self.contains(&t) {
                    FxHashSet::from_iter([t])
                } else {
                    FxHashSet::default()
                }
            }
            (Some(s), Some(p), None) => self
                .objects(s.clone(), p)
                .into_iter()
                .map(|o| Triple::new(s.clone(), p.clone(), o))
                .collect(),
            (Some(s), None, Some(o)) => self
                .predicates(s.clone(), o.clone())
                .into_iter()
                .map(|p| Triple::new(s.clone(), p, o.clone()))
                .collect(),
            (None, Some(p), Some(o)) => self
                .subjects(p, o.clone())
                .into_iter()
                .map(|s| Triple::new(s, p.clone(), o.clone()))
                .collect(),
            (Some(s), None, None) => self
                .engine
                .attributes(s)
                .into_iter()
                .flat_map(|preds| {
                    preds.iter().flat_map(|(p, objects)| {
                        objects
                            .iter()
                            .map(|o| Triple::new(s.clone(), p.clone(), o.clone()))
                    })
                })
                .collect(),
            (None, Some(p), None) => self.iter().filter(|t| &t.p == p).cloned().collect(),
            (None, None, Some(o)) => self.iter().filter(|t| &t.o == o).cloned().collect(),
            (None, None, None) => self.iter().cloned().collect(),
        }
    }

    // =========================================================================
    // Batch creation
    // =========================================================================

    /// Create one fresh entity per implied row and attach each row's
    /// values.
    ///
    /// A predicate mapped to a single value broadcasts that value to
    /// every new subject; predicates mapped to longer columns are
    /// co-indexed, position by position. Column lengths other than 1 must
    /// agree, otherwise the call fails with `ShapeMismatch` before any
    /// entity is created.
    ///
    /// Not transactional: if a validator rejects a value mid-batch,
    /// triples from earlier rows stay inserted and the error is returned.
    pub fn create_subjects_with(
        &mut self,
        spec: &[(Predicate, Vec<Object>)],
    ) -> Result<Vec<Entity>> {
        if spec.is_empty() {
            return Err(TernionError::EmptyQuery);
        }
        let rows = spec.iter().map(|(_, vals)| vals.len()).max().unwrap_or(0);
        for (_, vals) in spec {
            if vals.len() != 1 && vals.len() != rows {
                return Err(TernionError::ShapeMismatch {
                    expected: rows,
                    got: vals.len(),
                });
            }
        }

        let mut subjects = Vec::with_capacity(rows);
        for row in 0..rows {
            let e = Entity::new();
            for (p, vals) in spec {
                let o = if vals.len() == 1 { &vals[0] } else { &vals[row] };
                self.insert(&e, p, o.clone())?;
            }
            subjects.push(e);
        }
        Ok(subjects)
    }
}
