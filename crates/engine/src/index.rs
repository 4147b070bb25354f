//! Index engine: canonical triple set plus derived composite-key indices.
//!
//! The three composite-key maps are pure functions of the canonical set
//! and are updated in lock-step with it — there is no code path that
//! mutates one without the others. A fourth auxiliary index keyed purely
//! by subject makes attribute scans proportional to the matching triples
//! rather than to the number of known predicates.

use rustc_hash::{FxHashMap, FxHashSet};
use ternion_core::{Entity, Object, Predicate, Subject, Triple};

use crate::mix::{composite, OS, PO, SP};

/// Owns the authoritative triple set and its derived indices.
#[derive(Debug, Default)]
pub(crate) struct IndexEngine {
    /// The authoritative set. Never contains duplicates.
    canonical: FxHashSet<Triple>,
    /// Insertion-order log of net-new triples only.
    log: Vec<Triple>,
    /// mix_SP(subject, predicate) → objects seen under that pair.
    sp: FxHashMap<u128, FxHashSet<Object>>,
    /// mix_PO(predicate, object) → subjects seen under that pair.
    po: FxHashMap<u128, FxHashSet<Subject>>,
    /// mix_OS(object, subject) → predicates seen under that pair.
    os: FxHashMap<u128, FxHashSet<Predicate>>,
    /// subject → predicate → objects; backs attribute scans and
    /// subject-only patterns.
    by_subject: FxHashMap<Subject, FxHashMap<Predicate, FxHashSet<Object>>>,
}

impl IndexEngine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn sp_key(t: &Triple) -> u128 {
        composite(t.s.term_id(), t.p.id().as_u128(), &SP)
    }

    fn po_key(t: &Triple) -> u128 {
        composite(t.p.id().as_u128(), t.o.term_id(), &PO)
    }

    fn os_key(t: &Triple) -> u128 {
        composite(t.o.term_id(), t.s.term_id(), &OS)
    }

    /// Add a triple to the canonical set and every index.
    ///
    /// Returns true for a net-new insertion, false for a no-op
    /// re-insertion. All four indices and the log are updated in this
    /// single call or not at all.
    pub(crate) fn insert(&mut self, t: Triple) -> bool {
        if self.canonical.contains(&t) {
            return false;
        }

        self.sp
            .entry(Self::sp_key(&t))
            .or_default()
            .insert(t.o.clone());
        self.po
            .entry(Self::po_key(&t))
            .or_default()
            .insert(t.s.clone());
        self.os
            .entry(Self::os_key(&t))
            .or_default()
            .insert(t.p.clone());
        self.by_subject
            .entry(t.s.clone())
            .or_default()
            .entry(t.p.clone())
            .or_default()
            .insert(t.o.clone());

        self.canonical.insert(t.clone());
        self.log.push(t);
        true
    }

    pub(crate) fn contains(&self, t: &Triple) -> bool {
        self.canonical.contains(t)
    }

    pub(crate) fn len(&self) -> usize {
        self.canonical.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Every triple exactly once, in insertion order.
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.log.iter()
    }

    /// SP-axis lookup: objects completing (s, p, ?).
    pub(crate) fn objects(&self, s: &Subject, p: &Predicate) -> Option<&FxHashSet<Object>> {
        self.sp
            .get(&composite(s.term_id(), p.id().as_u128(), &SP))
    }

    /// PO-axis lookup: subjects completing (?, p, o).
    pub(crate) fn subjects(&self, p: &Predicate, o: &Object) -> Option<&FxHashSet<Subject>> {
        self.po.get(&composite(p.id().as_u128(), o.term_id(), &PO))
    }

    /// OS-axis lookup: predicates completing (s, ?, o).
    pub(crate) fn predicates(&self, s: &Subject, o: &Object) -> Option<&FxHashSet<Predicate>> {
        self.os.get(&composite(o.term_id(), s.term_id(), &OS))
    }

    /// Auxiliary subject index: full attribute map for one subject.
    pub(crate) fn attributes(
        &self,
        s: &Subject,
    ) -> Option<&FxHashMap<Predicate, FxHashSet<Object>>> {
        self.by_subject.get(s)
    }

    /// Most recently net-new-inserted entity acting as subject.
    pub(crate) fn last_entity_subject(&self) -> Option<&Entity> {
        self.log.iter().rev().find_map(|t| t.s.as_entity())
    }
}
