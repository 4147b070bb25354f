//! Triples: (subject, predicate, object) facts.
//!
//! A subject is an entity or another triple (reification: a fact can be
//! annotated by asserting a further triple whose subject is that fact).
//! An object is an entity, a literal, or another triple.

use std::fmt;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_128;

use crate::identity::{Entity, Predicate};
use crate::value::Value;

/// Subject position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    /// An entity term.
    Entity(Entity),
    /// A reified fact.
    Fact(Box<Triple>),
}

impl Subject {
    /// 128-bit identifier used as a composite-key term.
    pub fn term_id(&self) -> u128 {
        match self {
            Subject::Entity(e) => e.id().as_u128(),
            Subject::Fact(t) => t.term_id(),
        }
    }

    /// The entity, if this subject is one.
    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Subject::Entity(e) => Some(e),
            Subject::Fact(_) => None,
        }
    }

    /// The reified fact, if this subject is one.
    pub fn as_fact(&self) -> Option<&Triple> {
        match self {
            Subject::Entity(_) => None,
            Subject::Fact(t) => Some(t),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Entity(e) => e.fmt(f),
            Subject::Fact(t) => write!(f, "({t})"),
        }
    }
}

impl From<Entity> for Subject {
    fn from(e: Entity) -> Self {
        Subject::Entity(e)
    }
}

impl From<&Entity> for Subject {
    fn from(e: &Entity) -> Self {
        Subject::Entity(e.clone())
    }
}

impl From<Triple> for Subject {
    fn from(t: Triple) -> Self {
        Subject::Fact(Box::new(t))
    }
}

impl From<&Triple> for Subject {
    fn from(t: &Triple) -> Self {
        Subject::Fact(Box::new(t.clone()))
    }
}

/// Object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Object {
    /// An entity term.
    Entity(Entity),
    /// A literal value.
    Literal(Value),
    /// A reified fact.
    Fact(Box<Triple>),
}

impl Object {
    /// 128-bit identifier used as a composite-key term.
    pub fn term_id(&self) -> u128 {
        match self {
            Object::Entity(e) => e.id().as_u128(),
            Object::Literal(v) => v.term_id(),
            Object::Fact(t) => t.term_id(),
        }
    }

    /// The entity, if this object is one.
    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Object::Entity(e) => Some(e),
            _ => None,
        }
    }

    /// The literal, if this object is one.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Object::Literal(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Entity(e) => e.fmt(f),
            Object::Literal(v) => v.fmt(f),
            Object::Fact(t) => write!(f, "({t})"),
        }
    }
}

impl From<Entity> for Object {
    fn from(e: Entity) -> Self {
        Object::Entity(e)
    }
}

impl From<&Entity> for Object {
    fn from(e: &Entity) -> Self {
        Object::Entity(e.clone())
    }
}

impl From<Value> for Object {
    fn from(v: Value) -> Self {
        Object::Literal(v)
    }
}

impl From<&str> for Object {
    fn from(s: &str) -> Self {
        Object::Literal(Value::from(s))
    }
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Object::Literal(Value::from(b))
    }
}

impl From<i64> for Object {
    fn from(i: i64) -> Self {
        Object::Literal(Value::from(i))
    }
}

impl From<f64> for Object {
    fn from(x: f64) -> Self {
        Object::Literal(Value::from(x))
    }
}

impl From<Triple> for Object {
    fn from(t: Triple) -> Self {
        Object::Fact(Box::new(t))
    }
}

/// An ordered (subject, predicate, object) fact.
///
/// Two triples are equal iff all three components are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Subject term.
    pub s: Subject,
    /// Predicate term.
    pub p: Predicate,
    /// Object term.
    pub o: Object,
}

impl Triple {
    /// Build a triple from anything convertible into its term positions.
    pub fn new(s: impl Into<Subject>, p: Predicate, o: impl Into<Object>) -> Self {
        Triple {
            s: s.into(),
            p,
            o: o.into(),
        }
    }

    /// Deterministic 128-bit identifier for use as a composite-key term
    /// when this fact is itself the subject of another fact.
    pub fn term_id(&self) -> u128 {
        let mut buf = Vec::with_capacity(49);
        buf.push(b't');
        buf.extend_from_slice(&self.s.term_id().to_le_bytes());
        buf.extend_from_slice(&self.p.id().as_u128().to_le_bytes());
        buf.extend_from_slice(&self.o.term_id().to_le_bytes());
        xxh3_128(&buf)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.s, self.p, self.o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_componentwise() {
        let e = Entity::new();
        let p = Predicate::new("has");
        let t1 = Triple::new(&e, p.clone(), "ring");
        let t2 = Triple::new(&e, p.clone(), "ring");
        let t3 = Triple::new(&e, p, "crown");
        assert_eq!(t1, t2);
        assert_ne!(t1, t3);
    }

    #[test]
    fn term_id_is_deterministic_and_order_sensitive() {
        let a = Entity::new();
        let b = Entity::new();
        let p = Predicate::new("knows");
        let ab = Triple::new(&a, p.clone(), &b);
        let ba = Triple::new(&b, p, &a);
        assert_eq!(ab.term_id(), ab.clone().term_id());
        assert_ne!(ab.term_id(), ba.term_id());
    }

    #[test]
    fn reified_subject_nests() {
        let hand = Entity::named("hand").unwrap();
        let ring = Entity::named("ring").unwrap();
        let has = Predicate::new("has");
        let destroyed = Predicate::new("destroyed");

        let fact = Triple::new(&hand, has, &ring);
        let annotation = Triple::new(fact.clone(), destroyed, true);
        assert_eq!(annotation.s.as_fact(), Some(&fact));
        assert_eq!(annotation.to_string(), "(hand has ring) destroyed true");
    }

    #[test]
    fn triple_and_entity_term_ids_do_not_collide_trivially() {
        let e = Entity::new();
        let p = Predicate::new("p");
        let t = Triple::new(&e, p, 1i64);
        assert_ne!(t.term_id(), e.id().as_u128());
    }
}
