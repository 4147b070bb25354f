//! Identity model: 128-bit identified terms.
//!
//! Entities and predicates are equal exactly when their identifiers are
//! equal; two independently constructed terms collide with probability
//! 2^-122 (uuid v4 entropy), which the store treats as never.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, TernionError};

/// 128-bit term identifier.
///
/// Generated uniformly at random unless explicitly supplied. The mixer
/// operates on the two 64-bit halves, exposed via [`Id::high`] and
/// [`Id::low`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Id(Uuid);

impl Id {
    /// A fresh random identifier.
    pub fn random() -> Self {
        Id(Uuid::new_v4())
    }

    /// Parse an explicit identifier from its UUID text form.
    pub fn parse(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Id)
            .map_err(|_| TernionError::InvalidIdentifier(s.to_string()))
    }

    /// Construct from a raw 128-bit value.
    pub const fn from_u128(v: u128) -> Self {
        Id(Uuid::from_u128(v))
    }

    /// The identifier as a 128-bit integer.
    pub const fn as_u128(self) -> u128 {
        self.0.as_u128()
    }

    /// High 64 bits.
    pub const fn high(self) -> u64 {
        (self.0.as_u128() >> 64) as u64
    }

    /// Low 64 bits.
    pub const fn low(self) -> u64 {
        self.0.as_u128() as u64
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Check that a name is identifier-shaped: first char alphabetic or `_`,
/// the rest alphanumeric or `_`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// A term usable as subject or object.
///
/// Most entities are anonymous, which is perfectly fine; some carry a
/// human-readable name and/or a locator string. Equality and hashing are
/// defined solely by the identifier: two entities with the same id are the
/// same entity even when constructed independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    id: Id,
    name: Option<String>,
    url: Option<String>,
}

impl Entity {
    /// A fresh anonymous entity.
    pub fn new() -> Self {
        Entity {
            id: Id::random(),
            name: None,
            url: None,
        }
    }

    /// A fresh named entity. Fails with `InvalidName` if the name is not
    /// identifier-shaped.
    pub fn named(name: &str) -> Result<Self> {
        Self::with(Some(name), None, None)
    }

    /// Full constructor: optional name, optional explicit identifier
    /// (UUID text form), optional locator.
    pub fn with(name: Option<&str>, id: Option<&str>, url: Option<&str>) -> Result<Self> {
        if let Some(name) = name {
            if !is_identifier(name) {
                return Err(TernionError::InvalidName(name.to_string()));
            }
        }
        let id = match id {
            Some(s) => Id::parse(s)?,
            None => Id::random(),
        };
        Ok(Entity {
            id,
            name: name.map(str::to_string),
            url: url.map(str::to_string),
        })
    }

    /// The entity's identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The human-readable name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The locator string, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            // Anonymous entities render as the first five hex digits.
            None => write!(f, "_{:.5}", format!("{:032x}", self.id.as_u128())),
        }
    }
}

/// A relation kind.
///
/// Carries its own 128-bit identifier so it can appear as a composite-key
/// term exactly like an [`Entity`]. Predicates are typically constructed
/// once per relation kind and reused across many triples; the value
/// validator lives in the store's validation registry, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predicate {
    id: Id,
    kind: String,
    name: String,
}

impl Predicate {
    /// Declare a new relation kind; the identifier is generated fresh and
    /// the display name defaults to the kind.
    pub fn new(kind: &str) -> Self {
        Predicate {
            id: Id::random(),
            kind: kind.to_string(),
            name: kind.to_string(),
        }
    }

    /// Declare a new relation kind with a display name that differs from
    /// it.
    pub fn named(kind: &str, name: &str) -> Self {
        Predicate {
            id: Id::random(),
            kind: kind.to_string(),
            name: name.to_string(),
        }
    }

    /// The predicate's identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The declared relation kind.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Predicate {}

impl Hash for Predicate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entities_have_distinct_ids() {
        let e1 = Entity::new();
        let e2 = Entity::new();
        assert_ne!(e1, e2);
        assert_ne!(e1.id(), e2.id());
    }

    #[test]
    fn identity_uniqueness_over_large_sample() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(Entity::new().id()));
        }
    }

    #[test]
    fn equality_is_by_id_only() {
        let id = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        let a = Entity::with(Some("left_eye"), Some(id), None).unwrap();
        let b = Entity::with(None, Some(id), Some("file:///tmp/x")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn roundtrip_construction() {
        let e = Entity::with(
            Some("head"),
            Some("67e55044-10b1-426f-9247-bb680e5fe0c8"),
            Some("https://example.org/head"),
        )
        .unwrap();
        assert_eq!(e.to_string(), "head");

        let rebuilt = Entity::with(
            Some("head"),
            Some(&e.id().to_string()),
            e.url(),
        )
        .unwrap();
        assert_eq!(e, rebuilt);
    }

    #[test]
    fn malformed_id_is_rejected() {
        let err = Entity::with(None, Some("not-a-uuid"), None).unwrap_err();
        assert!(matches!(err, TernionError::InvalidIdentifier(_)));
    }

    #[test]
    fn malformed_name_is_rejected() {
        assert!(Entity::named("left eye").is_err());
        assert!(Entity::named("1eye").is_err());
        assert!(Entity::named("").is_err());
        assert!(Entity::named("left_eye").is_ok());
        assert!(Entity::named("_x1").is_ok());
    }

    #[test]
    fn anonymous_display_uses_id_prefix() {
        let e = Entity::with(None, Some("67e55044-10b1-426f-9247-bb680e5fe0c8"), None).unwrap();
        assert_eq!(e.to_string(), "_67e55");
    }

    #[test]
    fn predicate_defaults_name_to_kind() {
        let p = Predicate::new("has");
        assert_eq!(p.kind(), "has");
        assert_eq!(p.name(), "has");
        assert_eq!(p.to_string(), "has");
    }

    #[test]
    fn predicate_name_can_differ_from_kind() {
        let p = Predicate::named("has_part", "part");
        assert_eq!(p.kind(), "has_part");
        assert_eq!(p.name(), "part");
        assert_eq!(p.to_string(), "part");
    }

    #[test]
    fn predicates_with_same_kind_are_distinct() {
        let p1 = Predicate::new("has");
        let p2 = Predicate::new("has");
        assert_ne!(p1, p2);
    }

    #[test]
    fn id_halves_reassemble() {
        let id = Id::random();
        let whole = ((id.high() as u128) << 64) | id.low() as u128;
        assert_eq!(whole, id.as_u128());
    }
}
