//! End-to-end scenarios exercising the public store surface.

use rustc_hash::FxHashSet;
use ternion::{
    Entity, Object, Predicate, Subject, TernionError, Triple, TriplePattern, TripleStore, Value,
};

#[test]
fn create_query_copy_roundtrip() {
    let mut store = TripleStore::new();
    let name = Predicate::new("name");

    // Create one subject carrying name = "head".
    let subjects = store
        .create_subjects_with(&[(name.clone(), vec![Object::from("head")])])
        .unwrap();
    assert_eq!(subjects.len(), 1);
    let e = subjects[0].clone();

    // Its attribute map is exactly {name: {"head"}}.
    let attrs = store.attributes_of(&e);
    assert_eq!(attrs.len(), 1);
    assert_eq!(
        attrs[&name],
        FxHashSet::from_iter([Object::from("head")])
    );

    // A filter query finds it, and only it.
    let found = store.get(&[(name.clone(), "head".into())]).unwrap();
    assert_eq!(found.as_entity(), Some(&e));

    // Copy the full attribute set onto a second entity.
    let e2 = Entity::new();
    store.set_all(&[(&e2).into()], &attrs).unwrap();
    assert_eq!(store.last_added().unwrap(), e2);

    // The canonical set is exactly the two expected triples.
    let all: FxHashSet<Triple> = store.iter().cloned().collect();
    let expected = FxHashSet::from_iter([
        Triple::new(&e, name.clone(), "head"),
        Triple::new(&e2, name, "head"),
    ]);
    assert_eq!(all, expected);
}

#[test]
fn reified_fact_is_queryable_as_subject() {
    let mut store = TripleStore::new();
    let hand = Entity::named("hand").unwrap();
    let ring = Entity::named("ring").unwrap();
    let has = Predicate::new("has");
    let destroyed = Predicate::new("destroyed");

    let fact = store.insert(&hand, &has, &ring).unwrap();
    store.insert(fact.clone(), &destroyed, true).unwrap();

    // The base fact survives the annotation.
    assert!(store.contains(&fact));

    // The annotation is a fact about the fact.
    let annotation = Triple::new(fact.clone(), destroyed.clone(), true);
    assert!(store.contains(&annotation));

    // The reified fact works as a bound subject in its own right.
    let about_fact = store.matching(&TriplePattern::any().with_subject(fact.clone()));
    assert_eq!(about_fact, FxHashSet::from_iter([annotation]));

    // And it is reachable backwards from the annotation's object.
    assert_eq!(
        store.get_which(&destroyed, true),
        FxHashSet::from_iter([Subject::from(fact)])
    );
}

#[test]
fn filter_intersection_matches_manual_set_algebra() {
    let mut store = TripleStore::new();
    let kind = Predicate::new("kind");
    let side = Predicate::new("side");

    let spec = vec![
        (kind.clone(), vec![Object::from("eye")]),
        (side.clone(), vec![Object::from("left"), Object::from("right")]),
    ];
    store.create_subjects_with(&spec).unwrap();

    let combined = store
        .get_all(&[(kind.clone(), "eye".into()), (side.clone(), "left".into())])
        .unwrap();
    let manual: FxHashSet<Subject> = store
        .get_which(&kind, "eye")
        .intersection(&store.get_which(&side, "left"))
        .cloned()
        .collect();

    assert_eq!(combined, manual);
    assert_eq!(combined.len(), 1);
}

#[test]
fn rejected_insert_is_atomic() {
    let mut store = TripleStore::new();
    let e = Entity::new();
    let age = Predicate::new("age");
    let name = Predicate::new("name");

    store.insert(&e, &name, "alice").unwrap();
    store.set_check(&age, |o| matches!(o.as_literal(), Some(Value::Int(n)) if *n >= 0));

    let snapshot: FxHashSet<Triple> = store.iter().cloned().collect();
    let err = store.insert(&e, &age, -1i64).unwrap_err();
    assert!(matches!(err, TernionError::Validation { .. }));

    // Canonical set and every index axis are unchanged.
    assert_eq!(store.iter().cloned().collect::<FxHashSet<_>>(), snapshot);
    assert!(store.objects(&e, &age).is_empty());
    assert!(store.subjects(&age, -1i64).is_empty());
    assert!(store.predicates(&e, -1i64).is_empty());
    assert_eq!(store.last_added().unwrap(), e);
}

#[test]
fn two_bound_lookups_cover_all_three_axes() {
    let mut store = TripleStore::new();
    let body = Entity::named("body").unwrap();
    let part = Predicate::new("part");

    let head = Entity::named("head").unwrap();
    store.insert(&body, &part, &head).unwrap();

    assert_eq!(
        store.objects(&body, &part),
        FxHashSet::from_iter([Object::from(&head)])
    );
    assert_eq!(
        store.subjects(&part, &head),
        FxHashSet::from_iter([Subject::from(&body)])
    );
    assert_eq!(
        store.predicates(&body, &head),
        FxHashSet::from_iter([part])
    );
}
