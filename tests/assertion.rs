use tristore::construct::{Fragment, Triple};
use tristore::error::TristoreError;
use tristore::store::TripleStore;

// makes the store's rejection warnings visible when running with
// RUST_LOG=tristore=warn; repeated installs across tests are fine
fn init_diagnostics() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn setup() -> TripleStore {
    TripleStore::with_batch(&[
        Fragment::full("a", "p1", "b"),
        Fragment::tail("p2", "c"),
    ])
}

#[test]
fn batch_decodes_with_carried_subject() {
    let store = setup();
    assert_eq!(store.size(), 2);
    assert!(store.has("a", "p1", "b"));
    assert!(store.has("a", "p2", "c"), "subject carried into second fragment");
}

#[test]
fn asserting_is_idempotent() {
    let mut store = setup();
    store.assert(&[Fragment::full("a", "p1", "b")]);
    assert_eq!(store.size(), 2, "duplicate assert must not grow the store");
    let all: Vec<Triple> = store.query(None, None, None).collect();
    assert_eq!(all.len(), 2);
    let added = store.try_assert(&[Fragment::full("a", "p1", "b")]).expect("batch ok");
    assert_eq!(added, 0);
}

#[test]
fn empty_batch_is_rejected_without_mutation() {
    init_diagnostics();
    let mut store = setup();
    store.assert(&[]);
    assert_eq!(store.size(), 2);
    let err = store.try_assert(&[]).unwrap_err();
    assert!(matches!(err, TristoreError::EmptyBatch));
}

#[test]
fn leading_partial_fragment_is_rejected_without_mutation() {
    init_diagnostics();
    let mut store = setup();
    // nothing to carry the subject forward from
    store.assert(&[Fragment::tail("p9", "z"), Fragment::full("x", "y", "z")]);
    assert_eq!(store.size(), 2, "malformed batch must leave state unchanged");
    assert!(!store.has("x", "y", "z"));
    let err = store
        .try_assert(&[Fragment::last("z")])
        .unwrap_err();
    assert!(matches!(err, TristoreError::Malformed { .. }));
}

#[test]
fn wildcard_in_assert_batch_is_rejected_without_mutation() {
    init_diagnostics();
    let mut store = setup();
    let batch: Vec<Fragment> =
        serde_json::from_str(r#"[["x", null, "z"]]"#).expect("wire form parses");
    let err = store.try_assert(&batch).unwrap_err();
    assert!(matches!(err, TristoreError::Malformed { .. }));
    assert_eq!(store.size(), 2);
}

#[test]
fn fluent_chaining() {
    let mut store = TripleStore::new();
    store
        .assert(&[Fragment::full("a", "p1", "b")])
        .assert(&[Fragment::full("a", "p2", "c")])
        .retract(&[Fragment::full("a", "p1", "b")]);
    assert_eq!(store.size(), 1);
    assert!(store.has("a", "p2", "c"));
}

#[test]
fn wire_form_batch() {
    // the JSON shape a caller would hand over: arrays of 1 to 3 strings
    let batch: Vec<Fragment> =
        serde_json::from_str(r#"[["a","p1","b"],["p2","c"],["d"]]"#).expect("wire form parses");
    let store = TripleStore::with_batch(&batch);
    assert_eq!(store.size(), 3);
    assert!(store.has("a", "p2", "d"), "predicate carried into third fragment");
}

#[test]
fn scenario_assert_query_retract_turtle() {
    let mut store = setup();
    let all: Vec<Triple> = store.query(None, None, None).collect();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&Triple::of("a", "p1", "b")));
    assert!(all.contains(&Triple::of("a", "p2", "c")));

    store.retract(&[Fragment::full("a", "p1", "b")]);
    let remaining: Vec<Triple> = store.query(None, None, None).collect();
    assert_eq!(remaining, vec![Triple::of("a", "p2", "c")]);

    let fragments: Vec<Fragment> = store.turtle(None, None, None).collect();
    assert_eq!(fragments, vec![Fragment::full("a", "p2", "c")]);
}
