use std::sync::{Arc, Mutex};

use super::*;
use crate::net::types::InstituteRef;
use crate::state::session::Field;

fn institute() -> InstituteRef {
    InstituteRef {
        id: "1".into(),
        name: "ITCEW Institute".into(),
        code: "ITCEW".into(),
        logo: None,
    }
}

// =============================================================================
// dispatch / snapshot
// =============================================================================

#[test]
fn new_store_snapshot_is_default_session() {
    let store = SessionStore::new();
    assert_eq!(store.snapshot(), Session::default());
}

#[test]
fn dispatch_applies_reducer() {
    let store = SessionStore::new();
    store.dispatch(Action::SetInstitute { institute: institute() });
    let s = store.snapshot();
    assert!(s.selected_institute.is_some());
    assert!(!s.is_loading);
}

#[test]
fn snapshot_is_detached_from_store() {
    let store = SessionStore::new();
    let mut snapshot = store.snapshot();
    snapshot.is_auth = true;
    assert!(!store.snapshot().is_auth);
}

#[test]
fn dispatches_accumulate_in_order() {
    let store = SessionStore::new();
    store.dispatch(Action::HandleInput { field: Field::Username, value: "alice".into() });
    store.dispatch(Action::HandleInput { field: Field::Username, value: "bob".into() });
    assert_eq!(store.snapshot().data.username, "bob");
}

// =============================================================================
// subscribe
// =============================================================================

#[test]
fn subscriber_sees_action_and_reduced_state() {
    let store = SessionStore::new();
    let seen: Arc<Mutex<Vec<(Action, bool)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |action, session| {
        sink.lock().unwrap().push((action.clone(), session.is_loading));
    });

    store.dispatch(Action::Loading);
    store.dispatch(Action::OperationFailed);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], (Action::Loading, true));
    assert_eq!(seen[1], (Action::OperationFailed, false));
}

#[test]
fn multiple_subscribers_all_notified() {
    let store = SessionStore::new();
    let a = Arc::new(Mutex::new(0usize));
    let b = Arc::new(Mutex::new(0usize));
    for counter in [&a, &b] {
        let counter = Arc::clone(counter);
        store.subscribe(move |_, _| *counter.lock().unwrap() += 1);
    }
    store.dispatch(Action::Loading);
    assert_eq!(*a.lock().unwrap(), 1);
    assert_eq!(*b.lock().unwrap(), 1);
}

#[test]
fn subscriber_added_after_dispatch_misses_earlier_actions() {
    let store = SessionStore::new();
    store.dispatch(Action::Loading);
    let count = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&count);
    store.subscribe(move |_, _| *sink.lock().unwrap() += 1);
    store.dispatch(Action::OperationFailed);
    assert_eq!(*count.lock().unwrap(), 1);
}
