//! Change-detector contract: only the four tracked input fields fire the
//! watcher, exactly once per differing snapshot.

mod common;

use std::sync::Arc;

use parking_lot::Mutex;

use mokumitsu::store::{watch_inputs, ProjectStore, RenderMode, UserInputs};

fn recording_watch(store: &ProjectStore) -> (Arc<Mutex<Vec<UserInputs>>>, mokumitsu::store::Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen2 = Arc::clone(&seen);
    let sub = watch_inputs(store, move |inputs| seen2.lock().push(inputs));
    (seen, sub)
}

#[test]
fn registration_alone_does_not_fire() {
    let store = ProjectStore::new();
    let (seen, _sub) = recording_watch(&store);
    assert!(seen.lock().is_empty());
}

#[test]
fn amount_only_writes_never_fire() {
    let store = ProjectStore::new();
    let (seen, _sub) = recording_watch(&store);

    store.set_amount(100);
    store.set_amount(200);
    store.set_amount(0);

    assert!(seen.lock().is_empty());
}

#[test]
fn mode_only_writes_never_fire() {
    let store = ProjectStore::new();
    let (seen, _sub) = recording_watch(&store);

    store.set_mode(RenderMode::Export);
    store.set_mode(RenderMode::Interactive);

    assert!(seen.lock().is_empty());
}

#[test]
fn tracked_field_change_fires_with_post_change_values() {
    let store = ProjectStore::new();
    let (seen, _sub) = recording_watch(&store);

    store.set_span(10.5);

    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].span, 10.5);
    assert_eq!(seen[0].floors, 1);
}

#[test]
fn fires_once_per_distinct_snapshot() {
    let store = ProjectStore::new();
    let (seen, _sub) = recording_watch(&store);

    store.set_floors(2);
    store.set_floors(3);
    // Writing the same value produces an identical snapshot: no fire.
    store.set_floors(3);
    store.set_depth(15.0);

    let seen = seen.lock();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].floors, 2);
    assert_eq!(seen[1].floors, 3);
    assert_eq!(seen[2].depth, 15.0);
}

#[test]
fn batch_input_write_fires_once() {
    let store = ProjectStore::new();
    let (seen, _sub) = recording_watch(&store);

    store.set_inputs(common::complete_inputs());

    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].fire_prevention_area, "防火地域");
}

#[test]
fn mixed_write_with_tracked_field_fires() {
    let store = ProjectStore::new();
    let (seen, _sub) = recording_watch(&store);

    // Amount and a tracked field in one apply: the tracked diff wins.
    store.apply(mokumitsu::store::ProjectPatch {
        amount: Some(999),
        floors: Some(4),
        ..Default::default()
    });

    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn unsubscribed_watch_stops_firing() {
    let store = ProjectStore::new();
    let (seen, sub) = recording_watch(&store);

    store.set_floors(2);
    sub.unsubscribe();
    sub.unsubscribe();
    store.set_floors(3);

    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn reset_fires_when_inputs_had_changed() {
    let store = ProjectStore::new();
    store.set_inputs(common::complete_inputs());

    let (seen, _sub) = recording_watch(&store);
    store.reset();

    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], UserInputs::default());
}
