//! End-to-end pipeline scenarios: settled inputs drive the estimator and
//! the result lands in the store.

mod common;

use std::time::Duration;

use common::{complete_inputs, MockAnswer, MockEstimator};
use mokumitsu::estimate::EstimatePipeline;
use mokumitsu::store::ProjectStore;

const DEBOUNCE: Duration = Duration::from_millis(40);

/// Debounce delay plus estimator turnaround, with slack.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(300)).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn successful_estimate_updates_amount() {
    let store = ProjectStore::new();
    let estimator = MockEstimator::new(MockAnswer::Success(123_456));
    let _pipeline = EstimatePipeline::start(store.clone(), estimator.clone(), DEBOUNCE);

    store.set_inputs(complete_inputs());
    settle().await;

    assert_eq!(store.get().amount, 123_456);
    assert_eq!(estimator.call_count(), 1);
    assert_eq!(estimator.calls.lock()[0], complete_inputs());
}

#[tokio::test(flavor = "multi_thread")]
async fn reported_failure_resets_amount_to_zero() {
    let store = ProjectStore::new();
    store.set_amount(999);
    let estimator = MockEstimator::new(MockAnswer::ReportedFailure);
    let _pipeline = EstimatePipeline::start(store.clone(), estimator, DEBOUNCE);

    store.set_inputs(complete_inputs());
    settle().await;

    assert_eq!(store.get().amount, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn collaborator_error_resets_amount_to_zero() {
    let store = ProjectStore::new();
    store.set_amount(999);
    let estimator = MockEstimator::new(MockAnswer::Error);
    let _pipeline = EstimatePipeline::start(store.clone(), estimator, DEBOUNCE);

    store.set_inputs(complete_inputs());
    settle().await;

    assert_eq!(store.get().amount, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn incomplete_inputs_never_reach_the_estimator() {
    let store = ProjectStore::new();
    let estimator = MockEstimator::new(MockAnswer::Success(1));
    let _pipeline = EstimatePipeline::start(store.clone(), estimator.clone(), DEBOUNCE);

    // Each write settles on its own, but some field is always missing.
    store.set_floors(3);
    settle().await;
    store.set_span(10.5);
    settle().await;
    store.set_depth(15.0);
    settle().await;

    assert_eq!(estimator.call_count(), 0);
    assert_eq!(store.get().amount, 0);

    // Filling in the last field completes the gate.
    store.set_fire_prevention_area("防火地域");
    settle().await;
    assert_eq!(estimator.call_count(), 1);
    assert_eq!(store.get().amount, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn write_back_does_not_retrigger_the_pipeline() {
    let store = ProjectStore::new();
    let estimator = MockEstimator::new(MockAnswer::Success(123_456));
    let _pipeline = EstimatePipeline::start(store.clone(), estimator.clone(), DEBOUNCE);

    store.set_inputs(complete_inputs());
    settle().await;
    // The amount write-back is not a tracked field; without this property
    // the pipeline would loop forever.
    settle().await;

    assert_eq!(estimator.call_count(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn dispatched_estimate_completes_after_stop() {
    let store = ProjectStore::new();
    let estimator =
        MockEstimator::with_delay(MockAnswer::Success(123_456), Duration::from_millis(100));
    let pipeline = EstimatePipeline::start(store.clone(), estimator.clone(), DEBOUNCE);

    store.set_inputs(complete_inputs());
    // Wait for the debounce fire and dispatch, then stop while the
    // estimator is still in flight.
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(estimator.call_count(), 1);
    pipeline.stop();

    settle().await;
    // No cancellation of in-flight calls: the result still lands.
    assert_eq!(store.get().amount, 123_456);

    // But no new derivations are triggered after stop.
    store.set_floors(9);
    settle().await;
    assert_eq!(estimator.call_count(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn overlapping_completions_are_last_write_wins() {
    let store = ProjectStore::new();
    // Slow estimator: a second debounce cycle dispatches while the first
    // call is still outstanding. Both complete and both write back; the
    // later completion owns the final amount.
    let estimator =
        MockEstimator::with_delay(MockAnswer::Success(777), Duration::from_millis(150));
    let _pipeline = EstimatePipeline::start(store.clone(), estimator.clone(), DEBOUNCE);

    store.set_inputs(complete_inputs());
    tokio::time::sleep(Duration::from_millis(80)).await;
    store.set_floors(4);
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(estimator.call_count(), 2);
    assert_eq!(store.get().amount, 777);
}
