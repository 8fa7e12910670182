//! Change detection over the four user-input fields.
//!
//! A watcher keeps its own previous snapshot of the tracked fields and fires
//! only when a store write actually changed one of them. Amount-only or
//! mode-only writes never reach the callback, so the estimate write-back
//! cannot re-trigger itself.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::store::project::{ProjectStore, Subscription};
use crate::store::state::UserInputs;
use crate::sync::Debouncer;

/// Watch the four user-input fields for changes.
///
/// The previous snapshot is captured at registration time, so the callback
/// does not fire until something actually changes. Comparison is strict per
/// field with no float tolerance.
///
/// The returned [`Subscription`] stops the watch; dropping it has the same
/// effect, and unsubscribing twice is harmless.
pub fn watch_inputs<F>(store: &ProjectStore, callback: F) -> Subscription
where
    F: Fn(UserInputs) + Send + Sync + 'static,
{
    let previous = Mutex::new(store.get().inputs);
    store.subscribe(move |state| {
        let current = {
            let mut prev = previous.lock();
            if state.inputs == *prev {
                return;
            }
            *prev = state.inputs.clone();
            state.inputs.clone()
        };
        callback(current);
    })
}

/// A running debounced input watch.
///
/// Owns both the store subscription and the debounce worker; dropping it (or
/// calling [`stop`](Self::stop)) tears both down, so no stale callback can
/// fire after teardown.
pub struct DebouncedWatch {
    subscription: Subscription,
    debouncer: Arc<Debouncer<UserInputs>>,
}

impl DebouncedWatch {
    /// Stop watching and cancel any pending debounce fire. Idempotent.
    pub fn stop(&self) {
        self.subscription.unsubscribe();
        self.debouncer.stop();
    }
}

/// Watch the user inputs with a trailing-edge debounce.
///
/// Bursts of edits collapse into a single callback invocation carrying the
/// final values, delivered `delay` after the burst's last change. This is
/// what keeps a user typing into the form from hammering the estimator.
pub fn watch_inputs_debounced<F>(
    store: &ProjectStore,
    delay: Duration,
    callback: F,
) -> DebouncedWatch
where
    F: Fn(UserInputs) + Send + 'static,
{
    let debouncer = Arc::new(Debouncer::spawn(delay, callback));
    let trigger = Arc::clone(&debouncer);
    let subscription = watch_inputs(store, move |inputs| trigger.trigger(inputs));
    DebouncedWatch {
        subscription,
        debouncer,
    }
}
