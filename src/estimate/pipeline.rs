//! Wiring from input changes to the estimate collaborator and back.
//!
//! Input edits are debounced, validated for completeness, then handed to the
//! estimator on a fire-and-forget task. Success writes the amount into the
//! store; failure resets it to zero and is logged, never propagated — there
//! is no caller left on this path to propagate to.

use std::sync::Arc;
use std::time::Duration;

use crate::estimate::estimator::Estimator;
use crate::store::{DebouncedWatch, ProjectStore};

/// A running estimate pipeline.
///
/// Created with [`start`](Self::start); stops when dropped or when
/// [`stop`](Self::stop) is called. Stopping prevents new derivations from
/// being triggered; a derivation already dispatched still runs to completion
/// and writes its result back (there is no in-flight cancellation).
pub struct EstimatePipeline {
    watch: DebouncedWatch,
}

impl EstimatePipeline {
    /// Start watching the store and deriving the amount.
    ///
    /// Per debounced change to the four user inputs:
    /// 1. Incomplete inputs are skipped without touching the store.
    /// 2. Complete inputs are sent to the estimator on a spawned task.
    /// 3. Success writes `amount` back; failure writes `0` and logs a warning.
    ///
    /// Overlapping derivations are not ordered: when a second debounce cycle
    /// dispatches while an earlier call is still in flight, whichever
    /// completes last wins the amount field.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime context.
    pub fn start(
        store: ProjectStore,
        estimator: Arc<dyn Estimator>,
        debounce: Duration,
    ) -> Self {
        let runtime = tokio::runtime::Handle::current();
        let watched = store.clone();
        let watch = crate::store::watch_inputs_debounced(&watched, debounce, move |inputs| {
            if !inputs.is_complete() {
                tracing::debug!(?inputs, "inputs incomplete, skipping estimate");
                return;
            }

            tracing::debug!(?inputs, "inputs settled, requesting estimate");
            let store = store.clone();
            let fut = estimator.estimate(inputs);
            runtime.spawn(async move {
                match fut.await {
                    Ok(result) if result.success => {
                        store.set_amount(result.amount);
                        tracing::info!(
                            amount = result.amount,
                            calculated_at = %result.calculated_at,
                            "estimate updated"
                        );
                    }
                    Ok(result) => {
                        store.set_amount(0);
                        tracing::warn!(
                            calculated_at = %result.calculated_at,
                            "estimate collaborator reported failure, amount reset"
                        );
                    }
                    Err(e) => {
                        store.set_amount(0);
                        tracing::warn!(error = %e, "estimate failed, amount reset");
                    }
                }
            });
        });

        Self { watch }
    }

    /// Stop watching. Idempotent; also happens on drop.
    pub fn stop(&self) {
        self.watch.stop();
    }
}
