//! Trailing-edge debounce over a background worker.
//!
//! Events are fed through a channel to a worker thread; while events keep
//! arriving within the delay window the pending fire is pushed back and only
//! the latest payload is retained. Once the quiet period elapses, the
//! callback runs exactly once with that final payload.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Default quiet period before a debounced fire.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

enum Msg<T> {
    Event(T),
    Stop,
}

/// Cancellable trailing-edge debouncer.
///
/// [`trigger`](Self::trigger) may be called from any thread; the callback
/// runs on the worker thread. [`stop`](Self::stop) (or drop) cancels any
/// pending fire, so nothing runs after teardown.
pub struct Debouncer<T: Send + 'static> {
    tx: Sender<Msg<T>>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the worker with the given quiet period and callback.
    pub fn spawn<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let worker = thread::spawn(move || {
            debounce_loop(rx, delay, callback);
        });
        Self {
            tx,
            worker: Mutex::new(Some(worker)),
        }
    }

    /// Feed an event. Restarts the quiet period and replaces any payload
    /// still pending from an earlier event in the burst.
    ///
    /// Triggering after [`stop`](Self::stop) is a no-op.
    pub fn trigger(&self, payload: T) {
        let _ = self.tx.send(Msg::Event(payload));
    }

    /// Stop the worker, discarding any pending fire. Idempotent.
    pub fn stop(&self) {
        let _ = self.tx.send(Msg::Stop);
        if let Some(handle) = self.worker.lock().take() {
            let _ = handle.join();
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Worker loop: wait out the quiet period after the last event, then fire.
fn debounce_loop<T, F>(rx: Receiver<Msg<T>>, delay: Duration, callback: F)
where
    F: Fn(T),
{
    let mut pending: Option<(T, Instant)> = None;

    loop {
        let timeout = match &pending {
            Some((_, armed_at)) => delay.saturating_sub(armed_at.elapsed()),
            // Long timeout when nothing is pending
            None => Duration::from_secs(60),
        };

        match rx.recv_timeout(timeout) {
            Ok(Msg::Event(payload)) => {
                // Re-arm: later events in the burst win.
                pending = Some((payload, Instant::now()));
            }
            Ok(Msg::Stop) => break,
            Err(RecvTimeoutError::Timeout) => {
                if let Some((payload, armed_at)) = pending.take() {
                    if armed_at.elapsed() >= delay {
                        callback(payload);
                    } else {
                        // Spurious wakeup before the quiet period elapsed.
                        pending = Some((payload, armed_at));
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}
