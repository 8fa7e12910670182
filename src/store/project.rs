//! Thread-safe project state container with change notification.
//!
//! This is the single shared mutable resource of the crate: every other
//! component either writes to it (`apply` and the setters) or observes it
//! (`subscribe`). Notifications are delivered synchronously, in subscriber
//! registration order, once per `apply` call.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

use parking_lot::Mutex;

use crate::store::state::{ProjectPatch, ProjectState, RenderMode, UserInputs};

type Listener = Arc<dyn Fn(&ProjectState) + Send + Sync>;

struct StoreInner {
    state: RwLock<ProjectState>,
    subscribers: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

/// Shared project state with interior mutability.
///
/// Cheap to clone; all clones point at the same state. The handle is passed
/// explicitly to whoever needs it rather than living in a global.
#[derive(Clone)]
pub struct ProjectStore {
    inner: Arc<StoreInner>,
}

impl ProjectStore {
    /// Create a store holding the documented initial values
    /// (amount 0, floors 1, span 0, depth 0, area "", interactive mode).
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(ProjectState::default()),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Get a clone of the current full snapshot.
    ///
    /// This is cheap because ProjectState is Clone.
    /// Multiple readers can call this concurrently.
    pub fn get(&self) -> ProjectState {
        self.inner.state.read().expect("state lock poisoned").clone()
    }

    /// Merge a partial update into the state and notify all subscribers.
    ///
    /// Subscribers receive the post-update snapshot, in registration order,
    /// synchronously before `apply` returns. One notification per call,
    /// regardless of how many fields the patch touches. No validation is
    /// performed; the store accepts whatever it is given.
    pub fn apply(&self, patch: ProjectPatch) {
        let snapshot = {
            let mut state = self.inner.state.write().expect("state lock poisoned");
            patch.merge_into(&mut state);
            state.clone()
        };
        self.notify(&snapshot);
    }

    /// Restore all fields to their initial values and notify subscribers.
    pub fn reset(&self) {
        let snapshot = {
            let mut state = self.inner.state.write().expect("state lock poisoned");
            *state = ProjectState::default();
            state.clone()
        };
        self.notify(&snapshot);
    }

    /// Set the derived estimate amount (whole yen).
    pub fn set_amount(&self, amount: i64) {
        self.apply(ProjectPatch {
            amount: Some(amount),
            ..ProjectPatch::default()
        });
    }

    /// Set the fire-prevention zone category.
    pub fn set_fire_prevention_area(&self, area: impl Into<String>) {
        self.apply(ProjectPatch {
            fire_prevention_area: Some(area.into()),
            ..ProjectPatch::default()
        });
    }

    /// Set the number of floors.
    pub fn set_floors(&self, floors: u32) {
        self.apply(ProjectPatch {
            floors: Some(floors),
            ..ProjectPatch::default()
        });
    }

    /// Set the short-side length in meters.
    pub fn set_span(&self, span: f64) {
        self.apply(ProjectPatch {
            span: Some(span),
            ..ProjectPatch::default()
        });
    }

    /// Set the long-side length in meters.
    pub fn set_depth(&self, depth: f64) {
        self.apply(ProjectPatch {
            depth: Some(depth),
            ..ProjectPatch::default()
        });
    }

    /// Replace all four user inputs in a single update (one notification).
    pub fn set_inputs(&self, inputs: UserInputs) {
        self.apply(ProjectPatch {
            fire_prevention_area: Some(inputs.fire_prevention_area),
            floors: Some(inputs.floors),
            span: Some(inputs.span),
            depth: Some(inputs.depth),
            ..ProjectPatch::default()
        });
    }

    /// Set the render mode flag.
    pub fn set_mode(&self, mode: RenderMode) {
        self.apply(ProjectPatch {
            mode: Some(mode),
            ..ProjectPatch::default()
        });
    }

    /// Register a listener invoked once per `apply`/`reset` with the
    /// post-update snapshot.
    ///
    /// The returned [`Subscription`] removes the listener when dropped or
    /// when [`Subscription::unsubscribe`] is called. A leaked subscription
    /// keeps the listener firing for the lifetime of the store.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ProjectState) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .lock()
            .push((id, Arc::new(listener)));
        Subscription {
            store: Arc::downgrade(&self.inner),
            id,
            active: AtomicBool::new(true),
        }
    }

    fn notify(&self, snapshot: &ProjectState) {
        // Clone the listener list so listeners may call back into the store
        // (including apply) without deadlocking on the registry lock.
        let listeners: Vec<Listener> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle tying a listener's lifetime to its owner.
///
/// Unsubscribes on drop. Calling [`unsubscribe`](Self::unsubscribe) more than
/// once is a no-op.
pub struct Subscription {
    store: Weak<StoreInner>,
    id: u64,
    active: AtomicBool,
}

impl Subscription {
    /// Remove the listener from the store. Idempotent.
    pub fn unsubscribe(&self) {
        if !self.active.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Some(inner) = self.store.upgrade() {
            inner.subscribers.lock().retain(|(id, _)| *id != self.id);
        }
    }

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
