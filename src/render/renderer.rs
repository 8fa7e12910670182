//! Reactive renderer: re-renders a view tree on every store notification.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::render::view::View;
use crate::store::{ProjectStore, Subscription};

/// Keeps a view tree's rendering current with the store.
///
/// Subscribes like any other observer: each store write re-renders the root
/// into an internal frame buffer. [`frame`](Self::frame) returns the latest
/// rendering; detaching (or dropping) stops the updates.
pub struct Renderer {
    frame: Arc<Mutex<String>>,
    subscription: Subscription,
}

impl Renderer {
    /// Attach a root view to the store and render it once immediately.
    pub fn attach<V: View + 'static>(store: &ProjectStore, root: V) -> Self {
        let mut initial = String::new();
        root.render(&store.get(), &mut initial);
        let frame = Arc::new(Mutex::new(initial));

        let buffer = Arc::clone(&frame);
        let subscription = store.subscribe(move |state| {
            let mut out = String::new();
            root.render(state, &mut out);
            *buffer.lock() = out;
        });

        Self {
            frame,
            subscription,
        }
    }

    /// The most recent rendering of the view tree.
    pub fn frame(&self) -> String {
        self.frame.lock().clone()
    }

    /// Stop re-rendering. Idempotent; also happens on drop.
    pub fn detach(&self) {
        self.subscription.unsubscribe();
    }
}
