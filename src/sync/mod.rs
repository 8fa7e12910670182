//! Scheduling primitives shared by the watchers.

mod debounce;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
