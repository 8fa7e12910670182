//! Shared project state: the store, its state types, and input watching.

mod project;
mod state;
pub mod watcher;

pub use project::{ProjectStore, Subscription};
pub use state::{
    ProjectPatch, ProjectState, RenderMode, UserInputs, FIRE_PREVENTION_CATEGORIES,
};
pub use watcher::{watch_inputs, watch_inputs_debounced, DebouncedWatch};
