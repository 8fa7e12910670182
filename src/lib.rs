//! Reactive synchronization core for a wooden-construction estimate form.
//!
//! Four user inputs live in a shared [`store::ProjectStore`]; an input
//! watcher detects changes to exactly those fields, a trailing-edge
//! [`sync::Debouncer`] collapses edit bursts, and the
//! [`estimate::EstimatePipeline`] validates the settled inputs, calls the
//! external estimator, and writes the derived amount back into the store.
//! The [`render`] module projects the same state tree for the screen and
//! for PDF capture, and [`export`] flips the render-mode flag around the
//! capture with a guaranteed restore.
//!
//! # Data flow
//!
//! ```text
//! edit ──→ ProjectStore ──→ input watcher ──→ debounce ──→ validate
//!             ↑                                               │
//!             └────────── set_amount ←── estimator ←──────────┘
//! ```

pub mod config;
pub mod estimate;
pub mod export;
pub mod render;
pub mod store;
pub mod sync;

pub use config::AppConfig;
pub use estimate::{EstimatePipeline, Estimator, PlaceholderEstimator};
pub use export::Exporter;
pub use store::{ProjectStore, RenderMode, UserInputs};
