//! Estimate derivation: collaborator boundary, placeholder stub, and the
//! pipeline that keeps the store's amount in sync with the inputs.

mod estimator;
mod pipeline;
mod placeholder;

pub use estimator::{EstimateError, EstimateFuture, EstimateResult, Estimator};
pub use pipeline::EstimatePipeline;
pub use placeholder::PlaceholderEstimator;
