//! The external derivation collaborator boundary.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::UserInputs;

/// Errors from the estimate collaborator.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The collaborator answered but reported `success: false`.
    #[error("estimate collaborator reported failure")]
    Failed,

    /// The collaborator could not be reached or misbehaved.
    #[error("estimate collaborator error: {0}")]
    Collaborator(String),
}

/// Result of one derivation call.
///
/// Field names follow the collaborator's wire format so a remote estimator's
/// JSON response deserializes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub success: bool,
    /// Estimate amount in whole yen.
    pub amount: i64,
    /// ISO-8601 timestamp of when the estimate was computed.
    #[serde(rename = "calculatedAt")]
    pub calculated_at: String,
}

/// Boxed future returned by [`Estimator::estimate`].
pub type EstimateFuture =
    Pin<Box<dyn Future<Output = Result<EstimateResult, EstimateError>> + Send + 'static>>;

/// Asynchronous derivation collaborator.
///
/// Implementations must be idempotent-safe: the pipeline may invoke them
/// repeatedly for overlapping input states and never retries on failure.
pub trait Estimator: Send + Sync {
    fn estimate(&self, inputs: UserInputs) -> EstimateFuture;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_uses_wire_field_names() {
        let result = EstimateResult {
            success: true,
            amount: 123_456,
            calculated_at: "2026-08-29T00:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["amount"], 123_456);
        assert_eq!(json["calculatedAt"], "2026-08-29T00:00:00Z");
    }

    #[test]
    fn result_roundtrips_from_collaborator_json() {
        let json = r#"{"success":false,"amount":-1,"calculatedAt":"2026-08-29T12:34:56Z"}"#;
        let result: EstimateResult = serde_json::from_str(json).unwrap();
        assert!(!result.success);
        assert_eq!(result.amount, -1);
    }
}
