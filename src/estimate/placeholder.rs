//! Placeholder estimator standing in for the real pricing backend.
//!
//! The amount it produces is deliberately meaningless: the decimal digits of
//! the inputs concatenated after a fixed prefix. It exists so the rest of the
//! pipeline can be built and exercised before real pricing lands.

use std::time::Duration;

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::estimate::estimator::{EstimateError, EstimateFuture, EstimateResult, Estimator};
use crate::store::UserInputs;

/// Stub estimator: fixed prefix + concatenated input digits, truncated to
/// whole yen, after a simulated server delay.
pub struct PlaceholderEstimator {
    simulate_delay: Duration,
}

impl PlaceholderEstimator {
    /// Default simulated server-side latency.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

    pub fn new(simulate_delay: Duration) -> Self {
        Self { simulate_delay }
    }
}

impl Default for PlaceholderEstimator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

/// Concatenate `12345` with the decimal renderings of floors, span and depth,
/// parse the whole thing as a number and truncate to whole yen.
///
/// Fractional spans produce a fractional concatenation ("12345" + "3" +
/// "10.5" + "15" parses as 12345310.515), so the result is truncated; the
/// derived amount is defined as an integer.
fn placeholder_amount(inputs: &UserInputs) -> Result<i64, EstimateError> {
    let digits = format!(
        "12345{}{}{}",
        inputs.floors, inputs.span, inputs.depth
    );
    digits
        .parse::<f64>()
        .map(|value| value.trunc() as i64)
        .map_err(|e| EstimateError::Collaborator(format!("placeholder parse: {}", e)))
}

impl Estimator for PlaceholderEstimator {
    fn estimate(&self, inputs: UserInputs) -> EstimateFuture {
        let delay = self.simulate_delay;
        Box::pin(async move {
            tracing::debug!(?inputs, "computing placeholder estimate");

            // Simulated server-side processing time.
            tokio::time::sleep(delay).await;

            let amount = placeholder_amount(&inputs)?;
            let calculated_at = OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .map_err(|e| EstimateError::Collaborator(format!("timestamp: {}", e)))?;

            Ok(EstimateResult {
                success: true,
                amount,
                calculated_at,
            })
        })
    }
}
