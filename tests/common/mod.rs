//! Shared test utilities and mock collaborators.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use mokumitsu::estimate::{EstimateError, EstimateFuture, EstimateResult, Estimator};
use mokumitsu::store::UserInputs;

/// Inputs that satisfy the completeness gate.
pub fn complete_inputs() -> UserInputs {
    UserInputs {
        fire_prevention_area: "防火地域".to_string(),
        floors: 3,
        span: 10.5,
        depth: 15.0,
    }
}

/// What the mock estimator should answer.
#[derive(Debug, Clone)]
pub enum MockAnswer {
    /// `success: true` with this amount.
    Success(i64),
    /// `success: false` (the original stub's reported-failure shape).
    ReportedFailure,
    /// A collaborator error.
    Error,
}

/// Scripted estimator that records every invocation.
pub struct MockEstimator {
    pub calls: Mutex<Vec<UserInputs>>,
    answer: MockAnswer,
    delay: Duration,
}

impl MockEstimator {
    pub fn new(answer: MockAnswer) -> Arc<Self> {
        Self::with_delay(answer, Duration::ZERO)
    }

    pub fn with_delay(answer: MockAnswer, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            answer,
            delay,
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Estimator for MockEstimator {
    fn estimate(&self, inputs: UserInputs) -> EstimateFuture {
        self.calls.lock().push(inputs);
        let answer = self.answer.clone();
        let delay = self.delay;
        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            match answer {
                MockAnswer::Success(amount) => Ok(EstimateResult {
                    success: true,
                    amount,
                    calculated_at: "2026-08-29T00:00:00Z".to_string(),
                }),
                MockAnswer::ReportedFailure => Ok(EstimateResult {
                    success: false,
                    amount: -1,
                    calculated_at: "2026-08-29T00:00:00Z".to_string(),
                }),
                MockAnswer::Error => Err(EstimateError::Collaborator(
                    "mock collaborator unavailable".to_string(),
                )),
            }
        })
    }
}
