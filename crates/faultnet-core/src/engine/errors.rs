//! Error types for fault network evaluation.

use thiserror::Error;

/// Errors that can occur while configuring or evaluating the fault network.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// without breaking changes. All public APIs return `Result<T, FaultNetError>`
/// instead of panicking.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FaultNetError {
    /// A value outside [0, 1] (or NaN/Inf) reached a point where a probability
    /// is required. Indicates a logic defect; the run must be aborted.
    #[error("invalid probability for {context}: {value}")]
    InvalidProbability { context: String, value: f64 },

    /// Raw observation text that is neither an affirmative nor a negative answer.
    #[error("unrecognized observation: {0:?}")]
    UnrecognizedObservation(String),

    /// Network configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Evidence has zero probability under the model, so no posterior exists.
    #[error("impossible evidence: {0}")]
    ImpossibleEvidence(String),
}

impl FaultNetError {
    pub(crate) fn invalid_probability(context: impl Into<String>, value: f64) -> Self {
        FaultNetError::InvalidProbability {
            context: context.into(),
            value,
        }
    }
}
