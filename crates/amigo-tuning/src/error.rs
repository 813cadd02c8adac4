//! Error types for tuning operations.

use amigo_core::CoreError;
use thiserror::Error;

/// Result type for tuning operations.
pub type TuningResult<T> = Result<T, TuningError>;

/// Errors that can occur while tuning a controller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TuningError {
    /// A process parameter is outside the domain of the tuning rules.
    #[error("Invalid process parameters: {what} = {value} ({reason})")]
    InvalidProcessParameters {
        what: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Controller selector outside {PI, PID}.
    #[error("Unknown controller type: '{name}' (expected PI or PID)")]
    UnknownControllerType { name: String },

    /// A tuning formula overflowed or produced NaN.
    #[error("Non-finite tuning result for {what}: {value}")]
    NonFiniteResult { what: &'static str, value: f64 },
}

impl From<CoreError> for TuningError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => TuningError::InvalidProcessParameters {
                what,
                value,
                reason: "must be finite",
            },
            CoreError::NonPositive { what, value } => TuningError::InvalidProcessParameters {
                what,
                value,
                reason: "must be strictly positive",
            },
        }
    }
}
