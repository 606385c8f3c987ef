//! Lever error types.

use cockpit_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::LeverId;

/// Lever-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeverError {
    /// Value outside the lever's documented range.
    #[error("{lever} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        /// Offending lever.
        lever: LeverId,
        /// Rejected value.
        value: Decimal,
        /// Lower bound (inclusive).
        min: Decimal,
        /// Upper bound (inclusive).
        max: Decimal,
    },

    /// Value is not a valid step (-1, 0, +1) for a discrete lever.
    #[error("{lever} only accepts the steps -1, 0 and 1, got {value}")]
    InvalidStep {
        /// Offending lever.
        lever: LeverId,
        /// Rejected value.
        value: Decimal,
    },
}

impl From<LeverError> for AppError {
    fn from(err: LeverError) -> Self {
        Self::Validation(err.to_string())
    }
}
