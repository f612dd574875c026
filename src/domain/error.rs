//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Tree operations themselves are total; errors only arise where untyped
/// input is turned into tree values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid value '{token}': {reason}")]
    InvalidValue { token: String, reason: String },

    #[error("invalid range: max must be positive, got {0}")]
    InvalidRange(i64),
}
