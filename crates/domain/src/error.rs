//! Domain error types.

use thiserror::Error;

use crate::models::field::FieldError;

/// Error type for the pricing and forms core.
///
/// Every failure is returned to the caller as a typed result; this layer
/// never logs errors, never retries, and never partially applies a
/// mutation. The caller decides user-facing messaging.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// A fee lookup was requested for a category the configuration does
    /// not define. Returned instead of defaulting to zero so a stale or
    /// mistyped category id can never under-charge a registrant.
    #[error("Unknown fee category: {category}")]
    UnknownCategory { category: String },

    /// An ordering operation addressed an index outside the list.
    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A form submission violated one or more field constraints. Carries
    /// every failing constraint so the caller can render all problems at
    /// once.
    #[error("Submission validation failed with {} error(s)", .0.len())]
    ValidationFailed(Vec<FieldError>),

    /// Admin-authored configuration is internally inconsistent (for
    /// example a required select field with zero options).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl DomainError {
    /// Field errors carried by a `ValidationFailed`, empty otherwise.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            DomainError::ValidationFailed(errors) => errors,
            _ => &[],
        }
    }
}
