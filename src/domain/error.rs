//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent rejected input at construction or mutation time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
}

impl DomainError {
    pub(crate) fn blank(field: &'static str) -> Self {
        Self::Validation {
            field,
            reason: "must not be blank".to_string(),
        }
    }
}

/// Result type for validated domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Reject empty or whitespace-only text.
pub(crate) fn require_non_blank(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::blank(field));
    }
    Ok(())
}
