//! Application-level errors (wraps domain errors)

use std::fmt;

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("host not found: {0}")]
    HostNotFound(String),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("inventory lock poisoned by a panicked writer")]
    LockPoisoned,

    #[error("render failed: {0}")]
    Render(#[from] fmt::Error),
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
