//! Router error types
//!
//! Registration is the only fallible surface: dispatch never returns an
//! error, it always terminates in a [`Dispatch`](crate::routing::Dispatch)
//! outcome.

use thiserror::Error;

/// Result type for router operations
pub type RouterResult<T> = Result<T, RouterError>;

/// Errors surfaced during route registration
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("unknown middleware identifier: {name}")]
    UnknownMiddleware { name: String },
}

impl RouterError {
    /// Create an invalid-pattern error
    pub fn invalid_pattern<P: Into<String>, R: Into<String>>(pattern: P, reason: R) -> Self {
        RouterError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown-middleware error
    pub fn unknown_middleware<N: Into<String>>(name: N) -> Self {
        RouterError::UnknownMiddleware { name: name.into() }
    }
}
