//! Error types for Strata.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`StrataError`] - Top-level error type for all Strata operations
//! - [`ConfigError`] - Violations caught while assembling a stack
//! - [`ChainError`] - Violations raised while a chain executes
//!
//! Every error is fatal and raised synchronously at the point of violation.
//! Nothing is retried, swallowed, or degraded.

use thiserror::Error;

/// A boxed error type for failures raised inside middleware units.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Strata operations.
#[derive(Error, Debug)]
pub enum StrataError {
    /// The stack was assembled or driven incorrectly.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The chain failed while executing.
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),
}

/// Violations caught while assembling a stack.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A stack was built without both context values.
    #[error("a request and a response are required")]
    MissingContext,

    /// A name did not resolve to a registered middleware factory.
    #[error("`{0}` does not resolve to a registered middleware")]
    UnknownMiddleware(String),

    /// `run` was called before any unit was added.
    #[error("tried to run an empty middleware stack")]
    EmptyStack,
}

/// Violations raised while a chain executes.
#[derive(Error, Debug)]
pub enum ChainError {
    /// A unit forwarded past the end of the chain.
    #[error("there is no next middleware in the stack")]
    NoSuccessor,

    /// A successor was wired onto a link that already has one.
    #[error("this middleware is already wired to a successor")]
    AlreadyLinked,

    /// A unit aborted the run with its own failure.
    #[error(transparent)]
    Custom(BoxError),
}

// Convenience conversions
impl From<BoxError> for ChainError {
    fn from(err: BoxError) -> Self {
        ChainError::Custom(err)
    }
}

impl From<BoxError> for StrataError {
    fn from(err: BoxError) -> Self {
        StrataError::Chain(ChainError::Custom(err))
    }
}
