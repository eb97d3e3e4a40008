//! # strata-core
//!
//! Core traits and chain primitives for the Strata middleware stack.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! extensions that don't need the full `strata-std` implementations.
//!
//! # Two-Layer Architecture
//!
//! Strata is built from two cooperating layers:
//!
//! ## Layer 1: Chain Link ([`Middleware`] + [`Link`])
//!
//! A single handler unit capable of acting on a request/response pair and
//! optionally delegating to the next unit.
//!
//! - **Transparent by default**: the trait's default `call` forwards and
//!   returns the successor's result unchanged
//! - **Write-once wiring**: a [`Link`] pairs a unit with its successor
//!   slot; the slot is set exactly once, when the following unit is
//!   registered
//! - **Short-circuit by returning**: a unit ends the chain by returning
//!   without calling [`Next::forward`]
//!
//! ## Layer 2: Stack (in the `strata` facade crate)
//!
//! The ordered registry that wires links at registration time and invokes
//! the first-added unit, letting control cascade down the chain and the
//! settled value propagate back up.
//!
//! # Error Types
//!
//! - [`StrataError`] - Top-level error type
//! - [`ConfigError`] - Violations caught while assembling a stack
//! - [`ChainError`] - Violations raised while a chain executes

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod link;
mod middleware;
mod payload;

// Re-exports
pub use error::{BoxError, ChainError, ConfigError, StrataError};
pub use link::Link;
pub use middleware::{BoxMiddleware, FnMiddleware, Middleware, Next, from_fn};
pub use payload::{ChainResult, Payload};
