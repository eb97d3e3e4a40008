//! # strata - Minimal Middleware Stack
//!
//! `strata` chains an ordered sequence of middleware units around one
//! request/response pair. Each unit may act on the pair, hand control to
//! the next unit, or settle the chain by returning without forwarding.
//! The pair itself is opaque to the library: it is captured once and passed
//! through untouched, by reference, exactly as the caller supplied it.
//!
//! ## Quick Start
//!
//! ```rust
//! use strata::middleware::Halt;
//! use strata::{ChainError, Middleware, Next, Stack};
//!
//! /// Wraps whatever the rest of the chain settles on.
//! struct Tag(&'static str);
//!
//! impl Middleware<String, String> for Tag {
//!     type Output = String;
//!
//!     fn call(
//!         &self,
//!         request: &String,
//!         response: &String,
//!         next: Next<String, String, String>,
//!     ) -> Result<String, ChainError> {
//!         Ok(format!("{}{}{}", self.0, next.forward(request, response)?, self.0))
//!     }
//! }
//!
//! # fn main() -> Result<(), strata::StrataError> {
//! let mut stack = Stack::new("GET /".to_string(), "200 OK".to_string());
//! stack.add(Tag("|"))?.add(Halt::new("body".to_string()))?;
//!
//! assert_eq!(stack.run()?, "|body|");
//! # Ok(())
//! # }
//! ```
//!
//! ## Execution model
//!
//! Units run in registration order: the first-added unit runs first and
//! each later addition is wired, at the moment it is added, as the
//! previously added unit's successor. A run is a plain nested sequence of
//! synchronous calls; the value returned by the unit that stops forwarding
//! propagates back through every caller unchanged.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod stack;

pub use strata_core::{
    BoxError, BoxMiddleware, ChainError, ChainResult, ConfigError, FnMiddleware, Link, Middleware,
    Next, Payload, StrataError, from_fn,
};

pub use strata_std::Registry;

pub use stack::{Stack, StackBuilder};

/// Stock middleware implementations.
pub mod middleware {
    pub use strata_std::middleware::{Halt, LoggingMiddleware, Passthrough};
}

/// Testing utilities.
pub mod testing {
    pub use strata_std::testing::RecordingMiddleware;
}

/// Prelude module - common imports for Strata.
///
/// # Usage
///
/// ```rust,ignore
/// use strata::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ChainError, ConfigError, Middleware, Next, Payload, Stack, StrataError, from_fn,
    };
}
