//! Logging middleware for chain observation.

use std::marker::PhantomData;
use strata_core::{ChainError, ChainResult, Middleware, Next, Payload};

/// A middleware that logs the request/response pair, then forwards.
pub struct LoggingMiddleware<Out> {
    _out: PhantomData<fn() -> Out>,
}

impl<Out> LoggingMiddleware<Out> {
    /// Create a new logging middleware.
    pub fn new() -> Self {
        Self { _out: PhantomData }
    }
}

impl<Out> Default for LoggingMiddleware<Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Rq, Rs, Out> Middleware<Rq, Rs> for LoggingMiddleware<Out>
where
    Rq: Payload + std::fmt::Debug,
    Rs: Payload + std::fmt::Debug,
    Out: ChainResult,
{
    type Output = Out;

    fn call(
        &self,
        request: &Rq,
        response: &Rs,
        next: Next<Rq, Rs, Out>,
    ) -> Result<Out, ChainError> {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(?request, ?response, "Passing request down the stack");
        }
        next.forward(request, response)
    }
}
