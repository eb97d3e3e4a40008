//! A unit that merely occupies a position in the chain.

use std::marker::PhantomData;
use strata_core::{ChainResult, Middleware, Payload};

/// A middleware that relies entirely on the default pass-through behavior.
///
/// Useful as a neutral element in composed chains and as a starting point
/// in tests.
pub struct Passthrough<Out> {
    _out: PhantomData<fn() -> Out>,
}

impl<Out> Passthrough<Out> {
    /// Create a new passthrough middleware.
    pub fn new() -> Self {
        Self { _out: PhantomData }
    }
}

impl<Out> Default for Passthrough<Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Rq, Rs, Out> Middleware<Rq, Rs> for Passthrough<Out>
where
    Rq: Payload,
    Rs: Payload,
    Out: ChainResult,
{
    type Output = Out;
}
