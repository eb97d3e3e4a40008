//! A stock terminal unit.

use strata_core::{ChainError, ChainResult, Middleware, Next, Payload};

/// A middleware that settles the chain on a fixed value, never forwarding.
///
/// Place it last to terminate a chain of pass-through units.
pub struct Halt<Out> {
    value: Out,
}

impl<Out> Halt<Out> {
    /// Create a terminal unit that settles the chain on `value`.
    pub fn new(value: Out) -> Self {
        Self { value }
    }
}

impl<Rq, Rs, Out> Middleware<Rq, Rs> for Halt<Out>
where
    Rq: Payload,
    Rs: Payload,
    Out: ChainResult + Clone,
{
    type Output = Out;

    fn call(
        &self,
        _request: &Rq,
        _response: &Rs,
        _next: Next<Rq, Rs, Out>,
    ) -> Result<Out, ChainError> {
        Ok(self.value.clone())
    }
}
