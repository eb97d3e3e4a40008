//! Chain nodes and successor wiring.

use crate::error::ChainError;
use crate::middleware::{BoxMiddleware, Middleware, Next};
use crate::payload::{ChainResult, Payload};
use std::sync::{Arc, OnceLock};

/// One wired node in a chain: a middleware unit plus its successor slot.
///
/// The slot is write-once. A successor is installed at most once, at the
/// moment the following unit is registered, and never changes afterwards;
/// a fully wired chain is therefore safely read-only during execution.
pub struct Link<Rq: Payload, Rs: Payload, Out: ChainResult> {
    unit: BoxMiddleware<Rq, Rs, Out>,
    next: OnceLock<Arc<Link<Rq, Rs, Out>>>,
}

impl<Rq: Payload, Rs: Payload, Out: ChainResult> Link<Rq, Rs, Out> {
    /// Wraps a unit into an unwired node.
    pub fn new<M>(unit: M) -> Self
    where
        M: Middleware<Rq, Rs, Output = Out>,
    {
        Self::from_boxed(Box::new(unit))
    }

    /// Wraps an already boxed unit into an unwired node.
    pub fn from_boxed(unit: BoxMiddleware<Rq, Rs, Out>) -> Self {
        Self {
            unit,
            next: OnceLock::new(),
        }
    }

    /// Installs `next` as this node's successor.
    ///
    /// Fails with [`ChainError::AlreadyLinked`] when a successor was
    /// installed before; the original wiring stays in place.
    pub fn set_next(&self, next: Arc<Link<Rq, Rs, Out>>) -> Result<(), ChainError> {
        self.next.set(next).map_err(|_| ChainError::AlreadyLinked)
    }

    /// Delegates to the successor's [`invoke`](Link::invoke).
    ///
    /// Fails with [`ChainError::NoSuccessor`] when nothing is wired.
    pub fn forward(&self, request: &Rq, response: &Rs) -> Result<Out, ChainError> {
        self.next_handle().forward(request, response)
    }

    /// Runs this node's unit, handing it a handle to the rest of the chain.
    pub fn invoke(&self, request: &Rq, response: &Rs) -> Result<Out, ChainError> {
        self.unit.call(request, response, self.next_handle())
    }

    fn next_handle(&self) -> Next<Rq, Rs, Out> {
        Next {
            link: self.next.get().map(Arc::clone),
        }
    }
}
