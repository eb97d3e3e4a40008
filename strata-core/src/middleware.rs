//! # Middleware Layer (Chain Link)
//!
//! A middleware is one handler step in a processing chain. It receives the
//! request/response pair by reference, may act on it, and may hand control
//! to the next unit through the [`Next`] handle it is given.
//!
//! # Design Philosophy
//!
//! - **Transparent by default**: the provided `call` body forwards and
//!   returns the successor's result unchanged, so a unit only writes the
//!   behavior it adds
//! - **Short-circuit by returning**: a unit ends the chain by returning
//!   without calling [`Next::forward`]
//! - **Uniform**: the stack treats every unit through this one trait,
//!   whether it is a named type, a boxed value, or a wrapped closure
//!
//! # Usage Patterns
//!
//! 1. **Struct implementation**: `impl Middleware<Rq, Rs> for MyUnit`
//! 2. **Closure**: `from_fn(|request, response, next| { ... })`
//! 3. **Default-only unit**: implement the trait without overriding `call`
//!    for a unit that merely occupies a position in the chain

use crate::error::ChainError;
use crate::link::Link;
use crate::payload::{ChainResult, Payload};
use std::{marker::PhantomData, sync::Arc};

/// A single handler unit in a processing chain.
///
/// The default `call` is a transparent pass-through: it forwards to the
/// successor and returns its result. Concrete units override it to work
/// before and/or after forwarding, or to short-circuit by returning
/// without forwarding at all.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot act on a `{Rq}`/`{Rs}` pair",
    label = "missing `Middleware<{Rq}, {Rs}>` implementation",
    note = "Middleware must implement `call` (or accept the default pass-through) for these payload types."
)]
pub trait Middleware<Rq: Payload, Rs: Payload>: Send + Sync + 'static {
    /// The value this unit settles the chain on.
    type Output: ChainResult;

    /// Acts on the request/response pair.
    ///
    /// `next` reaches the rest of the chain; [`Next::forward`] fails with
    /// [`ChainError::NoSuccessor`] when this unit is the last one wired.
    fn call(
        &self,
        request: &Rq,
        response: &Rs,
        next: Next<Rq, Rs, Self::Output>,
    ) -> Result<Self::Output, ChainError> {
        next.forward(request, response)
    }
}

/// Boxed, type-erased middleware.
pub type BoxMiddleware<Rq, Rs, Out> = Box<dyn Middleware<Rq, Rs, Output = Out>>;

/// A handle to the rest of the chain, handed to every [`Middleware::call`].
///
/// Holds the successor wired at registration time, if any.
pub struct Next<Rq: Payload, Rs: Payload, Out: ChainResult> {
    pub(crate) link: Option<Arc<Link<Rq, Rs, Out>>>,
}

impl<Rq: Payload, Rs: Payload, Out: ChainResult> Next<Rq, Rs, Out> {
    /// Delegates to the successor's invoke and returns its result.
    ///
    /// Fails with [`ChainError::NoSuccessor`] when no successor is wired.
    pub fn forward(&self, request: &Rq, response: &Rs) -> Result<Out, ChainError> {
        match &self.link {
            Some(link) => link.invoke(request, response),
            None => Err(ChainError::NoSuccessor),
        }
    }

    /// Whether a successor is wired.
    pub fn is_wired(&self) -> bool {
        self.link.is_some()
    }
}

/// Wraps a plain closure into a [`Middleware`].
///
/// Built with [`from_fn`]. The output type parameter is carried as phantom
/// data so one closure shape can serve any chain output type.
pub struct FnMiddleware<F, Out> {
    f: F,
    _out: PhantomData<fn() -> Out>,
}

/// Builds a middleware from a closure.
///
/// # Example
///
/// ```rust,ignore
/// let unit = from_fn(|request: &MyRequest, response: &MyResponse, next: Next<_, _, String>| {
///     let inner = next.forward(request, response)?;
///     Ok(format!("[{inner}]"))
/// });
/// stack.add(unit)?;
/// ```
pub fn from_fn<F, Out>(f: F) -> FnMiddleware<F, Out> {
    FnMiddleware {
        f,
        _out: PhantomData,
    }
}

impl<Rq, Rs, Out, F> Middleware<Rq, Rs> for FnMiddleware<F, Out>
where
    Rq: Payload,
    Rs: Payload,
    Out: ChainResult,
    F: Fn(&Rq, &Rs, Next<Rq, Rs, Out>) -> Result<Out, ChainError> + Send + Sync + 'static,
{
    type Output = Out;

    fn call(
        &self,
        request: &Rq,
        response: &Rs,
        next: Next<Rq, Rs, Out>,
    ) -> Result<Out, ChainError> {
        (self.f)(request, response, next)
    }
}
