//! The stack: ordered registration and invocation of a middleware chain.

use std::collections::VecDeque;
use std::sync::Arc;

use strata_core::{
    BoxMiddleware, ChainResult, ConfigError, Link, Middleware, Payload, StrataError,
};
use strata_std::Registry;

/// An ordered middleware stack bound to one request/response pair.
///
/// Units execute in registration order: the first-added unit runs first,
/// and each later addition is wired as its predecessor's successor at the
/// moment it is added. Internally the newest link sits at the front of the
/// sequence and the run entry point at the back.
///
/// A run is a plain nested sequence of synchronous calls. Control cascades
/// down the chain through each unit's `forward`, and whatever value the
/// short-circuiting or terminal unit returns propagates back up unchanged.
pub struct Stack<Rq: Payload, Rs: Payload, Out: ChainResult> {
    request: Rq,
    response: Rs,
    links: VecDeque<Arc<Link<Rq, Rs, Out>>>,
    registry: Registry<Rq, Rs, Out>,
}

impl<Rq: Payload, Rs: Payload, Out: ChainResult> std::fmt::Debug for Stack<Rq, Rs, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stack")
            .field("links", &self.links.len())
            .finish_non_exhaustive()
    }
}

impl<Rq: Payload, Rs: Payload, Out: ChainResult> Stack<Rq, Rs, Out> {
    /// Create a stack around a request/response pair.
    pub fn new(request: Rq, response: Rs) -> Self {
        Self {
            request,
            response,
            links: VecDeque::new(),
            registry: Registry::new(),
        }
    }

    /// Start building a stack.
    ///
    /// Use this path when a context value may be absent at assembly time or
    /// when the stack needs a [`Registry`] of named factories.
    pub fn builder() -> StackBuilder<Rq, Rs, Out> {
        StackBuilder::new()
    }

    /// Append a ready-made middleware unit to the chain.
    pub fn add<M>(&mut self, unit: M) -> Result<&mut Self, StrataError>
    where
        M: Middleware<Rq, Rs, Output = Out>,
    {
        self.push(Box::new(unit))
    }

    /// Instantiate a unit from a zero-argument constructor and append it.
    pub fn add_factory<F, M>(&mut self, factory: F) -> Result<&mut Self, StrataError>
    where
        F: FnOnce() -> M,
        M: Middleware<Rq, Rs, Output = Out>,
    {
        self.push(Box::new(factory()))
    }

    /// Resolve `name` through the registry and append the resulting unit.
    ///
    /// Fails with [`ConfigError::UnknownMiddleware`] when nothing is
    /// registered under `name`, whatever the chain looks like so far.
    pub fn add_named(&mut self, name: &str) -> Result<&mut Self, StrataError> {
        let unit = self.registry.resolve(name)?;
        self.push(unit)
    }

    /// Run the chain.
    ///
    /// Invokes the first-added unit and returns whatever propagates back:
    /// a short-circuiting unit's value, the terminal unit's value, or the
    /// failure of a unit that forwarded past the end of the chain.
    ///
    /// Fails with [`ConfigError::EmptyStack`] when no unit was ever added.
    pub fn run(&self) -> Result<Out, StrataError> {
        let first = self.links.back().ok_or(ConfigError::EmptyStack)?;
        Ok(first.invoke(&self.request, &self.response)?)
    }

    /// The number of registered units.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether no units have been registered yet.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The newest unit becomes the front of the sequence; the previous
    /// front is wired to call it as its successor.
    fn push(&mut self, unit: BoxMiddleware<Rq, Rs, Out>) -> Result<&mut Self, StrataError> {
        let link = Arc::new(Link::from_boxed(unit));
        if let Some(head) = self.links.front() {
            head.set_next(Arc::clone(&link))?;
        }
        self.links.push_front(link);
        Ok(self)
    }
}

/// Builder for [`Stack`].
///
/// Both context values are required: [`build`](StackBuilder::build) fails
/// with [`ConfigError::MissingContext`] when either was never supplied.
pub struct StackBuilder<Rq: Payload, Rs: Payload, Out: ChainResult> {
    request: Option<Rq>,
    response: Option<Rs>,
    registry: Registry<Rq, Rs, Out>,
}

impl<Rq: Payload, Rs: Payload, Out: ChainResult> StackBuilder<Rq, Rs, Out> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            request: None,
            response: None,
            registry: Registry::new(),
        }
    }

    /// Supply the request value.
    pub fn request(mut self, request: Rq) -> Self {
        self.request = Some(request);
        self
    }

    /// Supply the response value.
    pub fn response(mut self, response: Rs) -> Self {
        self.response = Some(response);
        self
    }

    /// Supply a registry of named middleware factories for `add_named`.
    pub fn registry(mut self, registry: Registry<Rq, Rs, Out>) -> Self {
        self.registry = registry;
        self
    }

    /// Build the stack.
    pub fn build(self) -> Result<Stack<Rq, Rs, Out>, ConfigError> {
        let (Some(request), Some(response)) = (self.request, self.response) else {
            return Err(ConfigError::MissingContext);
        };
        Ok(Stack {
            request,
            response,
            links: VecDeque::new(),
            registry: self.registry,
        })
    }
}

impl<Rq: Payload, Rs: Payload, Out: ChainResult> Default for StackBuilder<Rq, Rs, Out> {
    fn default() -> Self {
        Self::new()
    }
}
