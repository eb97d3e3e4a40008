//! Named-factory registry for runtime middleware resolution.

use std::collections::HashMap;
use strata_core::{BoxMiddleware, ChainResult, ConfigError, Middleware, Payload};

type Factory<Rq, Rs, Out> = Box<dyn Fn() -> BoxMiddleware<Rq, Rs, Out> + Send + Sync>;

/// A registry of named middleware factories.
///
/// Names stand in for types at the registration boundary: a stack built
/// with a registry can be assembled from configuration-style strings, with
/// unknown names rejected at `add` time. Each resolution instantiates a
/// fresh unit from the bound factory.
pub struct Registry<Rq: Payload, Rs: Payload, Out: ChainResult> {
    factories: HashMap<String, Factory<Rq, Rs, Out>>,
}

impl<Rq: Payload, Rs: Payload, Out: ChainResult> Registry<Rq, Rs, Out> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Bind `name` to a zero-argument factory, builder-style.
    pub fn register<F, M>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> M + Send + Sync + 'static,
        M: Middleware<Rq, Rs, Output = Out>,
    {
        self.insert(name, factory);
        self
    }

    /// Bind `name` to a zero-argument factory.
    ///
    /// Re-binding a name replaces the previous factory.
    pub fn insert<F, M>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> M + Send + Sync + 'static,
        M: Middleware<Rq, Rs, Output = Out>,
    {
        let erased: Factory<Rq, Rs, Out> = Box::new(move || Box::new(factory()));
        self.factories.insert(name.into(), erased);
    }

    /// Whether `name` is bound to a factory.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Instantiate the middleware bound to `name`.
    ///
    /// Fails with [`ConfigError::UnknownMiddleware`] when nothing is bound.
    pub fn resolve(&self, name: &str) -> Result<BoxMiddleware<Rq, Rs, Out>, ConfigError> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(ConfigError::UnknownMiddleware(name.to_owned())),
        }
    }
}

impl<Rq: Payload, Rs: Payload, Out: ChainResult> Default for Registry<Rq, Rs, Out> {
    fn default() -> Self {
        Self::new()
    }
}
