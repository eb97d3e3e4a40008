//! Testing utilities for Strata.
//!
//! This module provides utilities to make testing middleware chains easier.
//!
//! # Features
//!
//! - [`RecordingMiddleware`]: records every request it sees; forwards by
//!   default, or settles the chain on a configured value to act as a
//!   terminal unit

use std::sync::{Arc, Mutex};
use strata_core::{ChainError, ChainResult, Middleware, Next, Payload};

/// A middleware that records all requests it receives.
///
/// Clones share the same backing storage: keep one handle for assertions
/// and hand the other to a stack.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingMiddleware::<MyRequest, String>::new();
/// let probe = recorder.clone();
///
/// stack.add(recorder)?;
/// stack.run()?;
///
/// assert_eq!(probe.count(), 1);
/// ```
pub struct RecordingMiddleware<Rq, Out> {
    requests: Arc<Mutex<Vec<Rq>>>,
    output: Option<Out>,
}

impl<Rq, Out> RecordingMiddleware<Rq, Out> {
    /// Create a recorder that forwards after recording.
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            output: None,
        }
    }

    /// Create a recorder that settles the chain on `output` after recording.
    pub fn with_output(output: Out) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            output: Some(output),
        }
    }

    /// Get a clone of the recorded requests.
    pub fn requests(&self) -> Vec<Rq>
    where
        Rq: Clone,
    {
        self.requests.lock().unwrap().clone()
    }

    /// Get the number of recorded requests.
    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Clear all recorded requests.
    pub fn clear(&self) {
        self.requests.lock().unwrap().clear()
    }
}

impl<Rq, Out> Default for RecordingMiddleware<Rq, Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Rq, Out: Clone> Clone for RecordingMiddleware<Rq, Out> {
    fn clone(&self) -> Self {
        Self {
            requests: self.requests.clone(),
            output: self.output.clone(),
        }
    }
}

impl<Rq, Rs, Out> Middleware<Rq, Rs> for RecordingMiddleware<Rq, Out>
where
    Rq: Payload + Clone,
    Rs: Payload,
    Out: ChainResult + Clone,
{
    type Output = Out;

    fn call(
        &self,
        request: &Rq,
        response: &Rs,
        next: Next<Rq, Rs, Out>,
    ) -> Result<Out, ChainError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.output {
            Some(output) => Ok(output.clone()),
            None => next.forward(request, response),
        }
    }
}
