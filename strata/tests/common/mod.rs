use std::sync::{Arc, Mutex};
use strata::{ChainError, Middleware, Next};

// ============================================================================
// Test Payload Types
// ============================================================================

// The stack never looks inside these; any owned type works.

#[derive(Clone, Debug, PartialEq)]
pub struct TestRequest {
    pub path: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TestResponse {
    pub status: u16,
}

pub fn context() -> (TestRequest, TestResponse) {
    (
        TestRequest {
            path: "/".to_string(),
        },
        TestResponse { status: 200 },
    )
}

// ============================================================================
// Test Middleware
// ============================================================================

/// Writes its tag, forwards, writes its tag again.
pub struct Wrap {
    pub tag: &'static str,
}

impl Middleware<TestRequest, TestResponse> for Wrap {
    type Output = String;

    fn call(
        &self,
        request: &TestRequest,
        response: &TestResponse,
        next: Next<TestRequest, TestResponse, String>,
    ) -> Result<String, ChainError> {
        Ok(format!(
            "{}{}{}",
            self.tag,
            next.forward(request, response)?,
            self.tag
        ))
    }
}

/// Writes its tag and ends the chain without forwarding.
pub struct Respond {
    pub tag: &'static str,
}

impl Middleware<TestRequest, TestResponse> for Respond {
    type Output = String;

    fn call(
        &self,
        _request: &TestRequest,
        _response: &TestResponse,
        _next: Next<TestRequest, TestResponse, String>,
    ) -> Result<String, ChainError> {
        Ok(self.tag.to_string())
    }
}

/// Relies entirely on the default pass-through behavior.
pub struct Transparent;

impl Middleware<TestRequest, TestResponse> for Transparent {
    type Output = String;
}

/// Records its id, then forwards.
pub struct OrderProbe {
    pub id: usize,
    pub order: Arc<Mutex<Vec<usize>>>,
}

impl Middleware<TestRequest, TestResponse> for OrderProbe {
    type Output = String;

    fn call(
        &self,
        request: &TestRequest,
        response: &TestResponse,
        next: Next<TestRequest, TestResponse, String>,
    ) -> Result<String, ChainError> {
        self.order.lock().unwrap().push(self.id);
        next.forward(request, response)
    }
}

/// Aborts the run with its own failure.
pub struct Failing;

impl Middleware<TestRequest, TestResponse> for Failing {
    type Output = String;

    fn call(
        &self,
        _request: &TestRequest,
        _response: &TestResponse,
        _next: Next<TestRequest, TestResponse, String>,
    ) -> Result<String, ChainError> {
        Err(ChainError::Custom("intentional failure".into()))
    }
}
