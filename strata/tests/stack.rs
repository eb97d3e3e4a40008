//! Stack construction, registration, and end-to-end execution order.

use std::sync::{Arc, Mutex};
use strata::{ChainError, ConfigError, Next, Registry, Stack, StrataError, from_fn};

mod common;
use common::{Failing, OrderProbe, Respond, TestRequest, TestResponse, Transparent, Wrap, context};

type TestStack = Stack<TestRequest, TestResponse, String>;

fn registry() -> Registry<TestRequest, TestResponse, String> {
    Registry::new()
        .register("wrap-a", || Wrap { tag: "A" })
        .register("wrap-b", || Wrap { tag: "B" })
        .register("respond-c", || Respond { tag: "C" })
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn builder_with_both_context_values_succeeds() {
    let (request, response) = context();
    let stack: Result<TestStack, _> = Stack::builder().request(request).response(response).build();

    assert!(stack.is_ok());
}

#[test]
fn builder_without_request_fails() {
    let (_, response) = context();
    let err = TestStack::builder().response(response).build().unwrap_err();

    assert!(matches!(err, ConfigError::MissingContext));
}

#[test]
fn builder_without_response_fails() {
    let (request, _) = context();
    let err = TestStack::builder().request(request).build().unwrap_err();

    assert!(matches!(err, ConfigError::MissingContext));
}

#[test]
fn running_an_empty_stack_fails() {
    let (request, response) = context();
    let stack = TestStack::new(request, response);
    assert!(stack.is_empty());

    let err = stack.run().unwrap_err();
    assert!(matches!(err, StrataError::Config(ConfigError::EmptyStack)));
}

#[test]
fn registry_reports_bound_names() {
    let registry = registry();

    assert!(registry.contains("wrap-a"));
    assert!(!registry.contains("missing"));
}

#[test]
fn adding_an_unknown_name_fails() {
    let (request, response) = context();
    let mut stack = Stack::builder()
        .request(request)
        .response(response)
        .registry(registry())
        .build()
        .unwrap();

    stack.add(Wrap { tag: "A" }).unwrap();
    let err = stack.add_named("missing").unwrap_err();

    match err {
        StrataError::Config(ConfigError::UnknownMiddleware(name)) => assert_eq!(name, "missing"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(stack.len(), 1, "a failed add should not grow the chain");
}

// ============================================================================
// Execution
// ============================================================================

#[test]
fn a_single_default_unit_forwards_past_the_end() {
    let (request, response) = context();
    let mut stack = TestStack::new(request, response);
    stack.add(Transparent).unwrap();

    let err = stack.run().unwrap_err();
    assert!(matches!(err, StrataError::Chain(ChainError::NoSuccessor)));
}

#[test]
fn units_execute_in_registration_order() {
    let (request, response) = context();
    let order = Arc::new(Mutex::new(Vec::new()));

    let mut stack = TestStack::new(request, response);
    stack
        .add(OrderProbe {
            id: 1,
            order: order.clone(),
        })
        .unwrap()
        .add(OrderProbe {
            id: 2,
            order: order.clone(),
        })
        .unwrap()
        .add(OrderProbe {
            id: 3,
            order: order.clone(),
        })
        .unwrap()
        .add(Respond { tag: "done" })
        .unwrap();

    assert_eq!(stack.run().unwrap(), "done");
    assert_eq!(
        *order.lock().unwrap(),
        vec![1, 2, 3],
        "units should execute in registration order"
    );
}

#[test]
fn wrapping_units_nest_around_the_terminal() {
    let (request, response) = context();
    let mut stack = TestStack::new(request, response);
    stack
        .add(Wrap { tag: "A" })
        .unwrap()
        .add(Wrap { tag: "B" })
        .unwrap()
        .add(Respond { tag: "C" })
        .unwrap();

    assert_eq!(stack.run().unwrap(), "ABCBA");
}

#[test]
fn a_failing_unit_aborts_the_run() {
    let (request, response) = context();
    let mut stack = TestStack::new(request, response);
    stack.add(Wrap { tag: "A" }).unwrap().add(Failing).unwrap();

    let err = stack.run().unwrap_err();
    assert!(matches!(err, StrataError::Chain(ChainError::Custom(_))));
}

#[test]
fn closures_can_join_the_chain() {
    let (request, response) = context();
    let mut stack = TestStack::new(request, response);
    stack
        .add(from_fn(
            |request: &TestRequest,
             response: &TestResponse,
             next: Next<TestRequest, TestResponse, String>|
             -> Result<String, ChainError> {
                assert!(next.is_wired());
                Ok(format!("({})", next.forward(request, response)?))
            },
        ))
        .unwrap()
        .add(Respond { tag: "fn" })
        .unwrap();

    assert_eq!(stack.run().unwrap(), "(fn)");
}

// ============================================================================
// Registration modes
// ============================================================================

#[test]
fn factories_and_names_match_ready_made_instances() {
    let (request, response) = context();

    let mut instances = TestStack::new(request.clone(), response.clone());
    instances
        .add(Wrap { tag: "A" })
        .unwrap()
        .add(Wrap { tag: "B" })
        .unwrap()
        .add(Respond { tag: "C" })
        .unwrap();

    let mut factories = TestStack::new(request.clone(), response.clone());
    factories
        .add_factory(|| Wrap { tag: "A" })
        .unwrap()
        .add_factory(|| Wrap { tag: "B" })
        .unwrap()
        .add_factory(|| Respond { tag: "C" })
        .unwrap();

    let mut named = Stack::builder()
        .request(request.clone())
        .response(response.clone())
        .registry(registry())
        .build()
        .unwrap();
    named
        .add_named("wrap-a")
        .unwrap()
        .add_named("wrap-b")
        .unwrap()
        .add_named("respond-c")
        .unwrap();

    let mut mixed = Stack::builder()
        .request(request)
        .response(response)
        .registry(registry())
        .build()
        .unwrap();
    mixed
        .add(Wrap { tag: "A" })
        .unwrap()
        .add_named("wrap-b")
        .unwrap()
        .add_factory(|| Respond { tag: "C" })
        .unwrap();

    assert_eq!(instances.run().unwrap(), "ABCBA");
    assert_eq!(factories.run().unwrap(), "ABCBA");
    assert_eq!(named.run().unwrap(), "ABCBA");
    assert_eq!(mixed.run().unwrap(), "ABCBA");
}
