//! Marker traits for the values that travel through a chain.

/// A marker trait for the opaque request and response values a stack carries.
///
/// The stack never inspects or mutates these values. They are captured once
/// at construction and handed to every middleware by reference, exactly as
/// the caller supplied them.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Payload",
    label = "must be `Send + Sync + 'static`",
    note = "Request and response values must be owned and thread-safe."
)]
pub trait Payload: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Payload for T {}

/// A marker trait for the value a chain run settles on.
///
/// Whatever the short-circuiting or terminal unit returns propagates back
/// through every `forward` call and out of the run unchanged.
pub trait ChainResult: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> ChainResult for T {}
