//! Stock middleware implementations.

pub mod halt;
pub mod logging;
pub mod passthrough;

pub use halt::Halt;
pub use logging::LoggingMiddleware;
pub use passthrough::Passthrough;
