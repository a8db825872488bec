/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task queue adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod queue;
pub mod types;

// Re-export commonly used types from http
pub use http::{ClientConfig, DEFAULT_BASE_URL, Result, TaskQueueClient, TaskQueueError};

pub use queue::TaskQueue;

// Re-export all types
pub use types::*;
