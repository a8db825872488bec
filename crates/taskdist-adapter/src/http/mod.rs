/*
[INPUT]:  HTTP client configuration and queue service endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod results;
pub mod task;

pub use error::{Result, TaskQueueError};

pub use client::{ClientConfig, DEFAULT_BASE_URL, TaskQueueClient};
