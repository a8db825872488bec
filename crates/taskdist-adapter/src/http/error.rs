/*
[INPUT]:  Error sources (transport, service error bodies, serialization, config)
[OUTPUT]: Structured error types and operator-facing status lines
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing status wording
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the task queue adapter
#[derive(Error, Debug)]
pub enum TaskQueueError {
    /// Request never completed (DNS, connect, reset, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-2xx status
    #[error("API error (code {code}): {message}")]
    Api { code: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// 2xx response whose body does not match the contract
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TaskQueueError {
    /// Whether the request failed before any response was received
    pub fn is_transport(&self) -> bool {
        matches!(self, TaskQueueError::Http(_))
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TaskQueueError::Api {
            code: status.as_u16(),
            message: message.into(),
        }
    }

    /// One-line description for the status channel.
    ///
    /// Service errors are surfaced verbatim, transport failures carry the
    /// underlying reason.
    pub fn status_line(&self) -> String {
        match self {
            TaskQueueError::Http(err) => format!("Network error: {}", transport_reason(err)),
            TaskQueueError::Api { message, .. } => format!("Error: {message}"),
            other => format!("Error: {other}"),
        }
    }
}

/// Walk the source chain so "error sending request" carries the root cause.
fn transport_reason(err: &reqwest::Error) -> String {
    let mut reason = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        reason = format!("{reason}: {inner}");
        source = inner.source();
    }
    reason
}

/// Result type alias for task queue operations
pub type Result<T> = std::result::Result<T, TaskQueueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = TaskQueueError::api_error(StatusCode::BAD_REQUEST, "invalid expression");
        match err {
            TaskQueueError::Api { code, ref message } => {
                assert_eq!(code, 400);
                assert_eq!(message, "invalid expression");
            }
            _ => panic!("Expected Api error variant"),
        }
        assert!(!err.is_transport());
    }

    #[test]
    fn test_api_error_status_line_is_verbatim() {
        let err = TaskQueueError::api_error(StatusCode::BAD_REQUEST, "invalid expression");
        assert_eq!(err.status_line(), "Error: invalid expression");
    }

    #[test]
    fn test_other_errors_render_as_plain_error() {
        let err = TaskQueueError::InvalidResponse("missing results".to_string());
        assert_eq!(err.status_line(), "Error: Invalid response: missing results");
    }
}
