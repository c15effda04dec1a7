//! Core error types for Grove.

use thiserror::Error;

/// Result type alias using `GroveError`.
pub type GroveResult<T> = std::result::Result<T, GroveError>;

/// Core error type for Grove operations.
///
/// Graph and queue validation failures are non-fatal: the structure that
/// rejected the operation is left in its last valid state and the variant
/// carries the diagnostic the caller would otherwise have printed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GroveError {
    /// Graph structure error (missing node, duplicate edge, labelledness
    /// mismatch, ...).
    #[error("GraphError: {0}")]
    GraphError(String),

    /// Priority queue error (duplicate element, element not present, ...).
    #[error("QueueError: {0}")]
    QueueError(String),

    /// `top`/`pop` on an empty priority queue.
    #[error("EmptyQueue: the priority queue is empty")]
    EmptyQueue,

    /// Malformed input record.
    #[error("ParseError: {0}")]
    ParseError(String),

    /// Invalid parameter provided.
    #[error("InvalidParameter: {0}")]
    InvalidParameter(String),

    /// IO error.
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl GroveError {
    /// Create a new `GraphError`.
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        Self::GraphError(msg.into())
    }

    /// Create a new `QueueError`.
    pub fn queue<S: Into<String>>(msg: S) -> Self {
        Self::QueueError(msg.into())
    }

    /// Create a new `ParseError`.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a new `InvalidParameter` error.
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Return early with a `GraphError`.
#[macro_export]
macro_rules! graph_err {
    ($($arg:tt)*) => {
        return Err($crate::GroveError::GraphError(format!($($arg)*)))
    };
}

/// Return early with a `QueueError`.
#[macro_export]
macro_rules! queue_err {
    ($($arg:tt)*) => {
        return Err($crate::GroveError::QueueError(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GroveError::graph("node 5 is not in the graph");
        assert_eq!(err.to_string(), "GraphError: node 5 is not in the graph");

        assert_eq!(
            GroveError::EmptyQueue.to_string(),
            "EmptyQueue: the priority queue is empty"
        );
    }

    #[test]
    fn test_error_constructors() {
        let _ = GroveError::queue("element already in the queue");
        let _ = GroveError::parse("expected 3 fields");
        let _ = GroveError::invalid_parameter("graph is unlabelled");
    }

    #[test]
    fn test_err_macros() {
        fn reject() -> GroveResult<()> {
            graph_err!("node {} is not in the graph", 7);
        }
        let err = reject().unwrap_err();
        assert_eq!(err.to_string(), "GraphError: node 7 is not in the graph");
    }
}
