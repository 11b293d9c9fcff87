//! Error types and exit codes for roadgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid config values)
//! - 3: Data error (unknown node, invalid graph file, invalid weight)

mod macros;

use thiserror::Error;

/// Process exit codes for the roadgraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, malformed graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("invalid weight {weight} on edge {from} -> {to} (weights must be finite and non-negative)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("graph check failed: {count} issue(s) found")]
    CheckFailed { count: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a node missing from the graph
    pub fn node_not_found(id: impl Into<String>) -> Self {
        GraphError::NodeNotFound { id: id.into() }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        GraphError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. }
            | GraphError::Unsupported { .. } => ExitCode::Usage,

            GraphError::NodeNotFound { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::AlreadyExists { .. }
            | GraphError::CheckFailed { .. }
            | GraphError::Json(_)
            | GraphError::Toml(_) => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::FailedOperationWithTarget { .. }
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Unsupported { .. } => "unsupported",
            GraphError::NodeNotFound { .. } => "node_not_found",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::AlreadyExists { .. } => "already_exists",
            GraphError::CheckFailed { .. } => "check_failed",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for roadgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
