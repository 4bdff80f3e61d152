//! Error types and exit codes for relnote
//!
//! Scoring itself never fails; these errors cover the host-side surfaces
//! (link snapshots, config files, CLI values).
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or malformed snapshot, unknown note)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing snapshot, unknown note (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading inputs for an analysis
#[derive(Error, Debug)]
pub enum RelnoteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("link snapshot not found: {path:?}")]
    SnapshotNotFound { path: PathBuf },

    #[error("invalid link snapshot {path:?}: {reason}")]
    InvalidSnapshot { path: PathBuf, reason: String },

    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RelnoteError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RelnoteError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RelnoteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        RelnoteError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        RelnoteError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RelnoteError::UnknownFormat(_)
            | RelnoteError::UsageError(_)
            | RelnoteError::InvalidValue { .. } => ExitCode::Usage,

            RelnoteError::SnapshotNotFound { .. }
            | RelnoteError::InvalidSnapshot { .. }
            | RelnoteError::NoteNotFound { .. }
            | RelnoteError::NotFound { .. }
            | RelnoteError::AlreadyExists { .. } => ExitCode::Data,

            RelnoteError::Io(_)
            | RelnoteError::Json(_)
            | RelnoteError::Toml(_)
            | RelnoteError::TomlSer(_)
            | RelnoteError::FailedOperationWithTarget { .. }
            | RelnoteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RelnoteError::UnknownFormat(_) => "unknown_format",
            RelnoteError::UsageError(_) => "usage_error",
            RelnoteError::InvalidValue { .. } => "invalid_value",
            RelnoteError::SnapshotNotFound { .. } => "snapshot_not_found",
            RelnoteError::InvalidSnapshot { .. } => "invalid_snapshot",
            RelnoteError::NoteNotFound { .. } => "note_not_found",
            RelnoteError::NotFound { .. } => "not_found",
            RelnoteError::AlreadyExists { .. } => "already_exists",
            RelnoteError::Io(_) => "io_error",
            RelnoteError::Json(_) => "json_error",
            RelnoteError::Toml(_) => "toml_error",
            RelnoteError::TomlSer(_) => "toml_error",
            RelnoteError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RelnoteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for relnote operations
pub type Result<T> = std::result::Result<T, RelnoteError>;
