//! Error types and exit codes for moodfit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, unwritable favorites log)
//! - 2: Usage error (bad flags/args, unknown mood or weather)
//! - 3: Data error (outfit not found, invalid catalog configuration)

mod macros;

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the moodfit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing outfit, broken catalog file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during moodfit operations
#[derive(Error, Debug)]
pub enum MoodfitError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value} (expected one of: {expected})")]
    InvalidValue {
        context: String,
        value: String,
        expected: String,
    },

    // Data errors (exit code 3)
    #[error("outfit '{outfit}' not found for {mood} mood and {weather} weather")]
    OutfitNotFound {
        mood: String,
        weather: String,
        outfit: String,
    },

    #[error("invalid catalog in {source_name}: {reason}")]
    InvalidCatalog { source_name: String, reason: String },

    // Generic failures (exit code 1)
    #[error("cannot write favorites to {path:?}: {reason}")]
    StorageUnwritable { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl MoodfitError {
    /// Create an error for a value outside a closed set
    pub fn invalid_value(
        context: &str,
        value: impl std::fmt::Display,
        expected: impl std::fmt::Display,
    ) -> Self {
        MoodfitError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Create an error for a catalog or image table that failed validation
    pub fn invalid_catalog(source_name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        MoodfitError::InvalidCatalog {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed append to the favorites log
    pub fn storage(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        MoodfitError::StorageUnwritable {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MoodfitError::UnknownFormat(_)
            | MoodfitError::UsageError(_)
            | MoodfitError::InvalidValue { .. } => ExitCode::Usage,

            MoodfitError::OutfitNotFound { .. } | MoodfitError::InvalidCatalog { .. } => {
                ExitCode::Data
            }

            MoodfitError::StorageUnwritable { .. }
            | MoodfitError::Io(_)
            | MoodfitError::Json(_)
            | MoodfitError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            MoodfitError::UnknownFormat(_) => "unknown_format",
            MoodfitError::UsageError(_) => "usage_error",
            MoodfitError::InvalidValue { .. } => "invalid_value",
            MoodfitError::OutfitNotFound { .. } => "outfit_not_found",
            MoodfitError::InvalidCatalog { .. } => "invalid_catalog",
            MoodfitError::StorageUnwritable { .. } => "storage_unwritable",
            MoodfitError::Io(_) => "io_error",
            MoodfitError::Json(_) => "json_error",
            MoodfitError::Other(_) => "other",
        }
    }

    /// Render this error as a JSON envelope for `--format json`
    pub fn to_json(&self) -> String {
        let payload = serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });
        serde_json::to_string(&payload).unwrap_or_else(|_| {
            format!(
                r#"{{"error":{{"code":{},"type":"{}","message":"{}"}}}}"#,
                self.exit_code() as i32,
                self.error_type(),
                self.to_string().replace('\\', "\\\\").replace('"', "\\\"")
            )
        })
    }
}

/// Result type alias for moodfit operations
pub type Result<T> = std::result::Result<T, MoodfitError>;
