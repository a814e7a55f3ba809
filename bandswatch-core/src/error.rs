//! Error types for bandswatch configuration and tooling.
//!
//! The position mapper itself never fails; these errors cover loading and
//! validating configuration and the parameters of headless sweeps.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config file missing or unreadable (-1)
    ConfigUnreadable = -1,
    /// Config file is not valid JSON for the schema (-2)
    ConfigParse = -2,
    /// A config value is out of range (-3)
    InvalidConfig = -3,
    /// Sweep parameters cannot produce a sequence (-4)
    InvalidSweep = -4,
}

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum SwatchError {
    #[error("Cannot read config file {path}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': expected {expected}, got {value}")]
    InvalidConfig {
        field: &'static str,
        expected: &'static str,
        value: f32,
    },

    #[error("Invalid sweep: {message}")]
    InvalidSweep { message: String },
}

impl SwatchError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SwatchError::ConfigUnreadable { .. } => ErrorCode::ConfigUnreadable,
            SwatchError::ConfigParse(_) => ErrorCode::ConfigParse,
            SwatchError::InvalidConfig { .. } => ErrorCode::InvalidConfig,
            SwatchError::InvalidSweep { .. } => ErrorCode::InvalidSweep,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, SwatchError>;
