//! Error types and error code constants for jimport.
//!
//! This module provides a unified error type (`JimportError`) that bridges
//! errors from the statement model and file I/O into a common format
//! suitable for JSON output and process exit codes.
//!
//! ## Error Code Mapping
//!
//! - `2`: Invalid arguments (bad FQN, no target paths)
//! - `3`: Resolution errors (target path does not exist)
//! - `4`: Apply errors (failed to read or write a file)
//! - `10`: Internal errors (bugs, unexpected state)
//!
//! ## Design
//!
//! - **Unified type**: `JimportError` is the single error type for CLI output
//! - **Bridging**: `impl From<X> for JimportError` folds domain errors in
//! - **Code mapping**: `OutputErrorCode` provides stable integer codes
//!
//! The insertion core itself has no error path; everything here belongs to
//! the surrounding pipeline (validation, I/O, CLI).

use std::fmt;
use std::io;

use thiserror::Error;

use crate::statement::StatementError;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Stable error codes for JSON output and process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller (bad FQN, empty target list).
    InvalidArguments = 2,
    /// Resolution errors (target path not found).
    ResolutionError = 3,
    /// Apply errors (failed to read a file or write changes back).
    ApplyError = 4,
    /// Internal errors (bugs, unexpected state).
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for CLI output.
///
/// Per-file failures are carried inside per-file outcomes and only surface
/// here when the whole invocation must fail (or to pick an exit code after
/// all files were attempted); a failure on one file never aborts the rest.
#[derive(Debug, Error)]
pub enum JimportError {
    /// Invalid arguments from caller.
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// The requested import was malformed.
    #[error("invalid import '{fqn}': {reason}")]
    InvalidImport { fqn: String, reason: String },

    /// Target path does not exist.
    #[error("path not found: {path}")]
    PathNotFound { path: String },

    /// Failed to read a file or write changes back.
    #[error("apply error: {message}")]
    ApplyError {
        message: String,
        file: Option<String>,
    },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    InternalError { message: String },
}

// ============================================================================
// Error Code Mapping
// ============================================================================

impl From<&JimportError> for OutputErrorCode {
    fn from(err: &JimportError) -> Self {
        match err {
            JimportError::InvalidArguments { .. } => OutputErrorCode::InvalidArguments,
            JimportError::InvalidImport { .. } => OutputErrorCode::InvalidArguments,
            JimportError::PathNotFound { .. } => OutputErrorCode::ResolutionError,
            JimportError::ApplyError { .. } => OutputErrorCode::ApplyError,
            JimportError::InternalError { .. } => OutputErrorCode::InternalError,
        }
    }
}

impl From<JimportError> for OutputErrorCode {
    fn from(err: JimportError) -> Self {
        OutputErrorCode::from(&err)
    }
}

// ============================================================================
// Bridges
// ============================================================================

impl From<StatementError> for JimportError {
    fn from(err: StatementError) -> Self {
        JimportError::InvalidImport {
            fqn: err.fqn().to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<io::Error> for JimportError {
    fn from(err: io::Error) -> Self {
        JimportError::InternalError {
            message: format!("IO error: {}", err),
        }
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl JimportError {
    /// Create an invalid arguments error.
    pub fn invalid_args(message: impl Into<String>) -> Self {
        JimportError::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create a path not found error.
    pub fn path_not_found(path: impl Into<String>) -> Self {
        JimportError::PathNotFound { path: path.into() }
    }

    /// Create an apply error tied to a specific file.
    pub fn apply(message: impl Into<String>, file: impl Into<String>) -> Self {
        JimportError::ApplyError {
            message: message.into(),
            file: Some(file.into()),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        JimportError::InternalError {
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> OutputErrorCode {
        OutputErrorCode::from(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
