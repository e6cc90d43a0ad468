// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Rxpad error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pattern failed to compile (malformed regex syntax)
    #[error("invalid pattern: {message}")]
    Pattern { message: String },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Saved-pattern library error
    #[error("library error: {message}")]
    Library {
        message: String,
        path: Option<PathBuf>,
    },

    /// No backup exists for the requested file
    #[error("no backup found for {}", .path.display())]
    NoBackup { path: PathBuf },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Pattern {
            message: err.to_string(),
        }
    }
}

/// Result type using rxpad Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation completed with results
    Success = 0,
    /// Pattern compiled and ran but found nothing
    NoMatches = 1,
    /// Pattern, argument, or library error
    UsageError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Pattern { .. }
            | Error::Argument(_)
            | Error::Library { .. }
            | Error::NoBackup { .. } => ExitCode::UsageError,
            Error::Io { .. } | Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
