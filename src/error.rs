//! Error types for the merge pipeline.
//!
//! Every failure class carries the origin of the input it came from, so
//! the diagnostic on stderr names standard input or the overlay path.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which input a mapping, or a failure, came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// The base mapping, read from standard input.
    Stdin,
    /// The overlay mapping, read from a file.
    File(PathBuf),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "standard input"),
            Self::File(path) => write!(f, "file '{}'", path.display()),
        }
    }
}

/// Merge pipeline errors.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("failed to read {origin}: {err}")]
    Read {
        origin: Origin,
        #[source]
        err: io::Error,
    },

    #[error("{origin} is not valid UTF-8: {err}")]
    InvalidUtf8 {
        origin: Origin,
        #[source]
        err: std::str::Utf8Error,
    },

    #[error("{origin} is not valid JSON: {err}")]
    InvalidJson {
        origin: Origin,
        #[source]
        err: serde_json::Error,
    },

    #[error("{origin} must contain a top-level JSON object, found {actual}")]
    NotAnObject { origin: Origin, actual: &'static str },

    #[error("failed to write merged output: {0}")]
    Write(#[from] io::Error),
}

impl MergeError {
    /// Get the exit code for this error.
    ///
    /// These codes are stable and used for automation.
    pub fn exit_code(&self) -> i32 {
        match self {
            MergeError::Read { .. } => 20,
            MergeError::InvalidUtf8 { .. } => 10,
            MergeError::InvalidJson { .. } => 10,
            MergeError::NotAnObject { .. } => 11,
            MergeError::Write(_) => 1,
        }
    }
}

/// Result type for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;
