//! Error types for pdfmerge.
//!
//! Every failure of a merge call surfaces as a [`PdfMergeError`]. Variants are
//! grouped into broad categories through [`ErrorKind`] so callers can react to
//! the class of a failure without matching every variant.
//!
//! # Error Categories
//!
//! - **Type Errors**: the input has the wrong shape (e.g. not a list)
//! - **Validation Errors**: the file list is empty or too short
//! - **Execution Errors**: the toolkit could not be spawned or exited non-zero
//! - **I/O Errors**: reading the temporary output failed
//! - **Config Errors**: an options file or flag could not be interpreted

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfmerge operations.
pub type Result<T> = std::result::Result<T, PdfMergeError>;

/// Broad category of a [`PdfMergeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input shape.
    Type,
    /// Semantically empty or insufficient input.
    Validation,
    /// External toolkit failed or could not be spawned.
    Execution,
    /// Filesystem failure around the temporary output.
    Io,
    /// Invalid configuration.
    Config,
}

/// Main error type for pdfmerge operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfMergeError {
    /// The file list has the wrong shape.
    #[error("{message}")]
    InvalidInput {
        /// Description of the expected shape.
        message: String,
    },

    /// No usable file paths were left after filtering.
    #[error("No files were submitted for merging")]
    NoFilesToMerge,

    /// A single path without a wildcard cannot be merged.
    #[error("You need at least two files in order to merge PDF documents")]
    NotEnoughFiles,

    /// The toolkit process could not be started.
    #[error("Failed to run '{program}': {source}")]
    SpawnFailed {
        /// Program that was being spawned.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The toolkit exited unsuccessfully.
    #[error("{}", execution_failed_message(.status, .stderr))]
    ExecutionFailed {
        /// Exit code, if the process exited normally.
        status: Option<i32>,
        /// Diagnostic text captured from stderr.
        stderr: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Failed to read an options file.
    #[error("Failed to read options file: {}\n  Reason: {source}", .path.display())]
    FailedToReadConfig {
        /// Path to the options file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

fn execution_failed_message(status: &Option<i32>, stderr: &str) -> String {
    let status = status.map_or_else(|| "signal".to_string(), |code| code.to_string());
    let stderr = stderr.trim();

    if stderr.is_empty() {
        format!("PDF toolkit failed (exit status {status})")
    } else {
        format!("PDF toolkit failed (exit status {status}): {stderr}")
    }
}

impl PdfMergeError {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a SpawnFailed error.
    pub fn spawn_failed(program: impl Into<String>, source: io::Error) -> Self {
        Self::SpawnFailed {
            program: program.into(),
            source,
        }
    }

    /// Create an ExecutionFailed error.
    pub fn execution_failed(status: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            status,
            stderr: stderr.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::Type,
            Self::NoFilesToMerge | Self::NotEnoughFiles => ErrorKind::Validation,
            Self::SpawnFailed { .. } | Self::ExecutionFailed { .. } => ErrorKind::Execution,
            Self::Io { .. } => ErrorKind::Io,
            Self::InvalidConfig { .. } | Self::FailedToReadConfig { .. } => ErrorKind::Config,
        }
    }

    /// Check if this error was caused by the caller's file list.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Type | ErrorKind::Validation)
    }

    /// Get the exit code for this error.
    ///
    /// Returns the appropriate process exit code based on error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput { .. } => 1,
            Self::NoFilesToMerge => 1,
            Self::NotEnoughFiles => 1,
            Self::InvalidConfig { .. } => 1,
            Self::FailedToReadConfig { .. } => 2,
            Self::SpawnFailed { .. } => 127,
            Self::ExecutionFailed { .. } => 6,
            Self::Io { .. } => 5,
        }
    }
}
