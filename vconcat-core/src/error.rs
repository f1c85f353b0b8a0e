//! Error types shared across the crate.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for vconcat
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ffprobe failed for {}: {message}", path.display())]
    Probe { path: PathBuf, message: String },

    #[error("no video stream found in {}", .0.display())]
    NoVideoStream(PathBuf),

    #[error("no video files found")]
    NoFilesFound,

    #[error("collection is empty, nothing to concatenate")]
    EmptyCollection,

    #[error("no videos left after filtering: {0}")]
    EmptySelection(String),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("failed to start {0}: {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("failed waiting for {0}: {1}")]
    CommandWait(String, #[source] std::io::Error),

    #[error("{0} exited with {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for vconcat operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Creates a `CommandStart` error for a command that could not be spawned.
pub fn command_start_error(cmd: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

/// Creates a `CommandWait` error for a command whose exit could not be collected.
pub fn command_wait_error(cmd: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), err)
}

/// Creates a `CommandFailed` error from an exit status and captured stderr.
pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr.into())
}
