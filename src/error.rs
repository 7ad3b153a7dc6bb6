//! Error types for notebook session helpers.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when the host environment cannot service a helper call.
///
/// Every variant is environment-level: given a working host there are no
/// failure paths, and no retries or recovery are attempted here.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// The process working directory could not be resolved.
    #[error("could not resolve the current working directory")]
    CurrentDir(#[source] io::Error),

    /// Registration was attempted from a directory with no parent.
    #[error("directory {} has no parent to register", .0.display())]
    NoParentDir(PathBuf),

    /// A status message could not be written to the output sink.
    #[error("failed to write status message")]
    Write(#[source] io::Error),
}
