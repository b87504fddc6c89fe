//! Error types for the installer engine.
//!
//! One unified error type keeps plumbing out of the orchestration module.
//! Every variant is fatal to the run; there are no retryable errors here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during installation operations.
#[derive(Debug, Error)]
pub enum InstallError {
    // === Interpreter discovery ===
    /// No usable Python interpreter on PATH
    #[error("Python not found in PATH (tried: {0})")]
    PythonNotFound(String),

    /// Interpreter exists but is below the supported minimum
    #[error("Python {found} is too old; {minimum}+ is required")]
    PythonTooOld { found: String, minimum: String },

    // === Environment setup ===
    /// Failed to create the virtual environment
    #[error("Failed to create virtualenv at {path}: {reason}")]
    CreateEnvFailed { path: PathBuf, reason: String },

    /// pip/uv package installation failed
    #[error("Failed to install packages: {0}")]
    PackageInstallFailed(String),

    // === Binary exposure ===
    /// Could not link/copy the entry point into the bin directory
    #[error("Failed to expose {src} at {dest}: {reason}")]
    LinkFailed {
        src: PathBuf,
        dest: PathBuf,
        reason: String,
    },

    /// The venv does not contain the expected entry point
    #[error("Installed package did not produce a binary at {0}")]
    BinaryMissing(PathBuf),

    // === PATH persistence ===
    /// Failed to read or update the shell rc file
    #[error("Failed to update {path}: {reason}")]
    RcFileError { path: PathBuf, reason: String },

    // === Verification ===
    /// The installed binary did not report a version
    #[error("Installed binary failed verification: {0}")]
    VerificationFailed(String),

    // === Generic subprocess failure ===
    /// A spawned command exited non-zero or could not be run
    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    // === Prompt ===
    /// User declined a confirmation prompt
    #[error("Operation cancelled by user")]
    Cancelled,

    // === Path & IO ===
    /// Path resolution failed
    #[error("Path error: {0}")]
    Path(#[from] hfup_core::PathError),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InstallError {
    /// Build a `CommandFailed` from a command display string and cause.
    pub fn command_failed(command: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::CommandFailed {
            command: command.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for installer operations.
pub type InstallResult<T> = Result<T, InstallError>;
