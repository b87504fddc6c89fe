//! Path resolution for the hfup installation layout.
//!
//! This module provides the canonical resolution for everything the installer
//! touches on disk:
//! - Install directory (`~/.hf-cli`, or `$HF_HOME/cli` when `HF_HOME` is set)
//! - Virtual environment and its interpreter/entry-point binaries
//! - User bin directory (`~/.local/bin`, `HF_CLI_BIN_DIR` override)
//! - Shell rc file for PATH persistence
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - Environment overrides are read at call time so tests can relocate
//!   everything with `HF_HOME` / `HF_CLI_BIN_DIR`

mod ensure;
mod error;
mod layout;
mod shellrc;

#[cfg(test)]
pub mod test_utils;

// Re-export public API

// Error type
pub use error::PathError;

// Installation layout
pub use layout::{
    PathSource, ResolvedPath, bin_dir, install_dir, installed_binary_path, marker_path,
    resolve_bin_dir, resolve_install_dir, venv_binary_path, venv_dir, venv_python_path,
};

// Directory operations
pub use ensure::{ensure_dir, verify_writable};

// Shell rc detection
pub use shellrc::ShellKind;
