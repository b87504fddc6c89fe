//! Core types for hfup: path resolution, environment-driven configuration,
//! version-string parsing, and the documentation metadata tables.
//!
//! This crate performs no subprocess or terminal I/O. The installer engine
//! (`hfup-install`) and the CLI adapter (`hfup-cli`) build on top of it.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod metadata;
pub mod paths;
pub mod version;

// Re-export commonly used types for convenience
pub use config::{EnvConfig, PIP_ARGS_VAR, PIP_ARGS_VAR_FALLBACK, VERBOSE_PIP_VAR};
pub use metadata::{Library, ModelInfo, Task, find_library, find_task, libraries, tasks};
pub use paths::{
    PathError, PathSource, ResolvedPath, ShellKind, bin_dir, ensure_dir, install_dir,
    installed_binary_path, marker_path, resolve_bin_dir, resolve_install_dir, venv_binary_path,
    venv_dir, venv_python_path, verify_writable,
};
pub use version::{parse_version_tuple, scan_version_token};
