//! Installer engine for the Hugging Face `hf` CLI.
//!
//! Implements the provisioning sequence: find a compatible Python, create an
//! isolated venv, install `huggingface_hub[cli]`, expose the `hf` binary on
//! the user's PATH, and verify the result. All steps are sequential; any
//! failure aborts the run and leaves already-created directories in place for
//! a future re-run.

#![deny(unused_crate_dependencies)]

pub mod error;
pub mod install;
pub mod link;
pub mod python;
pub mod shell;
pub mod status;
pub mod uninstall;
pub mod venv;
pub mod verify;

pub use error::{InstallError, InstallResult};
pub use install::{InstallOptions, InstallReport, run_install};
pub use status::{StatusReport, gather_status};
pub use uninstall::run_uninstall;
