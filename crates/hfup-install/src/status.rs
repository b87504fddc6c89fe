//! Installation status reporting.

use std::path::PathBuf;

use hfup_core::paths::{bin_dir, install_dir, installed_binary_path, venv_dir, venv_python_path};

use crate::error::InstallResult;
use crate::install::BINARY_NAME;
use crate::verify::report_version;

/// A snapshot of what is currently installed.
#[derive(Debug)]
pub struct StatusReport {
    pub install_dir: PathBuf,
    pub venv_present: bool,
    pub binary: PathBuf,
    pub binary_present: bool,
    /// Version reported by the binary, when it is present and runnable.
    pub version: Option<String>,
}

impl StatusReport {
    /// Whether the installation looks complete.
    pub fn installed(&self) -> bool {
        self.venv_present && self.binary_present
    }
}

/// Inspect the filesystem (and the binary, when present) without modifying
/// anything.
pub async fn gather_status() -> InstallResult<StatusReport> {
    let install_dir = install_dir()?;
    let venv = venv_dir()?;
    let binary = installed_binary_path(&bin_dir()?, BINARY_NAME);

    let venv_present = venv_python_path(&venv).exists();
    let binary_present = binary.exists();

    let version = if binary_present {
        report_version(&binary).await.ok()
    } else {
        None
    };

    Ok(StatusReport {
        install_dir,
        venv_present,
        binary,
        binary_present,
        version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Status against a relocated, empty HF_HOME: nothing is installed.
    // Serialized env handling lives in the integration tests; this one only
    // exercises the pure predicate.
    #[test]
    fn installed_requires_both_parts() {
        let report = StatusReport {
            install_dir: PathBuf::from("/tmp/x"),
            venv_present: true,
            binary: PathBuf::from("/tmp/x/hf"),
            binary_present: false,
            version: None,
        };
        assert!(!report.installed());
    }
}
