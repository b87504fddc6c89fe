//! Python interpreter discovery.
//!
//! Finds an interpreter on PATH that meets the minimum supported version.
//! The version is read from `python --version` output; Python prints it to
//! stdout on modern versions, so both streams are scanned to be safe.

use std::path::{Path, PathBuf};

use hfup_core::version::{parse_version_tuple, scan_version_token};
use tokio::process::Command;
use tracing::debug;

use crate::error::{InstallError, InstallResult};

/// Minimum Python version `huggingface_hub` supports.
pub const MIN_PYTHON: (u32, u32) = (3, 9);

#[cfg(target_os = "windows")]
const PYTHON_CANDIDATES: &[&str] = &["python"];

#[cfg(not(target_os = "windows"))]
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// A discovered interpreter suitable for bootstrapping the venv.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    pub path: PathBuf,
    pub version: String,
}

/// Find the first PATH candidate that is new enough.
///
/// Candidates that exist but are too old are skipped; if every candidate is
/// too old, the error names the newest one found rather than claiming Python
/// is absent.
pub async fn find_python() -> InstallResult<PythonInterpreter> {
    let mut too_old: Option<String> = None;

    for candidate in PYTHON_CANDIDATES {
        let Ok(path) = which::which(candidate) else {
            continue;
        };

        let Some(version) = query_version(&path).await else {
            debug!(path = %path.display(), "candidate did not report a version");
            continue;
        };

        if meets_minimum(&version) {
            debug!(path = %path.display(), %version, "selected bootstrap python");
            return Ok(PythonInterpreter { path, version });
        }
        too_old.get_or_insert(version);
    }

    match too_old {
        Some(found) => Err(InstallError::PythonTooOld {
            found,
            minimum: format!("{}.{}", MIN_PYTHON.0, MIN_PYTHON.1),
        }),
        None => Err(InstallError::PythonNotFound(PYTHON_CANDIDATES.join(", "))),
    }
}

/// Run `<python> --version` and extract the version token.
async fn query_version(python: &Path) -> Option<String> {
    let output = Command::new(python).arg("--version").output().await.ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    scan_version_token(&stdout)
        .or_else(|| scan_version_token(&String::from_utf8_lossy(&output.stderr)))
}

/// Whether a version string satisfies [`MIN_PYTHON`].
pub fn meets_minimum(version: &str) -> bool {
    parse_version_tuple(version).is_some_and(|(major, minor)| (major, minor) >= MIN_PYTHON)
}
