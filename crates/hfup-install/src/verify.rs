//! Post-install verification.
//!
//! Runs the installed binary with its `version` subcommand and extracts the
//! reported version string. A binary that cannot report a version is treated
//! as a failed installation.

use std::path::Path;

use hfup_core::version::scan_version_token;
use tokio::process::Command;

use crate::error::{InstallError, InstallResult};

/// Run `<binary> version` and return the reported version string.
pub async fn report_version(binary: &Path) -> InstallResult<String> {
    let output = Command::new(binary)
        .arg("version")
        .output()
        .await
        .map_err(|e| {
            InstallError::VerificationFailed(format!(
                "could not run {}: {e}",
                binary.display()
            ))
        })?;

    if !output.status.success() {
        return Err(InstallError::VerificationFailed(format!(
            "{} version exited with {}",
            binary.display(),
            output.status
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    scan_version_token(&stdout)
        .or_else(|| {
            // Some builds print the banner on stderr
            scan_version_token(&String::from_utf8_lossy(&output.stderr))
        })
        .ok_or_else(|| {
            InstallError::VerificationFailed(format!(
                "no version string in output: {}",
                stdout.trim()
            ))
        })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    fn fake_binary(dir: &Path, script: &str) -> std::path::PathBuf {
        let path = dir.join("hf");
        fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[tokio::test]
    async fn reads_version_from_stdout() {
        let temp = tempdir().unwrap();
        let binary = fake_binary(temp.path(), "echo 'hf version: 1.2.3'");

        assert_eq!(report_version(&binary).await.unwrap(), "1.2.3");
    }

    #[tokio::test]
    async fn nonzero_exit_fails_verification() {
        let temp = tempdir().unwrap();
        let binary = fake_binary(temp.path(), "exit 3");

        let err = report_version(&binary).await.unwrap_err();
        assert!(matches!(err, InstallError::VerificationFailed(_)));
    }

    #[tokio::test]
    async fn missing_binary_fails_verification() {
        let temp = tempdir().unwrap();
        let err = report_version(&temp.path().join("absent")).await.unwrap_err();
        assert!(matches!(err, InstallError::VerificationFailed(_)));
    }

    #[tokio::test]
    async fn versionless_output_fails_verification() {
        let temp = tempdir().unwrap();
        let binary = fake_binary(temp.path(), "echo 'hello world'");

        let err = report_version(&binary).await.unwrap_err();
        assert!(matches!(err, InstallError::VerificationFailed(_)));
    }
}
