//! Virtual environment management.
//!
//! Creates the venv, upgrades pip, and installs the requirement set. A JSON
//! freshness marker next to the venv records which installer version and
//! requirements produced it, so a re-run can skip pip entirely when nothing
//! changed.
//!
//! When a `uv` executable is available on PATH it is preferred for the
//! install step (it is much faster); any uv failure degrades to plain pip
//! rather than aborting.

use std::fs;
use std::path::Path;

use hfup_core::paths::venv_python_path;
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{InstallError, InstallResult};

/// The package that provides the `hf` entry point.
pub const BASE_REQUIREMENT: &str = "huggingface_hub[cli]";

/// Optional extra pulled in by `--with-transformers`.
pub const TRANSFORMERS_REQUIREMENT: &str = "transformers";

/// The requirement set for an installation.
pub fn requirements(with_transformers: bool) -> Vec<String> {
    let mut specs = vec![BASE_REQUIREMENT.to_string()];
    if with_transformers {
        specs.push(TRANSFORMERS_REQUIREMENT.to_string());
    }
    specs
}

// ============================================================================
// Freshness marker
// ============================================================================

/// Marker file recording what produced the current venv.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvMarker {
    installer_version: String,
    requirements: Vec<String>,
}

impl EnvMarker {
    /// The marker a fresh install with `requirements` would write.
    pub fn current(requirements: &[String]) -> Self {
        Self {
            installer_version: env!("CARGO_PKG_VERSION").to_string(),
            requirements: requirements.to_vec(),
        }
    }

    /// Load a marker, returning `None` on absence or any parse problem.
    /// A corrupt marker is treated as stale, not as an error.
    pub fn load(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Persist the marker.
    pub fn store(&self, path: &Path) -> InstallResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| InstallError::command_failed("serialize marker", e))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Whether the marker at `path` matches this installer and requirement set.
pub fn marker_is_fresh(path: &Path, requirements: &[String]) -> bool {
    EnvMarker::load(path).is_some_and(|m| m == EnvMarker::current(requirements))
}

// ============================================================================
// Venv operations
// ============================================================================

/// Create a venv at `venv` using the bootstrap interpreter.
pub async fn create_venv(python: &Path, venv: &Path) -> InstallResult<()> {
    let status = Command::new(python)
        .arg("-m")
        .arg("venv")
        .arg(venv)
        .status()
        .await
        .map_err(|e| InstallError::CreateEnvFailed {
            path: venv.to_path_buf(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(InstallError::CreateEnvFailed {
            path: venv.to_path_buf(),
            reason: format!("python -m venv exited with {status}"),
        });
    }

    Ok(())
}

/// Upgrade pip inside the venv.
pub async fn upgrade_pip(venv: &Path, quiet: bool) -> InstallResult<()> {
    let python = venv_python_path(venv);
    let mut args = vec!["-m", "pip", "install", "--upgrade", "pip"];
    if quiet {
        args.insert(3, "-q");
    }
    run_step(python.as_os_str().to_string_lossy().as_ref(), &args, quiet).await
}

/// Install the requirement set into the venv.
///
/// Prefers `uv` when present; falls back to `python -m pip` on any uv
/// failure. `extra_args` come from `HF_CLI_PIP_ARGS` and are appended to
/// whichever tool runs.
pub async fn install_packages(
    venv: &Path,
    requirements: &[String],
    extra_args: &[String],
    quiet: bool,
) -> InstallResult<()> {
    let python = venv_python_path(venv);

    if let Ok(uv) = which::which("uv") {
        let args = uv_install_args(&python, requirements, extra_args, quiet);
        debug!(uv = %uv.display(), "installing via uv");
        match run_step_owned(uv.to_string_lossy().as_ref(), &args, quiet).await {
            Ok(()) => return Ok(()),
            Err(e) => warn!("uv install failed ({e}); falling back to pip"),
        }
    }

    let args = pip_install_args(requirements, extra_args, quiet);
    run_step_owned(python.to_string_lossy().as_ref(), &args, quiet)
        .await
        .map_err(|e| InstallError::PackageInstallFailed(e.to_string()))
}

/// Argument vector for `python -m pip install ...`.
fn pip_install_args(requirements: &[String], extra_args: &[String], quiet: bool) -> Vec<String> {
    let mut args: Vec<String> = ["-m", "pip", "install", "--upgrade"]
        .iter()
        .map(ToString::to_string)
        .collect();
    if quiet {
        args.insert(3, "-q".to_string());
    }
    args.extend(requirements.iter().cloned());
    args.extend(extra_args.iter().cloned());
    args
}

/// Argument vector for `uv pip install --python <venv python> ...`.
fn uv_install_args(
    venv_python: &Path,
    requirements: &[String],
    extra_args: &[String],
    quiet: bool,
) -> Vec<String> {
    let mut args = vec![
        "pip".to_string(),
        "install".to_string(),
        "--upgrade".to_string(),
        "--python".to_string(),
        venv_python.to_string_lossy().into_owned(),
    ];
    if quiet {
        args.push("--quiet".to_string());
    }
    args.extend(requirements.iter().cloned());
    args.extend(extra_args.iter().cloned());
    args
}

/// Run one install step, surfacing a `CommandFailed` with output tail on
/// failure. Quiet mode captures output; verbose mode inherits the terminal.
async fn run_step(program: &str, args: &[&str], quiet: bool) -> InstallResult<()> {
    let owned: Vec<String> = args.iter().map(ToString::to_string).collect();
    run_step_owned(program, &owned, quiet).await
}

async fn run_step_owned(program: &str, args: &[String], quiet: bool) -> InstallResult<()> {
    let cmd_display = format!("{program} {}", args.join(" "));
    debug!(command = %cmd_display, "running install step");

    if quiet {
        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| InstallError::command_failed(&cmd_display, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(InstallError::command_failed(
                &cmd_display,
                format!("exited with {}: {}", output.status, output_tail(&stderr)),
            ));
        }
        Ok(())
    } else {
        let status = Command::new(program)
            .args(args)
            .status()
            .await
            .map_err(|e| InstallError::command_failed(&cmd_display, e))?;

        if !status.success() {
            return Err(InstallError::command_failed(
                &cmd_display,
                format!("exited with {status}"),
            ));
        }
        Ok(())
    }
}

/// Last few lines of captured output, enough to name the failure.
fn output_tail(output: &str) -> String {
    const TAIL_LINES: usize = 8;
    let lines: Vec<&str> = output.lines().collect();
    let start = lines.len().saturating_sub(TAIL_LINES);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn requirement_set_respects_transformers_flag() {
        assert_eq!(requirements(false), vec![BASE_REQUIREMENT]);
        assert_eq!(
            requirements(true),
            vec![BASE_REQUIREMENT, TRANSFORMERS_REQUIREMENT]
        );
    }

    #[test]
    fn marker_round_trip_and_freshness() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".hfup-env.json");
        let reqs = requirements(false);

        assert!(!marker_is_fresh(&path, &reqs)); // missing

        EnvMarker::current(&reqs).store(&path).unwrap();
        assert!(marker_is_fresh(&path, &reqs));

        // Different requirement set is stale
        assert!(!marker_is_fresh(&path, &requirements(true)));
    }

    #[test]
    fn corrupt_marker_is_stale_not_fatal() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".hfup-env.json");
        fs::write(&path, "not json {").unwrap();

        assert!(EnvMarker::load(&path).is_none());
        assert!(!marker_is_fresh(&path, &requirements(false)));
    }

    #[test]
    fn pip_args_quiet_and_extras() {
        let reqs = requirements(false);
        let extra = vec!["--index-url".to_string(), "https://x.test".to_string()];

        let args = pip_install_args(&reqs, &extra, true);
        assert_eq!(args[..5], ["-m", "pip", "install", "-q", "--upgrade"]);
        assert!(args.contains(&BASE_REQUIREMENT.to_string()));
        assert_eq!(args[args.len() - 2..], ["--index-url", "https://x.test"]);

        let args = pip_install_args(&reqs, &[], false);
        assert!(!args.contains(&"-q".to_string()));
    }

    #[test]
    fn uv_args_target_the_venv_interpreter() {
        let python = Path::new("/tmp/venv/bin/python3");
        let args = uv_install_args(python, &requirements(false), &[], true);

        assert_eq!(args[..3], ["pip", "install", "--upgrade"]);
        let python_pos = args.iter().position(|a| a == "--python").unwrap();
        assert_eq!(args[python_pos + 1], "/tmp/venv/bin/python3");
        assert!(args.contains(&"--quiet".to_string()));
    }
}
