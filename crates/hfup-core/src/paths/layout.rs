//! Resolution of the installation directory layout.
//!
//! The layout mirrors what the shell installer scripts created historically:
//! an install directory holding a `venv/` subdirectory plus a freshness
//! marker, and a separate user bin directory receiving the `hf` entry point.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::PathError;

/// Environment variable that relocates the whole Hugging Face home.
/// When set, the CLI installs under `$HF_HOME/cli`.
pub const HF_HOME_VAR: &str = "HF_HOME";

/// Environment variable overriding the bin directory the `hf` binary
/// is linked into.
pub const BIN_DIR_VAR: &str = "HF_CLI_BIN_DIR";

/// File name of the environment freshness marker inside the install dir.
const MARKER_NAME: &str = ".hfup-env.json";

/// Where a resolved path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// Built-in default under the user's home directory.
    Default,
    /// Overridden through an environment variable.
    EnvOverride(&'static str),
}

/// A resolved directory together with the source of the resolution.
///
/// Used by `hfup paths` to explain where each location comes from.
#[derive(Debug, Clone)]
pub struct ResolvedPath {
    pub path: PathBuf,
    pub source: PathSource,
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Resolve the install directory and report where it came from.
///
/// Resolution order:
/// 1. `$HF_HOME/cli` when `HF_HOME` is set and non-empty
/// 2. `~/.hf-cli`
pub fn resolve_install_dir() -> Result<ResolvedPath, PathError> {
    if let Some(hf_home) = non_empty_env(HF_HOME_VAR) {
        let path = PathBuf::from(hf_home).join("cli");
        debug!(path = %path.display(), "install dir from HF_HOME");
        return Ok(ResolvedPath {
            path,
            source: PathSource::EnvOverride(HF_HOME_VAR),
        });
    }

    let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
    Ok(ResolvedPath {
        path: home.join(".hf-cli"),
        source: PathSource::Default,
    })
}

/// The install directory (`~/.hf-cli` or `$HF_HOME/cli`).
pub fn install_dir() -> Result<PathBuf, PathError> {
    resolve_install_dir().map(|r| r.path)
}

/// The virtual environment directory inside the install dir.
pub fn venv_dir() -> Result<PathBuf, PathError> {
    Ok(install_dir()?.join("venv"))
}

/// The freshness marker file inside the install dir.
pub fn marker_path() -> Result<PathBuf, PathError> {
    Ok(install_dir()?.join(MARKER_NAME))
}

/// Resolve the user bin directory and report where it came from.
///
/// Resolution order:
/// 1. `HF_CLI_BIN_DIR` when set and non-empty
/// 2. `~/.local/bin`
pub fn resolve_bin_dir() -> Result<ResolvedPath, PathError> {
    if let Some(dir) = non_empty_env(BIN_DIR_VAR) {
        debug!(path = %dir, "bin dir from HF_CLI_BIN_DIR");
        return Ok(ResolvedPath {
            path: PathBuf::from(dir),
            source: PathSource::EnvOverride(BIN_DIR_VAR),
        });
    }

    let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
    Ok(ResolvedPath {
        path: home.join(".local").join("bin"),
        source: PathSource::Default,
    })
}

/// The user bin directory receiving the linked `hf` binary.
pub fn bin_dir() -> Result<PathBuf, PathError> {
    resolve_bin_dir().map(|r| r.path)
}

/// Path of the Python interpreter inside a venv.
pub fn venv_python_path(venv: &Path) -> PathBuf {
    if cfg!(windows) {
        venv.join("Scripts").join("python.exe")
    } else {
        let python3 = venv.join("bin").join("python3");
        if python3.exists() {
            python3
        } else {
            venv.join("bin").join("python")
        }
    }
}

/// Path of a named entry-point binary inside a venv.
pub fn venv_binary_path(venv: &Path, name: &str) -> PathBuf {
    if cfg!(windows) {
        venv.join("Scripts").join(format!("{name}.exe"))
    } else {
        venv.join("bin").join(name)
    }
}

/// Path the binary is exposed at in the user bin directory.
pub fn installed_binary_path(bin_dir: &Path, name: &str) -> PathBuf {
    if cfg!(windows) {
        bin_dir.join(format!("{name}.exe"))
    } else {
        bin_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn install_dir_defaults_under_home() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _clear = EnvVarGuard::unset(HF_HOME_VAR);

        let resolved = resolve_install_dir().unwrap();
        assert_eq!(resolved.source, PathSource::Default);
        assert!(resolved.path.ends_with(".hf-cli"));
    }

    #[test]
    fn hf_home_relocates_install_dir() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(HF_HOME_VAR, temp.path().to_string_lossy().as_ref());

        let resolved = resolve_install_dir().unwrap();
        assert_eq!(resolved.path, temp.path().join("cli"));
        assert_eq!(resolved.source, PathSource::EnvOverride(HF_HOME_VAR));

        // Derived paths follow the override
        assert_eq!(venv_dir().unwrap(), temp.path().join("cli").join("venv"));
        assert!(marker_path().unwrap().ends_with(".hfup-env.json"));
    }

    #[test]
    fn empty_hf_home_is_ignored() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(HF_HOME_VAR, "  ");

        let resolved = resolve_install_dir().unwrap();
        assert_eq!(resolved.source, PathSource::Default);
    }

    #[test]
    fn bin_dir_override_wins() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(BIN_DIR_VAR, temp.path().to_string_lossy().as_ref());

        let resolved = resolve_bin_dir().unwrap();
        assert_eq!(resolved.path, temp.path());
        assert_eq!(resolved.source, PathSource::EnvOverride(BIN_DIR_VAR));
    }

    #[test]
    #[cfg(unix)]
    fn venv_binary_paths_use_bin_dir() {
        let venv = Path::new("/tmp/venv");
        assert_eq!(
            venv_binary_path(venv, "hf"),
            Path::new("/tmp/venv/bin/hf")
        );
        assert_eq!(
            installed_binary_path(Path::new("/home/u/.local/bin"), "hf"),
            Path::new("/home/u/.local/bin/hf")
        );
    }
}
