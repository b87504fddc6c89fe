//! PATH persistence in the user's shell rc file.
//!
//! The rc file gets at most one copy of the export line, ever: appending is
//! skipped when the exact line is already present, and callers also skip the
//! whole edit when the bin directory is already on the live PATH.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use hfup_core::ShellKind;

use crate::error::{InstallError, InstallResult};

/// The rc edit the installer intends to make.
#[derive(Debug, Clone)]
pub struct PathUpdate {
    pub rc_file: PathBuf,
    pub line: String,
}

/// Plan the rc edit for the given shell and bin directory.
pub fn plan_path_update(shell: ShellKind, bin_dir: &Path) -> InstallResult<PathUpdate> {
    Ok(PathUpdate {
        rc_file: shell.rc_file()?,
        line: shell.path_line(bin_dir),
    })
}

/// Whether `bin_dir` is already on the live `PATH`.
pub fn bin_dir_on_path(bin_dir: &Path) -> bool {
    let Some(path) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&path).any(|entry| entry == bin_dir)
}

/// Append the PATH line to the rc file unless it is already there.
///
/// Creates the rc file (and parents - fish keeps its config in a
/// subdirectory) if missing. Returns `true` when a line was appended.
pub fn ensure_path_line(rc_file: &Path, line: &str) -> InstallResult<bool> {
    let existing = if rc_file.exists() {
        fs::read_to_string(rc_file).map_err(|e| rc_error(rc_file, &e))?
    } else {
        if let Some(parent) = rc_file.parent() {
            fs::create_dir_all(parent).map_err(|e| rc_error(rc_file, &e))?;
        }
        String::new()
    };

    if existing.lines().any(|l| l.trim() == line) {
        return Ok(false);
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(rc_file)
        .map_err(|e| rc_error(rc_file, &e))?;

    // Keep the appended block separated from existing content.
    let leading = if existing.is_empty() || existing.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    write!(file, "{leading}\n# Added by hfup\n{line}\n").map_err(|e| rc_error(rc_file, &e))?;

    Ok(true)
}

fn rc_error(path: &Path, err: &std::io::Error) -> InstallError {
    InstallError::RcFileError {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn appends_once_and_only_once() {
        let temp = tempdir().unwrap();
        let rc = temp.path().join(".bashrc");
        fs::write(&rc, "alias ll='ls -l'\n").unwrap();
        let line = "export PATH=\"/home/u/.local/bin:$PATH\"";

        assert!(ensure_path_line(&rc, line).unwrap());
        assert!(!ensure_path_line(&rc, line).unwrap());

        let content = fs::read_to_string(&rc).unwrap();
        assert_eq!(content.matches(line).count(), 1);
        assert!(content.starts_with("alias ll"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn creates_missing_rc_file_with_parents() {
        let temp = tempdir().unwrap();
        let rc = temp.path().join(".config").join("fish").join("config.fish");

        assert!(ensure_path_line(&rc, "fish_add_path /home/u/.local/bin").unwrap());
        let content = fs::read_to_string(&rc).unwrap();
        assert!(content.contains("fish_add_path /home/u/.local/bin"));
    }

    #[test]
    fn detects_line_regardless_of_surrounding_whitespace() {
        let temp = tempdir().unwrap();
        let rc = temp.path().join(".zshrc");
        fs::write(&rc, "  export PATH=\"/b:$PATH\"  \n").unwrap();

        assert!(!ensure_path_line(&rc, "export PATH=\"/b:$PATH\"").unwrap());
    }

    #[test]
    fn file_without_trailing_newline_stays_intact() {
        let temp = tempdir().unwrap();
        let rc = temp.path().join(".bashrc");
        fs::write(&rc, "alias x=y").unwrap();

        ensure_path_line(&rc, "export PATH=\"/b:$PATH\"").unwrap();
        let content = fs::read_to_string(&rc).unwrap();
        assert!(content.contains("alias x=y\n"));
    }
}
