//! Shell detection and rc file targeting for PATH persistence.
//!
//! Pure data only: which shell the user runs, which rc file it reads, and
//! what line puts a directory on PATH. The actual file editing lives in the
//! installer engine.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// The shell families the installer knows how to persist PATH entries for.
///
/// Anything unrecognized is treated as bash, which matches what the
/// historical shell installer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Bash,
    Zsh,
    Fish,
}

impl ShellKind {
    /// Detect the user's login shell from `$SHELL`.
    pub fn detect() -> Self {
        match env::var("SHELL") {
            Ok(shell) => Self::from_shell_path(&shell),
            Err(_) => Self::Bash,
        }
    }

    /// Classify a `$SHELL`-style path by its basename.
    pub fn from_shell_path(shell: &str) -> Self {
        let name = Path::new(shell)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        match name {
            "zsh" => Self::Zsh,
            "fish" => Self::Fish,
            _ => Self::Bash,
        }
    }

    /// The rc file this shell reads for interactive sessions.
    pub fn rc_file(self) -> Result<PathBuf, PathError> {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        Ok(match self {
            Self::Bash => home.join(".bashrc"),
            Self::Zsh => home.join(".zshrc"),
            Self::Fish => home.join(".config").join("fish").join("config.fish"),
        })
    }

    /// The line that puts `bin` on PATH in this shell's dialect.
    pub fn path_line(self, bin: &Path) -> String {
        match self {
            Self::Bash | Self::Zsh => {
                format!("export PATH=\"{}:$PATH\"", bin.display())
            }
            Self::Fish => format!("fish_add_path {}", bin.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_shells() {
        assert_eq!(ShellKind::from_shell_path("/bin/zsh"), ShellKind::Zsh);
        assert_eq!(
            ShellKind::from_shell_path("/usr/local/bin/fish"),
            ShellKind::Fish
        );
        assert_eq!(ShellKind::from_shell_path("/bin/bash"), ShellKind::Bash);
        // Unknown shells fall back to bash
        assert_eq!(ShellKind::from_shell_path("/bin/tcsh"), ShellKind::Bash);
        assert_eq!(ShellKind::from_shell_path(""), ShellKind::Bash);
    }

    #[test]
    fn path_lines_match_dialect() {
        let bin = Path::new("/home/u/.local/bin");
        assert_eq!(
            ShellKind::Zsh.path_line(bin),
            "export PATH=\"/home/u/.local/bin:$PATH\""
        );
        assert_eq!(
            ShellKind::Fish.path_line(bin),
            "fish_add_path /home/u/.local/bin"
        );
    }

    #[test]
    fn rc_files_live_under_home() {
        let rc = ShellKind::Fish.rc_file().unwrap();
        assert!(rc.ends_with(".config/fish/config.fish"));
        assert!(ShellKind::Bash.rc_file().unwrap().ends_with(".bashrc"));
    }
}
