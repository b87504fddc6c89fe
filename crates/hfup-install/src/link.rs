//! Expose the venv entry point in the user bin directory.
//!
//! Unix gets a symlink into the venv (so pip upgrades take effect without
//! relinking); Windows gets a copy, since symlinks there commonly require
//! elevation. An existing link or copy at the destination is replaced.

use std::fs;
use std::path::Path;

use crate::error::{InstallError, InstallResult};

/// Link (unix) or copy (windows) `src` to `dest`, replacing what is there.
pub fn expose_binary(src: &Path, dest: &Path) -> InstallResult<()> {
    if !src.exists() {
        return Err(InstallError::BinaryMissing(src.to_path_buf()));
    }

    // Remove whatever currently occupies the destination. symlink_metadata
    // (not exists) catches dangling symlinks too.
    if fs::symlink_metadata(dest).is_ok() {
        fs::remove_file(dest).map_err(|e| link_failed(src, dest, &e))?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(src)
            .map_err(|e| link_failed(src, dest, &e))?
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(src, perms).map_err(|e| link_failed(src, dest, &e))?;

        std::os::unix::fs::symlink(src, dest).map_err(|e| link_failed(src, dest, &e))?;
    }

    #[cfg(windows)]
    {
        fs::copy(src, dest).map_err(|e| link_failed(src, dest, &e))?;
    }

    Ok(())
}

fn link_failed(src: &Path, dest: &Path, err: &std::io::Error) -> InstallError {
    InstallError::LinkFailed {
        src: src.to_path_buf(),
        dest: dest.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn links_and_replaces_existing() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("venv-hf");
        let dest = temp.path().join("hf");
        fs::write(&src, b"#!/bin/sh\n").unwrap();

        expose_binary(&src, &dest).unwrap();
        assert!(fs::symlink_metadata(&dest).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(&dest).unwrap(), src);

        // Re-running replaces the link in place
        expose_binary(&src, &dest).unwrap();
        assert_eq!(fs::read_link(&dest).unwrap(), src);
    }

    #[test]
    fn replaces_dangling_symlink() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("venv-hf");
        let dest = temp.path().join("hf");
        fs::write(&src, b"x").unwrap();

        std::os::unix::fs::symlink(temp.path().join("gone"), &dest).unwrap();
        expose_binary(&src, &dest).unwrap();
        assert_eq!(fs::read_link(&dest).unwrap(), src);
    }

    #[test]
    fn missing_source_is_reported() {
        let temp = tempdir().unwrap();
        let err = expose_binary(&temp.path().join("absent"), &temp.path().join("hf")).unwrap_err();
        assert!(matches!(err, InstallError::BinaryMissing(_)));
    }

    #[test]
    fn source_is_made_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let src = temp.path().join("venv-hf");
        let dest = temp.path().join("hf");
        fs::write(&src, b"x").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o644)).unwrap();

        expose_binary(&src, &dest).unwrap();
        let mode = fs::metadata(&src).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
