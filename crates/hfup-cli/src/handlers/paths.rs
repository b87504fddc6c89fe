//! Paths command handler.
//!
//! Prints every location the installer would touch, with the source of each
//! resolution, so users can see the effect of `HF_HOME` / `HF_CLI_BIN_DIR`
//! before installing.

use anyhow::Result;
use hfup_core::paths::{
    PathSource, ShellKind, marker_path, resolve_bin_dir, resolve_install_dir, venv_dir,
};

/// Execute the paths command.
pub fn execute() -> Result<()> {
    let install = resolve_install_dir()?;
    let bin = resolve_bin_dir()?;
    let shell = ShellKind::detect();

    println!("Resolved hfup paths:");
    println!();
    println!(
        "  Install dir: {} {}",
        install.path.display(),
        describe(install.source)
    );
    println!("  Venv:        {}", venv_dir()?.display());
    println!("  Marker:      {}", marker_path()?.display());
    println!("  Bin dir:     {} {}", bin.path.display(), describe(bin.source));
    println!("  Shell rc:    {} ({:?})", shell.rc_file()?.display(), shell);

    Ok(())
}

fn describe(source: PathSource) -> String {
    match source {
        PathSource::Default => "(default)".to_string(),
        PathSource::EnvOverride(var) => format!("(from ${var})"),
    }
}
