//! Uninstall handler.
//!
//! Removes the install directory and the exposed binary. The PATH line in
//! the shell rc file is deliberately left alone; editing user rc files on
//! the way out is riskier than printing what to remove.

use std::fs;
use std::io::{self, Write};

use anyhow::Result;
use hfup_core::paths::{
    ShellKind, bin_dir, install_dir, installed_binary_path,
};

use crate::install::BINARY_NAME;

/// Handle the uninstall command.
///
/// If `force` is false, prompts the user for confirmation.
pub fn run_uninstall(force: bool) -> Result<()> {
    let install_dir = install_dir()?;
    let bin = bin_dir()?;
    let binary = installed_binary_path(&bin, BINARY_NAME);

    let binary_present = fs::symlink_metadata(&binary).is_ok();

    if !install_dir.exists() && !binary_present {
        println!("The hf CLI is not installed.");
        return Ok(());
    }

    if !force {
        print!("This will remove the hf CLI and its environment. Continue? [y/N]: ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Uninstall cancelled.");
            return Ok(());
        }
    }

    if install_dir.exists() {
        fs::remove_dir_all(&install_dir)?;
        println!("✓ Removed {}", install_dir.display());
    }

    if binary_present {
        fs::remove_file(&binary)?;
        println!("✓ Removed {}", binary.display());
    }

    let line = ShellKind::detect().path_line(&bin);
    println!();
    println!("If your shell rc file carries this line and nothing else uses");
    println!("{}, you can remove it:", bin.display());
    println!("  {line}");

    Ok(())
}
