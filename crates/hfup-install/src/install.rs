//! The install command orchestration.
//!
//! Runs the provisioning sequence top to bottom. There is no retry or
//! rollback: the first failing step aborts the run, and anything already
//! created on disk is left in place for the next attempt.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use hfup_core::config::EnvConfig;
use hfup_core::paths::{
    ShellKind, bin_dir, ensure_dir, install_dir, installed_binary_path, marker_path,
    venv_binary_path, venv_dir, venv_python_path, verify_writable,
};
use indicatif::{ProgressBar, ProgressStyle};

use crate::python::find_python;
use crate::shell::{bin_dir_on_path, ensure_path_line, plan_path_update};
use crate::venv::{EnvMarker, create_venv, install_packages, marker_is_fresh, requirements, upgrade_pip};
use crate::verify::report_version;
use crate::{link::expose_binary, python::MIN_PYTHON};

/// Name of the entry point the installed package provides.
pub const BINARY_NAME: &str = "hf";

/// Flags and environment configuration for one install run.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Remove and recreate the venv even if it exists.
    pub force: bool,
    /// Persist the bin directory on PATH via the shell rc file.
    pub modify_path: bool,
    /// Also install the `transformers` package.
    pub with_transformers: bool,
    /// Show pip/uv output instead of a spinner.
    pub verbose: bool,
    /// Environment-derived knobs (`HF_CLI_PIP_ARGS`, `HF_CLI_VERBOSE_PIP`).
    pub env: EnvConfig,
}

/// What a successful install produced.
#[derive(Debug)]
pub struct InstallReport {
    /// The exposed binary in the user bin directory.
    pub binary: PathBuf,
    /// Version reported by `hf version`.
    pub version: String,
    /// The rc file that received a PATH line, if any.
    pub rc_updated: Option<PathBuf>,
}

/// Run the full installation sequence.
pub async fn run_install(opts: &InstallOptions) -> Result<InstallReport> {
    let install_dir = install_dir()?;
    let venv = venv_dir()?;
    let marker = marker_path()?;
    let bin = bin_dir()?;

    ensure_dir(&install_dir)?;
    verify_writable(&install_dir)?;
    ensure_dir(&bin)?;
    verify_writable(&bin)?;

    let reqs = requirements(opts.with_transformers);
    let quiet = !(opts.verbose || opts.env.verbose_pip);

    // Step 1: force removes the old environment outright
    if opts.force && venv.exists() {
        println!("Removing existing environment (--force)...");
        fs::remove_dir_all(&venv).context("Failed to remove existing venv")?;
        let _ = fs::remove_file(&marker);
    }

    // Step 2: create the venv if it is not already there
    let venv_ready = venv_python_path(&venv).exists();
    if venv_ready {
        println!("✓ Reusing virtual environment at {}", venv.display());
    } else {
        let python = find_python()
            .await
            .context(format!("A Python {}.{}+ interpreter is required", MIN_PYTHON.0, MIN_PYTHON.1))?;
        println!("✓ Found Python {} at {}", python.version, python.path.display());

        println!("Creating virtual environment at {}...", venv.display());
        create_venv(&python.path, &venv).await?;
    }

    // Step 3: install packages unless the marker says nothing changed.
    // A fresh-looking marker only counts when the venv predates this run.
    if venv_ready && !opts.force && marker_is_fresh(&marker, &reqs) {
        println!("✓ Packages already up to date");
    } else {
        let spinner = quiet.then(|| step_spinner(&format!("Installing {}...", reqs.join(", "))));

        upgrade_pip(&venv, quiet).await?;
        install_packages(&venv, &reqs, &opts.env.pip_args, quiet).await?;
        EnvMarker::current(&reqs).store(&marker)?;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        println!("✓ Installed {}", reqs.join(", "));
    }

    // Step 4: expose the binary
    let src = venv_binary_path(&venv, BINARY_NAME);
    let dest = installed_binary_path(&bin, BINARY_NAME);
    expose_binary(&src, &dest)?;
    println!("✓ {} available at {}", BINARY_NAME, dest.display());

    // Step 5: PATH persistence
    let mut rc_updated = None;
    if opts.modify_path {
        if bin_dir_on_path(&bin) {
            println!("✓ {} is already on PATH", bin.display());
        } else {
            let update = plan_path_update(ShellKind::detect(), &bin)?;
            if ensure_path_line(&update.rc_file, &update.line)? {
                println!("✓ Added {} to PATH in {}", bin.display(), update.rc_file.display());
                println!("  Restart your shell (or source the file) to pick it up.");
                rc_updated = Some(update.rc_file);
            } else {
                println!("✓ PATH entry already present in {}", update.rc_file.display());
            }
        }
    }

    // Step 6: verify
    let version = report_version(&dest).await?;

    println!();
    println!("✓ hf CLI installed successfully!");
    println!("  Binary:  {}", dest.display());
    println!("  Version: {version}");
    println!("  Env:     {}", venv.display());
    println!();
    println!("To uninstall later, run: hfup uninstall");

    Ok(InstallReport {
        binary: dest,
        version,
        rc_updated,
    })
}

fn step_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(120));
    pb
}
