//! Status command handler.

use anyhow::Result;
use hfup_install::gather_status;

/// Execute the status command.
pub async fn execute() -> Result<()> {
    let status = gather_status().await?;

    println!("Install directory: {}", status.install_dir.display());
    println!(
        "Environment:       {}",
        if status.venv_present { "present" } else { "missing" }
    );
    println!(
        "Binary:            {} ({})",
        status.binary.display(),
        if status.binary_present { "present" } else { "missing" }
    );

    match status.version.as_deref() {
        Some(version) => println!("Version:           {version}"),
        None if status.binary_present => println!("Version:           (binary did not report one)"),
        None => {}
    }

    println!();
    if status.installed() {
        println!("✓ hf CLI is installed");
    } else {
        println!("hf CLI is not installed. Run 'hfup install' to set it up.");
    }

    Ok(())
}
