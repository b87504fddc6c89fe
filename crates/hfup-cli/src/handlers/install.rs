//! Install command handler.

use anyhow::Result;
use hfup_core::config::EnvConfig;
use hfup_install::{InstallOptions, run_install};

/// Execute the install command.
pub async fn execute(
    force: bool,
    no_modify_path: bool,
    with_transformers: bool,
    verbose: bool,
) -> Result<()> {
    let opts = InstallOptions {
        force,
        modify_path: !no_modify_path,
        with_transformers,
        verbose,
        env: EnvConfig::from_env(),
    };

    run_install(&opts).await?;
    Ok(())
}
