//! Uninstall command handler.

use anyhow::Result;
use hfup_install::run_uninstall;

/// Execute the uninstall command.
pub fn execute(force: bool) -> Result<()> {
    run_uninstall(force)
}
