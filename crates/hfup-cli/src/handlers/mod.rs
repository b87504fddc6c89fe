//! Command handlers.
//!
//! One module per subcommand; each delegates to the engine crates and owns
//! only the user-facing formatting.

pub mod install;
pub mod paths;
pub mod snippet;
pub mod status;
pub mod tasks;
pub mod uninstall;
