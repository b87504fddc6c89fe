//! CLI adapter for hfup.
//!
//! Thin layer over `hfup-install` and `hfup-core`: argument parsing,
//! dispatch, and user-facing formatting. All actual work happens in the
//! engine crates.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;
use tokio as _;
use tracing as _;
use tracing_subscriber as _;

#[cfg(test)]
use tempfile as _;

pub mod commands;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use parser::Cli;
