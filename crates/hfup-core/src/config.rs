//! Environment-driven installer configuration.
//!
//! The installer takes most of its behavior from CLI flags; the few knobs
//! that historically lived in environment variables are read here, once,
//! into a typed struct.

use std::env;

/// Extra arguments appended to every `pip install` invocation.
pub const PIP_ARGS_VAR: &str = "HF_CLI_PIP_ARGS";

/// Older spelling of [`PIP_ARGS_VAR`], still honored when the new one is unset.
pub const PIP_ARGS_VAR_FALLBACK: &str = "HF_PIP_ARGS";

/// When set to a truthy value, pip output is shown instead of suppressed.
pub const VERBOSE_PIP_VAR: &str = "HF_CLI_VERBOSE_PIP";

/// Configuration sourced from the environment at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// Extra pip arguments, whitespace-split from `HF_CLI_PIP_ARGS`
    /// (or `HF_PIP_ARGS`).
    pub pip_args: Vec<String>,
    /// Show pip/uv output instead of running quietly.
    pub verbose_pip: bool,
}

impl EnvConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        let raw_args = env::var(PIP_ARGS_VAR)
            .or_else(|_| env::var(PIP_ARGS_VAR_FALLBACK))
            .unwrap_or_default();

        Self {
            pip_args: split_args(&raw_args),
            verbose_pip: env::var(VERBOSE_PIP_VAR).is_ok_and(|v| is_truthy(&v)),
        }
    }
}

/// Whitespace-split an argument string, dropping empty segments.
fn split_args(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
