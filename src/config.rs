//! Directory build configuration
//!
//! Overrides reach the builder as an explicit configuration value rather
//! than an ambient environment lookup, so builds are deterministic and
//! testable without mutating process state. `from_env` is the one place
//! that touches the environment, once per build invocation.

use serde::{Deserialize, Serialize};

/// Conventional environment variable carrying the overrides payload
pub const OVERRIDES_ENV_VAR: &str = "SEP1_CURRENCIES";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Raw JSON array of currency override objects; `None` means no
    /// overrides configured (a valid state, not an error)
    #[serde(default)]
    pub overrides_json: Option<String>,
}

impl DirectoryConfig {
    pub fn new(overrides_json: Option<String>) -> Self {
        Self { overrides_json }
    }

    /// Read the overrides payload from `var`; unset or empty means none
    pub fn from_env(var: &str) -> Self {
        let overrides_json = std::env::var(var)
            .ok()
            .filter(|raw| !raw.trim().is_empty());
        Self { overrides_json }
    }
}
