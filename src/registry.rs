//! Registry-reader boundary
//!
//! The internal asset registry is an external collaborator; the builder
//! consumes a read-only snapshot of its records per invocation. Registry
//! I/O and its errors are not this crate's concern.

use serde::{Deserialize, Serialize};

/// One asset record from the internal registry, used to seed a descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryRecord {
    /// Asset code, e.g. "USDC"
    pub code: String,
    /// Issuing account (`G...` strkey), if the asset has one
    pub issuer: Option<String>,
    /// Decimal places shown to end users; becomes `display_decimals`
    pub significant_decimals: u32,
}

impl RegistryRecord {
    pub fn new(code: impl Into<String>, issuer: Option<&str>, significant_decimals: u32) -> Self {
        Self {
            code: code.into(),
            issuer: issuer.map(str::to_string),
            significant_decimals,
        }
    }
}
