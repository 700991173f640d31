//! SEP-1 currency directory builder
//!
//! The validation, merge, defaulting and deduplication engine behind the
//! `[[CURRENCIES]]` list a financial gateway publishes for discovery by
//! counterparties. Descriptors seeded from the internal asset registry are
//! combined with externally configured overrides, every descriptor is
//! schema-validated, conflicts are resolved deterministically (override
//! wins per field), and the output list is defaulted, deduplicated and
//! totally ordered.
//!
//! Pure computation: no network, no persistence, no clocks. Callers may run
//! builds concurrently; each invocation is independent and idempotent.
//!
//! # Modules
//!
//! - [`currency`] - the directory core (model, validation, defaults, merge)
//! - [`registry`] - the read-only registry record boundary
//! - [`config`] - explicit overrides configuration
//! - [`strkey`] - Stellar strkey validity checks
//!
//! # Example
//!
//! ```
//! use sep1_directory::{DirectoryConfig, RegistryRecord, build_from_config};
//!
//! let seeds = [RegistryRecord::new(
//!     "USDC",
//!     Some("GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ"),
//!     2,
//! )];
//! let directory = build_from_config(&seeds, &DirectoryConfig::default()).unwrap();
//! assert_eq!(directory.len(), 1);
//! assert_eq!(directory.entries()[0].get_str("status"), Some("live"));
//! ```

pub mod config;
pub mod currency;
pub mod registry;
pub mod strkey;

// Convenient re-exports at crate root
pub use config::{DirectoryConfig, OVERRIDES_ENV_VAR};
pub use currency::{
    CompositeKey, CurrencyDirectory, CurrencyEntry, DirectoryError, ValidationError,
    ValidationMode, apply_required_defaults, assemble, build_directory, build_from_config,
    load_overrides, validate_entry,
};
pub use registry::RegistryRecord;
