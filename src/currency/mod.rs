//! Currency directory core
//!
//! The validation, merge, defaulting and deduplication engine behind the
//! published `[[CURRENCIES]]` list:
//! - [`entry`] - descriptor model, composite key, directory
//! - [`validation`] - field and whole-descriptor schema validation
//! - [`defaults`] - consumer-required field defaulting
//! - [`overrides`] - configured-overrides loader (strict)
//! - [`builder`] - merge engine and directory assembler

pub mod builder;
pub mod defaults;
pub mod entry;
pub mod error;
pub mod overrides;
pub mod validation;

// Re-export commonly used items
pub use builder::{assemble, build_directory, build_from_config};
pub use defaults::apply_required_defaults;
pub use entry::{CompositeKey, CurrencyDirectory, CurrencyEntry};
pub use error::DirectoryError;
pub use overrides::load_overrides;
pub use validation::{ValidationError, ValidationMode, validate_entry};
