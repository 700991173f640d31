//! Merge engine and directory assembler
//!
//! Builds the published directory from two sources: registry-derived seed
//! entries and strictly pre-validated configured overrides. Entries live in
//! a `BTreeMap` keyed by [`CompositeKey`], which gives key uniqueness and
//! the deterministic output order in one structure.
//!
//! Defaults are applied twice on the override path (once on seeds, again
//! after merging) on purpose: merging can land an override on a fresh key
//! whose base has none of the consumer-required fields.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::config::DirectoryConfig;
use crate::currency::defaults::apply_required_defaults;
use crate::currency::entry::{CompositeKey, CurrencyDirectory, CurrencyEntry};
use crate::currency::error::DirectoryError;
use crate::currency::overrides::load_overrides;
use crate::currency::validation::{ValidationMode, validate_entry};

use crate::registry::RegistryRecord;

/// Build the directory from registry seeds plus already-loaded overrides
///
/// Registry seeds are trusted producers and validated leniently; overrides
/// must come from [`load_overrides`] (strictly validated). Pure and
/// deterministic: the same inputs always yield the same directory, and no
/// partial directory is returned on failure.
pub fn build_directory(
    registry_entries: &[RegistryRecord],
    override_entries: &[CurrencyEntry],
) -> Result<CurrencyDirectory, DirectoryError> {
    let mut by_key: BTreeMap<CompositeKey, CurrencyEntry> = BTreeMap::new();

    // Registry seeds: default, validate leniently, insert. A duplicate
    // composite key keeps the later record.
    for record in registry_entries {
        let mut entry = CurrencyEntry::from_registry(record);
        apply_required_defaults(&mut entry)?;
        validate_entry(&entry, ValidationMode::Lenient)?;
        by_key.insert(entry.composite_key(), entry);
    }
    debug!(seeded = by_key.len(), "registry seeds inserted");

    // Overrides: shallow-merge onto the same-keyed base (override wins per
    // field) or insert fresh, then re-default and re-validate. Later array
    // elements override earlier ones for the same key.
    for override_entry in override_entries {
        let key = override_entry.composite_key();
        let mut merged = match by_key.get(&key) {
            Some(base) => base.clone(),
            None => CurrencyEntry::new(),
        };
        merged.merge_from(override_entry);
        apply_required_defaults(&mut merged)?;
        validate_entry(&merged, ValidationMode::Lenient)?;
        by_key.insert(key, merged);
    }
    debug!(total = by_key.len(), "overrides merged");

    Ok(assemble(by_key))
}

/// Load overrides from the configuration payload, then build
pub fn build_from_config(
    registry_entries: &[RegistryRecord],
    config: &DirectoryConfig,
) -> Result<CurrencyDirectory, DirectoryError> {
    let overrides = load_overrides(config.overrides_json.as_deref())?;
    build_directory(registry_entries, &overrides)
}

/// Produce the final ordered directory from the keyed map
///
/// The map already guarantees key uniqueness and iteration order; the
/// seen-set dedupe is defensive. Never fails: input entries were validated
/// by the upstream stages.
pub fn assemble(entries_by_key: BTreeMap<CompositeKey, CurrencyEntry>) -> CurrencyDirectory {
    let mut seen: FxHashSet<CompositeKey> = FxHashSet::default();
    let mut entries = Vec::with_capacity(entries_by_key.len());
    for (key, entry) in entries_by_key {
        if seen.insert(key) {
            entries.push(entry);
        }
    }
    CurrencyDirectory::from_entries(entries)
}

// ============================================================================
// Tests
// ============================================================================
