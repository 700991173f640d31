//! Required-field defaulting pass
//!
//! Anchor-verification consumers of the published directory require a fixed
//! subset of descriptor fields to be present. This pass fills them with
//! safe defaults when absent, never overwriting an explicit value, and then
//! asserts the invariant actually holds.

use crate::currency::entry::CurrencyEntry;
use crate::currency::error::DirectoryError;

/// Fields that must be present on every published descriptor
const REQUIRED_FIELDS: [&str; 5] = [
    "is_asset_anchored",
    "anchor_asset_type",
    "code",
    "desc",
    "status",
];

/// Fill consumer-required fields that are absent from `entry`
///
/// Defaults applied (absent fields only):
/// - `status` -> `"live"`
/// - `desc` -> `"<code> token"`
/// - `is_asset_anchored` -> `true`
/// - `anchor_asset_type` -> `"fiat"`
/// - `anchor_asset` -> the entry's own code
///
/// A missing required field afterwards means the defaulting rules
/// themselves are broken and fails with
/// [`DirectoryError::DefaultingInvariant`].
pub fn apply_required_defaults(entry: &mut CurrencyEntry) -> Result<(), DirectoryError> {
    let code = entry.code().unwrap_or("TOKEN").to_string();

    entry.set_default("status", "live");
    entry.set_default("desc", format!("{code} token"));
    entry.set_default("is_asset_anchored", true);
    entry.set_default("anchor_asset_type", "fiat");
    entry.set_default("anchor_asset", code);

    for field in REQUIRED_FIELDS {
        if !entry.contains(field) {
            return Err(DirectoryError::DefaultingInvariant { field });
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
