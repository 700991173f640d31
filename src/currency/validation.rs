//! Descriptor schema validation
//!
//! Field validators are pure checks over one field; `validate_entry`
//! composes them with the cross-field rules (mandatory code, exactly one
//! of issuer/contract, enum membership, unknown-field rejection in strict
//! mode). Validation never mutates: defaulting is a separate explicit pass.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use serde_json::Value;

use crate::currency::entry::CurrencyEntry;
use crate::strkey;

// ============================================================================
// Validation Errors
// ============================================================================

/// A single descriptor violated a field or cross-field rule
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("currency entry must be an object")]
    NotAnObject,

    #[error("'{field}' must be a non-empty string")]
    NotANonEmptyString { field: &'static str },

    #[error("'{field}' must be <= {max} characters")]
    StringTooLong { field: &'static str, max: usize },

    #[error("'{field}' must be a boolean")]
    NotABoolean { field: &'static str },

    #[error("'{field}' must be an integer")]
    NotAnInteger { field: &'static str },

    #[error("'{field}' must be >= {min}")]
    IntegerBelowMinimum { field: &'static str, min: i64 },

    #[error("'{field}' must be <= {max}")]
    IntegerAboveMaximum { field: &'static str, max: i64 },

    #[error("'{field}' must be a list of non-empty strings")]
    NotAStringList { field: &'static str },

    #[error("'{field}' must be one of: {allowed}")]
    NotInEnum {
        field: &'static str,
        allowed: &'static str,
    },

    #[error("unknown field(s): {fields}")]
    UnknownFields { fields: String },

    #[error("only one of 'issuer' or 'contract' can be set")]
    IssuerContractConflict,

    #[error("one of 'issuer' (Stellar asset) or 'contract' (SEP-41 token) must be set")]
    IssuerContractMissing,

    #[error("'issuer' must be a valid Stellar public key (G...)")]
    InvalidIssuer,

    #[error("'contract' must be a valid Stellar contract ID (C...)")]
    InvalidContract,
}

// ============================================================================
// Validation Mode
// ============================================================================

/// Strict mode rejects any field name outside the known schema; lenient
/// mode checks known-field constraints only. Externally configured
/// overrides are validated strictly to catch silent typos; registry seeds
/// leniently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Strict,
    Lenient,
}

impl ValidationMode {
    pub fn is_strict(self) -> bool {
        matches!(self, ValidationMode::Strict)
    }
}

// ============================================================================
// Known schema
// ============================================================================

const ALLOWED_STATUSES: [&str; 4] = ["live", "dead", "test", "private"];

const ALLOWED_ANCHOR_ASSET_TYPES: [&str; 8] = [
    "fiat",
    "crypto",
    "nft",
    "stock",
    "bond",
    "commodity",
    "realestate",
    "other",
];

static KNOWN_CURRENCY_FIELDS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "code",
        "issuer",
        "contract",
        "code_template",
        "status",
        "display_decimals",
        "name",
        "desc",
        "conditions",
        "image",
        "fixed_number",
        "max_number",
        "is_unlimited",
        "is_asset_anchored",
        "anchor_asset_type",
        "anchor_asset",
        "attestation_of_reserve",
        "redemption_instructions",
        "collateral_addresses",
        "collateral_address_messages",
        "collateral_address_signatures",
        "regulated",
        "approval_server",
        "approval_criteria",
    ]
    .into_iter()
    .collect()
});

// ============================================================================
// Field Validators
// ============================================================================

/// Require a present, non-empty string field, optionally length-capped
fn require_string(
    entry: &CurrencyEntry,
    field: &'static str,
    max_length: Option<usize>,
) -> Result<(), ValidationError> {
    let Some(value) = entry.get_str(field) else {
        return Err(ValidationError::NotANonEmptyString { field });
    };
    if value.is_empty() {
        return Err(ValidationError::NotANonEmptyString { field });
    }
    if let Some(max) = max_length
        && value.chars().count() > max
    {
        return Err(ValidationError::StringTooLong { field, max });
    }
    Ok(())
}

/// Optional string: absent/null accepted, otherwise same as `require_string`
fn optional_string(
    entry: &CurrencyEntry,
    field: &'static str,
    max_length: Option<usize>,
) -> Result<(), ValidationError> {
    if !entry.contains(field) {
        return Ok(());
    }
    require_string(entry, field, max_length)
}

fn optional_bool(entry: &CurrencyEntry, field: &'static str) -> Result<(), ValidationError> {
    match entry.get(field) {
        None | Some(Value::Bool(_)) => Ok(()),
        Some(_) => Err(ValidationError::NotABoolean { field }),
    }
}

fn optional_int(
    entry: &CurrencyEntry,
    field: &'static str,
    min_value: Option<i64>,
    max_value: Option<i64>,
) -> Result<(), ValidationError> {
    let Some(value) = entry.get(field) else {
        return Ok(());
    };
    let Some(value) = value.as_i64() else {
        return Err(ValidationError::NotAnInteger { field });
    };
    if let Some(min) = min_value
        && value < min
    {
        return Err(ValidationError::IntegerBelowMinimum { field, min });
    }
    if let Some(max) = max_value
        && value > max
    {
        return Err(ValidationError::IntegerAboveMaximum { field, max });
    }
    Ok(())
}

fn optional_string_list(
    entry: &CurrencyEntry,
    field: &'static str,
) -> Result<(), ValidationError> {
    let Some(value) = entry.get(field) else {
        return Ok(());
    };
    let Some(items) = value.as_array() else {
        return Err(ValidationError::NotAStringList { field });
    };
    for item in items {
        match item.as_str() {
            Some(s) if !s.is_empty() => {}
            _ => return Err(ValidationError::NotAStringList { field }),
        }
    }
    Ok(())
}

fn optional_enum(
    entry: &CurrencyEntry,
    field: &'static str,
    members: &[&str],
    allowed: &'static str,
) -> Result<(), ValidationError> {
    if !entry.contains(field) {
        return Ok(());
    }
    require_string(entry, field, None)?;
    let value = entry.get_str(field).unwrap_or_default();
    if !members.contains(&value) {
        return Err(ValidationError::NotInEnum { field, allowed });
    }
    Ok(())
}

// ============================================================================
// Schema Validator
// ============================================================================

/// Validate a whole descriptor against the SEP-1 `[[CURRENCIES]]` schema
///
/// Required: `code` (non-empty, <= 12 chars) and exactly one of `issuer`
/// (valid `G...` strkey) or `contract` (valid `C...` strkey). Every other
/// field is optional and checked only when present. On success the entry
/// is unchanged; the returned `Ok(())` is a validated view, not a copy.
pub fn validate_entry(
    entry: &CurrencyEntry,
    mode: ValidationMode,
) -> Result<(), ValidationError> {
    if mode.is_strict() {
        let mut unknown: Vec<&str> = entry
            .field_names()
            .filter(|field| !KNOWN_CURRENCY_FIELDS.contains(field))
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(ValidationError::UnknownFields {
                fields: unknown.join(", "),
            });
        }
    }

    require_string(entry, "code", Some(12))?;

    match (entry.contains("issuer"), entry.contains("contract")) {
        (true, true) => return Err(ValidationError::IssuerContractConflict),
        (false, false) => return Err(ValidationError::IssuerContractMissing),
        (true, false) => {
            require_string(entry, "issuer", None)?;
            let issuer = entry.issuer().unwrap_or_default();
            if !strkey::is_valid_ed25519_public_key(issuer) {
                return Err(ValidationError::InvalidIssuer);
            }
        }
        (false, true) => {
            require_string(entry, "contract", None)?;
            let contract = entry.contract().unwrap_or_default();
            if !strkey::is_valid_contract_id(contract) {
                return Err(ValidationError::InvalidContract);
            }
        }
    }

    optional_string(entry, "code_template", Some(12))?;
    optional_enum(
        entry,
        "status",
        &ALLOWED_STATUSES,
        "dead, live, private, test",
    )?;
    optional_int(entry, "display_decimals", Some(0), Some(7))?;
    optional_string(entry, "name", Some(20))?;
    optional_string(entry, "desc", None)?;
    optional_string(entry, "conditions", None)?;
    optional_string(entry, "image", None)?;
    optional_int(entry, "fixed_number", Some(0), None)?;
    optional_int(entry, "max_number", Some(0), None)?;
    optional_bool(entry, "is_unlimited")?;
    optional_bool(entry, "is_asset_anchored")?;
    optional_enum(
        entry,
        "anchor_asset_type",
        &ALLOWED_ANCHOR_ASSET_TYPES,
        "bond, commodity, crypto, fiat, nft, other, realestate, stock",
    )?;
    optional_string(entry, "anchor_asset", None)?;
    optional_string(entry, "attestation_of_reserve", None)?;
    optional_string(entry, "redemption_instructions", None)?;
    optional_string_list(entry, "collateral_addresses")?;
    optional_string_list(entry, "collateral_address_messages")?;
    optional_string_list(entry, "collateral_address_signatures")?;
    optional_bool(entry, "regulated")?;
    optional_string(entry, "approval_server", None)?;
    optional_string(entry, "approval_criteria", None)?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
