//! Configured-overrides loader
//!
//! Operators can extend or override the registry-derived directory with a
//! JSON array of descriptor objects carried in an environment-style string
//! (see [`crate::config::DirectoryConfig`]). The whole batch is strictly
//! validated up front: a typo'd field name or a broken entry rejects the
//! payload entirely, never a partially applied batch.

use serde_json::Value;
use tracing::debug;

use crate::currency::entry::CurrencyEntry;
use crate::currency::error::DirectoryError;
use crate::currency::validation::{ValidationError, ValidationMode, validate_entry};

/// Parse and strictly validate the configured-overrides payload
///
/// An absent or empty payload means "no overrides configured" and yields an
/// empty list. Anything else must be a JSON array of objects; each element
/// is validated with [`ValidationMode::Strict`] and failures carry the
/// element's array index.
pub fn load_overrides(raw_payload: Option<&str>) -> Result<Vec<CurrencyEntry>, DirectoryError> {
    let Some(raw) = raw_payload else {
        return Ok(Vec::new());
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let parsed: Value = serde_json::from_str(raw).map_err(|err| DirectoryError::Structural {
        reason: format!("not valid JSON: {err}"),
    })?;
    let Value::Array(items) = parsed else {
        return Err(DirectoryError::Structural {
            reason: "expected a JSON array of currency objects".to_string(),
        });
    };

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let entry = match item {
            Value::Object(fields) => CurrencyEntry::from_object(fields),
            _ => {
                return Err(DirectoryError::InvalidOverride {
                    index,
                    source: ValidationError::NotAnObject,
                });
            }
        };
        validate_entry(&entry, ValidationMode::Strict)
            .map_err(|source| DirectoryError::InvalidOverride { index, source })?;
        entries.push(entry);
    }

    debug!(count = entries.len(), "loaded configured currency overrides");
    Ok(entries)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUER: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";
    const CONTRACT: &str = "CA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUWDA";

    #[test]
    fn test_absent_payload_is_no_overrides() {
        assert_eq!(load_overrides(None).unwrap(), Vec::new());
        assert_eq!(load_overrides(Some("")).unwrap(), Vec::new());
        assert_eq!(load_overrides(Some("   ")).unwrap(), Vec::new());
    }

    #[test]
    fn test_loads_valid_batch() {
        let payload = format!(
            r#"[
                {{"code": "USDC", "issuer": "{ISSUER}", "status": "test"}},
                {{"code": "EURC", "contract": "{CONTRACT}"}}
            ]"#
        );
        let entries = load_overrides(Some(&payload)).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].code(), Some("USDC"));
        assert_eq!(entries[1].contract(), Some(CONTRACT));
    }

    #[test]
    fn test_not_json_is_structural_error() {
        let err = load_overrides(Some("not-json")).unwrap_err();
        assert!(matches!(err, DirectoryError::Structural { .. }));
    }

    #[test]
    fn test_non_array_is_structural_error() {
        let payload = format!(r#"{{"code": "USDC", "issuer": "{ISSUER}"}}"#);
        let err = load_overrides(Some(&payload)).unwrap_err();
        assert_eq!(
            err,
            DirectoryError::Structural {
                reason: "expected a JSON array of currency objects".to_string()
            }
        );
    }

    #[test]
    fn test_non_object_element_is_index_qualified() {
        let payload = format!(r#"[{{"code": "USDC", "issuer": "{ISSUER}"}}, 42]"#);
        let err = load_overrides(Some(&payload)).unwrap_err();
        assert_eq!(
            err,
            DirectoryError::InvalidOverride {
                index: 1,
                source: ValidationError::NotAnObject
            }
        );
    }

    #[test]
    fn test_invalid_entry_fails_whole_batch() {
        // second element carries both issuer and contract
        let payload = format!(
            r#"[
                {{"code": "USDC", "issuer": "{ISSUER}"}},
                {{"code": "EURC", "issuer": "{ISSUER}", "contract": "{CONTRACT}"}}
            ]"#
        );
        let err = load_overrides(Some(&payload)).unwrap_err();
        assert_eq!(
            err,
            DirectoryError::InvalidOverride {
                index: 1,
                source: ValidationError::IssuerContractConflict
            }
        );
        let message = err.to_string();
        assert!(message.contains("index 1"), "got: {message}");
        assert!(
            message.contains("only one of 'issuer' or 'contract'"),
            "got: {message}"
        );
    }

    #[test]
    fn test_unknown_field_rejected_strictly() {
        let payload = format!(r#"[{{"code": "USDC", "issuer": "{ISSUER}", "staus": "live"}}]"#);
        let err = load_overrides(Some(&payload)).unwrap_err();
        assert_eq!(
            err,
            DirectoryError::InvalidOverride {
                index: 0,
                source: ValidationError::UnknownFields {
                    fields: "staus".to_string()
                }
            }
        );
    }
}
