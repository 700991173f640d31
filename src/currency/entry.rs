//! Currency descriptor model
//!
//! A descriptor is a bag of named fields (strings, booleans, integers,
//! lists of strings) rather than a fixed struct: the SEP-1 schema is wide,
//! almost everything is optional, and the merge path needs to distinguish
//! "field absent" from "field set to a default value". The map is backed by
//! a JSON object; `null` values are treated as absent everywhere.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::registry::RegistryRecord;

// ============================================================================
// CurrencyEntry
// ============================================================================

/// One published currency/asset descriptor
///
/// Constructed from a registry seed or a configured override, mutated only
/// by the defaulting pass and the merge engine, and discarded after the
/// directory is assembled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyEntry(Map<String, Value>);

impl CurrencyEntry {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap a parsed JSON object as an (unvalidated) entry
    pub fn from_object(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Seed an entry from a registry asset record
    pub fn from_registry(record: &RegistryRecord) -> Self {
        let mut entry = Self::new();
        entry.set("code", record.code.as_str());
        if let Some(issuer) = &record.issuer {
            entry.set("issuer", issuer.as_str());
        }
        entry.set("display_decimals", record.significant_decimals);
        entry
    }

    /// Get a field value; `null` counts as absent
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self.0.get(field) {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        }
    }

    /// Get a field as a string, if present and a string
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Whether the field is present with a non-null value
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.0.insert(field.to_string(), value.into());
    }

    /// Set a field only when it is absent (or explicitly null)
    pub fn set_default(&mut self, field: &str, value: impl Into<Value>) {
        if !self.contains(field) {
            self.set(field, value);
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.get_str("code")
    }

    pub fn issuer(&self) -> Option<&str> {
        self.get_str("issuer")
    }

    pub fn contract(&self) -> Option<&str> {
        self.get_str("contract")
    }

    /// All field names, including null-valued ones (strict validation must
    /// still see a typo'd field that was set to null)
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The (code, issuer, contract) identity of this entry
    pub fn composite_key(&self) -> CompositeKey {
        CompositeKey::new(
            self.code().unwrap_or_default(),
            self.issuer(),
            self.contract(),
        )
    }

    /// Shallow merge: every field present in `other` (null included)
    /// replaces the same-named field here; fields `other` omits are kept.
    pub fn merge_from(&mut self, other: &CurrencyEntry) {
        for (field, value) in &other.0 {
            self.0.insert(field.clone(), value.clone());
        }
    }

    pub fn as_object(&self) -> &Map<String, Value> {
        &self.0
    }
}

// ============================================================================
// CompositeKey
// ============================================================================

/// Unique identity of a descriptor: (code, issuer, contract)
///
/// The derived order sorts by code, then issuer, then contract, with an
/// absent issuer/contract before any present one. Present values are never
/// empty strings (validation enforces non-empty), so this coincides with
/// ordering by `(code, issuer-or-empty, contract-or-empty)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompositeKey {
    code: String,
    issuer: Option<String>,
    contract: Option<String>,
}

impl CompositeKey {
    pub fn new(code: &str, issuer: Option<&str>, contract: Option<&str>) -> Self {
        Self {
            code: code.to_string(),
            issuer: issuer.map(str::to_string),
            contract: contract.map(str::to_string),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    pub fn contract(&self) -> Option<&str> {
        self.contract.as_deref()
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.issuer, &self.contract) {
            (Some(issuer), _) => write!(f, "{}:{}", self.code, issuer),
            (None, Some(contract)) => write!(f, "{}:{}", self.code, contract),
            (None, None) => write!(f, "{}", self.code),
        }
    }
}

// ============================================================================
// CurrencyDirectory
// ============================================================================

/// The final ordered list of validated, defaulted descriptors
///
/// Invariant: no two entries share a [`CompositeKey`]; entries are sorted
/// by the key's total order. Serializes as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CurrencyDirectory(Vec<CurrencyEntry>);

impl CurrencyDirectory {
    pub(crate) fn from_entries(entries: Vec<CurrencyEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[CurrencyEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurrencyEntry> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a CurrencyDirectory {
    type Item = &'a CurrencyEntry;
    type IntoIter = std::slice::Iter<'a, CurrencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for CurrencyDirectory {
    type Item = CurrencyEntry;
    type IntoIter = std::vec::IntoIter<CurrencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
