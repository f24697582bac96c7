//! Resource Keys
//!
//! A [`Key`] names a resource inside a project together with the scope that
//! contains it: nothing (global), a region, or a zone. Project-level
//! identifiers carry no key at all, which is expressed as `Option<Key>`.

use super::error::KeyError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Addressing scope of a [`Key`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    Global,
    Regional,
    Zonal,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            KeyType::Global => "global",
            KeyType::Regional => "regional",
            KeyType::Zonal => "zonal",
        };
        f.write_str(s)
    }
}

/// Name of a resource plus its enclosing region or zone, if any.
///
/// Equality is structural and case-sensitive: two keys are equal only when
/// they share a scope and every component matches exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "lowercase")]
pub enum Key {
    Global { name: String },
    Regional { name: String, region: String },
    Zonal { name: String, zone: String },
}

impl Key {
    pub fn global(name: impl Into<String>) -> Self {
        Key::Global { name: name.into() }
    }

    pub fn regional(name: impl Into<String>, region: impl Into<String>) -> Self {
        Key::Regional {
            name: name.into(),
            region: region.into(),
        }
    }

    pub fn zonal(name: impl Into<String>, zone: impl Into<String>) -> Self {
        Key::Zonal {
            name: name.into(),
            zone: zone.into(),
        }
    }

    /// Build a global key, rejecting an empty name
    pub fn try_global(name: impl Into<String>) -> Result<Self, KeyError> {
        let name = non_empty(name.into(), "name")?;
        Ok(Key::Global { name })
    }

    /// Build a regional key, rejecting empty components
    pub fn try_regional(
        name: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self, KeyError> {
        let name = non_empty(name.into(), "name")?;
        let region = non_empty(region.into(), "region")?;
        Ok(Key::Regional { name, region })
    }

    /// Build a zonal key, rejecting empty components
    pub fn try_zonal(name: impl Into<String>, zone: impl Into<String>) -> Result<Self, KeyError> {
        let name = non_empty(name.into(), "name")?;
        let zone = non_empty(zone.into(), "zone")?;
        Ok(Key::Zonal { name, zone })
    }

    pub fn key_type(&self) -> KeyType {
        match self {
            Key::Global { .. } => KeyType::Global,
            Key::Regional { .. } => KeyType::Regional,
            Key::Zonal { .. } => KeyType::Zonal,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Key::Global { name } | Key::Regional { name, .. } | Key::Zonal { name, .. } => name,
        }
    }

    pub fn region(&self) -> Option<&str> {
        match self {
            Key::Regional { region, .. } => Some(region),
            _ => None,
        }
    }

    pub fn zone(&self) -> Option<&str> {
        match self {
            Key::Zonal { zone, .. } => Some(zone),
            _ => None,
        }
    }

    /// True when every component required by the key's scope is non-empty
    pub fn is_valid(&self) -> bool {
        match self {
            Key::Global { name } => !name.is_empty(),
            Key::Regional { name, region } => !name.is_empty() && !region.is_empty(),
            Key::Zonal { name, zone } => !name.is_empty() && !zone.is_empty(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Global { name } => write!(f, "Key{{{name:?}}}"),
            Key::Regional { name, region } => write!(f, "Key{{{name:?}, region: {region:?}}}"),
            Key::Zonal { name, zone } => write!(f, "Key{{{name:?}, zone: {zone:?}}}"),
        }
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, KeyError> {
    if value.is_empty() {
        Err(KeyError::Empty(field))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_type() {
        assert_eq!(Key::global("a").key_type(), KeyType::Global);
        assert_eq!(Key::regional("a", "us-central1").key_type(), KeyType::Regional);
        assert_eq!(Key::zonal("a", "us-central1-b").key_type(), KeyType::Zonal);
    }

    #[test]
    fn test_key_accessors() {
        let key = Key::zonal("instance-1", "us-central1-c");
        assert_eq!(key.name(), "instance-1");
        assert_eq!(key.zone(), Some("us-central1-c"));
        assert_eq!(key.region(), None);

        let key = Key::regional("my-address", "us-central1");
        assert_eq!(key.region(), Some("us-central1"));
        assert_eq!(key.zone(), None);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::global("abc").to_string(), r#"Key{"abc"}"#);
        assert_eq!(
            Key::regional("abc", "us-central1").to_string(),
            r#"Key{"abc", region: "us-central1"}"#
        );
        assert_eq!(
            Key::zonal("abc", "us-central1-b").to_string(),
            r#"Key{"abc", zone: "us-central1-b"}"#
        );
    }

    #[test]
    fn test_key_validity() {
        assert!(Key::global("abc").is_valid());
        assert!(!Key::global("").is_valid());
        assert!(!Key::regional("abc", "").is_valid());
        assert!(!Key::zonal("", "us-central1-b").is_valid());
    }

    #[test]
    fn test_try_constructors_reject_empty() {
        assert_eq!(Key::try_global(""), Err(KeyError::Empty("name")));
        assert_eq!(Key::try_regional("a", ""), Err(KeyError::Empty("region")));
        assert_eq!(Key::try_zonal("a", ""), Err(KeyError::Empty("zone")));
        assert_eq!(Key::try_zonal("a", "z"), Ok(Key::zonal("a", "z")));
    }

    #[test]
    fn test_equality_is_case_sensitive_and_scoped() {
        assert_ne!(Key::global("abc"), Key::global("ABC"));
        assert_ne!(Key::regional("a", "x"), Key::zonal("a", "x"));
        assert_eq!(Key::zonal("a", "x"), Key::zonal("a", "x"));
    }

    #[test]
    fn test_key_serializes_with_scope_tag() {
        let value = serde_json::to_value(Key::zonal("i", "z")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"scope": "zonal", "name": "i", "zone": "z"})
        );
        let back: Key = serde_json::from_value(value).unwrap();
        assert_eq!(back, Key::zonal("i", "z"));
    }
}
