//! Front-matter property read model and key hygiene.
//!
//! # Responsibility
//! - Define the (key, value) pair returned by metadata enumeration.
//! - Validate keys before they are written into a document.
//!
//! # Invariants
//! - Keys are unique per document as far as tracking is concerned; duplicate
//!   raw lines may exist but only the first one is authoritative.
//! - A valid key survives the scan/write round trip unchanged.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One key/value metadata entry of a document's front matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property key as written before the colon, trimmed.
    pub key: String,
    /// Raw value text after the first colon, trimmed. Empty for bare keys.
    pub value: String,
}

impl Property {
    /// Creates a property pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Validates a property key before a create/update write.
///
/// A key must round-trip through the line format `key: value`: no surrounding
/// whitespace, no colon, no line breaks, and no leading `#` (which the
/// scanner treats as a comment line).
pub fn validate_property_key(key: &str) -> Result<(), PropertyKeyError> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(PropertyKeyError::EmptyKey);
    }
    if trimmed != key
        || key.contains(':')
        || key.contains('\n')
        || key.contains('\r')
        || key.starts_with('#')
    {
        return Err(PropertyKeyError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Property key validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKeyError {
    EmptyKey,
    InvalidKey(String),
}

impl Display for PropertyKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "property key must not be empty"),
            Self::InvalidKey(value) => write!(
                f,
                "property key is invalid: `{value}` (no surrounding whitespace, `:`, line breaks or leading `#`)"
            ),
        }
    }
}

impl Error for PropertyKeyError {}

#[cfg(test)]
mod tests {
    use super::{validate_property_key, Property, PropertyKeyError};

    #[test]
    fn accepts_plain_and_dashed_keys() {
        validate_property_key("status").expect("plain key");
        validate_property_key("waiting-since").expect("dashed key");
        validate_property_key("review round").expect("key with inner space");
    }

    #[test]
    fn rejects_empty_key() {
        let err = validate_property_key("   ").expect_err("blank key must fail");
        assert_eq!(err, PropertyKeyError::EmptyKey);
    }

    #[test]
    fn rejects_keys_that_break_the_line_format() {
        for key in ["status:", " status", "status ", "a\nb", "#hidden"] {
            let err = validate_property_key(key).expect_err("malformed key must fail");
            assert_eq!(err, PropertyKeyError::InvalidKey(key.to_string()));
        }
    }

    #[test]
    fn property_serializes_with_stable_field_names() {
        let property = Property::new("status", "waiting");
        let json = serde_json::to_value(&property).expect("property serializes");
        assert_eq!(json["key"], "status");
        assert_eq!(json["value"], "waiting");
    }
}
