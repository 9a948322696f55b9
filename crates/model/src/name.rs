use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";

// First character must not be a space, so "   " is rejected.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name pattern is valid"));

fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

/// Display name of an apparel entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

apparel_core::impl_validated_newtype!(Name, is_valid_name, NAME_CONSTRAINTS);

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apparel_core::DomainError;

    #[test]
    fn accepts_alphanumeric_with_spaces() {
        for valid in ["shirt", "Blue Jeans 2", "12345", "Capital Tan Chino Shorts"] {
            assert!(Name::is_valid(valid), "{valid} should be valid");
        }
    }

    #[test]
    fn rejects_blank_and_symbols() {
        for invalid in ["", " ", " leading space", "shirt*", "^"] {
            assert!(!Name::is_valid(invalid), "{invalid:?} should be invalid");
        }
    }

    #[test]
    fn new_reports_constraints() {
        assert_eq!(
            Name::new("   "),
            Err(DomainError::Validation(NAME_CONSTRAINTS.to_string()))
        );
    }

    #[test]
    fn deserialize_validates() {
        let name: Name = serde_json::from_str("\"Linen Shirt\"").unwrap();
        assert_eq!(name.as_str(), "Linen Shirt");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Linen Shirt\"");
        assert!(serde_json::from_str::<Name>("\"Linen*Shirt\"").is_err());
    }
}
