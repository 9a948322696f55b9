use serde::{Deserialize, Serialize};

pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";

fn is_valid_tag(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Label attached to an apparel entry.
///
/// `Ord` gives tag sets a stable iteration order, which keeps the record's
/// display string deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

apparel_core::impl_validated_newtype!(Tag, is_valid_tag, TAG_CONSTRAINTS);

impl core::fmt::Display for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
