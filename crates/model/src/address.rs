use serde::{Deserialize, Serialize};

pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";

fn is_valid_address(value: &str) -> bool {
    value.chars().next().is_some_and(|c| !c.is_whitespace())
}

/// Storage or pickup address of an apparel entry. Free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

apparel_core::impl_validated_newtype!(Address, is_valid_address, ADDRESS_CONSTRAINTS);

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
