use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain. \
The local-part should only contain alphanumeric characters and the special characters +_.-, \
and may not start or end with a special character. \
The domain is made of labels separated by periods; each label starts and ends with an \
alphanumeric character and may contain hyphens, and the last label is at least 2 characters long.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]+(-[A-Za-z0-9]+)*$",
    )
    .expect("email pattern is valid")
});

fn is_valid_email(value: &str) -> bool {
    if !EMAIL_RE.is_match(value) {
        return false;
    }
    // The pattern guarantees exactly one '@'.
    value
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit('.').next())
        .is_some_and(|last| last.len() >= 2)
}

/// Contact email of an apparel entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

apparel_core::impl_validated_newtype!(Email, is_valid_email, EMAIL_CONSTRAINTS);

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
