use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const COLOR_CONSTRAINTS: &str =
    "Colors should only contain letters and spaces, and it should not be blank";

static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+( [A-Za-z]+)*$").expect("color pattern is valid"));

fn is_valid_color(value: &str) -> bool {
    COLOR_RE.is_match(value)
}

/// Color of an apparel entry, e.g. `Navy Blue`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

apparel_core::impl_validated_newtype!(Color, is_valid_color, COLOR_CONSTRAINTS);

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
