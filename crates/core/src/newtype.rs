//! Validated string newtypes shared by domain value objects.

/// Implements the common surface of a validated string newtype `$t(String)`.
///
/// Generates `new`, `is_valid`, `as_str`, `FromStr`, `TryFrom<String>`,
/// `From<$t> for String`, `AsRef<str>` and the [`ValueObject`](crate::ValueObject)
/// marker. `$validate` is a `fn(&str) -> bool`; `$message` is the validation
/// error text. The type provides its own `Display`.
#[macro_export]
macro_rules! impl_validated_newtype {
    ($t:ident, $validate:path, $message:expr) => {
        impl $t {
            /// Validates `value` and wraps it.
            pub fn new(value: impl Into<String>) -> $crate::DomainResult<Self> {
                let value = value.into();
                if $validate(&value) {
                    Ok(Self(value))
                } else {
                    Err($crate::DomainError::validation($message))
                }
            }

            pub fn is_valid(value: &str) -> bool {
                $validate(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::convert::TryFrom<String> for $t {
            type Error = $crate::DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl ::core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl $crate::ValueObject for $t {}
    };
}
