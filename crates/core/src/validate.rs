//! Presence checks for construction inputs.

use crate::error::{DomainError, DomainResult};

/// Checks that every listed field is present, failing on the first absent one.
///
/// Each entry is `(field_name, is_present)`. Callers run this before assigning
/// anything so a failed construction never leaves a partially built value.
pub fn require_all_present(fields: &[(&'static str, bool)]) -> DomainResult<()> {
    match fields.iter().find(|(_, present)| !present) {
        Some((field, _)) => {
            tracing::debug!(field, "required field absent");
            Err(DomainError::invalid_argument(format!("{field} must be present")))
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_when_all_present() {
        assert_eq!(require_all_present(&[("a", true), ("b", true)]), Ok(()));
    }

    #[test]
    fn accepts_empty_list() {
        assert_eq!(require_all_present(&[]), Ok(()));
    }

    #[test]
    fn reports_first_absent_field() {
        let err = require_all_present(&[("a", true), ("b", false), ("c", false)]).unwrap_err();
        assert_eq!(err, DomainError::InvalidArgument("b must be present".to_string()));
    }
}
