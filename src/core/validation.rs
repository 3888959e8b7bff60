//! Required-field validation helpers
//!
//! Validation only runs at order creation; edits are permissive by design.

use crate::core::error::ValidationError;

/// True when the value is empty or whitespace-only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate a single required field
pub fn require_non_blank(field: &str, value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        Err(ValidationError::FieldError {
            field: field.to_string(),
            message: "er påkrevd".to_string(),
        })
    } else {
        Ok(())
    }
}

/// Collect every blank required field into a single error.
///
/// Reports all missing fields at once so the caller can highlight every
/// offending input in one pass.
pub fn require_all_non_blank(fields: &[(&str, &str)]) -> Result<(), ValidationError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(name, _)| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("Kari"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("fornavn", "Kari").is_ok());
        assert!(require_non_blank("fornavn", "  ").is_err());
    }

    #[test]
    fn test_require_all_reports_every_missing_field() {
        let err = require_all_non_blank(&[
            ("fornavn", ""),
            ("etternavn", "Nordmann"),
            ("seremonitype", "   "),
        ])
        .unwrap_err();

        match err {
            ValidationError::MissingFields(fields) => {
                assert_eq!(fields, vec!["fornavn", "seremonitype"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
