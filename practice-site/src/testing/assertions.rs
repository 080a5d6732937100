//! Assertions for validation results and compliance reports.

use std::fmt::Debug;

use crate::content::{SlugResult, ValidationResult};
use crate::design::ComplianceReport;

/// Asserts that a validation found no problem.
pub fn assert_valid(result: &ValidationResult) {
    assert!(
        result.is_valid && result.errors.is_empty(),
        "Expected a valid result, got errors: {:?}",
        result.errors
    );
}

/// Asserts that a validation failed with `expected` among its errors.
pub fn assert_invalid_with(result: &ValidationResult, expected: &str) {
    assert!(!result.is_valid, "Expected an invalid result, but it is valid");
    assert!(
        result.errors.iter().any(|e| e == expected),
        "Expected error '{}', got: {:?}",
        expected,
        result.errors
    );
}

/// Asserts that a slug was accepted and sanitized to `expected`.
pub fn assert_slug(result: &SlugResult, expected: &str) {
    assert!(result.is_valid, "Expected a valid slug, got errors: {:?}", result.errors);
    assert_eq!(result.sanitized, expected, "Unexpected sanitized slug");
}

/// Asserts that a report has no invalid items.
pub fn assert_compliant<V: Debug, I: Debug>(report: &ComplianceReport<V, I>) {
    assert!(
        report.is_compliant && report.invalid.is_empty(),
        "Expected a compliant report, got violations: {:?}",
        report.invalid
    );
}

/// Asserts that a report flagged at least one item.
pub fn assert_not_compliant<V: Debug, I: Debug>(report: &ComplianceReport<V, I>) {
    assert!(
        !report.is_compliant && !report.invalid.is_empty(),
        "Expected violations, but the report is compliant. Valid items: {:?}",
        report.valid
    );
}

/// Asserts that `item` is among the report's violations.
pub fn assert_flagged<V, I: Debug + PartialEq>(report: &ComplianceReport<V, I>, item: &I) {
    assert!(
        report.invalid.contains(item),
        "Expected {:?} to be flagged, violations: {:?}",
        item,
        report.invalid
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::validate_slug;
    use crate::design::validate_colors_against_design_system;

    #[test]
    fn test_assert_valid() {
        assert_valid(&ValidationResult {
            is_valid: true,
            errors: vec![],
        });
    }

    #[test]
    #[should_panic(expected = "Expected a valid result")]
    fn test_assert_valid_fails() {
        assert_valid(&ValidationResult {
            is_valid: false,
            errors: vec!["Title is required and cannot be empty".to_string()],
        });
    }

    #[test]
    fn test_assert_invalid_with() {
        let result = ValidationResult {
            is_valid: false,
            errors: vec!["Featured image is required".to_string()],
        };
        assert_invalid_with(&result, "Featured image is required");
    }

    #[test]
    fn test_assert_slug() {
        assert_slug(&validate_slug("Hola Mundo"), "hola-mundo");
    }

    #[test]
    fn test_report_assertions() {
        let ok = validate_colors_against_design_system(&["#136038"]);
        assert_compliant(&ok);

        let bad = validate_colors_against_design_system(&["#136038", "#f00"]);
        assert_not_compliant(&bad);
        assert_flagged(&bad, &"#FF0000".to_string());
    }

    #[test]
    #[should_panic(expected = "Expected violations")]
    fn test_assert_not_compliant_fails() {
        let ok = validate_colors_against_design_system(&["#fff"]);
        assert_not_compliant(&ok);
    }
}
