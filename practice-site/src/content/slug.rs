//! Slug sanitization.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum length of a sanitized slug.
pub const MIN_SLUG_LEN: usize = 3;

/// Maximum length of a sanitized slug.
pub const MAX_SLUG_LEN: usize = 100;

static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("slug charset pattern is valid"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static HYPHENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("hyphen pattern is valid"));

/// Outcome of [`validate_slug`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugResult {
    /// Whether the sanitized slug passed every check.
    pub is_valid: bool,
    /// Lowercase, alphanumeric-and-hyphen form of the input.
    pub sanitized: String,
    /// Problems found, in check order.
    pub errors: Vec<String>,
}

/// Sanitizes free text into a URL-safe slug and validates the result.
///
/// The input is lowercased, stripped of everything outside
/// `[a-z0-9]`, whitespace and `-`, whitespace runs become a single hyphen,
/// hyphen runs collapse, and leading/trailing hyphens are removed.
pub fn validate_slug(input: &str) -> SlugResult {
    if input.trim().is_empty() {
        return SlugResult {
            is_valid: false,
            sanitized: String::new(),
            errors: vec!["Slug is required".to_string()],
        };
    }

    let sanitized = sanitize(input);
    let mut errors = Vec::new();

    if sanitized.is_empty() {
        errors.push("Slug must contain at least one alphanumeric character".to_string());
    }

    if sanitized.len() < MIN_SLUG_LEN {
        errors.push(format!("Slug must be at least {MIN_SLUG_LEN} characters long"));
    }

    if sanitized.len() > MAX_SLUG_LEN {
        errors.push(format!("Slug must be less than {MAX_SLUG_LEN} characters long"));
    }

    SlugResult {
        is_valid: errors.is_empty(),
        sanitized,
        errors,
    }
}

fn sanitize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped = DISALLOWED_RE.replace_all(lowered.trim(), "");
    let hyphenated = WHITESPACE_RE.replace_all(&stripped, "-");
    let collapsed = HYPHENS_RE.replace_all(&hyphenated, "-");
    let collapsed: &str = collapsed.as_ref();
    let trimmed = collapsed.strip_prefix('-').unwrap_or(collapsed);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spaces_and_punctuation() {
        let result = validate_slug("Invalid Slug With Spaces!");
        assert_eq!(
            result,
            SlugResult {
                is_valid: true,
                sanitized: "invalid-slug-with-spaces".to_string(),
                errors: vec![],
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let result = validate_slug("");
        assert!(!result.is_valid);
        assert_eq!(result.sanitized, "");
        assert_eq!(result.errors, vec!["Slug is required".to_string()]);

        let result = validate_slug("   \t");
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Slug is required".to_string()]);
    }

    #[test]
    fn test_accented_characters_are_dropped() {
        let result = validate_slug("Nutrición en la vejez");
        assert_eq!(result.sanitized, "nutricin-en-la-vejez");
        assert!(result.is_valid);
    }

    #[test]
    fn test_collapses_hyphens_and_trims() {
        let result = validate_slug("--salud -- mental--");
        assert_eq!(result.sanitized, "salud-mental");
        assert!(result.is_valid);
    }

    #[test]
    fn test_only_symbols() {
        let result = validate_slug("!!!");
        assert!(!result.is_valid);
        assert_eq!(result.sanitized, "");
        assert_eq!(
            result.errors,
            vec![
                "Slug must contain at least one alphanumeric character".to_string(),
                "Slug must be at least 3 characters long".to_string(),
            ]
        );
    }

    #[test]
    fn test_too_short() {
        let result = validate_slug("ab");
        assert!(!result.is_valid);
        assert_eq!(result.sanitized, "ab");
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_too_long() {
        let input = "a".repeat(101);
        let result = validate_slug(&input);
        assert!(!result.is_valid);
        assert_eq!(result.sanitized.len(), 101);
        assert_eq!(
            result.errors,
            vec!["Slug must be less than 100 characters long".to_string()]
        );

        assert!(validate_slug(&"a".repeat(100)).is_valid);
    }

    #[test]
    fn test_sanitized_charset() {
        let result = validate_slug("  Éxito: 10 Consejos_Para  Cuidadores ");
        assert!(result
            .sanitized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!result.sanitized.starts_with('-'));
        assert!(!result.sanitized.ends_with('-'));
        assert!(!result.sanitized.contains("--"));
    }
}
