//! Format checks for contact fields.
//!
//! Each check returns a plain boolean and never panics on odd input.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

// Colombian numbers: +57, an optional single space, ten digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+57\s?[0-9]{10}$").expect("phone pattern is valid"));

/// Returns `true` if `email` looks like `local@domain.tld`.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns `true` for Colombian phone numbers such as `+57 3001234567`.
pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Returns `true` if `url` is an absolute URL with a host.
pub fn validate_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| parsed.has_host())
}

/// Returns `true` for absolute URLs and for root- or dot-relative paths.
pub fn validate_image_path(image_path: &str) -> bool {
    if image_path.trim().is_empty() {
        return false;
    }

    validate_url(image_path)
        || image_path.starts_with('/')
        || image_path.starts_with("./")
        || image_path.starts_with("../")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com"));
        assert!(validate_email("contacto@consulta.com.co"));
        assert!(!validate_email("invalid-email"));
        assert!(!validate_email("no spaces@example.com"));
        assert!(!validate_email("missing@tld"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+57 3001234567"));
        assert!(validate_phone("+573001234567"));
        assert!(!validate_phone("3001234567"));
        assert!(!validate_phone("+57 300123456"));
        assert!(!validate_phone("+57 30012345678"));
        assert!(!validate_phone("+57  3001234567"));
        assert!(!validate_phone("+1 3001234567"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://example.com"));
        assert!(validate_url("http://example.com/path?q=1"));
        assert!(!validate_url("invalid-url"));
        assert!(!validate_url("example.com"));
        assert!(!validate_url("mailto:contacto@example.com"));
        assert!(!validate_url(""));
    }

    #[test]
    fn test_validate_image_path() {
        assert!(validate_image_path("https://cdn.example.com/img.jpg"));
        assert!(validate_image_path("/images/hero-photo.jpg"));
        assert!(validate_image_path("./cover.png"));
        assert!(validate_image_path("../assets/cover.png"));
        assert!(!validate_image_path("images/cover.png"));
        assert!(!validate_image_path("   "));
        assert!(!validate_image_path(""));
    }
}
