//! Error types for the practice site library.
//!
//! Validators and linters never fail: they report input defects as lists of
//! human-readable messages inside their result structs. The errors here are
//! reserved for the host-facing edges of the crate, such as loading the site
//! configuration at startup.

use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, SiteError>;

/// The main error type for practice site operations.
#[derive(Debug, Error)]
pub enum SiteError {
    /// The site configuration is unusable.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised when a site configuration cannot be used.
#[derive(Debug, Clone, Error)]
#[error("Invalid site configuration: {message}")]
pub struct ConfigError {
    /// The error message.
    pub message: String,
    /// The configuration fields involved in the error.
    pub fields: Vec<String>,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Sets the fields involved.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::new("base URL is empty").with_fields(vec!["baseUrl".to_string()]);
        assert_eq!(err.to_string(), "Invalid site configuration: base URL is empty");
        assert_eq!(err.fields, vec!["baseUrl".to_string()]);
    }

    #[test]
    fn test_site_error_from_config_error() {
        let err: SiteError = ConfigError::new("missing title").into();
        assert!(matches!(err, SiteError::Config(_)));
        assert_eq!(err.to_string(), "Invalid site configuration: missing title");
    }

    #[test]
    fn test_site_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SiteError = serde_err.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_site_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "site.json");
        let err: SiteError = io_err.into();
        assert_eq!(err.to_string(), "IO error: site.json");
    }
}
