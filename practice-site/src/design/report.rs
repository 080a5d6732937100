//! Compliance reports shared by the colour and typography checks.

use serde::Serialize;

/// Result of checking a set of items against the design system.
///
/// `is_compliant` is `true` exactly when `invalid` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport<V, I> {
    /// Items that follow the design system, in input order.
    pub valid: Vec<V>,
    /// Items that break it, in input order.
    pub invalid: Vec<I>,
    /// Whether nothing was invalid.
    pub is_compliant: bool,
}

impl<V, I> ComplianceReport<V, I> {
    /// Builds a report from its two partitions.
    #[must_use]
    pub fn from_parts(valid: Vec<V>, invalid: Vec<I>) -> Self {
        let is_compliant = invalid.is_empty();
        Self {
            valid,
            invalid,
            is_compliant,
        }
    }

    /// Number of items classified either way.
    #[must_use]
    pub fn checked(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }
}

impl<V, I> Default for ComplianceReport<V, I> {
    fn default() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }
}

impl<V, I> FromIterator<Result<V, I>> for ComplianceReport<V, I> {
    fn from_iter<T: IntoIterator<Item = Result<V, I>>>(iter: T) -> Self {
        let mut valid = Vec::new();
        let mut invalid = Vec::new();
        for item in iter {
            match item {
                Ok(v) => valid.push(v),
                Err(i) => invalid.push(i),
            }
        }
        Self::from_parts(valid, invalid)
    }
}
