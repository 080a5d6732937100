//! Testing utilities for code built on this crate.
//!
//! This module provides:
//! - A content record builder that is valid by default
//! - Assertions for validation results and compliance reports

mod assertions;
mod fixtures;

pub use assertions::{
    assert_compliant, assert_flagged, assert_invalid_with, assert_not_compliant, assert_slug,
    assert_valid,
};
pub use fixtures::ContentRecordFixture;
