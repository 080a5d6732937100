//! Blog categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of blog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Geriatric medicine.
    Geriatria,
    /// Nutrition.
    Nutricion,
    /// Physical exercise.
    Ejercicio,
    /// Mental health.
    SaludMental,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [
        Self::Geriatria,
        Self::Nutricion,
        Self::Ejercicio,
        Self::SaludMental,
    ];

    /// Returns the URL slug of the category.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Geriatria => "geriatria",
            Self::Nutricion => "nutricion",
            Self::Ejercicio => "ejercicio",
            Self::SaludMental => "salud-mental",
        }
    }

    /// Returns the human-readable name of the category.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Geriatria => "Geriatría",
            Self::Nutricion => "Nutrición",
            Self::Ejercicio => "Ejercicio",
            Self::SaludMental => "Salud Mental",
        }
    }

    /// Returns the comma-separated list of valid slugs.
    #[must_use]
    pub fn allowed_slugs() -> String {
        Self::ALL.map(Self::slug).join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when a string is not a known category slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid category: {value}. Must be one of: {}", Category::allowed_slugs())]
pub struct InvalidCategoryError {
    /// The rejected value.
    pub value: String,
}

impl FromStr for Category {
    type Err = InvalidCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == s)
            .ok_or_else(|| InvalidCategoryError {
                value: s.to_string(),
            })
    }
}
