//! The blog-post record handed over by the content source.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::category::{Category, InvalidCategoryError};

/// A blog post as supplied by the content collection.
///
/// `category` keeps the raw value from the source so that an unknown value
/// can be reported; use [`ContentRecord::category`] to get the typed form.
/// A missing or unparseable publication date is stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// URL slug of the post.
    #[serde(default)]
    pub slug: String,
    /// Post title.
    #[serde(default)]
    pub title: String,
    /// Meta description.
    #[serde(default)]
    pub description: String,
    /// Markdown body.
    #[serde(default)]
    pub body: String,
    /// Publication date.
    #[serde(default, deserialize_with = "deserialize_publish_date")]
    pub publish_date: Option<DateTime<Utc>>,
    /// Featured image path or URL.
    #[serde(default)]
    pub featured_image: String,
    /// Raw category slug.
    #[serde(default)]
    pub category: String,
    /// Optional tags.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Author name.
    #[serde(default)]
    pub author: String,
    /// Whether the post is a draft.
    #[serde(default)]
    pub draft: bool,
}

impl ContentRecord {
    /// Parses the raw category into the closed enum.
    pub fn category(&self) -> Result<Category, InvalidCategoryError> {
        self.category.parse()
    }

    /// Returns `true` if the post carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.as_ref().is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

/// A service offered by the practice, as listed on `/servicios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Anchor id, e.g. `consulta-geriatrica`.
    pub id: String,
    /// Icon name.
    pub icon: String,
    /// Card title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Benefit bullet points.
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Long description for the detail section.
    #[serde(default)]
    pub detailed_description: String,
    /// Session length, e.g. `60 minutos`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Display price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Listing position; lower comes first.
    #[serde(default)]
    pub order: i32,
    /// Whether the service is listed.
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

/// Parses a publication date.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (taken as
/// midnight UTC). Anything else yields `None`.
pub fn parse_publish_date(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_publish_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_publish_date))
}
