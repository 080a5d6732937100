//! Page metadata: title, description, canonical URL, Open Graph and Twitter Card.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SiteConfig;
use crate::content::{format_date_iso, ContentRecord};

/// Card type used for every page.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Open Graph page type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// Regular page.
    #[default]
    Website,
    /// Blog post.
    Article,
}

/// Caller-supplied metadata; unset fields fall back to site defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoOptions {
    /// Page title, without the site suffix.
    pub title: Option<String>,
    /// Meta description.
    pub description: Option<String>,
    /// Share image path or URL.
    pub image: Option<String>,
    /// Path relative to the site base URL, e.g. `/servicios`.
    pub url: Option<String>,
    /// Open Graph type.
    pub page_type: Option<PageType>,
    /// Publication instant for articles.
    pub publish_date: Option<DateTime<Utc>>,
    /// Author name.
    pub author: Option<String>,
}

impl SeoOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds article options for a blog post served at `/recursos/{slug}`.
    #[must_use]
    pub fn for_post(post: &ContentRecord) -> Self {
        Self {
            title: Some(post.title.clone()),
            description: Some(post.description.clone()),
            image: Some(post.featured_image.clone()),
            url: Some(format!("/recursos/{}", post.slug)),
            page_type: Some(PageType::Article),
            publish_date: post.publish_date,
            author: Some(post.author.clone()),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the share image.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the page path.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the page type.
    #[must_use]
    pub const fn with_page_type(mut self, page_type: PageType) -> Self {
        self.page_type = Some(page_type);
        self
    }

    /// Sets the publication date.
    #[must_use]
    pub const fn with_publish_date(mut self, publish_date: DateTime<Utc>) -> Self {
        self.publish_date = Some(publish_date);
        self
    }

    /// Sets the author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Open Graph properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    /// `og:type`.
    #[serde(rename = "type")]
    pub page_type: PageType,
    /// `og:title`.
    pub title: String,
    /// `og:description`.
    pub description: String,
    /// `og:url`.
    pub url: String,
    /// `og:image`.
    pub image: String,
    /// `og:site_name`.
    pub site_name: String,
    /// `article:published_time`, ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    /// `article:author`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Twitter Card properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    /// Card type.
    pub card: String,
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
    /// Card image.
    pub image: String,
    /// Creator handle.
    pub creator: String,
}

/// Metadata for a page head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    /// Full `<title>`.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Canonical URL.
    pub canonical: String,
    /// Open Graph properties.
    pub open_graph: OpenGraph,
    /// Twitter Card properties.
    pub twitter: TwitterCard,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Merges `options` over the site defaults.
///
/// The title becomes `"{title} | {site title}"` when one is given, the site
/// title otherwise. The canonical URL is the base URL followed by the path.
pub fn generate_seo(config: &SiteConfig, options: SeoOptions) -> SeoMetadata {
    let full_title = match non_empty(options.title) {
        Some(title) => format!("{title} | {}", config.title),
        None => config.title.clone(),
    };
    let description = options.description.unwrap_or_else(|| config.description.clone());
    let image = options.image.unwrap_or_else(|| config.seo.og_image.clone());
    let full_url = format!("{}{}", config.base_url, options.url.unwrap_or_default());
    let author = non_empty(Some(options.author.unwrap_or_else(|| config.author.name.clone())));

    debug!(title = %full_title, canonical = %full_url, "Generated SEO metadata");

    SeoMetadata {
        title: full_title.clone(),
        description: description.clone(),
        canonical: full_url.clone(),
        open_graph: OpenGraph {
            page_type: options.page_type.unwrap_or_default(),
            title: full_title.clone(),
            description: description.clone(),
            url: full_url,
            image: image.clone(),
            site_name: config.title.clone(),
            published_time: options.publish_date.map(format_date_iso),
            author,
        },
        twitter: TwitterCard {
            card: TWITTER_CARD.to_string(),
            title: full_title,
            description,
            image,
            creator: config.seo.twitter_handle.clone(),
        },
    }
}
