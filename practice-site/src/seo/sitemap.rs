//! XML sitemap for the static pages and published posts.

use std::fmt::{self, Write as _};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::content::{format_date_iso, published_posts, ContentRecord};

/// Paths of the static pages, relative to the base URL.
pub const STATIC_PAGES: [&str; 3] = ["", "/servicios", "/recursos"];

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// `<changefreq>` values used by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    /// Home page.
    Weekly,
    /// Everything else.
    Monthly,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => f.write_str("weekly"),
            Self::Monthly => f.write_str("monthly"),
        }
    }
}

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Absolute URL.
    pub loc: String,
    /// Last modification, ISO 8601.
    pub lastmod: Option<String>,
    /// Expected change frequency.
    pub changefreq: ChangeFrequency,
    /// Relative priority in `0.0..=1.0`.
    pub priority: f32,
}

/// Lists the sitemap entries: static pages first, then non-draft posts.
///
/// Static pages carry `now` as their modification time; posts carry their
/// publish date and are served at `/recursos/{slug}`.
pub fn sitemap_entries(base_url: &str, posts: &[ContentRecord], now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let now_iso = format_date_iso(now);

    let pages = STATIC_PAGES.iter().map(|path| {
        let (changefreq, priority) = if path.is_empty() {
            (ChangeFrequency::Weekly, 1.0)
        } else {
            (ChangeFrequency::Monthly, 0.8)
        };
        SitemapEntry {
            loc: format!("{base}{path}"),
            lastmod: Some(now_iso.clone()),
            changefreq,
            priority,
        }
    });

    let articles = published_posts(posts).into_iter().map(|post| SitemapEntry {
        loc: format!("{base}/recursos/{}", post.slug),
        lastmod: post.publish_date.map(format_date_iso),
        changefreq: ChangeFrequency::Monthly,
        priority: 0.7,
    });

    pages.chain(articles).collect()
}

/// Renders the sitemap XML document.
pub fn generate_sitemap(base_url: &str, posts: &[ContentRecord], now: DateTime<Utc>) -> String {
    let entries = sitemap_entries(base_url, posts, now);

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(xml, "<urlset xmlns=\"{SITEMAP_NAMESPACE}\">");
    for entry in &entries {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&entry.loc));
        if let Some(lastmod) = &entry.lastmod {
            let _ = writeln!(xml, "    <lastmod>{lastmod}</lastmod>");
        }
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.changefreq);
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");

    info!(urls = entries.len(), "Generated sitemap");
    xml
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
