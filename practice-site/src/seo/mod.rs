//! Search-engine metadata: page head tags, JSON-LD and the sitemap.

mod metadata;
mod schema;
mod sitemap;

pub use metadata::{generate_seo, OpenGraph, PageType, SeoMetadata, SeoOptions, TwitterCard, TWITTER_CARD};
pub use schema::{article_data, generate_schema_org, generate_schema_org_named, SchemaKind, SCHEMA_CONTEXT};
pub use sitemap::{generate_sitemap, sitemap_entries, ChangeFrequency, SitemapEntry, STATIC_PAGES};
