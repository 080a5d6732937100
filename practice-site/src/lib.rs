//! # Practice Site
//!
//! Validators and generators behind a gerontology practice website.
//!
//! The crate is a set of pure functions with no I/O beyond loading the site
//! configuration:
//!
//! - **Content**: slug sanitization, blog-post and body validation, listing helpers
//! - **Contact fields**: email, phone, URL and image-path checks
//! - **Design system**: colour and typography compliance for stylesheets and Tailwind configs
//! - **SEO**: page metadata, schema.org JSON-LD and the XML sitemap
//! - **Navigation**: header links with active-state detection
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use practice_site::prelude::*;
//!
//! let config = SiteConfig::from_path("site.json")?;
//! let batch = validate_blog_posts(&posts, chrono::Utc::now());
//! for invalid in &batch.invalid_posts {
//!     eprintln!("{}: {:?}", invalid.post.slug, invalid.errors);
//! }
//!
//! let seo = generate_seo(&config, SeoOptions::new().with_title("Servicios").with_url("/servicios"));
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod contact;
pub mod content;
pub mod design;
pub mod errors;
pub mod navigation;
pub mod observability;
pub mod seo;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::SiteConfig;
    pub use crate::contact::{validate_email, validate_image_path, validate_phone, validate_url};
    pub use crate::content::{
        validate_blog_post, validate_blog_posts, validate_content, validate_slug, BatchValidation,
        Category, ContentQuality, ContentRecord, SlugResult, ValidationResult,
    };
    pub use crate::design::{
        validate_colors_against_design_system, validate_tailwind_typography_config,
        validate_typography_consistency, ComplianceReport, ElementType,
    };
    pub use crate::errors::{ConfigError, Result, SiteError};
    pub use crate::navigation::{is_active_link, resolve_navigation, NAVIGATION_LINKS};
    pub use crate::seo::{
        generate_schema_org, generate_seo, generate_sitemap, SchemaKind, SeoMetadata, SeoOptions,
    };
}
