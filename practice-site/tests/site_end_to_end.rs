//! End-to-end checks over the public API: a content batch flowing through
//! validation, listing, SEO and sitemap generation, plus the design lints
//! run over a realistic stylesheet and Tailwind config.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use chrono::{TimeZone, Utc};
use practice_site::content::{published_posts, ContentRecord};
use practice_site::design::{
    extract_colors_from_css, extract_colors_from_tailwind_config, ElementType,
};
use practice_site::prelude::*;
use practice_site::seo::{article_data, sitemap_entries};
use practice_site::testing::{
    assert_compliant, assert_invalid_with, assert_not_compliant, assert_valid,
    ContentRecordFixture,
};
use pretty_assertions::assert_eq;

const STYLESHEET: &str = r#"
h1, h2 { font-family: 'Montserrat', sans-serif; font-weight: 900; color: #136038; }
p { font-family: "More Sugar", cursive; color: #136038; }
.btn-primary { background: #03A63C; color: #fff; }
.hero { background-color: #99ebb9; }
"#;

const TAILWIND_CONFIG: &str = r#"
export default {
  theme: {
    extend: {
      colors: {
        primary: { dark: '#136038', main: '#03A63C', light: '#99EBB9' },
        white: '#FFFFFF',
      },
      fontFamily: {
        'heading': ['Montserrat', 'sans-serif'],
        'body': ['More Sugar', 'cursive'],
      },
    },
  },
};
"#;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_empty_record_collects_every_required_field_error() {
    let post = ContentRecord {
        category: "geriatria".to_string(),
        publish_date: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).single(),
        draft: false,
        ..ContentRecord::default()
    };

    let result = validate_blog_post(&post, now());
    assert!(result.errors.len() >= 4);
    assert_invalid_with(&result, "Title is required and cannot be empty");
    assert_invalid_with(&result, "Description is required and cannot be empty");
    assert_invalid_with(&result, "Featured image is required");
    assert_invalid_with(&result, "Author is required and cannot be empty");
}

#[test]
fn test_populated_record_is_valid() {
    let post = ContentRecordFixture::new().build();
    assert_valid(&validate_blog_post(&post, now()));
}

#[test]
fn test_records_deserialize_from_content_source() {
    let json = r#"[
        {"slug": "memoria", "title": "Memoria", "description": "Ejercicios",
         "body": "texto", "publishDate": "2024-02-10", "featuredImage": "/img/m.jpg",
         "category": "salud-mental", "tags": ["memoria"], "author": "Dr. [Name]"},
        {"slug": "sin-fecha", "title": "Sin fecha", "description": "x",
         "publishDate": "no es fecha", "featuredImage": "/img/x.jpg",
         "category": "geriatria", "author": "Dr. [Name]"}
    ]"#;
    let posts: Vec<ContentRecord> = serde_json::from_str(json).unwrap();

    let batch = validate_blog_posts(&posts, now());
    assert_eq!(batch.summary.total, 2);
    assert_eq!(batch.summary.valid, 1);
    assert_eq!(batch.valid_posts[0].category().unwrap(), Category::SaludMental);
    assert_eq!(
        batch.invalid_posts[0].errors,
        vec!["Publication date must be a valid date".to_string()]
    );
}

#[test]
fn test_valid_posts_flow_into_seo_and_sitemap() {
    let config = SiteConfig::default().with_base_url("https://example.com/");
    let posts = vec![
        ContentRecordFixture::new().slug("caminar-a-diario").build(),
        ContentRecordFixture::new().slug("borrador").draft(true).build(),
        ContentRecordFixture::new().slug("sin-titulo").title("").build(),
    ];

    let batch = validate_blog_posts(&posts, now());
    assert_eq!(batch.summary.invalid, 1);

    let publishable: Vec<ContentRecord> = batch.valid_posts.iter().map(|p| (*p).clone()).collect();
    let listed = published_posts(&publishable);
    assert_eq!(listed.len(), 1);

    let post = listed[0];
    let seo = generate_seo(&config, SeoOptions::for_post(post));
    assert_eq!(seo.canonical, "https://example.com/recursos/caminar-a-diario");
    assert_eq!(seo.title, format!("{} | {}", post.title, config.title));

    let schema = generate_schema_org(&config, SchemaKind::Article, &article_data(post));
    assert_eq!(schema["headline"], post.title.as_str());
    assert_eq!(schema["@context"], "https://schema.org");

    let entries = sitemap_entries(&config.base_url, &publishable, now());
    assert_eq!(entries.len(), 4);
    let xml = generate_sitemap(&config.base_url, &publishable, now());
    assert!(xml.contains("<loc>https://example.com/recursos/caminar-a-diario</loc>"));
    assert!(!xml.contains("borrador"));
}

#[test]
fn test_stylesheet_follows_design_system() {
    let colors = extract_colors_from_css(STYLESHEET);
    assert_eq!(colors.len(), 5);
    assert_compliant(&validate_colors_against_design_system(&colors));

    let typography = validate_typography_consistency(STYLESHEET);
    assert_compliant(&typography);
    assert_eq!(typography.valid.len(), 2);
    assert_eq!(typography.valid[0].element_type, ElementType::Heading);
    assert_eq!(typography.valid[1].element_type, ElementType::Body);
}

#[test]
fn test_stylesheet_with_violations() {
    let css = "h2 { font-family: Arial; font-weight: 700; }\n.alert { color: #ff0000; }";

    assert_not_compliant(&validate_typography_consistency(css));
    let colors = validate_colors_against_design_system(&extract_colors_from_css(css));
    assert_not_compliant(&colors);
    assert_eq!(colors.invalid, vec!["#FF0000".to_string()]);
}

#[test]
fn test_tailwind_config_follows_design_system() {
    let colors = extract_colors_from_tailwind_config(TAILWIND_CONFIG);
    assert_compliant(&validate_colors_against_design_system(&colors));
    assert_compliant(&validate_tailwind_typography_config(TAILWIND_CONFIG));
}

#[test]
fn test_navigation_for_article_page() {
    let links = resolve_navigation("/recursos/caminar-a-diario");
    let active: Vec<&str> = links.iter().filter(|l| l.active).map(|l| l.link.href).collect();
    assert_eq!(active, vec!["/recursos"]);
    assert_eq!(links.len(), NAVIGATION_LINKS.len());
}

#[test]
fn test_config_contact_fields_pass_contact_validators() {
    let config = SiteConfig::default();
    assert!(validate_email(&config.contact.email));
    assert!(validate_phone(&config.contact.whatsapp));
    assert!(validate_url(&config.base_url));
    assert!(validate_image_path(&config.seo.og_image));
    assert!(config.check().is_empty());
}
