//! Validation of blog posts and their body text.
//!
//! Every check runs independently and contributes its own message, so a
//! caller sees every problem with a post at once. Nothing here fails: the
//! caller decides whether an invalid result blocks publication.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::record::ContentRecord;
use crate::observability::SpanTimer;
use super::text::{count_words, WORDS_PER_MINUTE};

/// Minimum body length, in words.
pub const MIN_CONTENT_WORDS: usize = 50;

/// Body length above which markdown headers are expected.
pub const HEADERS_EXPECTED_ABOVE_WORDS: usize = 200;

static MARKDOWN_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#{1,6}\s+").expect("header pattern is valid"));

/// Outcome of a record-level validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether no problem was found.
    pub is_valid: bool,
    /// Problems found, in check order.
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Word count, reading time and quality problems of a post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentQuality {
    /// Whether the body passed every check.
    pub is_valid: bool,
    /// Number of whitespace-delimited words.
    pub word_count: usize,
    /// Estimated reading time in minutes.
    pub reading_time: usize,
    /// Problems found, in check order.
    pub errors: Vec<String>,
}

/// A post that failed validation, with its problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidPost<'a> {
    /// The rejected post.
    pub post: &'a ContentRecord,
    /// Problems found.
    pub errors: Vec<String>,
}

/// Counts for a batch validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of posts checked.
    pub total: usize,
    /// Number of valid posts.
    pub valid: usize,
    /// Number of invalid posts.
    pub invalid: usize,
}

/// Partition of a batch of posts into valid and invalid ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchValidation<'a> {
    /// Posts with no problems, in input order.
    pub valid_posts: Vec<&'a ContentRecord>,
    /// Posts with problems, in input order.
    pub invalid_posts: Vec<InvalidPost<'a>>,
    /// Counts.
    pub summary: BatchSummary,
}

/// Checks a blog post for completeness and consistency.
///
/// `now` is the reference instant for the "no future dates on published
/// posts" rule.
pub fn validate_blog_post(post: &ContentRecord, now: DateTime<Utc>) -> ValidationResult {
    let mut errors = Vec::new();

    if post.title.trim().is_empty() {
        errors.push("Title is required and cannot be empty".to_string());
    }

    if post.description.trim().is_empty() {
        errors.push("Description is required and cannot be empty".to_string());
    }

    if post.featured_image.trim().is_empty() {
        errors.push("Featured image is required".to_string());
    }

    if let Err(err) = post.category() {
        errors.push(err.to_string());
    }

    match post.publish_date {
        None => errors.push("Publication date must be a valid date".to_string()),
        Some(date) if !post.draft && date > now => {
            errors.push("Published posts cannot have future publication dates".to_string());
        }
        Some(_) => {}
    }

    if let Some(tags) = &post.tags {
        if tags.iter().any(|tag| tag.trim().is_empty()) {
            errors.push("All tags must be non-empty strings".to_string());
        }
    }

    if post.author.trim().is_empty() {
        errors.push("Author is required and cannot be empty".to_string());
    }

    debug!(slug = %post.slug, error_count = errors.len(), "Validated blog post");
    ValidationResult::from_errors(errors)
}

/// Checks a blog post against the current time.
pub fn validate_blog_post_now(post: &ContentRecord) -> ValidationResult {
    validate_blog_post(post, Utc::now())
}

/// Checks the length and structure of a post body.
pub fn validate_content(body: &str) -> ContentQuality {
    if body.trim().is_empty() {
        return ContentQuality {
            is_valid: false,
            word_count: 0,
            reading_time: 0,
            errors: vec!["Content is required and cannot be empty".to_string()],
        };
    }

    let word_count = count_words(body);
    let reading_time = word_count.div_ceil(WORDS_PER_MINUTE);
    let mut errors = Vec::new();

    if word_count < MIN_CONTENT_WORDS {
        errors.push(format!("Content must be at least {MIN_CONTENT_WORDS} words long"));
    }

    if word_count > HEADERS_EXPECTED_ABOVE_WORDS && !MARKDOWN_HEADER_RE.is_match(body) {
        errors.push("Long content should include headers for better readability".to_string());
    }

    debug!(word_count, reading_time, error_count = errors.len(), "Validated content body");
    ContentQuality {
        is_valid: errors.is_empty(),
        word_count,
        reading_time,
        errors,
    }
}

/// Validates every post independently and partitions the batch.
pub fn validate_blog_posts(posts: &[ContentRecord], now: DateTime<Utc>) -> BatchValidation<'_> {
    let timer = SpanTimer::start("validate_blog_posts");
    let mut valid_posts = Vec::new();
    let mut invalid_posts = Vec::new();

    for post in posts {
        let result = validate_blog_post(post, now);
        if result.is_valid {
            valid_posts.push(post);
        } else {
            invalid_posts.push(InvalidPost {
                post,
                errors: result.errors,
            });
        }
    }

    let summary = BatchSummary {
        total: posts.len(),
        valid: valid_posts.len(),
        invalid: invalid_posts.len(),
    };

    info!(
        total = summary.total,
        valid = summary.valid,
        invalid = summary.invalid,
        duration_ms = timer.finish(),
        "Validated blog post batch"
    );

    BatchValidation {
        valid_posts,
        invalid_posts,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ContentRecordFixture;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_complete_post_is_valid() {
        let post = ContentRecordFixture::new().build();
        assert_eq!(validate_blog_post(&post, now()), ValidationResult {
            is_valid: true,
            errors: vec![],
        });
    }

    #[test]
    fn test_empty_fields_collect_every_error() {
        let post = ContentRecordFixture::new()
            .title("")
            .description("  ")
            .featured_image("")
            .author("")
            .build();

        let result = validate_blog_post(&post, now());
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                "Title is required and cannot be empty".to_string(),
                "Description is required and cannot be empty".to_string(),
                "Featured image is required".to_string(),
                "Author is required and cannot be empty".to_string(),
            ]
        );
    }

    #[test]
    fn test_invalid_category_names_value_and_allowed_set() {
        let post = ContentRecordFixture::new().category("cardiologia").build();
        let result = validate_blog_post(&post, now());
        assert_eq!(
            result.errors,
            vec!["Invalid category: cardiologia. Must be one of: geriatria, nutricion, ejercicio, salud-mental"
                .to_string()]
        );
    }

    #[test]
    fn test_missing_date() {
        let post = ContentRecordFixture::new().no_publish_date().build();
        let result = validate_blog_post(&post, now());
        assert_eq!(result.errors, vec!["Publication date must be a valid date".to_string()]);
    }

    #[test]
    fn test_future_date_only_rejected_when_published() {
        let future = now() + Duration::days(3);

        let published = ContentRecordFixture::new().publish_date(future).build();
        let result = validate_blog_post(&published, now());
        assert_eq!(
            result.errors,
            vec!["Published posts cannot have future publication dates".to_string()]
        );

        let draft = ContentRecordFixture::new().publish_date(future).draft(true).build();
        assert!(validate_blog_post(&draft, now()).is_valid);
    }

    #[test]
    fn test_blank_tag_gives_single_error() {
        let post = ContentRecordFixture::new()
            .tags(&["salud", "", "  "])
            .build();
        let result = validate_blog_post(&post, now());
        assert_eq!(result.errors, vec!["All tags must be non-empty strings".to_string()]);
    }

    #[test]
    fn test_validate_content_empty() {
        let quality = validate_content("   \n ");
        assert_eq!(quality, ContentQuality {
            is_valid: false,
            word_count: 0,
            reading_time: 0,
            errors: vec!["Content is required and cannot be empty".to_string()],
        });
    }

    #[test]
    fn test_validate_content_too_short() {
        let quality = validate_content("Una frase corta sobre el cuidado del adulto mayor.");
        assert!(!quality.is_valid);
        assert_eq!(quality.word_count, 9);
        assert_eq!(quality.reading_time, 1);
        assert_eq!(quality.errors, vec!["Content must be at least 50 words long".to_string()]);
    }

    #[test]
    fn test_validate_content_long_without_headers() {
        let body = "palabra ".repeat(250);
        let quality = validate_content(&body);
        assert!(!quality.is_valid);
        assert_eq!(quality.word_count, 250);
        assert_eq!(quality.reading_time, 2);
        assert_eq!(
            quality.errors,
            vec!["Long content should include headers for better readability".to_string()]
        );
    }

    #[test]
    fn test_validate_content_long_with_headers() {
        let body = format!("## Introducción\n\n{}", "palabra ".repeat(250));
        let quality = validate_content(&body);
        assert!(quality.is_valid);
        assert_eq!(quality.word_count, 252);
    }

    #[test]
    fn test_validate_content_medium_length_ok() {
        let body = "palabra ".repeat(120);
        let quality = validate_content(&body);
        assert!(quality.is_valid);
        assert_eq!(quality.reading_time, 1);
    }

    #[test]
    fn test_batch_partition() {
        let posts = vec![
            ContentRecordFixture::new().slug("uno").build(),
            ContentRecordFixture::new().slug("dos").title("").build(),
            ContentRecordFixture::new().slug("tres").build(),
        ];

        let batch = validate_blog_posts(&posts, now());
        assert_eq!(batch.summary, BatchSummary { total: 3, valid: 2, invalid: 1 });
        assert_eq!(batch.valid_posts[0].slug, "uno");
        assert_eq!(batch.valid_posts[1].slug, "tres");
        assert_eq!(batch.invalid_posts[0].post.slug, "dos");
        assert_eq!(
            batch.invalid_posts[0].errors,
            vec!["Title is required and cannot be empty".to_string()]
        );
    }

    #[test]
    fn test_batch_empty() {
        let batch = validate_blog_posts(&[], now());
        assert_eq!(batch.summary, BatchSummary::default());
        assert!(batch.valid_posts.is_empty());
        assert!(batch.invalid_posts.is_empty());
    }
}
