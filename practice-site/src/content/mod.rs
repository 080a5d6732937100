//! Blog and service content: records, slugs, validation and listing helpers.

mod category;
pub mod index;
mod record;
mod slug;
pub mod text;
mod validation;

pub use category::{Category, InvalidCategoryError};
pub use index::{
    active_services, adjacent_posts, blog_categories, blog_tags, latest_posts, paginate, post_by_slug,
    posts_by_category, posts_by_tag, published_posts, service_by_id, Adjacent, Page,
};
pub use record::{parse_publish_date, ContentRecord, Service};
pub use slug::{validate_slug, SlugResult, MAX_SLUG_LEN, MIN_SLUG_LEN};
pub use text::{calculate_reading_time, format_date, format_date_iso, generate_excerpt};
pub use validation::{
    validate_blog_post, validate_blog_post_now, validate_blog_posts, validate_content,
    BatchSummary, BatchValidation, ContentQuality, InvalidPost, ValidationResult,
};
