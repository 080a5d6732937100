//! Queries over an in-memory slice of posts.
//!
//! The content source has already loaded the collection; these helpers only
//! filter, order and page what they are given.

use std::collections::BTreeSet;

use serde::Serialize;

use super::category::Category;
use super::record::{ContentRecord, Service};

/// Neighbours of a post in the published listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Adjacent<'a> {
    /// The newer post, if any.
    pub previous: Option<&'a ContentRecord>,
    /// The older post, if any.
    pub next: Option<&'a ContentRecord>,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    /// Posts on this page.
    pub items: Vec<&'a ContentRecord>,
    /// One-based page number.
    pub current_page: usize,
    /// Total number of pages (at least one).
    pub total_pages: usize,
}

impl Page<'_> {
    /// Returns `true` if a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns `true` if an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// Returns non-draft posts, newest first. Posts without a date sort last.
pub fn published_posts(posts: &[ContentRecord]) -> Vec<&ContentRecord> {
    let mut published: Vec<&ContentRecord> = posts.iter().filter(|post| !post.draft).collect();
    published.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
    published
}

/// Returns the `count` most recent published posts.
pub fn latest_posts(posts: &[ContentRecord], count: usize) -> Vec<&ContentRecord> {
    published_posts(posts).into_iter().take(count).collect()
}

/// Returns published posts in `category`.
pub fn posts_by_category(posts: &[ContentRecord], category: Category) -> Vec<&ContentRecord> {
    published_posts(posts)
        .into_iter()
        .filter(|post| post.category() == Ok(category))
        .collect()
}

/// Returns published posts tagged with `tag`.
pub fn posts_by_tag<'a>(posts: &'a [ContentRecord], tag: &str) -> Vec<&'a ContentRecord> {
    published_posts(posts)
        .into_iter()
        .filter(|post| post.has_tag(tag))
        .collect()
}

/// Finds a post by slug, drafts included.
pub fn post_by_slug<'a>(posts: &'a [ContentRecord], slug: &str) -> Option<&'a ContentRecord> {
    posts.iter().find(|post| post.slug == slug)
}

/// Returns the neighbours of `slug` in the published listing.
pub fn adjacent_posts<'a>(posts: &'a [ContentRecord], slug: &str) -> Adjacent<'a> {
    let published = published_posts(posts);
    let Some(index) = published.iter().position(|post| post.slug == slug) else {
        return Adjacent::default();
    };

    Adjacent {
        previous: index.checked_sub(1).and_then(|i| published.get(i).copied()),
        next: published.get(index + 1).copied(),
    }
}

/// Returns the distinct valid categories of published posts, in listing order.
pub fn blog_categories(posts: &[ContentRecord]) -> Vec<Category> {
    let mut categories = Vec::new();
    for category in published_posts(posts).into_iter().filter_map(|post| post.category().ok()) {
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

/// Returns the distinct tags of published posts, sorted.
pub fn blog_tags(posts: &[ContentRecord]) -> Vec<String> {
    published_posts(posts)
        .into_iter()
        .filter_map(|post| post.tags.as_ref())
        .flatten()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Slices `posts` into the one-based `page` of `per_page` items.
///
/// Out-of-range pages are clamped; a zero `per_page` is treated as one.
pub fn paginate<'a>(posts: &[&'a ContentRecord], page: usize, per_page: usize) -> Page<'a> {
    let per_page = per_page.max(1);
    let total_pages = posts.len().div_ceil(per_page).max(1);
    let current_page = page.clamp(1, total_pages);
    let start = (current_page - 1) * per_page;

    Page {
        items: posts.iter().skip(start).take(per_page).copied().collect(),
        current_page,
        total_pages,
    }
}

/// Returns active services ordered by `order`; ties keep input order.
pub fn active_services(services: &[Service]) -> Vec<&Service> {
    let mut active: Vec<&Service> = services.iter().filter(|service| service.active).collect();
    active.sort_by_key(|service| service.order);
    active
}

/// Finds a service by id, inactive ones included.
pub fn service_by_id<'a>(services: &'a [Service], id: &str) -> Option<&'a Service> {
    services.iter().find(|service| service.id == id)
}
