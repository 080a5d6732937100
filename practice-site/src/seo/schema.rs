//! schema.org JSON-LD objects.

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Map, Value};

use crate::config::SiteConfig;
use crate::content::{format_date_iso, parse_publish_date, ContentRecord};

/// Value of `@context` on every object.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Supported schema.org types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// The practitioner.
    Person,
    /// A blog post.
    Article,
    /// The site itself.
    WebSite,
}

impl SchemaKind {
    /// The `@type` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Article => "Article",
            Self::WebSite => "WebSite",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Person" => Ok(Self::Person),
            "Article" => Ok(Self::Article),
            "WebSite" => Ok(Self::WebSite),
            other => Err(format!("Unknown schema.org type: {other}")),
        }
    }
}

fn author_ref(config: &SiteConfig) -> Value {
    json!({
        "@type": "Person",
        "name": config.author.name,
    })
}

fn publish_instant(data: &Map<String, Value>) -> Option<String> {
    data.get("publishDate")
        .and_then(Value::as_str)
        .and_then(parse_publish_date)
        .map(format_date_iso)
}

fn insert_present(object: &mut Map<String, Value>, key: &str, value: Option<&Value>) {
    if let Some(value) = value.filter(|v| !v.is_null()) {
        object.insert(key.to_string(), value.clone());
    }
}

/// Builds a JSON-LD object of `kind` from the site configuration.
///
/// Keys in `data` are copied over the template last, so caller values win.
/// Article templates read `title`, `description`, `image` and `publishDate`
/// from `data`.
pub fn generate_schema_org(config: &SiteConfig, kind: SchemaKind, data: &Map<String, Value>) -> Value {
    let mut object = Map::new();
    object.insert("@context".to_string(), Value::from(SCHEMA_CONTEXT));
    object.insert("@type".to_string(), Value::from(kind.as_str()));

    match kind {
        SchemaKind::Person => {
            object.insert("name".to_string(), Value::from(config.author.name.clone()));
            object.insert("jobTitle".to_string(), Value::from(config.author.title.clone()));
            object.insert("description".to_string(), Value::from(config.author.bio.clone()));
            object.insert("image".to_string(), Value::from(config.author.photo.clone()));
            object.insert("email".to_string(), Value::from(config.contact.email.clone()));
            object.insert("telephone".to_string(), Value::from(config.contact.phone.clone()));
            object.insert("address".to_string(), Value::from(config.contact.address.clone()));
            object.insert("sameAs".to_string(), json!(config.social.urls()));
        }
        SchemaKind::Article => {
            insert_present(&mut object, "headline", data.get("title"));
            insert_present(&mut object, "description", data.get("description"));
            insert_present(&mut object, "image", data.get("image"));
            if let Some(published) = publish_instant(data) {
                object.insert("datePublished".to_string(), Value::from(published.clone()));
                object.insert("dateModified".to_string(), Value::from(published));
            }
            object.insert("author".to_string(), author_ref(config));
            object.insert("publisher".to_string(), author_ref(config));
        }
        SchemaKind::WebSite => {
            object.insert("name".to_string(), Value::from(config.title.clone()));
            object.insert("description".to_string(), Value::from(config.description.clone()));
            object.insert("url".to_string(), Value::from(config.base_url.clone()));
            object.insert("author".to_string(), author_ref(config));
        }
    }

    for (key, value) in data {
        object.insert(key.clone(), value.clone());
    }

    Value::Object(object)
}

/// Like [`generate_schema_org`], but takes the type by name.
///
/// Unknown names produce an object holding only `@context`.
pub fn generate_schema_org_named(config: &SiteConfig, kind: &str, data: &Map<String, Value>) -> Value {
    match kind.parse::<SchemaKind>() {
        Ok(kind) => generate_schema_org(config, kind, data),
        Err(_) => json!({ "@context": SCHEMA_CONTEXT }),
    }
}

/// Collects the Article template inputs from a blog post.
pub fn article_data(post: &ContentRecord) -> Map<String, Value> {
    let mut data = Map::new();
    data.insert("title".to_string(), Value::from(post.title.clone()));
    data.insert("description".to_string(), Value::from(post.description.clone()));
    data.insert("image".to_string(), Value::from(post.featured_image.clone()));
    if let Some(date) = post.publish_date {
        data.insert("publishDate".to_string(), Value::from(format_date_iso(date)));
    }
    data
}
