//! Site-wide configuration.
//!
//! The configuration is constructed once by the host (from defaults or a JSON
//! document) and handed by reference to the SEO generator, the sitemap and any
//! other consumer that needs display defaults. Nothing in this crate mutates it.

use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::contact::{validate_email, validate_phone, validate_url};
use crate::errors::{ConfigError, Result};

// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, as a URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Message pre-filled in WhatsApp links from the header.
pub const DEFAULT_WHATSAPP_MESSAGE: &str = "Hola, me gustaría agendar una consulta";

/// Top-level site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title, used as the suffix of every page title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Default meta description.
    #[serde(default = "default_description")]
    pub description: String,
    /// Absolute base URL without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Identity of the practitioner.
    #[serde(default)]
    pub author: AuthorInfo,
    /// Contact channels.
    #[serde(default)]
    pub contact: ContactInfo,
    /// Social profile URLs.
    #[serde(default)]
    pub social: SocialProfiles,
    /// SEO defaults.
    #[serde(default)]
    pub seo: SeoSettings,
    /// Blog listing settings.
    #[serde(default)]
    pub pagination: BlogPagination,
}

fn default_title() -> String {
    "Dr. [Name] - Gerontólogo".to_string()
}

fn default_description() -> String {
    "Especialista en geriatría y cuidado del adulto mayor. Consultas médicas especializadas y atención integral."
        .to_string()
}

fn default_base_url() -> String {
    "https://gerontologaviviana.com".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            base_url: default_base_url(),
            author: AuthorInfo::default(),
            contact: ContactInfo::default(),
            social: SocialProfiles::default(),
            seo: SeoSettings::default(),
            pagination: BlogPagination::default(),
        }
    }
}

/// Practitioner identity shown in the header, footer and schema.org data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorInfo {
    /// Display name.
    pub name: String,
    /// Professional title.
    pub title: String,
    /// Short title shown under the logo.
    pub header_title: String,
    /// Credentials listed in the footer.
    pub credentials: Vec<String>,
    /// Short biography.
    pub bio: String,
    /// Path or URL of the portrait.
    pub photo: String,
}

impl Default for AuthorInfo {
    fn default() -> Self {
        Self {
            name: "Dr. [Name]".to_string(),
            title: "Gerontólogo".to_string(),
            header_title: "Gerontólogo".to_string(),
            credentials: vec![
                "Médico Especialista en Geriatría".to_string(),
                "Certificado en Medicina del Envejecimiento".to_string(),
            ],
            bio: "Especialista en geriatría con más de [X] años de experiencia en el cuidado integral del adulto mayor."
                .to_string(),
            photo: "/images/hero-photo.jpg".to_string(),
        }
    }
}

/// Contact channels of the practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    /// Contact email address.
    pub email: String,
    /// Phone number as displayed (may contain spaces).
    pub phone: String,
    /// WhatsApp number in international format.
    pub whatsapp: String,
    /// Postal address of the practice.
    pub address: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "contacto@ejemplo.com".to_string(),
            phone: "+57 300 123 4567".to_string(),
            whatsapp: "+573001234567".to_string(),
            address: "Dirección de la consulta".to_string(),
        }
    }
}

/// Social profile URLs. Unset profiles are skipped everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialProfiles {
    /// Instagram profile URL.
    pub instagram: Option<String>,
    /// Facebook page URL.
    pub facebook: Option<String>,
    /// LinkedIn profile URL.
    pub linkedin: Option<String>,
}

impl Default for SocialProfiles {
    fn default() -> Self {
        Self {
            instagram: Some("https://instagram.com/usuario".to_string()),
            facebook: Some("https://facebook.com/usuario".to_string()),
            linkedin: Some("https://linkedin.com/in/usuario".to_string()),
        }
    }
}

impl SocialProfiles {
    /// Returns the configured profile URLs in display order.
    #[must_use]
    pub fn urls(&self) -> Vec<&str> {
        [&self.instagram, &self.facebook, &self.linkedin]
            .into_iter()
            .filter_map(|url| url.as_deref())
            .filter(|url| !url.is_empty())
            .collect()
    }
}

/// SEO defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoSettings {
    /// Meta keywords.
    pub keywords: Vec<String>,
    /// Default Open Graph image.
    pub og_image: String,
    /// Twitter handle used as the card creator.
    pub twitter_handle: String,
}

impl Default for SeoSettings {
    fn default() -> Self {
        Self {
            keywords: vec![
                "gerontólogo".to_string(),
                "geriatría".to_string(),
                "adulto mayor".to_string(),
                "medicina del envejecimiento".to_string(),
                "consulta médica".to_string(),
            ],
            og_image: "/images/og-image.jpg".to_string(),
            twitter_handle: "@usuario".to_string(),
        }
    }
}

/// Blog listing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPagination {
    /// Posts rendered per listing page.
    pub posts_per_page: usize,
    /// Maximum number of page links in the pager.
    pub max_pagination_links: usize,
}

impl Default for BlogPagination {
    fn default() -> Self {
        Self {
            posts_per_page: 9,
            max_pagination_links: 5,
        }
    }
}

/// A social link ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Platform display name.
    pub platform: &'static str,
    /// Profile URL.
    pub url: String,
    /// Icon identifier.
    pub icon: &'static str,
    /// Accessible label.
    pub label: &'static str,
}

impl SiteConfig {
    /// Creates a configuration with the practice defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document, filling missing fields with defaults.
    ///
    /// A trailing slash on `baseUrl` is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the configuration
    /// fails [`SiteConfig::ensure_usable`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config.ensure_usable()?;
        for problem in config.check() {
            warn!(%problem, "Site configuration check failed");
        }
        debug!(title = %config.title, base_url = %config.base_url, "Loaded site configuration");
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Sets the site title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the default description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the base URL. A trailing slash is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the author display name.
    #[must_use]
    pub fn with_author_name(mut self, name: impl Into<String>) -> Self {
        self.author.name = name.into();
        self
    }

    /// Sets the contact channels.
    #[must_use]
    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.contact = contact;
        self
    }

    /// Sets the social profiles.
    #[must_use]
    pub fn with_social(mut self, social: SocialProfiles) -> Self {
        self.social = social;
        self
    }

    /// Sets the Twitter handle used as the card creator.
    #[must_use]
    pub fn with_twitter_handle(mut self, handle: impl Into<String>) -> Self {
        self.seo.twitter_handle = handle.into();
        self
    }

    /// Rejects configurations the generators cannot work with.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending fields when the title
    /// is blank or the base URL is not an absolute URL.
    pub fn ensure_usable(&self) -> std::result::Result<(), ConfigError> {
        let mut fields = Vec::new();
        if self.title.trim().is_empty() {
            fields.push("title".to_string());
        }
        if !validate_url(&self.base_url) {
            fields.push("baseUrl".to_string());
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::new(format!("unusable fields: {}", fields.join(", "))).with_fields(fields))
        }
    }

    /// Runs the contact-field validators over the configured channels.
    ///
    /// Returns one message per problem; an empty list means every channel
    /// is well formed. Display phone numbers are checked with their spaces
    /// removed.
    #[must_use]
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if !validate_email(&self.contact.email) {
            problems.push(format!("Contact email is not valid: {}", self.contact.email));
        }

        let compact_phone: String = self.contact.phone.chars().filter(|c| !c.is_whitespace()).collect();
        if !validate_phone(&compact_phone) {
            problems.push(format!("Contact phone is not valid: {}", self.contact.phone));
        }

        if !validate_phone(&self.contact.whatsapp) {
            problems.push(format!("WhatsApp number is not valid: {}", self.contact.whatsapp));
        }

        for url in self.social.urls() {
            if !validate_url(url) {
                problems.push(format!("Social profile URL is not valid: {url}"));
            }
        }

        problems
    }

    /// Returns the `"%s | {title}"` page-title template.
    #[must_use]
    pub fn title_template(&self) -> String {
        format!("%s | {}", self.title)
    }

    /// Returns the configured social links, skipping unset profiles.
    #[must_use]
    pub fn social_links(&self) -> Vec<SocialLink> {
        let candidates = [
            ("Instagram", &self.social.instagram, "instagram", "Síguenos en Instagram"),
            ("Facebook", &self.social.facebook, "facebook", "Síguenos en Facebook"),
            ("LinkedIn", &self.social.linkedin, "linkedin", "Conéctate en LinkedIn"),
        ];

        candidates
            .into_iter()
            .filter_map(|(platform, url, icon, label)| {
                let url = url.as_deref().filter(|u| !u.is_empty())?;
                Some(SocialLink {
                    platform,
                    url: url.to_string(),
                    icon,
                    label,
                })
            })
            .collect()
    }

    /// Builds a `wa.me` link with a pre-filled, URL-encoded message.
    #[must_use]
    pub fn whatsapp_url(&self, message: &str) -> String {
        let digits: String = self.contact.whatsapp.chars().filter(char::is_ascii_digit).collect();
        let text = utf8_percent_encode(message, URI_COMPONENT);
        format!("https://wa.me/{digits}?text={text}")
    }

    /// Builds a `tel:` link for the display phone number.
    #[must_use]
    pub fn tel_url(&self) -> String {
        format!("tel:{}", self.contact.phone)
    }
}
