//! Builders for test content.

use chrono::{DateTime, TimeZone, Utc};

use crate::content::ContentRecord;

const DEFAULT_BODY: &str = "## Envejecer con salud\n\n\
    El envejecimiento activo combina actividad física regular, una alimentación \
    equilibrada y vínculos sociales significativos. En consulta revisamos la \
    medicación, el sueño, la memoria y el estado de ánimo para construir un plan \
    de cuidado adaptado a cada persona y a su familia, con metas realistas y \
    seguimiento periódico. Pequeños cambios sostenidos en el tiempo, como caminar \
    cada día o compartir una comida en familia, tienen un efecto notable sobre la \
    calidad de vida.";

/// Builds a [`ContentRecord`] that passes every validation by default.
///
/// Each setter overrides one field, so a test states only what it breaks.
#[derive(Debug, Clone)]
pub struct ContentRecordFixture {
    record: ContentRecord,
}

impl ContentRecordFixture {
    /// A valid, published geriatrics post dated 2024-01-15.
    #[must_use]
    pub fn new() -> Self {
        Self {
            record: ContentRecord {
                slug: "envejecimiento-activo".to_string(),
                title: "Envejecimiento activo".to_string(),
                description: "Claves para mantener la autonomía en la vejez".to_string(),
                body: DEFAULT_BODY.to_string(),
                publish_date: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).single(),
                featured_image: "/images/blog/envejecimiento-activo.jpg".to_string(),
                category: "geriatria".to_string(),
                tags: Some(vec!["envejecimiento".to_string(), "autonomía".to_string()]),
                author: "Dr. [Name]".to_string(),
                draft: false,
            },
        }
    }

    /// Sets the slug.
    #[must_use]
    pub fn slug(mut self, slug: &str) -> Self {
        self.record.slug = slug.to_string();
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.record.title = title.to_string();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        self.record.description = description.to_string();
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: &str) -> Self {
        self.record.body = body.to_string();
        self
    }

    /// Sets the featured image.
    #[must_use]
    pub fn featured_image(mut self, image: &str) -> Self {
        self.record.featured_image = image.to_string();
        self
    }

    /// Sets the raw category.
    #[must_use]
    pub fn category(mut self, category: &str) -> Self {
        self.record.category = category.to_string();
        self
    }

    /// Sets the author.
    #[must_use]
    pub fn author(mut self, author: &str) -> Self {
        self.record.author = author.to_string();
        self
    }

    /// Sets the publication date.
    #[must_use]
    pub fn publish_date(mut self, date: DateTime<Utc>) -> Self {
        self.record.publish_date = Some(date);
        self
    }

    /// Clears the publication date.
    #[must_use]
    pub fn no_publish_date(mut self) -> Self {
        self.record.publish_date = None;
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.record.tags = Some(tags.iter().map(|t| (*t).to_string()).collect());
        self
    }

    /// Removes the tag list.
    #[must_use]
    pub fn no_tags(mut self) -> Self {
        self.record.tags = None;
        self
    }

    /// Sets the draft flag.
    #[must_use]
    pub fn draft(mut self, draft: bool) -> Self {
        self.record.draft = draft;
        self
    }

    /// Returns the record.
    #[must_use]
    pub fn build(self) -> ContentRecord {
        self.record
    }
}

impl Default for ContentRecordFixture {
    fn default() -> Self {
        Self::new()
    }
}
