//! Text helpers for post listings: excerpts, reading time and dates.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use regex::Regex;

/// Average reading speed used for reading-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Default excerpt length, in characters.
pub const DEFAULT_EXCERPT_LEN: usize = 150;

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#{1,6}\s+").expect("header pattern is valid"));
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern is valid"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\(.*?\)").expect("link pattern is valid"));
static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
static NEWLINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").expect("newline pattern is valid"));

/// Counts whitespace-delimited words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimates reading time in whole minutes, never less than one.
pub fn calculate_reading_time(text: &str) -> usize {
    count_words(text).div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Builds a plain-text preview of a markdown body.
///
/// Markdown headers, emphasis, links and HTML tags are stripped. Text longer
/// than `max_len` characters is cut at the last space inside the limit and
/// suffixed with `...`.
pub fn generate_excerpt(content: &str, max_len: usize) -> String {
    let plain = HEADER_RE.replace_all(content, "");
    let plain = BOLD_RE.replace_all(&plain, "$1");
    let plain = ITALIC_RE.replace_all(&plain, "$1");
    let plain = LINK_RE.replace_all(&plain, "$1");
    let plain = HTML_TAG_RE.replace_all(&plain, "");
    let plain = NEWLINES_RE.replace_all(&plain, " ");
    let plain = plain.trim();

    if plain.chars().count() <= max_len {
        return plain.to_string();
    }

    let truncated: String = plain.chars().take(max_len).collect();
    match truncated.rfind(' ') {
        Some(idx) if idx > 0 => format!("{}...", &truncated[..idx]),
        _ => format!("{truncated}..."),
    }
}

/// Formats a date the way listings show it, e.g. `15 de enero de 2024`.
pub fn format_date(date: DateTime<Utc>) -> String {
    let month = MONTHS_ES[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

/// Formats a date as an ISO 8601 timestamp with milliseconds, e.g.
/// `2024-01-15T00:00:00.000Z`.
pub fn format_date_iso(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reading_time() {
        assert_eq!(calculate_reading_time("This is a short text."), 1);
        assert_eq!(calculate_reading_time(&"word ".repeat(400)), 2);
        assert_eq!(calculate_reading_time(&"word ".repeat(401)), 3);
        assert_eq!(calculate_reading_time(""), 1);
    }

    #[test]
    fn test_count_words_ignores_extra_whitespace() {
        assert_eq!(count_words("  uno\tdos\n\ntres  "), 3);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_excerpt_short_text_is_untouched() {
        assert_eq!(generate_excerpt("Texto breve.", 150), "Texto breve.");
    }

    #[test]
    fn test_excerpt_truncates_at_word_boundary() {
        let long_text = "This is a very long text that should be truncated to create an excerpt. \
            It contains multiple sentences and should be cut off at an appropriate point.";
        let excerpt = generate_excerpt(long_text, 50);
        assert!(excerpt.len() <= 53);
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt, "This is a very long text that should be truncated...");
    }

    #[test]
    fn test_excerpt_strips_markdown() {
        let body = "## Título\n\nTexto con **negrita**, *cursiva* y un [enlace](https://example.com).\n<br/>Fin";
        assert_eq!(
            generate_excerpt(body, DEFAULT_EXCERPT_LEN),
            "Título Texto con negrita, cursiva y un enlace. Fin"
        );
    }

    #[test]
    fn test_excerpt_without_spaces() {
        let excerpt = generate_excerpt(&"a".repeat(20), 10);
        assert_eq!(excerpt, format!("{}...", "a".repeat(10)));
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(format_date(date), "15 de enero de 2024");
        assert_eq!(format_date_iso(date), "2024-01-15T00:00:00.000Z");
    }
}
