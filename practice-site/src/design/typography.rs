//! Typography rules of the design system and font-declaration linting.
//!
//! Declarations are pulled out of stylesheet text with regular expressions.
//! Blocks are `selector { declarations }` without nesting; anything the
//! patterns do not recognise is skipped rather than reported.
//!
//! Selector classification is substring based, so a class such as
//! `.client-card` counts as a body selector because it contains `li`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::report::ComplianceReport;

/// Report produced by [`validate_typography_consistency`].
pub type TypographyComplianceReport = ComplianceReport<TypographyUsage, TypographyViolation>;

/// Report produced by [`validate_tailwind_typography_config`].
pub type TailwindTypographyReport = ComplianceReport<TailwindFontFamily, TailwindFontViolation>;

/// Weight required on heading declarations that set one.
pub const HEADING_WEIGHT: &str = "900";

/// Named alternative to [`HEADING_WEIGHT`].
pub const HEADING_WEIGHT_NAME: &str = "extrabold";

/// Tags that must use the heading font.
pub const HEADING_SELECTORS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Tags that must use the body font.
pub const BODY_SELECTORS: [&str; 7] = ["p", "span", "div", "a", "li", "td", "th"];

static CSS_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^{}]+)\s*\{([^{}]*)\}").expect("rule pattern is valid"));
static FONT_FAMILY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"font-family\s*:\s*([^;]+)").expect("font-family pattern is valid"));
static FONT_WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"font-weight\s*:\s*([^;]+)").expect("font-weight pattern is valid"));
static TAILWIND_FONT_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fontFamily\s*:\s*\{([^}]+)\}").expect("fontFamily pattern is valid"));
static TAILWIND_FONT_DEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"]?([^'":\s]+)['"]?\s*:\s*\[([^\]]+)\]"#).expect("font definition pattern is valid")
});
static QUOTES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"['"]"#).expect("quote pattern is valid"));

/// Font families of the design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesignFont {
    /// Heading font.
    Montserrat,
    /// Body font.
    MoreSugar,
}

impl DesignFont {
    /// Family name as written in stylesheets.
    #[must_use]
    pub const fn family_name(self) -> &'static str {
        match self {
            Self::Montserrat => "Montserrat",
            Self::MoreSugar => "More Sugar",
        }
    }
}

/// Kind of element a selector styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// `h1`..`h6` and heading utility classes.
    Heading,
    /// Running text.
    Body,
}

impl ElementType {
    /// Font the element must use.
    #[must_use]
    pub const fn expected_font(self) -> DesignFont {
        match self {
            Self::Heading => DesignFont::Montserrat,
            Self::Body => DesignFont::MoreSugar,
        }
    }

    /// Lowercase name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `font-family` declaration found in a CSS block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDeclaration {
    /// Selector text, trimmed.
    pub selector: String,
    /// Declared value with quotes removed, e.g. `Montserrat, sans-serif`.
    pub font_family: String,
    /// Declared `font-weight`, if the block has one.
    pub font_weight: Option<String>,
}

/// A `fontFamily` entry of a Tailwind config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindFontFamily {
    /// Utility name, e.g. `heading`.
    pub name: String,
    /// Font stack with quotes removed.
    pub font_family: Vec<String>,
}

/// A declaration that follows the typography rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyUsage {
    /// Selector text.
    pub selector: String,
    /// Declared family.
    pub font_family: String,
    /// Classified element type.
    pub element_type: ElementType,
}

/// A declaration that breaks the typography rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyViolation {
    /// Selector text.
    pub selector: String,
    /// Declared family.
    pub font_family: String,
    /// Classified element type.
    pub element_type: ElementType,
    /// Expected versus actual font.
    pub reason: String,
}

/// A Tailwind font entry that breaks the typography rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindFontViolation {
    /// Utility name.
    pub name: String,
    /// Font stack.
    pub font_family: Vec<String>,
    /// Expected versus actual font.
    pub reason: String,
}

fn strip_quotes(value: &str) -> String {
    QUOTES_RE.replace_all(value, "").into_owned()
}

/// Extracts every block that declares a `font-family`.
pub fn extract_font_families_from_css(css: &str) -> Vec<FontDeclaration> {
    CSS_RULE_RE
        .captures_iter(css)
        .filter_map(|caps| {
            let selector = caps.get(1)?.as_str().trim();
            let declarations = caps.get(2)?.as_str();
            let family = FONT_FAMILY_RE.captures(declarations)?.get(1)?.as_str();
            let font_weight = FONT_WEIGHT_RE
                .captures(declarations)
                .and_then(|weight| weight.get(1))
                .map(|weight| weight.as_str().trim().to_string())
                .filter(|weight| !weight.is_empty());

            Some(FontDeclaration {
                selector: selector.to_string(),
                font_family: strip_quotes(family.trim()),
                font_weight,
            })
        })
        .collect()
}

/// Extracts the entries of the first `fontFamily: { ... }` block.
pub fn extract_font_families_from_tailwind_config(config: &str) -> Vec<TailwindFontFamily> {
    let Some(block) = TAILWIND_FONT_BLOCK_RE
        .captures(config)
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };

    TAILWIND_FONT_DEF_RE
        .captures_iter(block.as_str())
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_string();
            let font_family = caps
                .get(2)?
                .as_str()
                .split(',')
                .map(|font| strip_quotes(font.trim()))
                .filter(|font| !font.is_empty())
                .collect();
            Some(TailwindFontFamily { name, font_family })
        })
        .collect()
}

/// Classifies a selector, or returns `None` when it is neither a heading
/// nor a body selector.
///
/// Class markers (`font-heading`, `.heading`, `font-body`, `.body`) win over
/// tag names; tag names are matched as case-insensitive substrings.
pub fn element_type_from_selector(selector: &str) -> Option<ElementType> {
    let clean = selector.trim().to_lowercase();

    if clean.contains("font-heading") || clean.contains(".heading") {
        return Some(ElementType::Heading);
    }

    if clean.contains("font-body") || clean.contains(".body") {
        return Some(ElementType::Body);
    }

    if HEADING_SELECTORS.iter().any(|tag| clean.contains(tag)) {
        return Some(ElementType::Heading);
    }

    if BODY_SELECTORS.iter().any(|tag| clean.contains(tag)) {
        return Some(ElementType::Body);
    }

    None
}

/// Checks a family (and, for headings, a weight) against the rules.
///
/// The expected family name only has to appear somewhere in `font_family`,
/// ignoring case. Headings that declare a weight must use `900` or
/// `extrabold`; body weights are not checked.
pub fn is_valid_typography_for_element(
    element_type: ElementType,
    font_family: &str,
    font_weight: Option<&str>,
) -> bool {
    let expected = element_type.expected_font().family_name().to_lowercase();
    let font_matches = font_family.to_lowercase().contains(&expected);

    match (element_type, font_weight) {
        (ElementType::Heading, Some(weight)) => {
            font_matches && (weight == HEADING_WEIGHT || weight == HEADING_WEIGHT_NAME)
        }
        _ => font_matches,
    }
}

/// Checks every recognised `font-family` declaration in a stylesheet.
///
/// Selectors that are neither headings nor body text are skipped.
pub fn validate_typography_consistency(css: &str) -> TypographyComplianceReport {
    let declarations = extract_font_families_from_css(css);

    let report: TypographyComplianceReport = declarations
        .into_iter()
        .filter_map(|decl| {
            let element_type = element_type_from_selector(&decl.selector)?;
            let valid = is_valid_typography_for_element(
                element_type,
                &decl.font_family,
                decl.font_weight.as_deref(),
            );

            Some(if valid {
                Ok(TypographyUsage {
                    selector: decl.selector,
                    font_family: decl.font_family,
                    element_type,
                })
            } else {
                let reason = format!(
                    "Expected {} for {} elements, got {}",
                    element_type.expected_font().family_name(),
                    element_type,
                    decl.font_family
                );
                Err(TypographyViolation {
                    selector: decl.selector,
                    font_family: decl.font_family,
                    element_type,
                    reason,
                })
            })
        })
        .collect();

    debug!(
        valid = report.valid.len(),
        invalid = report.invalid.len(),
        "Checked stylesheet typography"
    );
    report
}

/// Checks the `fontFamily` entries of a Tailwind config.
///
/// Entries named after headings (`heading`, `montserrat`) must include
/// Montserrat, entries named after body text (`body`, `more-sugar`) must
/// include More Sugar; any other entry passes.
pub fn validate_tailwind_typography_config(config: &str) -> TailwindTypographyReport {
    let report: TailwindTypographyReport = extract_font_families_from_tailwind_config(config)
        .into_iter()
        .map(|entry| {
            let required = if entry.name.contains("heading") || entry.name.contains("montserrat") {
                Some((DesignFont::Montserrat, "Heading"))
            } else if entry.name.contains("body") || entry.name.contains("more-sugar") {
                Some((DesignFont::MoreSugar, "Body"))
            } else {
                None
            };

            let Some((font, role)) = required else {
                return Ok(entry);
            };

            let needle = font.family_name().to_lowercase();
            if entry.font_family.iter().any(|f| f.to_lowercase().contains(&needle)) {
                Ok(entry)
            } else {
                let reason = format!(
                    "{role} font should include {}, got {}",
                    font.family_name(),
                    entry.font_family.join(", ")
                );
                Err(TailwindFontViolation {
                    name: entry.name,
                    font_family: entry.font_family,
                    reason,
                })
            }
        })
        .collect();

    debug!(
        valid = report.valid.len(),
        invalid = report.invalid.len(),
        "Checked Tailwind typography config"
    );
    report
}
