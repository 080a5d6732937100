//! Colour palette of the design system and hex-colour linting.
//!
//! Extraction is a regex scan for `#RGB` / `#RRGGBB` tokens. It is a
//! best-effort lint over stylesheet-like text, not a CSS parser.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::report::ComplianceReport;

/// Report produced by [`validate_colors_against_design_system`].
pub type ColorComplianceReport = ComplianceReport<String, String>;

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})(?-u:\b)").expect("hex colour pattern is valid")
});

/// The canonical colours of the design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesignColor {
    /// Dark green, used for headings and primary buttons.
    PrimaryDark,
    /// Accent green.
    PrimaryMain,
    /// Light green for backgrounds.
    PrimaryLight,
    /// White.
    White,
}

impl DesignColor {
    /// Every canonical colour.
    pub const ALL: [Self; 4] = [Self::PrimaryDark, Self::PrimaryMain, Self::PrimaryLight, Self::White];

    /// Uppercase `#RRGGBB` value.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::PrimaryDark => "#136038",
            Self::PrimaryMain => "#03A63C",
            Self::PrimaryLight => "#99EBB9",
            Self::White => "#FFFFFF",
        }
    }
}

/// Names of the `primary` palette group.
pub const PRIMARY_PALETTE: [(&str, DesignColor); 3] = [
    ("dark", DesignColor::PrimaryDark),
    ("main", DesignColor::PrimaryMain),
    ("light", DesignColor::PrimaryLight),
];

/// Semantic aliases; each resolves to a canonical colour.
pub const GERONTOLOGIST_ALIASES: [(&str, DesignColor); 4] = [
    ("dark-green", DesignColor::PrimaryDark),
    ("accent-green", DesignColor::PrimaryMain),
    ("light-green", DesignColor::PrimaryLight),
    ("white", DesignColor::White),
];

/// Resolves a palette name (`dark`, `accent-green`, `white`, ...) to its colour.
pub fn resolve_color_name(name: &str) -> Option<DesignColor> {
    PRIMARY_PALETTE
        .iter()
        .chain(GERONTOLOGIST_ALIASES.iter())
        .find(|(alias, _)| *alias == name)
        .map(|(_, color)| *color)
}

/// Returns the distinct uppercase hex values of the palette, aliases
/// de-duplicated.
pub fn valid_design_system_colors() -> Vec<&'static str> {
    let mut colors: Vec<&'static str> = PRIMARY_PALETTE.iter().map(|(_, c)| c.hex()).collect();
    colors.push(DesignColor::White.hex());
    for (_, color) in GERONTOLOGIST_ALIASES {
        if !colors.contains(&color.hex()) {
            colors.push(color.hex());
        }
    }
    colors
}

/// Extracts hex colours from CSS text, uppercased, in document order.
///
/// The token boundary is ASCII-only, so a colour directly followed by a
/// non-ASCII letter (`#abcé`) still matches.
pub fn extract_colors_from_css(css: &str) -> Vec<String> {
    extract_hex_colors(css)
}

/// Extracts hex colours from a Tailwind config, uppercased, in document order.
pub fn extract_colors_from_tailwind_config(config: &str) -> Vec<String> {
    extract_hex_colors(config)
}

fn extract_hex_colors(text: &str) -> Vec<String> {
    HEX_COLOR_RE
        .find_iter(text)
        .map(|m| m.as_str().to_uppercase())
        .collect()
}

/// Normalizes a hex colour to uppercase `#RRGGBB`.
///
/// Three-digit values are expanded (`#abc` becomes `#AABBCC`). Values of any
/// other length are returned unchanged so they are later rejected.
pub fn normalize_hex_color(color: &str) -> String {
    let clean = color.replacen('#', "", 1).to_uppercase();
    match clean.chars().count() {
        3 => {
            let doubled: String = clean.chars().flat_map(|c| [c, c]).collect();
            format!("#{doubled}")
        }
        6 => format!("#{clean}"),
        _ => color.to_string(),
    }
}

/// Returns `true` if `color` is one of the palette values, ignoring case.
pub fn is_valid_design_system_color(color: &str) -> bool {
    let upper = color.to_uppercase();
    valid_design_system_colors().iter().any(|c| *c == upper)
}

/// Normalizes each colour and splits them into palette and off-palette.
pub fn validate_colors_against_design_system<S: AsRef<str>>(colors: &[S]) -> ColorComplianceReport {
    let report: ColorComplianceReport = colors
        .iter()
        .map(|color| {
            let normalized = normalize_hex_color(color.as_ref());
            if is_valid_design_system_color(&normalized) {
                Ok(normalized)
            } else {
                Err(normalized)
            }
        })
        .collect();

    debug!(
        valid = report.valid.len(),
        invalid = report.invalid.len(),
        "Checked colours against design system"
    );
    report
}
