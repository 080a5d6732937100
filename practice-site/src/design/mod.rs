//! Design-system compliance checks for stylesheets and Tailwind configs.
//!
//! The palette and typography tables are fixed. Every check is a
//! best-effort lint over raw text: malformed input yields empty results.

mod palette;
mod report;
mod typography;

pub use palette::{
    extract_colors_from_css, extract_colors_from_tailwind_config, is_valid_design_system_color,
    normalize_hex_color, resolve_color_name, valid_design_system_colors,
    validate_colors_against_design_system, ColorComplianceReport, DesignColor,
    GERONTOLOGIST_ALIASES, PRIMARY_PALETTE,
};
pub use report::ComplianceReport;
pub use typography::{
    element_type_from_selector, extract_font_families_from_css,
    extract_font_families_from_tailwind_config, is_valid_typography_for_element,
    validate_tailwind_typography_config, validate_typography_consistency, DesignFont,
    ElementType, FontDeclaration, TailwindFontFamily, TailwindFontViolation,
    TailwindTypographyReport, TypographyComplianceReport, TypographyUsage, TypographyViolation,
    BODY_SELECTORS, HEADING_SELECTORS, HEADING_WEIGHT, HEADING_WEIGHT_NAME,
};
