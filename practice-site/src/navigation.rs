//! Site navigation: header links, active-link detection and footer sections.

use serde::Serialize;

/// A static header or footer link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    /// Target path.
    pub href: &'static str,
    /// Visible text.
    pub label: &'static str,
    /// Accessible label.
    pub aria_label: &'static str,
}

/// Header links, in display order.
pub const NAVIGATION_LINKS: [NavLink; 3] = [
    NavLink {
        href: "/",
        label: "Inicio",
        aria_label: "Ir a la página de inicio",
    },
    NavLink {
        href: "/servicios",
        label: "Servicios",
        aria_label: "Ver nuestros servicios médicos",
    },
    NavLink {
        href: "/recursos",
        label: "Recursos",
        aria_label: "Acceder a recursos y artículos",
    },
];

/// A footer link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    /// Target path, possibly with an anchor.
    pub href: &'static str,
    /// Visible text.
    pub label: &'static str,
}

/// A titled group of footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterSection {
    /// Section heading.
    pub title: &'static str,
    /// Links in display order.
    pub links: &'static [FooterLink],
}

/// Footer sections, in display order.
pub const FOOTER_SECTIONS: [FooterSection; 2] = [
    FooterSection {
        title: "Navegación",
        links: &[
            FooterLink { href: "/", label: "Inicio" },
            FooterLink { href: "/servicios", label: "Servicios" },
            FooterLink { href: "/recursos", label: "Recursos" },
        ],
    },
    FooterSection {
        title: "Servicios",
        links: &[
            FooterLink {
                href: "/servicios#consulta-geriatrica",
                label: "Consulta Geriátrica",
            },
            FooterLink {
                href: "/servicios#valoracion-cognitiva",
                label: "Valoración Cognitiva",
            },
            FooterLink {
                href: "/servicios#seguimiento-cronico",
                label: "Seguimiento Crónico",
            },
        ],
    },
];

/// Returns `true` if `href` should be highlighted on `current_path`.
///
/// The root link matches only the root path; any other link matches every
/// path it prefixes, so `/recursos` is active on `/recursos/mi-articulo`.
pub fn is_active_link(href: &str, current_path: &str) -> bool {
    if href == "/" {
        current_path == "/"
    } else {
        current_path.starts_with(href)
    }
}

/// A header link with its active state for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNavLink {
    /// The static link.
    #[serde(flatten)]
    pub link: NavLink,
    /// Whether the link points at the current section.
    pub active: bool,
}

/// Resolves the header links for `current_path`.
pub fn resolve_navigation(current_path: &str) -> Vec<ResolvedNavLink> {
    NAVIGATION_LINKS
        .iter()
        .map(|link| ResolvedNavLink {
            link: *link,
            active: is_active_link(link.href, current_path),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_link_only_matches_root() {
        assert!(is_active_link("/", "/"));
        assert!(!is_active_link("/", "/servicios"));
        assert!(!is_active_link("/", ""));
    }

    #[test]
    fn test_section_link_matches_prefix() {
        assert!(is_active_link("/servicios", "/servicios"));
        assert!(is_active_link("/recursos", "/recursos/mi-articulo"));
        assert!(!is_active_link("/servicios", "/recursos"));
        assert!(!is_active_link("/recursos", "/"));
    }

    #[test]
    fn test_prefix_match_is_plain_string_prefix() {
        assert!(is_active_link("/servicios", "/servicios/consulta"));
        assert!(is_active_link("/servicios", "/servicios-extra"));
        assert!(!is_active_link("/servicios", "/ser"));
        assert!(is_active_link("", "/"));
    }

    #[test]
    fn test_resolve_navigation() {
        let links = resolve_navigation("/recursos/mi-articulo");
        let active: Vec<(&str, bool)> = links.iter().map(|l| (l.link.label, l.active)).collect();
        assert_eq!(
            active,
            vec![("Inicio", false), ("Servicios", false), ("Recursos", true)]
        );

        let home = resolve_navigation("/");
        assert!(home[0].active);
        assert_eq!(home.iter().filter(|l| l.active).count(), 1);
    }

    #[test]
    fn test_resolved_link_serializes_flat() {
        let links = resolve_navigation("/servicios");
        let json = serde_json::to_value(&links[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "href": "/servicios",
                "label": "Servicios",
                "ariaLabel": "Ver nuestros servicios médicos",
                "active": true,
            })
        );
    }

    #[test]
    fn test_footer_sections() {
        assert_eq!(FOOTER_SECTIONS[0].title, "Navegación");
        assert_eq!(FOOTER_SECTIONS[0].links.len(), NAVIGATION_LINKS.len());
        assert!(FOOTER_SECTIONS[1]
            .links
            .iter()
            .all(|l| l.href.starts_with("/servicios#")));
    }
}
