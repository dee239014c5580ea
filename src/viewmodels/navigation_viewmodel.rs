// ============================================================================
// NAVIGATION VIEWMODEL - Enlaces del navbar y scroll suave a anclas
// ============================================================================

use crate::models::locale::Locale;
use crate::services::translation_service::TranslationService;

/// Secciones enlazadas en el navbar: (clave de traducción, ancla)
pub const NAV_SECTIONS: [(&str, &str); 9] = [
    ("home", "home"),
    ("products", "products"),
    ("species", "species"),
    ("process", "process"),
    ("whyUs", "why-us"),
    ("compliance", "compliance-summary"),
    ("certifications", "certifications"),
    ("faq", "faq"),
    ("catalog", "catalog"),
];

/// Ancla del formulario de presupuesto
pub const QUOTE_ANCHOR: &str = "quote";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Ancla en la página actual (scroll suave); `None` si navega a otra página
    pub anchor: Option<String>,
}

impl NavLink {
    /// Enlace a una sección de la página principal
    pub fn section(label: String, anchor: &str, on_home: bool) -> Self {
        if on_home {
            Self { label, href: format!("#{}", anchor), anchor: Some(anchor.to_string()) }
        } else {
            Self { label, href: format!("/#{}", anchor), anchor: None }
        }
    }

    pub fn page(label: String, href: &str) -> Self {
        Self { label, href: href.to_string(), anchor: None }
    }
}

/// Enlaces del navbar. En la página de cumplimiento se omite la sección
/// de resumen de cumplimiento.
pub fn nav_links(translations: &TranslationService, locale: Locale, on_home: bool) -> Vec<NavLink> {
    NAV_SECTIONS
        .iter()
        .filter(|(_, anchor)| on_home || *anchor != "compliance-summary")
        .map(|(key, anchor)| {
            NavLink::section(translations.text(&format!("nav.{}", key), locale), anchor, on_home)
        })
        .collect()
}

/// Destino del scroll: posición del elemento en el documento menos la altura
/// del navbar fijo y un margen visual. Nunca negativo.
pub fn scroll_target_offset(element_document_top: f64, navbar_height: f64, margin: f64) -> f64 {
    (element_document_top - navbar_height - margin).max(0.0)
}

/// `#quote` / `/#quote` -> `quote` cuando el enlace apunta a la página actual
pub fn in_page_anchor(href: &str, on_home: bool) -> Option<&str> {
    let anchor = match href.strip_prefix('#') {
        Some(anchor) => anchor,
        None if on_home => href.strip_prefix("/#")?,
        None => return None,
    };
    if anchor.is_empty() {
        None
    } else {
        Some(anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_subtracts_navbar_and_margin() {
        assert_eq!(scroll_target_offset(1200.0, 80.0, 20.0), 1100.0);
        assert_eq!(scroll_target_offset(0.0, 80.0, 20.0), 0.0);
        assert_eq!(scroll_target_offset(90.0, 80.0, 20.0), 0.0);
    }

    #[test]
    fn home_links_are_in_page_anchors() {
        let translations = TranslationService::default();
        let links = nav_links(&translations, Locale::En, true);
        assert_eq!(links.len(), NAV_SECTIONS.len());
        assert_eq!(links[0].href, "#home");
        assert_eq!(links[0].anchor.as_deref(), Some("home"));
        assert!(links.iter().all(|l| !l.label.is_empty()));
    }

    #[test]
    fn compliance_page_links_go_back_home() {
        let translations = TranslationService::default();
        let links = nav_links(&translations, Locale::Fr, false);
        assert_eq!(links.len(), NAV_SECTIONS.len() - 1);
        assert!(links.iter().all(|l| l.href.starts_with("/#") && l.anchor.is_none()));
        assert!(!links.iter().any(|l| l.href == "/#compliance-summary"));
    }

    #[test]
    fn in_page_anchor_detection() {
        assert_eq!(in_page_anchor("#faq", true), Some("faq"));
        assert_eq!(in_page_anchor("/#faq", true), Some("faq"));
        assert_eq!(in_page_anchor("/#faq", false), None);
        assert_eq!(in_page_anchor("#", true), None);
        assert_eq!(in_page_anchor("/compliance", true), None);
    }
}
