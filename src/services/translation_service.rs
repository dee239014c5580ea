// ============================================================================
// TRANSLATION SERVICE - Resolución de claves traducidas
// ============================================================================
// Orden de resolución: idioma activo -> idioma de fallback -> valor vacío.
// Nunca falla: una clave ausente se muestra como texto vacío.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use crate::models::locale::Locale;
use crate::models::translation::{TranslationTable, TranslationValue};

/// Tablas incrustadas en el binario
pub fn embedded_source(locale: Locale) -> &'static str {
    match locale {
        Locale::En => include_str!("../../locales/en.json"),
        Locale::Ar => include_str!("../../locales/ar.json"),
        Locale::Fr => include_str!("../../locales/fr.json"),
        Locale::Es => include_str!("../../locales/es.json"),
        Locale::Pt => include_str!("../../locales/pt.json"),
    }
}

type SourceFn = fn(Locale) -> &'static str;

pub struct TranslationService {
    fallback: Locale,
    source: SourceFn,
    tables: RefCell<HashMap<Locale, Rc<TranslationTable>>>,
    failed: RefCell<Vec<Locale>>,
}

impl TranslationService {
    pub fn new(fallback: Locale) -> Self {
        Self::with_source(fallback, embedded_source)
    }

    /// Servicio con otra fuente de tablas (tests)
    pub fn with_source(fallback: Locale, source: SourceFn) -> Self {
        Self {
            fallback,
            source,
            tables: RefCell::new(HashMap::new()),
            failed: RefCell::new(Vec::new()),
        }
    }

    /// Parsear y cachear la tabla de un idioma
    pub fn load(&self, locale: Locale) -> Result<(), String> {
        if self.tables.borrow().contains_key(&locale) {
            return Ok(());
        }
        match TranslationTable::parse((self.source)(locale)) {
            Ok(table) => {
                log::debug!("📚 [I18N] Tabla '{}' cargada", locale);
                self.tables.borrow_mut().insert(locale, Rc::new(table));
                Ok(())
            }
            Err(e) => {
                let mut failed = self.failed.borrow_mut();
                if !failed.contains(&locale) {
                    failed.push(locale);
                }
                Err(format!("[{}] {}", locale, e))
            }
        }
    }

    /// Cargar idioma activo + fallback. Devuelve `is_ready`.
    pub fn ensure_ready(&self, locale: Locale) -> bool {
        for target in [locale, self.fallback] {
            if let Err(e) = self.load(target) {
                log::error!("❌ [I18N] {}", e);
            }
        }
        self.is_ready(locale)
    }

    /// Lista para pintar: ambas tablas cargadas o con error definitivo
    pub fn is_ready(&self, locale: Locale) -> bool {
        [locale, self.fallback].iter().all(|target| {
            self.tables.borrow().contains_key(target) || self.failed.borrow().contains(target)
        })
    }

    fn table(&self, locale: Locale) -> Option<Rc<TranslationTable>> {
        if let Some(table) = self.tables.borrow().get(&locale) {
            return Some(table.clone());
        }
        if self.failed.borrow().contains(&locale) {
            return None;
        }
        if let Err(e) = self.load(locale) {
            log::error!("❌ [I18N] {}", e);
        }
        self.tables.borrow().get(&locale).cloned()
    }

    /// Clave presente en la tabla del idioma (sin fallback)
    pub fn has_key(&self, key_path: &str, locale: Locale) -> bool {
        self.table(locale).map(|t| t.contains(key_path)).unwrap_or(false)
    }

    /// Resolver una clave: texto o subárbol estructurado
    pub fn resolve(&self, key_path: &str, locale: Locale) -> TranslationValue {
        if let Some(value) = self.table(locale).and_then(|t| t.lookup(key_path).map(TranslationValue::from)) {
            return value;
        }
        if locale != self.fallback {
            if let Some(value) = self.table(self.fallback).and_then(|t| t.lookup(key_path).map(TranslationValue::from)) {
                log::debug!("🔁 [I18N] '{}' ausente en '{}', usando '{}'", key_path, locale, self.fallback);
                return value;
            }
        }
        log::debug!("⚠️ [I18N] Clave sin traducción: '{}'", key_path);
        TranslationValue::Empty
    }

    pub fn text(&self, key_path: &str, locale: Locale) -> String {
        self.resolve(key_path, locale).as_text()
    }

    pub fn entries(&self, key_path: &str, locale: Locale) -> Vec<(String, TranslationValue)> {
        self.resolve(key_path, locale).entries()
    }

    pub fn list(&self, key_path: &str, locale: Locale) -> Vec<TranslationValue> {
        self.resolve(key_path, locale).items()
    }

    /// Rutas hoja del idioma de fallback (referencia de completitud)
    pub fn reference_paths(&self) -> Vec<String> {
        self.table(self.fallback).map(|t| t.leaf_paths()).unwrap_or_default()
    }
}

impl Default for TranslationService {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_source(locale: Locale) -> &'static str {
        match locale {
            Locale::En => r#"{
                "hero": { "title": "Premium Timber", "subtitle": "From the forest" },
                "products": { "items": { "decking": { "title": "Decking" }, "lumber": { "title": "Lumber" } } },
                "only": { "english": "EN only" }
            }"#,
            Locale::Fr => r#"{ "hero": { "title": "Bois Premium", "subtitle": "" } }"#,
            Locale::Es => "{ not json",
            _ => "{}",
        }
    }

    fn sparse() -> TranslationService {
        TranslationService::with_source(Locale::En, sparse_source)
    }

    #[test]
    fn active_locale_wins() {
        assert_eq!(sparse().text("hero.title", Locale::Fr), "Bois Premium");
    }

    #[test]
    fn missing_key_falls_back_to_default_locale() {
        assert_eq!(sparse().text("only.english", Locale::Fr), "EN only");
    }

    #[test]
    fn empty_string_is_a_valid_translation() {
        assert_eq!(sparse().text("hero.subtitle", Locale::Fr), "");
    }

    #[test]
    fn missing_everywhere_resolves_to_empty() {
        let service = sparse();
        assert_eq!(service.resolve("nope.nothing", Locale::Pt), TranslationValue::Empty);
        assert_eq!(service.text("nope.nothing", Locale::Pt), "");
        assert!(service.entries("nope.list", Locale::Pt).is_empty());
        assert!(service.list("nope.list", Locale::Pt).is_empty());
    }

    #[test]
    fn structured_lookup_on_leaf_gives_empty_structure() {
        assert!(sparse().entries("hero.title", Locale::En).is_empty());
    }

    #[test]
    fn broken_table_degrades_to_fallback() {
        let service = sparse();
        assert_eq!(service.text("hero.title", Locale::Es), "Premium Timber");
        assert!(service.ensure_ready(Locale::Es));
    }

    #[test]
    fn subtrees_keep_authoring_order() {
        let keys: Vec<String> = sparse()
            .entries("products.items", Locale::Ar)
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["decking", "lumber"]);
    }

    #[test]
    fn readiness_requires_active_and_fallback_tables() {
        let service = sparse();
        assert!(!service.is_ready(Locale::Fr));
        service.load(Locale::Fr).expect("fr");
        assert!(!service.is_ready(Locale::Fr));
        assert!(service.ensure_ready(Locale::Fr));
    }

    // --- Tablas reales incrustadas ---

    #[test]
    fn embedded_tables_parse() {
        let service = TranslationService::default();
        for locale in Locale::ALL {
            service.load(locale).unwrap_or_else(|e| panic!("{}", e));
        }
    }

    #[test]
    fn every_default_key_exists_in_every_locale() {
        let service = TranslationService::default();
        let paths = service.reference_paths();
        assert!(paths.len() > 50, "reference table looks truncated");
        for locale in Locale::ALL {
            let missing: Vec<&String> = paths.iter().filter(|p| !service.has_key(p, locale)).collect();
            assert!(missing.is_empty(), "{} is missing {:?}", locale, missing);
        }
    }

    #[test]
    fn every_default_key_resolves_in_every_locale() {
        let service = TranslationService::default();
        for path in service.reference_paths() {
            for locale in Locale::ALL {
                // Hojas siempre resuelven a texto (posiblemente vacío), nunca a estructura
                assert!(matches!(service.resolve(&path, locale), TranslationValue::Text(_)), "{} {}", locale, path);
            }
        }
    }

    #[test]
    fn faq_entries_are_ordered_records() {
        let service = TranslationService::default();
        for locale in Locale::ALL {
            let faq = service.entries("faq.questions", locale);
            assert!(faq.len() >= 5, "{}", locale);
            for (_, entry) in faq {
                assert!(!entry.field("question").is_empty());
                assert!(!entry.field("answer").is_empty());
            }
        }
    }
}
