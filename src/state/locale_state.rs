// ============================================================================
// LOCALE STATE - Idioma activo del sitio (único propietario)
// ============================================================================
// - El almacenamiento persistente se lee UNA vez al arrancar.
// - LocaleState es el único que escribe la preferencia.
// - Un cambio solicitado desde un subscriber se encola y se procesa cuando
//   termina la notificación actual (sin notificaciones intercaladas).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use crate::models::locale::Locale;
use crate::services::document_service::DocumentHost;
use crate::services::storage_service::KeyValueStore;
use crate::state::reactivity::{SubscriptionId, Subscribers};

struct LocaleInner {
    active: Cell<Locale>,
    storage_key: String,
    storage: Box<dyn KeyValueStore>,
    document: Box<dyn DocumentHost>,
    subscribers: Subscribers<Locale>,
    broadcasting: Cell<bool>,
    pending: RefCell<VecDeque<Locale>>,
}

#[derive(Clone)]
pub struct LocaleState {
    inner: Rc<LocaleInner>,
}

impl LocaleState {
    /// Leer el idioma persistido (o `default`) y aplicarlo al documento
    pub fn load(
        storage: Box<dyn KeyValueStore>,
        document: Box<dyn DocumentHost>,
        storage_key: &str,
        default: Locale,
    ) -> Self {
        let active = match storage.get(storage_key) {
            Ok(Some(code)) => Locale::from_code(&code).unwrap_or_else(|| {
                log::debug!("⚠️ [LOCALE] Idioma persistido no soportado: '{}'", code);
                default
            }),
            Ok(None) => default,
            Err(e) => {
                log::warn!("⚠️ [LOCALE] {}", e);
                default
            }
        };

        if let Err(e) = document.apply_locale(active) {
            log::warn!("⚠️ [LOCALE] {}", e);
        }
        log::info!("🌐 [LOCALE] Idioma inicial: {}", active);

        Self {
            inner: Rc::new(LocaleInner {
                active: Cell::new(active),
                storage_key: storage_key.to_string(),
                storage,
                document,
                subscribers: Subscribers::new(),
                broadcasting: Cell::new(false),
                pending: RefCell::new(VecDeque::new()),
            }),
        }
    }

    pub fn get_active_locale(&self) -> Locale {
        self.inner.active.get()
    }

    /// Cambiar idioma. Códigos no soportados se ignoran (devuelve `false`).
    /// Repetir el idioma activo vuelve a notificar.
    pub fn set_active_locale(&self, code: &str) -> bool {
        let locale = match Locale::from_code(code) {
            Some(locale) => locale,
            None => {
                log::debug!("⚠️ [LOCALE] Código ignorado: '{}'", code);
                return false;
            }
        };

        self.inner.pending.borrow_mut().push_back(locale);
        if self.inner.broadcasting.get() {
            log::debug!("⏳ [LOCALE] Cambio a '{}' encolado", locale);
            return true;
        }

        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            match next {
                Some(next) => self.commit(next),
                None => break,
            }
        }
        true
    }

    fn commit(&self, locale: Locale) {
        let inner = &self.inner;
        inner.active.set(locale);

        if let Err(e) = inner.storage.set(&inner.storage_key, locale.code()) {
            log::warn!("⚠️ [LOCALE] Preferencia no persistida: {}", e);
        }
        if let Err(e) = inner.document.apply_locale(locale) {
            log::warn!("⚠️ [LOCALE] {}", e);
        }

        inner.broadcasting.set(true);
        if let Err(e) = inner.document.announce_locale(locale) {
            log::warn!("⚠️ [LOCALE] {}", e);
        }
        inner.subscribers.notify(&locale);
        inner.broadcasting.set(false);

        log::info!("🌐 [LOCALE] Idioma activo: {}", locale);
    }

    /// Suscribirse a cambios de idioma
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Locale) + 'static,
    {
        self.inner.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.subscribers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::document_service::fakes::RecordingDocument;
    use crate::services::storage_service::MemoryStorage;
    use crate::services::translation_service::TranslationService;

    const KEY: &str = "i18nextLng";

    /// Almacén compartido para inspeccionar lo persistido
    #[derive(Clone, Default)]
    struct SharedStorage(Rc<MemoryStorage>);

    impl KeyValueStore for SharedStorage {
        fn get(&self, key: &str) -> Result<Option<String>, String> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.0.set(key, value)
        }
    }

    struct UnavailableStorage;

    impl KeyValueStore for UnavailableStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, String> {
            Err("No se pudo acceder a localStorage".to_string())
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("No se pudo acceder a localStorage".to_string())
        }
    }

    fn store_with(storage: impl KeyValueStore + 'static) -> (LocaleState, RecordingDocument) {
        let document = RecordingDocument::default();
        let state = LocaleState::load(Box::new(storage), Box::new(document.clone()), KEY, Locale::En);
        (state, document)
    }

    #[test]
    fn defaults_when_nothing_persisted() {
        let (state, document) = store_with(MemoryStorage::new());
        assert_eq!(state.get_active_locale(), Locale::En);
        assert_eq!(document.attributes(), Some(("en", "ltr")));
    }

    #[test]
    fn persisted_locale_is_read_at_startup() {
        let (state, document) = store_with(MemoryStorage::with_entry(KEY, "ar"));
        assert_eq!(state.get_active_locale(), Locale::Ar);
        assert_eq!(document.attributes(), Some(("ar", "rtl")));
    }

    #[test]
    fn invalid_persisted_value_uses_default() {
        let (state, _) = store_with(MemoryStorage::with_entry(KEY, "klingon"));
        assert_eq!(state.get_active_locale(), Locale::En);
    }

    #[test]
    fn set_then_get_round_trips_for_every_locale() {
        let storage = SharedStorage::default();
        let (state, document) = store_with(storage.clone());
        for locale in Locale::ALL {
            assert!(state.set_active_locale(locale.code()));
            assert_eq!(state.get_active_locale(), locale);
            let (lang, dir) = document.attributes().expect("attributes");
            assert_eq!(lang, locale.code());
            assert_eq!(dir == "rtl", locale == Locale::Ar);
            assert_eq!(storage.get(KEY), Ok(Some(locale.code().to_string())));
        }
    }

    #[test]
    fn unsupported_codes_change_nothing() {
        let storage = SharedStorage::default();
        let (state, document) = store_with(storage.clone());
        state.set_active_locale("fr");
        let announced = document.announced.borrow().len();
        for code in ["de", "", "en-GB", "FRA"] {
            assert!(!state.set_active_locale(code));
            assert_eq!(state.get_active_locale(), Locale::Fr);
        }
        assert_eq!(document.announced.borrow().len(), announced);
        assert_eq!(storage.get(KEY), Ok(Some("fr".to_string())));
    }

    #[test]
    fn reselecting_active_locale_rebroadcasts() {
        let (state, document) = store_with(MemoryStorage::new());
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe(move |_| hits.set(hits.get() + 1));
        }
        state.set_active_locale("en");
        state.set_active_locale("en");
        assert_eq!(hits.get(), 2);
        assert_eq!(*document.announced.borrow(), vec![Locale::En, Locale::En]);
    }

    #[test]
    fn subscribers_run_in_order_with_new_locale() {
        let (state, _) = store_with(MemoryStorage::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        for name in ["navbar", "page"] {
            let log = log.clone();
            state.subscribe(move |locale: &Locale| log.borrow_mut().push(format!("{}:{}", name, locale)));
        }
        state.set_active_locale("pt");
        assert_eq!(*log.borrow(), vec!["navbar:pt", "page:pt"]);
    }

    #[test]
    fn change_requested_inside_subscriber_is_queued() {
        let (state, _) = store_with(MemoryStorage::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let log = log.clone();
            let reentrant = state.clone();
            state.subscribe(move |locale: &Locale| {
                log.borrow_mut().push(format!("first:{}", locale));
                if *locale == Locale::Es {
                    reentrant.set_active_locale("ar");
                }
            });
        }
        {
            let log = log.clone();
            state.subscribe(move |locale: &Locale| log.borrow_mut().push(format!("second:{}", locale)));
        }
        state.set_active_locale("es");
        assert_eq!(*log.borrow(), vec!["first:es", "second:es", "first:ar", "second:ar"]);
        assert_eq!(state.get_active_locale(), Locale::Ar);
    }

    #[test]
    fn storage_unavailable_keeps_in_memory_locale() {
        let (state, document) = store_with(UnavailableStorage);
        assert_eq!(state.get_active_locale(), Locale::En);
        assert!(state.set_active_locale("es"));
        assert_eq!(state.get_active_locale(), Locale::Es);
        assert_eq!(document.attributes(), Some(("es", "ltr")));
    }

    #[test]
    fn persisted_locale_drives_lookups_and_document_lang() {
        let (state, document) = store_with(MemoryStorage::with_entry(KEY, "fr"));
        let translations = TranslationService::default();
        let active = state.get_active_locale();

        let fr_title = translations.text("hero.title", Locale::Fr);
        assert!(!fr_title.is_empty());
        assert_eq!(translations.text("hero.title", active), fr_title);
        assert_eq!(document.attributes().map(|(lang, _)| lang), Some("fr"));
    }
}
