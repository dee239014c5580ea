// ============================================================================
// DOCUMENT SERVICE - Efectos del idioma sobre el documento
// ============================================================================
// - <html lang> y <html dir>
// - evento global `languageChanged` con `detail.language`
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit};
use crate::models::locale::Locale;

/// Nombre del evento emitido en `window` al cambiar de idioma
pub const LANGUAGE_CHANGED_EVENT: &str = "languageChanged";

pub trait DocumentHost {
    /// Aplicar `lang`/`dir` del idioma al elemento raíz
    fn apply_locale(&self, locale: Locale) -> Result<(), String>;
    /// Notificar a listeners externos del cambio de idioma
    fn announce_locale(&self, locale: Locale) -> Result<(), String>;
}

pub struct BrowserDocument;

impl DocumentHost for BrowserDocument {
    fn apply_locale(&self, locale: Locale) -> Result<(), String> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| "No document element".to_string())?;
        root.set_attribute("lang", locale.code())
            .map_err(|e| format!("Error estableciendo lang: {:?}", e))?;
        root.set_attribute("dir", locale.direction().as_str())
            .map_err(|e| format!("Error estableciendo dir: {:?}", e))?;
        Ok(())
    }

    fn announce_locale(&self, locale: Locale) -> Result<(), String> {
        let win = web_sys::window().ok_or_else(|| "No window".to_string())?;

        let detail = js_sys::Object::new();
        js_sys::Reflect::set(&detail, &JsValue::from_str("language"), &JsValue::from_str(locale.code()))
            .map_err(|e| format!("Error creando detail: {:?}", e))?;

        let init = CustomEventInit::new();
        init.set_detail(&detail);
        let event = CustomEvent::new_with_event_init_dict(LANGUAGE_CHANGED_EVENT, &init)
            .map_err(|e| format!("Error creando evento: {:?}", e))?;

        win.dispatch_event(&event)
            .map(|_| ())
            .map_err(|e| format!("Error disparando {}: {:?}", LANGUAGE_CHANGED_EVENT, e))
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Registra los efectos en lugar de tocar el DOM
    #[derive(Clone, Default)]
    pub struct RecordingDocument {
        pub applied: Rc<RefCell<Vec<Locale>>>,
        pub announced: Rc<RefCell<Vec<Locale>>>,
    }

    impl RecordingDocument {
        /// (`lang`, `dir`) actuales del documento
        pub fn attributes(&self) -> Option<(&'static str, &'static str)> {
            self.applied
                .borrow()
                .last()
                .map(|locale| (locale.code(), locale.direction().as_str()))
        }
    }

    impl DocumentHost for RecordingDocument {
        fn apply_locale(&self, locale: Locale) -> Result<(), String> {
            self.applied.borrow_mut().push(locale);
            Ok(())
        }

        fn announce_locale(&self, locale: Locale) -> Result<(), String> {
            self.announced.borrow_mut().push(locale);
            Ok(())
        }
    }
}
