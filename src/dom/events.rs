// ============================================================================
// EVENT HANDLING - Registro explícito de listeners
// ============================================================================
// - Listeners de elementos: se liberan con el elemento al re-renderizar,
//   closure.forget() es seguro.
// - Listeners globales (window/document): UNA vez por página. Se registran
//   a través de `GlobalListeners`, que ignora registros duplicados.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, MouseEvent};
use crate::dom::{document, window};

fn listen<E, F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

/// `input` burbujea: registrado en el <form> cubre todos los campos
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "input", handler)
}

pub fn on_event<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, event_type, handler)
}

thread_local! {
    static REGISTERED: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Listeners globales con protección contra registros duplicados
pub struct GlobalListeners;

impl GlobalListeners {
    /// Marca `name` como registrado; `false` si ya lo estaba
    fn claim(name: &str) -> bool {
        REGISTERED.with(|registered| registered.borrow_mut().insert(name.to_string()))
    }

    pub fn on_window<F>(name: &str, event_type: &str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        if !Self::claim(name) {
            log::warn!("⚠️ [EVENTS] Listener '{}' ya registrado, ignorando", name);
            return Ok(());
        }
        let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
        listen(&win, event_type, handler)
    }

    pub fn on_document_key<F>(name: &str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(KeyboardEvent) + 'static,
    {
        if !Self::claim(name) {
            log::warn!("⚠️ [EVENTS] Listener '{}' ya registrado, ignorando", name);
            return Ok(());
        }
        let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
        listen(&doc, "keydown", handler)
    }

    pub fn on_document_mouse<F>(name: &str, event_type: &str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        if !Self::claim(name) {
            log::warn!("⚠️ [EVENTS] Listener '{}' ya registrado, ignorando", name);
            return Ok(());
        }
        let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
        listen(&doc, event_type, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_listener_names_are_claimed_once() {
        assert!(GlobalListeners::claim("test-scroll"));
        assert!(!GlobalListeners::claim("test-scroll"));
        assert!(GlobalListeners::claim("test-keydown"));
    }
}
