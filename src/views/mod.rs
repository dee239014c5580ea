// ============================================================================
// VIEWS - Funciones que construyen DOM a partir de los modelos de página
// ============================================================================
// Sin lógica: los eventos se delegan a `ViewHandlers`, que conecta App con
// los controladores de estado.
// ============================================================================

pub mod app;
pub mod compliance;
pub mod faq;
pub mod footer;
pub mod home;
pub mod language_switcher;
pub mod loading;
pub mod navbar;
pub mod not_found;
pub mod quote_form;
pub mod rich_text;

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::viewmodels::NavLink;

pub use app::render_app;
pub use loading::render_loading;

/// Callbacks de la UI
#[derive(Clone)]
pub struct ViewHandlers {
    /// Scroll suave a un ancla de la página actual
    pub on_anchor: Rc<dyn Fn(&str)>,
    pub on_menu_toggle: Rc<dyn Fn()>,
    /// Un enlace del menú móvil fue activado
    pub on_menu_link: Rc<dyn Fn()>,
    pub on_locale: Rc<dyn Fn(&str)>,
    pub on_faq_toggle: Rc<dyn Fn(usize)>,
    pub on_submit: Rc<dyn Fn()>,
    pub on_field_edit: Rc<dyn Fn()>,
}

/// `<a>` de navegación. Con ancla en la página actual hace scroll suave;
/// sin ella el navegador navega normalmente (carga completa).
pub fn render_link(
    link: &NavLink,
    class: &str,
    handlers: &ViewHandlers,
    closes_menu: bool,
) -> Result<Element, JsValue> {
    let anchor = ElementBuilder::new("a")?
        .class(class)
        .attr("href", &link.href)?
        .text(&link.label)
        .build();

    if link.anchor.is_some() || closes_menu {
        let target = link.anchor.clone();
        let on_anchor = handlers.on_anchor.clone();
        let on_menu_link = handlers.on_menu_link.clone();
        on_click(&anchor, move |event| {
            if closes_menu {
                on_menu_link();
            }
            if let Some(target) = &target {
                event.prevent_default();
                on_anchor(target);
            }
        })?;
    }
    Ok(anchor)
}

/// `data-reveal` (+ retraso opcional) para la animación de entrada
pub fn reveal(element: Element, delay_ms: u32) -> Result<Element, JsValue> {
    element.set_attribute(crate::utils::REVEAL_ATTR, "")?;
    if delay_ms > 0 {
        element.set_attribute(crate::utils::REVEAL_DELAY_ATTR, &delay_ms.to_string())?;
    }
    Ok(element)
}
