// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Los controladores (acordeón, menú, scroll, formulario) no re-renderizan la
// página: sólo sincronizan atributos y clases de los elementos afectados.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlButtonElement;
use crate::dom::{get_element_by_id, set_attribute, set_class_enabled, set_text_content};
use crate::state::{AccordionState, MobileMenuState, QuoteFormState, ScrollStyleState};
use crate::utils::*;

/// Etiquetas del botón de envío guardadas en el propio elemento
pub const IDLE_LABEL_ATTR: &str = "data-idle-label";
pub const BUSY_LABEL_ATTR: &str = "data-busy-label";

/// id del glifo `+`/`−` de un panel
pub fn accordion_icon_id(panel_id: &str) -> String {
    format!("{}-icon", panel_id)
}

/// Aplicar el estado de TODOS los paneles tras cada operación
pub fn sync_accordion(accordion: &AccordionState) -> Result<(), JsValue> {
    for panel in accordion.panels() {
        if let Some(button) = get_element_by_id(&panel.id) {
            set_attribute(&button, "aria-expanded", panel.aria_expanded())?;
            set_attribute(&button, "aria-controls", &panel.content_id)?;
        }
        if let Some(answer) = get_element_by_id(&panel.content_id) {
            set_class_enabled(&answer, HIDDEN_CLASS, !panel.is_expanded())?;
        }
        if let Some(icon) = get_element_by_id(&accordion_icon_id(&panel.id)) {
            set_text_content(&icon, panel.icon());
        }
    }
    Ok(())
}

pub fn sync_mobile_menu(menu: &MobileMenuState) -> Result<(), JsValue> {
    if let Some(panel) = get_element_by_id(MOBILE_MENU_ID) {
        set_class_enabled(&panel, HIDDEN_CLASS, !menu.is_open())?;
    }
    if let Some(button) = get_element_by_id(MOBILE_MENU_BUTTON_ID) {
        set_attribute(&button, "aria-expanded", menu.aria_expanded())?;
    }
    if let Some(icon) = get_element_by_id(MOBILE_MENU_ICON_ID) {
        set_attribute(&icon, "d", menu.icon_path())?;
    }
    Ok(())
}

pub fn sync_scroll_style(scroll: &ScrollStyleState) -> Result<(), JsValue> {
    if let Some(navbar) = get_element_by_id(NAVBAR_ID) {
        for class in NAVBAR_SCROLLED_CLASSES {
            set_class_enabled(&navbar, class, scroll.is_scrolled())?;
        }
    }
    Ok(())
}

/// Botón de envío: deshabilitado + texto ocupado mientras se envía
pub fn sync_submit_button(form: &QuoteFormState) -> Result<(), JsValue> {
    let busy = form.is_submitting();
    if let Some(button) = get_element_by_id(SUBMIT_BUTTON_ID) {
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(busy);
        }
        set_class_enabled(&button, SUBMIT_BUSY_CLASS, busy)?;
    }
    if let Some(label) = get_element_by_id(SUBMIT_TEXT_ID) {
        let attr = if busy { BUSY_LABEL_ATTR } else { IDLE_LABEL_ATTR };
        if let Some(text) = label.get_attribute(attr) {
            set_text_content(&label, &text);
        }
    }
    Ok(())
}
