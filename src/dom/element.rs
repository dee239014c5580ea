// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener <body>
pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento HTML
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Crear elemento SVG (iconos del navbar)
pub fn create_svg_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element_ns(Some(SVG_NS), tag))
}

/// Crear nodo de texto (nunca interpreta HTML)
pub fn create_text_node(text: &str) -> Result<web_sys::Text, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .map(|doc| doc.create_text_node(text))
}

pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

/// Añadir o quitar una clase según `enabled`
pub fn set_class_enabled(element: &Element, class: &str, enabled: bool) -> Result<(), JsValue> {
    if enabled {
        add_class(element, class)
    } else {
        remove_class(element, class)
    }
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Vaciar un elemento
pub fn clear_children(element: &Element) {
    element.set_text_content(None);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Dar foco a un elemento si es HtmlElement
pub fn focus(element: &Element) -> Result<(), JsValue> {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html.focus(),
        None => Ok(()),
    }
}

/// Scroll vertical actual de la ventana
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Altura renderizada de un elemento (0 si no existe)
pub fn offset_height(id: &str) -> f64 {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Posición de un elemento respecto al inicio del documento
pub fn document_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

/// Scroll suave de la ventana hasta `top`
pub fn smooth_scroll_to(top: f64) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
