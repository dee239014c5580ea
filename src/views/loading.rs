use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;

/// Spinner neutro mientras las tablas no están listas (sin texto)
pub fn render_loading() -> Result<Element, JsValue> {
    let spinner = ElementBuilder::new("div")?
        .class("animate-spin rounded-full h-8 w-8 border-b-2 border-brand-green mx-auto")
        .attr("role", "status")?
        .attr("aria-busy", "true")?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("min-h-screen flex items-center justify-center")
        .child(spinner)?
        .build())
}
