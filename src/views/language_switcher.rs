// Selector de idioma flotante: globo + idioma activo + lista al pasar el ratón

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::viewmodels::LanguageSwitcherModel;
use crate::views::ViewHandlers;

pub fn render_language_switcher(
    model: &LanguageSwitcherModel,
    handlers: &ViewHandlers,
) -> Result<Element, JsValue> {
    let globe = ElementBuilder::new("div")?
        .class("bg-primary text-white p-2 rounded shadow-lg flex items-center justify-center")
        .child(
            ElementBuilder::new("img")?
                .class("w-4 h-4 filter brightness-0 invert")
                .attr("src", &model.globe_icon)?
                .attr("alt", &model.title)?
                .build(),
        )?
        .build();

    let active = ElementBuilder::new("div")?
        .class("absolute top-full left-0 right-0 mt-1 bg-primary text-white px-2.5 py-1.5 rounded text-xs font-medium shadow-lg text-center")
        .text(model.active_label)
        .build();

    let mut options = Vec::with_capacity(model.options.len());
    for option in &model.options {
        let class = if option.active {
            "block w-full text-start px-3 py-1 text-xs bg-primary text-white"
        } else {
            "block w-full text-start px-3 py-1 text-xs text-gray-700 hover:bg-gray-100"
        };
        let button = ElementBuilder::new("button")?
            .class(class)
            .attr("type", "button")?
            .attr("lang", option.code)?
            .attr("aria-pressed", if option.active { "true" } else { "false" })?
            .text(option.label)
            .build();

        let code = option.code;
        let on_locale = handlers.on_locale.clone();
        on_click(&button, move |_| {
            log::debug!("🌐 [LOCALE] Selección de idioma: {}", code);
            on_locale(code);
        })?;
        options.push(button);
    }

    let menu = ElementBuilder::new("div")?
        .class("absolute right-1/2 translate-x-1/2 mt-2 w-20 bg-white rounded-md shadow-lg border border-gray-200 opacity-0 invisible group-hover:opacity-100 group-hover:visible group-focus-within:opacity-100 group-focus-within:visible transition-all duration-200")
        .attr("role", "menu")?
        .attr("aria-label", &model.title)?
        .child(
            ElementBuilder::new("div")?
                .class("py-1")
                .children(options)?
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("fixed top-3 right-3 z-50")
        .child(
            ElementBuilder::new("div")?
                .class("relative group")
                .child(globe)?
                .child(active)?
                .child(menu)?
                .build(),
        )?
        .build())
}
