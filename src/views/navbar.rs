// ============================================================================
// NAVBAR VIEW - Barra fija con enlaces, CTA y menú móvil
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::state::{MobileMenuState, ScrollStyleState};
use crate::utils::*;
use crate::viewmodels::{in_page_anchor, NavbarModel};
use crate::views::{render_link, ViewHandlers};

pub fn render_navbar(
    model: &NavbarModel,
    menu: &MobileMenuState,
    scroll: &ScrollStyleState,
    handlers: &ViewHandlers,
) -> Result<Element, JsValue> {
    let mut nav_class = "fixed top-0 left-0 right-0 z-40 border-b border-brand-green-700 bg-brand-green".to_string();
    if scroll.is_scrolled() {
        for class in NAVBAR_SCROLLED_CLASSES {
            nav_class.push(' ');
            nav_class.push_str(class);
        }
    }

    let cta = ElementBuilder::new("div")?
        .class("hidden md:flex items-center me-8 xl:me-12")
        .child(render_link(
            &model.quote,
            "bg-white text-brand-green hover:bg-brand-offwhite px-3 py-2 xl:px-4 rounded-lg font-medium text-xs xl:text-sm",
            handlers,
            false,
        )?)?
        .build();

    let row = ElementBuilder::new("div")?
        .class("flex items-center justify-between py-4")
        .child(render_logo(model, handlers)?)?
        .child(render_desktop_links(model, handlers)?)?
        .child(cta)?
        .child(render_menu_button(model, menu, handlers)?)?
        .build();

    let container = ElementBuilder::new("div")?
        .class("section-container")
        .child(row)?
        .child(render_mobile_menu(model, menu, handlers)?)?
        .build();

    Ok(ElementBuilder::new("nav")?
        .id(NAVBAR_ID)?
        .class(&nav_class)
        .child(container)?
        .build())
}

fn render_logo(model: &NavbarModel, handlers: &ViewHandlers) -> Result<Element, JsValue> {
    let image = ElementBuilder::new("img")?
        .class("h-8 sm:h-9 md:h-11 lg:h-12 w-auto transition-all duration-200 hover:opacity-90")
        .attr("src", &model.logo_src)?
        .attr("alt", &model.logo_alt)?
        .build();

    let link = ElementBuilder::new("a")?
        .attr("href", &model.logo_href)?
        .child(image)?
        .build();

    if let Some(anchor) = in_page_anchor(&model.logo_href, false) {
        let anchor = anchor.to_string();
        let on_anchor = handlers.on_anchor.clone();
        on_click(&link, move |event| {
            event.prevent_default();
            on_anchor(&anchor);
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("flex-shrink-0")
        .child(link)?
        .build())
}

fn render_desktop_links(model: &NavbarModel, handlers: &ViewHandlers) -> Result<Element, JsValue> {
    let text_size = if model.compact { "text-xs xl:text-sm" } else { "text-sm xl:text-base" };
    let class = format!("text-white hover:text-brand-offwhite transition-colors whitespace-nowrap {}", text_size);

    let mut links = Vec::with_capacity(model.links.len());
    for link in &model.links {
        links.push(render_link(link, &class, handlers, false)?);
    }

    Ok(ElementBuilder::new("div")?
        .class("hidden lg:flex items-center gap-2 xl:gap-3")
        .children(links)?
        .build())
}

/// Botón hamburguesa; el icono cambia a X con el menú abierto
fn render_menu_button(
    model: &NavbarModel,
    menu: &MobileMenuState,
    handlers: &ViewHandlers,
) -> Result<Element, JsValue> {
    let path = ElementBuilder::svg("path")?
        .id(MOBILE_MENU_ICON_ID)?
        .attr("stroke-linecap", "round")?
        .attr("stroke-linejoin", "round")?
        .attr("stroke-width", "2")?
        .attr("d", menu.icon_path())?
        .build();

    let icon = ElementBuilder::svg("svg")?
        .attr("class", "w-6 h-6")?
        .attr("fill", "none")?
        .attr("stroke", "currentColor")?
        .attr("viewBox", "0 0 24 24")?
        .attr("aria-hidden", "true")?
        .child(path)?
        .build();

    let button = ElementBuilder::new("button")?
        .id(MOBILE_MENU_BUTTON_ID)?
        .class("md:hidden p-2 text-white")
        .attr("type", "button")?
        .attr("aria-label", &model.menu_label)?
        .attr("aria-controls", MOBILE_MENU_ID)?
        .attr("aria-expanded", menu.aria_expanded())?
        .child(icon)?
        .build();

    let on_toggle = handlers.on_menu_toggle.clone();
    on_click(&button, move |_| on_toggle())?;
    Ok(button)
}

fn render_mobile_menu(
    model: &NavbarModel,
    menu: &MobileMenuState,
    handlers: &ViewHandlers,
) -> Result<Element, JsValue> {
    let mut links = Vec::with_capacity(model.links.len() + 1);
    for link in &model.links {
        links.push(render_link(link, "block px-3 py-2 text-white hover:text-brand-offwhite", handlers, true)?);
    }
    links.push(render_link(
        &model.quote,
        "block px-3 py-2 bg-white text-brand-green hover:bg-brand-offwhite text-center rounded-lg mx-3 mt-2",
        handlers,
        true,
    )?);

    let list = ElementBuilder::new("div")?
        .class("px-2 pt-2 pb-3 space-y-1")
        .children(links)?
        .build();

    let class = if menu.is_open() {
        "md:hidden bg-brand-green border-t border-brand-green-700".to_string()
    } else {
        format!("md:hidden bg-brand-green border-t border-brand-green-700 {}", HIDDEN_CLASS)
    };

    Ok(ElementBuilder::new("div")?
        .id(MOBILE_MENU_ID)?
        .class(&class)
        .child(list)?
        .build())
}
