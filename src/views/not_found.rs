use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::viewmodels::NotFoundPage;
use crate::views::{render_link, ViewHandlers};

pub fn render_not_found(page: &NotFoundPage, handlers: &ViewHandlers) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("div")?
        .class("text-center")
        .child(ElementBuilder::new("h1")?.class("text-4xl font-bold mb-4").text(&page.title).build())?
        .child(ElementBuilder::new("p")?.class("text-xl text-gray-600 mb-4").text(&page.message).build())?
        .child(render_link(&page.home, "text-blue-500 hover:text-blue-700 underline", handlers, false)?)?
        .build();

    Ok(ElementBuilder::new("main")?
        .class("min-h-screen flex items-center justify-center bg-gray-100")
        .child(content)?
        .build())
}
