// ============================================================================
// FAQ VIEW - Acordeón de preguntas frecuentes
// ============================================================================
// Los ids de botón/respuesta vienen de AccordionState; los clicks sólo
// notifican el índice y `sync_accordion` actualiza el DOM.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{accordion_icon_id, on_click, ElementBuilder};
use crate::state::{AccordionPanel, AccordionState};
use crate::utils::HIDDEN_CLASS;
use crate::viewmodels::{FaqEntry, FaqModel};
use crate::views::ViewHandlers;

pub fn render_faq(
    model: &FaqModel,
    accordion: &AccordionState,
    handlers: &ViewHandlers,
) -> Result<Element, JsValue> {
    let mut items = Vec::with_capacity(model.entries.len());
    for (index, entry) in model.entries.iter().enumerate() {
        // El acordeón se dimensiona con la lista; sin panel no hay item
        let Some(panel) = accordion.panel(index) else {
            log::warn!("⚠️ [FAQ] Sin panel para la entrada {}", index);
            continue;
        };
        items.push(render_item(index, entry, panel, handlers)?);
    }

    let title = ElementBuilder::new("div")?
        .class("text-center mb-16")
        .child(ElementBuilder::new("h2")?.class("text-h2 text-foreground mb-4").text(&model.title).build())?
        .build();

    let list = ElementBuilder::new("div")?
        .class("max-w-3xl mx-auto space-y-4")
        .children(items)?
        .build();

    Ok(ElementBuilder::new("section")?
        .id("faq")?
        .class("section-padding")
        .child(
            ElementBuilder::new("div")?
                .class("section-container")
                .child(title)?
                .child(list)?
                .build(),
        )?
        .build())
}

fn render_item(
    index: usize,
    entry: &FaqEntry,
    panel: &AccordionPanel,
    handlers: &ViewHandlers,
) -> Result<Element, JsValue> {
    let icon = ElementBuilder::new("span")?
        .id(&accordion_icon_id(&panel.id))?
        .class("faq-icon float-end")
        .attr("aria-hidden", "true")?
        .text(panel.icon())
        .build();

    let button = ElementBuilder::new("button")?
        .id(&panel.id)?
        .class("faq-question w-full text-start px-6 py-4 font-semibold text-foreground hover:bg-brand-offwhite transition-colors")
        .attr("type", "button")?
        .attr("aria-expanded", panel.aria_expanded())?
        .attr("aria-controls", &panel.content_id)?
        .append_text(&entry.question)?
        .child(icon)?
        .build();

    let on_toggle = handlers.on_faq_toggle.clone();
    on_click(&button, move |_| on_toggle(index))?;

    let answer_class = if panel.is_expanded() {
        "faq-answer px-6 pb-4".to_string()
    } else {
        format!("faq-answer px-6 pb-4 {}", HIDDEN_CLASS)
    };
    let answer = ElementBuilder::new("div")?
        .id(&panel.content_id)?
        .class(&answer_class)
        .attr("role", "region")?
        .attr("aria-labelledby", &panel.id)?
        .child(ElementBuilder::new("p")?.class("text-muted").text(&entry.answer).build())?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("border border-border rounded-lg")
        .child(button)?
        .child(answer)?
        .build())
}
