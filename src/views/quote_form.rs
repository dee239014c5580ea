// ============================================================================
// QUOTE FORM VIEW - Formulario de presupuesto
// ============================================================================
// El navegador envía el formulario de forma nativa al endpoint externo.
// Aquí sólo se avisa al controlador (submit / edición de campos) para el
// estado ocupado del botón.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_event, on_input, ElementBuilder, BUSY_LABEL_ATTR, IDLE_LABEL_ATTR};
use crate::models::quote::{FORM_NAME_FIELD, PRODUCTS_FIELD};
use crate::state::QuoteFormState;
use crate::utils::*;
use crate::viewmodels::{QuoteFieldModel, QuoteFormModel};
use crate::views::ViewHandlers;

pub fn render_quote_form(
    model: &QuoteFormModel,
    state: &QuoteFormState,
    handlers: &ViewHandlers,
) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("div")?
        .class("text-center mb-16")
        .child(ElementBuilder::new("h2")?.class("text-h2 text-foreground mb-4").text(&model.heading.title).build())?
        .child(ElementBuilder::new("p")?.class("text-body text-muted max-w-2xl mx-auto").text(&model.heading.subtitle).build())?
        .build();

    let mut fields = Vec::with_capacity(model.fields.len());
    for field in &model.fields {
        fields.push(render_field(field)?);
    }
    let grid = ElementBuilder::new("div")?
        .class("grid grid-cols-1 md:grid-cols-2 gap-6 mb-6")
        .children(fields)?
        .build();

    let form = ElementBuilder::new("form")?
        .id(QUOTE_FORM_ID)?
        .class("max-w-4xl mx-auto")
        .attr("name", &model.form_name)?
        .attr("method", "POST")?
        .attr("action", &model.action)?
        .attr("data-netlify", "true")?
        .attr("netlify-honeypot", &model.honeypot_field)?
        .child(
            ElementBuilder::new("input")?
                .attr("type", "hidden")?
                .attr("name", FORM_NAME_FIELD)?
                .attr("value", &model.form_name)?
                .build(),
        )?
        .child(render_honeypot(model)?)?
        .child(grid)?
        .child(render_products(model)?)?
        .child(render_submit(model, state)?)?
        .build();

    let on_submit = handlers.on_submit.clone();
    on_event(&form, "submit", move |_| on_submit())?;
    // Cualquier edición (texto o checkbox) burbujea hasta el form
    let on_edit = handlers.on_field_edit.clone();
    on_input(&form, move |_| on_edit())?;

    Ok(ElementBuilder::new("section")?
        .id("quote")?
        .class("section-padding bg-gradient-to-b from-brand-offwhite to-white")
        .child(
            ElementBuilder::new("div")?
                .class("section-container")
                .child(heading)?
                .child(form)?
                .build(),
        )?
        .build())
}

fn render_honeypot(model: &QuoteFormModel) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .attr("name", &model.honeypot_field)?
        .attr("tabindex", "-1")?
        .attr("autocomplete", "off")?
        .build();
    let label = ElementBuilder::new("label")?
        .append_text(&model.honeypot_label)?
        .append_text(" ")?
        .child(input)?
        .build();
    Ok(ElementBuilder::new("p")?
        .class(HIDDEN_CLASS)
        .attr("aria-hidden", "true")?
        .child(label)?
        .build())
}

fn render_field(model: &QuoteFieldModel) -> Result<Element, JsValue> {
    let name = model.field.name();
    let required = model.field.required();

    let mut label = ElementBuilder::new("label")?
        .class("block text-sm font-medium text-foreground mb-2")
        .attr("for", name)?
        .append_text(&model.label)?;
    if required {
        label = label.append_text(" *")?;
    }

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", model.field.input_type())?
        .attr("id", name)?
        .attr("name", name)?
        .attr_if(required, "required", "")?
        .build();

    Ok(ElementBuilder::new("div")?
        .child(label.build())?
        .child(input)?
        .build())
}

fn render_products(model: &QuoteFormModel) -> Result<Element, JsValue> {
    let mut options = Vec::with_capacity(model.products.len());
    for product in &model.products {
        let checkbox = ElementBuilder::new("input")?
            .class("form-checkbox me-2")
            .attr("type", "checkbox")?
            .attr("name", PRODUCTS_FIELD)?
            .attr("value", &product.value)?
            .build();
        options.push(
            ElementBuilder::new("label")?
                .class("flex items-center")
                .child(checkbox)?
                .child(ElementBuilder::new("span")?.class("text-sm").text(&product.label).build())?
                .build(),
        );
    }

    Ok(ElementBuilder::new("fieldset")?
        .class("mb-6")
        .child(
            ElementBuilder::new("legend")?
                .class("block text-sm font-medium text-foreground mb-3")
                .text(&model.categories_label)
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("grid grid-cols-2 md:grid-cols-3 gap-3")
                .children(options)?
                .build(),
        )?
        .build())
}

/// Botón con ambas etiquetas guardadas para `sync_submit_button`
fn render_submit(model: &QuoteFormModel, state: &QuoteFormState) -> Result<Element, JsValue> {
    let busy = state.is_submitting();
    let label = ElementBuilder::new("span")?
        .id(SUBMIT_TEXT_ID)?
        .attr(IDLE_LABEL_ATTR, &model.submit_label)?
        .attr(BUSY_LABEL_ATTR, &model.submitting_label)?
        .text(if busy { &model.submitting_label } else { &model.submit_label })
        .build();

    let class = if busy {
        format!("btn-primary {}", SUBMIT_BUSY_CLASS)
    } else {
        "btn-primary".to_string()
    };
    let button = ElementBuilder::new("button")?
        .id(SUBMIT_BUTTON_ID)?
        .class(&class)
        .attr("type", "submit")?
        .attr_if(busy, "disabled", "")?
        .child(label)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("text-center")
        .child(button)?
        .build())
}
