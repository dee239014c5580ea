// ============================================================================
// COMPLIANCE VIEW - Página de política de cumplimiento
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{create_element, create_text_node, ElementBuilder};
use crate::viewmodels::{ComplianceItem, CompliancePage, ComplianceSection};
use crate::views::rich_text::{append_segments, render_rich};
use crate::views::{render_link, reveal, ViewHandlers};

pub fn render_compliance(page: &CompliancePage, handlers: &ViewHandlers) -> Result<Element, JsValue> {
    let hero = ElementBuilder::new("section")?
        .class("pt-32 pb-16 bg-brand-green text-white")
        .child(
            ElementBuilder::new("div")?
                .class("section-container text-center")
                .child(ElementBuilder::new("h1")?.class("text-5xl font-bold mb-4").text(&page.title).build())?
                .child(ElementBuilder::new("p")?.class("text-xl text-white/90").text(&page.subtitle).build())?
                .build(),
        )?
        .build();

    let mut body = ElementBuilder::new("div")?
        .class("max-w-4xl mx-auto")
        .child(ElementBuilder::new("h2")?.class("text-h2 text-foreground mb-6").text(&page.heading).build())?
        .child(render_rich("p", "text-body text-muted mb-12", &page.intro)?)?;

    for section in &page.sections {
        body = body.child(reveal(render_section(section)?, 0)?)?;
    }

    let contact = ElementBuilder::new("div")?
        .class("bg-brand-offwhite rounded-lg p-8 text-center mt-12")
        .child(ElementBuilder::new("h3")?.class("text-2xl font-semibold text-foreground mb-4").text(&page.contact_title).build())?
        .child(ElementBuilder::new("p")?.class("text-body text-muted mb-6").text(&page.contact_body).build())?
        .child(render_link(&page.contact, "btn-primary", handlers, false)?)?
        .build();

    let content = ElementBuilder::new("section")?
        .class("section-padding")
        .child(
            ElementBuilder::new("div")?
                .class("section-container")
                .child(body.child(contact)?.build())?
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("main")?
        .child(hero)?
        .child(content)?
        .build())
}

fn render_section(section: &ComplianceSection) -> Result<Element, JsValue> {
    let mut builder = ElementBuilder::new("div")?
        .class("mb-12")
        .attr("data-section", &section.key)?
        .child(ElementBuilder::new("h3")?.class("text-2xl font-semibold text-foreground mb-4").text(&section.title).build())?;

    for paragraph in &section.paragraphs {
        builder = builder.child(render_rich("p", "text-body text-muted mb-4", paragraph)?)?;
    }

    if !section.items.is_empty() {
        let mut items = Vec::with_capacity(section.items.len());
        for item in &section.items {
            items.push(render_item(item)?);
        }
        builder = builder.child(
            ElementBuilder::new("ul")?
                .class("list-disc ps-6 space-y-2 text-body text-muted")
                .children(items)?
                .build(),
        )?;
    }

    Ok(builder.build())
}

/// `<li><strong>label</strong> texto</li>`
fn render_item(item: &ComplianceItem) -> Result<Element, JsValue> {
    let li = create_element("li")?;
    let label = ElementBuilder::new("strong")?.text(&item.label).build();
    li.append_child(&label)?;
    if !item.text.is_empty() {
        let space = create_text_node(" ")?;
        li.append_child(&space)?;
        append_segments(&li, &item.text)?;
    }
    Ok(li)
}
