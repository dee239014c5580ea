// ============================================================================
// HOME VIEW - Página principal (secciones en orden de la página)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::{AccordionState, QuoteFormState};
use crate::viewmodels::*;
use crate::views::faq::render_faq;
use crate::views::quote_form::render_quote_form;
use crate::views::{render_link, reveal, ViewHandlers};

/// Escalonado de la animación de tarjetas
const CARD_REVEAL_STEP_MS: u32 = 100;

pub fn render_home(
    page: &HomePage,
    accordion: &AccordionState,
    quote_state: &QuoteFormState,
    handlers: &ViewHandlers,
) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("main")?
        .child(render_hero(&page.hero, handlers)?)?
        .child(render_products(&page.products)?)?
        .child(render_species(&page.species)?)?
        .child(render_process(&page.process, handlers)?)?
        .child(render_why_us(&page.why_us)?)?
        .child(render_compliance_summary(&page.compliance, handlers)?)?
        .child(render_certifications(&page.certifications)?)?
        .child(render_about(&page.about)?)?
        .child(render_catalog(&page.catalog)?)?
        .child(render_faq(&page.faq, accordion, handlers)?)?
        .child(render_quote_form(&page.quote, quote_state, handlers)?)?
        .build())
}

fn section(id: Option<&str>, class: &str, content: Element) -> Result<Element, JsValue> {
    let mut builder = ElementBuilder::new("section")?.class(class);
    if let Some(id) = id {
        builder = builder.id(id)?;
    }
    builder
        .child(ElementBuilder::new("div")?.class("section-container").child(content)?.build())
        .map(ElementBuilder::build)
}

fn heading(model: &SectionHeading) -> Result<Element, JsValue> {
    let mut builder = ElementBuilder::new("div")?
        .class("text-center mb-16")
        .child(ElementBuilder::new("h2")?.class("text-h2 text-foreground mb-4").text(&model.title).build())?;
    if !model.subtitle.is_empty() {
        builder = builder.child(
            ElementBuilder::new("p")?
                .class("text-body text-muted max-w-2xl mx-auto")
                .text(&model.subtitle)
                .build(),
        )?;
    }
    reveal(builder.build(), 0)
}

fn external_link(label: &str, href: &str, class: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("a")?
        .class(class)
        .attr("href", href)?
        .attr("target", "_blank")?
        .attr("rel", "noreferrer")?
        .text(label)
        .build())
}

fn render_hero(model: &HeroModel, handlers: &ViewHandlers) -> Result<Element, JsValue> {
    let mut chips = Vec::with_capacity(model.features.len());
    for feature in &model.features {
        chips.push(
            ElementBuilder::new("span")?
                .class("bg-white/20 backdrop-blur-sm text-white px-4 py-2 rounded-full text-sm font-medium")
                .text(feature)
                .build(),
        );
    }

    let actions = ElementBuilder::new("div")?
        .class("flex flex-col sm:flex-row justify-center gap-4")
        .child(render_link(
            &model.quote,
            "bg-white text-brand-green hover:bg-brand-offwhite px-8 py-4 rounded-lg font-medium",
            handlers,
            false,
        )?)?
        .child(external_link(
            &model.catalog_label,
            &model.catalog_href,
            "border border-white text-white hover:bg-white hover:text-brand-green px-8 py-4 rounded-lg font-medium",
        )?)?
        .build();

    let content = ElementBuilder::new("div")?
        .class("max-w-3xl mx-auto text-center")
        .child(ElementBuilder::new("h1")?.class("text-5xl md:text-6xl font-bold text-white mb-6").text(&model.title).build())?
        .child(ElementBuilder::new("p")?.class("text-xl md:text-2xl text-white/90 mb-8").text(&model.subtitle).build())?
        .child(ElementBuilder::new("div")?.class("flex flex-wrap justify-center gap-4 mb-8").children(chips)?.build())?
        .child(actions)?
        .build();

    section(Some("home"), "min-h-screen flex items-center bg-brand-green hero-section", content)
}

fn render_products(model: &ProductsModel) -> Result<Element, JsValue> {
    let mut cards = Vec::with_capacity(model.cards.len());
    for (index, card) in model.cards.iter().enumerate() {
        let element = ElementBuilder::new("div")?
            .class("product-card")
            .attr("data-product", &card.key)?
            .child(ElementBuilder::new("h3")?.class("text-xl font-semibold text-foreground mb-3").text(&card.title).build())?
            .child(ElementBuilder::new("p")?.class("text-muted").text(&card.description).build())?
            .build();
        cards.push(reveal(element, index as u32 * CARD_REVEAL_STEP_MS)?);
    }

    let content = ElementBuilder::new("div")?
        .child(heading(&model.heading)?)?
        .child(ElementBuilder::new("div")?.class("grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8").children(cards)?.build())?
        .build();
    section(Some("products"), "section-padding bg-gradient-to-b from-brand-offwhite to-white", content)
}

fn render_species(model: &SpeciesModel) -> Result<Element, JsValue> {
    let mut groups = Vec::with_capacity(model.groups.len());
    for group in &model.groups {
        groups.push(
            ElementBuilder::new("div")?
                .child(ElementBuilder::new("h3")?.class("text-xl font-semibold text-foreground mb-2").text(&group.title).build())?
                .child(ElementBuilder::new("p")?.class("text-body text-muted").text(&group.description).build())?
                .build(),
        );
    }

    let text = ElementBuilder::new("div")?
        .child(ElementBuilder::new("h2")?.class("text-h2 text-foreground mb-6").text(&model.title).build())?
        .child(ElementBuilder::new("div")?.class("space-y-6").children(groups)?.build())?
        .build();

    let image = ElementBuilder::new("img")?
        .class("rounded-lg shadow-medium w-full h-80 object-cover")
        .attr("src", &model.image_src)?
        .attr("alt", &model.image_alt)?
        .attr("loading", "lazy")?
        .build();

    let content = ElementBuilder::new("div")?
        .class("grid grid-cols-1 lg:grid-cols-2 gap-12 items-center")
        .child(reveal(text, 0)?)?
        .child(ElementBuilder::new("div")?.child(image)?.build())?
        .build();
    section(Some("species"), "section-padding", content)
}

fn render_process(model: &ProcessModel, handlers: &ViewHandlers) -> Result<Element, JsValue> {
    let mut steps = Vec::with_capacity(model.steps.len());
    for (index, step) in model.steps.iter().enumerate() {
        let element = ElementBuilder::new("div")?
            .class("text-center")
            .child(
                ElementBuilder::new("div")?
                    .class("w-16 h-16 bg-primary text-primary-foreground rounded-full flex items-center justify-center text-2xl font-bold mx-auto mb-4")
                    .text(&step.key)
                    .build(),
            )?
            .child(ElementBuilder::new("h3")?.class("font-semibold text-foreground mb-2").text(&step.title).build())?
            .child(ElementBuilder::new("p")?.class("text-small text-muted").text(&step.description).build())?
            .build();
        steps.push(reveal(element, index as u32 * CARD_REVEAL_STEP_MS)?);
    }

    let content = ElementBuilder::new("div")?
        .child(heading(&model.heading)?)?
        .child(ElementBuilder::new("div")?.class("grid grid-cols-1 md:grid-cols-5 gap-8").children(steps)?.build())?
        .child(
            ElementBuilder::new("div")?
                .class("text-center mt-12")
                .child(render_link(&model.cta, "btn-secondary", handlers, false)?)?
                .build(),
        )?
        .build();
    section(Some("process"), "section-padding bg-gradient-to-b from-white to-brand-offwhite", content)
}

fn points_column(points: &[String]) -> Result<Element, JsValue> {
    let mut items = Vec::with_capacity(points.len());
    for point in points {
        items.push(
            ElementBuilder::new("div")?
                .class("flex items-start gap-4")
                .child(ElementBuilder::new("div")?.class("w-6 h-6 bg-primary rounded-full flex-shrink-0 mt-1").build())?
                .child(ElementBuilder::new("p")?.class("text-body text-foreground").text(point).build())?
                .build(),
        );
    }
    Ok(ElementBuilder::new("div")?.class("space-y-6").children(items)?.build())
}

fn render_why_us(model: &WhyUsModel) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("div")?
        .child(
            ElementBuilder::new("div")?
                .class("text-center mb-16")
                .child(ElementBuilder::new("h2")?.class("text-h2 text-foreground mb-4").text(&model.title).build())?
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("grid grid-cols-1 md:grid-cols-2 gap-12")
                .child(reveal(points_column(&model.left)?, 0)?)?
                .child(reveal(points_column(&model.right)?, CARD_REVEAL_STEP_MS)?)?
                .build(),
        )?
        .build();
    section(Some("why-us"), "section-padding", content)
}

fn render_compliance_summary(model: &ComplianceSummaryModel, handlers: &ViewHandlers) -> Result<Element, JsValue> {
    let mut builder = ElementBuilder::new("div")?
        .class("text-center")
        .child(ElementBuilder::new("h2")?.class("text-h2 mb-12").text(&model.title).build())?;
    for paragraph in &model.paragraphs {
        builder = builder.child(ElementBuilder::new("p")?.class("text-body mb-6").text(paragraph).build())?;
    }
    let content = builder
        .child(render_link(&model.button, "btn-primary", handlers, false)?)?
        .build();
    section(Some("compliance-summary"), "section-padding bg-brand-offwhite", reveal(content, 0)?)
}

fn render_certifications(model: &CertificationsModel) -> Result<Element, JsValue> {
    let mut badges = Vec::with_capacity(model.badges.len());
    for badge in &model.badges {
        badges.push(
            ElementBuilder::new("div")?
                .class("certification-logo")
                .child(
                    ElementBuilder::new("div")?
                        .class("w-32 h-20 bg-gray-200 rounded-lg flex items-center justify-center")
                        .child(ElementBuilder::new("span")?.class("text-sm text-gray-500").text(badge).build())?
                        .build(),
                )?
                .build(),
        );
    }

    let content = ElementBuilder::new("div")?
        .child(heading(&model.heading)?)?
        .child(ElementBuilder::new("div")?.class("flex flex-wrap justify-center items-center gap-12").children(badges)?.build())?
        .build();
    section(Some("certifications"), "section-padding bg-gradient-to-b from-brand-offwhite to-white", content)
}

fn render_about(model: &AboutModel) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("div")?
        .class("max-w-4xl mx-auto text-center")
        .child(ElementBuilder::new("h2")?.class("text-h2 text-foreground mb-6").text(&model.title).build())?
        .child(ElementBuilder::new("p")?.class("text-body text-muted leading-relaxed").text(&model.description).build())?
        .build();
    section(Some("about"), "section-padding", reveal(content, 0)?)
}

fn render_catalog(model: &CatalogModel) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("div")?
        .class("text-center")
        .child(ElementBuilder::new("h2")?.class("text-h2 text-foreground mb-6").text(&model.heading.title).build())?
        .child(ElementBuilder::new("p")?.class("text-body text-muted mb-8 max-w-2xl mx-auto").text(&model.heading.subtitle).build())?
        .child(external_link(&model.cta_label, &model.href, "btn-primary")?)?
        .build();
    section(Some("catalog"), "section-padding bg-gradient-to-b from-white to-brand-offwhite", reveal(content, 0)?)
}
