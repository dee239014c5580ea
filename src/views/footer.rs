use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::viewmodels::FooterModel;

pub fn render_footer(model: &FooterModel) -> Result<Element, JsValue> {
    let logo = ElementBuilder::new("img")?
        .class("h-24 w-auto mx-auto mb-6")
        .attr("src", &model.logo_src)?
        .attr("alt", &model.logo_alt)?
        .attr("loading", "lazy")?
        .build();

    let contact = ElementBuilder::new("div")?
        .class("flex flex-col sm:flex-row items-center justify-center gap-4 text-sm text-white/60")
        .child(ElementBuilder::new("span")?.text(&model.email).build())?
        .child(ElementBuilder::new("span")?.class("hidden sm:inline").attr("aria-hidden", "true")?.text("|").build())?
        .child(ElementBuilder::new("span")?.attr("dir", "ltr")?.text(&model.phone).build())?
        .build();

    let copyright = ElementBuilder::new("div")?
        .class("mt-8 pt-8 border-t border-white/20 text-center text-sm text-white/40")
        .child(ElementBuilder::new("p")?.text(&model.copyright).build())?
        .build();

    let content = ElementBuilder::new("div")?
        .class("text-center")
        .child(logo)?
        .child(ElementBuilder::new("p")?.class("text-white/80 mb-4").text(&model.tagline).build())?
        .child(contact)?
        .child(copyright)?
        .build();

    Ok(ElementBuilder::new("footer")?
        .class("bg-brand-charcoal text-white section-padding")
        .child(ElementBuilder::new("div")?.class("section-container").child(content)?.build())?
        .build())
}
