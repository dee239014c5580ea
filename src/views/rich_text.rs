// Texto con formato básico (<br>, <strong>, <i>) como nodos DOM.
// Nunca usa inner_html: el texto de las tablas se inserta como nodos de texto.

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, create_element, create_text_node};
use crate::utils::markup::Segment;

pub fn append_segments(parent: &Element, segments: &[Segment]) -> Result<(), JsValue> {
    for segment in segments {
        match segment {
            Segment::Text(text) => {
                let node = create_text_node(text)?;
                parent.append_child(&node)?;
            }
            Segment::LineBreak => append_child(parent, &create_element("br")?)?,
            Segment::Strong(children) => {
                let strong = create_element("strong")?;
                append_segments(&strong, children)?;
                append_child(parent, &strong)?;
            }
            Segment::Italic(children) => {
                let italic = create_element("i")?;
                append_segments(&italic, children)?;
                append_child(parent, &italic)?;
            }
        }
    }
    Ok(())
}

/// `<tag class>` con el contenido formateado
pub fn render_rich(tag: &str, class: &str, segments: &[Segment]) -> Result<Element, JsValue> {
    let element = create_element(tag)?;
    element.set_class_name(class);
    append_segments(&element, segments)?;
    Ok(element)
}
