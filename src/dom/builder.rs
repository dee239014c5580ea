// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, create_element, create_svg_element, create_text_node, set_attribute};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Builder para un elemento SVG
    pub fn svg(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_svg_element(tag)?,
        })
    }

    /// Establecer class name (reemplaza todas las clases). En SVG usar `attr("class", ..)`
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, "id", id)?;
        Ok(self)
    }

    /// Texto plano (reemplaza el contenido)
    pub fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    /// Añadir un nodo de texto al final
    pub fn append_text(self, text: &str) -> Result<Self, JsValue> {
        let node = create_text_node(text)?;
        self.element.append_child(&node)?;
        Ok(self)
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    pub fn children<I>(self, children: I) -> Result<Self, JsValue>
    where
        I: IntoIterator<Item = Element>,
    {
        for child in children {
            append_child(&self.element, &child)?;
        }
        Ok(self)
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Atributo sólo si `condition`
    pub fn attr_if(self, condition: bool, name: &str, value: &str) -> Result<Self, JsValue> {
        if condition {
            set_attribute(&self.element, name, value)?;
        }
        Ok(self)
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }
}
