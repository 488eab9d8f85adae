// ============================================================================
// ELEMENT BUILDER - chained construction of the shell's DOM nodes
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, create_element, set_attribute, set_class_name, set_text_content};

/// Owns a detached element until `build` hands it to the caller
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Create a detached `<tag>`
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Set the class attribute (replaces existing classes)
    pub fn class(self, class: &str) -> Self {
        set_class_name(&self.element, class);
        self
    }

    /// Set the id, so `input_value` and `get_element_by_id` can find it
    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        self.attr("id", id)
    }

    /// Replace all content with plain text (never parsed as HTML)
    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    /// Set any attribute
    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Set `data-<key>`; underscores become dashes (`order_id` -> `data-order-id`)
    pub fn data(self, key: &str, value: &str) -> Result<Self, JsValue> {
        self.attr(&format!("data-{}", key.replace('_', "-")), value)
    }

    /// Append one child
    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    /// Append every child in order, stopping at the first failure
    pub fn children(self, children: impl IntoIterator<Item = Element>) -> Result<Self, JsValue> {
        children
            .into_iter()
            .try_fold(self, |builder, child| builder.child(child))
    }

    /// Hand the finished element to the caller
    pub fn build(self) -> Element {
        self.element
    }
}
