// ============================================================================
// ELEMENT HELPERS - thin wrappers over web-sys
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Replaces every class
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Current value of an `<input id=..>`, empty when missing
pub fn input_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// `location.pathname + location.search`
pub fn current_path() -> Result<String, JsValue> {
    let location = window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location();
    Ok(format!("{}{}", location.pathname()?, location.search()?))
}

pub fn push_history(path: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(path))
}

pub fn replace_history(path: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
}
