// ============================================================================
// EVENT HANDLING
// ============================================================================
// Element listeners are forgotten: the browser drops them with the element
// on the next full render. Window listeners are registered once at startup.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent, PopStateEvent};

use crate::dom::window;

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Back/forward buttons
pub fn on_popstate<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(PopStateEvent) + 'static,
{
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(PopStateEvent)>);
    win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
