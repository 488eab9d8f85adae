// ============================================================================
// GARAGE DESK - vehicle maintenance back office, Rust + WASM client
// ============================================================================
// - Services: typed wrappers over the REST API (no business logic)
// - Router: route table, matching, role guard
// - State: auth state mirrored in localStorage
// - Views: DOM rendering of the shell and the auth forms
// - Models: wire structures shared with the backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod router;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!(
        "🚀 Garage Desk ({}) -> {}",
        CONFIG.environment,
        CONFIG.api_base_url()
    );

    let app = App::new()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app.clone()));
    app.start()
}

/// Navigate from outside the views (e.g. JS glue)
#[wasm_bindgen]
pub fn navigate_to(path: &str) {
    match APP.with(|cell| cell.borrow().clone()) {
        Some(app) => app.navigate(path),
        None => log::warn!("⚠️ [APP] navigate_to({}) before start", path),
    }
}
