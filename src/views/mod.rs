pub mod auth;
pub mod layout;

pub use layout::render_page;
