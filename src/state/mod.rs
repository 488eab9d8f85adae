// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod reactivity;
pub mod auth_state;

pub use reactivity::*;
pub use auth_state::*;
