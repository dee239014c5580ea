// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod locale_state;
pub mod accordion_state;
pub mod navigation_state;
pub mod quote_form_state;
pub mod app_state;

pub use reactivity::*;
pub use locale_state::*;
pub use accordion_state::*;
pub use navigation_state::*;
pub use quote_form_state::*;
pub use app_state::*;
