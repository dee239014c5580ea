// ids y clases compartidos entre las vistas y las actualizaciones incrementales

/// Elemento raíz de la aplicación en index.html
pub const APP_ROOT_ID: &str = "app";

pub const NAVBAR_ID: &str = "navbar";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_MENU_BUTTON_ID: &str = "mobile-menu-btn";
pub const MOBILE_MENU_ICON_ID: &str = "mobile-menu-icon";

pub const QUOTE_FORM_ID: &str = "quote-form";
pub const SUBMIT_BUTTON_ID: &str = "submit-btn";
pub const SUBMIT_TEXT_ID: &str = "submit-text";

/// Clases del navbar cuando se pasó el umbral de scroll
pub const NAVBAR_SCROLLED_CLASSES: [&str; 2] = ["navbar-scrolled", "shadow-sm"];
/// Clase del botón de envío mientras está ocupado
pub const SUBMIT_BUSY_CLASS: &str = "opacity-75";
/// Clase para ocultar elementos
pub const HIDDEN_CLASS: &str = "hidden";
/// Foco visible sólo para usuarios de teclado
pub const TABBING_CLASS: &str = "user-is-tabbing";

/// Elementos con animación de entrada
pub const REVEAL_ATTR: &str = "data-reveal";
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay";
pub const REVEAL_CLASS: &str = "animate-fade-in-up";
