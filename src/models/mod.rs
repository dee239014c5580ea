pub mod locale;
pub mod translation;
pub mod route;
pub mod quote;

pub use locale::{Locale, TextDirection};
pub use translation::{TranslationTable, TranslationValue};
pub use route::Route;
pub use quote::QuoteField;
