pub mod storage_service;
pub mod document_service;
pub mod translation_service;
pub mod reveal_service;

pub use storage_service::{default_store, BrowserStorage, KeyValueStore, MemoryStorage};
pub use document_service::{BrowserDocument, DocumentHost, LANGUAGE_CHANGED_EVENT};
pub use translation_service::TranslationService;
