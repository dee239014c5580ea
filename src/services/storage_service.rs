// ============================================================================
// STORAGE SERVICE - Persistencia clave/valor (localStorage)
// ============================================================================
// Si localStorage no está disponible (modo privado, cookies bloqueadas...)
// se usa MemoryStorage: la preferencia dura sólo la sesión actual.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::{window, Storage};

/// Almacén clave/valor de cadenas
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// localStorage del navegador
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<Storage, String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| "No se pudo acceder a localStorage".to_string())
    }

    /// Verifica si localStorage es utilizable
    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| "Error leyendo localStorage".to_string())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| "Error guardando en localStorage".to_string())
    }
}

/// Almacén en memoria
#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.values.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// localStorage si existe, memoria en caso contrario
pub fn default_store() -> Box<dyn KeyValueStore> {
    if BrowserStorage::is_available() {
        Box::new(BrowserStorage)
    } else {
        log::warn!("⚠️ [STORAGE] localStorage no disponible, usando memoria");
        Box::new(MemoryStorage::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("i18nextLng"), Ok(None));
        storage.set("i18nextLng", "pt").expect("set");
        assert_eq!(storage.get("i18nextLng"), Ok(Some("pt".to_string())));
    }

    #[test]
    fn with_entry_seeds_value() {
        let storage = MemoryStorage::with_entry("i18nextLng", "fr");
        assert_eq!(storage.get("i18nextLng"), Ok(Some("fr".to_string())));
    }
}
