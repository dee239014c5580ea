// ============================================================================
// AMAZIN TIMBER WEB - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: funciones que construyen DOM (sin lógica)
// - ViewModels: modelos de página traducidos
// - Services: almacenamiento, documento, traducciones, animaciones
// - State: estado con Rc<RefCell> + suscripciones
// - Models: idiomas, tablas de traducción, rutas, formulario
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // Sin logging explícito sólo quedan warnings y errores
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Amazin Timber - Rust Puro + MVVM ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Re-render completo de la página actual
pub fn rerender_app() {
    APP.with(|app_cell| {
        let Ok(mut slot) = app_cell.try_borrow_mut() else {
            log::warn!("⚠️ [RERENDER] Render en curso, ignorando");
            return;
        };
        match slot.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        }
    });
}
