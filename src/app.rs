// ============================================================================
// APP - Aplicación principal
// ============================================================================
// - Ruta resuelta una vez por carga de página.
// - Re-render completo sólo al cambiar de idioma o al terminar de cargar
//   las tablas; acordeón, menú, scroll y formulario son incrementales.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::*;
use crate::models::locale::Locale;
use crate::models::route::Route;
use crate::services::reveal_service::RevealObservers;
use crate::services::{default_store, BrowserDocument, TranslationService};
use crate::state::{AppState, LocaleState};
use crate::utils::*;
use crate::viewmodels::{scroll_target_offset, PageViewModel};
use crate::views::{render_app, render_loading, ViewHandlers};

pub struct App {
    root: Element,
    route: Route,
    state: AppState,
    translations: Rc<TranslationService>,
    handlers: ViewHandlers,
    /// Ancla de la URL (`/#quote`) pendiente hasta el primer render completo
    pending_anchor: Option<String>,
    load_scheduled: Rc<Cell<bool>>,
    reveal: RevealObservers,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let route = current_route()?;
        if let Route::NotFound { path } = &route {
            log::error!("❌ [ROUTER] 404: ruta inexistente '{}'", path);
        }
        let pending_anchor = match &route {
            Route::Home { anchor } => anchor.clone(),
            _ => None,
        };

        let locale = LocaleState::load(
            default_store(),
            Box::new(BrowserDocument),
            &CONFIG.locale.storage_key,
            CONFIG.locale.default_locale(),
        );
        let state = AppState::new(locale, &CONFIG);
        let translations = Rc::new(TranslationService::new(CONFIG.locale.default_locale()));

        // Batchear re-renders: varios cambios seguidos => un solo render
        state.locale.subscribe(|locale| {
            log::debug!("🔄 [APP] Idioma '{}', re-render programado", locale);
            Timeout::new(0, crate::rerender_app).forget();
        });

        let handlers = build_handlers(&state);
        install_global_listeners(&state)?;

        Ok(Self {
            root,
            route,
            state,
            translations,
            handlers,
            pending_anchor,
            load_scheduled: Rc::new(Cell::new(false)),
            reveal: RevealObservers::new(),
        })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        let locale = self.state.locale.get_active_locale();

        // Nada traducido se pinta antes de tener las tablas
        if !self.translations.is_ready(locale) {
            self.reveal.disconnect();
            clear_children(&self.root);
            append_child(&self.root, &render_loading()?)?;
            self.schedule_load(locale);
            return Ok(());
        }

        let vm = PageViewModel::new(&self.translations, locale, &CONFIG);
        let faq_count = if self.route.is_home() { vm.faq().entries.len() } else { 0 };
        self.state.reset_page_state(faq_count);
        self.state.scroll_style.borrow_mut().update(scroll_y());

        clear_children(&self.root);
        let page = render_app(&self.route, &vm, &self.state, &self.handlers)?;
        append_child(&self.root, &page)?;
        log::info!("✅ [APP] Página '{}' renderizada en '{}'", self.route.path(), locale);

        if let Err(e) = self.reveal.observe(&self.root) {
            log::warn!("⚠️ [APP] Error observando animaciones: {:?}", e);
        }

        if let Some(anchor) = self.pending_anchor.take() {
            scroll_to_anchor(&anchor)?;
        }
        Ok(())
    }

    /// Cargar las tablas fuera del render y volver a pintar
    fn schedule_load(&self, locale: Locale) {
        if self.load_scheduled.replace(true) {
            return;
        }
        log::info!("⏳ [APP] Cargando traducciones '{}'...", locale);
        let translations = self.translations.clone();
        let scheduled = self.load_scheduled.clone();
        wasm_bindgen_futures::spawn_local(async move {
            translations.ensure_ready(locale);
            scheduled.set(false);
            crate::rerender_app();
        });
    }
}

fn current_route() -> Result<Route, JsValue> {
    let location = window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location();
    Ok(Route::from_location(&location.pathname()?, &location.hash()?))
}

/// Scroll suave a `#anchor` compensando la altura del navbar fijo.
/// `false` si el ancla no existe en la página.
fn scroll_to_anchor(anchor: &str) -> Result<bool, JsValue> {
    let Some(target) = get_element_by_id(anchor) else {
        log::debug!("⚠️ [NAV] Ancla '#{}' no encontrada", anchor);
        return Ok(false);
    };
    let top = scroll_target_offset(
        document_top(&target),
        offset_height(NAVBAR_ID),
        CONFIG.navigation.anchor_margin_px,
    );
    smooth_scroll_to(top)?;
    Ok(true)
}

fn build_handlers(state: &AppState) -> ViewHandlers {
    let on_anchor = Rc::new(|anchor: &str| {
        if let Err(e) = scroll_to_anchor(anchor) {
            log::error!("❌ [NAV] Error en scroll a '#{}': {:?}", anchor, e);
        }
    });

    let menu = state.menu.clone();
    let on_menu_toggle = Rc::new(move || {
        let open = menu.borrow_mut().toggle();
        log::debug!("📱 [NAV] Menú móvil {}", if open { "abierto" } else { "cerrado" });
        if let Err(e) = sync_mobile_menu(&menu.borrow()) {
            log::error!("❌ [NAV] {:?}", e);
        }
    });

    let menu = state.menu.clone();
    let on_menu_link = Rc::new(move || {
        if menu.borrow_mut().close() {
            if let Err(e) = sync_mobile_menu(&menu.borrow()) {
                log::error!("❌ [NAV] {:?}", e);
            }
        }
    });

    let locale = state.locale.clone();
    let on_locale = Rc::new(move |code: &str| {
        locale.set_active_locale(code);
    });

    let accordion = state.accordion.clone();
    let on_faq_toggle = Rc::new(move |index: usize| {
        accordion.borrow_mut().toggle(index);
        if let Err(e) = sync_accordion(&accordion.borrow()) {
            log::error!("❌ [FAQ] {:?}", e);
        }
    });

    let form = state.quote_form.clone();
    let timer = state.submit_timer.clone();
    let on_submit = Rc::new(move || {
        let Some(ticket) = form.borrow_mut().submit() else {
            return;
        };
        log::info!("📨 [FORM] Enviando presupuesto");
        if let Err(e) = sync_submit_button(&form.borrow()) {
            log::error!("❌ [FORM] {:?}", e);
        }

        // Si la navegación no ocurre, volver al estado inicial
        let form_on_timeout = form.clone();
        let timeout = Timeout::new(CONFIG.form.submit_timeout_ms, move || {
            if form_on_timeout.borrow_mut().timeout_elapsed(ticket) {
                log::warn!("⏱️ [FORM] Envío sin respuesta, botón restaurado");
                if let Err(e) = sync_submit_button(&form_on_timeout.borrow()) {
                    log::error!("❌ [FORM] {:?}", e);
                }
            }
        });
        *timer.borrow_mut() = Some(timeout);
    });

    let form = state.quote_form.clone();
    let timer = state.submit_timer.clone();
    let on_field_edit = Rc::new(move || {
        if form.borrow_mut().field_edited() {
            timer.borrow_mut().take();
            if let Err(e) = sync_submit_button(&form.borrow()) {
                log::error!("❌ [FORM] {:?}", e);
            }
        }
    });

    ViewHandlers {
        on_anchor,
        on_menu_toggle,
        on_menu_link,
        on_locale,
        on_faq_toggle,
        on_submit,
        on_field_edit,
    }
}

fn install_global_listeners(state: &AppState) -> Result<(), JsValue> {
    // Scroll: una actualización del navbar por ventana de `scroll_throttle_ms`
    let coalescer = state.scroll_coalescer.clone();
    let scroll_style = state.scroll_style.clone();
    GlobalListeners::on_window("navbar-scroll", "scroll", move |_| {
        if !coalescer.borrow_mut().on_scroll(scroll_y()) {
            return;
        }
        let interval = coalescer.borrow().interval_ms();
        let coalescer = coalescer.clone();
        let scroll_style = scroll_style.clone();
        Timeout::new(interval, move || {
            let Some(y) = coalescer.borrow_mut().flush() else {
                return;
            };
            if scroll_style.borrow_mut().update(y) {
                if let Err(e) = sync_scroll_style(&scroll_style.borrow()) {
                    log::error!("❌ [NAV] {:?}", e);
                }
            }
        })
        .forget();
    })?;

    let menu = state.menu.clone();
    GlobalListeners::on_document_key("keyboard", move |event| match event.key().as_str() {
        "Escape" => {
            if menu.borrow_mut().handle_escape() {
                if let Err(e) = sync_mobile_menu(&menu.borrow()) {
                    log::error!("❌ [NAV] {:?}", e);
                }
                if let Some(button) = get_element_by_id(MOBILE_MENU_BUTTON_ID) {
                    let _ = focus(&button);
                }
            }
        }
        "Tab" => {
            if let Some(body) = body() {
                let _ = add_class(&body, TABBING_CLASS);
            }
        }
        _ => {}
    })?;

    GlobalListeners::on_document_mouse("pointer-focus", "mousedown", |_| {
        if let Some(body) = body() {
            let _ = remove_class(&body, TABBING_CLASS);
        }
    })?;

    Ok(())
}
