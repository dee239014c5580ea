// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use crate::config::AppConfig;
use crate::state::{
    AccordionState, LocaleState, MobileMenuState, QuoteFormState, ScrollCoalescer, ScrollStyleState,
};

/// Prefijo de ids de los paneles del FAQ
pub const FAQ_PREFIX: &str = "faq";

/// Estado global. Clonar comparte los mismos `Rc`.
#[derive(Clone)]
pub struct AppState {
    pub locale: LocaleState,

    // Controladores de UI (estado local, sin persistencia)
    pub accordion: Rc<RefCell<AccordionState>>,
    pub menu: Rc<RefCell<MobileMenuState>>,
    pub scroll_style: Rc<RefCell<ScrollStyleState>>,
    pub scroll_coalescer: Rc<RefCell<ScrollCoalescer>>,
    pub quote_form: Rc<RefCell<QuoteFormState>>,

    /// Temporizador de auto-reversión del formulario; reemplazarlo lo cancela
    pub submit_timer: Rc<RefCell<Option<Timeout>>>,
}

impl AppState {
    pub fn new(locale: LocaleState, config: &AppConfig) -> Self {
        Self {
            locale,
            accordion: Rc::new(RefCell::new(AccordionState::new(FAQ_PREFIX, 0))),
            menu: Rc::new(RefCell::new(MobileMenuState::new())),
            scroll_style: Rc::new(RefCell::new(ScrollStyleState::new(config.navigation.scroll_threshold_px))),
            scroll_coalescer: Rc::new(RefCell::new(ScrollCoalescer::new(config.navigation.scroll_throttle_ms))),
            quote_form: Rc::new(RefCell::new(QuoteFormState::new())),
            submit_timer: Rc::new(RefCell::new(None)),
        }
    }

    /// Estado local que no sobrevive a un re-render completo
    pub fn reset_page_state(&self, faq_count: usize) {
        self.accordion.borrow_mut().reset(faq_count);
        self.menu.borrow_mut().close();
        *self.quote_form.borrow_mut() = QuoteFormState::new();
        self.submit_timer.borrow_mut().take();
    }
}
