// ============================================================================
// NAVIGATION STATE - Menú móvil y estilo del navbar según el scroll
// ============================================================================

/// Icono hamburguesa (menú cerrado)
pub const MENU_ICON_PATH: &str = "M4 6h16M4 12h16M4 18h16";
/// Icono X (menú abierto)
pub const CLOSE_ICON_PATH: &str = "M6 18L18 6M6 6l12 12";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MobileMenuState {
    open: bool,
}

impl MobileMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Cerrar (click en un enlace del menú). Devuelve si cambió.
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    /// Escape: cierra si estaba abierto. `true` => devolver el foco al botón.
    pub fn handle_escape(&mut self) -> bool {
        self.close()
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    pub fn icon_path(&self) -> &'static str {
        if self.open { CLOSE_ICON_PATH } else { MENU_ICON_PATH }
    }
}

/// Flag "scrolled" del navbar
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollStyleState {
    threshold: f64,
    scrolled: bool,
}

impl ScrollStyleState {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, scrolled: false }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recalcular con la posición actual. Devuelve si el flag cambió.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

/// Agrupa ráfagas de eventos de scroll: como máximo un recálculo por ventana
/// de `interval_ms`, siempre con la última posición conocida.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollCoalescer {
    interval_ms: u32,
    pending: bool,
    latest_y: f64,
}

impl ScrollCoalescer {
    pub fn new(interval_ms: u32) -> Self {
        Self { interval_ms, pending: false, latest_y: 0.0 }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Registrar una posición. `true` => programar `flush` tras `interval_ms`.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.latest_y = scroll_y;
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Fin de la ventana: última posición, si había algo pendiente
    pub fn flush(&mut self) -> Option<f64> {
        if self.pending {
            self.pending = false;
            Some(self.latest_y)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggles_and_closes_on_link() {
        let mut menu = MobileMenuState::new();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.icon_path(), CLOSE_ICON_PATH);
        assert!(menu.close());
        assert!(!menu.is_open());
        assert_eq!(menu.icon_path(), MENU_ICON_PATH);
        assert!(!menu.close());
    }

    #[test]
    fn escape_only_matters_when_open() {
        let mut menu = MobileMenuState::new();
        assert!(!menu.handle_escape());
        menu.toggle();
        assert!(menu.handle_escape());
        assert!(!menu.is_open());
    }

    #[test]
    fn scrolled_flag_follows_threshold() {
        let mut style = ScrollStyleState::new(50.0);
        assert!(!style.update(10.0));
        assert!(!style.update(50.0));
        assert!(!style.is_scrolled());
        assert!(style.update(51.0));
        assert!(style.is_scrolled());
        assert!(!style.update(400.0));
        assert!(style.update(20.0));
        assert!(!style.is_scrolled());
    }

    #[test]
    fn coalescer_schedules_once_per_window() {
        let mut coalescer = ScrollCoalescer::new(10);
        assert!(coalescer.on_scroll(5.0));
        assert!(!coalescer.on_scroll(30.0));
        assert!(!coalescer.on_scroll(80.0));
        assert_eq!(coalescer.flush(), Some(80.0));
        assert_eq!(coalescer.flush(), None);
        assert!(coalescer.on_scroll(12.0));
        assert_eq!(coalescer.flush(), Some(12.0));
    }

    #[test]
    fn coalesced_scroll_drives_style() {
        let mut coalescer = ScrollCoalescer::new(10);
        let mut style = ScrollStyleState::new(50.0);
        for y in [0.0, 20.0, 45.0, 70.0] {
            coalescer.on_scroll(y);
        }
        if let Some(y) = coalescer.flush() {
            style.update(y);
        }
        assert!(style.is_scrolled());
        coalescer.on_scroll(10.0);
        if let Some(y) = coalescer.flush() {
            style.update(y);
        }
        assert!(!style.is_scrolled());
    }
}
