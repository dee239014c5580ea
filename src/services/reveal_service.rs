// ============================================================================
// REVEAL SERVICE - Animación de entrada e imágenes diferidas
// ============================================================================
// - `[data-reveal]`: recibe la clase de animación al entrar en pantalla,
//   opcionalmente tras `data-reveal-delay` ms, y deja de observarse.
// - `img[loading=lazy]`: opacity-0 hasta ser visible.
// Sin IntersectionObserver no se oculta nada.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use gloo_timers::callback::Timeout;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use crate::utils::{REVEAL_ATTR, REVEAL_CLASS, REVEAL_DELAY_ATTR};

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const LAZY_IMAGE_SELECTOR: &str = "img[loading=\"lazy\"]";
const IMAGE_HIDDEN_CLASS: &str = "opacity-0";
const IMAGE_VISIBLE_CLASS: &str = "opacity-100";
const IMAGE_TRANSITION_CLASSES: [&str; 2] = ["transition-opacity", "duration-300"];

/// Retraso de `data-reveal-delay`; valores inválidos o ausentes = 0
pub fn parse_delay(raw: Option<String>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok()).unwrap_or(0)
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|win| js_sys::Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Algo observado que puede desconectarse
trait Observation {
    fn disconnect(&self);
}

struct ActiveObserver {
    observer: IntersectionObserver,
    // Vive mientras el observer esté conectado
    _callback: ObserverCallback,
}

impl Observation for ActiveObserver {
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

fn create_observer<F>(on_visible: F, root_margin: Option<&str>) -> Result<ActiveObserver, JsValue>
where
    F: Fn(&Element) + 'static,
{
    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            on_visible(&target);
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    Ok(ActiveObserver { observer, _callback: callback })
}

fn reveal(element: &Element) {
    let delay = parse_delay(element.get_attribute(REVEAL_DELAY_ATTR));
    if delay == 0 {
        let _ = element.class_list().add_1(REVEAL_CLASS);
        return;
    }
    let element = element.clone();
    Timeout::new(delay, move || {
        let _ = element.class_list().add_1(REVEAL_CLASS);
    })
    .forget();
}

fn show_image(image: &Element) {
    // `data-src` diferido, si lo hay
    if let Some(source) = image.get_attribute("data-src") {
        let _ = image.set_attribute("src", &source);
    }
    let _ = image.class_list().remove_1(IMAGE_HIDDEN_CLASS);
    let _ = image.class_list().add_1(IMAGE_VISIBLE_CLASS);
}

fn elements(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Observers del último render. Cada render completo desconecta los
/// anteriores antes de observar el árbol nuevo.
#[derive(Default)]
pub struct RevealObservers {
    active: Vec<Box<dyn Observation>>,
}

impl RevealObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    fn track(&mut self, observation: Box<dyn Observation>) {
        self.active.push(observation);
    }

    /// Desconectar y liberar todos los observers activos
    pub fn disconnect(&mut self) {
        for observation in self.active.drain(..) {
            observation.disconnect();
        }
    }

    /// Observar los elementos del árbol recién renderizado
    pub fn observe(&mut self, root: &Element) -> Result<(), JsValue> {
        self.disconnect();
        if !observer_supported() {
            log::debug!("⚠️ [REVEAL] IntersectionObserver no disponible");
            return Ok(());
        }

        let revealable = elements(root, &format!("[{}]", REVEAL_ATTR))?;
        if !revealable.is_empty() {
            let active = create_observer(reveal, Some(REVEAL_ROOT_MARGIN))?;
            for element in &revealable {
                active.observer.observe(element);
            }
            self.track(Box::new(active));
        }

        let images = elements(root, LAZY_IMAGE_SELECTOR)?;
        if !images.is_empty() {
            let active = create_observer(show_image, None)?;
            for image in &images {
                image.class_list().add_1(IMAGE_HIDDEN_CLASS)?;
                for class in IMAGE_TRANSITION_CLASSES {
                    image.class_list().add_1(class)?;
                }
                active.observer.observe(image);
            }
            self.track(Box::new(active));
        }

        log::debug!("✨ [REVEAL] {} elementos, {} imágenes observadas", revealable.len(), images.len());
        Ok(())
    }
}

impl Drop for RevealObservers {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn delay_parsing() {
        assert_eq!(parse_delay(None), 0);
        assert_eq!(parse_delay(Some("150".to_string())), 150);
        assert_eq!(parse_delay(Some(" 300 ".to_string())), 300);
        assert_eq!(parse_delay(Some("-20".to_string())), 0);
        assert_eq!(parse_delay(Some("soon".to_string())), 0);
    }

    struct CountingObservation(Rc<Cell<u32>>);

    impl Observation for CountingObservation {
        fn disconnect(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn disconnect_releases_previous_observers() {
        let disconnects = Rc::new(Cell::new(0));
        let mut observers = RevealObservers::new();
        observers.track(Box::new(CountingObservation(disconnects.clone())));
        observers.track(Box::new(CountingObservation(disconnects.clone())));
        assert_eq!(observers.len(), 2);

        observers.disconnect();
        assert_eq!(disconnects.get(), 2);
        assert!(observers.is_empty());

        // Sin observers activos no hay nada que desconectar
        observers.disconnect();
        assert_eq!(disconnects.get(), 2);
    }

    #[test]
    fn dropping_the_set_disconnects() {
        let disconnects = Rc::new(Cell::new(0));
        {
            let mut observers = RevealObservers::new();
            observers.track(Box::new(CountingObservation(disconnects.clone())));
        }
        assert_eq!(disconnects.get(), 1);
    }
}
