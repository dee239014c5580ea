// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers
// ============================================================================
// Los subscribers se notifican en orden de suscripción. La lista se copia
// antes de notificar: un callback puede suscribir o desuscribir sin
// invalidar la iteración en curso.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct Subscribers<T> {
    callbacks: RefCell<Vec<(SubscriptionId, Callback<T>)>>,
    next_id: Cell<u64>,
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            callbacks: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.callbacks.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut callbacks = self.callbacks.borrow_mut();
        let before = callbacks.len();
        callbacks.retain(|(existing, _)| *existing != id);
        callbacks.len() != before
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<Callback<T>> = self
            .callbacks
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in snapshot {
            callback(value);
        }
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifies_in_subscription_order() {
        let subscribers = Subscribers::<u32>::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for name in ["navbar", "home", "footer"] {
            let log = log.clone();
            subscribers.subscribe(move |value: &u32| log.borrow_mut().push(format!("{}:{}", name, value)));
        }
        subscribers.notify(&7);
        assert_eq!(*log.borrow(), vec!["navbar:7", "home:7", "footer:7"]);
    }

    #[test]
    fn unsubscribe_removes_only_that_callback() {
        let subscribers = Subscribers::<()>::new();
        let hits = Rc::new(Cell::new(0));
        let first = {
            let hits = hits.clone();
            subscribers.subscribe(move |_| hits.set(hits.get() + 1))
        };
        {
            let hits = hits.clone();
            subscribers.subscribe(move |_| hits.set(hits.get() + 10));
        }
        assert!(subscribers.unsubscribe(first));
        assert!(!subscribers.unsubscribe(first));
        subscribers.notify(&());
        assert_eq!(hits.get(), 10);
        assert_eq!(subscribers.len(), 1);
    }

    #[test]
    fn subscribing_during_notify_is_safe() {
        let subscribers = Rc::new(Subscribers::<()>::new());
        let inner = subscribers.clone();
        subscribers.subscribe(move |_| {
            inner.subscribe(|_| {});
        });
        subscribers.notify(&());
        assert_eq!(subscribers.len(), 2);
    }
}
