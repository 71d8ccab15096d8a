use std::cell::RefCell;

/// Receiver side of the model's change notifications.
///
/// The callback carries no payload: an observer is expected to re-read
/// whatever model state it cares about once it is told something changed.
pub trait ModelObserver: Send {
    fn model_changed(&mut self);
}

/// Holds the registered observers and fans a change notification out to
/// every one of them, synchronously, in registration order.
pub struct ObserverRegistry {
    observers: RefCell<Vec<Box<dyn ModelObserver>>>,
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field(
                "observers",
                &format!("<{} observers>", self.observers.borrow().len()),
            )
            .finish()
    }
}

impl Default for ObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Register an observer to be notified after every model change.
    pub fn subscribe(&self, observer: Box<dyn ModelObserver>) {
        self.observers.borrow_mut().push(observer);
    }

    /// Notify all registered observers, in the order they subscribed.
    pub fn notify_all(&self) {
        for observer in &mut *self.observers.borrow_mut() {
            observer.model_changed();
        }
    }
}
