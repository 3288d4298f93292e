//! Button Notification Dispatch
//!
//! Edge-triggered observer lists for button press and release transitions.
//! Registration is append-only; dispatch is synchronous, in registration
//! order, on the caller's stack. A panicking observer propagates into the
//! event pump; this crate does not isolate observer failures.

use crate::button::MouseButton;
use tracing::trace;

/// Observer callback invoked with the button that transitioned
pub type ButtonObserver = Box<dyn FnMut(MouseButton)>;

/// Ordered, append-only collection of button observers
#[derive(Default)]
pub(crate) struct ObserverSet {
    observers: Vec<ButtonObserver>,
}

impl ObserverSet {
    /// Append an observer; it is invoked after all previously registered ones.
    pub(crate) fn register(&mut self, observer: ButtonObserver) {
        self.observers.push(observer);
    }

    /// Invoke every observer with the given button, in registration order.
    ///
    /// Zero registered observers is a harmless no-op.
    pub(crate) fn dispatch(&mut self, button: MouseButton) {
        trace!(?button, observers = self.observers.len(), "dispatch");
        for observer in &mut self.observers {
            observer(button);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("observers", &self.observers.len())
            .finish()
    }
}
