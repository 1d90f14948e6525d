//! Change notification.
//!
//! A managed observer registry. Subscribers are zero-argument callbacks run
//! synchronously on the mutating caller's thread, in registration order,
//! after every successful persist. Registration itself invokes the callback
//! once, so a fresh subscriber gets an immediate snapshot signal.
//!
//! Dispatch is deliberately not hardened: a panicking callback unwinds
//! through [`ChangeNotifier::emit`] and skips the remaining subscribers.

/// Registry of change subscribers.
#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: Vec<Box<dyn Fn() + Send>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register `callback` and invoke it once immediately.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn() + Send + 'static,
    {
        callback();
        self.subscribers.push(Box::new(callback));
    }

    /// Invoke every subscriber, in registration order.
    pub fn emit(&self) {
        for callback in &self.subscribers {
            callback();
        }
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
