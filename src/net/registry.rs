//! Named-event subscription table for inbound channel dispatch.
//!
//! DESIGN
//! ======
//! Push-based delivery makes duplicate registration a correctness bug: two
//! live handlers for the same event would double-apply every broadcast. The
//! table therefore holds at most one handler per event name and replaces on
//! re-registration, so repeated screen mount/unmount cycles stay safe.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared inbound-event handler.
///
/// Handlers are reference-counted so the channel loop can release its borrow
/// of the table before invoking one; a handler may then call `on`/`off`
/// itself without re-entering a held borrow.
pub type EventHandler = Rc<RefCell<dyn FnMut(&serde_json::Value)>>;

/// Subscription table keyed by event name, at most one handler per name.
#[derive(Default)]
pub struct EventRegistry {
    handlers: HashMap<String, EventHandler>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event`, dropping any earlier registration
    /// under the same name first.
    pub fn on<F>(&mut self, event: &str, handler: F)
    where
        F: FnMut(&serde_json::Value) + 'static,
    {
        self.handlers.insert(event.to_owned(), Rc::new(RefCell::new(handler)));
    }

    /// Deregister the handler for `event`. Idempotent if none is registered.
    pub fn off(&mut self, event: &str) {
        self.handlers.remove(event);
    }

    /// Look up the live handler for `event`, if any.
    pub fn handler(&self, event: &str) -> Option<EventHandler> {
        self.handlers.get(event).cloned()
    }

    /// Whether a handler is currently registered for `event`.
    pub fn is_subscribed(&self, event: &str) -> bool {
        self.handlers.contains_key(event)
    }
}
