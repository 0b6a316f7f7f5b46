use super::*;

use std::cell::Cell;

fn run(registry: &EventRegistry, event: &str, data: &serde_json::Value) {
    if let Some(handler) = registry.handler(event) {
        handler.borrow_mut()(data);
    }
}

#[test]
fn on_registers_a_handler() {
    let mut registry = EventRegistry::new();
    assert!(!registry.is_subscribed("current-bands"));

    registry.on("current-bands", |_| {});
    assert!(registry.is_subscribed("current-bands"));
}

#[test]
fn registered_handler_receives_payload() {
    let mut registry = EventRegistry::new();
    let seen = Rc::new(RefCell::new(None::<serde_json::Value>));
    let seen_in_handler = seen.clone();
    registry.on("current-bands", move |data| {
        *seen_in_handler.borrow_mut() = Some(data.clone());
    });

    run(&registry, "current-bands", &serde_json::json!([{ "id": "b-1" }]));
    assert_eq!(*seen.borrow(), Some(serde_json::json!([{ "id": "b-1" }])));
}

#[test]
fn reregistration_replaces_the_earlier_handler() {
    let mut registry = EventRegistry::new();
    let first_calls = Rc::new(Cell::new(0u32));
    let second_calls = Rc::new(Cell::new(0u32));

    let first = first_calls.clone();
    registry.on("current-bands", move |_| first.set(first.get() + 1));
    let second = second_calls.clone();
    registry.on("current-bands", move |_| second.set(second.get() + 1));

    run(&registry, "current-bands", &serde_json::json!([]));

    // Exactly one delivery, and only to the most recent registration.
    assert_eq!(first_calls.get(), 0);
    assert_eq!(second_calls.get(), 1);
}

#[test]
fn off_removes_the_handler() {
    let mut registry = EventRegistry::new();
    let calls = Rc::new(Cell::new(0u32));
    let counter = calls.clone();
    registry.on("current-bands", move |_| counter.set(counter.get() + 1));

    registry.off("current-bands");
    run(&registry, "current-bands", &serde_json::json!([]));

    assert!(!registry.is_subscribed("current-bands"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn off_is_idempotent_without_registration() {
    let mut registry = EventRegistry::new();
    registry.off("current-bands");
    registry.off("current-bands");
    assert!(!registry.is_subscribed("current-bands"));
}

#[test]
fn unknown_event_has_no_handler() {
    let mut registry = EventRegistry::new();
    registry.on("current-bands", |_| {});
    assert!(registry.handler("vote-band").is_none());
}
