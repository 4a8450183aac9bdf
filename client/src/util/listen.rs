//! Event listener registration.
//!
//! Listeners live for the whole page, so their closures are leaked with
//! `forget` instead of being stored and removed.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// Attach `handler` for `event` on `target`.
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    register(target, event, handler, &AddEventListenerOptions::new());
}

/// Attach a passive listener (the handler never calls `preventDefault`).
pub fn passive<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    register(target, event, handler, &options);
}

/// Attach a listener that the browser removes after its first call.
pub fn once<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    register(target, event, handler, &options);
}

fn register<F>(target: &EventTarget, event: &str, handler: F, options: &AddEventListenerOptions)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        options,
    ) {
        log::warn!("add_event_listener({event}) failed: {err:?}");
        return;
    }
    cb.forget();
}
