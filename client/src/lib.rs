//! # client
//!
//! WASM host for the portfolio page. The page markup is static HTML; this
//! crate wires its interactive behavior once the document has loaded. All
//! decisions live in the `interactions` crate, which returns effects. This
//! crate resolves DOM elements, installs listeners, applies those effects,
//! runs timers, and performs the contact form POST.
//!
//! Browser glue is compiled only with the `hydrate` feature. Without it the
//! crate still builds natively so its portable helpers can be unit tested.


pub mod net;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod components;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod page;

/// WASM entry point. Sets up logging and boots the page once the DOM is
/// ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if waits_for_dom(&document.ready_state()) {
        util::listen::once(&document, "DOMContentLoaded", |_| page::boot());
    } else {
        page::boot();
    }
}

/// Whether a document in `ready_state` has not finished parsing yet, so boot
/// must wait for `DOMContentLoaded`.
#[must_use]
pub fn waits_for_dom(ready_state: &str) -> bool {
    ready_state == "loading"
}
