//! Scroll reveal via `IntersectionObserver`.
//!
//! Without observer support every card is revealed immediately, so content
//! is never left hidden.

use std::rc::Rc;

use interactions::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use interactions::reveal::Intersection;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::page::Page;

pub fn install(page: &Rc<Page>) {
    if page.dom.reveals.is_empty() {
        return;
    }

    let p = Rc::clone(page);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let batch: Vec<Intersection> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    let index = p.dom.reveals.iter().position(|el| *el == target)?;
                    Some(Intersection { index, intersecting: entry.is_intersecting() })
                })
                .collect();
            let effects = p.reveal.borrow_mut().observe(&batch);
            p.run(effects);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&REVEAL_THRESHOLD.into());
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("IntersectionObserver unavailable ({err:?}); revealing all cards");
            reveal_all(page);
            return;
        }
    };
    callback.forget();

    for el in &page.dom.reveals {
        observer.observe(el);
    }
    *page.observer.borrow_mut() = Some(observer);
}

fn reveal_all(page: &Rc<Page>) {
    let batch: Vec<Intersection> =
        (0..page.dom.reveals.len()).map(|index| Intersection { index, intersecting: true }).collect();
    let effects = page.reveal.borrow_mut().observe(&batch);
    page.run(effects);
}
