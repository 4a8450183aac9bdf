//! Back-to-top control wiring.

use std::rc::Rc;

use crate::page::Page;
use crate::util::listen;

pub fn install(page: &Rc<Page>) {
    let Some(control) = page.dom.back_to_top.as_ref() else {
        return;
    };

    let p = Rc::clone(page);
    listen::passive(&page.dom.window, "scroll", move |_| {
        let mut state = p.back_to_top.get();
        let effect = state.scrolled(p.dom.scroll_y());
        p.back_to_top.set(state);
        p.run(vec![effect]);
    });

    let p = Rc::clone(page);
    listen::on(control, "click", move |_| {
        let effect = p.back_to_top.get().clicked();
        p.run(vec![effect]);
    });
}
