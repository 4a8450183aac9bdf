//! Theme toggle wiring.
//!
//! Applies the stored preference at boot even when the toggle control is
//! missing; the click handler needs the control.

use std::rc::Rc;

use crate::page::Page;
use crate::util::listen;

pub fn install(page: &Rc<Page>) {
    let initial = page.theme.borrow().init();
    page.run(initial);

    let Some(toggle) = page.dom.theme_toggle.as_ref() else {
        log::debug!("theme toggle missing; click handler not installed");
        return;
    };
    let page_for_click = Rc::clone(page);
    listen::on(toggle, "click", move |_| {
        let effects = page_for_click.theme.borrow_mut().toggle();
        page_for_click.run(effects);
    });
}
