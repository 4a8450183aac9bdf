//! Hamburger menu wiring: toggle, close on link click, close on outside click.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::Node;

use crate::page::Page;
use crate::util::listen;

pub fn install(page: &Rc<Page>) {
    let (Some(hamburger), Some(nav)) = (page.dom.hamburger.as_ref(), page.dom.nav.as_ref()) else {
        return;
    };

    let p = Rc::clone(page);
    listen::on(hamburger, "click", move |_| {
        let effects = p.menu.borrow_mut().toggle();
        p.run(effects);
    });

    for link in &page.dom.nav_anchors {
        let p = Rc::clone(page);
        listen::on(link, "click", move |_| {
            let effects = p.menu.borrow_mut().link_clicked();
            p.run(effects);
        });
    }

    let p = Rc::clone(page);
    let (nav, hamburger) = (nav.clone(), hamburger.clone());
    listen::on(&page.dom.document, "click", move |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside_menu = nav.contains(target.as_ref());
        let inside_hamburger = hamburger.contains(target.as_ref());
        let effects = p.menu.borrow_mut().document_clicked(inside_menu, inside_hamburger);
        p.run(effects);
    });
}
