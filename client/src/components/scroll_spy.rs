//! Smooth-scroll link clicks and scroll-driven active-link tracking.

use std::rc::Rc;

use interactions::scroll_spy::Section;

use crate::page::Page;
use crate::util::listen;

pub fn install(page: &Rc<Page>) {
    for (index, link) in page.dom.nav_links.iter().enumerate() {
        let p = Rc::clone(page);
        listen::on(link, "click", move |ev| {
            let Some(id) = p.spy.target_id(index) else {
                return;
            };
            ev.prevent_default();
            let Some(target) = p.dom.document.get_element_by_id(id) else {
                return;
            };
            let top = target.get_bounding_client_rect().top() + p.dom.scroll_y();
            let effects = p.spy.link_clicked(index, top);
            p.run(effects);
        });
    }

    let p = Rc::clone(page);
    listen::on(&page.dom.window, "scroll", move |_| highlight(&p));
    highlight(page);
}

fn highlight(page: &Rc<Page>) {
    let sections: Vec<Section> = page
        .dom
        .sections
        .iter()
        .map(|s| Section::new(s.id(), f64::from(s.offset_top()), f64::from(s.offset_height())))
        .collect();
    let effects = page.spy.scrolled(page.dom.scroll_y(), &sections);
    page.run(effects);
}
