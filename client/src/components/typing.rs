//! Hero heading typing animation.

use std::rc::Rc;

use crate::page::Page;

pub fn install(page: &Rc<Page>) {
    if page.dom.hero_role.is_none() {
        return;
    }
    let effects = page.typing.borrow().start();
    page.run(effects);
}
