//! Footer year stamp.

use std::rc::Rc;

use interactions::year;

use crate::page::Page;

pub fn install(page: &Rc<Page>) {
    if page.dom.year.is_none() {
        return;
    }
    let now = js_sys::Date::new_0();
    page.run(vec![year::stamp(now.get_full_year())]);
}
