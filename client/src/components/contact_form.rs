//! Contact form wiring.
//!
//! The submit handler snapshots the fields, lets `ContactForm` decide, and for
//! a live endpoint spawns the POST. While the request is pending the submit
//! button stays disabled and the engine ignores further submits.

use std::rc::Rc;

use interactions::contact::{ContactInput, Submission};

use crate::dom::{EMAIL_FIELD_ID, FORM_ID, MESSAGE_FIELD_ID, NAME_FIELD_ID};
use crate::net;
use crate::page::Page;
use crate::util::listen;

pub fn install(page: &Rc<Page>) {
    let Some(form) = page.dom.form.as_ref() else {
        return;
    };

    let p = Rc::clone(page);
    let form_el = form.clone();
    listen::on(form, "submit", move |ev| {
        ev.prevent_default();
        let input = ContactInput::new(
            &p.dom.field_value(NAME_FIELD_ID),
            &p.dom.field_value(EMAIL_FIELD_ID),
            &p.dom.field_value(MESSAGE_FIELD_ID),
        );
        let action = form_el.get_attribute("action").unwrap_or_default();
        let submission = p.contact.borrow_mut().submit(&input, &action);
        match submission {
            Submission::Ignored => log::debug!("contact submit ignored; request in flight"),
            Submission::Done(effects) => p.run(effects),
            Submission::Post { url, effects } => {
                p.run(effects);
                let p = Rc::clone(&p);
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = net::contact::submit_form(&url, FORM_ID).await;
                    let effects = p.contact.borrow_mut().finish(&outcome);
                    p.run(effects);
                });
            }
        }
    });
}
