//! Contact form submission over HTTP.
//!
//! Client-side (hydrate): a `gloo-net` POST carrying the form's fields as
//! multipart form data. Without `hydrate` there is no network, and every
//! submission reports a transport failure.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into a [`SubmitOutcome`]; nothing here panics or
//! propagates. A non-ok response whose body cannot be read counts as a
//! transport failure, the same as a request that never completed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use interactions::contact::SubmitOutcome;

#[cfg(any(test, feature = "hydrate"))]
const ACCEPT: (&str, &str) = ("Accept", "application/json");

#[cfg(any(test, feature = "hydrate"))]
fn submit_failed_message(url: &str, reason: &str) -> String {
    format!("contact submit to {url} failed: {reason}")
}

#[cfg(any(test, feature = "hydrate"))]
fn rejected_message(url: &str, status: u16) -> String {
    format!("contact submit to {url} rejected: {status}")
}

/// POST the form identified by `form_id` to `url`.
pub async fn submit_form(url: &str, form_id: &str) -> SubmitOutcome {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(form) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(form_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
        else {
            log::warn!("{}", submit_failed_message(url, "form element missing"));
            return SubmitOutcome::Transport;
        };
        let data = match web_sys::FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(err) => {
                log::warn!("{}", submit_failed_message(url, &format!("{err:?}")));
                return SubmitOutcome::Transport;
            }
        };

        let request = match gloo_net::http::Request::post(url).header(ACCEPT.0, ACCEPT.1).body(data) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("{}", submit_failed_message(url, &err.to_string()));
                return SubmitOutcome::Transport;
            }
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(err) => {
                log::warn!("{}", submit_failed_message(url, &err.to_string()));
                return SubmitOutcome::Transport;
            }
        };
        if resp.ok() {
            return SubmitOutcome::Sent;
        }
        log::info!("{}", rejected_message(url, resp.status()));
        match resp.text().await {
            Ok(body) => SubmitOutcome::from_response(false, &body),
            Err(err) => {
                log::warn!("{}", submit_failed_message(url, &err.to_string()));
                SubmitOutcome::Transport
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, form_id);
        SubmitOutcome::Transport
    }
}
