use super::*;

#[test]
fn accept_header_requests_json() {
    assert_eq!(ACCEPT, ("Accept", "application/json"));
}

#[test]
fn submit_failed_message_names_url_and_reason() {
    assert_eq!(
        submit_failed_message("https://formspree.io/f/x", "offline"),
        "contact submit to https://formspree.io/f/x failed: offline"
    );
}

#[test]
fn rejected_message_formats_status() {
    assert_eq!(rejected_message("/send", 422), "contact submit to /send rejected: 422");
}
