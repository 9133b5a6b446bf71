#![cfg(not(feature = "csr"))]

use behavior::config::DEFAULT_FORM_ENDPOINT;
use behavior::contact::{ContactSession, FormEffect, FormPayload, TRANSPORT_FAILURE_TEXT, deliver};
use futures::executor::block_on;

use super::*;

#[test]
fn relay_keeps_configured_endpoint() {
    assert_eq!(HttpRelay::new(DEFAULT_FORM_ENDPOINT).endpoint(), "https://api.web3forms.com/submit");
}

#[test]
fn native_post_fails_as_transport_error() {
    let relay = HttpRelay::new("https://relay.test/submit");
    let err = block_on(relay.post("{}")).unwrap_err();
    match err {
        ContactError::Transport(message) => assert!(message.contains("https://relay.test/submit")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failed_native_delivery_keeps_fields_and_shows_generic_message() {
    let relay = HttpRelay::new(DEFAULT_FORM_ENDPOINT);
    let payload: FormPayload = [("name", "Jane")].into_iter().collect();
    let mut session = ContactSession::default();

    let ticket = session.begin();
    let result = block_on(deliver(&relay, &payload));
    assert_eq!(session.finish(ticket, &result), FormEffect::KeepFields);
    assert_eq!(session.status().map(|s| s.text), Some(TRANSPORT_FAILURE_TEXT.to_owned()));
}
