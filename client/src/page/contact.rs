//! Contact form submission and its status line.

use std::rc::Rc;

use behavior::contact::{FormEffect, FormPayload, deliver};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, HtmlFormElement};

use super::Page;
use crate::dom::DomError;

/// Collect the string-valued fields of `form` in document order. File
/// inputs are skipped.
fn collect_fields(form: &HtmlFormElement) -> Result<FormPayload, DomError> {
    let data = FormData::new_with_form(form)?;
    let mut payload = FormPayload::new();
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(payload);
    };
    for entry in entries {
        let pair = entry?.unchecked_into::<js_sys::Array>();
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            payload.insert(name, value);
        }
    }
    Ok(payload)
}

impl Page {
    pub(super) fn submit_contact(self: &Rc<Self>, event: &Event) -> Result<(), DomError> {
        event.prevent_default();
        let form = match event.current_target().map(|target| target.dyn_into::<HtmlFormElement>()) {
            Some(Ok(form)) => form,
            _ => return Err(DomError::MissingElement(self.config.selectors.contact_form.clone())),
        };
        let payload = collect_fields(&form)?;

        let ticket = self.state.borrow_mut().contact_mut().begin();
        self.publish_status();
        let fields: Vec<&str> = payload.iter().map(|(name, _)| name).collect();
        log::debug!("submitting contact form to {} (fields: {})", self.relay.endpoint(), fields.join(", "));

        let page = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let result = deliver(&page.relay, &payload).await;
            if let Err(err) = &result {
                log::warn!("contact form not delivered: {err}");
            }
            let effect = page.state.borrow_mut().contact_mut().finish(ticket, &result);
            match effect {
                FormEffect::ResetFields => form.reset(),
                FormEffect::KeepFields => {}
                FormEffect::Stale => {
                    log::debug!("dropping superseded contact result");
                    return;
                }
            }
            page.publish_status();

            TimeoutFuture::new(page.config.status_clear_ms).await;
            let cleared = page.state.borrow_mut().contact_mut().clear(ticket);
            if cleared {
                page.publish_status();
            }
        });
        Ok(())
    }

    fn publish_status(&self) {
        let view = self.state.borrow().contact().status();
        self.status.set(view);
    }
}
