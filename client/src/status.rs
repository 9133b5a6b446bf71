//! Reactive contact-form status line.
//!
//! Mounted into the existing status element; the page controller publishes
//! each [`StatusView`] change through an `RwSignal`. Remote text is rendered
//! as a text node, never as markup.

use behavior::contact::StatusView;
use leptos::prelude::*;

#[component]
pub fn FormStatus(status: RwSignal<Option<StatusView>>) -> impl IntoView {
    move || {
        status.get().map(|line| {
            let StatusView { icon, text, tone } = line;
            view! {
                <span class="form-status__line" style:color=tone.color()>
                    <i class=icon></i>
                    " "
                    {text}
                </span>
            }
        })
    }
}

/// Mount [`FormStatus`] into `host` for the lifetime of the page.
#[cfg(feature = "csr")]
pub fn mount(host: web_sys::HtmlElement, status: RwSignal<Option<StatusView>>) {
    host.set_text_content(None);
    leptos::mount::mount_to(host, move || view! { <FormStatus status=status/> }).forget();
}
