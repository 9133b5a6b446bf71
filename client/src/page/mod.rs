//! Page controller: owns the UI state and binds the event table to the DOM.
//!
//! ARCHITECTURE
//! ============
//! [`behavior::events::bindings`] enumerates every `(source, event) ->
//! handler` row. `boot` walks it once, registering a page-lifetime listener
//! per row and running `Ready` rows immediately. Each listener forwards to
//! [`Page::run`], which dispatches to the per-component `impl Page` blocks
//! in the child modules. A failing row or handler is logged and skipped so
//! the other components keep working.

mod contact;
mod effects;
mod nav;
mod reveal;
mod scrollbar;
mod theme;

use std::cell::RefCell;
use std::rc::Rc;

use behavior::config::SiteConfig;
use behavior::contact::StatusView;
use behavior::events::{Binding, Handler, Target, bindings};
use behavior::state::PageState;
use behavior::theme::ThemeStore;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, MouseEvent, Window};

use crate::dom::{self, DomError};
use crate::relay::HttpRelay;
use crate::storage::LocalStorage;
use crate::{site_config, status};

pub struct Page {
    config: SiteConfig,
    window: Window,
    document: Document,
    state: RefCell<PageState>,
    themes: RefCell<ThemeStore<LocalStorage>>,
    relay: HttpRelay,
    status: RwSignal<Option<StatusView>>,
}

/// Boot now if the document is parsed, otherwise on `DOMContentLoaded`.
///
/// # Errors
///
/// Returns [`DomError`] if there is no window/document or the deferred
/// listener cannot be registered.
pub fn boot_when_ready() -> Result<(), DomError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    if document.ready_state() != "loading" {
        return boot(window, document);
    }
    let target = document.clone();
    let deferred = Closure::once_into_js(move || {
        if let Err(err) = boot(window, document) {
            log::error!("page behaviors disabled: {err}");
        }
    });
    target.add_event_listener_with_callback("DOMContentLoaded", deferred.unchecked_ref())?;
    Ok(())
}

fn boot(window: Window, document: Document) -> Result<(), DomError> {
    let config = site_config::load(&document);
    let themes = ThemeStore::new(LocalStorage, config.theme_storage_key.clone());
    let page = Rc::new(Page {
        state: RefCell::new(PageState::new(themes.get_preference())),
        themes: RefCell::new(themes),
        relay: HttpRelay::new(config.form_endpoint.clone()),
        status: RwSignal::new(None),
        config,
        window,
        document,
    });

    if let Some(host) = page.query(&page.config.selectors.form_status)? {
        match host.dyn_into::<web_sys::HtmlElement>() {
            Ok(host) => status::mount(host, page.status),
            Err(_) => log::warn!("form status element is not an HTML element"),
        }
    }

    let table = bindings(&page.config.selectors);
    for binding in &table {
        if let Err(err) = page.bind(binding) {
            log::error!("{:?} on {:?} not bound: {err}", binding.handler, binding.target);
        }
    }
    log::debug!("page behaviors bound: {} rows", table.len());
    Ok(())
}

impl Page {
    fn query(&self, selector: &str) -> Result<Option<Element>, DomError> {
        dom::query(&self.document, selector)
    }

    fn bind(self: &Rc<Self>, binding: &Binding) -> Result<(), DomError> {
        let Some(event_name) = binding.trigger.event_name() else {
            return self.run(binding.handler, None);
        };
        let targets: Vec<EventTarget> = match &binding.target {
            Target::Window => vec![self.window.clone().into()],
            Target::Document => vec![self.document.clone().into()],
            Target::One(selector) => self.query(selector)?.into_iter().map(Into::into).collect(),
            Target::Each(selector) => dom::query_all(&self.document, selector)?
                .into_iter()
                .map(Into::into)
                .collect(),
        };
        for target in targets {
            let page = Rc::clone(self);
            let handler = binding.handler;
            let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                if let Err(err) = page.run(handler, Some(&event)) {
                    log::warn!("{handler:?} failed: {err}");
                }
            });
            target.add_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref())?;
            listener.forget();
        }
        Ok(())
    }

    /// Run `handler` for `event` (`None` for startup rows).
    fn run(self: &Rc<Self>, handler: Handler, event: Option<&Event>) -> Result<(), DomError> {
        let mouse = event.and_then(|e| e.dyn_ref::<MouseEvent>());
        match handler {
            Handler::ApplyStoredTheme => {
                let theme = self.state.borrow().theme();
                self.apply_theme(theme)
            }
            Handler::ToggleTheme => self.toggle_theme(),
            Handler::StickyHeader => self.update_sticky_header(),
            Handler::ActiveLink => self.update_active_link(),
            Handler::ToggleMenu => self.toggle_menu(),
            Handler::CloseMenuOnLink => self.close_menu_on_link(),
            Handler::DismissMenuOutside => event.map_or(Ok(()), |e| self.dismiss_menu_outside(e)),
            Handler::ObserveReveal => self.observe_reveal(),
            Handler::SyncThumb => self.sync_thumb(),
            Handler::BeginThumbDrag => mouse.map_or(Ok(()), |e| self.begin_thumb_drag(e)),
            Handler::DragThumb => mouse.map_or(Ok(()), |e| self.drag_thumb(e)),
            Handler::EndThumbDrag => self.end_thumb_drag(),
            Handler::Parallax => self.parallax(),
            Handler::AnchorScroll => event.map_or(Ok(()), |e| self.anchor_scroll(e)),
            Handler::SubmitContact => event.map_or(Ok(()), |e| self.submit_contact(e)),
            Handler::FooterYear => self.footer_year(),
            Handler::TypeHeroTitle => self.type_hero_title(),
        }
    }
}
