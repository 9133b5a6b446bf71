//! Fade-in on first viewport intersection.

use std::rc::Rc;

use behavior::reveal::{FADE_IN_CLASS, VISIBLE_CLASS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Page;
use crate::dom::{self, DomError};

impl Page {
    pub(super) fn observe_reveal(self: &Rc<Self>) -> Result<(), DomError> {
        let reveal = &self.config.reveal;
        let elements = dom::query_all(&self.document, &reveal.selector_list())?;
        if elements.is_empty() {
            return Ok(());
        }
        self.state.borrow_mut().track_reveals(elements.len());
        for element in &elements {
            dom::set_class(element, FADE_IN_CLASS, true)?;
        }

        let page = Rc::clone(self);
        let targets = elements.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                    let target = entry.target();
                    let Some(index) = targets.iter().position(|el| *el == target) else {
                        continue;
                    };
                    let (revealed, all_revealed) = {
                        let mut state = page.state.borrow_mut();
                        let tracker = state.reveal_mut();
                        let revealed = tracker.observe(index, entry.is_intersecting());
                        (revealed, tracker.revealed_count() == tracker.len())
                    };
                    if revealed {
                        if let Err(err) = dom::set_class(&target, VISIBLE_CLASS, true) {
                            log::warn!("reveal #{index} failed: {err}");
                        }
                        observer.unobserve(&target);
                    }
                    if all_revealed {
                        observer.disconnect();
                        log::debug!("all reveal targets shown");
                        return;
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(reveal.threshold));
        options.set_root_margin(&reveal.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();
        for element in &elements {
            observer.observe(element);
        }
        log::debug!("observing {} reveal targets", elements.len());
        Ok(())
    }
}
