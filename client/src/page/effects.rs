//! Footer year, anchor smooth-scroll, hero typing and parallax.

use behavior::glue::{TypingAnimation, anchor_scroll_offset, fragment_id, parallax_offset, translate_y};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, ScrollBehavior, ScrollToOptions};

use super::Page;
use crate::dom::{self, DomError};

impl Page {
    pub(super) fn parallax(&self) -> Result<(), DomError> {
        let Some(accent) = self.query(&self.config.selectors.parallax)? else {
            return Ok(());
        };
        let offset = parallax_offset(dom::scroll_y(&self.window)?, self.config.parallax_rate);
        dom::set_style(&accent, "transform", &translate_y(offset))
    }

    /// Smooth-scroll to the clicked link's fragment, clearing the navbar.
    pub(super) fn anchor_scroll(&self, event: &Event) -> Result<(), DomError> {
        event.prevent_default();
        let href = event
            .current_target()
            .as_ref()
            .and_then(|target| target.dyn_ref::<Element>())
            .and_then(|link| link.get_attribute("href"))
            .unwrap_or_default();
        let Some(target) = fragment_id(&href).and_then(|id| self.document.get_element_by_id(id)) else {
            return Ok(());
        };

        let anchor = &self.config.anchor;
        let nav_height = self
            .query(&self.config.selectors.navbar)?
            .map(|navbar| navbar.get_bounding_client_rect().height());
        let target_top = target.get_bounding_client_rect().top() + dom::scroll_y(&self.window)?;
        let top = anchor_scroll_offset(target_top, nav_height, anchor.gap_px, anchor.fallback_offset_px);

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }

    pub(super) fn footer_year(&self) -> Result<(), DomError> {
        if let Some(year) = self.query(&self.config.selectors.year)? {
            year.set_text_content(Some(&js_sys::Date::new_0().get_full_year().to_string()));
        }
        Ok(())
    }

    pub(super) fn type_hero_title(&self) -> Result<(), DomError> {
        let Some(title) = self.query(&self.config.selectors.hero_title)? else {
            return Ok(());
        };
        let frames = TypingAnimation::new(title.text_content().unwrap_or_default());
        if frames.is_done() {
            return Ok(());
        }
        title.set_text_content(Some(""));

        let typing = self.config.typing;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(typing.start_delay_ms).await;
            for frame in frames {
                title.set_text_content(Some(&frame));
                TimeoutFuture::new(typing.interval_ms).await;
            }
        });
        Ok(())
    }
}
