//! Sticky header, active nav link and the mobile menu.

use behavior::nav::{ACTIVE_CLASS, ClickOrigin, STICKY_CLASS, SectionBounds, link_marks, resolve_active_link};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, Node};

use super::Page;
use crate::dom::{self, DomError};

impl Page {
    pub(super) fn update_sticky_header(&self) -> Result<(), DomError> {
        let scroll_y = dom::scroll_y(&self.window)?;
        let sticky = self.state.borrow_mut().update_sticky(scroll_y, self.config.sticky_threshold_px);
        if let Some(header) = self.query(&self.config.selectors.header)? {
            dom::set_class(&header, STICKY_CLASS, sticky)?;
        }
        Ok(())
    }

    /// Mark the nav link whose section contains the scroll probe.
    pub(super) fn update_active_link(&self) -> Result<(), DomError> {
        let selectors = &self.config.selectors;
        let sections: Vec<SectionBounds> = dom::query_all(&self.document, &selectors.sections)?
            .iter()
            .filter_map(|el| {
                let html = el.dyn_ref::<HtmlElement>()?;
                Some(SectionBounds::new(el.id(), f64::from(html.offset_top()), f64::from(html.offset_height())))
            })
            .collect();
        let links = dom::query_all(&self.document, &selectors.nav_links)?;
        let hrefs: Vec<String> = links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect();

        let scroll_y = dom::scroll_y(&self.window)?;
        let active = resolve_active_link(&sections, scroll_y, self.config.active_lookahead_px);
        let Some(marks) = link_marks(&hrefs, active, &self.config.home_section_id) else {
            return Ok(());
        };
        for (link, on) in links.iter().zip(marks) {
            dom::set_class(link, ACTIVE_CLASS, on)?;
        }
        Ok(())
    }

    pub(super) fn toggle_menu(&self) -> Result<(), DomError> {
        let toggle_present = self.query(&self.config.selectors.menu_toggle)?.is_some();
        let open = self.state.borrow_mut().menu_mut().on_toggle_click(toggle_present);
        match open {
            Some(open) => self.render_menu(open),
            None => Ok(()),
        }
    }

    pub(super) fn close_menu_on_link(&self) -> Result<(), DomError> {
        if self.state.borrow_mut().menu_mut().on_link_click() {
            self.render_menu(false)?;
        }
        Ok(())
    }

    pub(super) fn dismiss_menu_outside(&self, event: &Event) -> Result<(), DomError> {
        if !self.state.borrow().menu().is_open() {
            return Ok(());
        }
        let selectors = &self.config.selectors;
        let target = event.target();
        let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
        let inside = |selector: &str| -> Result<bool, DomError> {
            Ok(match (self.query(selector)?, node) {
                (Some(el), Some(node)) => el.contains(Some(node)),
                _ => false,
            })
        };
        let origin = if inside(&selectors.menu_panel)? {
            ClickOrigin::Menu
        } else if inside(&selectors.menu_toggle)? {
            ClickOrigin::Toggle
        } else {
            ClickOrigin::Outside
        };
        if self.state.borrow_mut().menu_mut().on_document_click(origin) {
            self.render_menu(false)?;
        }
        Ok(())
    }

    /// Mirror the menu state onto the toggle button and, if present, the
    /// panel.
    fn render_menu(&self, open: bool) -> Result<(), DomError> {
        let selectors = &self.config.selectors;
        if let Some(toggle) = self.query(&selectors.menu_toggle)? {
            dom::set_class(&toggle, ACTIVE_CLASS, open)?;
            let expanded = self.state.borrow().menu().aria_expanded();
            toggle.set_attribute("aria-expanded", expanded)?;
        }
        if let Some(panel) = self.query(&selectors.menu_panel)? {
            dom::set_class(&panel, ACTIVE_CLASS, open)?;
        }
        Ok(())
    }
}
