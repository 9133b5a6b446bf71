//! Theme attribute and toggle icon.

use behavior::theme::{THEME_ATTRIBUTE, Theme};

use super::Page;
use crate::dom::DomError;

impl Page {
    /// Reflect `theme` on the root element and the toggle icon.
    pub(super) fn apply_theme(&self, theme: Theme) -> Result<(), DomError> {
        if let Some(root) = self.document.document_element() {
            root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
        }
        let selectors = &self.config.selectors;
        let Some(toggle) = self.query(&selectors.theme_toggle)? else {
            return Ok(());
        };
        let icon = toggle
            .query_selector(&selectors.theme_icon)?
            .ok_or_else(|| DomError::MissingElement(format!("{} {}", selectors.theme_toggle, selectors.theme_icon)))?;
        icon.set_class_name(theme.icon_class());
        Ok(())
    }

    pub(super) fn toggle_theme(&self) -> Result<(), DomError> {
        let current = self.state.borrow().theme();
        let (next, saved) = self.themes.borrow_mut().toggle(current);
        if let Err(err) = saved {
            log::warn!("theme preference not saved: {err}");
        }
        self.state.borrow_mut().set_theme(next);
        log::debug!("theme -> {}", next.as_str());
        self.apply_theme(next)
    }
}
