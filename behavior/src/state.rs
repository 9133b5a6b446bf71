//! The page's single UI-state record.
//!
//! DESIGN
//! ======
//! Components keep no ambient globals; everything mutable lives here and is
//! reached through accessors. Components never read each other's fields.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::contact::ContactSession;
use crate::nav::{MenuState, is_sticky};
use crate::reveal::RevealTracker;
use crate::scrollbar::Scrollbar;
use crate::theme::Theme;

#[derive(Debug, Clone, Default)]
pub struct PageState {
    theme: Theme,
    sticky: bool,
    menu: MenuState,
    scrollbar: Scrollbar,
    contact: ContactSession,
    reveal: RevealTracker,
}

impl PageState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    /// Recompute the sticky flag. Returns the new value.
    pub fn update_sticky(&mut self, scroll_y: f64, threshold: f64) -> bool {
        self.sticky = is_sticky(scroll_y, threshold);
        self.sticky
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuState {
        &mut self.menu
    }

    #[must_use]
    pub fn scrollbar(&self) -> &Scrollbar {
        &self.scrollbar
    }

    pub fn scrollbar_mut(&mut self) -> &mut Scrollbar {
        &mut self.scrollbar
    }

    #[must_use]
    pub fn contact(&self) -> &ContactSession {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactSession {
        &mut self.contact
    }

    /// Start tracking `count` reveal targets, discarding prior bookkeeping.
    pub fn track_reveals(&mut self, count: usize) {
        self.reveal = RevealTracker::new(count);
    }

    pub fn reveal_mut(&mut self) -> &mut RevealTracker {
        &mut self.reveal
    }
}
