//! Navigation bar state: sticky header, mobile menu, active-section link.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Marker class for the header once the page has scrolled.
pub const STICKY_CLASS: &str = "sticky";
/// Marker class shared by the open menu, its toggle, and the current nav link.
pub const ACTIVE_CLASS: &str = "active";

/// Whether the header should carry the sticky marker at `scroll_y`.
#[must_use]
pub fn is_sticky(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Where a document-level click landed relative to the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// Inside the menu panel.
    Menu,
    /// On (or inside) the toggle button.
    Toggle,
    Outside,
}

/// Open/closed state of the mobile menu panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A click on the toggle button. Returns the new open state, or `None`
    /// when the page has no toggle button and nothing changes.
    pub fn on_toggle_click(&mut self, toggle_present: bool) -> Option<bool> {
        toggle_present.then(|| self.toggle())
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// A nav link was clicked.
    pub fn on_link_click(&mut self) -> bool {
        self.close()
    }

    /// Any click on the document. Only clicks outside both the panel and
    /// the toggle dismiss the menu; the toggle's own handler flips it.
    pub fn on_document_click(&mut self, origin: ClickOrigin) -> bool {
        match origin {
            ClickOrigin::Outside => self.close(),
            ClickOrigin::Menu | ClickOrigin::Toggle => false,
        }
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// Vertical extent of a page section in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section containing `probe`. When sections overlap the last one in
/// document order wins.
#[must_use]
pub fn section_at(sections: &[SectionBounds], probe: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(probe))
        .map(|section| section.id.as_str())
}

/// Which nav link should carry the active marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLink<'a> {
    Section(&'a str),
    /// Above the first section: highlight the home link.
    Home,
    /// Between sections or past the last one: keep the current marker.
    Unchanged,
}

/// Resolve the active link for the current scroll offset.
#[must_use]
pub fn resolve_active_link(sections: &[SectionBounds], scroll_y: f64, lookahead: f64) -> ActiveLink<'_> {
    let probe = scroll_y + lookahead;
    if let Some(id) = section_at(sections, probe) {
        return ActiveLink::Section(id);
    }
    let first_top = sections
        .iter()
        .map(|section| section.top)
        .fold(f64::INFINITY, f64::min);
    if probe < first_top {
        ActiveLink::Home
    } else {
        ActiveLink::Unchanged
    }
}

/// Whether a link `href` targets the section `id` (`#id`).
#[must_use]
pub fn link_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// Active flag for each link in `hrefs`, or `None` when markers should be
/// left as they are.
#[must_use]
pub fn link_marks(hrefs: &[String], active: ActiveLink<'_>, home_id: &str) -> Option<Vec<bool>> {
    let target = match active {
        ActiveLink::Section(id) => id,
        ActiveLink::Home => home_id,
        ActiveLink::Unchanged => return None,
    };
    Some(hrefs.iter().map(|href| link_targets(href, target)).collect())
}
