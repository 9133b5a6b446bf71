//! Declarative event table: which handler runs for which source and event.
//!
//! The browser adapter walks [`bindings`] once at startup and registers one
//! listener per row. `Ready` rows run immediately instead of listening, in
//! table order.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::config::Selectors;

/// Event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Window,
    Document,
    /// First element matching the selector; the row is skipped if none.
    One(String),
    /// Every element matching the selector.
    Each(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Run once when the document is ready.
    Ready,
    Scroll,
    Resize,
    Click,
    MouseDown,
    MouseMove,
    MouseUp,
    Submit,
}

impl Trigger {
    /// DOM event type, `None` for [`Trigger::Ready`].
    #[must_use]
    pub fn event_name(self) -> Option<&'static str> {
        match self {
            Self::Ready => None,
            Self::Scroll => Some("scroll"),
            Self::Resize => Some("resize"),
            Self::Click => Some("click"),
            Self::MouseDown => Some("mousedown"),
            Self::MouseMove => Some("mousemove"),
            Self::MouseUp => Some("mouseup"),
            Self::Submit => Some("submit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    ApplyStoredTheme,
    ToggleTheme,
    StickyHeader,
    ActiveLink,
    ToggleMenu,
    CloseMenuOnLink,
    DismissMenuOutside,
    ObserveReveal,
    SyncThumb,
    BeginThumbDrag,
    DragThumb,
    EndThumbDrag,
    Parallax,
    AnchorScroll,
    SubmitContact,
    FooterYear,
    TypeHeroTitle,
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub target: Target,
    pub trigger: Trigger,
    pub handler: Handler,
}

fn bind(target: Target, trigger: Trigger, handler: Handler) -> Binding {
    Binding { target, trigger, handler }
}

/// The full behavior table for a page using `selectors`.
#[must_use]
pub fn bindings(selectors: &Selectors) -> Vec<Binding> {
    use Handler as H;
    use Target::{Document, Each, One, Window};
    use Trigger as T;

    vec![
        // Startup one-shots.
        bind(Document, T::Ready, H::ApplyStoredTheme),
        bind(Document, T::Ready, H::StickyHeader),
        bind(Document, T::Ready, H::ActiveLink),
        bind(Document, T::Ready, H::ObserveReveal),
        bind(Document, T::Ready, H::SyncThumb),
        bind(Document, T::Ready, H::Parallax),
        bind(Document, T::Ready, H::FooterYear),
        bind(Document, T::Ready, H::TypeHeroTitle),
        // Scroll position.
        bind(Window, T::Scroll, H::StickyHeader),
        bind(Window, T::Scroll, H::ActiveLink),
        bind(Window, T::Scroll, H::SyncThumb),
        bind(Window, T::Scroll, H::Parallax),
        bind(Window, T::Resize, H::SyncThumb),
        // Theme.
        bind(One(selectors.theme_toggle.clone()), T::Click, H::ToggleTheme),
        // Mobile menu.
        bind(One(selectors.menu_toggle.clone()), T::Click, H::ToggleMenu),
        bind(Each(selectors.nav_links.clone()), T::Click, H::CloseMenuOnLink),
        bind(Document, T::Click, H::DismissMenuOutside),
        // Scrollbar drag.
        bind(One(selectors.scrollbar_thumb.clone()), T::MouseDown, H::BeginThumbDrag),
        bind(Document, T::MouseMove, H::DragThumb),
        bind(Document, T::MouseUp, H::EndThumbDrag),
        // Links and forms.
        bind(Each(selectors.anchors.clone()), T::Click, H::AnchorScroll),
        bind(One(selectors.contact_form.clone()), T::Submit, H::SubmitContact),
    ]
}
