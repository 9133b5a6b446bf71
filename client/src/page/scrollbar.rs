//! Custom scrollbar thumb: follows scroll, drags to scroll.

use behavior::glue::translate_y;
use behavior::scrollbar::{ScrollMetrics, TrackMetrics};
use web_sys::{Element, MouseEvent};

use super::Page;
use crate::dom::{self, DomError};

impl Page {
    /// Track and thumb, or `None` if either is missing.
    fn scrollbar_parts(&self) -> Result<Option<(Element, Element)>, DomError> {
        let selectors = &self.config.selectors;
        let track = self.query(&selectors.scrollbar_track)?;
        let thumb = self.query(&selectors.scrollbar_thumb)?;
        Ok(track.zip(thumb))
    }

    fn scroll_metrics(&self) -> Result<ScrollMetrics, DomError> {
        let document_height = self
            .document
            .document_element()
            .map_or(0.0, |root| f64::from(root.scroll_height()));
        Ok(ScrollMetrics {
            scroll_y: dom::scroll_y(&self.window)?,
            document_height,
            viewport_height: dom::viewport_height(&self.window)?,
        })
    }

    fn track_metrics(track: &Element, thumb: &Element) -> TrackMetrics {
        TrackMetrics {
            track_height: f64::from(track.client_height()),
            thumb_height: f64::from(thumb.client_height()),
        }
    }

    pub(super) fn sync_thumb(&self) -> Result<(), DomError> {
        let Some((track, thumb)) = self.scrollbar_parts()? else {
            return Ok(());
        };
        let metrics = self.scroll_metrics()?;
        let offset = self.state.borrow().scrollbar().passive_offset(metrics, Self::track_metrics(&track, &thumb));
        if let Some(offset) = offset {
            dom::set_style(&thumb, "transform", &translate_y(offset))?;
        }
        Ok(())
    }

    pub(super) fn begin_thumb_drag(&self, event: &MouseEvent) -> Result<(), DomError> {
        let Some((_, thumb)) = self.scrollbar_parts()? else {
            return Ok(());
        };
        event.prevent_default();
        let scroll_y = dom::scroll_y(&self.window)?;
        self.state.borrow_mut().scrollbar_mut().begin_drag(f64::from(event.client_y()), scroll_y);
        dom::set_style(&thumb, "cursor", "grabbing")?;
        if let Some(body) = self.document.body() {
            dom::set_style(&body, "user-select", "none")?;
        }
        Ok(())
    }

    pub(super) fn drag_thumb(&self, event: &MouseEvent) -> Result<(), DomError> {
        if !self.state.borrow().scrollbar().is_dragging() {
            return Ok(());
        }
        let Some((track, thumb)) = self.scrollbar_parts()? else {
            return Ok(());
        };
        let metrics = self.scroll_metrics()?;
        let update = self.state.borrow().scrollbar().drag_to(
            f64::from(event.client_y()),
            metrics,
            Self::track_metrics(&track, &thumb),
        );
        if let Some(update) = update {
            self.window.scroll_to_with_x_and_y(0.0, update.scroll_to);
            dom::set_style(&thumb, "transform", &translate_y(update.thumb_offset))?;
        }
        Ok(())
    }

    pub(super) fn end_thumb_drag(&self) -> Result<(), DomError> {
        if !self.state.borrow_mut().scrollbar_mut().end_drag() {
            return Ok(());
        }
        if let Some((_, thumb)) = self.scrollbar_parts()? {
            dom::set_style(&thumb, "cursor", "grab")?;
        }
        if let Some(body) = self.document.body() {
            dom::clear_style(&body, "user-select")?;
        }
        Ok(())
    }
}
