//! Custom scrollbar thumb math and drag state.
//!
//! Two loops drive the same value. Passive sync maps the page scroll offset
//! onto the thumb; an active drag maps pointer movement back onto the page
//! scroll offset. Passive sync is suspended while a drag is in progress.

#[cfg(test)]
#[path = "scrollbar_test.rs"]
mod scrollbar_test;

/// Page scroll geometry in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Distance the page itself can scroll.
    #[must_use]
    pub fn scrollable(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }
}

/// Scrollbar track geometry in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    pub track_height: f64,
    pub thumb_height: f64,
}

/// Distance the thumb can travel between its extremes.
#[must_use]
pub fn track_travel(track: TrackMetrics) -> f64 {
    (track.track_height - track.thumb_height).max(0.0)
}

/// Fraction of the page scrolled, clamped to `[0, 1]`. A page that cannot
/// scroll reports 0.
#[must_use]
pub fn scroll_fraction(metrics: ScrollMetrics) -> f64 {
    fraction_of(metrics.scroll_y, metrics.scrollable())
}

/// Thumb offset for `fraction`, clamped to the track.
#[must_use]
pub fn thumb_offset(fraction: f64, travel: f64) -> f64 {
    clamp_unit(fraction) * travel
}

fn fraction_of(scroll_y: f64, scrollable: f64) -> f64 {
    if scrollable <= 0.0 {
        return 0.0;
    }
    clamp_unit(scroll_y / scrollable)
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Pointer and scroll position captured on pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub pointer_y: f64,
    pub scroll_y: f64,
}

/// Result of one drag step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    /// Page scroll offset to request. Not clamped; the browser clamps.
    pub scroll_to: f64,
    pub thumb_offset: f64,
}

/// Drag state for the thumb.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scrollbar {
    drag: Option<DragAnchor>,
}

impl Scrollbar {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Thumb offset from scroll position, or `None` while dragging.
    #[must_use]
    pub fn passive_offset(&self, metrics: ScrollMetrics, track: TrackMetrics) -> Option<f64> {
        if self.is_dragging() {
            return None;
        }
        Some(thumb_offset(scroll_fraction(metrics), track_travel(track)))
    }

    pub fn begin_drag(&mut self, pointer_y: f64, scroll_y: f64) {
        self.drag = Some(DragAnchor { pointer_y, scroll_y });
    }

    /// Translate a pointer move into a scroll target and thumb offset.
    /// Returns `None` when no drag is in progress.
    #[must_use]
    pub fn drag_to(&self, pointer_y: f64, metrics: ScrollMetrics, track: TrackMetrics) -> Option<DragUpdate> {
        let anchor = self.drag?;
        let travel = track_travel(track);
        let scrollable = metrics.scrollable();
        if travel <= 0.0 {
            return Some(DragUpdate {
                scroll_to: anchor.scroll_y,
                thumb_offset: thumb_offset(fraction_of(anchor.scroll_y, scrollable), travel),
            });
        }
        let delta = pointer_y - anchor.pointer_y;
        let scroll_to = anchor.scroll_y + (delta / travel) * scrollable;
        Some(DragUpdate { scroll_to, thumb_offset: thumb_offset(fraction_of(scroll_to, scrollable), travel) })
    }

    /// End the drag. Returns `true` if one was in progress.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }
}
