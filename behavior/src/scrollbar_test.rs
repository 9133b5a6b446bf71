use super::*;

const TRACK: TrackMetrics = TrackMetrics { track_height: 300.0, thumb_height: 40.0 };

fn page(scroll_y: f64) -> ScrollMetrics {
    ScrollMetrics { scroll_y, document_height: 3_000.0, viewport_height: 800.0 }
}

/// Mimic the browser clamping a requested scroll offset.
fn browser_clamp(requested: f64, metrics: ScrollMetrics) -> f64 {
    requested.clamp(0.0, metrics.scrollable())
}

// =============================================================
// Pure math
// =============================================================

#[test]
fn track_travel_subtracts_thumb() {
    assert_eq!(track_travel(TRACK), 260.0);
    assert_eq!(track_travel(TrackMetrics { track_height: 20.0, thumb_height: 40.0 }), 0.0);
}

#[test]
fn scroll_fraction_spans_unit_interval() {
    assert_eq!(scroll_fraction(page(0.0)), 0.0);
    assert_eq!(scroll_fraction(page(1_100.0)), 0.5);
    assert_eq!(scroll_fraction(page(2_200.0)), 1.0);
}

#[test]
fn scroll_fraction_clamps_overscroll() {
    assert_eq!(scroll_fraction(page(-40.0)), 0.0);
    assert_eq!(scroll_fraction(page(2_500.0)), 1.0);
}

#[test]
fn unscrollable_page_has_zero_fraction() {
    let metrics = ScrollMetrics { scroll_y: 0.0, document_height: 600.0, viewport_height: 800.0 };
    assert_eq!(scroll_fraction(metrics), 0.0);
}

#[test]
fn thumb_offset_is_linear_and_monotonic() {
    let travel = track_travel(TRACK);
    let mut previous = f64::NEG_INFINITY;
    for step in 0..=100 {
        let f = f64::from(step) / 100.0;
        let offset = thumb_offset(f, travel);
        assert!((offset - f * travel).abs() < 1e-9);
        assert!(offset >= previous);
        previous = offset;
    }
}

#[test]
fn thumb_offset_clamps_fraction() {
    assert_eq!(thumb_offset(-0.5, 260.0), 0.0);
    assert_eq!(thumb_offset(1.5, 260.0), 260.0);
    assert_eq!(thumb_offset(f64::NAN, 260.0), 0.0);
}

// =============================================================
// Drag state
// =============================================================

#[test]
fn passive_sync_suspended_while_dragging() {
    let mut bar = Scrollbar::default();
    assert_eq!(bar.passive_offset(page(1_100.0), TRACK), Some(130.0));
    bar.begin_drag(100.0, 1_100.0);
    assert!(bar.is_dragging());
    assert_eq!(bar.passive_offset(page(1_100.0), TRACK), None);
    assert!(bar.end_drag());
    assert_eq!(bar.passive_offset(page(1_100.0), TRACK), Some(130.0));
}

#[test]
fn drag_without_begin_is_ignored() {
    let bar = Scrollbar::default();
    assert_eq!(bar.drag_to(50.0, page(0.0), TRACK), None);
}

#[test]
fn end_drag_when_idle_reports_false() {
    let mut bar = Scrollbar::default();
    assert!(!bar.end_drag());
}

#[test]
fn drag_scales_pointer_delta_by_scrollable_over_travel() {
    let mut bar = Scrollbar::default();
    bar.begin_drag(200.0, 0.0);
    // 130px of thumb travel is half the track, so half the scrollable page.
    let update = bar.drag_to(330.0, page(0.0), TRACK).unwrap();
    assert!((update.scroll_to - 1_100.0).abs() < 1e-9);
    assert!((update.thumb_offset - 130.0).abs() < 1e-9);
}

#[test]
fn drag_past_track_end_clamps_thumb_but_not_request() {
    let mut bar = Scrollbar::default();
    bar.begin_drag(0.0, 1_100.0);
    let update = bar.drag_to(1_000.0, page(1_100.0), TRACK).unwrap();
    assert!(update.scroll_to > 2_200.0);
    assert_eq!(update.thumb_offset, 260.0);

    let update = bar.drag_to(-1_000.0, page(1_100.0), TRACK).unwrap();
    assert!(update.scroll_to < 0.0);
    assert_eq!(update.thumb_offset, 0.0);
}

#[test]
fn drag_release_then_passive_recompute_matches() {
    for delta in [-500.0, -37.0, 0.0, 12.3, 91.0, 260.0, 999.0] {
        let mut bar = Scrollbar::default();
        let start = page(700.0);
        bar.begin_drag(150.0, start.scroll_y);
        let update = bar.drag_to(150.0 + delta, start, TRACK).unwrap();
        bar.end_drag();

        let landed = page(browser_clamp(update.scroll_to, start));
        let passive = bar.passive_offset(landed, TRACK).unwrap();
        assert!(
            (passive - update.thumb_offset).abs() < 1e-6,
            "delta {delta}: drag offset {} vs passive {passive}",
            update.thumb_offset
        );
    }
}

#[test]
fn zero_travel_track_pins_scroll() {
    let mut bar = Scrollbar::default();
    let tiny = TrackMetrics { track_height: 40.0, thumb_height: 40.0 };
    bar.begin_drag(10.0, 500.0);
    let update = bar.drag_to(90.0, page(500.0), tiny).unwrap();
    assert_eq!(update.scroll_to, 500.0);
    assert_eq!(update.thumb_offset, 0.0);
}
