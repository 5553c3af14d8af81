// Host-side tests for the per-view engine lifecycle.

use instant::Instant;
use std::time::Duration;
use void_core::{
    scatter, CameraConfig, EngineState, FeedError, LayoutPolicy, MessageRecord, Viewport,
};

fn engine() -> EngineState {
    EngineState::new(
        Viewport::new(800.0, 600.0),
        LayoutPolicy::default(),
        CameraConfig::default(),
    )
}

fn snapshot() -> Vec<MessageRecord> {
    vec![
        MessageRecord::new("a", "hello"),
        MessageRecord::new("b", "is anyone out there"),
    ]
}

#[test]
fn new_engine_is_idle_and_empty() {
    let mut e = engine();
    assert!(!e.is_running());
    assert!(e.entities().is_empty());
    assert!(e.visible().is_empty());
    assert_eq!(e.camera().virtual_height(), 6000.0);
}

#[test]
fn set_messages_rebuilds_scatter() {
    let mut e = engine();
    e.set_messages(snapshot());
    assert_eq!(e.entities().len(), 80);
    assert_eq!(e.last_stats().candidates, 80);

    e.set_messages(vec![MessageRecord::new("a", "hello")]);
    assert_eq!(e.entities().len(), 40);
    assert!(e.entities().iter().all(|x| &*x.source_text == "hello"));
}

#[test]
fn scatter_matches_a_fresh_computation() {
    let mut e = engine();
    e.set_messages(snapshot());
    let fresh = scatter(&snapshot(), Viewport::new(800.0, 600.0), &LayoutPolicy::default());
    assert_eq!(e.entities(), fresh.entities.as_slice());
}

#[test]
fn resize_recomputes_against_new_viewport() {
    let mut e = engine();
    e.set_messages(snapshot());
    let narrow = Viewport::new(400.0, 800.0);
    e.resize(narrow);
    let fresh = scatter(&snapshot(), narrow, &LayoutPolicy::default());
    assert_eq!(e.entities(), fresh.entities.as_slice());
    assert_eq!(e.camera().virtual_height(), 8000.0);
    for x in e.entities() {
        assert!(x.position.x + x.size.x <= 400.0);
    }
}

#[test]
fn resize_to_same_viewport_is_noop() {
    let mut e = engine();
    e.set_messages(snapshot());
    let before = e.entities().to_vec();
    e.resize(Viewport::new(800.0, 600.0));
    assert_eq!(e.entities(), before.as_slice());
}

#[test]
fn resize_keeps_offset_wrapped() {
    let mut e = engine();
    e.scroll(5500.0);
    e.resize(Viewport::new(800.0, 500.0));
    assert!((e.camera().wrapped_offset() - 500.0).abs() < 1e-9);
}

#[test]
fn degenerate_resize_empties_then_recovers() {
    let mut e = engine();
    e.set_messages(snapshot());
    e.scroll(2500.0);
    e.resize(Viewport::new(0.0, 0.0));
    assert!(e.entities().is_empty());
    assert!(e.visible().is_empty());
    assert!((e.camera().wrapped_offset() - 2500.0).abs() < 1e-9);
    e.resize(Viewport::new(800.0, 600.0));
    assert_eq!(e.entities().len(), 80);
    assert!((e.camera().wrapped_offset() - 2500.0).abs() < 1e-9);
    assert!((e.camera().virtual_height() - 6000.0).abs() < 1e-9);
}

#[test]
fn feed_error_keeps_entities_and_camera() {
    let mut e = engine();
    e.set_messages(snapshot());
    e.scroll(123.0);
    let before = e.entities().to_vec();
    e.feed_error(&FeedError::Unavailable("offline".into()));
    assert_eq!(e.entities(), before.as_slice());
    assert!((e.camera().wrapped_offset() - 123.0).abs() < 1e-9);
}

#[test]
fn tick_advances_only_while_running() {
    let mut e = engine();
    let t0 = Instant::now();
    e.tick(t0 + Duration::from_secs(1));
    assert_eq!(e.camera().wrapped_offset(), 0.0);

    e.start(t0);
    assert!(e.is_running());
    e.tick(t0 + Duration::from_secs(1));
    assert!((e.camera().wrapped_offset() - 60.0).abs() < 1e-6);
    e.tick(t0 + Duration::from_secs(2));
    assert!((e.camera().wrapped_offset() - 120.0).abs() < 1e-6);

    e.stop();
    assert!(!e.is_running());
    e.tick(t0 + Duration::from_secs(10));
    assert!((e.camera().wrapped_offset() - 120.0).abs() < 1e-6);
}

#[test]
fn start_is_idempotent() {
    let mut e = engine();
    let t0 = Instant::now();
    e.start(t0);
    // A second start must not reset the tick clock
    e.start(t0 + Duration::from_secs(5));
    e.tick(t0 + Duration::from_secs(6));
    assert!((e.camera().wrapped_offset() - 360.0).abs() < 1e-6);
    e.stop();
    e.stop();
    assert!(!e.is_running());
}

#[test]
fn restart_does_not_count_time_while_stopped() {
    let mut e = engine();
    let t0 = Instant::now();
    e.start(t0);
    e.tick(t0 + Duration::from_secs(1));
    e.stop();
    e.start(t0 + Duration::from_secs(100));
    e.tick(t0 + Duration::from_secs(101));
    assert!((e.camera().wrapped_offset() - 120.0).abs() < 1e-6);
}

#[test]
fn clock_going_backwards_does_not_rewind() {
    let mut e = engine();
    let t0 = Instant::now() + Duration::from_secs(10);
    e.start(t0);
    e.tick(t0 - Duration::from_secs(5));
    assert_eq!(e.camera().wrapped_offset(), 0.0);
}

#[test]
fn scroll_up_from_origin_wraps_to_bottom() {
    let mut e = engine();
    e.scroll(-100.0);
    assert!((e.camera().wrapped_offset() - 5900.0).abs() < 1e-9);
}

#[test]
fn visible_set_tracks_camera() {
    let mut e = engine();
    e.set_messages(snapshot());
    let mut total = 0;
    // Sweep the whole canvas one screen at a time
    for _ in 0..10 {
        let items = e.visible();
        for item in &items {
            assert!(item.screen_position.y + item.size.y > 0.0);
            assert!(item.screen_position.y < 600.0);
            assert!(!item.lines.is_empty());
        }
        total += items.len();
        e.scroll(600.0);
    }
    assert!(total >= 80, "every entity shows up at least once, got {total}");
}
