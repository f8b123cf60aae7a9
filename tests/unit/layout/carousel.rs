use super::*;

fn slider() -> SliderController {
    // 1000px of content in a 400px viewport.
    SliderController::with_geometry(400.0, 1000.0, 2.0, 0.8)
}

#[test]
fn drag_scrolls_by_gain_times_pointer_delta() {
    let mut s = slider();
    s.set_scroll_left(50.0);
    assert_eq!(s.handle(PointerEvent::Down { x: 100.0 }), None);
    assert!(s.is_dragging());
    assert_eq!(s.handle(PointerEvent::Move { x: 80.0 }), Some(90.0));
    assert_eq!(s.scroll_left(), 90.0);
    // Measured from the recorded start, not the previous move.
    assert_eq!(s.handle(PointerEvent::Move { x: 90.0 }), Some(70.0));
    s.handle(PointerEvent::Up);
    assert_eq!(s.state(), DragState::Idle);
}

#[test]
fn move_while_idle_is_ignored() {
    let mut s = slider();
    assert_eq!(s.handle(PointerEvent::Move { x: 10.0 }), None);
    assert_eq!(s.scroll_left(), 0.0);
}

#[test]
fn leave_ends_the_drag_unconditionally() {
    let mut s = slider();
    s.handle(PointerEvent::Leave);
    assert_eq!(s.state(), DragState::Idle);
    s.handle(PointerEvent::Down { x: 0.0 });
    s.handle(PointerEvent::Leave);
    assert_eq!(s.state(), DragState::Idle);
    assert_eq!(s.handle(PointerEvent::Move { x: -100.0 }), None);
}

#[test]
fn drag_offsets_are_clamped() {
    let mut s = slider();
    s.handle(PointerEvent::Down { x: 0.0 });
    assert_eq!(s.handle(PointerEvent::Move { x: 50.0 }), None);
    assert_eq!(s.scroll_left(), 0.0);
    assert_eq!(s.handle(PointerEvent::Move { x: -1000.0 }), Some(600.0));
}

#[test]
fn drag_session_releases_on_drop() {
    let mut s = slider();
    {
        let mut d = s.begin_drag(100.0);
        assert_eq!(d.move_to(50.0), 100.0);
        assert_eq!(d.scroll_left(), 100.0);
    }
    assert!(!s.is_dragging());
    assert_eq!(s.scroll_left(), 100.0);
}

#[test]
fn arrows_scroll_smoothly_by_viewport_fraction() {
    let mut s = slider();
    let c = s.next();
    assert_eq!(c.target, 320.0);
    assert_eq!(c.behavior, ScrollBehavior::Smooth);
    assert_eq!(s.next().target, 600.0);
    assert_eq!(s.next().target, 600.0);
    assert_eq!(s.previous().target, 280.0);
    assert_eq!(s.previous().target, 0.0);
}

#[test]
fn controller_from_plan_and_resize() {
    let plan = LayoutPlan::Slider {
        item_width: 280.0,
        gap: 24.0,
    };
    let mut s = SliderController::new(&plan, 4, 1000.0, &EngineConfig::default());
    assert_eq!(s.max_scroll(), 192.0);
    s.set_scroll_left(500.0);
    assert_eq!(s.scroll_left(), 192.0);
    s.resize(1200.0);
    assert_eq!(s.scroll_left(), 0.0);
}
