use ftchart_core::core::{Viewport, Window, WindowController};
use ftchart_core::interaction::{
    CursorHint, DragInteraction, DragMode, HandleGeometry, HitRegion, PointerEvent,
    PreviewContext, hit_test,
};

const HANDLES: HandleGeometry = HandleGeometry {
    left_width: 7.0,
    right_width: 7.0,
};

// 200 ticks over 400px: two pixels per tick.
fn context(window: Window) -> PreviewContext {
    PreviewContext {
        window,
        tick_count: 200,
        preview: Viewport::new(400.0, 50.0),
        handles: HANDLES,
    }
}

fn window(from: usize, to: usize) -> Window {
    Window {
        from,
        to,
        selected: None,
    }
}

/// Feeds `events` through the machine, applying updates like the engine does.
fn drive(
    drag: &mut DragInteraction,
    controller: &mut WindowController,
    events: &[PointerEvent],
) -> CursorHint {
    let mut cursor = CursorHint::Default;
    for event in events {
        let outcome = drag.handle(*event, context(controller.window()));
        if let Some(update) = outcome.update {
            controller.update(update);
        }
        cursor = outcome.cursor;
    }
    cursor
}

#[test]
fn hit_test_classifies_frame_bands() {
    // frame spans 40px..100px
    let ctx = context(window(20, 50));
    assert_eq!(hit_test(35.0, ctx), HitRegion::LeftHandle);
    assert_eq!(hit_test(95.0, ctx), HitRegion::RightHandle);
    assert_eq!(hit_test(60.0, ctx), HitRegion::Center);
    assert_eq!(hit_test(10.0, ctx), HitRegion::Outside);
    assert_eq!(hit_test(150.0, ctx), HitRegion::Outside);
}

#[test]
fn hit_test_bands_are_open_intervals() {
    let ctx = context(window(20, 50));
    assert_eq!(hit_test(33.0, ctx), HitRegion::Outside);
    assert_eq!(hit_test(100.0, ctx), HitRegion::Outside);
    assert_eq!(hit_test(f64::NAN, ctx), HitRegion::Outside);
}

#[test]
fn left_handle_wins_on_narrow_frames() {
    // frame spans 40px..44px, so the right band starts inside the left one
    let ctx = context(window(20, 22));
    assert_eq!(hit_test(39.0, ctx), HitRegion::LeftHandle);
    assert_eq!(hit_test(42.0, ctx), HitRegion::RightHandle);
}

#[test]
fn dragging_left_handle_moves_from_to_pointer_tick() {
    let mut controller = WindowController::with_range(200, 20, 50).expect("controller");
    let mut drag = DragInteraction::new();

    drive(&mut drag, &mut controller, &[PointerEvent::down(38.0)]);
    assert_eq!(drag.mode(), DragMode::DraggingLeft);

    drive(&mut drag, &mut controller, &[PointerEvent::moved(10.0)]);
    assert_eq!(controller.window().from, 5);
    assert_eq!(controller.window().to, 50);
}

#[test]
fn dragging_left_handle_past_start_stops_at_one() {
    let mut controller = WindowController::with_range(200, 20, 50).expect("controller");
    let mut drag = DragInteraction::new();

    drive(
        &mut drag,
        &mut controller,
        &[PointerEvent::down(38.0), PointerEvent::moved(-80.0)],
    );
    assert_eq!(controller.window().from, 1);
}

#[test]
fn dragging_left_handle_past_right_edge_keeps_one_tick() {
    let mut controller = WindowController::with_range(200, 20, 50).expect("controller");
    let mut drag = DragInteraction::new();

    drive(
        &mut drag,
        &mut controller,
        &[PointerEvent::down(38.0), PointerEvent::moved(300.0)],
    );
    assert_eq!(controller.window().from, 49);
    assert_eq!(controller.window().to, 50);
}

#[test]
fn dragging_right_handle_moves_to_and_clamps_at_series_end() {
    let mut controller = WindowController::with_range(200, 20, 50).expect("controller");
    let mut drag = DragInteraction::new();

    drive(
        &mut drag,
        &mut controller,
        &[PointerEvent::down(97.0), PointerEvent::moved(160.0)],
    );
    assert_eq!(drag.mode(), DragMode::DraggingRight);
    assert_eq!(controller.window().to, 80);

    drive(&mut drag, &mut controller, &[PointerEvent::moved(900.0)]);
    assert_eq!(controller.window().to, 199);
    assert_eq!(controller.window().from, 20);
}

#[test]
fn dragging_right_handle_cannot_cross_from() {
    let mut controller = WindowController::with_range(200, 20, 50).expect("controller");
    let mut drag = DragInteraction::new();

    drive(
        &mut drag,
        &mut controller,
        &[PointerEvent::down(97.0), PointerEvent::moved(0.0)],
    );
    assert_eq!(controller.window().to, 21);
}

#[test]
fn center_drag_preserves_window_width() {
    let mut controller = WindowController::with_range(200, 20, 50).expect("controller");
    let mut drag = DragInteraction::new();

    drive(
        &mut drag,
        &mut controller,
        &[PointerEvent::down(60.0), PointerEvent::moved(80.0)],
    );
    assert_eq!(drag.mode(), DragMode::DraggingCenter);
    assert_eq!(controller.window().from, 30);
    assert_eq!(controller.window().to, 60);

    drive(&mut drag, &mut controller, &[PointerEvent::moved(60.0)]);
    assert_eq!(controller.window().from, 20);
    assert_eq!(controller.window().to, 50);
}

#[test]
fn center_drag_below_one_tick_is_ignored_until_distance_accumulates() {
    let mut controller = WindowController::with_range(200, 20, 50).expect("controller");
    let mut drag = DragInteraction::new();

    drive(
        &mut drag,
        &mut controller,
        &[PointerEvent::down(60.0), PointerEvent::moved(60.4)],
    );
    assert_eq!(controller.window().from, 20);
    assert_eq!(drag.state().last_pointer_x, Some(60.4));
}

#[test]
fn center_drag_into_series_start_compresses_window() {
    let mut controller = WindowController::with_range(200, 5, 15).expect("controller");
    let mut drag = DragInteraction::new();

    // frame spans 10px..30px
    drive(
        &mut drag,
        &mut controller,
        &[PointerEvent::down(15.0), PointerEvent::moved(-5.0)],
    );
    let window = controller.window();
    assert_eq!(window.from, 1);
    assert_eq!(window.to, 5);
}

#[test]
fn release_events_return_to_idle() {
    for release in [
        PointerEvent::up(60.0),
        PointerEvent::cancel(),
        PointerEvent::leave(),
    ] {
        let mut controller = WindowController::with_range(200, 20, 50).expect("controller");
        let mut drag = DragInteraction::new();
        drive(&mut drag, &mut controller, &[PointerEvent::down(60.0)]);
        assert!(drag.is_dragging());

        let cursor = drive(&mut drag, &mut controller, &[release]);
        assert_eq!(drag.mode(), DragMode::Idle);
        assert_eq!(drag.state().last_pointer_x, None);
        assert_eq!(cursor, CursorHint::Default);
    }
}

#[test]
fn idle_moves_only_update_cursor_hint() {
    let mut controller = WindowController::with_range(200, 20, 50).expect("controller");
    let mut drag = DragInteraction::new();

    let cursor = drive(&mut drag, &mut controller, &[PointerEvent::moved(60.0)]);
    assert_eq!(cursor, CursorHint::Move);
    let cursor = drive(&mut drag, &mut controller, &[PointerEvent::moved(300.0)]);
    assert_eq!(cursor, CursorHint::Default);
    assert_eq!(drag.mode(), DragMode::Idle);
    assert_eq!(controller.window(), window(20, 50));
}

#[test]
fn press_outside_frame_stays_idle() {
    let mut controller = WindowController::with_range(200, 20, 50).expect("controller");
    let mut drag = DragInteraction::new();

    drive(
        &mut drag,
        &mut controller,
        &[PointerEvent::down(300.0), PointerEvent::moved(10.0)],
    );
    assert_eq!(drag.mode(), DragMode::Idle);
    assert_eq!(controller.window(), window(20, 50));
}

// 100 ticks over 1000px: ten pixels per tick, frame at 400px..500px.
fn wide_context(window: Window) -> PreviewContext {
    PreviewContext {
        window,
        tick_count: 100,
        preview: Viewport::new(1000.0, 50.0),
        handles: HANDLES,
    }
}

#[test]
fn non_finite_pointer_is_ignored_while_resizing() {
    for (press, mode) in [(397.0, DragMode::DraggingLeft), (497.0, DragMode::DraggingRight)] {
        let mut controller = WindowController::with_range(100, 40, 50).expect("controller");
        let mut drag = DragInteraction::new();

        drag.handle(PointerEvent::down(press), wide_context(controller.window()));
        assert_eq!(drag.mode(), mode);

        for pixel_x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let outcome = drag.handle(
                PointerEvent::moved(pixel_x),
                wide_context(controller.window()),
            );
            assert_eq!(outcome.update, None, "pixel_x {pixel_x}");
        }
        assert_eq!(controller.window(), window(40, 50));
        assert_eq!(drag.mode(), mode);
    }
}
