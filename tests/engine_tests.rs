use approx::assert_relative_eq;
use ftchart_core::api::{ChartData, ChartStyle, ManualFrameScheduler};
use ftchart_core::core::{Viewport, Window, WindowUpdate};
use ftchart_core::interaction::{CursorHint, DragMode, PointerEvent};
use ftchart_core::render::{Color, NullRenderer};
use ftchart_core::{ChartEngine, ChartEngineConfig, ChartError};

type Engine = ChartEngine<NullRenderer, ManualFrameScheduler>;

const DAY_MS: i64 = 86_400_000;
// 2018-11-17, a Saturday.
const START_MS: i64 = 1_542_412_800_000;

fn chart_json() -> String {
    let xs: Vec<String> = (0..20).map(|i| (START_MS + i * DAY_MS).to_string()).collect();
    let y0: Vec<String> = (0..20).map(|i| (10 + i * 2).to_string()).collect();
    let y1: Vec<String> = (0..20).map(|i| (100 - i * 3).to_string()).collect();
    format!(
        r##"{{
            "columns": [
                ["x", {}],
                ["y0", {}],
                ["y1", {}]
            ],
            "types": {{"x": "x", "y0": "line", "y1": "line"}},
            "names": {{"y0": "Joined", "y1": "Left"}},
            "colors": {{"y0": "#3DC23F", "y1": "#F34C44"}}
        }}"##,
        xs.join(","),
        y0.join(","),
        y1.join(",")
    )
}

// Main plot: 500x300 after the 50px label band, 5 visible ticks of 100px.
// Preview: 20 ticks over 400px, frame spans 200px..300px.
fn config() -> ChartEngineConfig {
    ChartEngineConfig::new(Viewport::new(500.0, 350.0), Viewport::new(400.0, 50.0))
        .with_initial_range(10, 15)
}

fn engine() -> Engine {
    Engine::from_json_str(
        NullRenderer::default(),
        ManualFrameScheduler::default(),
        config(),
        &chart_json(),
    )
    .expect("engine init")
}

#[test]
fn loading_schedules_exactly_one_frame() {
    let mut engine = engine();
    assert!(engine.has_pending_redraw());
    assert_eq!(engine.frame_scheduler().scheduled, 1);

    assert!(engine.on_frame().expect("frame"));
    assert!(!engine.on_frame().expect("idle frame"));
    assert_eq!(engine.renderer().frames_rendered, 1);
    assert_eq!(engine.diagnostics().frames_rendered, 1);
}

#[test]
fn bursts_of_updates_coalesce_into_one_frame() {
    let mut engine = engine();
    engine.on_frame().expect("first frame");

    engine.main_pointer(PointerEvent::moved(100.0));
    engine.main_pointer(PointerEvent::moved(200.0));
    engine.preview_pointer(PointerEvent::down(250.0));
    engine.preview_pointer(PointerEvent::moved(290.0));
    assert_eq!(engine.frame_scheduler().scheduled, 2);

    assert!(engine.on_frame().expect("frame"));
    assert_eq!(engine.renderer().frames_rendered, 2);
}

#[test]
fn hover_redraws_without_recomputing_visible_range() {
    let mut engine = engine();
    let recomputes = engine.diagnostics().visible_recomputes;

    let change = engine.main_pointer(PointerEvent::moved(200.0));
    assert!(change.hover_changed);
    assert!(!change.viewport_changed);
    assert_eq!(engine.window().selected, Some(12));
    assert_eq!(engine.diagnostics().visible_recomputes, recomputes);

    let change = engine.main_pointer(PointerEvent::moved(210.0));
    assert!(!change.any());
}

#[test]
fn leaving_main_plot_clears_hover() {
    let mut engine = engine();
    engine.main_pointer(PointerEvent::moved(200.0));
    engine.main_pointer(PointerEvent::leave());
    assert_eq!(engine.window().selected, None);
}

#[test]
fn preview_center_drag_pans_and_recomputes() {
    let mut engine = engine();
    let recomputes = engine.diagnostics().visible_recomputes;

    assert_eq!(engine.preview_pointer(PointerEvent::down(250.0)), CursorHint::Move);
    assert_eq!(engine.drag_state().mode, DragMode::DraggingCenter);
    engine.preview_pointer(PointerEvent::moved(290.0));

    assert_eq!(
        engine.window(),
        Window {
            from: 12,
            to: 17,
            selected: None
        }
    );
    assert_eq!(engine.diagnostics().visible_recomputes, recomputes + 1);
    // y1 falls over time, so its value at `from` is the visible max.
    assert_relative_eq!(engine.visible_max_value(), 64.0);

    assert_eq!(engine.preview_pointer(PointerEvent::up(290.0)), CursorHint::Default);
    assert_eq!(engine.drag_state().mode, DragMode::Idle);
}

#[test]
fn preview_left_handle_drag_resizes_window() {
    let mut engine = engine();
    engine.preview_pointer(PointerEvent::down(196.0));
    assert_eq!(engine.drag_state().mode, DragMode::DraggingLeft);
    engine.preview_pointer(PointerEvent::moved(100.0));
    assert_eq!(engine.window().from, 5);
    assert_eq!(engine.window().to, 15);
}

#[test]
fn update_window_clamps_and_reports_change() {
    let mut engine = engine();
    let change = engine.update_window(WindowUpdate::new().with_from(0).with_to(1_000));
    assert!(change.viewport_changed);
    assert_eq!((engine.window().from, engine.window().to), (1, 19));
}

#[test]
fn toggling_series_rescales_and_keeps_store_order() {
    let mut engine = engine();
    assert_relative_eq!(engine.visible_max_value(), 70.0);

    assert!(engine.set_series_active("y1", false).expect("toggle"));
    assert_relative_eq!(engine.visible_max_value(), 40.0);
    assert!(!engine.set_series_active("y1", false).expect("repeat toggle"));

    engine.set_series_active("y0", false).expect("toggle");
    assert_eq!(engine.visible_max_value(), 0.0);
    assert!(engine.main_scale().is_flat());

    engine.set_series_active("y1", true).expect("toggle");
    engine.set_series_active("y0", true).expect("toggle");
    assert_eq!(engine.active_series(), ["y0".to_owned(), "y1".to_owned()]);
}

#[test]
fn toggling_unknown_series_is_invalid_argument() {
    let mut engine = engine();
    let err = engine
        .set_series_active("y9", false)
        .expect_err("unknown series");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn series_meta_comes_from_names_and_colors() {
    let engine = engine();
    let meta = engine.series_meta("y0").expect("meta");
    assert_eq!(meta.name, "Joined");
    assert_eq!(meta.color, Color::rgba8(0x3D, 0xC2, 0x3F, 1.0));
}

#[test]
fn resize_requests_redraw_only_on_change() {
    let mut engine = engine();
    engine.on_frame().expect("frame");

    engine.resize(Viewport::new(500.0, 350.0), Viewport::new(400.0, 50.0));
    assert!(!engine.has_pending_redraw());

    engine.resize(Viewport::new(800.0, 400.0), Viewport::new(800.0, 60.0));
    assert!(engine.has_pending_redraw());
    assert_eq!(engine.viewports().0, Viewport::new(800.0, 400.0));
}

#[test]
fn invalid_style_is_rejected_at_construction() {
    let mut style = ChartStyle::default();
    style.axis.grid_line_count = 0;
    let err = Engine::from_json_str(
        NullRenderer::default(),
        ManualFrameScheduler::default(),
        config().with_style(style),
        &chart_json(),
    )
    .err()
    .expect("invalid style must fail");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn malformed_input_builds_no_engine() {
    let cases = [
        r#"{"columns": [["y0", 1, 2, 3]]}"#,
        r#"{"columns": [["x", 1, 2, 3], ["y0", 1, 2]]}"#,
        r#"{"columns": [["x", 1, 2, 3], ["y0", 1, 2, 3]], "colors": {"y0": "green"}}"#,
        r#"{"columns": [["x", 1, 2]]}"#,
        r#"{"columns": "#,
    ];
    for input in cases {
        let err = Engine::from_json_str(
            NullRenderer::default(),
            ManualFrameScheduler::default(),
            ChartEngineConfig::new(Viewport::new(500.0, 350.0), Viewport::new(400.0, 50.0)),
            input,
        )
        .err()
        .expect("malformed input must fail");
        assert!(matches!(err, ChartError::MalformedInput(_)), "{input}: {err}");
    }
}

#[test]
fn default_window_for_loaded_chart() {
    let data = ChartData::from_json_str(&chart_json()).expect("data");
    let engine = Engine::new(
        NullRenderer::default(),
        ManualFrameScheduler::default(),
        ChartEngineConfig::new(Viewport::new(500.0, 350.0), Viewport::new(400.0, 50.0)),
        &data,
    )
    .expect("engine");
    assert_eq!((engine.window().from, engine.window().to), (18, 19));
}
