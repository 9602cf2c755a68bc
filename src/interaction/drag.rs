use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{SelectionFrame, Viewport, Window, WindowUpdate, preview_pixel_to_tick};

use super::{CursorHint, PointerEvent, PointerKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragMode {
    #[default]
    Idle,
    DraggingLeft,
    DraggingRight,
    DraggingCenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragState {
    pub mode: DragMode,
    pub last_pointer_x: Option<f64>,
}

/// Part of the preview selection frame under a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitRegion {
    LeftHandle,
    RightHandle,
    Center,
    Outside,
}

/// Handle band widths, in pixels, measured inward from each frame edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleGeometry {
    pub left_width: f64,
    pub right_width: f64,
}

/// Read-only view of everything the drag machine needs for one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewContext {
    pub window: Window,
    pub tick_count: usize,
    pub preview: Viewport,
    pub handles: HandleGeometry,
}

impl PreviewContext {
    fn frame(self) -> SelectionFrame {
        SelectionFrame::from_window(self.window, self.tick_count, self.preview.width)
    }

    fn tick_width(self) -> f64 {
        if self.tick_count == 0 {
            0.0
        } else {
            self.preview.width / self.tick_count as f64
        }
    }
}

/// Classifies `pixel_x` against the selection frame's three bands.
///
/// Bands are open intervals; when they overlap on a very narrow window the
/// left handle wins, then the right one.
#[must_use]
pub fn hit_test(pixel_x: f64, ctx: PreviewContext) -> HitRegion {
    if !pixel_x.is_finite() {
        return HitRegion::Outside;
    }
    let frame = ctx.frame();
    let bands = [
        (
            HitRegion::LeftHandle,
            frame.start_px - ctx.handles.left_width,
            frame.start_px,
        ),
        (
            HitRegion::RightHandle,
            frame.end_px - ctx.handles.right_width,
            frame.end_px,
        ),
        (
            HitRegion::Center,
            frame.start_px,
            frame.end_px - ctx.handles.right_width,
        ),
    ];

    bands
        .into_iter()
        .find(|(_, start, end)| *start < pixel_x && pixel_x < *end)
        .map_or(HitRegion::Outside, |(region, _, _)| region)
}

/// What the host should do after one preview pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragOutcome {
    pub update: Option<WindowUpdate>,
    pub cursor: CursorHint,
}

/// Pan/resize state machine driven by preview-strip pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragInteraction {
    state: DragState,
}

impl DragInteraction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.state.mode
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.mode != DragMode::Idle
    }

    pub fn handle(&mut self, event: PointerEvent, ctx: PreviewContext) -> DragOutcome {
        if event.ends_drag() {
            return self.release(event.kind);
        }

        match (self.state.mode, event.kind) {
            (DragMode::Idle, PointerKind::Down) => self.press(event.pixel_x, ctx),
            (DragMode::Idle, _) => DragOutcome {
                update: None,
                cursor: cursor_for(hit_test(event.pixel_x, ctx)),
            },
            // A second press mid-drag only re-anchors the pointer.
            (_, PointerKind::Down) => {
                self.state.last_pointer_x = Some(event.pixel_x);
                self.dragging_outcome(None)
            }
            (DragMode::DraggingLeft, _) => {
                let update = drag_left(event.pixel_x, ctx);
                self.dragging_outcome(update)
            }
            (DragMode::DraggingRight, _) => {
                let update = drag_right(event.pixel_x, ctx);
                self.dragging_outcome(update)
            }
            (DragMode::DraggingCenter, _) => {
                let update = self
                    .state
                    .last_pointer_x
                    .and_then(|last| drag_center(last, event.pixel_x, ctx));
                self.state.last_pointer_x = Some(event.pixel_x);
                self.dragging_outcome(update)
            }
        }
    }

    fn press(&mut self, pixel_x: f64, ctx: PreviewContext) -> DragOutcome {
        let mode = match hit_test(pixel_x, ctx) {
            HitRegion::LeftHandle => DragMode::DraggingLeft,
            HitRegion::RightHandle => DragMode::DraggingRight,
            HitRegion::Center => DragMode::DraggingCenter,
            HitRegion::Outside => return DragOutcome::default(),
        };
        debug!(?mode, pixel_x, "preview drag started");
        self.state = DragState {
            mode,
            last_pointer_x: Some(pixel_x),
        };
        self.dragging_outcome(None)
    }

    fn release(&mut self, kind: PointerKind) -> DragOutcome {
        if self.is_dragging() {
            debug!(mode = ?self.state.mode, ?kind, "preview drag ended");
        }
        self.state = DragState::default();
        DragOutcome::default()
    }

    fn dragging_outcome(&self, update: Option<WindowUpdate>) -> DragOutcome {
        DragOutcome {
            update,
            cursor: CursorHint::Move,
        }
    }
}

fn cursor_for(region: HitRegion) -> CursorHint {
    match region {
        HitRegion::Outside => CursorHint::Default,
        _ => CursorHint::Move,
    }
}

fn drag_left(pixel_x: f64, ctx: PreviewContext) -> Option<WindowUpdate> {
    if !pixel_x.is_finite() {
        return None;
    }
    let tick = preview_pixel_to_tick(pixel_x, ctx.tick_count, ctx.preview.width);
    let from = tick.max(1).min(ctx.window.to as i64 - 1);
    (from != ctx.window.from as i64).then(|| WindowUpdate::new().with_from(from))
}

fn drag_right(pixel_x: f64, ctx: PreviewContext) -> Option<WindowUpdate> {
    if !pixel_x.is_finite() {
        return None;
    }
    let tick = preview_pixel_to_tick(pixel_x, ctx.tick_count, ctx.preview.width);
    let to = tick
        .min(ctx.tick_count as i64)
        .max(ctx.window.from as i64 + 1);
    (to != ctx.window.to as i64).then(|| WindowUpdate::new().with_to(to))
}

/// Shifts both edges by the whole-tick distance moved since the last event.
///
/// Each edge clamps on its own, so the window compresses when it is pushed
/// against either end of the series.
fn drag_center(last_x: f64, pixel_x: f64, ctx: PreviewContext) -> Option<WindowUpdate> {
    let tick_width = ctx.tick_width();
    if tick_width <= 0.0 || !pixel_x.is_finite() {
        return None;
    }

    let distance = ((pixel_x - last_x).abs() / tick_width).round() as i64;
    if distance == 0 {
        return None;
    }
    let shift = if pixel_x < last_x { -distance } else { distance };

    let upper = ctx.tick_count as i64;
    let from = (ctx.window.from as i64 + shift).clamp(1, upper);
    let to = (ctx.window.to as i64 + shift).clamp(1, upper);
    trace!(shift, from, to, "preview center drag");
    Some(WindowUpdate::new().with_from(from).with_to(to))
}
