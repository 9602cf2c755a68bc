//! Pointer handling for the preview strip and the main plot.
//!
//! Pointer events are plain values. The state machines here never touch the
//! window directly: they return [`WindowUpdate`](crate::core::WindowUpdate)
//! commands that the engine applies through the window controller.

mod drag;
mod hover;

pub use drag::{
    DragInteraction, DragMode, DragOutcome, DragState, HandleGeometry, HitRegion, PreviewContext,
    hit_test,
};
pub use hover::hover_update;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
    Leave,
}

/// Pointer sample with `pixel_x` relative to the receiving element's box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pixel_x: f64,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(kind: PointerKind, pixel_x: f64) -> Self {
        Self { kind, pixel_x }
    }

    #[must_use]
    pub const fn down(pixel_x: f64) -> Self {
        Self::new(PointerKind::Down, pixel_x)
    }

    #[must_use]
    pub const fn moved(pixel_x: f64) -> Self {
        Self::new(PointerKind::Move, pixel_x)
    }

    #[must_use]
    pub const fn up(pixel_x: f64) -> Self {
        Self::new(PointerKind::Up, pixel_x)
    }

    #[must_use]
    pub const fn cancel() -> Self {
        Self::new(PointerKind::Cancel, 0.0)
    }

    #[must_use]
    pub const fn leave() -> Self {
        Self::new(PointerKind::Leave, 0.0)
    }

    /// Up, cancel and leave all end a drag.
    #[must_use]
    pub fn ends_drag(self) -> bool {
        matches!(
            self.kind,
            PointerKind::Up | PointerKind::Cancel | PointerKind::Leave
        )
    }
}

/// Cursor affordance the host should show over the preview strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorHint {
    #[default]
    Default,
    Move,
}
