use tracing::trace;

use crate::core::{PlotScale, Window, WindowUpdate};

use super::{PointerEvent, PointerKind};

/// Maps a main-plot pointer event to a selection change, if any.
///
/// Moves (and touch-style presses) snap to the nearest visible tick; leave
/// and cancel clear the selection. Returns `None` when nothing would change.
#[must_use]
pub fn hover_update(event: PointerEvent, window: Window, scale: PlotScale) -> Option<WindowUpdate> {
    match event.kind {
        PointerKind::Move | PointerKind::Down => {
            if !event.pixel_x.is_finite() {
                return None;
            }
            let offset = scale.to_relative_index(event.pixel_x);
            let selected = window.from.saturating_add(offset).min(window.to);
            if window.selected == Some(selected) {
                return None;
            }
            trace!(pixel_x = event.pixel_x, selected, "hover moved");
            Some(WindowUpdate::new().with_selected(selected))
        }
        PointerKind::Leave | PointerKind::Cancel => window
            .selected
            .is_some()
            .then(|| WindowUpdate::new().with_cleared_selection()),
        PointerKind::Up => None,
    }
}
