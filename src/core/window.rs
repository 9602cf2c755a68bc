use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Smallest series that can hold a valid window (`1 <= from < to <= len - 1`).
pub const MIN_TICK_COUNT: usize = 3;

/// Visible tick range plus the hovered tick.
///
/// `from`/`to` are inclusive absolute tick indices. `selected` is `None`
/// when nothing is hovered, otherwise an absolute index inside `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub from: usize,
    pub to: usize,
    pub selected: Option<usize>,
}

impl Window {
    /// Offset of the hovered tick from `from`.
    #[must_use]
    pub fn selected_offset(self) -> Option<usize> {
        self.selected.map(|selected| selected - self.from)
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        (self.from..=self.to).contains(&index)
    }
}

/// What a [`WindowUpdate`] does to the hovered tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionUpdate {
    #[default]
    Keep,
    Clear,
    Set(usize),
}

impl SelectionUpdate {
    fn apply(self, current: Option<usize>) -> Option<usize> {
        match self {
            Self::Keep => current,
            Self::Clear => None,
            Self::Set(index) => Some(index),
        }
    }
}

/// Partial window update. Unset fields keep their current value.
///
/// Candidates are signed so pointer math can overshoot and be clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowUpdate {
    #[serde(default)]
    pub from: Option<i64>,
    #[serde(default)]
    pub to: Option<i64>,
    #[serde(default)]
    pub selected: SelectionUpdate,
}

impl WindowUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_from(mut self, from: i64) -> Self {
        self.from = Some(from);
        self
    }

    #[must_use]
    pub fn with_to(mut self, to: i64) -> Self {
        self.to = Some(to);
        self
    }

    #[must_use]
    pub fn with_selected(mut self, selected: usize) -> Self {
        self.selected = SelectionUpdate::Set(selected);
        self
    }

    #[must_use]
    pub fn with_cleared_selection(mut self) -> Self {
        self.selected = SelectionUpdate::Clear;
        self
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.from.is_none() && self.to.is_none() && self.selected == SelectionUpdate::Keep
    }
}

/// What an update actually changed.
///
/// `viewport_changed` gates the expensive visible-range recomputation;
/// `hover_changed` only asks for a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowChange {
    pub viewport_changed: bool,
    pub hover_changed: bool,
}

impl WindowChange {
    #[must_use]
    pub fn any(self) -> bool {
        self.viewport_changed || self.hover_changed
    }
}

/// Sole owner of the [`Window`]. Every operation clamps instead of failing.
///
/// `from` never drops below 1, so the first sample can be seen in the
/// preview strip but never shown or hovered in the main plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowController {
    window: Window,
    tick_count: usize,
}

impl WindowController {
    /// Opens on the 90%..95% slice of the series, nothing hovered.
    pub fn new(tick_count: usize) -> ChartResult<Self> {
        let from = (tick_count as f64 * 0.9).round() as i64;
        let to = (tick_count as f64 * 0.95).round() as i64;
        Self::with_range(tick_count, from, to)
    }

    /// Starts from an explicit range, clamped like any other update.
    pub fn with_range(tick_count: usize, from: i64, to: i64) -> ChartResult<Self> {
        if tick_count < MIN_TICK_COUNT {
            return Err(ChartError::MalformedInput(format!(
                "chart needs at least {MIN_TICK_COUNT} ticks, got {tick_count}"
            )));
        }

        let mut controller = Self {
            window: Window {
                from: 1,
                to: 2,
                selected: None,
            },
            tick_count,
        };
        controller.update(WindowUpdate::new().with_from(from).with_to(to));
        Ok(controller)
    }

    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    pub fn set_from(&mut self, candidate: i64) -> WindowChange {
        self.update(WindowUpdate::new().with_from(candidate))
    }

    pub fn set_to(&mut self, candidate: i64) -> WindowChange {
        self.update(WindowUpdate::new().with_to(candidate))
    }

    pub fn set_selected(&mut self, candidate: Option<usize>) -> WindowChange {
        let update = match candidate {
            Some(index) => WindowUpdate::new().with_selected(index),
            None => WindowUpdate::new().with_cleared_selection(),
        };
        self.update(update)
    }

    /// Merges `partial` onto the window.
    ///
    /// `from` is validated first because the `to` clamp depends on it. A
    /// surviving selection is pulled back into the new range.
    pub fn update(&mut self, partial: WindowUpdate) -> WindowChange {
        let previous = self.window;

        let from = partial
            .from
            .map_or(previous.from, |candidate| self.clamp_from(candidate));
        let to = self.clamp_to(partial.to.unwrap_or(previous.to as i64), from);
        let selected = partial
            .selected
            .apply(previous.selected)
            .map(|index| index.clamp(from, to));

        self.window = Window { from, to, selected };

        let change = WindowChange {
            viewport_changed: from != previous.from || to != previous.to,
            hover_changed: selected != previous.selected,
        };
        if change.any() {
            trace!(
                from,
                to,
                selected = ?selected,
                viewport_changed = change.viewport_changed,
                "window updated"
            );
        }
        change
    }

    fn clamp_from(&self, candidate: i64) -> usize {
        let max_from = (self.tick_count - 2) as i64;
        candidate.clamp(1, max_from) as usize
    }

    fn clamp_to(&self, candidate: i64, from: usize) -> usize {
        let last = (self.tick_count - 1) as i64;
        if candidate <= from as i64 {
            from + 1
        } else if candidate > last {
            last as usize
        } else {
            candidate as usize
        }
    }
}
