use serde::{Deserialize, Serialize};

use crate::core::{SeriesStore, Tick, Viewport, Window};

/// Headroom applied above the tallest visible value on the main plot.
pub const DEFAULT_HEADROOM: f64 = 1.05;

/// Linear tick-index/value to pixel mapping for one plot surface.
///
/// Every degenerate input (no ticks, zero-sized plot, non-positive max)
/// yields a flat scale instead of NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotScale {
    tick_width: f64,
    tick_height_scale: f64,
    plot_height: f64,
}

impl PlotScale {
    #[must_use]
    pub fn new(
        visible_tick_count: usize,
        plot: Viewport,
        max_visible_value: f64,
        headroom: f64,
    ) -> Self {
        let width = finite_non_negative(plot.width);
        let height = finite_non_negative(plot.height);

        let tick_width = if visible_tick_count == 0 {
            0.0
        } else {
            width / visible_tick_count as f64
        };

        let denominator = max_visible_value * headroom;
        let tick_height_scale = if denominator.is_finite() && denominator > 0.0 {
            height / denominator
        } else {
            0.0
        };
        // Subnormal maxima overflow the division.
        let tick_height_scale = if tick_height_scale.is_finite() {
            tick_height_scale
        } else {
            0.0
        };

        Self {
            tick_width,
            tick_height_scale,
            plot_height: height,
        }
    }

    #[must_use]
    pub fn tick_width(self) -> f64 {
        self.tick_width
    }

    #[must_use]
    pub fn tick_height_scale(self) -> f64 {
        self.tick_height_scale
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.plot_height
    }

    /// `true` when values cannot be told apart vertically.
    #[must_use]
    pub fn is_flat(self) -> bool {
        self.tick_height_scale == 0.0
    }

    /// Maps a tick offset from the window start to pixel x.
    #[must_use]
    pub fn to_pixel_x(self, relative_index: usize) -> f64 {
        relative_index as f64 * self.tick_width
    }

    #[must_use]
    pub fn to_pixel_y(self, value: f64) -> f64 {
        self.plot_height - value * self.tick_height_scale
    }

    /// Inverse of [`PlotScale::to_pixel_y`], used for gridline labels.
    #[must_use]
    pub fn to_value(self, pixel_y: f64) -> f64 {
        if self.is_flat() {
            return 0.0;
        }
        (self.plot_height - pixel_y) / self.tick_height_scale
    }

    /// Nearest tick offset for a pointer position.
    #[must_use]
    pub fn to_relative_index(self, pixel_x: f64) -> usize {
        if self.tick_width <= 0.0 || !pixel_x.is_finite() || pixel_x <= 0.0 {
            return 0;
        }
        (pixel_x / self.tick_width).round() as usize
    }
}

fn finite_non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Tick count used for the main plot's horizontal spacing.
///
/// `to - from` spans `to - from + 1` ticks, so the last visible tick lands
/// exactly on the right edge.
#[must_use]
pub fn main_visible_tick_count(window: Window) -> usize {
    window.to - window.from
}

/// Largest present value of the active series inside `[from, to]`, or 0.
#[must_use]
pub fn max_visible_value<'a, I>(ticks: &[Tick], from: usize, to: usize, active: I) -> f64
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    if ticks.is_empty() || from > to {
        return 0.0;
    }
    let end = to.min(ticks.len() - 1);
    let Some(visible) = ticks.get(from..=end) else {
        return 0.0;
    };

    let mut max: Option<f64> = None;
    for tick in visible {
        for series_id in active.clone() {
            if let Some(value) = tick.value(series_id) {
                max = Some(max.map_or(value, |current| current.max(value)));
            }
        }
    }
    max.unwrap_or(0.0)
}

/// Main-plot scale for the current window and plot box.
#[must_use]
pub fn main_plot_scale(window: Window, plot: Viewport, max_visible: f64, headroom: f64) -> PlotScale {
    PlotScale::new(main_visible_tick_count(window), plot, max_visible, headroom)
}

/// Preview scale: every tick across the full width, values against the absolute max.
#[must_use]
pub fn preview_scale(store: &SeriesStore, preview: Viewport) -> PlotScale {
    PlotScale::new(store.len(), preview, store.absolute_bounds().max, 1.0)
}

/// Pixel extent of the window rectangle drawn over the preview strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionFrame {
    pub start_px: f64,
    pub end_px: f64,
}

impl SelectionFrame {
    /// Places `from`/`to` as fractions of the total tick count.
    #[must_use]
    pub fn from_window(window: Window, tick_count: usize, preview_width: f64) -> Self {
        if tick_count == 0 {
            return Self {
                start_px: 0.0,
                end_px: 0.0,
            };
        }
        let width = finite_non_negative(preview_width);
        let total = tick_count as f64;
        Self {
            start_px: width * (window.from as f64 / total),
            end_px: width * (window.to as f64 / total),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.end_px - self.start_px
    }
}

/// Converts a preview pixel position to a (rounded) absolute tick index.
#[must_use]
pub fn preview_pixel_to_tick(pixel_x: f64, tick_count: usize, preview_width: f64) -> i64 {
    if !pixel_x.is_finite() || !preview_width.is_finite() || preview_width <= 0.0 {
        return 0;
    }
    (tick_count as f64 * (pixel_x / preview_width)).round() as i64
}
