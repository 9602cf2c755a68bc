pub mod downsample;
pub mod scale;
pub mod series_store;
pub mod types;
pub mod window;

pub use downsample::{downsample, gradient_indices};
pub use scale::{
    DEFAULT_HEADROOM, PlotScale, SelectionFrame, main_plot_scale, main_visible_tick_count,
    max_visible_value, preview_pixel_to_tick, preview_scale,
};
pub use series_store::{RawColumn, SeriesBounds, SeriesId, SeriesStore, Tick, X_COLUMN_ID};
pub use types::{PixelPoint, Viewport};
pub use window::{
    MIN_TICK_COUNT, SelectionUpdate, Window, WindowChange, WindowController, WindowUpdate,
};
