//! ftchart-core: headless core of a zoomable time-series line chart.
//!
//! The crate owns the parts of the chart with real state and numeric edge
//! cases: the series store, the pixel scales, axis-label downsampling, the
//! visible window and the preview-strip drag machine. Drawing is left to a
//! host-supplied [`render::Renderer`] that receives a fully built frame.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
