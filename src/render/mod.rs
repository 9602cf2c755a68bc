mod frame;
mod null_renderer;
mod primitives;
mod rounded_rect;

pub use frame::{
    AxisLabels, ChartFrame, MainPlotFrame, PreviewFrame, SelectionGuide, SeriesPolyline, Tooltip,
    TooltipRow,
};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use rounded_rect::{PathCommand, PathRecorder, PathSink, RoundedRect, draw_rounded_rect};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully built `ChartFrame`, so pixel work stays apart
/// from window state and pointer handling.
pub trait Renderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()>;
}
