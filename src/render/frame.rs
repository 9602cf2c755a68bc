use smallvec::SmallVec;

use crate::core::{PixelPoint, SelectionFrame, SeriesId, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, Color, LinePrimitive, RectPrimitive, RoundedRect, TextPrimitive};

/// Projected points of one active series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPolyline {
    pub series_id: SeriesId,
    pub color: Color,
    pub stroke_width: f64,
    pub points: Vec<PixelPoint>,
}

impl SeriesPolyline {
    fn validate(&self) -> ChartResult<()> {
        if self
            .points
            .iter()
            .any(|point| !point.x.is_finite() || !point.y.is_finite())
        {
            return Err(ChartError::InvalidData(format!(
                "polyline `{}` has non-finite points",
                self.series_id
            )));
        }
        self.color.validate()
    }
}

/// Vertical guide through the hovered tick, broken around each marker.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionGuide {
    pub x: f64,
    pub segments: Vec<LinePrimitive>,
    /// Markers sorted bottom to top; equal heights keep series order.
    pub markers: SmallVec<[CirclePrimitive; 4]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MainPlotFrame {
    pub viewport: Viewport,
    pub gridlines: Vec<LinePrimitive>,
    pub polylines: Vec<SeriesPolyline>,
    pub guide: Option<SelectionGuide>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisLabels {
    pub y: Vec<TextPrimitive>,
    pub x: Vec<TextPrimitive>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    pub viewport: Viewport,
    pub polylines: Vec<SeriesPolyline>,
    pub selection: SelectionFrame,
    /// Dimmed areas left and right of the selection.
    pub shades: Vec<RectPrimitive>,
    /// Left/right handles plus the top and bottom frame borders.
    pub borders: Vec<RectPrimitive>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub name: String,
    pub value: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub rows: Vec<TooltipRow>,
    /// Left edge of the tooltip box, kept inside the plot.
    pub anchor_x: f64,
    pub background: RoundedRect,
    pub fill_color: Color,
    pub border_color: Color,
    /// Title and per-row value/name labels, positioned inside the box.
    pub texts: Vec<TextPrimitive>,
}

/// Everything a renderer needs for one frame, derived fresh from engine state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub main: MainPlotFrame,
    pub axes: AxisLabels,
    pub preview: PreviewFrame,
    pub tooltip: Option<Tooltip>,
}

impl ChartFrame {
    pub fn validate(&self) -> ChartResult<()> {
        for line in &self.main.gridlines {
            line.validate()?;
        }
        for polyline in self.main.polylines.iter().chain(&self.preview.polylines) {
            polyline.validate()?;
        }
        if let Some(guide) = &self.main.guide {
            for segment in &guide.segments {
                segment.validate()?;
            }
            for marker in &guide.markers {
                marker.validate()?;
            }
        }
        for text in self.axes.y.iter().chain(&self.axes.x) {
            text.validate()?;
        }
        for rect in self.preview.shades.iter().chain(&self.preview.borders) {
            rect.validate()?;
        }
        if let Some(tooltip) = &self.tooltip {
            if !tooltip.anchor_x.is_finite() {
                return Err(ChartError::InvalidData(
                    "tooltip anchor must be finite".to_owned(),
                ));
            }
            tooltip.fill_color.validate()?;
            tooltip.border_color.validate()?;
            for text in &tooltip.texts {
                text.validate()?;
            }
        }
        Ok(())
    }

    /// Total number of vertices across main and preview polylines.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.main
            .polylines
            .iter()
            .chain(&self.preview.polylines)
            .map(|polyline| polyline.points.len())
            .sum()
    }
}
