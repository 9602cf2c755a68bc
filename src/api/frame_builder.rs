use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{
    PixelPoint, PlotScale, SelectionFrame, Tick, Viewport, downsample, preview_scale,
};
use crate::error::ChartResult;
use crate::render::{
    AxisLabels, ChartFrame, CirclePrimitive, LinePrimitive, MainPlotFrame, PreviewFrame,
    RectPrimitive, Renderer, SelectionGuide, SeriesPolyline, TextPrimitive,
};

use super::label_format::{format_axis_value, format_short_date};
use super::{ChartEngine, FrameScheduler};

/// Gap between a marker circle and the guide segments around it.
const GUIDE_MARKER_GAP: f64 = 2.0;
/// Distance of X labels above the bottom edge of the main surface.
const X_LABEL_BOTTOM_OFFSET: f64 = 25.0;
/// Y labels sit this far above their gridline.
const Y_LABEL_LIFT: f64 = 10.0;

impl<R: Renderer, S: FrameScheduler> ChartEngine<R, S> {
    /// Builds the frame for the current state. Pure: nothing is cached.
    pub fn build_frame(&self) -> ChartResult<ChartFrame> {
        let scale = self.main_scale();
        let guide = self.selection_guide(scale);
        let tooltip = guide
            .as_ref()
            .and_then(|guide| self.tooltip(guide.x));

        Ok(ChartFrame {
            main: MainPlotFrame {
                viewport: self.main_viewport,
                gridlines: self.gridlines(),
                polylines: self.main_polylines(scale),
                guide,
            },
            axes: AxisLabels {
                y: self.y_labels(scale),
                x: self.x_labels()?,
            },
            preview: self.preview_frame(),
            tooltip,
        })
    }

    fn visible_ticks(&self) -> &[Tick] {
        let window = self.window.window();
        &self.store.ticks()[window.from..=window.to]
    }

    fn gridline_ys(&self) -> impl Iterator<Item = f64> {
        let plot = self.main_plot_viewport();
        let count = self.style.axis.grid_line_count;
        let step = plot.height / count as f64;
        (0..count).map(move |index| step * (count - index) as f64)
    }

    fn gridlines(&self) -> Vec<LinePrimitive> {
        let axis = self.style.axis;
        let right = (self.main_viewport.width - axis.label_padding).max(axis.label_padding);
        self.gridline_ys()
            .map(|y| LinePrimitive::new(axis.label_padding, y, right, y, 1.0, axis.grid_line_color))
            .collect()
    }

    /// One label per gridline, showing the value the current scale maps there.
    fn y_labels(&self, scale: PlotScale) -> Vec<TextPrimitive> {
        let axis = self.style.axis;
        self.gridline_ys()
            .map(|y| {
                TextPrimitive::new(
                    format_axis_value(scale.to_value(y)),
                    axis.label_padding,
                    y - Y_LABEL_LIFT,
                    axis.label_color,
                )
            })
            .collect()
    }

    fn x_labels(&self) -> ChartResult<Vec<TextPrimitive>> {
        let axis = self.style.axis;
        let labelled = downsample(self.visible_ticks(), axis.x_label_count)?;
        let step = self.main_viewport.width / labelled.len() as f64;
        let y = self.main_viewport.height - X_LABEL_BOTTOM_OFFSET;
        Ok(labelled
            .iter()
            .enumerate()
            .map(|(index, tick)| {
                TextPrimitive::new(
                    format_short_date(tick.x),
                    step * index as f64 + 6.0 * axis.label_padding,
                    y,
                    axis.label_color,
                )
            })
            .collect())
    }

    fn main_polylines(&self, scale: PlotScale) -> Vec<SeriesPolyline> {
        let ticks = self.visible_ticks();
        self.active
            .iter()
            .filter_map(|id| self.meta.get(id).map(|meta| (id, meta)))
            .map(|(id, meta)| SeriesPolyline {
                series_id: id.clone(),
                color: meta.color,
                stroke_width: self.style.main_stroke_width,
                points: project(ticks, id, scale),
            })
            .collect()
    }

    /// Guide line and markers for the hovered tick.
    ///
    /// The guide runs from the plot bottom to the top and is interrupted
    /// around every marker, walking markers from the lowest upward.
    fn selection_guide(&self, scale: PlotScale) -> Option<SelectionGuide> {
        let window = self.window.window();
        let selected = window.selected?;
        let offset = window.selected_offset()?;
        let tick = self.store.ticks().get(selected)?;
        let x = scale.to_pixel_x(offset);
        let radius = self.style.marker_radius;

        let mut markers: SmallVec<[CirclePrimitive; 4]> = self
            .active
            .iter()
            .filter_map(|id| {
                let value = tick.value(id)?;
                let meta = self.meta.get(id)?;
                Some(CirclePrimitive {
                    cx: x,
                    cy: scale.to_pixel_y(value),
                    radius,
                    stroke: meta.color,
                })
            })
            .collect();
        // Stable: equal heights keep series order.
        markers.sort_by_key(|marker| Reverse(OrderedFloat(marker.cy)));

        let color = self.style.tooltip.line_color;
        let gap = radius + GUIDE_MARKER_GAP;
        let mut segments = Vec::with_capacity(markers.len() + 1);
        let mut cursor = scale.plot_height();
        for marker in &markers {
            let below = marker.cy + gap;
            if cursor > below {
                segments.push(LinePrimitive::new(x, cursor, x, below, 1.0, color));
            }
            cursor = cursor.min(marker.cy - gap);
        }
        if cursor > 0.0 {
            segments.push(LinePrimitive::new(x, cursor, x, 0.0, 1.0, color));
        }

        Some(SelectionGuide {
            x,
            segments,
            markers,
        })
    }

    fn preview_frame(&self) -> PreviewFrame {
        let viewport = self.preview_viewport;
        let scale = preview_scale(&self.store, viewport);
        let ticks = self.store.ticks();
        let polylines = self
            .active
            .iter()
            .filter_map(|id| self.meta.get(id).map(|meta| (id, meta)))
            .map(|(id, meta)| SeriesPolyline {
                series_id: id.clone(),
                color: meta.color,
                stroke_width: self.style.preview_stroke_width,
                points: project(ticks, id, scale),
            })
            .collect();

        let selection =
            SelectionFrame::from_window(self.window.window(), self.store.len(), viewport.width);
        let (shades, borders) = self.selection_rects(selection, viewport);

        PreviewFrame {
            viewport,
            polylines,
            selection,
            shades,
            borders,
        }
    }

    fn selection_rects(
        &self,
        selection: SelectionFrame,
        viewport: Viewport,
    ) -> (Vec<RectPrimitive>, Vec<RectPrimitive>) {
        let frame = self.style.frame;
        let height = viewport.height.max(0.0);
        let start = selection.start_px;
        let end = selection.end_px;
        let inner = selection.width().max(0.0);

        let shades = vec![
            RectPrimitive::new(0.0, 0.0, start.max(0.0), height, frame.outer_color),
            RectPrimitive::new(
                end,
                0.0,
                (viewport.width - end).max(0.0),
                height,
                frame.outer_color,
            ),
        ];
        let borders = vec![
            RectPrimitive::new(start - frame.left, 0.0, frame.left, height, frame.border_color),
            RectPrimitive::new(end - frame.right, 0.0, frame.right, height, frame.border_color),
            RectPrimitive::new(start, 0.0, inner, frame.top, frame.border_color),
            RectPrimitive::new(
                start,
                height - frame.bottom,
                inner,
                frame.bottom,
                frame.border_color,
            ),
        ];
        (shades, borders)
    }
}

/// Projects one series; ticks without a sample are skipped, not zeroed.
fn project(ticks: &[Tick], series_id: &str, scale: PlotScale) -> Vec<PixelPoint> {
    ticks
        .iter()
        .enumerate()
        .filter_map(|(offset, tick)| {
            tick.value(series_id)
                .map(|value| PixelPoint::new(scale.to_pixel_x(offset), scale.to_pixel_y(value)))
        })
        .collect()
}
