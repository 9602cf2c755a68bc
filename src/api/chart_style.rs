use crate::core::DEFAULT_HEADROOM;
use crate::error::{ChartError, ChartResult};
use crate::interaction::HandleGeometry;
use crate::render::Color;

/// Axis gridline and label settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStyle {
    /// Horizontal gridlines (and Y labels) on the main plot.
    pub grid_line_count: usize,
    /// Upper bound on X date labels.
    pub x_label_count: usize,
    /// Inset used for gridline ends and label placement.
    pub label_padding: f64,
    pub grid_line_color: Color,
    pub label_color: Color,
}

/// Selection frame drawn over the preview strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub border_color: Color,
    pub outer_color: Color,
}

impl FrameStyle {
    #[must_use]
    pub fn handles(self) -> HandleGeometry {
        HandleGeometry {
            left_width: self.left,
            right_width: self.right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipStyle {
    /// Horizontal room per series column.
    pub column_width: f64,
    pub row_height: f64,
    pub box_height: f64,
    pub box_top: f64,
    pub corner_radius: f64,
    pub inner_padding: f64,
    /// Gap kept between the box and the plot edges.
    pub edge_margin: f64,
    pub line_color: Color,
    pub background: Color,
    pub title_color: Color,
}

/// Immutable presentation settings shared by the scale and frame builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub axis: AxisStyle,
    pub frame: FrameStyle,
    pub tooltip: TooltipStyle,
    /// Space below the main plot reserved for X labels.
    pub padding_bottom: f64,
    pub marker_radius: f64,
    pub main_stroke_width: f64,
    pub preview_stroke_width: f64,
    /// Multiplier over the tallest visible value.
    pub headroom: f64,
    /// Used when a series has no color in the input.
    pub fallback_series_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            axis: AxisStyle {
                grid_line_count: 6,
                x_label_count: 6,
                label_padding: 3.0,
                grid_line_color: Color::rgba8(242, 244, 245, 1.0),
                label_color: Color::rgba8(152, 162, 169, 1.0),
            },
            frame: FrameStyle {
                left: 7.0,
                right: 7.0,
                top: 3.0,
                bottom: 3.0,
                border_color: Color::rgba8(221, 234, 243, 0.8),
                outer_color: Color::rgba8(245, 249, 251, 0.7),
            },
            tooltip: TooltipStyle {
                column_width: 70.0,
                row_height: 22.0,
                box_height: 70.0,
                box_top: 3.0,
                corner_radius: 10.0,
                inner_padding: 15.0,
                edge_margin: 10.0,
                line_color: Color::rgba8(224, 230, 234, 0.8),
                background: Color::WHITE,
                title_color: Color::rgba8(0x33, 0x33, 0x33, 1.0),
            },
            padding_bottom: 50.0,
            marker_radius: 6.0,
            main_stroke_width: 4.0,
            preview_stroke_width: 1.0,
            headroom: DEFAULT_HEADROOM,
            fallback_series_color: Color::BLACK,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if self.axis.grid_line_count == 0 || self.axis.x_label_count == 0 {
            return Err(ChartError::InvalidArgument(
                "axis gridline and label counts must be > 0".to_owned(),
            ));
        }

        for (name, value) in [
            ("axis.label_padding", self.axis.label_padding),
            ("frame.left", self.frame.left),
            ("frame.right", self.frame.right),
            ("frame.top", self.frame.top),
            ("frame.bottom", self.frame.bottom),
            ("tooltip.column_width", self.tooltip.column_width),
            ("tooltip.row_height", self.tooltip.row_height),
            ("tooltip.box_height", self.tooltip.box_height),
            ("tooltip.corner_radius", self.tooltip.corner_radius),
            ("padding_bottom", self.padding_bottom),
            ("marker_radius", self.marker_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidArgument(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }

        for (name, value) in [
            ("main_stroke_width", self.main_stroke_width),
            ("preview_stroke_width", self.preview_stroke_width),
            ("headroom", self.headroom),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidArgument(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        for color in [
            self.axis.grid_line_color,
            self.axis.label_color,
            self.frame.border_color,
            self.frame.outer_color,
            self.tooltip.line_color,
            self.tooltip.background,
            self.tooltip.title_color,
            self.fallback_series_color,
        ] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidArgument(err.to_string()))?;
        }
        Ok(())
    }
}
