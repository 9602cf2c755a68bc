use crate::render::{Renderer, RoundedRect, TextPrimitive, Tooltip, TooltipRow};

use super::label_format::{format_long_date, format_tooltip_value};
use super::{ChartEngine, FrameScheduler};

/// Left edge for a tooltip of `width` centered on `center_x`, pushed back
/// inside `[margin, plot_width - margin]` near either edge.
#[must_use]
pub fn tooltip_anchor_x(center_x: f64, width: f64, plot_width: f64, margin: f64) -> f64 {
    let mut x = center_x - width / 2.0;
    if center_x < width {
        x = margin;
    }
    if center_x + width > plot_width {
        x = plot_width - width - margin;
    }
    x
}

impl<R: Renderer, S: FrameScheduler> ChartEngine<R, S> {
    /// Tooltip for the hovered tick, one column per active series with a sample.
    pub(super) fn tooltip(&self, center_x: f64) -> Option<Tooltip> {
        let tick = self.store.ticks().get(self.window.window().selected?)?;
        let style = self.style.tooltip;

        let rows: Vec<TooltipRow> = self
            .active
            .iter()
            .filter_map(|id| {
                let value = tick.value(id)?;
                let meta = self.meta.get(id)?;
                Some(TooltipRow {
                    name: meta.name.clone(),
                    value,
                    color: meta.color,
                })
            })
            .collect();

        let width = rows.len() as f64 * style.column_width + style.inner_padding;
        let anchor_x = tooltip_anchor_x(
            center_x,
            width,
            self.main_viewport.width,
            style.edge_margin,
        );
        let title = format_long_date(tick.x);

        let text_left = anchor_x + style.inner_padding;
        let mut texts = Vec::with_capacity(rows.len() * 2 + 1);
        texts.push(TextPrimitive::new(
            title.clone(),
            text_left,
            style.row_height,
            style.title_color,
        ));
        for (column, row) in rows.iter().enumerate() {
            let x = text_left + style.column_width * column as f64;
            texts.push(TextPrimitive::new(
                format_tooltip_value(row.value),
                x,
                style.row_height * 2.0,
                row.color,
            ));
            texts.push(TextPrimitive::new(
                row.name.clone(),
                x,
                style.row_height * 3.0,
                row.color,
            ));
        }

        Some(Tooltip {
            title,
            rows,
            anchor_x,
            background: RoundedRect {
                x: anchor_x,
                y: style.box_top,
                width,
                height: style.box_height,
                radius: style.corner_radius,
            },
            fill_color: style.background,
            border_color: style.line_color,
            texts,
        })
    }
}
