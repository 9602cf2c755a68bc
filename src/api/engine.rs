use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    PlotScale, SeriesId, SeriesStore, Viewport, Window, WindowChange, WindowController,
    WindowUpdate, main_plot_scale, max_visible_value,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    CursorHint, DragInteraction, DragState, PointerEvent, PreviewContext, hover_update,
};
use crate::render::Renderer;

use super::{ChartData, ChartEngineConfig, ChartStyle, FrameScheduler, RedrawScheduler, SeriesMeta};

/// Counters hosts can use to check how much work the engine did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineDiagnostics {
    /// Times the visible max value was recomputed.
    pub visible_recomputes: u64,
    pub redraw_requests: u64,
    pub frames_rendered: u64,
}

/// Main facade: owns the series, the window, the drag machine and the
/// redraw slot, and turns their state into frames for a renderer.
pub struct ChartEngine<R: Renderer, S: FrameScheduler> {
    pub(super) renderer: R,
    pub(super) redraw: RedrawScheduler<S>,
    pub(super) main_viewport: Viewport,
    pub(super) preview_viewport: Viewport,
    pub(super) style: ChartStyle,
    pub(super) store: SeriesStore,
    pub(super) meta: IndexMap<SeriesId, SeriesMeta>,
    /// Active series ids, always in store order.
    pub(super) active: Vec<SeriesId>,
    pub(super) window: WindowController,
    pub(super) drag: DragInteraction,
    pub(super) visible_max: f64,
    pub(super) diagnostics: EngineDiagnostics,
}

impl<R: Renderer, S: FrameScheduler> ChartEngine<R, S> {
    /// Loads `data` and schedules the first frame.
    ///
    /// Fails without building anything when the input is malformed.
    pub fn new(
        renderer: R,
        scheduler: S,
        config: ChartEngineConfig,
        data: &ChartData,
    ) -> ChartResult<Self> {
        config.validate()?;

        let store = SeriesStore::build(&data.raw_columns()?)?;
        let meta = store
            .series_ids()
            .map(|id| {
                data.series_meta(id, config.style.fallback_series_color)
                    .map(|meta| (id.to_owned(), meta))
            })
            .collect::<ChartResult<IndexMap<_, _>>>()?;
        let window = match config.initial_range {
            Some((from, to)) => WindowController::with_range(store.len(), from, to)?,
            None => WindowController::new(store.len())?,
        };
        let active = store.series_ids().map(str::to_owned).collect();

        let mut engine = Self {
            renderer,
            redraw: RedrawScheduler::new(scheduler),
            main_viewport: config.main_viewport,
            preview_viewport: config.preview_viewport,
            style: config.style,
            store,
            meta,
            active,
            window,
            drag: DragInteraction::new(),
            visible_max: 0.0,
            diagnostics: EngineDiagnostics::default(),
        };
        engine.recompute_visible();
        engine.request_redraw();
        debug!(
            ticks = engine.store.len(),
            series = engine.meta.len(),
            window = ?engine.window.window(),
            "chart engine loaded"
        );
        Ok(engine)
    }

    /// Parses one chart from JSON and loads it.
    pub fn from_json_str(
        renderer: R,
        scheduler: S,
        config: ChartEngineConfig,
        input: &str,
    ) -> ChartResult<Self> {
        let data = ChartData::from_json_str(input)?;
        Self::new(renderer, scheduler, config, &data)
    }

    #[must_use]
    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    #[must_use]
    pub fn series_meta(&self, series_id: &str) -> Option<&SeriesMeta> {
        self.meta.get(series_id)
    }

    #[must_use]
    pub fn window(&self) -> Window {
        self.window.window()
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    #[must_use]
    pub fn viewports(&self) -> (Viewport, Viewport) {
        (self.main_viewport, self.preview_viewport)
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    #[must_use]
    pub fn active_series(&self) -> &[SeriesId] {
        &self.active
    }

    #[must_use]
    pub fn is_series_active(&self, series_id: &str) -> bool {
        self.active.iter().any(|id| id == series_id)
    }

    /// Cached max of active series over the visible window.
    #[must_use]
    pub fn visible_max_value(&self) -> f64 {
        self.visible_max
    }

    #[must_use]
    pub fn diagnostics(&self) -> EngineDiagnostics {
        self.diagnostics
    }

    /// Plot box of the main chart, without the bottom label band.
    #[must_use]
    pub fn main_plot_viewport(&self) -> Viewport {
        self.main_viewport.inset_bottom(self.style.padding_bottom)
    }

    /// Scale for the main plot under the current window and geometry.
    #[must_use]
    pub fn main_scale(&self) -> PlotScale {
        main_plot_scale(
            self.window.window(),
            self.main_plot_viewport(),
            self.visible_max,
            self.style.headroom,
        )
    }

    #[must_use]
    pub fn preview_context(&self) -> PreviewContext {
        PreviewContext {
            window: self.window.window(),
            tick_count: self.store.len(),
            preview: self.preview_viewport,
            handles: self.style.frame.handles(),
        }
    }

    /// Applies a window update and requests a redraw when anything changed.
    ///
    /// Only `from`/`to` changes recompute the visible range.
    pub fn update_window(&mut self, update: WindowUpdate) -> WindowChange {
        let change = self.window.update(update);
        if change.viewport_changed {
            self.recompute_visible();
        }
        if change.any() {
            self.request_redraw();
        }
        change
    }

    /// Feeds one pointer event from the preview strip.
    pub fn preview_pointer(&mut self, event: PointerEvent) -> CursorHint {
        let outcome = self.drag.handle(event, self.preview_context());
        if let Some(update) = outcome.update {
            self.update_window(update);
        }
        outcome.cursor
    }

    /// Feeds one pointer event from the main plot (hover path).
    pub fn main_pointer(&mut self, event: PointerEvent) -> WindowChange {
        match hover_update(event, self.window.window(), self.main_scale()) {
            Some(update) => self.update_window(update),
            None => WindowChange::default(),
        }
    }

    /// Shows or hides one series. Returns `true` when its state changed.
    pub fn set_series_active(&mut self, series_id: &str, active: bool) -> ChartResult<bool> {
        if !self.meta.contains_key(series_id) {
            return Err(ChartError::InvalidArgument(format!(
                "unknown series `{series_id}`"
            )));
        }
        if self.is_series_active(series_id) == active {
            return Ok(false);
        }

        if active {
            self.active.push(series_id.to_owned());
            let order = &self.meta;
            self.active
                .sort_by_key(|id| order.get_index_of(id.as_str()).unwrap_or(usize::MAX));
        } else {
            self.active.retain(|id| id != series_id);
        }
        debug!(series_id, active, "series visibility changed");

        self.recompute_visible();
        self.request_redraw();
        Ok(true)
    }

    /// Replaces both surface sizes, e.g. after a host layout pass.
    pub fn resize(&mut self, main: Viewport, preview: Viewport) {
        if self.main_viewport == main && self.preview_viewport == preview {
            return;
        }
        debug!(?main, ?preview, "chart resized");
        self.main_viewport = main;
        self.preview_viewport = preview;
        self.request_redraw();
    }

    /// Returns `true` when a new frame was scheduled.
    pub fn request_redraw(&mut self) -> bool {
        self.diagnostics.redraw_requests += 1;
        self.redraw.request_redraw()
    }

    #[must_use]
    pub fn has_pending_redraw(&self) -> bool {
        self.redraw.is_pending()
    }

    #[must_use]
    pub fn frame_scheduler(&self) -> &S {
        self.redraw.host()
    }

    /// Frame callback: renders once if a redraw is pending.
    ///
    /// Returns `true` when a frame was rendered.
    pub fn on_frame(&mut self) -> ChartResult<bool> {
        if !self.redraw.is_pending() {
            return Ok(false);
        }
        let frame = self.build_frame()?;
        let renderer = &mut self.renderer;
        match self.redraw.run_frame(|| renderer.render(&frame)) {
            Some(result) => {
                result?;
                self.diagnostics.frames_rendered += 1;
                trace!(frames = self.diagnostics.frames_rendered, "frame rendered");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn recompute_visible(&mut self) {
        let window = self.window.window();
        let active = self.active.iter().map(String::as_str);
        self.visible_max = max_visible_value(self.store.ticks(), window.from, window.to, active);
        self.diagnostics.visible_recomputes += 1;
        trace!(
            from = window.from,
            to = window.to,
            visible_max = self.visible_max,
            "visible range recomputed"
        );
    }
}
