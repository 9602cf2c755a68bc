use crate::core::Viewport;
use crate::error::ChartResult;

use super::ChartStyle;

/// Construction-time settings for [`ChartEngine`](super::ChartEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartEngineConfig {
    pub main_viewport: Viewport,
    pub preview_viewport: Viewport,
    pub style: ChartStyle,
    /// Explicit initial `(from, to)`; `None` opens on the 90%..95% slice.
    pub initial_range: Option<(i64, i64)>,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(main_viewport: Viewport, preview_viewport: Viewport) -> Self {
        Self {
            main_viewport,
            preview_viewport,
            style: ChartStyle::default(),
            initial_range: None,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_initial_range(mut self, from: i64, to: i64) -> Self {
        self.initial_range = Some((from, to));
        self
    }

    pub(super) fn validate(&self) -> ChartResult<()> {
        self.style.validate()
    }
}
