use crate::error::ChartResult;
use crate::render::{ChartFrame, Renderer};

/// Renderer that draws nothing but validates and records each frame.
///
/// Used by tests and headless hosts to observe what would be drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<ChartFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
