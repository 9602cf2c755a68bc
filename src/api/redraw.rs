use tracing::trace;

/// Host primitive that runs a callback once on the next frame tick.
///
/// Implementations only need to arrange for the host to call back into the
/// engine (`ChartEngine::on_frame`) at some later point; coalescing is done
/// by [`RedrawScheduler`].
pub trait FrameScheduler {
    fn schedule_frame(&mut self);
}

/// Frame primitive for hosts that poll: it only counts requests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ManualFrameScheduler {
    pub scheduled: u64,
}

impl FrameScheduler for ManualFrameScheduler {
    fn schedule_frame(&mut self) {
        self.scheduled += 1;
    }
}

/// Single-slot redraw debounce.
///
/// Any number of requests between two frames collapse into one scheduled
/// frame and one render call.
#[derive(Debug, Default)]
pub struct RedrawScheduler<S> {
    host: S,
    pending: bool,
}

impl<S: FrameScheduler> RedrawScheduler<S> {
    #[must_use]
    pub fn new(host: S) -> Self {
        Self {
            host,
            pending: false,
        }
    }

    /// Returns `true` when this call scheduled a new frame.
    pub fn request_redraw(&mut self) -> bool {
        if self.pending {
            trace!("redraw already pending");
            return false;
        }
        self.pending = true;
        self.host.schedule_frame();
        true
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Runs `render` if a redraw is pending, clearing the slot first.
    ///
    /// Requests made from inside `render` schedule the next frame.
    pub fn run_frame<T>(&mut self, render: impl FnOnce() -> T) -> Option<T> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(render())
    }

    #[must_use]
    pub fn host(&self) -> &S {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut S {
        &mut self.host
    }
}
