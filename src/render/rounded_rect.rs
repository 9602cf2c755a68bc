use serde::{Deserialize, Serialize};

/// Minimal path-building surface a drawing context must expose.
///
/// Canvas 2D, cairo and friends all map onto these three calls.
pub trait PathSink {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64);
    fn close_path(&mut self);
}

/// Box plus corner radius, e.g. the tooltip background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

impl RoundedRect {
    /// Radius shrunk so opposite corners never overlap.
    #[must_use]
    pub fn effective_radius(self) -> f64 {
        let mut radius = self.radius;
        if self.width < 2.0 * radius {
            radius = self.width / 2.0;
        }
        if self.height < 2.0 * radius {
            radius = self.height / 2.0;
        }
        radius
    }
}

/// Traces `rect` as a closed rounded path on `sink`.
///
/// Only the path is built; stroking or filling stays with the caller.
pub fn draw_rounded_rect<S: PathSink + ?Sized>(sink: &mut S, rect: RoundedRect) {
    let RoundedRect {
        x,
        y,
        width: w,
        height: h,
        ..
    } = rect;
    let r = rect.effective_radius();

    sink.begin_path();
    sink.move_to(x + r, y);
    sink.arc_to(x + w, y, x + w, y + h, r);
    sink.arc_to(x + w, y + h, x, y + h, r);
    sink.arc_to(x, y + h, x, y, r);
    sink.arc_to(x, y, x + w, y, r);
    sink.close_path();
}

/// Recorded path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    Begin,
    MoveTo { x: f64, y: f64 },
    ArcTo { x1: f64, y1: f64, x2: f64, y2: f64, radius: f64 },
    Close,
}

/// `PathSink` that stores commands, for headless hosts and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathRecorder {
    pub commands: Vec<PathCommand>,
}

impl PathSink for PathRecorder {
    fn begin_path(&mut self) {
        self.commands.push(PathCommand::Begin);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) {
        self.commands.push(PathCommand::ArcTo {
            x1,
            y1,
            x2,
            y2,
            radius,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}
