use serde::{Deserialize, Serialize};

/// Pixel box of one plot surface (main chart or preview strip).
///
/// Hosts pass fresh geometry on every resize; nothing derived from it is
/// cached across renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when both sides are finite and strictly positive.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Shrinks the height by a bottom padding, never below zero.
    #[must_use]
    pub fn inset_bottom(self, padding: f64) -> Self {
        Self {
            width: self.width,
            height: (self.height - padding).max(0.0),
        }
    }
}

/// One point of a projected polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
