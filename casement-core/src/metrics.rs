//! Resize-border thickness and scale factor of a window.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Border thickness reported by the platform, in physical pixels, together with the scale
/// factor of the monitor the window currently sits on.
///
/// Backends recompute this on every query: moving a window to a monitor with a different DPI
/// changes it without any notification reaching the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BorderMetrics {
    /// Width of the invisible resize band along the left and right edges.
    pub resize_border_x: i32,
    /// Height of the invisible resize band along the top and bottom edges.
    pub resize_border_y: i32,
    /// Scale factor of the window's monitor (`1.0` at 96 DPI).
    pub scale_factor: f64,
}

impl BorderMetrics {
    /// Returned when the platform cannot be queried.
    ///
    /// A zero-width border never matches an edge, so classification degrades to
    /// "no resize" while caption dragging and the buttons keep working.
    pub const FALLBACK: BorderMetrics =
        BorderMetrics { resize_border_x: 0, resize_border_y: 0, scale_factor: 1.0 };

    pub const fn new(resize_border_x: i32, resize_border_y: i32, scale_factor: f64) -> Self {
        Self { resize_border_x, resize_border_y, scale_factor }
    }

    /// Replace both border dimensions with `width`, given in pixels at scale factor `1.0`.
    ///
    /// `None` returns the metrics unchanged.
    pub fn with_override(self, width: Option<u32>) -> Self {
        match width {
            Some(width) => {
                let scaled = (f64::from(width) * self.scale_factor).round() as i32;
                Self { resize_border_x: scaled, resize_border_y: scaled, ..self }
            },
            None => self,
        }
    }

    /// Whether a pointer could ever land on a resize edge with these metrics.
    pub fn has_resize_border(&self) -> bool {
        self.resize_border_x > 0 || self.resize_border_y > 0
    }
}

impl Default for BorderMetrics {
    fn default() -> Self {
        Self::FALLBACK
    }
}
