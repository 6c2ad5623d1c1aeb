//! Client-rect adjustment for maximized windows.
//!
//! A borderless window that the OS maximizes is still sized as if it had its resize border, so
//! the outer rectangle spills past the monitor's work area by exactly that border. Insetting the
//! proposed client rectangle keeps the content (and the custom title bar) on screen.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::metrics::BorderMetrics;

/// A rectangle in physical screen pixels, stored as edges the way native APIs report it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl FrameRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Move every edge inward by `dx` horizontally and `dy` vertically.
    pub fn inset(self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right - dx,
            bottom: self.bottom - dy,
        }
    }
}

/// The part of the window state the frame adjuster depends on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameState {
    pub maximized: bool,
    /// The outer rectangle covers its monitor exactly.
    pub full_screen: bool,
}

/// Compute the client rectangle for `proposed`.
///
/// Maximized windows are shrunk by the resize border on all four sides. Full-screen windows
/// must fill the monitor exactly and are returned unchanged, as are restored windows, whose
/// whole outer rectangle is client area.
pub fn adjust_client_rect(proposed: FrameRect, state: FrameState, metrics: BorderMetrics) -> FrameRect {
    if state.maximized && !state.full_screen {
        proposed.inset(metrics.resize_border_x, metrics.resize_border_y)
    } else {
        proposed
    }
}
