//! Per-window chrome configuration.

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Compositor capabilities the installer registers for a window.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct ChromeFeatures: u32 {
        /// Drop shadow drawn by the window manager around the borderless frame.
        const SHADOW          = 1 << 0;
        /// Native minimize / maximize / restore / snap animations.
        const ANIMATIONS      = 1 << 1;
        /// Rounded window corners, where the platform supports them.
        const ROUNDED_CORNERS = 1 << 2;
    }
}

impl Default for ChromeFeatures {
    fn default() -> Self {
        Self::all()
    }
}

/// Configuration of a window's chrome.
///
/// Set by the host window and read on every message, never cached: resizability can be toggled
/// at runtime through [`WindowChrome::set_resizable`].
///
/// ```
/// use casement_core::config::{ChromeFeatures, WindowChromeConfig};
///
/// let config = WindowChromeConfig::default()
///     .with_resizable(false)
///     .with_features(ChromeFeatures::SHADOW);
/// assert!(!config.resizable);
/// ```
///
/// [`WindowChrome::set_resizable`]: https://docs.rs/casement/latest/casement/struct.WindowChrome.html#method.set_resizable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowChromeConfig {
    /// Whether the window exposes resize edges and can be maximized.
    pub resizable: bool,
    /// Resize border width in pixels at scale factor `1.0`, replacing the platform metric.
    pub border_width_override: Option<u32>,
    /// Compositor capabilities to register on install.
    pub features: ChromeFeatures,
}

impl Default for WindowChromeConfig {
    fn default() -> Self {
        Self { resizable: true, border_width_override: None, features: ChromeFeatures::default() }
    }
}

impl WindowChromeConfig {
    /// Sets whether the window is resizable.
    ///
    /// The default is `true`.
    #[inline]
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Overrides the platform resize border width.
    ///
    /// The default is `None`, which uses the platform metric.
    #[inline]
    pub fn with_border_width_override(mut self, width: Option<u32>) -> Self {
        self.border_width_override = width;
        self
    }

    /// Sets the compositor capabilities to register.
    ///
    /// The default is [`ChromeFeatures::all`].
    #[inline]
    pub fn with_features(mut self, features: ChromeFeatures) -> Self {
        self.features = features;
        self
    }
}
