//! The interface the custom title bar exposes to the engine.
//!
//! The title bar itself is drawn by whatever UI toolkit the application uses; the engine only
//! needs its geometry and a way to feed it the button events the OS swallowed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hit_test::{ButtonGeometry, ButtonId};

/// Geometry of the title bar, in physical pixels relative to the client area.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TitleBarLayout {
    /// Height of the title bar; the caption band ends here.
    pub height: u32,
    /// Buttons the OS tracks as non-client, by stable id.
    pub buttons: Vec<(ButtonId, ButtonGeometry)>,
    /// Ordinary controls inside the title bar that keep receiving client input.
    pub client_controls: Vec<ButtonGeometry>,
}

impl TitleBarLayout {
    pub fn button(&self, id: &ButtonId) -> Option<ButtonGeometry> {
        self.buttons.iter().find(|(button, _)| button == id).map(|(_, geometry)| *geometry)
    }
}

/// Hover state of the custom maximize button.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MaximizeButtonVisualState {
    #[default]
    Normal,
    Hover,
}

/// Icon of the maximize button, reflecting what a click would do.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MaximizeButtonIcon {
    #[default]
    Maximize,
    Restore,
}

impl MaximizeButtonIcon {
    /// The icon for a window in the given state.
    pub fn for_state(maximized: bool) -> Self {
        if maximized {
            Self::Restore
        } else {
            Self::Maximize
        }
    }

    /// Logical asset name, for the application's icon resolver.
    pub fn logical_name(self) -> &'static str {
        match self {
            Self::Maximize => "maximize",
            Self::Restore => "restore",
        }
    }
}

/// A mouse event synthesized for a button the OS is tracking as non-client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonEvent {
    Press,
    /// Completes a click; the button runs its action (for example maximize / restore).
    Release,
}

/// The custom title bar of a window.
///
/// All methods are called on the UI thread, from inside the native message handler.
pub trait TitleBar {
    /// Current geometry. Queried for every hit-test, so buttons may move or disappear at any
    /// time.
    fn layout(&self) -> TitleBarLayout;

    /// Deliver a synthesized event to button `id`.
    fn dispatch(&mut self, id: &ButtonId, event: ButtonEvent);

    /// Update the hover appearance of button `id`.
    fn set_visual_state(&mut self, id: &ButtonId, state: MaximizeButtonVisualState);

    /// Update the maximize button's icon.
    fn set_maximize_icon(&mut self, icon: MaximizeButtonIcon);
}
