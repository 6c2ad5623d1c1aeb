//! Button tracking while the OS holds the pointer.
//!
//! Once the hit-test answers [`HitRegion::CustomButton`], the OS treats the pointer as being over
//! its own non-client button: the toolkit's control never sees the hover, press or release. The
//! [`CaptureTracker`] turns the non-client notifications back into button events.

use tracing::trace;

use crate::hit_test::{ButtonId, HitRegion};
use crate::title_bar::{ButtonEvent, MaximizeButtonIcon, MaximizeButtonVisualState, TitleBar};

/// What the backend has to do after a hover update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverChange {
    /// The pointer entered a button. The backend must ask the OS for a leave notification, so
    /// the hover is cleared even if the pointer leaves the window without moving inside it.
    Entered(ButtonId),
    /// The pointer left the hovered button.
    Left(ButtonId),
    Unchanged,
}

/// Mirrors the hover / press state of the title bar's custom buttons.
///
/// Every transition is driven by an explicit notification; nothing changes on its own. Buttons
/// that vanished from the title bar's layout are ignored, so a replaced title bar degrades to
/// no-ops instead of touching a dead control.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaptureTracker {
    hovered: Option<ButtonId>,
    pressed: Option<ButtonId>,
}

impl CaptureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&ButtonId> {
        self.hovered.as_ref()
    }

    pub fn pressed(&self) -> Option<&ButtonId> {
        self.pressed.as_ref()
    }

    /// Feed the result of a hit-test.
    pub fn hover(&mut self, title_bar: &mut dyn TitleBar, region: &HitRegion) -> HoverChange {
        let target = live_button(title_bar, region);
        let previous = self.hovered.take();

        if let Some(previous) = previous.as_ref().filter(|previous| Some(*previous) != target.as_ref())
        {
            title_bar.set_visual_state(previous, MaximizeButtonVisualState::Normal);
        }

        match target {
            Some(target) => {
                // Re-asserted on every hit-test so a freshly replaced control picks it up.
                title_bar.set_visual_state(&target, MaximizeButtonVisualState::Hover);
                self.hovered = Some(target.clone());
                if previous.as_ref() == Some(&target) {
                    HoverChange::Unchanged
                } else {
                    trace!(button = %target, "pointer entered custom button");
                    HoverChange::Entered(target)
                }
            },
            None => match previous {
                Some(previous) => {
                    self.pressed = None;
                    HoverChange::Left(previous)
                },
                None => HoverChange::Unchanged,
            },
        }
    }

    /// The OS reported that the pointer left the window or its non-client area.
    pub fn leave(&mut self, title_bar: &mut dyn TitleBar) {
        if let Some(previous) = self.hovered.take() {
            trace!(button = %previous, "pointer left custom button");
            title_bar.set_visual_state(&previous, MaximizeButtonVisualState::Normal);
        }
        // Releasing outside the button cancels the click.
        self.pressed = None;
    }

    /// Non-client button down. Returns `true` if it landed on a custom button and was forwarded,
    /// in which case the OS must not start a caption drag or open the system menu.
    pub fn press(&mut self, title_bar: &mut dyn TitleBar, region: &HitRegion) -> bool {
        match live_button(title_bar, region) {
            Some(id) => {
                title_bar.dispatch(&id, ButtonEvent::Press);
                self.pressed = Some(id);
                true
            },
            None => {
                self.pressed = None;
                false
            },
        }
    }

    /// Non-client button up. Completes the click if it happens over the button that was pressed,
    /// then refreshes the maximize icon from the live window state.
    ///
    /// Returns the clicked button.
    pub fn release(
        &mut self,
        title_bar: &mut dyn TitleBar,
        region: &HitRegion,
        is_maximized: impl FnOnce() -> bool,
    ) -> Option<ButtonId> {
        let pressed = self.pressed.take()?;
        let id = live_button(title_bar, region).filter(|id| *id == pressed)?;

        title_bar.dispatch(&id, ButtonEvent::Release);
        if id == ButtonId::MAXIMIZE {
            title_bar.set_maximize_icon(MaximizeButtonIcon::for_state(is_maximized()));
        }
        Some(id)
    }

    /// Drop all tracking, for example when the window is hidden.
    pub fn reset(&mut self, title_bar: &mut dyn TitleBar) {
        self.leave(title_bar);
    }
}

fn live_button(title_bar: &dyn TitleBar, region: &HitRegion) -> Option<ButtonId> {
    let id = region.button()?;
    title_bar.layout().button(id).map(|_| id.clone())
}
