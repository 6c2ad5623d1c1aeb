//! # macOS
//!
//! Forward the view's `mouseDown:`, `mouseMoved:` and `mouseExited:` events, wrapped in
//! [`NativeEvent::AppKit`], to [`WindowChrome::handle_native_message`], and drop the ones
//! reported as handled.
//!
//! [`NativeEvent::AppKit`]: crate::backend::NativeEvent::AppKit

use rwh_06::HasWindowHandle;

use crate::dpi::LogicalPosition;
use crate::error::{ChromeError, NotSupportedError, OsError};
use crate::title_bar::TitleBar;
use crate::WindowChrome;

pub use casement_appkit::AppKitBackend;

/// Additional methods on [`WindowChrome`] that are specific to macOS.
pub trait WindowChromeExtMacOS {
    /// Move the close, minimize and zoom buttons so that the custom title bar can host them.
    ///
    /// `origin` is the top-left corner of the buttons, in points from the top-left corner of
    /// the content view. Calling it again moves them again.
    fn set_traffic_lights_position(
        &self,
        window: &impl HasWindowHandle,
        origin: LogicalPosition<f64>,
    ) -> Result<(), ChromeError>;
}

impl<T: TitleBar> WindowChromeExtMacOS for WindowChrome<T> {
    fn set_traffic_lights_position(
        &self,
        window: &impl HasWindowHandle,
        origin: LogicalPosition<f64>,
    ) -> Result<(), ChromeError> {
        let backend = self
            .backend()
            .downcast_ref::<AppKitBackend>()
            .ok_or(NotSupportedError::new("the window chrome does not use the AppKit backend"))?;
        let raw = window.window_handle().map_err(|err| OsError::new(line!(), file!(), err))?;
        backend.set_traffic_lights_position(raw.as_raw(), origin)
    }
}
