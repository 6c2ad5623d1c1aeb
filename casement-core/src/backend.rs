//! The interface every native backend implements.

use std::any::Any;
use std::fmt;
use std::ptr::NonNull;

use rwh_06::RawWindowHandle;

use crate::capture::CaptureTracker;
use crate::config::WindowChromeConfig;
use crate::error::ChromeError;
use crate::metrics::BorderMetrics;
use crate::title_bar::TitleBar;

/// A raw message from the platform's window procedure / event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NativeEvent {
    /// A message received by a Win32 window procedure.
    Win32 { msg: u32, wparam: usize, lparam: isize },
    /// An `NSEvent` delivered to the window, borrowed for the duration of the call.
    AppKit { ns_event: NonNull<std::ffi::c_void> },
}

impl NativeEvent {
    pub fn win32(msg: u32, wparam: usize, lparam: isize) -> Self {
        Self::Win32 { msg, wparam, lparam }
    }
}

/// What the host must do with a message after the router saw it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// Run the platform's default processing.
    #[default]
    Unhandled,
    /// Skip default processing and return this value to the OS.
    Handled(isize),
}

impl EventResponse {
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled(_))
    }

    /// The `(handled, result)` pair the window procedure expects.
    pub fn into_parts(self) -> (bool, isize) {
        match self {
            Self::Unhandled => (false, 0),
            Self::Handled(result) => (true, result),
        }
    }
}

/// Per-window state the router works on.
pub struct ChromeContext<'a> {
    pub config: &'a WindowChromeConfig,
    pub title_bar: &'a mut dyn TitleBar,
    pub tracker: &'a mut CaptureTracker,
}

impl fmt::Debug for ChromeContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChromeContext")
            .field("config", self.config)
            .field("tracker", self.tracker)
            .finish_non_exhaustive()
    }
}

/// A native chrome implementation.
///
/// Exactly one backend is constructed per process and shared by all windows. Backends hold no
/// per-window state: every method re-queries the live window, so windows are independent of each
/// other and nothing goes stale when the OS changes the window behind the application's back
/// (snapping, monitor changes).
///
/// Handles of a kind the backend does not understand are treated like failed queries: metrics
/// and state fall back, [`install`](Self::install) returns [`ChromeError::NotSupported`] and
/// [`handle_event`](Self::handle_event) leaves the message alone.
pub trait ChromeBackend: fmt::Debug {
    /// Resize border thickness and scale factor for the monitor the window is currently on.
    ///
    /// `config.border_width_override` replaces the platform metric.
    fn border_metrics(&self, window: RawWindowHandle, config: &WindowChromeConfig)
        -> BorderMetrics;

    fn is_maximized(&self, window: RawWindowHandle) -> bool;

    /// Whether the window's outer rectangle covers its monitor exactly.
    fn is_full_screen(&self, window: RawWindowHandle) -> bool;

    /// Whether the native style currently allows resizing.
    fn is_resizable(&self, window: RawWindowHandle) -> bool;

    /// Merge the title bar into the content area and register compositor features.
    ///
    /// Idempotent; call again after changing `config.resizable`.
    fn install(&self, window: RawWindowHandle, config: &WindowChromeConfig)
        -> Result<(), ChromeError>;

    /// Route one native message. Must see every message before default processing.
    fn handle_event(
        &self,
        window: RawWindowHandle,
        event: NativeEvent,
        cx: &mut ChromeContext<'_>,
    ) -> EventResponse;

    /// The backend as [`Any`], for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

impl dyn ChromeBackend + '_ {
    /// Reach the API only one backend has, such as the AppKit traffic lights.
    ///
    /// Returns `None` if another backend was selected.
    pub fn downcast_ref<B: ChromeBackend + 'static>(&self) -> Option<&B> {
        self.as_any().downcast_ref::<B>()
    }
}
