//! # macOS / AppKit
//!
//! The window keeps its native title bar, made transparent and extended under the content view
//! (`NSWindowStyleMask::FullSizeContentView`), so AppKit still provides the shadow, the resize
//! band, full-screen support and the zoom animation.
//!
//! Hand mouse events to [`ChromeBackend::handle_event`] as [`NativeEvent::AppKit`] before the
//! view processes them, for example from an overridden `mouseDown:` / `mouseMoved:` /
//! `mouseExited:`, and drop the ones reported as handled.
//!
//! All calls must happen on the main thread; off the main thread every query falls back and
//! every event is left unhandled.
#![cfg(target_os = "macos")]

#[macro_use]
mod util;
mod event;
mod window;

use std::any::Any;

use casement_core::backend::{ChromeBackend, ChromeContext, EventResponse, NativeEvent};
use casement_core::config::WindowChromeConfig;
use casement_core::dpi::LogicalPosition;
use casement_core::error::{ChromeError, NotSupportedError};
use casement_core::metrics::BorderMetrics;
use objc2_app_kit::NSEvent;
use rwh_06::RawWindowHandle;

use crate::util::ns_window;

/// The AppKit chrome backend.
#[derive(Debug, Default)]
pub struct AppKitBackend {
    _private: (),
}

impl AppKitBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the standard window buttons (the "traffic lights") so that the custom title bar
    /// can host them. `origin` is in points from the top-left corner of the content view.
    ///
    /// ```ignore
    /// let appkit = backend.downcast_ref::<AppKitBackend>().unwrap();
    /// appkit.set_traffic_lights_position(handle, LogicalPosition::new(12.0, 0.0))?;
    /// ```
    pub fn set_traffic_lights_position(
        &self,
        window: RawWindowHandle,
        origin: LogicalPosition<f64>,
    ) -> Result<(), ChromeError> {
        let ns_window = ns_window(window).ok_or_else(not_an_appkit_window)?;
        window::set_traffic_lights_position(&ns_window, origin)
    }
}

fn not_an_appkit_window() -> NotSupportedError {
    NotSupportedError::new("the AppKit backend needs an AppKit view inside a window")
}

impl ChromeBackend for AppKitBackend {
    fn border_metrics(
        &self,
        window: RawWindowHandle,
        config: &WindowChromeConfig,
    ) -> BorderMetrics {
        match ns_window(window) {
            Some(ns_window) => window::border_metrics(&ns_window, config),
            None => BorderMetrics::FALLBACK,
        }
    }

    fn is_maximized(&self, window: RawWindowHandle) -> bool {
        ns_window(window).is_some_and(|ns_window| window::is_zoomed(&ns_window))
    }

    fn is_full_screen(&self, window: RawWindowHandle) -> bool {
        ns_window(window).is_some_and(|ns_window| window::is_full_screen(&ns_window))
    }

    fn is_resizable(&self, window: RawWindowHandle) -> bool {
        ns_window(window).is_some_and(|ns_window| window::is_resizable(&ns_window))
    }

    fn install(
        &self,
        window: RawWindowHandle,
        config: &WindowChromeConfig,
    ) -> Result<(), ChromeError> {
        let ns_window = ns_window(window).ok_or_else(not_an_appkit_window)?;
        window::install(&ns_window, config)
    }

    fn handle_event(
        &self,
        window: RawWindowHandle,
        event: NativeEvent,
        cx: &mut ChromeContext<'_>,
    ) -> EventResponse {
        let NativeEvent::AppKit { ns_event } = event else {
            return EventResponse::Unhandled;
        };
        let Some(ns_window) = ns_window(window) else {
            return EventResponse::Unhandled;
        };

        // SAFETY: The caller lends us a live `NSEvent` for the duration of the call.
        let ns_event: &NSEvent = unsafe { ns_event.cast().as_ref() };
        event::handle_event(&ns_window, ns_event, cx)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
