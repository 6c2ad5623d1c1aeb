//! # Win32
//!
//! The window loses its title bar and borders, but keeps `WS_CAPTION`, `WS_THICKFRAME` and the
//! minimize / maximize boxes, so the DWM still treats it as an ordinary top-level window: it can
//! be snapped, it animates, and it has a shadow.
//!
//! The host has to pass every message of the window to
//! [`ChromeBackend::handle_event`] before `DefWindowProcW`, and skip `DefWindowProcW` for the
//! messages reported as handled.
//!
//! Requires the process to be per-monitor DPI aware for the border metrics to follow the
//! monitor the window is on.
#![cfg(windows)]

#[macro_use]
mod util;
mod dpi;
mod event;
mod install;
mod monitor;

use std::any::Any;

use casement_core::backend::{ChromeBackend, ChromeContext, EventResponse, NativeEvent};
use casement_core::config::WindowChromeConfig;
use casement_core::error::{ChromeError, NotSupportedError};
use casement_core::metrics::BorderMetrics;
use rwh_06::RawWindowHandle;
use windows_sys::Win32::Foundation::HWND;
use windows_sys::Win32::UI::WindowsAndMessaging::{GWL_STYLE, WS_THICKFRAME};

pub use self::dpi::dpi_to_scale_factor;

/// The Win32 chrome backend.
#[derive(Debug, Default)]
pub struct Win32Backend {
    _private: (),
}

impl Win32Backend {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn metrics(&self, hwnd: HWND, config: &WindowChromeConfig) -> BorderMetrics {
        dpi::border_metrics(hwnd).with_override(config.border_width_override)
    }
}

fn hwnd(window: RawWindowHandle) -> Option<HWND> {
    match window {
        RawWindowHandle::Win32(handle) => Some(handle.hwnd.get() as HWND),
        _ => None,
    }
}

impl ChromeBackend for Win32Backend {
    fn border_metrics(
        &self,
        window: RawWindowHandle,
        config: &WindowChromeConfig,
    ) -> BorderMetrics {
        match hwnd(window) {
            Some(hwnd) => self.metrics(hwnd, config),
            None => BorderMetrics::FALLBACK,
        }
    }

    fn is_maximized(&self, window: RawWindowHandle) -> bool {
        hwnd(window).is_some_and(util::is_maximized)
    }

    fn is_full_screen(&self, window: RawWindowHandle) -> bool {
        hwnd(window).is_some_and(monitor::is_full_screen)
    }

    fn is_resizable(&self, window: RawWindowHandle) -> bool {
        hwnd(window).is_some_and(|hwnd| {
            let style = unsafe { util::get_window_long(hwnd, GWL_STYLE) } as u32;
            style & WS_THICKFRAME != 0
        })
    }

    fn install(
        &self,
        window: RawWindowHandle,
        config: &WindowChromeConfig,
    ) -> Result<(), ChromeError> {
        let hwnd = hwnd(window)
            .ok_or_else(|| NotSupportedError::new("the Win32 backend needs a Win32 window"))?;
        install::install(hwnd, config)
    }

    fn handle_event(
        &self,
        window: RawWindowHandle,
        event: NativeEvent,
        cx: &mut ChromeContext<'_>,
    ) -> EventResponse {
        match (hwnd(window), event) {
            (Some(hwnd), NativeEvent::Win32 { msg, wparam, lparam }) => {
                let window = event::LiveWindow::new(self, hwnd);
                event::handle_message(&window, msg, wparam, lparam, cx)
            },
            _ => EventResponse::Unhandled,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
