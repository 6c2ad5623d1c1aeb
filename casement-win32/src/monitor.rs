use std::{io, mem};

use casement_core::frame::FrameRect;
use tracing::debug;
use windows_sys::Win32::Foundation::HWND;
use windows_sys::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MonitorFromWindow, HMONITOR, MONITORINFO, MONITOR_DEFAULTTOPRIMARY,
};

use crate::util::{self, WindowArea};

pub(crate) fn get_monitor_info(hmonitor: HMONITOR) -> Result<MONITORINFO, io::Error> {
    let mut monitor_info: MONITORINFO = unsafe { mem::zeroed() };
    monitor_info.cbSize = mem::size_of::<MONITORINFO>() as u32;
    let status = unsafe { GetMonitorInfoW(hmonitor, &mut monitor_info) };
    if status == false.into() {
        Err(io::Error::last_os_error())
    } else {
        Ok(monitor_info)
    }
}

/// Bounds of the monitor the window is mostly on, falling back to the primary monitor.
pub(crate) fn monitor_bounds(hwnd: HWND) -> Result<FrameRect, io::Error> {
    let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTOPRIMARY) };
    get_monitor_info(monitor).map(|info| util::frame_rect(info.rcMonitor))
}

/// Whether the window's outer rectangle is exactly its monitor's rectangle.
///
/// Derived from live geometry every time, since snapping can change it behind our back.
pub fn is_full_screen(hwnd: HWND) -> bool {
    let window = match WindowArea::Outer.get_rect(hwnd) {
        Ok(rect) => util::frame_rect(rect),
        Err(err) => {
            debug!("GetWindowRect failed, assuming not full-screen: {err}");
            return false;
        },
    };

    match monitor_bounds(hwnd) {
        Ok(monitor) => window == monitor,
        Err(err) => {
            debug!("GetMonitorInfoW failed, assuming not full-screen: {err}");
            false
        },
    }
}
