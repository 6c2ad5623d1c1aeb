#![allow(non_snake_case)]

use casement_core::metrics::BorderMetrics;
use tracing::debug;
use windows_sys::Win32::Foundation::{HWND, S_OK};
use windows_sys::Win32::Graphics::Gdi::{
    GetDC, GetDeviceCaps, MonitorFromWindow, ReleaseDC, LOGPIXELSX, MONITOR_DEFAULTTONEAREST,
};
use windows_sys::Win32::UI::HiDpi::MDT_EFFECTIVE_DPI;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, IsProcessDPIAware, SM_CXPADDEDBORDER, SM_CXSIZEFRAME, SM_CYSIZEFRAME,
};

use crate::util::{GET_DPI_FOR_MONITOR, GET_DPI_FOR_WINDOW, GET_SYSTEM_METRICS_FOR_DPI};

pub const BASE_DPI: u32 = 96;
pub fn dpi_to_scale_factor(dpi: u32) -> f64 {
    dpi as f64 / BASE_DPI as f64
}

/// DPI of the monitor the window is on. `None` if the window handle is no longer valid.
pub fn hwnd_dpi(hwnd: HWND) -> Option<u32> {
    unsafe {
        if let Some(GetDpiForWindow) = *GET_DPI_FOR_WINDOW {
            // We are on Windows 10 Anniversary Update (1607) or later.
            match GetDpiForWindow(hwnd) {
                0 => None, // 0 is returned if hwnd is invalid
                dpi => Some(dpi),
            }
        } else if let Some(GetDpiForMonitor) = *GET_DPI_FOR_MONITOR {
            // We are on Windows 8.1 or later.
            let monitor = MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST);
            if monitor.is_null() {
                return None;
            }

            let mut dpi_x = 0;
            let mut dpi_y = 0;
            if GetDpiForMonitor(monitor, MDT_EFFECTIVE_DPI, &mut dpi_x, &mut dpi_y) == S_OK {
                Some(dpi_x)
            } else {
                None
            }
        } else {
            // We are on Vista or later, where only the system DPI exists.
            Some(system_dpi())
        }
    }
}

/// DPI the system scales DPI-aware processes to.
///
/// A DPI-unaware process is scaled by the OS, so it has to work at [`BASE_DPI`].
fn system_dpi() -> u32 {
    unsafe {
        if IsProcessDPIAware() == false.into() {
            return BASE_DPI;
        }

        let hdc = GetDC(std::ptr::null_mut());
        if hdc.is_null() {
            debug!("GetDC failed, assuming {BASE_DPI} DPI");
            return BASE_DPI;
        }
        let dpi = GetDeviceCaps(hdc, LOGPIXELSX);
        ReleaseDC(std::ptr::null_mut(), hdc);

        match u32::try_from(dpi) {
            Ok(dpi) if dpi > 0 => dpi,
            _ => BASE_DPI,
        }
    }
}

/// The invisible resize border a captioned, thick-framed window would have at `dpi`.
fn frame_metrics(dpi: u32) -> (i32, i32) {
    unsafe {
        let (frame_x, frame_y, padding) = match *GET_SYSTEM_METRICS_FOR_DPI {
            Some(GetSystemMetricsForDpi) => (
                GetSystemMetricsForDpi(SM_CXSIZEFRAME, dpi),
                GetSystemMetricsForDpi(SM_CYSIZEFRAME, dpi),
                GetSystemMetricsForDpi(SM_CXPADDEDBORDER, dpi),
            ),
            None => (
                GetSystemMetrics(SM_CXSIZEFRAME),
                GetSystemMetrics(SM_CYSIZEFRAME),
                GetSystemMetrics(SM_CXPADDEDBORDER),
            ),
        };
        (frame_x + padding, frame_y + padding)
    }
}

pub fn border_metrics(hwnd: HWND) -> BorderMetrics {
    let Some(dpi) = hwnd_dpi(hwnd) else {
        debug!("window DPI unavailable, using fallback border metrics");
        return BorderMetrics::FALLBACK;
    };

    let (border_x, border_y) = frame_metrics(dpi);
    BorderMetrics::new(border_x, border_y, dpi_to_scale_factor(dpi))
}
