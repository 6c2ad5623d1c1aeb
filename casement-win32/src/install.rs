//! Turns an ordinary top-level window into a borderless one that keeps every native behavior.

use std::{mem, ptr};

use casement_core::config::{ChromeFeatures, WindowChromeConfig};
use casement_core::error::ChromeError;
use tracing::{debug, warn};
use windows_sys::Win32::Foundation::HWND;
use windows_sys::Win32::Graphics::Dwm::{
    DwmExtendFrameIntoClientArea, DwmSetWindowAttribute, DWMWA_WINDOW_CORNER_PREFERENCE,
    DWMWCP_DONOTROUND, DWMWCP_ROUND, DWM_WINDOW_CORNER_PREFERENCE,
};
use windows_sys::Win32::UI::Controls::MARGINS;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    IsWindow, SetWindowPos, GWL_STYLE, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOMOVE,
    SWP_NOSIZE, SWP_NOZORDER, WINDOW_STYLE, WS_CAPTION, WS_MAXIMIZEBOX, WS_MINIMIZEBOX,
    WS_THICKFRAME,
};

use crate::util;

/// Style bits for a chrome window with the given configuration, keeping unrelated bits of
/// `style`.
///
/// `WS_CAPTION` is what makes the DWM play the minimize / maximize / snap animations, the frame
/// and maximize box are what make the window snappable and resizable. None of them draws
/// anything, since the whole window is client area.
pub(crate) fn chrome_style(style: WINDOW_STYLE, config: &WindowChromeConfig) -> WINDOW_STYLE {
    let mut style = style | WS_MINIMIZEBOX;

    if config.features.contains(ChromeFeatures::ANIMATIONS) {
        style |= WS_CAPTION;
    } else {
        style &= !WS_CAPTION;
    }

    if config.resizable {
        style |= WS_THICKFRAME | WS_MAXIMIZEBOX;
    } else {
        style &= !(WS_THICKFRAME | WS_MAXIMIZEBOX);
    }

    style
}

/// Margins handed to the DWM. Extending the frame over the whole window is what gets a
/// borderless window its drop shadow.
pub(crate) fn shadow_margins(features: ChromeFeatures) -> MARGINS {
    let inset = if features.contains(ChromeFeatures::SHADOW) { -1 } else { 0 };
    MARGINS { cxLeftWidth: inset, cxRightWidth: inset, cyTopHeight: inset, cyBottomHeight: inset }
}

pub(crate) fn corner_preference(features: ChromeFeatures) -> DWM_WINDOW_CORNER_PREFERENCE {
    if features.contains(ChromeFeatures::ROUNDED_CORNERS) {
        DWMWCP_ROUND
    } else {
        DWMWCP_DONOTROUND
    }
}

pub(crate) fn install(hwnd: HWND, config: &WindowChromeConfig) -> Result<(), ChromeError> {
    if unsafe { IsWindow(hwnd) } == false.into() {
        return Err(os_error!("not a window handle").into());
    }

    let style = unsafe { util::get_window_long(hwnd, GWL_STYLE) } as WINDOW_STYLE;
    let new_style = chrome_style(style, config);
    if new_style != style {
        unsafe { util::set_window_long(hwnd, GWL_STYLE, new_style as isize) };
    }

    let margins = shadow_margins(config.features);
    let hr = unsafe { DwmExtendFrameIntoClientArea(hwnd, &margins) };
    if hr < 0 {
        warn!("DwmExtendFrameIntoClientArea failed: {hr:#x}");
    }

    let corners = corner_preference(config.features);
    let hr = unsafe {
        DwmSetWindowAttribute(
            hwnd,
            DWMWA_WINDOW_CORNER_PREFERENCE as _,
            &corners as *const _ as _,
            mem::size_of::<DWM_WINDOW_CORNER_PREFERENCE>() as u32,
        )
    };
    if hr < 0 {
        // Before Windows 11 the attribute does not exist.
        debug!("DWMWA_WINDOW_CORNER_PREFERENCE not applied: {hr:#x}");
    }

    // Have the frame recomputed so `WM_NCCALCSIZE` runs with the new style.
    let flags = SWP_FRAMECHANGED | SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE;
    util::win_to_err(unsafe { SetWindowPos(hwnd, ptr::null_mut(), 0, 0, 0, 0, flags) })
        .map_err(|err| {
            warn!("SetWindowPos(SWP_FRAMECHANGED) failed: {err}");
            os_error!(err)
        })?;

    debug!(
        resizable = config.resizable,
        features = ?config.features,
        "installed window chrome, style {style:#x} -> {new_style:#x}"
    );
    Ok(())
}

/// Ask the OS to recompute and repaint the frame.
pub(crate) fn refresh_frame(hwnd: HWND) {
    let flags = SWP_FRAMECHANGED | SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE;
    if let Err(err) =
        util::win_to_err(unsafe { SetWindowPos(hwnd, ptr::null_mut(), 0, 0, 0, 0, flags) })
    {
        debug!("frame refresh failed: {err}");
    }
}
