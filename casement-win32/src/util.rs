use std::ffi::c_void;
use std::sync::LazyLock;
use std::{io, mem};

use casement_core::frame::FrameRect;
use windows_sys::core::HRESULT;
use windows_sys::Win32::Foundation::{BOOL, HWND, RECT};
use windows_sys::Win32::Graphics::Gdi::HMONITOR;
use windows_sys::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryA};
use windows_sys::Win32::UI::HiDpi::MONITOR_DPI_TYPE;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetClientRect, GetWindowPlacement, GetWindowRect, SW_MAXIMIZE, SYSTEM_METRICS_INDEX,
    WINDOWPLACEMENT, WINDOW_LONG_PTR_INDEX,
};

macro_rules! os_error {
    ($error:expr) => {{ casement_core::error::OsError::new(line!(), file!(), $error) }};
}

pub(crate) fn win_to_err(result: BOOL) -> Result<(), io::Error> {
    if result != false.into() {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

pub enum WindowArea {
    Outer,
    Client,
}

impl WindowArea {
    /// The outer rectangle in screen coordinates, or the client rectangle in client
    /// coordinates (its origin is always zero).
    pub fn get_rect(self, hwnd: HWND) -> Result<RECT, io::Error> {
        let mut rect = unsafe { mem::zeroed() };

        match self {
            WindowArea::Outer => win_to_err(unsafe { GetWindowRect(hwnd, &mut rect) })?,
            WindowArea::Client => win_to_err(unsafe { GetClientRect(hwnd, &mut rect) })?,
        }

        Ok(rect)
    }
}

pub fn is_maximized(window: HWND) -> bool {
    unsafe {
        let mut placement: WINDOWPLACEMENT = mem::zeroed();
        placement.length = mem::size_of::<WINDOWPLACEMENT>() as u32;
        if GetWindowPlacement(window, &mut placement) == false.into() {
            return false;
        }
        placement.showCmd == SW_MAXIMIZE as u32
    }
}

pub(crate) const fn frame_rect(rect: RECT) -> FrameRect {
    FrameRect::new(rect.left, rect.top, rect.right, rect.bottom)
}

pub(crate) const fn native_rect(rect: FrameRect) -> RECT {
    RECT { left: rect.left, top: rect.top, right: rect.right, bottom: rect.bottom }
}

// Helper function to dynamically load function pointer as some functions
// may not be available on all Windows versions.
//
// `library` and `function` must be zero-terminated.
pub(super) fn get_function_impl(library: &str, function: &str) -> Option<*const c_void> {
    assert_eq!(library.chars().last(), Some('\0'));
    assert_eq!(function.chars().last(), Some('\0'));

    // Library names we will use are ASCII so we can use the A version to avoid string conversion.
    let module = unsafe { LoadLibraryA(library.as_ptr()) };
    if module.is_null() {
        return None;
    }

    unsafe { GetProcAddress(module, function.as_ptr()) }.map(|function_ptr| function_ptr as _)
}

macro_rules! get_function {
    ($lib:expr, $func:ident) => {
        crate::util::get_function_impl(concat!($lib, '\0'), concat!(stringify!($func), '\0'))
            .map(|f| unsafe { std::mem::transmute::<*const _, $func>(f) })
    };
}

pub type GetDpiForWindow = unsafe extern "system" fn(hwnd: HWND) -> u32;
pub type GetDpiForMonitor = unsafe extern "system" fn(
    hmonitor: HMONITOR,
    dpi_type: MONITOR_DPI_TYPE,
    dpi_x: *mut u32,
    dpi_y: *mut u32,
) -> HRESULT;
pub type GetSystemMetricsForDpi =
    unsafe extern "system" fn(nindex: SYSTEM_METRICS_INDEX, dpi: u32) -> i32;

pub(crate) static GET_DPI_FOR_WINDOW: LazyLock<Option<GetDpiForWindow>> =
    LazyLock::new(|| get_function!("user32.dll", GetDpiForWindow));
pub(crate) static GET_DPI_FOR_MONITOR: LazyLock<Option<GetDpiForMonitor>> =
    LazyLock::new(|| get_function!("shcore.dll", GetDpiForMonitor));
pub(crate) static GET_SYSTEM_METRICS_FOR_DPI: LazyLock<Option<GetSystemMetricsForDpi>> =
    LazyLock::new(|| get_function!("user32.dll", GetSystemMetricsForDpi));

#[inline(always)]
pub(crate) const fn get_x_lparam(x: u32) -> i16 {
    loword(x) as _
}

#[inline(always)]
pub(crate) const fn get_y_lparam(x: u32) -> i16 {
    hiword(x) as _
}

#[inline(always)]
pub(crate) const fn loword(x: u32) -> u16 {
    (x & 0xffff) as u16
}

#[inline(always)]
pub(crate) const fn hiword(x: u32) -> u16 {
    ((x >> 16) & 0xffff) as u16
}

#[inline(always)]
pub(crate) unsafe fn get_window_long(hwnd: HWND, nindex: WINDOW_LONG_PTR_INDEX) -> isize {
    #[cfg(target_pointer_width = "64")]
    return unsafe { windows_sys::Win32::UI::WindowsAndMessaging::GetWindowLongPtrW(hwnd, nindex) };
    #[cfg(target_pointer_width = "32")]
    return unsafe {
        windows_sys::Win32::UI::WindowsAndMessaging::GetWindowLongW(hwnd, nindex) as isize
    };
}

#[inline(always)]
pub(crate) unsafe fn set_window_long(
    hwnd: HWND,
    nindex: WINDOW_LONG_PTR_INDEX,
    dwnewlong: isize,
) -> isize {
    #[cfg(target_pointer_width = "64")]
    return unsafe {
        windows_sys::Win32::UI::WindowsAndMessaging::SetWindowLongPtrW(hwnd, nindex, dwnewlong)
    };
    #[cfg(target_pointer_width = "32")]
    return unsafe {
        windows_sys::Win32::UI::WindowsAndMessaging::SetWindowLongW(hwnd, nindex, dwnewlong as i32)
            as isize
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_pointer_coordinates() {
        // (-8, 1200) as packed by the OS for a pointer left of the primary monitor.
        let lparam = ((1200u32) << 16) | (-8i16 as u16 as u32);
        assert_eq!(get_x_lparam(lparam), -8);
        assert_eq!(get_y_lparam(lparam), 1200);
    }

    #[test]
    fn rect_conversion() {
        let rect = RECT { left: -8, top: -8, right: 1928, bottom: 1088 };
        let frame = frame_rect(rect);
        assert_eq!(frame.width(), 1936);
        let back = native_rect(frame);
        assert_eq!((back.left, back.top, back.right, back.bottom), (-8, -8, 1928, 1088));
    }
}
