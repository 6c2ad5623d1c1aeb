use objc2::rc::Retained;
use objc2::MainThreadMarker;
use objc2_app_kit::{NSView, NSWindow};
use rwh_06::RawWindowHandle;

macro_rules! os_error {
    ($error:expr) => {{ casement_core::error::OsError::new(line!(), file!(), $error) }};
}

/// The window owning the view behind `window`.
///
/// `None` for foreign handle kinds, views that are not in a window, and calls made off the main
/// thread.
pub(crate) fn ns_window(window: RawWindowHandle) -> Option<Retained<NSWindow>> {
    let RawWindowHandle::AppKit(handle) = window else {
        return None;
    };
    MainThreadMarker::new()?;

    // SAFETY: The handle points to a live `NSView` for the duration of the call, and we are on
    // the main thread.
    let view: Retained<NSView> = unsafe { Retained::retain(handle.ns_view.as_ptr().cast()) }?;
    view.window()
}
