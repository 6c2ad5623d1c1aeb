//! # Windows
//!
//! The window procedure must forward every message, wrapped in [`NativeEvent::Win32`], to
//! [`WindowChrome::handle_native_message`] before calling `DefWindowProcW`:
//!
//! ```ignore
//! let event = NativeEvent::win32(msg, wparam, lparam);
//! match chrome.handle_native_message(&window, event) {
//!     EventResponse::Handled(result) => result,
//!     EventResponse::Unhandled => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
//! }
//! ```
//!
//! The maximize button of the title bar should use [`ButtonId::MAXIMIZE`]: it is reported to
//! the OS as the native maximize button, which is what opens the snap layout flyout on
//! Windows 11.
//!
//! [`ButtonId::MAXIMIZE`]: crate::hit_test::ButtonId::MAXIMIZE

#[cfg(doc)]
use crate::{backend::NativeEvent, WindowChrome};

pub use casement_win32::{dpi_to_scale_factor, Win32Backend};
