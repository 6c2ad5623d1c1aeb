//! casement lets an application draw its own title bar while the window keeps behaving like a
//! native one: it can be moved, resized from every edge and corner, snapped, maximized and
//! minimized with the platform's animations, and it keeps its shadow.
//!
//! Removing the OS title bar also removes the OS's hit-testing, so casement answers the
//! questions the window manager asks about the window ("what is at this pixel?", "how large is
//! the client area?") on the application's behalf. It never moves or paints anything itself.
//!
//! # Setting up a window
//!
//! Select the backend once at startup with [`platform_backend`], and wrap each window in a
//! [`WindowChrome`]. The title bar is drawn by the application's UI toolkit and exposed to
//! casement through the [`TitleBar`] trait.
//!
//! ```no_run
//! use casement::{platform_backend, WindowChrome, WindowChromeConfig};
//! # use casement::raw_window_handle::HasWindowHandle;
//! # use casement::title_bar::*;
//! # use casement::ButtonId;
//! # struct MyTitleBar;
//! # impl TitleBar for MyTitleBar {
//! #     fn layout(&self) -> TitleBarLayout { TitleBarLayout::default() }
//! #     fn dispatch(&mut self, _: &ButtonId, _: ButtonEvent) {}
//! #     fn set_visual_state(&mut self, _: &ButtonId, _: MaximizeButtonVisualState) {}
//! #     fn set_maximize_icon(&mut self, _: MaximizeButtonIcon) {}
//! # }
//! # fn make_window() -> Box<dyn HasWindowHandle> { unimplemented!() }
//! # fn make_title_bar() -> MyTitleBar { MyTitleBar }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = platform_backend()?;
//! let window = make_window();
//! let mut chrome =
//!     WindowChrome::new(backend.clone(), &window, WindowChromeConfig::default(), make_title_bar())?;
//! # let _ = &mut chrome;
//! # Ok(())
//! # }
//! ```
//!
//! The host window must then pass every native message to
//! [`WindowChrome::handle_native_message`] before its default processing, and skip that
//! processing for messages reported as handled:
//!
//! - on Windows, every message of the window procedure as [`NativeEvent::Win32`];
//! - on macOS, the mouse events of the window's view as [`NativeEvent::AppKit`].
//!
//! It should also call [`WindowChrome::window_state_changed`] after maximizing, restoring or
//! minimizing the window, so the maximize button shows the right icon.
//!
//! # Threading
//!
//! Everything happens on the UI thread that owns the window. Nothing in casement locks, blocks
//! or caches window state: metrics, maximized and full-screen state are queried again for every
//! message, so windows are independent and nothing goes stale when the OS changes a window on
//! its own (snapping, moving it to another monitor).
//!
//! # Cargo Features
//!
//! casement provides the following Cargo features:
//!
//! * `serde`: Enables serialization/deserialization of the configuration and of the
//!   platform-independent result types.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use casement_core::{
    backend, capture, config, dpi, error, frame, hit_test, metrics, raw_window_handle, title_bar,
};

pub use crate::backend::{ChromeBackend, EventResponse, NativeEvent};
pub use crate::chrome::WindowChrome;
pub use crate::config::{ChromeFeatures, WindowChromeConfig};
pub use crate::error::ChromeError;
pub use crate::hit_test::{ButtonGeometry, ButtonId, HitRegion};
pub use crate::title_bar::TitleBar;
pub use crate::platform_impl::platform_backend;

mod chrome;
pub mod platform;
mod platform_impl;
