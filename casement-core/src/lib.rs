//! Base types for native window chrome.
//!
//! This crate contains the platform independent half of [`casement`]: the hit-test classifier,
//! the client-rect arithmetic used when a window is maximized, the capture-tracking proxy that
//! keeps a custom maximize button in sync while the OS owns the pointer, and the
//! [`ChromeBackend`] trait that each native backend implements.
//!
//! Nothing in here talks to the operating system. Backends answer the questions the OS asks
//! (through [`ChromeBackend::handle_event`]) by combining the live window state they query
//! with the pure functions found here.
//!
//! [`casement`]: https://docs.rs/casement
//! [`ChromeBackend`]: crate::backend::ChromeBackend
//! [`ChromeBackend::handle_event`]: crate::backend::ChromeBackend::handle_event

pub mod backend;
pub mod capture;
pub mod config;
pub mod error;
pub mod frame;
pub mod metrics;
pub mod title_bar;

pub use dpi;
pub use rwh_06 as raw_window_handle;
