//! Contains traits with platform-specific methods in them.
//!
//! Contains the follow OS-specific modules:
//!
//!  - `macos`
//!  - `windows`
//!
//! However only the module corresponding to the platform you're compiling to will be available.

#[cfg(macos_platform)]
pub mod macos;
#[cfg(windows_platform)]
pub mod windows;
