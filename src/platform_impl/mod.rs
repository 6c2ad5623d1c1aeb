use std::rc::Rc;

use tracing::debug;

use crate::backend::ChromeBackend;
use crate::error::NotSupportedError;

#[cfg(windows_platform)]
mod windows {
    pub(crate) use casement_win32::Win32Backend as PlatformBackend;
    pub(crate) const NAME: &str = "win32";
}
#[cfg(macos_platform)]
mod macos {
    pub(crate) use casement_appkit::AppKitBackend as PlatformBackend;
    pub(crate) const NAME: &str = "appkit";
}

#[cfg(windows_platform)]
use windows as platform;
#[cfg(macos_platform)]
use macos as platform;

/// Construct the chrome backend for the platform the process runs on.
///
/// Call this once at startup and share the backend between windows; it holds no per-window
/// state.
///
/// # Errors
///
/// Fails with [`NotSupportedError`] on platforms without a backend. Nothing falls back to a
/// partially working chrome.
#[cfg(any(windows_platform, macos_platform))]
pub fn platform_backend() -> Result<Rc<dyn ChromeBackend>, NotSupportedError> {
    debug!(backend = platform::NAME, "selected chrome backend");
    Ok(Rc::new(platform::PlatformBackend::new()))
}

/// Construct the chrome backend for the platform the process runs on.
///
/// # Errors
///
/// Always fails: casement supports Windows and macOS only.
#[cfg(not(any(windows_platform, macos_platform)))]
pub fn platform_backend() -> Result<Rc<dyn ChromeBackend>, NotSupportedError> {
    debug!(os = std::env::consts::OS, "no chrome backend for this platform");
    Err(NotSupportedError::new("window chrome is only supported on Windows and macOS"))
}
