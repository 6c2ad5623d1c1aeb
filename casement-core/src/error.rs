//! Common error types.
//!
//! Only window construction and explicit configuration changes can fail. Everything reached
//! from the native message loop recovers locally and never returns one of these.

use std::{error, fmt};

/// A general error that may occur while setting up the chrome of a window.
#[derive(Debug)]
pub enum ChromeError {
    /// The operation is not supported by the backend.
    NotSupported(NotSupportedError),
    /// The OS cannot perform the operation.
    Os(OsError),
}

impl fmt::Display for ChromeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::NotSupported(err) => err.fmt(f),
            Self::Os(err) => err.fmt(f),
        }
    }
}

impl error::Error for ChromeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::NotSupported(err) => Some(err),
            Self::Os(err) => Some(err),
        }
    }
}

impl From<NotSupportedError> for ChromeError {
    fn from(value: NotSupportedError) -> Self {
        Self::NotSupported(value)
    }
}

impl From<OsError> for ChromeError {
    fn from(value: OsError) -> Self {
        Self::Os(value)
    }
}

/// The error type for when the requested operation is not supported by the backend.
#[derive(Clone)]
pub struct NotSupportedError {
    reason: &'static str,
}

impl NotSupportedError {
    /// Create a new [`NotSupportedError`].
    #[inline]
    pub fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// Why the operation is not supported.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

impl fmt::Debug for NotSupportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("NotSupportedError").field("reason", &self.reason).finish()
    }
}

impl fmt::Display for NotSupportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.pad(self.reason)
    }
}

impl error::Error for NotSupportedError {}

/// The error type for when the OS cannot perform the requested operation.
///
/// Backends build it through their `os_error!` macro, which records where it was raised.
#[derive(Debug)]
pub struct OsError {
    line: u32,
    file: &'static str,
    error: Box<dyn error::Error + Send + Sync + 'static>,
}

impl OsError {
    pub fn new(
        line: u32,
        file: &'static str,
        error: impl Into<Box<dyn error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self { line, file, error: error.into() }
    }
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.pad(&format!("os error at {}:{}: {}", self.file, self.line, self.error))
    }
}

impl error::Error for OsError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}
