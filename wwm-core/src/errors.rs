//! Error types for `wwm_core`.
//!
//! The nine window operations only ever fail with
//! [`WindowManagerError::InvalidArgumentType`]; Win32 failures behind them are
//! absorbed.  The remaining variants belong to the supervised hook and the
//! [`Window`](crate::window::Window) helpers.  Host-language conversion lives
//! in the binding crates, keeping this crate PyO3-free.

use thiserror::Error;

/// Fixed message carried by [`WindowManagerError::InvalidArgumentType`].
pub const WRONG_ARGUMENTS: &str = "Wrong arguments";

/// Top-level error type for the `wwm_core` library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowManagerError {
    /// An argument was missing or was not a number (not callable, for the
    /// hook installer).  Raised before any OS call.
    #[error("Wrong arguments")]
    InvalidArgumentType,

    /// `SetWindowsHookExW` failed or the hook worker could not be started.
    #[error("HookInstallError: {0}")]
    HookInstall(String),

    /// The operation needs the Win32 windowing API.
    #[error("Unsupported: {0} requires Windows")]
    Unsupported(&'static str),

    /// Grid layout was requested before screen dimensions were set.
    #[error("screen dimensions not set, call set_screen_dimensions first")]
    MissingScreenDimensions,
}

/// Convert a `windows::core::Error` (Win32 failure) into a
/// `WindowManagerError::HookInstall`.
///
/// Only the hook machinery propagates Win32 errors; every other call site
/// absorbs them.
#[cfg(windows)]
impl From<windows::core::Error> for WindowManagerError {
    fn from(err: windows::core::Error) -> Self {
        WindowManagerError::HookInstall(format!("Win32 error: {err}"))
    }
}
