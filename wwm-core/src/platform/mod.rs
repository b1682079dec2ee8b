//! The seam between the binding and the OS windowing API.
//!
//! [`WindowApi`] mirrors the Win32 calls one-to-one.  Implementations never
//! report failure: like the underlying calls as used here, a bad handle
//! yields a no-op or a zeroed result.
//!
//! [`native`] returns the backend for the current target: [`win32`] on
//! Windows, [`unsupported`] elsewhere so that the workspace builds and the
//! platform-independent logic stays testable.

use crate::window::{WindowBounds, WindowHandle};

#[cfg(windows)]
pub mod win32;

#[cfg(not(windows))]
pub mod unsupported;

#[cfg(test)]
pub(crate) mod fake;

/// Window-management primitives, one method per Win32 call.
pub trait WindowApi: Send + Sync {
    /// `GetForegroundWindow`.
    fn foreground_window(&self) -> WindowHandle;

    /// `MoveWindow(.., bRepaint = TRUE)`.
    fn move_window(&self, window: WindowHandle, x: i32, y: i32, width: i32, height: i32);

    /// `GetWindowRect`; all zeroes when the call fails.
    fn window_rect(&self, window: WindowHandle) -> WindowBounds;

    /// `GetWindowTextW` into a 256-unit buffer.
    fn window_text(&self, window: WindowHandle) -> String;

    /// `ShowWindow`.
    fn show_window(&self, window: WindowHandle, command: i32);

    /// `SetWindowPos`.
    #[allow(clippy::too_many_arguments)]
    fn set_window_pos(
        &self,
        window: WindowHandle,
        insert_after: WindowHandle,
        x: i32,
        y: i32,
        cx: i32,
        cy: i32,
        flags: u32,
    );

    /// `SetWindowLongW`; returns the previous value.
    fn set_window_long(&self, window: WindowHandle, index: i32, value: i32) -> i32;

    /// `GetWindowLongW`.
    fn window_long(&self, window: WindowHandle, index: i32) -> i32;
}

/// Backend for the current target.
pub fn native() -> &'static dyn WindowApi {
    #[cfg(windows)]
    {
        static API: win32::Win32Api = win32::Win32Api;
        &API
    }
    #[cfg(not(windows))]
    {
        static API: unsupported::UnsupportedApi = unsupported::UnsupportedApi;
        &API
    }
}
