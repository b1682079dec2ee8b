//! The window operations as host bindings call them.
//!
//! Each function takes the raw host arguments, validates them with
//! [`int_args`], and only then forwards to the [`WindowApi`].  A validation
//! failure therefore never reaches the OS.  OS-level failures are absorbed by
//! the backend.  The ninth operation, the mouse-up hook, lives in
//! [`crate::hook`].

use crate::args::{int_args, Number};
use crate::errors::WindowManagerError;
use crate::platform::WindowApi;
use crate::window::{WindowBounds, WindowHandle};

/// Foreground window handle as a host integer.
pub fn get_active_window(api: &dyn WindowApi) -> i32 {
    api.foreground_window().to_host()
}

/// `(handle, x, y, width, height)`.
pub fn move_window(api: &dyn WindowApi, args: &[Option<Number>]) -> Result<(), WindowManagerError> {
    let [handle, x, y, width, height] = int_args(args)?;
    api.move_window(WindowHandle::from_host(handle), x, y, width, height);
    Ok(())
}

/// `(handle)`.
pub fn get_window_bounds(
    api: &dyn WindowApi,
    args: &[Option<Number>],
) -> Result<WindowBounds, WindowManagerError> {
    let [handle] = int_args(args)?;
    Ok(api.window_rect(WindowHandle::from_host(handle)))
}

/// `(handle)`.
pub fn get_window_title(
    api: &dyn WindowApi,
    args: &[Option<Number>],
) -> Result<String, WindowManagerError> {
    let [handle] = int_args(args)?;
    Ok(api.window_text(WindowHandle::from_host(handle)))
}

/// `(handle, show_command)`.
pub fn set_window_state(
    api: &dyn WindowApi,
    args: &[Option<Number>],
) -> Result<(), WindowManagerError> {
    let [handle, command] = int_args(args)?;
    api.show_window(WindowHandle::from_host(handle), command);
    Ok(())
}

/// `(handle, insert_after, x, y, cx, cy, flags)`.
pub fn set_window_pos(
    api: &dyn WindowApi,
    args: &[Option<Number>],
) -> Result<(), WindowManagerError> {
    let [handle, insert_after, x, y, cx, cy, flags] = int_args(args)?;
    api.set_window_pos(
        WindowHandle::from_host(handle),
        WindowHandle::from_host(insert_after),
        x,
        y,
        cx,
        cy,
        flags as u32,
    );
    Ok(())
}

/// `(handle, index, value)`.
pub fn set_window_long(
    api: &dyn WindowApi,
    args: &[Option<Number>],
) -> Result<(), WindowManagerError> {
    let [handle, index, value] = int_args(args)?;
    api.set_window_long(WindowHandle::from_host(handle), index, value);
    Ok(())
}

/// `(handle, index)`.
pub fn get_window_long(
    api: &dyn WindowApi,
    args: &[Option<Number>],
) -> Result<i32, WindowManagerError> {
    let [handle, index] = int_args(args)?;
    Ok(api.window_long(WindowHandle::from_host(handle), index))
}
